use crate::context::Context;

// pwd: prints the absolute path of the working directory. The path is
// rebuilt on demand by climbing the parent links, nothing is stored during
// cd.
pub fn handle_argv(_argv: &[&str], context: &mut Context) {
    let fs = match context.fs_mut() {
        Ok(fs) => fs,
        Err(_) => {
            println!("/");
            return;
        }
    };

    match fs.pwd() {
        Ok(path) => println!("{}", path),
        Err(_) => println!("/"),
    }
}
