use crate::context::Context;

/// rm s1
/// Outputs: OK | FILE NOT FOUND
pub fn handle_argv(argv: &[&str], context: &mut Context) {
    if argv.len() != 1 {
        println!("FILE NOT FOUND");
        return;
    }

    let fs = match context.fs_mut() {
        Ok(fs) => fs,
        Err(_) => {
            println!("FILE NOT FOUND");
            return;
        }
    };

    match fs.rm(argv[0]) {
        Ok(()) => println!("OK"),
        Err(_) => println!("FILE NOT FOUND"),
    }
}
