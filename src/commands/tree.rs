use crate::context::Context;

/// tree [path]
/// Depth-first print of a directory subtree; defaults to the working
/// directory. Outputs on failure: PATH NOT FOUND
pub fn handle_argv(argv: &[&str], context: &mut Context) {
    let target = match argv.len() {
        0 => ".",
        1 => argv[0],
        _ => {
            println!("PATH NOT FOUND");
            return;
        }
    };

    let fs = match context.fs_mut() {
        Ok(fs) => fs,
        Err(_) => {
            println!("PATH NOT FOUND");
            return;
        }
    };

    match fs.tree(target) {
        Ok(rendered) => print!("{}", rendered),
        Err(_) => println!("PATH NOT FOUND"),
    }
}
