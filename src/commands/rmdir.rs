use crate::context::Context;
use crate::fs::error::FsError;

/// rmdir a1
/// Outputs: OK | PATH NOT FOUND | NOT EMPTY
pub fn handle_argv(argv: &[&str], context: &mut Context) {
    if argv.len() != 1 {
        println!("PATH NOT FOUND");
        return;
    }

    let fs = match context.fs_mut() {
        Ok(fs) => fs,
        Err(_) => {
            println!("PATH NOT FOUND");
            return;
        }
    };

    match fs.rmdir(argv[0]) {
        Ok(()) => println!("OK"),
        Err(FsError::NotEmpty) => println!("NOT EMPTY"),
        Err(_) => println!("PATH NOT FOUND"),
    }
}
