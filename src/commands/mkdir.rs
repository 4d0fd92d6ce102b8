use crate::context::Context;
use crate::fs::error::FsError;

/// mkdir a1
/// Outputs: OK | PATH NOT FOUND | EXIST | NAME TOO LONG | NO FREE CLUSTERS
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

    match fs.mkdir(argv[0]) {
        Ok(()) => println!("OK"),
        Err(FsError::AlreadyExists) => println!("EXIST"),
        Err(FsError::NameTooLong) => println!("NAME TOO LONG"),
        Err(FsError::NoFreeClusters) => println!("NO FREE CLUSTERS"),
        Err(_) => println!("PATH NOT FOUND"),
    }
}
