use crate::context::Context;
use crate::fs::error::FsError;

/// cp s1 s2
/// Copies a file; destination resolution works like `mv`.
///
/// Outputs: OK | FILE NOT FOUND | EXIST | NO FREE CLUSTERS | PATH NOT FOUND
pub fn handle_argv(argv: &[&str], context: &mut Context) {
    if argv.len() != 2 {
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

    match fs.cp(argv[0], argv[1]) {
        Ok(()) => println!("OK"),
        Err(FsError::NotFile) => println!("FILE NOT FOUND"),
        Err(FsError::AlreadyExists) => println!("EXIST"),
        Err(FsError::NoFreeClusters) => println!("NO FREE CLUSTERS"),
        Err(_) => println!("PATH NOT FOUND"),
    }
}
