use crate::context::Context;
use crate::fs::error::FsError;

/// in host.bin
/// Imports a host file into the working directory under its basename.
///
/// Outputs:
///   OK               - imported
///   FILE NOT FOUND   - host file cannot be opened
///   EXIST            - the name is already taken in the working directory
///   NAME TOO LONG    - basename does not fit a directory entry
///   NO FREE CLUSTERS - image is full
///   PATH NOT FOUND   - anything else (filesystem not open, bad arguments)
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

    match fs.import(argv[0]) {
        Ok(()) => println!("OK"),
        Err(FsError::NotFound) => println!("FILE NOT FOUND"),
        Err(FsError::AlreadyExists) => println!("EXIST"),
        Err(FsError::NameTooLong) => println!("NAME TOO LONG"),
        Err(FsError::NoFreeClusters) => println!("NO FREE CLUSTERS"),
        Err(_) => println!("PATH NOT FOUND"),
    }
}
