use crate::context::Context;
use crate::fs::error::FsError;

/// out s1
/// Exports a filesystem file into the host working directory, keeping its
/// basename.
///
/// Outputs: OK | FILE NOT FOUND | CANNOT CREATE FILE
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

    match fs.export(argv[0]) {
        Ok(_) => println!("OK"),
        Err(FsError::Io(_)) => println!("CANNOT CREATE FILE"),
        Err(_) => println!("FILE NOT FOUND"),
    }
}
