use crate::context::Context;
use crate::fs::error::FsError;

/// mv s1 s2
/// Moves or renames a file. The destination may be an existing directory
/// (the file keeps its basename), an existing file (which is overwritten)
/// or a new name inside an existing directory.
///
/// Outputs: OK | FILE NOT FOUND | PATH NOT FOUND
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

    match fs.mv(argv[0], argv[1]) {
        Ok(()) => println!("OK"),
        Err(FsError::NotFile) => println!("FILE NOT FOUND"),
        Err(_) => println!("PATH NOT FOUND"),
    }
}
