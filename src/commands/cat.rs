use crate::context::Context;
use std::io::{self, Write};

/// cat s1
/// Prints the file content to stdout. Errors: FILE NOT FOUND
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

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match fs.cat(argv[0], &mut out) {
        Ok(()) => {
            let _ = out.flush();
        }
        Err(_) => println!("FILE NOT FOUND"),
    }
}
