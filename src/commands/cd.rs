use crate::context::Context;

/// cd a1
/// Outputs: OK | PATH NOT FOUND
///
/// With no argument the working directory changes to the root. Supports
/// absolute and relative paths including `.` and `..`.
pub fn handle_argv(argv: &[&str], context: &mut Context) {
    let target = match argv.len() {
        0 => "/",
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

    match fs.cd(target) {
        Ok(()) => println!("OK"),
        Err(_) => println!("PATH NOT FOUND"),
    }
}
