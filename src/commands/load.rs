use crate::commands::Registry;
use crate::context::Context;

/// load s1
/// Runs a command script from a host file through the same line dispatch as
/// the interactive loop, so `#` comments and blank lines are allowed and
/// every command prints its normal output. Scripts may `load` further
/// scripts.
///
/// Outputs: OK | FILE NOT FOUND
pub fn handle_argv(argv: &[&str], context: &mut Context) {
    if argv.len() != 1 {
        println!("FILE NOT FOUND");
        return;
    }

    let script = match std::fs::read_to_string(argv[0]) {
        Ok(s) => s,
        Err(_) => {
            println!("FILE NOT FOUND");
            return;
        }
    };

    let registry = Registry::new();
    for line in script.lines() {
        registry.dispatch_line(line, context);
    }

    println!("OK");
}
