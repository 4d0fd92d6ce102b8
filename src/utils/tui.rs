use crate::commands::Registry;
use crate::context::Context;
use colored::Colorize;
use std::io::{self, Write};

fn write_greet() {
    println!(
        "{} - {}",
        "minifat".green(),
        env!("CARGO_PKG_VERSION").yellow()
    );
}

fn write_prompt(context: &mut Context) {
    let cwd = match context.fs_mut() {
        Ok(fs) => fs.pwd().unwrap_or_else(|_| "/".to_string()),
        Err(_) => "/".to_string(),
    };
    print!("{}> ", cwd);
    let _ = io::stdout().flush();
}

/// The interactive loop: prompt, read a line, split on whitespace, dispatch.
/// EOF ends the loop; `exit` terminates the process from its handler.
pub fn handle_app_loop(context: &mut Context) {
    write_greet();
    let registry = Registry::new();
    let stdin = io::stdin();

    loop {
        write_prompt(context);
        let mut line = String::new();
        match stdin.read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }
        registry.dispatch_line(&line, context);
    }
}
