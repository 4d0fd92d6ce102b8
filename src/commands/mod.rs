use crate::context::Context;
use std::collections::HashMap;

type Handler = fn(&[&str], &mut Context);

pub struct Registry {
    pub map: HashMap<&'static str, Handler>,
}

impl Registry {
    pub fn new() -> Self {
        let mut map = HashMap::new();
        map.insert("exit", crate::commands::exit::handle_argv as Handler);
        map.insert("cd", crate::commands::cd::handle_argv as Handler);
        map.insert("pwd", crate::commands::pwd::handle_argv as Handler);
        map.insert("mkdir", crate::commands::mkdir::handle_argv as Handler);
        map.insert("rmdir", crate::commands::rmdir::handle_argv as Handler);
        map.insert("ls", crate::commands::ls::handle_argv as Handler);
        map.insert("cat", crate::commands::cat::handle_argv as Handler);
        map.insert("rm", crate::commands::rm::handle_argv as Handler);
        map.insert("cp", crate::commands::cp::handle_argv as Handler);
        map.insert("mv", crate::commands::mv::handle_argv as Handler);
        map.insert("info", crate::commands::info::handle_argv as Handler);
        map.insert("in", crate::commands::import::handle_argv as Handler);
        map.insert("out", crate::commands::export::handle_argv as Handler);
        map.insert("tree", crate::commands::tree::handle_argv as Handler);
        map.insert("load", crate::commands::load::handle_argv as Handler);

        Self { map }
    }

    pub fn dispatch(&self, name: &str, argv: &[&str], context: &mut Context) {
        if let Some(handler) = self.map.get(name) {
            handler(argv, context);
        } else {
            println!("invalid command");
        }
    }

    /// Parses one line of input and dispatches it. Tokens are separated by
    /// whitespace, empty lines do nothing, `#` starts a comment. Both the
    /// interactive loop and `load` scripts go through here, so a script
    /// behaves exactly like typed input.
    pub fn dispatch_line(&self, line: &str, context: &mut Context) {
        let mut tokens = line.split_whitespace();
        let cmd = match tokens.next() {
            Some(c) => c,
            None => return,
        };
        if cmd.starts_with('#') {
            return;
        }
        let argv: Vec<&str> = tokens.collect();
        self.dispatch(cmd, &argv, context);
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

pub mod cat;
pub mod cd;
pub mod cp;
pub mod exit;
pub mod export;
pub mod import;
pub mod info;
pub mod load;
pub mod ls;
pub mod mkdir;
pub mod mv;
pub mod pwd;
pub mod rm;
pub mod rmdir;
pub mod tree;
