use crate::context::Context;

pub fn handle_argv(_argv: &[&str], context: &mut Context) {
    context.close_fs();
    std::process::exit(0)
}
