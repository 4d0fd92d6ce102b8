use minifat::context::Context;
use minifat::utils::{arg_man, tui};

fn main() {
    let image_path = arg_man::handle_prog_args();

    let mut context = Context::new();
    if let Err(e) = context.open_fs(&image_path) {
        eprintln!("cannot mount '{}': {}", image_path, e);
        std::process::exit(1);
    }

    tui::handle_app_loop(&mut context);
}
