use crate::fs::consts::DISK_FILE_NAME;
use std::env;

/// Handles program arguments and returns the image path to mount:
/// `minifat [image-path]`, defaulting to `disk.dat`.
pub fn handle_prog_args() -> String {
    let args: Vec<String> = env::args().collect();

    for arg in &args[1..] {
        if arg == "-h" || arg == "--help" {
            println!("usage: {} [image-path]", args[0]);
            println!();
            println!("Opens the disk image (default: {DISK_FILE_NAME}), creating");
            println!("and formatting it when it does not exist yet.");
            std::process::exit(0);
        }
    }

    args.get(1)
        .cloned()
        .unwrap_or_else(|| DISK_FILE_NAME.to_string())
}
