use crate::context::Context;
use crate::fs::filesystem::Listing;
use crate::fs::layout::DirEntry;

/// Standalone `ls` command.
///
/// Usage:
///   ls            -> lists current directory
///   ls <path>     -> lists specified directory or prints the single entry
///                    row of a file
///
/// Each row shows the entry kind (`[+]` directory, `[-]` file), its size in
/// bytes, its start cluster and its name. On invalid path: PATH NOT FOUND.
pub fn handle_argv(argv: &[&str], context: &mut Context) {
    let target = match argv.len() {
        0 => ".",
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

    match fs.list(target) {
        Ok(Listing::Directory(dir)) => {
            for entry in &dir.entries {
                print_entry(entry);
            }
        }
        Ok(Listing::File(entry)) => print_entry(&entry),
        Err(_) => println!("PATH NOT FOUND"),
    }
}

fn print_entry(entry: &DirEntry) {
    let kind = if entry.directory { "[+]" } else { "[-]" };
    println!(
        "{} {:>10} {:>8} {}",
        kind,
        entry.size,
        entry.start_cluster,
        entry.name_str()
    );
}
