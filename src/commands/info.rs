use crate::context::Context;

/// info
/// Prints capacity statistics of the mounted image.
pub fn handle_argv(_argv: &[&str], context: &mut Context) {
    let fs = match context.fs_mut() {
        Ok(fs) => fs,
        Err(_) => {
            println!("PATH NOT FOUND");
            return;
        }
    };

    let stats = fs.stats();
    println!("total clusters: {}", stats.cluster_count);
    println!("free clusters:  {}", stats.free_clusters);
    println!("cluster size:   {} B", stats.cluster_size);
    println!("capacity:       {} B", stats.total_bytes());
    println!(
        "free:           {} B ({:.1} %)",
        stats.free_bytes(),
        stats.free_percent()
    );
}
