//! Statistics reporting.

use console::style;

use crate::download::RunStats;

/// Format a byte count with a binary unit.
pub fn format_bytes(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["B", "KiB", "MiB", "GiB"];

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    if unit == 0 {
        format!("{} {}", bytes, UNITS[0])
    } else {
        format!("{:.1} {}", value, UNITS[unit])
    }
}

/// Print statistics for the whole run.
pub fn print_run_stats(stats: &RunStats) {
    println!();
    println!("{}", style("═".repeat(50)).dim());
    println!("{}", style("Statistics:").bold());
    println!(
        "  Videos:   {}/{} downloaded",
        style(stats.videos_downloaded).green(),
        stats.videos_planned
    );
    println!("  Segments: {}", stats.segments_written);
    println!("  Size:     {}", format_bytes(stats.bytes_written));
    for file in &stats.files {
        println!("  {}", style(file.display()).dim());
    }
    println!("{}", style("═".repeat(50)).dim());
}
