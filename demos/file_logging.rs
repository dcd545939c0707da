//! File logging example
//!
//! Demonstrates logging to a file destination and reading the records back.
//!
//! Run with: cargo run --example file_logging

use proxy_logger::prelude::*;

fn main() -> Result<()> {
    println!("=== Proxy Logger - File Logging Example ===\n");

    let log_path = std::env::temp_dir().join("proxy_logger_demo.log");
    let destination = log_path.to_string_lossy().to_string();

    let logger = Logger::new(
        &destination,
        "debug",
        "json",
        Fields::new().with_field("type", "system"),
    )?;

    println!("Writing records to: {}", destination);

    for i in 0..10 {
        logger.infof(format_args!("Request {} handled", i));
    }
    logger.debug("Debug information");
    logger.warn("Certificate expires in 7 days");
    logger.error("Upstream unreachable");

    logger.shutdown()?;

    println!("Total records written: {}", logger.metrics().total_logged());

    let content = std::fs::read_to_string(&log_path)?;
    println!("\nLast records in {}:", destination);
    for line in content.lines().rev().take(3).collect::<Vec<_>>().into_iter().rev() {
        println!("  {}", line);
    }

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
