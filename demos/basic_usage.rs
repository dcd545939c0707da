//! Basic logger usage example
//!
//! Demonstrates construction, leveled emission, bound and scoped fields,
//! and the text format.
//!
//! Run with: cargo run --example basic_usage

use proxy_logger::prelude::*;

fn main() -> Result<()> {
    println!("=== Proxy Logger - Basic Usage Example ===\n");

    let fields = Fields::new().with_field("type", "system");

    println!("1. JSON records at different levels (minimum: trace):");
    let logger = Logger::new("stdout", "trace", "json", fields.clone())?;
    logger.trace("This is a trace message");
    logger.debug("This is a debug message");
    logger.info("This is an info message");
    logger.warn("This is a warning message");
    logger.error("This is an error message");

    println!("\n2. Formatted and joined messages:");
    logger.infof(format_args!("listening on {}:{}", "0.0.0.0", 443));
    logger.infoln(["certificate", "store", "loaded"]);

    println!("\n3. Scoped fields:");
    let upstream = logger.with_field("upstream", "10.0.0.7:80");
    upstream.warn("upstream slow");
    upstream.with_field("attempt", 2).error("upstream timeout");

    println!("\n4. Text format (minimum: info, trace and debug won't show):");
    let text = Logger::new("", "", "text", fields)?;
    text.trace("Trace message (hidden)");
    text.debug("Debug message (hidden)");
    text.info("Info message (visible)");
    text.with_field("result", "denied").warn("Warning message (visible)");

    println!("\n5. Invalid configuration is rejected:");
    if let Err(e) = Logger::new("stdout", "verbose", "json", Fields::new()) {
        println!("   {}", e);
    }

    logger.shutdown()?;
    text.shutdown()?;

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
