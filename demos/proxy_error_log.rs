//! Reverse proxy error log example
//!
//! Demonstrates logging completed TLS requests and routing a server's
//! error log through the classifying writer.
//!
//! Run with: cargo run --example proxy_error_log

use proxy_logger::access::Classifier;
use proxy_logger::prelude::*;
use std::io::Write;
use std::sync::Arc;

fn main() -> Result<()> {
    println!("=== Proxy Logger - Error Log Example ===\n");

    let logger = Arc::new(Logger::new(
        "stdout",
        "info",
        "json",
        Fields::new().with_field("type", "system"),
    )?);

    println!("1. Completed requests:");
    let events = [
        ConnectionEvent::new("203.0.113.9:51544")
            .with_server_name("api.example.com")
            .with_version(0x0304)
            .with_handshake_complete(true)
            .with_cipher_suite(0x1301),
        ConnectionEvent::new("198.51.100.20:40112")
            .with_server_name("www.example.com")
            .with_version(0x0303)
            .with_handshake_complete(true)
            .with_did_resume(true)
            .with_cipher_suite(0xc02f),
    ];
    for event in &events {
        logger.log_request(event);
    }

    println!("\n2. Error log lines from the HTTP stack:");
    // The host hands this to its server as a 'static error sink
    let mut error_log: Box<dyn Write + Send> = Box::new(logger.shared_writer());
    for event in &events {
        error_log.write_all(format_request_line(event, &IanaCipherSuites).as_bytes())?;
    }
    error_log.write_all(b"http: TLS handshake error from 192.0.2.1:3311: remote error: tls: unknown certificate authority\n")?;
    error_log.write_all(b"http: proxy error: dial tcp 10.0.0.7:80: connect: connection refused\n")?;

    println!("\n3. Strict marker matching:");
    let mut strict = logger.writer().with_classifier(Classifier::trailing_suffix());
    strict.write_all(b"probe reported ,success ratio below threshold\n")?;

    let metrics = logger.metrics();
    println!(
        "\nOutcomes: {} success, {} denied",
        metrics.success_outcomes(),
        metrics.denied_outcomes()
    );

    logger.shutdown()?;

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
