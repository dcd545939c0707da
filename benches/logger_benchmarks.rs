//! Criterion benchmarks for proxy_logger

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use proxy_logger::access::Classifier;
use proxy_logger::prelude::*;
use std::io::Write;
use std::sync::Arc;

fn sink_logger(level: LogLevel, format: OutputFormat) -> Logger {
    Logger::builder()
        .min_level(level)
        .output_format(format)
        .field("type", "system")
        .appender(WriterAppender::new(std::io::sink()))
        .build()
}

fn sample_event() -> ConnectionEvent {
    ConnectionEvent::new("203.0.113.9:51544")
        .with_server_name("api.example.com")
        .with_version(0x0304)
        .with_handshake_complete(true)
        .with_cipher_suite(0x1301)
}

// ============================================================================
// Logger Construction Benchmarks
// ============================================================================

fn bench_logger_creation(c: &mut Criterion) {
    let mut group = c.benchmark_group("logger_creation");
    group.throughput(Throughput::Elements(1));

    group.bench_function("new_stdout", |b| {
        b.iter(|| {
            let logger = Logger::new("stdout", "info", "json", Fields::new());
            black_box(logger)
        });
    });

    group.bench_function("builder", |b| {
        b.iter(|| {
            let logger = sink_logger(LogLevel::Info, OutputFormat::Json);
            black_box(logger)
        });
    });

    group.finish();
}

// ============================================================================
// Emission Benchmarks
// ============================================================================

fn bench_emission(c: &mut Criterion) {
    let mut group = c.benchmark_group("emission");
    group.throughput(Throughput::Elements(1));

    let json = sink_logger(LogLevel::Info, OutputFormat::Json);
    let text = sink_logger(LogLevel::Info, OutputFormat::Text);

    group.bench_function("json_info", |b| {
        b.iter(|| json.info(black_box("upstream connection established")));
    });

    group.bench_function("text_info", |b| {
        b.iter(|| text.info(black_box("upstream connection established")));
    });

    group.bench_function("json_with_fields", |b| {
        b.iter(|| {
            json.with_field("upstream", "10.0.0.7:80")
                .with_field("attempt", 2)
                .warn(black_box("upstream slow"))
        });
    });

    group.bench_function("json_formatted", |b| {
        b.iter(|| json.infof(format_args!("served {} bytes in {} ms", black_box(4096), 12)));
    });

    group.bench_function("filtered_debug", |b| {
        b.iter(|| json.debug(black_box("never rendered")));
    });

    group.finish();
}

// ============================================================================
// Request Event Benchmarks
// ============================================================================

fn bench_request_events(c: &mut Criterion) {
    let mut group = c.benchmark_group("request_events");
    group.throughput(Throughput::Elements(1));

    let logger = sink_logger(LogLevel::Info, OutputFormat::Json);
    let event = sample_event();

    group.bench_function("format_request_line", |b| {
        b.iter(|| format_request_line(black_box(&event), &IanaCipherSuites));
    });

    group.bench_function("log_request", |b| {
        b.iter(|| logger.log_request(black_box(&event)));
    });

    group.bench_function("tls_version_name", |b| {
        b.iter(|| tls_version_name(black_box(0x0303)));
    });

    group.finish();
}

// ============================================================================
// Error Stream Benchmarks
// ============================================================================

fn bench_error_stream(c: &mut Criterion) {
    let mut group = c.benchmark_group("error_stream");

    let success_line = format_request_line(&sample_event(), &IanaCipherSuites);
    let denied_line = "http: TLS handshake error from 203.0.113.9:51544: remote error: tls: bad certificate\n";

    group.bench_function("classify_success", |b| {
        b.iter(|| classify(black_box(&success_line)));
    });

    group.bench_function("classify_denied", |b| {
        b.iter(|| classify(black_box(denied_line)));
    });

    group.bench_function("classify_trailing_suffix", |b| {
        let classifier = Classifier::trailing_suffix();
        b.iter(|| classifier.classify(black_box(&success_line)).1);
    });

    let logger = sink_logger(LogLevel::Info, OutputFormat::Json);
    group.throughput(Throughput::Bytes(denied_line.len() as u64));
    group.bench_function("writer_write", |b| {
        let mut writer = logger.writer();
        b.iter(|| writer.write(black_box(denied_line.as_bytes())));
    });

    group.finish();
}

// ============================================================================
// Concurrent Emission Benchmarks
// ============================================================================

fn bench_concurrent_emission(c: &mut Criterion) {
    let mut group = c.benchmark_group("concurrent_emission");

    for threads in [2usize, 4, 8] {
        group.throughput(Throughput::Elements((threads * 100) as u64));
        group.bench_function(format!("{}_threads", threads), |b| {
            let logger = Arc::new(sink_logger(LogLevel::Info, OutputFormat::Json));
            b.iter(|| {
                let handles: Vec<_> = (0..threads)
                    .map(|_| {
                        let logger = Arc::clone(&logger);
                        std::thread::spawn(move || {
                            for _ in 0..100 {
                                logger.info("concurrent record");
                            }
                        })
                    })
                    .collect();
                for handle in handles {
                    let _ = handle.join();
                }
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_logger_creation,
    bench_emission,
    bench_request_events,
    bench_error_stream,
    bench_concurrent_emission,
);
criterion_main!(benches);
