use std::fs;
use std::io::{stderr, stdout, BufWriter, Write};
use std::process::exit;

use anyhow::{anyhow, Context, Result};
use serde_json::Value;
use tracing::level_filters::LevelFilter;
use tracing::{error, info};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use operation_codec::{decode_operation_base64, encode_operation_base64, OperationOptions};

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 3 {
        eprintln!("Usage: operation-codec [encode|decode] [input] [log_level:optional] > [output]");
        eprintln!("  encode: input is a JSON options object or an array of them, one base64 operation is written per line");
        eprintln!("  decode: input holds one base64 operation per line, one JSON options object is written per line");
        eprintln!("Available log levels: error, warn, info, debug, trace (default: error)");
        exit(1);
    }

    let command = args[1].as_str();
    let path = &args[2];
    let log_level = args.get(3)
        .map(|s| parse_log_level(s)).unwrap_or_else(|| LevelFilter::ERROR);

    setup_logging(log_level);

    let input = fs::read_to_string(path).with_context(|| format!("Error reading input at path: {path}"))?;

    let result = match command {
        "encode" => encode(&input),
        "decode" => decode(&input),
        other => Err(anyhow!("Unknown command '{other}', expected 'encode' or 'decode'"))
    };

    if let Err(error) = result {
        error!("{error:#}");
        exit(1);
    }

    Ok(())
}

fn encode(input: &str) -> Result<()> {
    let records = match serde_json::from_str::<Value>(input)? {
        Value::Array(records) => records,
        record => vec![record]
    };

    let mut output = BufWriter::new(stdout().lock());

    for (index, record) in records.into_iter().enumerate() {
        let options: OperationOptions = serde_json::from_value(record)
            .with_context(|| format!("Record [{index}] is not a valid operation"))?;

        let encoded = encode_operation_base64(&options)
            .with_context(|| format!("Record [{index}] could not be encoded"))?;

        writeln!(output, "{encoded}")?;
    }

    output.flush()?;
    info!("Encoded operations");

    Ok(())
}

fn decode(input: &str) -> Result<()> {
    let mut output = BufWriter::new(stdout().lock());

    for (index, line) in input.lines().enumerate().filter(|(_, line)| !line.trim().is_empty()) {
        let options = decode_operation_base64(line)
            .with_context(|| format!("Line [{}] could not be decoded", index + 1))?;

        writeln!(output, "{}", serde_json::to_string(&options)?)?;
    }

    output.flush()?;
    info!("Decoded operations");

    Ok(())
}

fn parse_log_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        _ => {
            eprintln!("Invalid log level '{}', defaulting to 'error'", level);
            LevelFilter::ERROR
        }
    }
}

fn setup_logging(level: LevelFilter) {
    //NOTE: stdout carries the encoded/decoded records, so logs go to stderr
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}
