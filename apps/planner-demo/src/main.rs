//! planner-demo: walks the registry through its basic flow.
//!
//! Creates one client and one event for that client, looks both back up by
//! name and prints every field. A failed lookup is fatal: the error is logged,
//! printed to stderr, and the process exits with status 1.
//!
//! Run:
//! ```bash
//! cargo run -p planner-demo
//!
//! # JSON records and JSON logs
//! OUTPUT_FORMAT=json LOG_FORMAT=json RUST_LOG=debug cargo run -p planner-demo
//! ```
//!
//! Configuration: see `config.rs`.

mod config;

use std::fmt::Debug;
use std::io::{self, Write};
use std::process;

use anyhow::Context;
use planner_domain::{Client, Event, Registry};
use serde::Serialize;
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::{Config, LogFormat, OutputFormat};

fn init_tracing(cfg: &Config) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // Logs go to stderr; stdout carries the records.
    let registry = tracing_subscriber::registry().with(env_filter);
    match cfg.log_format {
        LogFormat::Json => {
            registry
                .with(
                    fmt::layer()
                        .json()
                        .with_target(true)
                        .with_timer(fmt::time::SystemTime)
                        .with_writer(io::stderr),
                )
                .init();
        }
        LogFormat::Pretty => {
            registry
                .with(fmt::layer().pretty().with_target(true).with_writer(io::stderr))
                .init();
        }
    }
}

/// Write one record in the configured format, followed by a newline.
fn render<T, W>(out: &mut W, format: OutputFormat, record: &T) -> anyhow::Result<()>
where
    T: Serialize + Debug,
    W: Write,
{
    match format {
        OutputFormat::Debug => writeln!(out, "{:#?}", record)?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, record)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

fn run<W: Write>(cfg: &Config, out: &mut W) -> anyhow::Result<()> {
    let mut registry = Registry::new();

    let client = Client::new("John Doe", "jdoe@example.com", "1234567890");
    registry.create_client(client.clone());

    // Check that the client was stored.
    let found = registry
        .get_client("John Doe")
        .context("client lookup failed")?;
    info!(client = %found.name, "client found");
    render(out, cfg.output_format, &found)?;

    let event = Event::new(client, "Company Holiday Party", "Corporate")
        .with_description("Annual holiday party for the employees of Acme Inc.")
        .with_times("December 24th, 2019 8pm", "December 25th, 2019 12am")
        .with_location("Acme Inc. HQ");
    registry.create_event(event);

    let found = registry
        .get_event("Company Holiday Party")
        .context("event lookup failed")?;
    info!(event = %found.name, client = %found.client.name, "event found");
    render(out, cfg.output_format, &found)?;

    Ok(())
}

fn main() {
    let cfg = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(1);
        }
    };
    init_tracing(&cfg);
    let about = planner_domain::about();
    info!(%about, "starting");

    let stdout = io::stdout();
    if let Err(e) = run(&cfg, &mut stdout.lock()) {
        let message = format!("{:#}", e);
        error!(error = %message, "demo failed");
        eprintln!("error: {}", message);
        process::exit(1);
    }
}
