//! # Sat Packetizer
//!
//! Packetizes a binary input stream for an amateur satellite link.
//!
//! Each input chunk is wrapped in an AX.25 UI frame, protected with FX.25
//! Reed-Solomon(255,223) forward error correction, and emitted as a KISS
//! frame to a file or a serial TNC. The whole pipeline runs in memory;
//! nothing is staged on disk between encoding stages.

use anyhow::{Context, Result};
use tracing::{info, warn};
use tracing_subscriber;

mod ax25;
mod config;
mod error;
mod fx25;
mod kiss;
mod pipeline;
mod sink;

use ax25::protocol::Address;
use config::Config;
use pipeline::Packetizer;
use sink::{FileSink, SerialSink};

/// Configuration file used when no path is given on the command line
const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Main entry point for the packetizer
///
/// # Control Flow
///
/// 1. **Initialization**
///    - Set up logging with tracing subscriber
///    - Load and validate the configuration
///    - Parse the station addresses and initialize the FEC encoder
///      (a failed initialization aborts before any chunk is processed)
///
/// 2. **Main Loop**
///    - Read the input in chunks, encode each through the three stages,
///      and write the resulting KISS frames in input order
///    - Skipped chunks are counted and logged, never silently dropped
///
/// 3. **Completion**
///    - Flush the sink and report packet/byte totals
///
/// # Errors
///
/// Returns error if:
/// - Configuration cannot be loaded or is invalid
/// - A station address cannot be represented in AX.25 format
/// - The input file or output destination cannot be opened
/// - The FEC encoder fails to initialize
#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into())
        )
        .init();

    info!("sat-packetizer v{} starting...", env!("CARGO_PKG_VERSION"));

    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());
    let config = Config::load(&config_path)
        .with_context(|| format!("failed to load configuration from {}", config_path))?;

    // Malformed addresses are rejected here, before the pipeline starts
    let source_addr = Address::parse(&config.station.source)?;
    let dest_addr = Address::parse(&config.station.destination)?;

    info!("  Source: {}", source_addr);
    info!("  Destination: {}", dest_addr);
    info!("  Input: {}", config.io.input);

    let mut packetizer = Packetizer::new(
        dest_addr,
        source_addr,
        config.link.kiss_port,
        config.link.chunk_size,
    )?;

    let mut input = tokio::fs::File::open(&config.io.input)
        .await
        .with_context(|| format!("failed to open input file {}", config.io.input))?;

    let stats = if config.io.serial_port.is_empty() {
        info!("  Output: {}", config.io.output);
        let mut output = FileSink::create(&config.io.output)
            .await
            .with_context(|| format!("failed to create output file {}", config.io.output))?;
        packetizer.run(&mut input, &mut output).await?
    } else {
        let mut output = SerialSink::open(&config.io.serial_port, config.io.baud_rate)
            .with_context(|| format!("failed to open TNC at {}", config.io.serial_port))?;
        info!("  Output: {} ({} baud)", output.device_path(), config.io.baud_rate);
        packetizer.run(&mut input, &mut output).await?
    };

    info!(
        "Successfully created {} packet(s) ({} bytes in, {} bytes out)",
        stats.packets_sent, stats.bytes_in, stats.bytes_out
    );

    if stats.chunks_skipped > 0 {
        warn!("{} chunk(s) were skipped", stats.chunks_skipped);
    }

    Ok(())
}
