//! # Packetization Pipeline
//!
//! Sequences the three encoding stages per input chunk:
//! AX.25 UI frame -> FX.25 codeword -> KISS frame.
//!
//! Chunks are fully independent; a failed chunk is skipped and counted, never
//! aborting the run. Only a failed FEC initialization is fatal, before any
//! chunk is processed.

use tokio::io::{AsyncRead, AsyncReadExt};
use tracing::{debug, warn};

use crate::ax25::frame::build_ui_frame;
use crate::ax25::protocol::Address;
use crate::error::Result;
use crate::fx25::encoder::Fx25Encoder;
use crate::kiss;
use crate::sink::FrameSink;

/// Pipeline lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineState {
    Running,
    Stopped,
}

/// Counters for one pipeline run
///
/// `chunks_skipped` makes per-chunk failures observable to the caller, so
/// data loss is never silent.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunStats {
    pub packets_sent: u64,
    pub chunks_skipped: u64,
    pub bytes_in: u64,
    pub bytes_out: u64,
}

/// The packetization pipeline orchestrator.
///
/// Owns the FEC encoder for the duration of a run; `encode_chunk` only reads
/// it, so the same `Packetizer` encodes identical chunks to byte-identical
/// output.
pub struct Packetizer {
    encoder: Fx25Encoder,
    dest: Address,
    source: Address,
    command: u8,
    chunk_size: usize,
    state: PipelineState,
}

impl Packetizer {
    /// Create a pipeline for the given link
    ///
    /// # Arguments
    ///
    /// * `dest` - Destination station address
    /// * `source` - Source station address
    /// * `port` - KISS TNC port number (0-15)
    /// * `chunk_size` - Payload bytes per frame (max 150)
    ///
    /// # Returns
    ///
    /// * `Result<Packetizer>` - Ready pipeline, or `InitializationFailure`
    ///
    /// # Errors
    ///
    /// Returns `InitializationFailure` if the FEC encoder cannot be set up;
    /// the pipeline never starts in that case.
    pub fn new(dest: Address, source: Address, port: u8, chunk_size: usize) -> Result<Self> {
        let encoder = Fx25Encoder::new()?;

        Ok(Self {
            encoder,
            dest,
            source,
            command: kiss::data_command(port),
            chunk_size,
            state: PipelineState::Running,
        })
    }

    /// Run one chunk through all three stages
    ///
    /// # Arguments
    ///
    /// * `chunk` - Payload bytes (max 150)
    ///
    /// # Returns
    ///
    /// * `Result<Vec<u8>>` - Complete KISS frame ready for the sink
    ///
    /// # Errors
    ///
    /// Returns `PayloadTooLarge` or `FrameTooLargeForFec` for oversized
    /// input; the caller decides whether to skip or abort.
    pub fn encode_chunk(&self, chunk: &[u8]) -> Result<Vec<u8>> {
        let ax25_frame = build_ui_frame(&self.dest, &self.source, chunk)?;
        let fx25_frame = self.encoder.encode(&ax25_frame)?;
        Ok(kiss::encode_frame(self.command, &fx25_frame))
    }

    /// Drive the full pipeline: read chunks, encode, emit to the sink
    ///
    /// Reads the source in chunks of at most `chunk_size` bytes until EOF.
    /// Per-chunk encoding failures are logged, counted, and skipped; sink I/O
    /// failures abort the run. Output frames are written in input order.
    ///
    /// # Arguments
    ///
    /// * `source` - Input byte stream
    /// * `sink` - Destination for completed KISS frames
    ///
    /// # Returns
    ///
    /// * `Result<RunStats>` - Counters for the completed run
    pub async fn run<R, S>(&mut self, source: &mut R, sink: &mut S) -> Result<RunStats>
    where
        R: AsyncRead + Unpin,
        S: FrameSink,
    {
        let mut stats = RunStats::default();
        let mut buf = vec![0u8; self.chunk_size];

        loop {
            let n = read_chunk(source, &mut buf).await?;
            if n == 0 {
                break;
            }
            stats.bytes_in += n as u64;

            match self.encode_chunk(&buf[..n]) {
                Ok(frame) => {
                    sink.write_frame(&frame).await?;
                    stats.bytes_out += frame.len() as u64;
                    stats.packets_sent += 1;
                    debug!("Sent packet {} ({} bytes)", stats.packets_sent, frame.len());
                }
                Err(e) => {
                    stats.chunks_skipped += 1;
                    warn!(
                        "Skipping chunk {}: {}",
                        stats.packets_sent + stats.chunks_skipped,
                        e
                    );
                }
            }
        }

        sink.flush().await?;
        self.state = PipelineState::Stopped;

        Ok(stats)
    }

    /// Get the current pipeline state
    pub fn state(&self) -> PipelineState {
        self.state
    }
}

/// Fill the buffer from the source, coalescing short reads
///
/// Pipes and sockets may return fewer bytes than requested mid-stream;
/// keep reading so every chunk but the last fills the buffer. Returns the
/// number of bytes read, less than `buf.len()` only at end of input.
async fn read_chunk<R>(source: &mut R, buf: &mut [u8]) -> std::io::Result<usize>
where
    R: AsyncRead + Unpin,
{
    let mut filled = 0;

    while filled < buf.len() {
        let n = source.read(&mut buf[filled..]).await?;
        if n == 0 {
            break;
        }
        filled += n;
    }

    Ok(filled)
}
