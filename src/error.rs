//! # Error Types
//!
//! Custom error types for the packetizer using `thiserror`.

use thiserror::Error;

/// Main error type for the packetizer
#[derive(Debug, Error)]
pub enum PacketizerError {
    /// FEC codec setup failed; fatal, no chunks are processed
    #[error("FX.25 encoder initialization failed: {0}")]
    InitializationFailure(String),

    /// Payload exceeds the AX.25 UI-frame maximum; the chunk is skipped
    #[error("payload too large for AX.25 frame: {len} > {max} bytes")]
    PayloadTooLarge { len: usize, max: usize },

    /// AX.25 frame exceeds the RS(255,223) data block; the chunk is skipped
    #[error("AX.25 frame too large for FX.25 FEC: {len} > {max} bytes")]
    FrameTooLargeForFec { len: usize, max: usize },

    /// Callsign/SSID cannot be represented in the AX.25 address format
    #[error("invalid AX.25 address: {0}")]
    AddressFormatInvalid(String),

    /// KISS framing errors
    #[error("KISS protocol error: {0}")]
    KissProtocol(String),

    /// Configuration errors
    #[error("configuration error: {0}")]
    Config(#[from] toml::de::Error),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for the packetizer
pub type Result<T> = std::result::Result<T, PacketizerError>;
