//! # Output Sinks
//!
//! Destinations for completed KISS frames.
//!
//! This module handles:
//! - The `FrameSink` trait abstraction (enables testing with a mock)
//! - Writing frames verbatim to a file
//! - Writing frames to a serial TNC at 8N1

use async_trait::async_trait;
use std::io;
use std::path::Path;
use tokio::io::AsyncWriteExt;
use tokio_serial::SerialPortBuilderExt;
use tracing::{debug, info};

/// Trait for KISS frame output destinations
#[async_trait]
pub trait FrameSink: Send {
    /// Write one complete KISS frame
    async fn write_frame(&mut self, frame: &[u8]) -> io::Result<()>;

    /// Flush any buffered output
    async fn flush(&mut self) -> io::Result<()>;
}

/// Sink writing KISS frames to a file
pub struct FileSink {
    file: tokio::fs::File,
}

impl FileSink {
    /// Create (or truncate) the output file
    ///
    /// # Arguments
    ///
    /// * `path` - Output file path
    ///
    /// # Returns
    ///
    /// * `io::Result<FileSink>` - Opened sink or error
    pub async fn create<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let file = tokio::fs::File::create(path).await?;
        Ok(Self { file })
    }
}

#[async_trait]
impl FrameSink for FileSink {
    async fn write_frame(&mut self, frame: &[u8]) -> io::Result<()> {
        self.file.write_all(frame).await
    }

    async fn flush(&mut self) -> io::Result<()> {
        self.file.flush().await
    }
}

/// Sink writing KISS frames to a serial TNC
///
/// Opens the port with 8 data bits, no parity, one stop bit, no flow
/// control -- the standard settings for a KISS TNC link.
pub struct SerialSink {
    port: tokio_serial::SerialStream,
    device_path: String,
}

impl std::fmt::Debug for SerialSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SerialSink")
            .field("device_path", &self.device_path)
            .finish_non_exhaustive()
    }
}

impl SerialSink {
    /// Open a serial TNC device
    ///
    /// # Arguments
    ///
    /// * `path` - Device path (e.g., "/dev/ttyUSB0")
    /// * `baud_rate` - Line speed (e.g., 9600)
    ///
    /// # Returns
    ///
    /// * `io::Result<SerialSink>` - Opened sink or error
    pub fn open(path: &str, baud_rate: u32) -> io::Result<Self> {
        let port = tokio_serial::new(path, baud_rate)
            .data_bits(tokio_serial::DataBits::Eight)
            .parity(tokio_serial::Parity::None)
            .stop_bits(tokio_serial::StopBits::One)
            .flow_control(tokio_serial::FlowControl::None)
            .open_native_async()
            .map_err(|e| {
                io::Error::new(io::ErrorKind::Other, format!("failed to open {}: {}", path, e))
            })?;

        info!("Opened TNC serial port at {}", path);

        Ok(Self {
            port,
            device_path: path.to_string(),
        })
    }

    /// Get the device path of the opened serial port
    pub fn device_path(&self) -> &str {
        &self.device_path
    }
}

#[async_trait]
impl FrameSink for SerialSink {
    async fn write_frame(&mut self, frame: &[u8]) -> io::Result<()> {
        self.port.write_all(frame).await?;
        debug!("Sent KISS frame ({} bytes)", frame.len());
        Ok(())
    }

    async fn flush(&mut self) -> io::Result<()> {
        self.port.flush().await
    }
}

#[cfg(test)]
pub mod mocks {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// Mock sink for testing
    #[derive(Clone)]
    pub struct MockSink {
        pub written_frames: Arc<Mutex<Vec<Vec<u8>>>>,
        pub write_error: Arc<Mutex<Option<io::ErrorKind>>>,
    }

    impl MockSink {
        pub fn new() -> Self {
            Self {
                written_frames: Arc::new(Mutex::new(Vec::new())),
                write_error: Arc::new(Mutex::new(None)),
            }
        }

        pub fn get_written_frames(&self) -> Vec<Vec<u8>> {
            self.written_frames.lock().unwrap().clone()
        }

        pub fn set_write_error(&self, error: io::ErrorKind) {
            *self.write_error.lock().unwrap() = Some(error);
        }
    }

    #[async_trait]
    impl FrameSink for MockSink {
        async fn write_frame(&mut self, frame: &[u8]) -> io::Result<()> {
            if let Some(error) = *self.write_error.lock().unwrap() {
                return Err(io::Error::new(error, "mock write error"));
            }
            self.written_frames.lock().unwrap().push(frame.to_vec());
            Ok(())
        }

        async fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::mocks::MockSink;
    use super::*;

    #[tokio::test]
    async fn test_file_sink_writes_frames_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("output.kiss");

        let mut sink = FileSink::create(&path).await.unwrap();
        sink.write_frame(&[0xC0, 0x00, 0x01, 0xC0]).await.unwrap();
        sink.write_frame(&[0xC0, 0x00, 0x02, 0xC0]).await.unwrap();
        sink.flush().await.unwrap();
        drop(sink);

        let written = std::fs::read(&path).unwrap();
        assert_eq!(written, vec![0xC0, 0x00, 0x01, 0xC0, 0xC0, 0x00, 0x02, 0xC0]);
    }

    #[tokio::test]
    async fn test_file_sink_create_fails_for_bad_path() {
        let result = FileSink::create("/nonexistent_dir_12345/output.kiss").await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_mock_sink_records_frames() {
        let mut sink = MockSink::new();
        sink.write_frame(&[0x01]).await.unwrap();
        sink.write_frame(&[0x02, 0x03]).await.unwrap();

        let frames = sink.get_written_frames();
        assert_eq!(frames, vec![vec![0x01], vec![0x02, 0x03]]);
    }

    #[tokio::test]
    async fn test_mock_sink_error_injection() {
        let mut sink = MockSink::new();
        sink.set_write_error(io::ErrorKind::BrokenPipe);

        let err = sink.write_frame(&[0x01]).await.unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
        assert!(sink.get_written_frames().is_empty());
    }

    #[test]
    fn test_serial_sink_open_fails_for_bad_path() {
        let result = SerialSink::open("/dev/nonexistent_tnc_device_12345", 9600);
        assert!(result.is_err());
    }
}
