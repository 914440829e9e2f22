//! # Configuration Module
//!
//! Handles loading and validating configuration from TOML files.

use serde::Deserialize;
use serde::de::Error;
use std::fs;
use std::path::Path;

use crate::ax25::protocol::AX25_MAX_PAYLOAD;
use crate::error::Result;
use crate::kiss::MAX_PORT;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub station: StationConfig,
    pub io: IoConfig,
    pub link: LinkConfig,
}

/// Station addressing configuration
#[derive(Debug, Deserialize, Clone)]
pub struct StationConfig {
    /// Source station as CALL or CALL-SSID
    pub source: String,

    /// Destination station as CALL or CALL-SSID
    pub destination: String,
}

/// Input/output configuration
#[derive(Debug, Deserialize, Clone)]
pub struct IoConfig {
    /// Input file to packetize
    pub input: String,

    /// Output file for KISS frames (leave empty when using serial_port)
    #[serde(default)]
    pub output: String,

    /// Serial TNC device (leave empty when using output)
    #[serde(default)]
    pub serial_port: String,

    #[serde(default = "default_baud_rate")]
    pub baud_rate: u32,
}

/// Link framing configuration
#[derive(Debug, Deserialize, Clone)]
pub struct LinkConfig {
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,

    #[serde(default)]
    pub kiss_port: u8,
}

// Default value functions
fn default_baud_rate() -> u32 { 9600 }
fn default_chunk_size() -> usize { AX25_MAX_PAYLOAD }

impl Config {
    /// Load configuration from a TOML file
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    ///
    /// * `Result<Config>` - Loaded and validated configuration
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File cannot be read
    /// - TOML parsing fails
    /// - Validation fails
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use sat_packetizer::config::Config;
    ///
    /// let config = Config::load("config/default.toml")?;
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Returns
    ///
    /// * `Result<()>` - Ok if valid, Err if invalid
    ///
    /// # Errors
    ///
    /// Returns error if any configuration value is out of valid range
    fn validate(&self) -> Result<()> {
        if self.station.source.is_empty() {
            return Err(crate::error::PacketizerError::Config(
                toml::de::Error::custom("station source callsign cannot be empty")
            ));
        }

        if self.station.destination.is_empty() {
            return Err(crate::error::PacketizerError::Config(
                toml::de::Error::custom("station destination callsign cannot be empty")
            ));
        }

        if self.io.input.is_empty() {
            return Err(crate::error::PacketizerError::Config(
                toml::de::Error::custom("io input path cannot be empty")
            ));
        }

        // Exactly one output destination
        if self.io.output.is_empty() == self.io.serial_port.is_empty() {
            return Err(crate::error::PacketizerError::Config(
                toml::de::Error::custom("exactly one of io.output and io.serial_port must be set")
            ));
        }

        if !self.io.serial_port.is_empty() && self.io.baud_rate == 0 {
            return Err(crate::error::PacketizerError::Config(
                toml::de::Error::custom("baud_rate must be greater than 0")
            ));
        }

        if self.link.chunk_size == 0 || self.link.chunk_size > AX25_MAX_PAYLOAD {
            return Err(crate::error::PacketizerError::Config(
                toml::de::Error::custom(format!(
                    "chunk_size must be between 1 and {}", AX25_MAX_PAYLOAD
                ))
            ));
        }

        if self.link.kiss_port > MAX_PORT {
            return Err(crate::error::PacketizerError::Config(
                toml::de::Error::custom(format!(
                    "kiss_port must be between 0 and {}", MAX_PORT
                ))
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config(io_section: &str, link_section: &str) -> String {
        format!(
            r#"
            [station]
            source = "N0CALL-1"
            destination = "CQ"

            [io]
            input = "data.bin"
            {}

            [link]
            {}
            "#,
            io_section, link_section
        )
    }

    fn parse(toml_str: &str) -> Result<Config> {
        let config: Config = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    #[test]
    fn test_valid_file_output_config() {
        let config = parse(&base_config(r#"output = "out.kiss""#, "")).unwrap();

        assert_eq!(config.station.source, "N0CALL-1");
        assert_eq!(config.station.destination, "CQ");
        assert_eq!(config.io.output, "out.kiss");
        assert_eq!(config.link.chunk_size, AX25_MAX_PAYLOAD);
        assert_eq!(config.link.kiss_port, 0);
    }

    #[test]
    fn test_valid_serial_output_config() {
        let config = parse(&base_config(
            r#"serial_port = "/dev/ttyUSB0"
            baud_rate = 19200"#,
            "kiss_port = 3",
        ))
        .unwrap();

        assert_eq!(config.io.serial_port, "/dev/ttyUSB0");
        assert_eq!(config.io.baud_rate, 19200);
        assert_eq!(config.link.kiss_port, 3);
    }

    #[test]
    fn test_both_outputs_rejected() {
        let result = parse(&base_config(
            r#"output = "out.kiss"
            serial_port = "/dev/ttyUSB0""#,
            "",
        ));
        assert!(result.is_err());
    }

    #[test]
    fn test_no_output_rejected() {
        assert!(parse(&base_config("", "")).is_err());
    }

    #[test]
    fn test_chunk_size_bounds() {
        assert!(parse(&base_config(r#"output = "o""#, "chunk_size = 150")).is_ok());
        assert!(parse(&base_config(r#"output = "o""#, "chunk_size = 151")).is_err());
        assert!(parse(&base_config(r#"output = "o""#, "chunk_size = 0")).is_err());
    }

    #[test]
    fn test_kiss_port_bounds() {
        assert!(parse(&base_config(r#"output = "o""#, "kiss_port = 15")).is_ok());
        assert!(parse(&base_config(r#"output = "o""#, "kiss_port = 16")).is_err());
    }

    #[test]
    fn test_empty_callsigns_rejected() {
        let toml_str = r#"
            [station]
            source = ""
            destination = "CQ"

            [io]
            input = "data.bin"
            output = "out.kiss"

            [link]
        "#;
        assert!(parse(toml_str).is_err());
    }

    #[test]
    fn test_zero_baud_rate_rejected_for_serial() {
        let result = parse(&base_config(
            r#"serial_port = "/dev/ttyUSB0"
            baud_rate = 0"#,
            "",
        ));
        assert!(result.is_err());
    }
}
