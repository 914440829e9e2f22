//! # KISS Link Framing
//!
//! KISS byte stuffing for the serial link between host and radio TNC.
//!
//! This module handles:
//! - Frame delimiting with FEND bytes
//! - Escaping FEND/FESC occurrences inside the frame body
//! - The inverse transform, used for loopback verification and host-side
//!   reception

use crate::error::{PacketizerError, Result};

/// Frame end delimiter
pub const FEND: u8 = 0xC0;

/// Frame escape
pub const FESC: u8 = 0xDB;

/// Transposed frame end (follows FESC in place of a raw FEND)
pub const TFEND: u8 = 0xDC;

/// Transposed frame escape (follows FESC in place of a raw FESC)
pub const TFESC: u8 = 0xDD;

/// Data-frame command nibble
pub const CMD_DATA: u8 = 0x00;

/// Maximum TNC port number (4-bit field)
pub const MAX_PORT: u8 = 0x0F;

/// Command byte for a data frame on the given TNC port
///
/// The port occupies the high nibble and the command the low nibble. With the
/// port masked to 4 bits the result is always `0xN0` with N <= 15, so the
/// command byte can never equal FEND or FESC and is emitted unescaped.
pub fn data_command(port: u8) -> u8 {
    ((port & MAX_PORT) << 4) | CMD_DATA
}

/// Encode a data buffer into a complete KISS frame
///
/// Emits FEND, the command byte, the byte-stuffed body, and a closing FEND.
/// Every FEND in the body becomes FESC TFEND and every FESC becomes
/// FESC TFESC; no other byte is altered.
///
/// # Arguments
///
/// * `command` - Command byte (see [`data_command`])
/// * `data` - Frame body to be escaped
///
/// # Returns
///
/// * `Vec<u8>` - Complete frame, between `3 + len` and `3 + 2 * len` bytes
///
/// # Examples
///
/// ```
/// use sat_packetizer::kiss::{encode_frame, CMD_DATA, FEND};
///
/// let frame = encode_frame(CMD_DATA, &[0x01, 0x02]);
/// assert_eq!(frame, vec![FEND, CMD_DATA, 0x01, 0x02, FEND]);
/// ```
pub fn encode_frame(command: u8, data: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(data.len() + 3);

    out.push(FEND);
    out.push(command);

    for &byte in data {
        match byte {
            FEND => out.extend_from_slice(&[FESC, TFEND]),
            FESC => out.extend_from_slice(&[FESC, TFESC]),
            other => out.push(other),
        }
    }

    out.push(FEND);
    out
}

/// Decode a complete KISS frame back into command byte and body
///
/// Inverse of [`encode_frame`]: strips the delimiters and undoes the byte
/// stuffing.
///
/// # Arguments
///
/// * `frame` - Complete frame including both FEND delimiters
///
/// # Returns
///
/// * `Result<(u8, Vec<u8>)>` - Command byte and unescaped body
///
/// # Errors
///
/// Returns `KissProtocol` if the frame is shorter than the delimiters plus
/// command byte, is not FEND-delimited, contains a raw FEND inside the body,
/// or ends mid-escape / uses an unknown escape sequence.
pub fn decode_frame(frame: &[u8]) -> Result<(u8, Vec<u8>)> {
    if frame.len() < 3 {
        return Err(PacketizerError::KissProtocol(format!(
            "frame too short: {} bytes",
            frame.len()
        )));
    }

    if frame[0] != FEND || frame[frame.len() - 1] != FEND {
        return Err(PacketizerError::KissProtocol(
            "frame is not FEND-delimited".to_string(),
        ));
    }

    let command = frame[1];
    let body = &frame[2..frame.len() - 1];

    let mut out = Vec::with_capacity(body.len());
    let mut bytes = body.iter();

    while let Some(&byte) = bytes.next() {
        match byte {
            FEND => {
                return Err(PacketizerError::KissProtocol(
                    "unescaped FEND inside frame body".to_string(),
                ));
            }
            FESC => match bytes.next() {
                Some(&TFEND) => out.push(FEND),
                Some(&TFESC) => out.push(FESC),
                Some(&other) => {
                    return Err(PacketizerError::KissProtocol(format!(
                        "invalid escape sequence FESC 0x{:02X}",
                        other
                    )));
                }
                None => {
                    return Err(PacketizerError::KissProtocol(
                        "frame ends mid-escape".to_string(),
                    ));
                }
            },
            other => out.push(other),
        }
    }

    Ok((command, out))
}
