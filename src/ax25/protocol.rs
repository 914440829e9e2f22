//! # AX.25 Protocol Constants and Types
//!
//! Core protocol definitions for AX.25 addressing and UI frames.

use std::fmt;

use crate::error::{PacketizerError, Result};

/// Control byte for a UI frame (Unnumbered Information)
pub const AX25_CONTROL_UI: u8 = 0x03;

/// PID byte for "no layer 3 protocol"
pub const AX25_PID_NO_L3: u8 = 0xF0;

/// Encoded address field length
pub const AX25_ADDRESS_LEN: usize = 7;

/// Maximum callsign length before the SSID byte
pub const AX25_CALLSIGN_LEN: usize = 6;

/// Maximum payload per UI frame.
/// Frame structure: dest(7) + source(7) + control(1) + pid(1) + payload(N) + fcs(2)
/// must stay under the 223-byte RS data block, so 150 keeps a safe margin.
pub const AX25_MAX_PAYLOAD: usize = 150;

/// Fixed frame overhead (addresses + control + PID + FCS)
pub const AX25_FRAME_OVERHEAD: usize = 2 * AX25_ADDRESS_LEN + 2 + 2;

/// Maximum SSID value (4-bit field)
pub const AX25_MAX_SSID: u8 = 15;

/// Reserved bits of the SSID byte, always set
const SSID_RESERVED_BITS: u8 = 0b0110_0000;

/// An AX.25 station address: callsign plus SSID.
///
/// Construction validates the callsign and SSID, so every `Address` value can
/// be encoded into the 7-byte wire format without failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address {
    callsign: String,
    ssid: u8,
}

impl Address {
    /// Create an address from a callsign and SSID
    ///
    /// # Arguments
    ///
    /// * `callsign` - 1-6 printable ASCII characters
    /// * `ssid` - Secondary station identifier (0-15)
    ///
    /// # Returns
    ///
    /// * `Result<Address>` - Address if valid, or `AddressFormatInvalid`
    ///
    /// # Errors
    ///
    /// Returns error if the callsign is empty, longer than 6 characters,
    /// contains non-printable characters, or the SSID exceeds 15.
    pub fn new(callsign: &str, ssid: u8) -> Result<Self> {
        if callsign.is_empty() {
            return Err(PacketizerError::AddressFormatInvalid(
                "callsign cannot be empty".to_string(),
            ));
        }

        if callsign.len() > AX25_CALLSIGN_LEN {
            return Err(PacketizerError::AddressFormatInvalid(format!(
                "callsign '{}' is longer than {} characters",
                callsign, AX25_CALLSIGN_LEN
            )));
        }

        if !callsign.chars().all(|c| c.is_ascii_graphic()) {
            return Err(PacketizerError::AddressFormatInvalid(format!(
                "callsign '{}' contains non-printable characters",
                callsign
            )));
        }

        if ssid > AX25_MAX_SSID {
            return Err(PacketizerError::AddressFormatInvalid(format!(
                "SSID {} exceeds maximum {}",
                ssid, AX25_MAX_SSID
            )));
        }

        Ok(Self {
            callsign: callsign.to_string(),
            ssid,
        })
    }

    /// Parse a `CALL` or `CALL-SSID` string
    ///
    /// The SSID suffix is optional and defaults to 0.
    ///
    /// # Arguments
    ///
    /// * `s` - Address string (e.g. "N0CALL-1" or "CQ")
    ///
    /// # Returns
    ///
    /// * `Result<Address>` - Parsed address, or `AddressFormatInvalid`
    ///
    /// # Examples
    ///
    /// ```
    /// use sat_packetizer::ax25::protocol::Address;
    ///
    /// let addr = Address::parse("N0CALL-1").unwrap();
    /// assert_eq!(addr.callsign(), "N0CALL");
    /// assert_eq!(addr.ssid(), 1);
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        match s.split_once('-') {
            Some((callsign, ssid)) => {
                let ssid: u8 = ssid.parse().map_err(|_| {
                    PacketizerError::AddressFormatInvalid(format!(
                        "'{}' has a non-numeric SSID suffix",
                        s
                    ))
                })?;
                Self::new(callsign, ssid)
            }
            None => Self::new(s, 0),
        }
    }

    /// Get the callsign (without SSID suffix)
    pub fn callsign(&self) -> &str {
        &self.callsign
    }

    /// Get the SSID
    pub fn ssid(&self) -> u8 {
        self.ssid
    }

    /// Encode into the 7-byte AX.25 address field
    ///
    /// The callsign is space-padded to 6 characters and every byte is shifted
    /// left by one bit; the 7th byte packs the SSID, the reserved bits, and
    /// the extension bit marking the last address in the field.
    ///
    /// # Arguments
    ///
    /// * `is_last` - Set the extension bit (true for the final address)
    ///
    /// # Returns
    ///
    /// * `[u8; 7]` - Encoded address field
    pub fn encode(&self, is_last: bool) -> [u8; AX25_ADDRESS_LEN] {
        let mut out = [(b' ') << 1; AX25_ADDRESS_LEN];

        for (i, byte) in self.callsign.bytes().enumerate() {
            out[i] = byte << 1;
        }

        out[AX25_CALLSIGN_LEN] = (self.ssid << 1) | SSID_RESERVED_BITS | (is_last as u8);

        out
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.callsign, self.ssid)
    }
}
