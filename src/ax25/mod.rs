//! # AX.25 Link-Layer Framing
//!
//! Implementation of the AX.25 framing used for the satellite downlink.
//!
//! This module handles:
//! - 7-byte address field encoding (callsign + SSID)
//! - CRC-16 frame check sequence calculation
//! - UI-frame assembly (addresses, control, PID, payload, FCS)

pub mod protocol;
pub mod frame;
pub mod crc;
