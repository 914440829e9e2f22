//! # AX.25 UI-Frame Builder
//!
//! Assembles complete UI frames: addresses, control, PID, payload, FCS.

use bytes::{BufMut, BytesMut};

use super::crc::crc16_ccitt;
use super::protocol::{
    Address, AX25_CONTROL_UI, AX25_FRAME_OVERHEAD, AX25_MAX_PAYLOAD, AX25_PID_NO_L3,
};
use crate::error::{PacketizerError, Result};

/// Build a complete AX.25 UI frame
///
/// Frame layout: destination address (extension bit clear), source address
/// (extension bit set), control byte, PID byte, payload, then the 2-byte FCS
/// computed over everything before it, low byte first.
///
/// # Arguments
///
/// * `dest` - Destination station
/// * `src` - Source station
/// * `payload` - Payload bytes (max 150)
///
/// # Returns
///
/// * `Result<Vec<u8>>` - Complete frame (16 + payload length bytes)
///
/// # Errors
///
/// Returns `PayloadTooLarge` if the payload exceeds [`AX25_MAX_PAYLOAD`];
/// oversized payloads are never truncated silently.
///
/// # Examples
///
/// ```
/// use sat_packetizer::ax25::frame::build_ui_frame;
/// use sat_packetizer::ax25::protocol::Address;
///
/// let dest = Address::parse("CQ").unwrap();
/// let src = Address::parse("N0CALL-1").unwrap();
/// let frame = build_ui_frame(&dest, &src, b"HELLO").unwrap();
/// assert_eq!(frame.len(), 21);
/// ```
pub fn build_ui_frame(dest: &Address, src: &Address, payload: &[u8]) -> Result<Vec<u8>> {
    if payload.len() > AX25_MAX_PAYLOAD {
        return Err(PacketizerError::PayloadTooLarge {
            len: payload.len(),
            max: AX25_MAX_PAYLOAD,
        });
    }

    let mut frame = BytesMut::with_capacity(AX25_FRAME_OVERHEAD + payload.len());

    // Address fields: destination first, source carries the extension bit
    frame.put_slice(&dest.encode(false));
    frame.put_slice(&src.encode(true));

    frame.put_u8(AX25_CONTROL_UI);
    frame.put_u8(AX25_PID_NO_L3);

    frame.put_slice(payload);

    // FCS over every byte written so far, low byte first
    let fcs = crc16_ccitt(&frame);
    frame.put_u8((fcs & 0xFF) as u8);
    frame.put_u8((fcs >> 8) as u8);

    Ok(frame.to_vec())
}
