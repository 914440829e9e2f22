//! # FX.25 Reed-Solomon Encoder
//!
//! Systematic RS(255,223) encoding of AX.25 frames, prefixed with the FX.25
//! correlation tag. Parameters follow the FX.25 specification: symbol size 8,
//! field polynomial 0x187, first consecutive root 112, primitive-element
//! step 11, 32 parity symbols. Up to 16 symbol errors per block are
//! correctable by a conforming decoder.

use super::gf::GaloisField;
use crate::error::{PacketizerError, Result};

/// Total symbols per RS block
pub const RS_BLOCK_LEN: usize = 255;

/// Data symbols per RS block
pub const RS_DATA_LEN: usize = 223;

/// Parity symbols per RS block
pub const RS_PARITY_LEN: usize = RS_BLOCK_LEN - RS_DATA_LEN;

/// First consecutive root exponent of the generator polynomial
const FIRST_ROOT: usize = 112;

/// Primitive-element step between consecutive generator roots
const ROOT_STEP: usize = 11;

/// Correlation tag marking an RS(255,223) codeword with 32 check symbols
pub const CORRELATION_TAG: [u8; 8] = [0xCC, 0x8F, 0x8A, 0xE4, 0x85, 0xE2, 0x98, 0x01];

/// Total FX.25 frame length: tag + codeword
pub const FX25_FRAME_LEN: usize = CORRELATION_TAG.len() + RS_BLOCK_LEN;

/// Reed-Solomon encoder for FX.25 frames.
///
/// Construction builds the Galois-field tables and the degree-32 generator
/// polynomial once; `encode` is then read-only, so one encoder can be shared
/// across all chunks of a run (and across threads, if callers want to).
pub struct Fx25Encoder {
    gf: GaloisField,
    /// Generator coefficients in descending powers (x^31 term first).
    /// The leading x^32 coefficient is 1 and implicit.
    generator: [u8; RS_PARITY_LEN],
}

impl Fx25Encoder {
    /// Initialize the RS(255,223) encoder
    ///
    /// # Returns
    ///
    /// * `Result<Fx25Encoder>` - Ready encoder, or `InitializationFailure`
    ///
    /// # Errors
    ///
    /// Returns `InitializationFailure` if the field tables cannot be built.
    pub fn new() -> Result<Self> {
        let gf = GaloisField::new().ok_or_else(|| {
            PacketizerError::InitializationFailure(
                "field polynomial 0x187 is not primitive".to_string(),
            )
        })?;

        // g(x) = product of (x + alpha^((FIRST_ROOT + j) * ROOT_STEP)) for
        // j in 0..32, built up one root at a time. gen[i] holds the x^i
        // coefficient during construction.
        let mut gen = [0u8; RS_PARITY_LEN + 1];
        gen[0] = 1;

        for j in 0..RS_PARITY_LEN {
            let root = gf.alpha_pow((FIRST_ROOT + j) * ROOT_STEP);
            for i in (1..=j + 1).rev() {
                gen[i] = gen[i - 1] ^ gf.mul(gen[i], root);
            }
            gen[0] = gf.mul(gen[0], root);
        }

        // Store in descending order to line up with the parity shift register
        let mut generator = [0u8; RS_PARITY_LEN];
        for i in 0..RS_PARITY_LEN {
            generator[i] = gen[RS_PARITY_LEN - 1 - i];
        }

        Ok(Self { gf, generator })
    }

    /// Encode an AX.25 frame into a complete FX.25 frame
    ///
    /// The frame is zero-padded into a 223-byte data block, 32 parity bytes
    /// are computed over the padded block, and the result is prefixed with
    /// the correlation tag.
    ///
    /// # Arguments
    ///
    /// * `ax25_frame` - Complete AX.25 frame (max 223 bytes)
    ///
    /// # Returns
    ///
    /// * `Result<[u8; 263]>` - Tag + data block + parity
    ///
    /// # Errors
    ///
    /// Returns `FrameTooLargeForFec` if the frame exceeds the data block.
    pub fn encode(&self, ax25_frame: &[u8]) -> Result<[u8; FX25_FRAME_LEN]> {
        if ax25_frame.len() > RS_DATA_LEN {
            return Err(PacketizerError::FrameTooLargeForFec {
                len: ax25_frame.len(),
                max: RS_DATA_LEN,
            });
        }

        let mut block = [0u8; RS_DATA_LEN];
        block[..ax25_frame.len()].copy_from_slice(ax25_frame);

        let parity = self.parity(&block);

        let mut out = [0u8; FX25_FRAME_LEN];
        out[..8].copy_from_slice(&CORRELATION_TAG);
        out[8..8 + RS_DATA_LEN].copy_from_slice(&block);
        out[8 + RS_DATA_LEN..].copy_from_slice(&parity);

        Ok(out)
    }

    /// Compute the 32 parity symbols for a full data block.
    ///
    /// Polynomial long division of data(x) * x^32 by the generator; the
    /// register holds the running remainder, highest power first.
    fn parity(&self, block: &[u8; RS_DATA_LEN]) -> [u8; RS_PARITY_LEN] {
        let mut parity = [0u8; RS_PARITY_LEN];

        for &byte in block.iter() {
            let feedback = byte ^ parity[0];
            for i in 0..RS_PARITY_LEN - 1 {
                parity[i] = parity[i + 1] ^ self.gf.mul(feedback, self.generator[i]);
            }
            parity[RS_PARITY_LEN - 1] = self.gf.mul(feedback, self.generator[RS_PARITY_LEN - 1]);
        }

        parity
    }
}
