//! # FX.25 Forward Error Correction
//!
//! Wraps AX.25 frames in FX.25 codewords for robustness against
//! transmission errors.
//!
//! This module handles:
//! - GF(2^8) arithmetic over the field polynomial 0x187
//! - Reed-Solomon(255,223) parity generation
//! - Correlation tag prefixing for modem synchronization

pub mod gf;
pub mod encoder;
