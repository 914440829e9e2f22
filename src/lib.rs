//! # Sat Packetizer Library
//!
//! Packetize arbitrary byte streams for amateur satellite links.
//!
//! This library provides the core encoding pipeline: AX.25 UI framing,
//! FX.25 Reed-Solomon(255,223) forward error correction, and KISS framing
//! for the serial link to a radio TNC.

pub mod config;
pub mod error;
pub mod ax25;
pub mod fx25;
pub mod kiss;
pub mod pipeline;
pub mod sink;
