//! Module: config
//!
//! Purpose: Configuration for the PASC firmware.
//!
//! Architecture:
//! - board: build-time board description (backend, mode, channels, bus),
//!   validated in `const` context so a bad board never builds
//! - session: the `Configuration` resolved once by the host handshake,
//!   immutable for the rest of the process lifetime
//!
//! Nothing is persisted across power cycles.

pub mod board;
pub mod session;

pub use board::{BoardConfig, DEFAULT_I2C_ADDRESS, DEFAULT_BAUD_RATE};
pub use session::{Configuration, HostRequest};
