//! # PASC firmware
//!
//! Serial acquisition front end: samples analog channels from one ADC
//! backend at a host-chosen rate and streams raw counts over a serial link.
//!
//! ## Architecture
//!
//! ```text
//! BoardConfig ──▶ BackendProfile + ChannelSet      (build time, const-checked)
//!                        │
//!                        ▼
//!                    Handshake ──▶ Configuration   (once, at startup)
//!                        │
//!                        ▼
//!                 AcquisitionLoop ──▶ host link    (forever)
//!                        │
//!                        └──▶ DIAG_LOG ──▶ diagnostic UART
//! ```
//!
//! Core modules are pure and host-testable. Hardware access is confined to
//! [`hal`] behind the [`adc::AdcReader`] and [`handshake::HostLink`] traits.

#![cfg_attr(not(test), no_std)]

pub mod acquisition;
pub mod adc;
pub mod backend;
pub mod channels;
pub mod config;
pub mod error;
pub mod fault;
pub mod gain;
pub mod globals;
pub mod handshake;
pub mod hal;
pub mod logging;
pub mod rate;
pub mod uart_logger;

/// Line terminator of every line sent to the host.
pub const LINE_END: &str = "\r\n";

pub use acquisition::{AcquisitionLoop, ReadFailurePolicy, READ_FAILURE_SENTINEL};
pub use adc::AdcReader;
pub use backend::{BackendKind, BackendProfile, InputMode, MAX_CHANNELS};
pub use channels::{Channel, ChannelSet, DiffPair};
pub use config::{BoardConfig, Configuration, HostRequest};
pub use error::AcqError;
pub use fault::{FaultCode, FaultState};
pub use gain::Gain;
pub use handshake::{Handshake, HostLink};
pub use logging::LogStream;
