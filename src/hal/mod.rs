//! Hardware Abstraction Layer for the PASC firmware.
//!
//! Thin wrappers around the ADC front ends and the host UART.
//! Business logic stays in core modules, HAL is just I/O.

pub mod ads1x15;

#[cfg(target_os = "espidf")]
pub mod internal_adc;
#[cfg(target_os = "espidf")]
pub mod serial;

pub use ads1x15::{Ads1x15, Ads1x15Error, Resolution};
