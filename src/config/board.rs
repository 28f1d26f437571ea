//! Board description.
//!
//! Replaces per-build pin and converter selection with one const value:
//!
//! ```ignore
//! const BOARD: BoardConfig = BoardConfig {
//!     backend: BackendKind::External12Bit,
//!     mode: InputMode::Differential,
//!     channels: &[Channel::Pair(DiffPair::A01)],
//!     ..BoardConfig::DEFAULT
//! };
//! const _: () = assert!(BOARD.validate().is_ok(), "invalid board description");
//! ```

use crate::acquisition::ReadFailurePolicy;
use crate::backend::{BackendKind, BackendProfile, InputMode};
use crate::channels::{self, Channel, ChannelSet, DiffPair};
use crate::error::AcqError;

/// ADS1x15 address with ADDR tied to GND.
pub const DEFAULT_I2C_ADDRESS: u8 = 0x48;

/// Host link speed expected by the acquisition software.
pub const DEFAULT_BAUD_RATE: u32 = 9600;

/// Static description of the acquisition board.
#[derive(Clone, Copy, Debug)]
pub struct BoardConfig {
    pub backend: BackendKind,
    pub mode: InputMode,
    /// Active channels, in output column order.
    pub channels: &'static [Channel],
    /// ADS1x15 I2C address (external backends only).
    pub i2c_address: u8,
    /// Host UART baud rate.
    pub baud_rate: u32,
    /// Value emitted for a channel whose read failed.
    pub read_failure: ReadFailurePolicy,
}

impl BoardConfig {
    /// ADS1015 differential on AIN0-AIN1.
    pub const DEFAULT: BoardConfig = BoardConfig {
        backend: BackendKind::External12Bit,
        mode: InputMode::Differential,
        channels: &[Channel::Pair(DiffPair::A01)],
        i2c_address: DEFAULT_I2C_ADDRESS,
        baud_rate: DEFAULT_BAUD_RATE,
        read_failure: ReadFailurePolicy::Sentinel,
    };

    /// Check backend/mode and the channel list.
    pub const fn validate(&self) -> Result<(), AcqError> {
        match BackendProfile::new(self.backend, self.mode) {
            Ok(profile) => channels::validate(&profile, self.channels),
            Err(e) => Err(e),
        }
    }

    /// Profile of the selected backend.
    pub const fn profile(&self) -> Result<BackendProfile, AcqError> {
        BackendProfile::new(self.backend, self.mode)
    }

    /// Profile and validated channel set.
    pub fn build(&self) -> Result<(BackendProfile, ChannelSet), AcqError> {
        let profile = self.profile()?;
        let channels = ChannelSet::new(&profile, self.channels)?;
        Ok((profile, channels))
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
