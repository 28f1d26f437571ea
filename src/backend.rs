//! Static per-backend characteristics.
//!
//! A backend is an ADC kind plus an input mode. Its timing constants drive the
//! sample rate resolver:
//!
//! | Backend        | Capacity (SE/diff) | Latency / channel | Max rate |
//! |----------------|--------------------|-------------------|----------|
//! | Internal ADC   | 6 / -              | 20 ms (2 × 10 ms) | 50 Hz    |
//! | ADS1115 16-bit | 4 / 2              | 8 ms              | 125 Hz   |
//! | ADS1015 12-bit | 4 / 2              | 1 ms              | 3300 Hz  |

use crate::error::AcqError;

/// Largest channel capacity of any backend.
pub const MAX_CHANNELS: usize = 6;

/// ADC converter behind the front end.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BackendKind {
    /// On-chip ADC; needs a settle read per channel.
    Internal,
    /// ADS1015, 12-bit over I2C.
    External12Bit,
    /// ADS1115, 16-bit over I2C.
    External16Bit,
}

/// How each reading is referenced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputMode {
    /// One pin against ground.
    SingleEnded,
    /// Difference between a pin pair.
    Differential,
}

/// Immutable characteristics of the selected backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BackendProfile {
    pub kind: BackendKind,
    pub mode: InputMode,
    /// Number of channels (pins or pairs) available in `mode`.
    pub channel_capacity: u8,
    /// Minimum time one channel occupies per cycle.
    pub min_conversion_latency_ms: u32,
    /// Highest sample rate with a single active channel.
    pub max_sample_rate_hz: u32,
}

impl BackendProfile {
    /// Build the profile for a backend/mode combination.
    pub const fn new(kind: BackendKind, mode: InputMode) -> Result<Self, AcqError> {
        let (min_conversion_latency_ms, max_sample_rate_hz) = match kind {
            BackendKind::Internal => (20, 50),
            BackendKind::External16Bit => (8, 125),
            BackendKind::External12Bit => (1, 3300),
        };

        let channel_capacity = match (kind, mode) {
            (BackendKind::Internal, InputMode::SingleEnded) => 6,
            (BackendKind::Internal, InputMode::Differential) => {
                return Err(AcqError::UnsupportedMode)
            }
            (_, InputMode::SingleEnded) => 4,
            (_, InputMode::Differential) => 2,
        };

        Ok(Self {
            kind,
            mode,
            channel_capacity,
            min_conversion_latency_ms,
            max_sample_rate_hz,
        })
    }

    /// True for the I2C converters, which take a gain setting.
    pub const fn is_external(&self) -> bool {
        !matches!(self.kind, BackendKind::Internal)
    }

    /// True if every channel is read twice, keeping the second value.
    ///
    /// The on-chip multiplexer needs time to switch and the input needs time
    /// to stabilize; the ADS1x15 driver waits for conversion completion itself.
    pub const fn needs_settle_read(&self) -> bool {
        matches!(self.kind, BackendKind::Internal)
    }

    /// Backend name for the startup banner.
    pub const fn name(&self) -> &'static str {
        match self.kind {
            BackendKind::Internal => "Internal ADC",
            BackendKind::External16Bit => "ADS1115 - ADC 16 bit",
            BackendKind::External12Bit => "ADS1015 - ADC 12 bit",
        }
    }

    /// Prompt naming the fields the host must send, in order.
    pub const fn prompt(&self) -> &'static str {
        if self.is_external() {
            "sample_rate<int>\tgain<int>"
        } else {
            "sample_rate<int>"
        }
    }

    /// Time the reads of `active_channels` channels take per cycle.
    pub const fn cycle_latency_ms(&self, active_channels: usize) -> u32 {
        self.min_conversion_latency_ms * active_channels as u32
    }
}
