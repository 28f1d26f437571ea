//! ADC input range table for the external ADS1x15 converters.
//!
//! The host selects a range with a small integer code. `23` stands for the
//! 2/3x setting (the widest range), which is also the fallback.
//!
//! ```text
//! code  gain   range      ADS1015 LSB  ADS1115 LSB
//! ----  -----  ---------  -----------  -----------
//!  23   2/3x   ±6.144 V   3 mV         0.1875 mV
//!   1   1x     ±4.096 V   2 mV         0.125 mV
//!   2   2x     ±2.048 V   1 mV         0.0625 mV
//!   4   4x     ±1.024 V   0.5 mV       0.03125 mV
//!   8   8x     ±0.512 V   0.25 mV      0.015625 mV
//!  16   16x    ±0.256 V   0.125 mV     0.0078125 mV
//! ```
//!
//! Never exceed VDD + 0.3 V on an input regardless of the range selected.

use crate::error::AcqError;

/// Gain codes accepted from the host, in table order.
pub const GAIN_CODES: [i32; 6] = [23, 1, 2, 4, 8, 16];

/// ADS1x15 programmable gain amplifier setting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Gain {
    /// ±6.144 V
    TwoThirds,
    /// ±4.096 V
    One,
    /// ±2.048 V
    Two,
    /// ±1.024 V
    Four,
    /// ±0.512 V
    Eight,
    /// ±0.256 V
    Sixteen,
}

impl Gain {
    /// Setting used when the host code is not recognized.
    pub const FALLBACK: Gain = Gain::TwoThirds;

    /// Map a host gain code to a setting.
    pub const fn from_code(code: i32) -> Option<Gain> {
        match code {
            23 => Some(Gain::TwoThirds),
            1 => Some(Gain::One),
            2 => Some(Gain::Two),
            4 => Some(Gain::Four),
            8 => Some(Gain::Eight),
            16 => Some(Gain::Sixteen),
            _ => None,
        }
    }

    /// Host gain code of this setting.
    pub const fn code(self) -> i32 {
        match self {
            Gain::TwoThirds => 23,
            Gain::One => 1,
            Gain::Two => 2,
            Gain::Four => 4,
            Gain::Eight => 8,
            Gain::Sixteen => 16,
        }
    }

    /// Full-scale input range in millivolts (the range is ± this value).
    pub const fn full_scale_mv(self) -> u32 {
        match self {
            Gain::TwoThirds => 6144,
            Gain::One => 4096,
            Gain::Two => 2048,
            Gain::Four => 1024,
            Gain::Eight => 512,
            Gain::Sixteen => 256,
        }
    }

    /// PGA field of the ADS1x15 config register.
    pub const fn config_bits(self) -> u16 {
        match self {
            Gain::TwoThirds => 0x0000,
            Gain::One => 0x0200,
            Gain::Two => 0x0400,
            Gain::Four => 0x0600,
            Gain::Eight => 0x0800,
            Gain::Sixteen => 0x0A00,
        }
    }

    /// Short label, as the host shows it next to units.
    pub const fn label(self) -> &'static str {
        match self {
            Gain::TwoThirds => "2/3x",
            Gain::One => "1x",
            Gain::Two => "2x",
            Gain::Four => "4x",
            Gain::Eight => "8x",
            Gain::Sixteen => "16x",
        }
    }
}

/// Look up a host gain code.
///
/// Unrecognized codes resolve to [`Gain::FALLBACK`] together with
/// [`AcqError::UnknownGain`] so the caller can warn the operator.
pub fn lookup(code: i32) -> (Gain, Option<AcqError>) {
    match Gain::from_code(code) {
        Some(gain) => (gain, None),
        None => (Gain::FALLBACK, Some(AcqError::UnknownGain)),
    }
}
