//! ADS1015 / ADS1115 ADC driver
//!
//! I2C single-shot conversions. Reference: ADS1x15 datasheet.
//!
//! Each read writes the config register (which starts the conversion), waits
//! the conversion time of the configured data rate, then reads the
//! conversion register. The wait makes every returned value a completed
//! conversion, so no settle read is needed.

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;

use crate::adc::AdcReader;
use crate::backend::BackendKind;
use crate::channels::DiffPair;
use crate::gain::Gain;

/// ADS1x15 register addresses
mod regs {
    pub const CONVERSION: u8 = 0x00;
    pub const CONFIG: u8 = 0x01;
}

/// ADS1x15 config register fields
mod config {
    /// Start single conversion
    pub const OS_SINGLE: u16 = 0x8000;
    /// Input multiplexer
    pub const MUX_DIFF_0_1: u16 = 0x0000;
    pub const MUX_DIFF_2_3: u16 = 0x3000;
    pub const MUX_SINGLE_0: u16 = 0x4000;
    /// Single-shot mode
    pub const MODE_SINGLE: u16 = 0x0100;
    /// 1600 SPS on ADS1015, 128 SPS on ADS1115
    pub const DR_DEFAULT: u16 = 0x0080;
    /// Comparator disable (traditional, active low, non-latching)
    pub const COMP_DISABLE: u16 = 0x0003;
}

/// Converter resolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolution {
    /// ADS1015: result left-aligned in the 16-bit register
    Bits12,
    /// ADS1115
    Bits16,
}

impl Resolution {
    /// Resolution of an external backend; `None` for the internal ADC.
    pub const fn for_backend(kind: BackendKind) -> Option<Self> {
        match kind {
            BackendKind::External12Bit => Some(Resolution::Bits12),
            BackendKind::External16Bit => Some(Resolution::Bits16),
            BackendKind::Internal => None,
        }
    }

    /// Conversion time at [`config::DR_DEFAULT`], rounded up.
    pub const fn conversion_delay_ms(self) -> u32 {
        match self {
            Resolution::Bits12 => 1,
            Resolution::Bits16 => 8,
        }
    }

    const fn shift(self) -> u32 {
        match self {
            Resolution::Bits12 => 4,
            Resolution::Bits16 => 0,
        }
    }
}

/// ADS1x15 driver error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ads1x15Error<E> {
    /// I2C communication error
    I2c(E),
    /// Pin index above AIN3
    InvalidPin(u8),
}

/// ADS1x15 driver
pub struct Ads1x15<I2C, D> {
    i2c: I2C,
    delay: D,
    addr: u8,
    resolution: Resolution,
    gain: Gain,
}

impl<I2C, D, E> Ads1x15<I2C, D>
where
    I2C: I2c<Error = E>,
    D: DelayNs,
{
    /// Create a new driver
    ///
    /// # Arguments
    ///
    /// * `i2c` - I2C bus
    /// * `delay` - Delay used to wait for conversion completion
    /// * `addr` - I2C address (0x48-0x4B depending on ADDR pin)
    /// * `resolution` - ADS1015 or ADS1115
    /// * `gain` - Input range applied to every conversion
    pub fn new(i2c: I2C, delay: D, addr: u8, resolution: Resolution, gain: Gain) -> Self {
        Self {
            i2c,
            delay,
            addr,
            resolution,
            gain,
        }
    }

    pub fn gain(&self) -> Gain {
        self.gain
    }

    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    /// Give back the bus and delay.
    pub fn release(self) -> (I2C, D) {
        (self.i2c, self.delay)
    }

    fn config_word(&self, mux: u16) -> u16 {
        config::OS_SINGLE
            | mux
            | self.gain.config_bits()
            | config::MODE_SINGLE
            | config::DR_DEFAULT
            | config::COMP_DISABLE
    }

    fn convert(&mut self, mux: u16) -> Result<i32, Ads1x15Error<E>> {
        let cfg = self.config_word(mux);
        self.i2c
            .write(self.addr, &[regs::CONFIG, (cfg >> 8) as u8, cfg as u8])
            .map_err(Ads1x15Error::I2c)?;

        self.delay.delay_ms(self.resolution.conversion_delay_ms());

        let mut buf = [0u8; 2];
        self.i2c
            .write_read(self.addr, &[regs::CONVERSION], &mut buf)
            .map_err(Ads1x15Error::I2c)?;

        // Arithmetic shift keeps the sign of 12-bit differential results
        let raw = i16::from_be_bytes(buf) >> self.resolution.shift();
        Ok(raw as i32)
    }
}

impl<I2C, D, E> AdcReader for Ads1x15<I2C, D>
where
    I2C: I2c<Error = E>,
    D: DelayNs,
    E: core::fmt::Debug,
{
    type Error = Ads1x15Error<E>;

    fn read_single_ended(&mut self, pin: u8) -> Result<i32, Self::Error> {
        if pin > 3 {
            return Err(Ads1x15Error::InvalidPin(pin));
        }
        self.convert(config::MUX_SINGLE_0 + ((pin as u16) << 12))
    }

    fn read_differential(&mut self, pair: DiffPair) -> Result<i32, Self::Error> {
        let mux = match pair {
            DiffPair::A01 => config::MUX_DIFF_0_1,
            DiffPair::A23 => config::MUX_DIFF_2_3,
        };
        self.convert(mux)
    }
}
