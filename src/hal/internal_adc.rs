//! On-chip ADC (ADC1, one-shot mode).
//!
//! Pin index `n` of a channel set maps to ADC1 channel `n`. Readings are raw
//! 12-bit counts at 12 dB attenuation. Differential input is not available.

use esp_idf_svc::sys::{self, esp, EspError};

use crate::adc::AdcReader;
use crate::channels::{Channel, ChannelSet, DiffPair};

/// Internal ADC error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InternalAdcError {
    /// ESP-IDF driver error
    Esp(EspError),
    /// Differential reads requested on the on-chip ADC
    DifferentialUnsupported,
}

/// One-shot driver for ADC1.
pub struct InternalAdc {
    handle: sys::adc_oneshot_unit_handle_t,
}

impl InternalAdc {
    /// Open ADC1 and configure every pin of `channels`.
    pub fn new(channels: &ChannelSet) -> Result<Self, EspError> {
        let mut handle: sys::adc_oneshot_unit_handle_t = core::ptr::null_mut();
        let unit_cfg = sys::adc_oneshot_unit_init_cfg_t {
            unit_id: sys::adc_unit_t_ADC_UNIT_1,
            ..Default::default()
        };
        // SAFETY: both pointers are valid for the duration of the call
        esp!(unsafe { sys::adc_oneshot_new_unit(&unit_cfg, &mut handle) })?;

        let adc = Self { handle };

        let chan_cfg = sys::adc_oneshot_chan_cfg_t {
            atten: sys::adc_atten_t_ADC_ATTEN_DB_12,
            bitwidth: sys::adc_bitwidth_t_ADC_BITWIDTH_DEFAULT,
        };
        for channel in channels.iter() {
            if let Channel::Pin(pin) = channel {
                // SAFETY: handle was created above and is still owned by `adc`
                esp!(unsafe {
                    sys::adc_oneshot_config_channel(adc.handle, pin as sys::adc_channel_t, &chan_cfg)
                })?;
            }
        }

        Ok(adc)
    }
}

impl Drop for InternalAdc {
    fn drop(&mut self) {
        // SAFETY: handle is valid until this point
        unsafe {
            sys::adc_oneshot_del_unit(self.handle);
        }
    }
}

impl AdcReader for InternalAdc {
    type Error = InternalAdcError;

    fn read_single_ended(&mut self, pin: u8) -> Result<i32, Self::Error> {
        let mut raw: i32 = 0;
        // SAFETY: handle is valid, raw outlives the call
        esp!(unsafe { sys::adc_oneshot_read(self.handle, pin as sys::adc_channel_t, &mut raw) })
            .map_err(InternalAdcError::Esp)?;
        Ok(raw)
    }

    fn read_differential(&mut self, _pair: DiffPair) -> Result<i32, Self::Error> {
        Err(InternalAdcError::DifferentialUnsupported)
    }
}
