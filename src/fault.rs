//! Fault state for the PASC firmware.
//!
//! No fault stops acquisition. A fault only records what went wrong most
//! recently and how often, so the diagnostic UART (or a debugger) can tell a
//! healthy stream from one running on fallbacks.

use core::sync::atomic::{AtomicBool, AtomicI32, AtomicU32, AtomicU8, Ordering};

use crate::error::AcqError;

/// Fault codes recorded at runtime.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum FaultCode {
    /// No fault (normal operation).
    None = 0,

    /// Host asked for a rate the backend cannot deliver.
    /// Sampling runs at the 1 Hz fallback.
    SampleRateOutOfRange = 1,

    /// Host sent a gain code outside the table.
    /// Sampling runs at the widest input range.
    UnknownGain = 2,

    /// Host response was missing a field.
    MalformedInput = 3,

    /// A channel read failed. Data: channel position in the set.
    ReadFailure = 4,
}

impl FaultCode {
    /// Convert from raw u8 value.
    pub fn from_u8(value: u8) -> Self {
        match value {
            1 => FaultCode::SampleRateOutOfRange,
            2 => FaultCode::UnknownGain,
            3 => FaultCode::MalformedInput,
            4 => FaultCode::ReadFailure,
            _ => FaultCode::None,
        }
    }
}

impl From<AcqError> for FaultCode {
    fn from(err: AcqError) -> Self {
        match err {
            AcqError::SampleRateOutOfRange => FaultCode::SampleRateOutOfRange,
            AcqError::UnknownGain => FaultCode::UnknownGain,
            AcqError::MalformedInput => FaultCode::MalformedInput,
            AcqError::ReadFailure => FaultCode::ReadFailure,
            // Board errors never reach runtime
            _ => FaultCode::None,
        }
    }
}

/// Most recent fault plus a running count.
///
/// ```ignore
/// static FAULTS: FaultState = FaultState::new();
///
/// if let Err(e) = adc.read_single_ended(pin) {
///     FAULTS.set(FaultCode::ReadFailure, position as i32);
/// }
/// ```
pub struct FaultState {
    /// True once any fault was recorded.
    active: AtomicBool,

    /// Code of the most recent fault.
    code: AtomicU8,

    /// Additional data (meaning depends on the code).
    data: AtomicI32,

    /// Total fault count since boot (never cleared).
    count: AtomicU32,
}

impl FaultState {
    /// Create new fault state (no fault).
    pub const fn new() -> Self {
        Self {
            active: AtomicBool::new(false),
            code: AtomicU8::new(0),
            data: AtomicI32::new(0),
            count: AtomicU32::new(0),
        }
    }

    /// Record a fault and increment the counter.
    #[inline]
    pub fn set(&self, code: FaultCode, data: i32) {
        self.code.store(code as u8, Ordering::Release);
        self.data.store(data, Ordering::Release);
        self.count.fetch_add(1, Ordering::Relaxed);
        self.active.store(true, Ordering::Release);
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::Acquire)
    }

    /// Code of the most recent fault (only meaningful if `is_active()`).
    #[inline]
    pub fn code(&self) -> FaultCode {
        FaultCode::from_u8(self.code.load(Ordering::Acquire))
    }

    #[inline]
    pub fn data(&self) -> i32 {
        self.data.load(Ordering::Acquire)
    }

    /// Total fault count since boot.
    #[inline]
    pub fn count(&self) -> u32 {
        self.count.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn snapshot(&self) -> FaultSnapshot {
        FaultSnapshot {
            active: self.is_active(),
            code: self.code(),
            data: self.data(),
            count: self.count(),
        }
    }
}

impl Default for FaultState {
    fn default() -> Self {
        Self::new()
    }
}

/// Snapshot of fault state at a point in time.
#[derive(Clone, Copy, Debug)]
pub struct FaultSnapshot {
    pub active: bool,
    pub code: FaultCode,
    pub data: i32,
    pub count: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fault_state_basic() {
        let fault = FaultState::new();

        assert!(!fault.is_active());
        assert_eq!(fault.code(), FaultCode::None);
        assert_eq!(fault.count(), 0);

        fault.set(FaultCode::ReadFailure, 2);

        let snap = fault.snapshot();
        assert!(snap.active);
        assert_eq!(snap.code, FaultCode::ReadFailure);
        assert_eq!(snap.data, 2);
        assert_eq!(snap.count, 1);
    }

    #[test]
    fn test_data_keeps_sign() {
        let fault = FaultState::new();
        fault.set(FaultCode::SampleRateOutOfRange, -10);
        assert_eq!(fault.data(), -10);
        assert_eq!(fault.snapshot().data, -10);
    }

    #[test]
    fn test_from_acq_error() {
        assert_eq!(FaultCode::from(AcqError::UnknownGain), FaultCode::UnknownGain);
        assert_eq!(FaultCode::from(AcqError::TooManyChannels), FaultCode::None);
        for code in 0..=4u8 {
            assert_eq!(FaultCode::from_u8(code) as u8, code);
        }
    }
}
