//! ADC read capability.
//!
//! The acquisition loop only needs "raw count for this pin" and "raw count for
//! this pair". Drivers implement [`AdcReader`]; business logic never touches a
//! bus or register.

use crate::channels::{Channel, DiffPair};

/// Raw conversion source.
pub trait AdcReader {
    /// Driver-specific failure, logged with `{:?}`.
    type Error: core::fmt::Debug;

    /// Raw count of one pin against ground.
    fn read_single_ended(&mut self, pin: u8) -> Result<i32, Self::Error>;

    /// Raw signed count of a pin pair.
    fn read_differential(&mut self, pair: DiffPair) -> Result<i32, Self::Error>;

    /// Read whichever kind `channel` is.
    fn read(&mut self, channel: Channel) -> Result<i32, Self::Error> {
        match channel {
            Channel::Pin(pin) => self.read_single_ended(pin),
            Channel::Pair(pair) => self.read_differential(pair),
        }
    }
}

impl<T: AdcReader + ?Sized> AdcReader for &mut T {
    type Error = T::Error;

    fn read_single_ended(&mut self, pin: u8) -> Result<i32, Self::Error> {
        (**self).read_single_ended(pin)
    }

    fn read_differential(&mut self, pair: DiffPair) -> Result<i32, Self::Error> {
        (**self).read_differential(pair)
    }
}
