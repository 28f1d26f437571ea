//! Ordered set of active channels.
//!
//! The order is the output column order. The set is validated against the
//! backend profile once and never changes afterwards.

use crate::backend::{BackendProfile, InputMode, MAX_CHANNELS};
use crate::error::AcqError;

/// Differential input pair of the ADS1x15.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DiffPair {
    /// AIN0 - AIN1
    A01,
    /// AIN2 - AIN3
    A23,
}

impl DiffPair {
    /// Pair index (0 for A01, 1 for A23).
    pub const fn index(self) -> u8 {
        match self {
            DiffPair::A01 => 0,
            DiffPair::A23 => 1,
        }
    }
}

/// One acquisition channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Channel {
    /// Single-ended pin index.
    Pin(u8),
    /// Differential pair.
    Pair(DiffPair),
}

impl Channel {
    const fn same(a: Channel, b: Channel) -> bool {
        match (a, b) {
            (Channel::Pin(x), Channel::Pin(y)) => x == y,
            (Channel::Pair(x), Channel::Pair(y)) => x.index() == y.index(),
            _ => false,
        }
    }

    /// Check that this channel exists on `profile`.
    pub const fn check(self, profile: &BackendProfile) -> Result<(), AcqError> {
        match (self, profile.mode) {
            (Channel::Pin(pin), InputMode::SingleEnded) if pin < profile.channel_capacity => Ok(()),
            (Channel::Pair(pair), InputMode::Differential) if pair.index() < profile.channel_capacity => {
                Ok(())
            }
            _ => Err(AcqError::InvalidChannel),
        }
    }
}

/// Validate a channel list against a profile.
///
/// Usable in `const` context so a board description can be checked at
/// compile time.
pub const fn validate(profile: &BackendProfile, channels: &[Channel]) -> Result<(), AcqError> {
    if channels.is_empty() {
        return Err(AcqError::NoChannels);
    }
    if channels.len() > profile.channel_capacity as usize {
        return Err(AcqError::TooManyChannels);
    }

    let mut i = 0;
    while i < channels.len() {
        if let Err(e) = channels[i].check(profile) {
            return Err(e);
        }
        let mut j = 0;
        while j < i {
            if Channel::same(channels[i], channels[j]) {
                return Err(AcqError::DuplicateChannel);
            }
            j += 1;
        }
        i += 1;
    }
    Ok(())
}

/// Active channels, in output order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChannelSet {
    entries: [Channel; MAX_CHANNELS],
    len: usize,
}

impl ChannelSet {
    /// Build a validated set, preserving the given order.
    pub fn new(profile: &BackendProfile, channels: &[Channel]) -> Result<Self, AcqError> {
        validate(profile, channels)?;

        let mut entries = [Channel::Pin(0); MAX_CHANNELS];
        entries[..channels.len()].copy_from_slice(channels);
        Ok(Self {
            entries,
            len: channels.len(),
        })
    }

    /// Number of active channels.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always false for a validated set.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Channels in output order.
    pub fn as_slice(&self) -> &[Channel] {
        &self.entries[..self.len]
    }

    pub fn iter(&self) -> impl Iterator<Item = Channel> + '_ {
        self.as_slice().iter().copied()
    }
}
