//! Acquisition loop.
//!
//! Single state, entered once after the handshake and never left:
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │ Sampling                                             │
//! │  a. read every channel in order (settle read on the  │
//! │     internal ADC)                                    │
//! │  b. emit one line: v0 \t v1 \t ... vN-1 \r\n         │
//! │  c. sleep resolved_delay_ms                          │
//! └──────────────────────────────────────────────────────┘
//! ```
//!
//! A failed read never stops the loop: the channel gets a substitute value
//! and the line stays well-formed.

use core::fmt::{self, Write};

use embedded_hal::delay::DelayNs;

use crate::adc::AdcReader;
use crate::backend::{BackendProfile, MAX_CHANNELS};
use crate::channels::{Channel, ChannelSet};
use crate::config::Configuration;
use crate::error::AcqError;
use crate::fault::{FaultCode, FaultState};
use crate::logging::LogStream;
use crate::uart_logger;
use crate::LINE_END;

/// Pause after each internal ADC read while the multiplexer settles.
pub const SETTLE_DELAY_MS: u32 = 10;

/// Emitted for a failed read. Outside the count range of every backend.
pub const READ_FAILURE_SENTINEL: i32 = i32::MIN;

/// Diagnostic entries written to the diagnostic sink per cycle.
pub const DIAG_DRAIN_PER_CYCLE: usize = 4;

/// Value emitted for a channel whose read failed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ReadFailurePolicy {
    /// Emit [`READ_FAILURE_SENTINEL`].
    #[default]
    Sentinel,
    /// Repeat the channel's last good value (sentinel if there is none yet).
    HoldLast,
}

#[derive(Clone, Copy, Debug, Default)]
struct ChannelHealth {
    last_good: Option<i32>,
    /// Consecutive failed reads
    streak: u32,
    /// Failed reads since start
    failures: u32,
}

/// Periodic sampler bound to one backend and one configuration.
pub struct AcquisitionLoop<'a, A, D> {
    adc: A,
    delay: D,
    profile: BackendProfile,
    channels: ChannelSet,
    delay_ms: u32,
    policy: ReadFailurePolicy,
    health: [ChannelHealth; MAX_CHANNELS],
    cycle: u32,
    log: &'a LogStream,
    faults: &'a FaultState,
}

impl<'a, A, D> AcquisitionLoop<'a, A, D>
where
    A: AdcReader,
    D: DelayNs,
{
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        adc: A,
        delay: D,
        profile: BackendProfile,
        channels: ChannelSet,
        config: &Configuration,
        policy: ReadFailurePolicy,
        log: &'a LogStream,
        faults: &'a FaultState,
    ) -> Self {
        Self {
            adc,
            delay,
            profile,
            channels,
            delay_ms: config.resolved_delay_ms,
            policy,
            health: [ChannelHealth::default(); MAX_CHANNELS],
            cycle: 0,
            log,
            faults,
        }
    }

    /// Cycles completed so far.
    pub fn cycle_count(&self) -> u32 {
        self.cycle
    }

    /// Failed reads of the channel at `position` since start.
    pub fn failures(&self, position: usize) -> u32 {
        self.health.get(position).map_or(0, |h| h.failures)
    }

    /// Run forever: one line per cycle, diagnostics drained in between.
    pub fn run(mut self, out: &mut dyn Write, diag: &mut dyn Write) -> ! {
        loop {
            // A host that stopped listening must not stop sampling
            let _ = self.cycle(out);
            uart_logger::drain(self.log, diag, DIAG_DRAIN_PER_CYCLE);
        }
    }

    /// One full cycle: read, emit, sleep.
    pub fn cycle(&mut self, out: &mut dyn Write) -> fmt::Result {
        self.cycle = self.cycle.wrapping_add(1);

        let mut values = [0i32; MAX_CHANNELS];
        let n = self.sample(&mut values);
        let result = write_line(out, &values[..n]);

        if self.delay_ms > 0 {
            self.delay.delay_ms(self.delay_ms);
        }
        result
    }

    /// Read every channel in order. Returns the number of values written.
    pub fn sample(&mut self, values: &mut [i32; MAX_CHANNELS]) -> usize {
        let channels = self.channels;
        for (position, channel) in channels.iter().enumerate() {
            let result = self.read_channel(channel);
            values[position] = self.settle(position, channel, result);
        }
        channels.len()
    }

    fn read_channel(&mut self, channel: Channel) -> Result<i32, A::Error> {
        if !self.profile.needs_settle_read() {
            return self.adc.read(channel);
        }

        // Only the second conversion is kept
        let _ = self.adc.read(channel);
        self.delay.delay_ms(SETTLE_DELAY_MS);
        let second = self.adc.read(channel);
        self.delay.delay_ms(SETTLE_DELAY_MS);
        second
    }

    /// Turn a read result into the value to emit, logging state changes.
    fn settle(&mut self, position: usize, channel: Channel, result: Result<i32, A::Error>) -> i32 {
        let health = &mut self.health[position];

        match result {
            Ok(value) => {
                if health.streak > 0 {
                    crate::diag_info!(
                        self.log,
                        self.cycle,
                        "{:?} recovered after {} failed read(s)",
                        channel,
                        health.streak
                    );
                    health.streak = 0;
                }
                health.last_good = Some(value);
                value
            }
            Err(e) => {
                health.failures = health.failures.saturating_add(1);
                health.streak = health.streak.saturating_add(1);
                if health.streak == 1 {
                    self.faults.set(FaultCode::ReadFailure, position as i32);
                    crate::diag_warn!(
                        self.log,
                        self.cycle,
                        "{} on {:?}: {:?}",
                        AcqError::ReadFailure,
                        channel,
                        e
                    );
                }

                match self.policy {
                    ReadFailurePolicy::Sentinel => READ_FAILURE_SENTINEL,
                    ReadFailurePolicy::HoldLast => health.last_good.unwrap_or(READ_FAILURE_SENTINEL),
                }
            }
        }
    }
}

/// Write one output line: tab between values, line end after the last.
pub fn write_line(out: &mut dyn Write, values: &[i32]) -> fmt::Result {
    let last = values.len().saturating_sub(1);
    for (i, value) in values.iter().enumerate() {
        if i < last {
            write!(out, "{}\t", value)?;
        } else {
            write!(out, "{}{}", value, LINE_END)?;
        }
    }
    Ok(())
}
