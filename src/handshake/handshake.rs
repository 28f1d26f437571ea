//! Handshake state machine

use core::fmt::Write;

use embedded_hal::delay::DelayNs;

use super::{parse_host_response, HostLink, LineBuffer};
use crate::backend::BackendProfile;
use crate::channels::ChannelSet;
use crate::config::Configuration;
use crate::error::AcqError;
use crate::fault::{FaultCode, FaultState};
use crate::gain::Gain;
use crate::logging::LogStream;
use crate::rate;
use crate::LINE_END;

/// Version string (set by build.rs, includes git hash)
pub const VERSION: &str = env!("VERSION_STRING");

/// Line printed between the banner and the prompt.
pub const WAITING_LINE: &str = "Waiting for host configuration...";

/// Idle time between polls while waiting for the host.
pub const POLL_INTERVAL_MS: u32 = 10;

/// Silence after which a partial response is taken as complete.
pub const HOST_READ_TIMEOUT_MS: u32 = 1000;

/// One-shot host configuration exchange.
pub struct Handshake<'a> {
    profile: &'a BackendProfile,
    active_channels: usize,
    log: &'a LogStream,
    faults: &'a FaultState,
}

impl<'a> Handshake<'a> {
    pub fn new(
        profile: &'a BackendProfile,
        channels: &ChannelSet,
        log: &'a LogStream,
        faults: &'a FaultState,
    ) -> Self {
        Self {
            profile,
            active_channels: channels.len(),
            log,
            faults,
        }
    }

    /// Run the whole exchange and return the resolved configuration.
    ///
    /// Blocks until the host sends something; there is no timeout on that
    /// wait since no sample rate is knowable without it.
    pub fn run<L: HostLink, D: DelayNs>(&self, link: &mut L, delay: &mut D) -> Configuration {
        self.announce(link);
        wait_for_host(link, delay);

        let mut line = LineBuffer::new();
        read_response(link, delay, &mut line);

        let request = parse_host_response(line.as_bytes(), self.profile.is_external());
        crate::diag_info!(
            self.log,
            0,
            "host request \"{}\" -> rate={} gain={:?}",
            line.as_bytes().escape_ascii(),
            request.sample_rate_hz,
            request.gain_code
        );

        let config = Configuration::resolve(self.profile, self.active_channels, request);
        self.report(&config, link);
        config
    }

    /// Banner, waiting line and prompt.
    pub fn announce(&self, out: &mut dyn Write) {
        let _ = write!(out, "{} - {}{}", VERSION, self.profile.name(), LINE_END);
        let _ = write!(out, "{}{}", WAITING_LINE, LINE_END);
        let _ = write!(out, "{}{}", self.profile.prompt(), LINE_END);
    }

    fn report(&self, config: &Configuration, out: &mut dyn Write) {
        for warning in config.warnings() {
            print_warning(warning, out);

            let data = match warning {
                AcqError::UnknownGain => config.gain_code.unwrap_or(0),
                _ => config.requested_sample_rate_hz,
            };
            self.faults.set(FaultCode::from(warning), data);
            crate::diag_warn!(self.log, 0, "{}", warning);
        }

        crate::diag_info!(
            self.log,
            0,
            "delay {} ms, max {} Hz on {} channel(s)",
            config.resolved_delay_ms,
            rate::max_rate_hz(self.profile, self.active_channels),
            self.active_channels
        );
        if let Some(gain) = config.resolved_gain {
            crate::diag_info!(self.log, 0, "gain {} (+/- {} mV)", gain.label(), gain.full_scale_mv());
        }
    }
}

/// Operator-visible error lines on the host link.
fn print_warning(warning: AcqError, out: &mut dyn Write) {
    match warning {
        AcqError::SampleRateOutOfRange => {
            let _ = write!(out, "ERROR: Sample rate out of bound{}", LINE_END);
        }
        AcqError::UnknownGain => {
            let mv = Gain::FALLBACK.full_scale_mv();
            let _ = write!(out, "ERROR: Unknown gain setting{}", LINE_END);
            let _ = write!(
                out,
                "  leaving default gain ({} gain +/- {}.{:03}V){}",
                Gain::FALLBACK.label(),
                mv / 1000,
                mv % 1000,
                LINE_END
            );
        }
        AcqError::MalformedInput => {
            let _ = write!(out, "ERROR: Malformed host configuration{}", LINE_END);
        }
        other => {
            let _ = write!(out, "ERROR: {}{}", other, LINE_END);
        }
    }
}

/// Busy-poll until at least one byte is available.
fn wait_for_host<L: HostLink, D: DelayNs>(link: &mut L, delay: &mut D) {
    while link.bytes_available() == 0 {
        delay.delay_ms(POLL_INTERVAL_MS);
    }
}

/// Collect the response line.
///
/// Ends at a line terminator after a non-empty payload, when the buffer is
/// full, or after [`HOST_READ_TIMEOUT_MS`] without a byte.
fn read_response<L: HostLink, D: DelayNs>(link: &mut L, delay: &mut D, line: &mut LineBuffer) {
    let mut idle_ms = 0;
    loop {
        match link.read_byte() {
            Some(b'\r') | Some(b'\n') => {
                idle_ms = 0;
                if !line.is_empty() {
                    return;
                }
            }
            Some(b) => {
                idle_ms = 0;
                line.push(b);
                if line.is_full() {
                    return;
                }
            }
            None => {
                if idle_ms >= HOST_READ_TIMEOUT_MS {
                    return;
                }
                delay.delay_ms(POLL_INTERVAL_MS);
                idle_ms += POLL_INTERVAL_MS;
            }
        }
    }
}
