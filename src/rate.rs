//! Sample rate resolver.
//!
//! Converts the host-requested rate into the delay inserted after each
//! acquisition cycle. Reads already take `latency × channels` ms, so that time
//! is removed from the period.
//!
//! All arithmetic is integer: `1000 / hz` truncates, it does not round.

use crate::backend::BackendProfile;
use crate::error::AcqError;

/// Delay used when the requested rate cannot be honoured (1 Hz).
pub const FALLBACK_DELAY_MS: u32 = 1000;

/// Highest rate the backend sustains with `active_channels` channels.
///
/// Returns 0 when no channel is active.
pub const fn max_rate_hz(profile: &BackendProfile, active_channels: usize) -> u32 {
    if active_channels == 0 {
        return 0;
    }
    profile.max_sample_rate_hz / active_channels as u32
}

/// Resolve a requested rate into an inter-cycle delay in milliseconds.
///
/// Valid iff `1 <= requested_hz <= max_rate_hz(profile, active_channels)`.
/// Pure: identical inputs always give the identical result.
pub const fn resolve(
    requested_hz: i32,
    profile: &BackendProfile,
    active_channels: usize,
) -> Result<u32, AcqError> {
    let max = max_rate_hz(profile, active_channels);
    if requested_hz < 1 || requested_hz as u32 > max {
        return Err(AcqError::SampleRateOutOfRange);
    }

    let period_ms = 1000 / requested_hz as u32;
    // Saturates only on the 12-bit converter, whose 1 ms latency is a
    // rounded-up bound of the real conversion time.
    Ok(period_ms.saturating_sub(profile.cycle_latency_ms(active_channels)))
}

/// Resolve, substituting [`FALLBACK_DELAY_MS`] on failure.
pub fn resolve_or_fallback(
    requested_hz: i32,
    profile: &BackendProfile,
    active_channels: usize,
) -> (u32, Option<AcqError>) {
    match resolve(requested_hz, profile, active_channels) {
        Ok(delay_ms) => (delay_ms, None),
        Err(e) => (FALLBACK_DELAY_MS, Some(e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{BackendKind, InputMode};

    #[test]
    fn test_no_channels_is_out_of_range() {
        let p = BackendProfile::new(BackendKind::External16Bit, InputMode::SingleEnded).unwrap();
        assert_eq!(max_rate_hz(&p, 0), 0);
        assert_eq!(resolve(1, &p, 0), Err(AcqError::SampleRateOutOfRange));
    }

    #[test]
    fn test_max_rate_matches_latency_bound() {
        // internal and 16-bit: max_sample_rate_hz / n == 1000 / (L * n)
        for kind in [BackendKind::Internal, BackendKind::External16Bit] {
            let p = BackendProfile::new(kind, InputMode::SingleEnded).unwrap();
            for n in 1..=p.channel_capacity as usize {
                assert_eq!(max_rate_hz(&p, n), 1000 / p.cycle_latency_ms(n));
            }
        }
    }
}
