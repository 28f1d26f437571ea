//! Session configuration resolved from the host handshake.

use crate::backend::BackendProfile;
use crate::error::AcqError;
use crate::gain::{self, Gain};
use crate::rate;

/// Maximum number of warnings a resolution can raise.
pub const MAX_WARNINGS: usize = 3;

/// Raw values parsed from the host response.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HostRequest {
    /// Requested rate; 0 when the field was missing.
    pub sample_rate_hz: i32,
    /// Gain code; `None` when the backend takes no gain.
    pub gain_code: Option<i32>,
    /// A required integer field was missing.
    pub malformed: bool,
}

/// Acquisition settings, fixed for the process lifetime.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Configuration {
    pub requested_sample_rate_hz: i32,
    pub gain_code: Option<i32>,
    /// Delay after each cycle; [`rate::FALLBACK_DELAY_MS`] if the rate was rejected.
    pub resolved_delay_ms: u32,
    /// `None` on the internal backend.
    pub resolved_gain: Option<Gain>,
    warnings: [Option<AcqError>; MAX_WARNINGS],
}

impl Configuration {
    /// Resolve a host request against the backend.
    ///
    /// Never fails: rejected values are replaced by safe defaults and listed
    /// in [`Configuration::warnings`].
    pub fn resolve(profile: &BackendProfile, active_channels: usize, request: HostRequest) -> Self {
        let mut warnings = [None; MAX_WARNINGS];

        if request.malformed {
            warnings[0] = Some(AcqError::MalformedInput);
        }

        let (resolved_delay_ms, rate_err) =
            rate::resolve_or_fallback(request.sample_rate_hz, profile, active_channels);
        warnings[1] = rate_err;

        let (gain_code, resolved_gain) = if profile.is_external() {
            let code = request.gain_code.unwrap_or(0);
            let (gain, gain_err) = gain::lookup(code);
            warnings[2] = gain_err;
            (Some(code), Some(gain))
        } else {
            (None, None)
        };

        Self {
            requested_sample_rate_hz: request.sample_rate_hz,
            gain_code,
            resolved_delay_ms,
            resolved_gain,
            warnings,
        }
    }

    /// Warnings raised during resolution, in report order.
    pub fn warnings(&self) -> impl Iterator<Item = AcqError> + '_ {
        self.warnings.iter().flatten().copied()
    }

    /// True if the requested sample rate was honoured.
    pub fn rate_accepted(&self) -> bool {
        !self.warnings().any(|w| w == AcqError::SampleRateOutOfRange)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{BackendKind, InputMode};

    #[test]
    fn test_malformed_request_reports_both_faults() {
        let p = BackendProfile::new(BackendKind::Internal, InputMode::SingleEnded).unwrap();
        let cfg = Configuration::resolve(
            &p,
            1,
            HostRequest { sample_rate_hz: 0, gain_code: None, malformed: true },
        );

        let w: Vec<_> = cfg.warnings().collect();
        assert_eq!(w, [AcqError::MalformedInput, AcqError::SampleRateOutOfRange]);
        assert_eq!(cfg.resolved_delay_ms, rate::FALLBACK_DELAY_MS);
        assert_eq!(cfg.resolved_gain, None);
        assert!(!cfg.rate_accepted());
    }
}
