//! Acquisition error taxonomy
//!
//! None of the runtime variants is fatal: each has a recovery path and the
//! device keeps emitting well-formed lines. The board variants are caught when
//! the board description is validated, before any peripheral is touched.

/// Acquisition error with code and message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AcqError {
    /// E01: Requested sample rate outside `[1, max_rate]`
    SampleRateOutOfRange,
    /// E02: Gain code not in the gain table
    UnknownGain,
    /// E03: Host response missing an integer field
    MalformedInput,
    /// E04: Backend reported a failed conversion
    ReadFailure,
    /// E05: Backend cannot run in the requested input mode
    UnsupportedMode,
    /// E06: More channels than the backend provides
    TooManyChannels,
    /// E07: Channel does not exist for the backend or mode
    InvalidChannel,
    /// E08: Channel listed twice
    DuplicateChannel,
    /// E09: Empty channel list
    NoChannels,
}

impl AcqError {
    /// Get error code string
    pub const fn code(&self) -> &'static str {
        match self {
            Self::SampleRateOutOfRange => "E01",
            Self::UnknownGain => "E02",
            Self::MalformedInput => "E03",
            Self::ReadFailure => "E04",
            Self::UnsupportedMode => "E05",
            Self::TooManyChannels => "E06",
            Self::InvalidChannel => "E07",
            Self::DuplicateChannel => "E08",
            Self::NoChannels => "E09",
        }
    }

    /// Get error message
    pub const fn message(&self) -> &'static str {
        match self {
            Self::SampleRateOutOfRange => "sample rate out of bound",
            Self::UnknownGain => "unknown gain setting",
            Self::MalformedInput => "malformed host configuration",
            Self::ReadFailure => "ADC read failed",
            Self::UnsupportedMode => "input mode not supported by backend",
            Self::TooManyChannels => "too many channels for backend",
            Self::InvalidChannel => "channel not available on backend",
            Self::DuplicateChannel => "channel selected twice",
            Self::NoChannels => "no channel selected",
        }
    }
}

impl core::fmt::Display for AcqError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}: {}", self.code(), self.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_code() {
        let s = format!("{}", AcqError::UnknownGain);
        assert_eq!(s, "E02: unknown gain setting");
    }

    #[test]
    fn test_codes_are_unique() {
        let all = [
            AcqError::SampleRateOutOfRange,
            AcqError::UnknownGain,
            AcqError::MalformedInput,
            AcqError::ReadFailure,
            AcqError::UnsupportedMode,
            AcqError::TooManyChannels,
            AcqError::InvalidChannel,
            AcqError::DuplicateChannel,
            AcqError::NoChannels,
        ];
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert_ne!(a.code(), b.code());
            }
        }
    }
}
