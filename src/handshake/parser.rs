//! Host response parser
//!
//! Integers are scanned the way a serial stream reads them: any byte that is
//! not a digit (or a `-` directly before a digit) separates fields. Tabs,
//! spaces, stray characters such as a literal `/t` and line noise that is not
//! UTF-8 are all skipped.

use crate::config::HostRequest;

/// Scan the next integer in `bytes`.
///
/// Returns the value and the unparsed rest, or `None` if no digit is left.
/// Values beyond `i32` saturate.
pub fn next_int(bytes: &[u8]) -> Option<(i32, &[u8])> {
    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];
        let minus_before_digit = b == b'-' && bytes.get(i + 1).map_or(false, u8::is_ascii_digit);
        if b.is_ascii_digit() || minus_before_digit {
            break;
        }
        i += 1;
    }
    if i == bytes.len() {
        return None;
    }

    let negative = bytes[i] == b'-';
    if negative {
        i += 1;
    }

    let limit = i32::MAX as i64 + 1;
    let mut value: i64 = 0;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        value = (value * 10 + (bytes[i] - b'0') as i64).min(limit);
        i += 1;
    }

    let value = if negative { -value } else { value };
    let value = value.clamp(i32::MIN as i64, i32::MAX as i64) as i32;
    Some((value, &bytes[i..]))
}

/// Parse the host response line.
///
/// First integer: sample rate. Second integer (only when `expects_gain`):
/// gain code. A missing integer reads as 0 and marks the request malformed.
pub fn parse_host_response(line: &[u8], expects_gain: bool) -> HostRequest {
    let mut malformed = false;

    let (sample_rate_hz, rest) = match next_int(line) {
        Some((v, rest)) => (v, rest),
        None => {
            malformed = true;
            (0, &[][..])
        }
    };

    let gain_code = if expects_gain {
        match next_int(rest) {
            Some((v, _)) => Some(v),
            None => {
                malformed = true;
                Some(0)
            }
        }
    } else {
        None
    };

    HostRequest {
        sample_rate_hz,
        gain_code,
        malformed,
    }
}
