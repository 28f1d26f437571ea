//! Host response parser tests

use pasc_firmware::config::HostRequest;
use pasc_firmware::handshake::{next_int, parse_host_response};

#[test]
fn test_next_int_simple() {
    assert_eq!(next_int(b"50"), Some((50, &b""[..])));
    assert_eq!(next_int(b"50\t2"), Some((50, &b"\t2"[..])));
}

#[test]
fn test_next_int_skips_leading_garbage() {
    assert_eq!(next_int(b"  rate=125"), Some((125, &b""[..])));
    assert_eq!(next_int(b"abc"), None);
    assert_eq!(next_int(b""), None);
}

#[test]
fn test_next_int_negative() {
    assert_eq!(next_int(b"-5"), Some((-5, &b""[..])));
    // A dash not followed by a digit is a separator
    assert_eq!(next_int(b"- 5"), Some((5, &b""[..])));
    assert_eq!(next_int(b"10-3"), Some((10, &b"-3"[..])));
}

#[test]
fn test_next_int_saturates() {
    assert_eq!(next_int(b"99999999999"), Some((i32::MAX, &b""[..])));
    assert_eq!(next_int(b"-99999999999"), Some((i32::MIN, &b""[..])));
    assert_eq!(next_int(b"-2147483648"), Some((i32::MIN, &b""[..])));
}

#[test]
fn test_parse_internal_rate_only() {
    assert_eq!(
        parse_host_response(b"50", false),
        HostRequest { sample_rate_hz: 50, gain_code: None, malformed: false }
    );
}

#[test]
fn test_parse_internal_ignores_extra_fields() {
    let req = parse_host_response(b"10\t4", false);
    assert_eq!(req.sample_rate_hz, 10);
    assert_eq!(req.gain_code, None);
    assert!(!req.malformed);
}

#[test]
fn test_parse_external_tab_separated() {
    assert_eq!(
        parse_host_response(b"100\t2", true),
        HostRequest { sample_rate_hz: 100, gain_code: Some(2), malformed: false }
    );
}

#[test]
fn test_parse_external_literal_slash_t() {
    // Some host scripts send a literal "/t" instead of a tab
    assert_eq!(
        parse_host_response(b"100/t16", true),
        HostRequest { sample_rate_hz: 100, gain_code: Some(16), malformed: false }
    );
}

#[test]
fn test_parse_external_space_separated() {
    let req = parse_host_response(b"860 23", true);
    assert_eq!(req.sample_rate_hz, 860);
    assert_eq!(req.gain_code, Some(23));
}

#[test]
fn test_parse_missing_gain_is_malformed() {
    assert_eq!(
        parse_host_response(b"100", true),
        HostRequest { sample_rate_hz: 100, gain_code: Some(0), malformed: true }
    );
}

#[test]
fn test_parse_garbage_is_malformed() {
    assert_eq!(
        parse_host_response(b"abc", false),
        HostRequest { sample_rate_hz: 0, gain_code: None, malformed: true }
    );
    assert_eq!(
        parse_host_response(b"", true),
        HostRequest { sample_rate_hz: 0, gain_code: Some(0), malformed: true }
    );
}

#[test]
fn test_parse_negative_rate_is_not_malformed() {
    // Range checking belongs to the rate resolver
    let req = parse_host_response(b"-10\t1", true);
    assert_eq!(req.sample_rate_hz, -10);
    assert_eq!(req.gain_code, Some(1));
    assert!(!req.malformed);
}

#[test]
fn test_next_int_skips_non_utf8_noise() {
    assert_eq!(next_int(&[0xFF, 0xFE, b'4', b'2']), Some((42, &b""[..])));
    assert_eq!(next_int(&[0xC3]), None);
}

#[test]
fn test_parse_noise_before_request() {
    let mut line = vec![0xFF, 0x00];
    line.extend_from_slice(b"100\t1");
    assert_eq!(
        parse_host_response(&line, true),
        HostRequest { sample_rate_hz: 100, gain_code: Some(1), malformed: false }
    );
}

#[test]
fn test_parse_split_multibyte_between_fields() {
    // Truncated UTF-8 sequence as separator
    assert_eq!(
        parse_host_response(&[b'5', b'0', 0xE2, 0x82, b'2'], true),
        HostRequest { sample_rate_hz: 50, gain_code: Some(2), malformed: false }
    );
}
