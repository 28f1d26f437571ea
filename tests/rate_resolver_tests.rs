//! Sample rate resolver tests

use pasc_firmware::backend::{BackendKind, BackendProfile, InputMode};
use pasc_firmware::error::AcqError;
use pasc_firmware::rate::{self, FALLBACK_DELAY_MS};

fn profile(kind: BackendKind, mode: InputMode) -> BackendProfile {
    BackendProfile::new(kind, mode).unwrap()
}

fn internal() -> BackendProfile {
    profile(BackendKind::Internal, InputMode::SingleEnded)
}

fn ads1115() -> BackendProfile {
    profile(BackendKind::External16Bit, InputMode::SingleEnded)
}

fn ads1015() -> BackendProfile {
    profile(BackendKind::External12Bit, InputMode::Differential)
}

#[test]
fn test_internal_max_rate_leaves_no_delay() {
    assert_eq!(rate::resolve(50, &internal(), 1), Ok(0));
}

#[test]
fn test_internal_two_channels_at_10hz() {
    // 100 ms period minus 2 x 20 ms of reads
    assert_eq!(rate::resolve(10, &internal(), 2), Ok(60));
}

#[test]
fn test_internal_rate_limit_scales_with_channels() {
    let p = internal();
    assert_eq!(rate::max_rate_hz(&p, 1), 50);
    assert_eq!(rate::max_rate_hz(&p, 2), 25);
    assert_eq!(rate::resolve(25, &p, 2), Ok(0));
    assert_eq!(rate::resolve(26, &p, 2), Err(AcqError::SampleRateOutOfRange));
}

#[test]
fn test_ads1115_single_channel() {
    let p = ads1115();
    assert_eq!(rate::resolve(100, &p, 1), Ok(2));
    assert_eq!(rate::resolve(125, &p, 1), Ok(0));
    assert_eq!(rate::resolve(126, &p, 1), Err(AcqError::SampleRateOutOfRange));
}

#[test]
fn test_ads1015_top_rate_saturates_to_zero() {
    let p = ads1015();
    assert_eq!(rate::resolve(3300, &p, 1), Ok(0));
    assert_eq!(rate::resolve(1000, &p, 1), Ok(0));
    assert_eq!(rate::resolve(100, &p, 1), Ok(9));
    assert_eq!(rate::resolve(3301, &p, 1), Err(AcqError::SampleRateOutOfRange));
}

#[test]
fn test_ads1015_two_pairs_halve_the_limit() {
    let p = ads1015();
    assert_eq!(rate::max_rate_hz(&p, 2), 1650);
    assert_eq!(rate::resolve(1650, &p, 2), Ok(0));
    assert_eq!(rate::resolve(1651, &p, 2), Err(AcqError::SampleRateOutOfRange));
}

#[test]
fn test_period_truncates() {
    // 1000 / 3 = 333, minus 20
    assert_eq!(rate::resolve(3, &internal(), 1), Ok(313));
}

#[test]
fn test_zero_and_negative_rejected() {
    for hz in [0, -1, -50, i32::MIN] {
        assert_eq!(
            rate::resolve(hz, &internal(), 1),
            Err(AcqError::SampleRateOutOfRange),
            "{} Hz",
            hz
        );
    }
}

#[test]
fn test_fallback_delay_on_rejection() {
    assert_eq!(
        rate::resolve_or_fallback(0, &ads1115(), 1),
        (FALLBACK_DELAY_MS, Some(AcqError::SampleRateOutOfRange))
    );
    assert_eq!(
        rate::resolve_or_fallback(i32::MAX, &ads1115(), 1),
        (FALLBACK_DELAY_MS, Some(AcqError::SampleRateOutOfRange))
    );
    assert_eq!(FALLBACK_DELAY_MS, 1000);
}

#[test]
fn test_fallback_passes_valid_rate_through() {
    assert_eq!(rate::resolve_or_fallback(10, &internal(), 2), (60, None));
}

#[test]
fn test_resolve_is_deterministic() {
    let p = ads1115();
    for hz in [-3, 0, 1, 7, 62, 125, 126] {
        for n in 1..=4 {
            assert_eq!(rate::resolve(hz, &p, n), rate::resolve(hz, &p, n));
        }
    }
}

#[test]
fn test_delay_never_exceeds_period() {
    let p = internal();
    for n in 1..=6 {
        for hz in 1..=rate::max_rate_hz(&p, n) as i32 {
            let delay = rate::resolve(hz, &p, n).unwrap();
            assert!(delay + p.cycle_latency_ms(n) <= 1000 / hz as u32);
        }
    }
}
