//! Timestamp arithmetic across the epoch and across conventions.

use exodus_calendar::{DeltaError, ParseError, SOL_LENGTH, TimeConvention, add_delta, timedelta};

struct DeltaCase {
    start: &'static str,
    end:   &'static str,
    delta: i64,
}

#[test]
fn test_recorded_deltas() {
    let cases = [
        DeltaCase {
            start: "0001-01-01 00:00:00.000",
            end:   "0001-01-01 00:00:01.000",
            delta: 1000,
        },
        DeltaCase {
            start: "0001-01-02 00:00:00.000",
            end:   "0001-01-01 00:00:00.000",
            delta: -SOL_LENGTH,
        },
        DeltaCase {
            start: "-0001-12-54 00:00:00.000",
            end:   "0001-01-01 00:00:00.000",
            delta: SOL_LENGTH,
        },
        DeltaCase {
            start: "-0001-01-01 00:00:00.000",
            end:   "-0001-12-01 00:00:00.000",
            delta: SOL_LENGTH * 616,
        },
    ];

    for case in &cases {
        assert_eq!(
            timedelta(case.start, case.end, TimeConvention::Earth).unwrap(),
            case.delta,
            "{} -> {}",
            case.start,
            case.end
        );
    }
}

#[test]
fn test_sign_combinations() {
    // (positive, positive), (positive, negative), (negative, negative) in both orders
    let stamps = [
        "0003-01-54 16:26:39.852, Friday",
        "0030-03-51 12:26:45.556, Tuesday",
        "-0003-12-01 08:12:55.392, Monday",
        "-0029-01-01 20:43:38.182, Monday",
    ];

    for convention in [TimeConvention::Earth, TimeConvention::Mtc] {
        for a in stamps {
            for b in stamps {
                let delta = timedelta(a, b, convention).unwrap();
                assert_eq!(add_delta(a, delta, convention).unwrap(), b);
                assert_eq!(add_delta(b, -delta, convention).unwrap(), a);
                assert_eq!(timedelta(b, a, convention).unwrap(), -delta);
            }
        }
    }
}

#[test]
fn test_conventions_disagree_on_clock_readings() {
    let start = "0001-01-01 00:00:00.000";
    let end = "0001-01-01 12:00:00.000";
    let earth = timedelta(start, end, TimeConvention::Earth).unwrap();
    let mtc = timedelta(start, end, TimeConvention::Mtc).unwrap();
    assert_eq!(earth, 43_200_000);
    assert_eq!(mtc, SOL_LENGTH / 2);
}

#[test]
fn test_errors_surface_parse_failures() {
    let result = add_delta("0001-13-01 00:00:00.000", 1, TimeConvention::Earth);
    assert!(matches!(result, Err(DeltaError::ParseError(ParseError::InvalidMonth(13)))));

    let result = timedelta("", "0001-01-01 00:00:00.000", TimeConvention::Earth);
    assert!(matches!(result, Err(DeltaError::ParseError(ParseError::EmptyInput))));
}
