/*!
 * Tests for time encoding conversions
 */

use phrasesync::time_code;

/// The three encodings of the same instant
#[test]
fn test_encodings_withSameInstant_shouldAgree() {
    let seconds = 3661.234;
    assert_eq!(time_code::to_srt_time(seconds), "01:01:01,234");
    assert_eq!(time_code::to_styled_time(seconds), "1:01:01.23");
    assert_eq!(time_code::to_human_time(seconds), "61:01");
}

#[test]
fn test_toSrtTime_withSubSecondValues_shouldTruncateMilliseconds() {
    assert_eq!(time_code::to_srt_time(0.1), "00:00:00,100");
    assert_eq!(time_code::to_srt_time(1.9996), "00:00:01,999");
}

#[test]
fn test_toStyledTime_withSubSecondValues_shouldTruncateCentiseconds() {
    assert_eq!(time_code::to_styled_time(0.129), "0:00:00.12");
    assert_eq!(time_code::to_styled_time(12.0), "0:00:12.00");
}

#[test]
fn test_parseHumanTime_shouldInvertToHumanTime() {
    for seconds in [0u64, 59, 60, 61, 135, 3599] {
        let encoded = time_code::to_human_time(seconds as f64);
        assert_eq!(time_code::parse_human_time(&encoded), seconds as f64);
    }
}

#[test]
fn test_parseHumanTime_withSpecialInputs_shouldBePermissive() {
    assert_eq!(time_code::parse_human_time("02:15"), 135.0);
    assert_eq!(time_code::parse_human_time("1:05"), 65.0);
    assert_eq!(time_code::parse_human_time("no colon"), 0.0);
    assert_eq!(time_code::parse_human_time("1:2:3"), 0.0);
}

#[test]
fn test_srtTimeToStyledTime_shouldReparseHoursAndRound() {
    assert_eq!(
        time_code::srt_time_to_styled_time("00:00:01,000").unwrap(),
        "0:00:01.00"
    );
    assert_eq!(
        time_code::srt_time_to_styled_time("10:30:45,005").unwrap(),
        "10:30:45.01"
    );
    assert_eq!(
        time_code::srt_time_to_styled_time("01:02:03,456").unwrap(),
        "1:02:03.46"
    );
}

#[test]
fn test_srtTimeToStyledTime_withMalformedField_shouldReturnTypedError() {
    let err = time_code::srt_time_to_styled_time("0:00:01,000").unwrap_err();
    assert!(err.to_string().contains("Malformed time field"));
}
