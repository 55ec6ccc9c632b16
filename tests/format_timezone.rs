use rstest::rstest;
use xpath_picture::{ErrorCode, TimeValue, format_time};

fn with_offset(minutes: i32) -> TimeValue {
    TimeValue::new(9, 15, 6)
        .unwrap()
        .with_offset_minutes(minutes)
        .unwrap()
}

#[rstest]
#[case(840, "[Z]", "+14:00")]
#[case(840, "[z]", "GMT+14:00")]
#[case(0, "[Z]", "+00:00")]
#[case(0, "[z]", "GMT+00:00")]
#[case(-30, "[Z]", "-00:30")]
#[case(-750, "[z]", "GMT-12:30")]
#[case(330, "[Z]", "+05:30")]
fn offset_rendering(#[case] minutes: i32, #[case] picture: &str, #[case] expected: &str) {
    assert_eq!(format_time(&with_offset(minutes), picture).unwrap(), expected);
}

#[rstest]
fn corpus_timezone_pictures() {
    // 09:15 in the extreme eastern timezone, both notations
    assert_eq!(
        format_time(&with_offset(840), "[h01][m01][Z]").unwrap(),
        "0915+14:00"
    );
    assert_eq!(
        format_time(&with_offset(840), "[h01][m01][z]").unwrap(),
        "0915GMT+14:00"
    );
}

#[rstest]
#[case("[Z,6]")]
#[case("[Z,2-6]")]
#[case("[Z,6-*]")]
fn width_windows_admitting_the_rendering_are_no_ops(#[case] picture: &str) {
    assert_eq!(format_time(&with_offset(330), picture).unwrap(), "+05:30");
    let gmt = picture.replace('Z', "z");
    assert_eq!(format_time(&with_offset(330), &gmt).unwrap(), "GMT+05:30");
}

#[rstest]
#[case("[Z,1]")]
#[case("[Z,1-1]")]
#[case("[z,1]")]
fn width_too_narrow_for_hours_is_a_syntax_error(#[case] picture: &str) {
    let err = format_time(&with_offset(330), picture).unwrap_err();
    assert_eq!(err.code, ErrorCode::FOFD1340);
}

#[rstest]
#[case("[Z]", 'Z')]
#[case("[z]", 'z')]
fn offset_must_be_present(#[case] picture: &str, #[case] letter: char) {
    let value = TimeValue::new(9, 15, 6).unwrap();
    let err = format_time(&value, picture).unwrap_err();
    assert_eq!(err.code, ErrorCode::FOFD1350);
    assert_eq!(err.component, Some(letter));
}
