use rstest::rstest;
use xpath_picture::{ErrorCode, TimeValue, format_time};

fn with_fraction(digits: &str) -> TimeValue {
    TimeValue::new(9, 15, 6)
        .unwrap()
        .with_fraction(digits)
        .unwrap()
}

// width-window cases from the QT3 format-time corpus, all on .456
#[rstest]
#[case("[f]", "5")]
#[case("[f,1-1]", "5")]
#[case("[f1,1-1]", "5")]
#[case("[f,2-2]", "46")]
#[case("[f,4-4]", "4560")]
#[case("[f,1-4]", "456")]
#[case("[f,2-5]", "456")]
#[case("[f,1-*]", "456")]
#[case("[f,*-2]", "46")]
#[case("[f,3]", "456")]
fn width_windows(#[case] picture: &str, #[case] expected: &str) {
    assert_eq!(format_time(&with_fraction("456"), picture).unwrap(), expected);
}

// the presentation pattern alone fixes the digit count
#[rstest]
#[case("[f01]", "46")]
#[case("[f001]", "456")]
#[case("[f0001]", "4560")]
fn presentation_driven_width(#[case] picture: &str, #[case] expected: &str) {
    assert_eq!(format_time(&with_fraction("456"), picture).unwrap(), expected);
}

#[rstest]
#[case("449", "4")]
#[case("45", "5")]
#[case("46", "5")]
#[case("96", "0")] // carry rolls out of the fractional digits
fn round_half_up_at_one_digit(#[case] digits: &str, #[case] expected: &str) {
    assert_eq!(
        format_time(&with_fraction(digits), "[f,1-1]").unwrap(),
        expected
    );
}

#[rstest]
fn short_fractions_zero_extend_to_the_minimum() {
    assert_eq!(format_time(&with_fraction("4"), "[f,3]").unwrap(), "400");
}

#[rstest]
fn trailing_zeros_carry_no_value() {
    assert_eq!(format_time(&with_fraction("4500"), "[f,1-*]").unwrap(), "45");
}

#[rstest]
fn widening_the_cap_never_changes_the_value() {
    for max in 3..8 {
        let picture = format!("[f,1-{max}]");
        assert_eq!(
            format_time(&with_fraction("456"), &picture).unwrap(),
            "456"
        );
    }
}

#[rstest]
fn rounding_is_idempotent() {
    let rounded = format_time(&with_fraction("456"), "[f,2-2]").unwrap();
    assert_eq!(rounded, "46");
    assert_eq!(format_time(&with_fraction(&rounded), "[f,2-2]").unwrap(), "46");
}

#[rstest]
fn fraction_requires_a_fractional_second() {
    let value = TimeValue::new(9, 15, 6).unwrap();
    let err = format_time(&value, "[f]").unwrap_err();
    assert_eq!(err.code, ErrorCode::FOFD1350);
    assert_eq!(err.component, Some('f'));
}
