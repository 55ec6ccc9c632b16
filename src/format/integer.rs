use crate::picture::{NameCase, Presentation, Width};

/// Renders an ordinal numeric component (hour, minute, second) under the
/// minimum-width/zero-pad rule. The natural digits are never truncated; a
/// width clause only ever extends the padding.
pub(crate) fn format_integer(
    value: u32,
    presentation: &Presentation,
    width: Option<&Width>,
) -> String {
    let digits = value.to_string();
    let mut pad = if presentation.zero_padded() {
        presentation.mandatory_digits()
    } else {
        1
    };
    if let Some(min) = width.and_then(Width::min_digits) {
        pad = pad.max(min);
    }
    if digits.len() >= pad {
        digits
    } else {
        format!("{digits:0>pad$}")
    }
}

/// Renders the am/pm marker; the presentation only selects the case.
pub(crate) fn format_am_pm(hour: u32, presentation: &Presentation) -> String {
    let name = if hour < 12 { "am" } else { "pm" };
    match presentation.name_case() {
        NameCase::Lower => name.to_string(),
        NameCase::Upper => name.to_ascii_uppercase(),
        NameCase::Title => {
            let mut out = name.to_string();
            out[..1].make_ascii_uppercase();
            out
        }
    }
}
