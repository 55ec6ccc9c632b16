use crate::picture::{Presentation, Width};

/// Renders the fractional-second component under the round-then-pad rule.
///
/// `digits` is the exact decimal expansion of the fraction ("456" for .456).
/// The digit window comes from the width clause when present; otherwise a
/// multi-digit presentation pattern fixes it (`[f01]` means two digits) and a
/// bare `[f]` behaves like width 1.
pub(crate) fn format_fraction(
    digits: &str,
    presentation: &Presentation,
    width: Option<&Width>,
) -> String {
    // trailing zeros carry no value in an exact fraction
    let mut out: String = digits.trim_end_matches('0').to_string();

    let mandatory = presentation.mandatory_digits();
    let optional = presentation.optional_digits();
    let pattern_len = mandatory + optional;

    let (min, max) = match width {
        Some(w) => (w.min_digits().unwrap_or(mandatory), w.max_digits()),
        None if pattern_len > 1 => (mandatory, Some(pattern_len)),
        None => (1, Some(1)),
    };
    let min = min.max(mandatory);
    let max = max.map(|m| m.max(min));

    if let Some(m) = max
        && out.len() > m
    {
        out = round_half_up(&out, m);
    }
    while out.len() < min {
        out.push('0');
    }
    // optional digit positions drop trailing zeros again
    if optional > 0 {
        while out.len() > mandatory && out.ends_with('0') {
            out.pop();
        }
    }
    out
}

/// Round-half-up on a decimal digit string, keeping `len` digits. Pure string
/// arithmetic, so values like .456 never pick up binary representation error.
fn round_half_up(digits: &str, len: usize) -> String {
    let (keep, rest) = digits.split_at(len);
    let mut out: Vec<u8> = keep.bytes().collect();
    let mut carry = rest.as_bytes().first().is_some_and(|b| *b >= b'5');
    for b in out.iter_mut().rev() {
        if !carry {
            break;
        }
        if *b == b'9' {
            *b = b'0';
        } else {
            *b += 1;
            carry = false;
        }
    }
    // a carry out of the leading digit rolls the value up to 1.0; only the
    // zero digits remain in the fractional position
    out.into_iter().map(char::from).collect()
}
