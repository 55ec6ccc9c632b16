use crate::error::Error;
use crate::picture::Width;

/// Rendering mode for the timezone offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TzMode {
    /// `[Z]`: `+hh:mm`.
    Numeric,
    /// `[z]`: `GMT+hh:mm`.
    Gmt,
}

/// Renders the UTC offset as `+hh:mm`, optionally behind a literal `GMT`
/// prefix. An absent offset renders as the empty string (callers normally
/// check availability first). The rendered numeric part is always two hour
/// and two minute digits, so any width window that admits it is a no-op;
/// a window too narrow for the two hour digits is a picture-syntax error.
pub(crate) fn format_timezone(
    offset_minutes: Option<i32>,
    mode: TzMode,
    width: Option<&Width>,
) -> Result<String, Error> {
    if let Some(max) = width.and_then(Width::max_digits)
        && max < 2
    {
        return Err(Error::invalid_picture(
            "timezone width too narrow for the hour digits",
        ));
    }
    let Some(minutes) = offset_minutes else {
        return Ok(String::new());
    };
    let sign = if minutes < 0 { '-' } else { '+' };
    let magnitude = minutes.unsigned_abs();
    let (hours, mins) = (magnitude / 60, magnitude % 60);
    let mut out = String::with_capacity(10);
    if mode == TzMode::Gmt {
        out.push_str("GMT");
    }
    out.push(sign);
    out.push_str(&format!("{hours:02}:{mins:02}"));
    Ok(out)
}
