//! Orchestrates formatting of a parsed picture against a time value:
//! literal nodes are copied verbatim, each marker is checked for availability
//! and dispatched to its component formatter, and the pieces are concatenated.
//! Errors surface before anything of the failing node is appended, so a
//! failed call never leaves partial output.

mod fraction;
mod integer;
mod timezone;

use crate::error::Error;
use crate::picture::{Letter, Marker, Picture, PictureItem};
use crate::temporal::TimeValue;
use timezone::TzMode;

/// Formats `value` according to the picture string, parsing it first.
/// Callers formatting the same picture repeatedly can parse once via
/// [`Picture::parse`] and reuse the result.
pub fn format_time(value: &TimeValue, picture: &str) -> Result<String, Error> {
    Picture::parse(picture)?.format(value)
}

pub(crate) fn format_picture(picture: &Picture, value: &TimeValue) -> Result<String, Error> {
    tracing::trace!(nodes = picture.items().len(), "formatting time value");
    let mut out = String::new();
    for item in picture.items() {
        match item {
            PictureItem::Literal(text) => out.push_str(text),
            PictureItem::Marker(marker) => out.push_str(&format_marker(marker, value)?),
        }
    }
    Ok(out)
}

fn format_marker(marker: &Marker, value: &TimeValue) -> Result<String, Error> {
    let presentation = &marker.presentation;
    let width = marker.width.as_ref();
    match marker.letter {
        Letter::Hour => Ok(integer::format_integer(value.hour(), presentation, width)),
        Letter::Hour12 => {
            let hour = (value.hour() + 11) % 12 + 1;
            Ok(integer::format_integer(hour, presentation, width))
        }
        Letter::AmPm => Ok(integer::format_am_pm(value.hour(), presentation)),
        Letter::Minute => Ok(integer::format_integer(value.minute(), presentation, width)),
        Letter::Second => Ok(integer::format_integer(value.second(), presentation, width)),
        Letter::Fraction => {
            let digits = value
                .fraction_digits()
                .ok_or_else(|| Error::unavailable_component('f'))?;
            Ok(fraction::format_fraction(digits, presentation, width))
        }
        Letter::TzNumeric | Letter::TzGmt => {
            let offset = value
                .offset_minutes()
                .ok_or_else(|| Error::unavailable_component(marker.letter.as_char()))?;
            let mode = if marker.letter == Letter::TzGmt {
                TzMode::Gmt
            } else {
                TzMode::Numeric
            };
            timezone::format_timezone(Some(offset), mode, width)
        }
        Letter::Reserved(ch) => Err(Error::unavailable_component(ch)),
    }
}
