//! Parser for the `fn:format-time` picture mini-language: literal text mixed
//! with bracketed component markers such as `[H01]`, `[f,1-4]` or `[z]`.

use compact_str::CompactString;
use smallvec::SmallVec;

use crate::error::Error;
use crate::temporal::TimeValue;

/// Component letter of a picture marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Letter {
    /// `H`: hour of day (0-23).
    Hour,
    /// `h`: hour on the 12-hour clock (1-12).
    Hour12,
    /// `P`: am/pm marker.
    AmPm,
    /// `m`: minute.
    Minute,
    /// `s`: whole seconds.
    Second,
    /// `f`: fractional seconds.
    Fraction,
    /// `Z`: timezone offset as `+hh:mm`.
    TzNumeric,
    /// `z`: timezone offset as `GMT+hh:mm`.
    TzGmt,
    /// Recognized date-only component (`Y M D d F W w E C`); parses, but a
    /// time value cannot supply it.
    Reserved(char),
}

impl Letter {
    fn from_char(ch: char) -> Option<Self> {
        Some(match ch {
            'H' => Letter::Hour,
            'h' => Letter::Hour12,
            'P' => Letter::AmPm,
            'm' => Letter::Minute,
            's' => Letter::Second,
            'f' => Letter::Fraction,
            'Z' => Letter::TzNumeric,
            'z' => Letter::TzGmt,
            'Y' | 'M' | 'D' | 'd' | 'F' | 'W' | 'w' | 'E' | 'C' => Letter::Reserved(ch),
            _ => return None,
        })
    }

    pub fn as_char(self) -> char {
        match self {
            Letter::Hour => 'H',
            Letter::Hour12 => 'h',
            Letter::AmPm => 'P',
            Letter::Minute => 'm',
            Letter::Second => 's',
            Letter::Fraction => 'f',
            Letter::TzNumeric => 'Z',
            Letter::TzGmt => 'z',
            Letter::Reserved(ch) => ch,
        }
    }
}

/// One bound of a width clause: a digit count or `*`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidthBound {
    Fixed(usize),
    Unbounded,
}

/// Width clause `min-max` of a marker, parsed from `N`, `N-M`, `N-*` or `*-M`.
/// A single bound `N` means `min = max = N`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Width {
    pub min: WidthBound,
    pub max: WidthBound,
}

impl Width {
    pub fn min_digits(&self) -> Option<usize> {
        match self.min {
            WidthBound::Fixed(n) => Some(n),
            WidthBound::Unbounded => None,
        }
    }

    pub fn max_digits(&self) -> Option<usize> {
        match self.max {
            WidthBound::Fixed(n) => Some(n),
            WidthBound::Unbounded => None,
        }
    }
}

/// Case requested by a name presentation (`N`, `n`, `Nn`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameCase {
    Upper,
    Lower,
    Title,
}

/// Presentation modifier of a marker: a digit pattern for numeric components
/// (`1`, `01`, `##01`) or a case pattern for the am/pm marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Presentation {
    pattern: CompactString,
}

impl Presentation {
    /// Default presentation per component letter. Minute and second default to
    /// two zero-padded digits, the timezone to `01:01` (the `+hh:mm` shape),
    /// everything else to a single unpadded digit.
    fn default_for(letter: Letter) -> Self {
        let pattern = match letter {
            Letter::Minute | Letter::Second => "01",
            Letter::AmPm => "n",
            Letter::TzNumeric | Letter::TzGmt => "01:01",
            _ => "1",
        };
        Self {
            pattern: CompactString::new(pattern),
        }
    }

    fn parse(pattern: &str, letter: Letter, marker: &str) -> Result<Self, Error> {
        let valid = match letter {
            Letter::AmPm => matches!(pattern, "N" | "n" | "Nn"),
            Letter::TzNumeric | Letter::TzGmt => pattern
                .chars()
                .all(|c| c.is_ascii_digit() || c == ':' || c == '#'),
            _ => {
                // optional digit signs first, then at least one mandatory digit
                let mandatory = pattern.trim_start_matches('#');
                !mandatory.is_empty() && mandatory.bytes().all(|b| b.is_ascii_digit())
            }
        };
        if !valid {
            return Err(Error::invalid_picture(format!(
                "invalid presentation modifier in picture component [{marker}]"
            )));
        }
        Ok(Self {
            pattern: CompactString::new(pattern),
        })
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Number of mandatory digit signs in the pattern.
    pub fn mandatory_digits(&self) -> usize {
        self.pattern.bytes().filter(u8::is_ascii_digit).count()
    }

    /// Number of optional digit signs (`#`) in the pattern.
    pub fn optional_digits(&self) -> usize {
        self.pattern.bytes().filter(|b| *b == b'#').count()
    }

    /// Whether the pattern requests zero-padding to its mandatory width.
    pub fn zero_padded(&self) -> bool {
        self.pattern.bytes().any(|b| b == b'0')
    }

    pub fn name_case(&self) -> NameCase {
        match self.pattern.as_str() {
            "N" => NameCase::Upper,
            "Nn" => NameCase::Title,
            _ => NameCase::Lower,
        }
    }
}

/// One parsed component marker, e.g. `[H01]` or `[f,1-4]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Marker {
    pub letter: Letter,
    pub presentation: Presentation,
    pub width: Option<Width>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PictureItem {
    Literal(CompactString),
    Marker(Marker),
}

/// A parsed picture string. Parsing is side-effect free, so a `Picture` may be
/// cached per picture string and formatted from any number of threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Picture {
    items: SmallVec<[PictureItem; 8]>,
}

impl Picture {
    /// Parses a picture string into its ordered literal/marker nodes.
    /// Doubled brackets (`[[`, `]]`) unescape to literal brackets; an
    /// unescaped `[` opens a marker read up to the next `]`.
    pub fn parse(picture: &str) -> Result<Self, Error> {
        tracing::trace!(len = picture.len(), "parsing time picture");
        let mut items: SmallVec<[PictureItem; 8]> = SmallVec::new();
        let mut literal = CompactString::default();
        let mut chars = picture.chars().peekable();
        while let Some(ch) = chars.next() {
            match ch {
                '[' => {
                    if chars.peek() == Some(&'[') {
                        chars.next();
                        literal.push('[');
                        continue;
                    }
                    if !literal.is_empty() {
                        items.push(PictureItem::Literal(std::mem::take(&mut literal)));
                    }
                    let mut body = CompactString::default();
                    let mut closed = false;
                    for c in chars.by_ref() {
                        if c == ']' {
                            closed = true;
                            break;
                        }
                        body.push(c);
                    }
                    if !closed {
                        return Err(Error::invalid_picture(format!(
                            "unclosed [ in picture: {picture}"
                        )));
                    }
                    items.push(PictureItem::Marker(parse_marker(&body)?));
                }
                ']' => {
                    if chars.peek() == Some(&']') {
                        chars.next();
                        literal.push(']');
                    } else {
                        return Err(Error::invalid_picture(format!(
                            "unmatched ] in picture: {picture}"
                        )));
                    }
                }
                c => literal.push(c),
            }
        }
        if !literal.is_empty() {
            items.push(PictureItem::Literal(literal));
        }
        Ok(Self { items })
    }

    pub fn items(&self) -> &[PictureItem] {
        &self.items
    }

    /// Formats `value` according to this picture.
    pub fn format(&self, value: &TimeValue) -> Result<String, Error> {
        crate::format::format_picture(self, value)
    }
}

fn parse_marker(raw: &str) -> Result<Marker, Error> {
    // whitespace inside a marker carries no meaning: [f, 1-4] == [f,1-4]
    let body: CompactString = raw.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    let mut chars = body.chars();
    let Some(first) = chars.next() else {
        return Err(Error::invalid_picture("empty component in picture"));
    };
    let Some(letter) = Letter::from_char(first) else {
        return Err(Error::invalid_picture(format!(
            "invalid component in picture: [{raw}]"
        )));
    };
    let rest = chars.as_str();
    let (pres_part, width_part) = match rest.split_once(',') {
        Some((p, w)) => (p, Some(w)),
        None => (rest, None),
    };
    let presentation = if pres_part.is_empty() {
        Presentation::default_for(letter)
    } else {
        Presentation::parse(pres_part, letter, raw)?
    };
    let width = width_part.map(|w| parse_width(w, raw)).transpose()?;
    Ok(Marker {
        letter,
        presentation,
        width,
    })
}

fn parse_width(clause: &str, marker: &str) -> Result<Width, Error> {
    let (lo, hi) = match clause.split_once('-') {
        Some((a, b)) => (a, Some(b)),
        None => (clause, None),
    };
    let min = parse_bound(lo, marker)?;
    let max = match hi {
        Some(b) => parse_bound(b, marker)?,
        None => min,
    };
    Ok(Width { min, max })
}

fn parse_bound(bound: &str, marker: &str) -> Result<WidthBound, Error> {
    if bound == "*" {
        return Ok(WidthBound::Unbounded);
    }
    let invalid = || {
        Error::invalid_picture(format!(
            "invalid width modifier in picture component [{marker}]"
        ))
    };
    let n: usize = bound.parse().map_err(|_| invalid())?;
    if n == 0 {
        return Err(invalid());
    }
    Ok(WidthBound::Fixed(n))
}
