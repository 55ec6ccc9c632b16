use core::fmt;

/// Namespace URI used for W3C-defined XPath/XQuery error codes (xqt-errors).
pub const ERR_NS: &str = "http://www.w3.org/2005/xqt-errors";

/// Expanded QName of an error code.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ExpandedName {
    pub ns_uri: Option<String>,
    pub local: String,
}

/// Canonicalized set of XPath/XQuery error codes this crate emits.
/// This is intentionally small; variants are introduced when first needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// Invalid date/time picture syntax.
    FOFD1340,
    /// Picture references a component not available on the supplied value.
    FOFD1350,
    /// Invalid lexical form / value out of range.
    FORG0001,
}

impl ErrorCode {
    pub fn local(self) -> &'static str {
        match self {
            ErrorCode::FOFD1340 => "FOFD1340",
            ErrorCode::FOFD1350 => "FOFD1350",
            ErrorCode::FORG0001 => "FORG0001",
        }
    }

    /// Returns the QName (ExpandedName) for this spec-defined error code.
    pub fn qname(self) -> ExpandedName {
        ExpandedName {
            ns_uri: Some(ERR_NS.to_string()),
            local: self.local().to_string(),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "err:{}", self.local())
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub struct Error {
    pub code: ErrorCode,
    pub message: String,
    /// Offending component letter for `FOFD1350` errors.
    pub component: Option<char>,
}

impl Error {
    pub fn from_code(code: ErrorCode, msg: impl Into<String>) -> Self {
        Self {
            code,
            message: msg.into(),
            component: None,
        }
    }

    /// Picture-syntax error (`err:FOFD1340`).
    pub fn invalid_picture(msg: impl Into<String>) -> Self {
        Self::from_code(ErrorCode::FOFD1340, msg)
    }

    /// Unavailable-component error (`err:FOFD1350`) carrying the letter.
    pub fn unavailable_component(letter: char) -> Self {
        Self {
            code: ErrorCode::FOFD1350,
            message: format!("component [{letter}] not available in this date/time value"),
            component: Some(letter),
        }
    }

    /// Format the code as a human-readable string (err:LOCAL).
    pub fn format_code(&self) -> String {
        self.code.to_string()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error: {} ({})", self.message, self.format_code())
    }
}
