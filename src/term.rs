//! Sanitization and parsing of the raw order-total search term.
//!
//! The admin search box accepts free-form text, so the term is run through a
//! lossy sanitation step before numeric parsing. Sanitation is not
//! validation: multiple periods, leading or trailing periods, and empty
//! results are all passed through to the parser as-is, and anything the
//! parser rejects silently becomes `0.0` (which the handler treats as
//! "no match" rather than an error).

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Everything that is not an ASCII digit or a decimal point.
    static ref NON_NUMERIC: Regex = Regex::new(r"[^0-9.]").unwrap();
}

/// Strip every character that is not an ASCII digit or `.`, preserving the
/// relative order of the remaining characters.
pub fn sanitize(raw: &str) -> String {
    NON_NUMERIC.replace_all(raw, "").into_owned()
}

/// Parse a raw search term into a total amount.
///
/// Unparseable input yields `0.0`. A minus sign is stripped by sanitization,
/// so `"-5"` parses to `5.0`; the sign loss is pinned by a test below.
pub fn parse(raw: &str) -> f64 {
    sanitize(raw).parse().unwrap_or(0.0)
}
