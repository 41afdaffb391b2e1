use core::{
    fmt::{self, Display, Formatter},
    num::ParseIntError,
    str::FromStr,
};
use std::error::Error;

pub use crate::version::Version;

pub mod version;

/// Separator every fragment boundary is normalized to before splitting.
const SEPARATOR: &str = "-";

/// An error that can occur during extracting a version from a string.
#[derive(Debug, Clone)]
pub enum ParseError {
    /// The string contains no `.` character and cannot embed a version.
    InvalidVersionString,
    /// No fragment of the string contained a run of digits.
    VersionNotFound,
    /// A digit run was too large to fit into the numeric type.
    InvalidDigit(ParseIntError),
}

impl Display for ParseError {
    fn fmt(&self, fmt: &mut Formatter) -> Result<(), fmt::Error> {
        match self {
            ParseError::InvalidVersionString => fmt.write_str("the specified version string is invalid"),
            ParseError::VersionNotFound => fmt.write_str("failed to find a version number in the filename"),
            ParseError::InvalidDigit(err) => write!(fmt, "invalid digit: {}", err),
        }
    }
}

impl Error for ParseError {}

/// Extracts a version number embedded somewhere in the given string.
///
/// The string is reduced to its final path segment, underscores and
/// spaces are treated as hyphens, and the result is split into
/// fragments. The first fragment that yields a run of dot-separated
/// digit groups wins; its groups populate major, minor, patch and an
/// optional build number in that order. Missing trailing groups are
/// left at zero.
///
/// # Examples
///
/// ```
/// let version = filever::parse("app_3.2.1_win").unwrap();
///
/// assert_eq!(&version.short(), "3.2.1");
/// ```
pub fn parse(v: &str) -> Result<Version, ParseError> {
    let base = basename(v);

    if !base.contains('.') {
        return Err(ParseError::InvalidVersionString);
    }

    let base = base.replace(|ch| ch == '_' || ch == ' ', SEPARATOR);

    for fragment in base.split(SEPARATOR) {
        if fragment.is_empty() || !fragment.contains('.') {
            continue;
        }

        let tokens = tokenize(fragment);
        if !tokens.is_empty() {
            return assemble(&tokens);
        }
    }

    Err(ParseError::VersionNotFound)
}

impl FromStr for Version {
    type Err = ParseError;

    fn from_str(v: &str) -> Result<Self, Self::Err> {
        parse(v)
    }
}

/// Reduces a path-like string to its final segment.
fn basename(v: &str) -> &str {
    let v = v.trim_end_matches('/');

    match v.rfind('/') {
        Some(idx) => &v[idx + 1..],
        None => v,
    }
}

/// Collects runs of decimal digits from a fragment.
///
/// A `.` completes the current run, as does the end of the fragment.
/// Any other non-digit character is skipped without touching the run,
/// so digits separated only by letters still accumulate together:
/// `"v3.2.1rc"` yields `["3", "2", "1"]` and `"1a2.3"` yields
/// `["12", "3"]`.
fn tokenize(fragment: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut run = String::new();

    for ch in fragment.chars() {
        if ch.is_ascii_digit() {
            run.push(ch);
        } else if ch == '.' && !run.is_empty() {
            tokens.push(core::mem::take(&mut run));
        }
    }

    if !run.is_empty() {
        tokens.push(run);
    }

    tokens
}

/// Maps extracted digit runs onto version fields positionally.
///
/// Every token is converted, including those past the build position,
/// so an unrepresentable group anywhere in the run fails the parse.
fn assemble(tokens: &[String]) -> Result<Version, ParseError> {
    let mut parts = [0u32; 3];
    let mut build = None;

    for (idx, token) in tokens.iter().enumerate() {
        let number = token.parse().map_err(ParseError::InvalidDigit)?;

        match idx {
            0..=2 => parts[idx] = number,
            3 => build = Some(number),
            _ => {}
        }
    }

    Ok(Version::new(parts[0], parts[1], parts[2], build))
}
