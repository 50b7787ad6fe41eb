//! Identification-string classification.
//!
//! Browsers on iOS report a user agent like:
//!
//! ```text
//! Mozilla/5.0 (iPhone; CPU iPhone OS 14_2 like Mac OS X) AppleWebKit/605.1.15
//!     (KHTML, like Gecko) Version/14.0.1 Mobile/15E148 Safari/604.1
//! ```
//!
//! From it we derive three facts: whether the device is mobile, whether it is
//! an iPhone, and the OS version encoded as `OS <major>_<minor>[_<patch>]`.

use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::sync::OnceLock;

use crate::error::{DetectError, Result};

/// OS version parsed from a user agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OsVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: Option<u32>,
}

impl fmt::Display for OsVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.patch {
            Some(patch) => write!(f, "{}.{}.{}", self.major, self.minor, patch),
            None => write!(f, "{}.{}", self.major, self.minor),
        }
    }
}

fn mobile_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(?i)mobile").unwrap())
}

fn iphone_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(?i)iphone").unwrap())
}

/// Version token pattern.
///
/// - Group 1: major
/// - Group 2: minor
/// - Group 3: patch (optional)
fn os_version_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"OS (\d+)_(\d+)_?(\d+)?").unwrap())
}

/// Whether the user agent contains a `Mobile` token (case-insensitive).
pub fn is_mobile(user_agent: &str) -> bool {
    mobile_pattern().is_match(user_agent)
}

/// Whether the user agent contains an `iPhone` token (case-insensitive).
pub fn is_iphone(user_agent: &str) -> bool {
    iphone_pattern().is_match(user_agent)
}

fn parse_component(text: &str) -> Result<u32> {
    text.parse::<u32>()
        .map_err(|_| DetectError::InvalidOsVersion {
            component: text.to_string(),
        })
}

/// Parse the OS version of an iPhone user agent.
///
/// # Returns
///
/// - `Ok(None)` when the user agent is not an iPhone
/// - `Ok(Some(version))` when the version token is present
/// - `Err(DetectError::MissingOsVersion)` when the user agent claims to be an
///   iPhone but has no version token
///
/// # Examples
///
/// ```
/// use iphone_detector::user_agent::parse_os_version;
///
/// let ua = "Mozilla/5.0 (iPhone; CPU iPhone OS 14_2 like Mac OS X) Mobile/15E148";
/// let version = parse_os_version(ua).unwrap().unwrap();
/// assert_eq!((version.major, version.minor, version.patch), (14, 2, None));
///
/// assert_eq!(parse_os_version("Mozilla/5.0 (X11; Linux x86_64)").unwrap(), None);
/// ```
pub fn parse_os_version(user_agent: &str) -> Result<Option<OsVersion>> {
    if !is_iphone(user_agent) {
        return Ok(None);
    }

    let captures = os_version_pattern().captures(user_agent).ok_or_else(|| {
        DetectError::MissingOsVersion {
            user_agent: user_agent.to_string(),
        }
    })?;

    // Groups 1 and 2 are mandatory in the pattern.
    let major = parse_component(&captures[1])?;
    let minor = parse_component(&captures[2])?;
    let patch = captures
        .get(3)
        .map(|m| parse_component(m.as_str()))
        .transpose()?;

    Ok(Some(OsVersion {
        major,
        minor,
        patch,
    }))
}
