//! Employee identity extraction from marker rows.
//!
//! Exports print the employee in several shapes, for example
//! `Employee: 12 : Rahul Sharma Total Work Duration: ...`. Matchers are tried
//! in order and the first one that yields a non-empty id and name wins.

use std::sync::LazyLock;

use regex::Regex;

/// The literal that marks a row as an employee summary.
pub const EMPLOYEE_MARKER: &str = "Employee:";

const TOTAL_WORK: &str = "Total Work";

static PRIMARY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Employee:\s*(\d+)\s*:\s*(\S.+?)(?:\s+Total\s+Work|$)").unwrap()
});
static FALLBACK_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)\s*:\s*(\S.+?)(?:\s+Total\s+Work|$)").unwrap());
static SIMPLE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Employee:\s*([^:]+):([^T]+)").unwrap());

/// An identifier/name pair read from a marker row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeIdentity {
    /// Employee identifier.
    pub employee_id: String,
    /// Employee name, not yet cleaned.
    pub employee_name: String,
}

impl EmployeeIdentity {
    fn from_parts(id: &str, name: &str) -> Option<Self> {
        let (id, name) = (id.trim(), name.trim());
        if id.is_empty() || name.is_empty() {
            return None;
        }
        Some(Self {
            employee_id: id.to_string(),
            employee_name: name.to_string(),
        })
    }
}

/// A single step of the identity cascade.
pub type IdentityMatcher = fn(&str) -> Option<EmployeeIdentity>;

/// The identity cascade in priority order, each entry named for logging.
pub const IDENTITY_CASCADE: [(&str, IdentityMatcher); 4] = [
    ("primary", match_primary),
    ("fallback", match_fallback),
    ("simple", match_simple),
    ("manual", match_manual),
];

fn match_regex(pattern: &Regex, text: &str) -> Option<EmployeeIdentity> {
    let captures = pattern.captures(text)?;
    EmployeeIdentity::from_parts(&captures[1], &captures[2])
}

/// `Employee:` followed by a numeric id, a colon and a name.
pub fn match_primary(text: &str) -> Option<EmployeeIdentity> {
    match_regex(&PRIMARY_PATTERN, text)
}

/// A numeric id, a colon and a name anywhere in the text.
pub fn match_fallback(text: &str) -> Option<EmployeeIdentity> {
    match_regex(&FALLBACK_PATTERN, text)
}

/// `Employee:` then anything up to a colon, then anything up to a `T`.
pub fn match_simple(text: &str) -> Option<EmployeeIdentity> {
    match_regex(&SIMPLE_PATTERN, text)
}

/// Splits the text after `Employee:` on its first colon.
pub fn match_manual(text: &str) -> Option<EmployeeIdentity> {
    let start = text.find(EMPLOYEE_MARKER)? + EMPLOYEE_MARKER.len();
    let (id, rest) = text[start..].trim().split_once(':')?;
    let rest = rest.trim();

    let name = match rest.find(TOTAL_WORK) {
        Some(end) if end > 0 => &rest[..end],
        _ => rest,
    };

    EmployeeIdentity::from_parts(id, name)
}

/// Runs the cascade, returning the identity and the name of the matcher that found it.
///
/// # Examples
///
/// ```
/// use salary_engine::extraction::extract_identity;
///
/// let (identity, matcher) =
///     extract_identity("Employee: 12 : Rahul Sharma Total Work Duration: 180:30 Hrs").unwrap();
/// assert_eq!(identity.employee_id, "12");
/// assert_eq!(identity.employee_name, "Rahul Sharma");
/// assert_eq!(matcher, "primary");
/// ```
pub fn extract_identity(text: &str) -> Option<(EmployeeIdentity, &'static str)> {
    IDENTITY_CASCADE
        .iter()
        .find_map(|(name, matcher)| matcher(text).map(|identity| (identity, *name)))
}

/// Strips trailing whitespace and periods from a name.
pub fn clean_name(name: &str) -> &str {
    name.trim_end_matches(|c: char| c.is_whitespace() || c == '.')
}

/// True for placeholder rows that are not real employees.
pub fn is_noise_name(name: &str) -> bool {
    name.to_lowercase().contains("test") || name.eq_ignore_ascii_case("Employee")
}
