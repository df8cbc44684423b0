//! Major/minor extraction from free-form version strings

use std::sync::LazyLock;

use regex::Regex;

/// `<major>.<minor>.` at the very start of the string
static MAJOR_MINOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]+)\.([0-9]+)\.").unwrap());

/// Extract the leading major and minor components of a version string
///
/// The minor component must be followed by a dot, so "4.2" yields `None`
/// while "4.2.0" and "4.2.x-anything" yield `Some((4, 2))`. Components that do
/// not fit in a `u32` are treated as unparseable.
pub fn parse_major_minor(version: &str) -> Option<(u32, u32)> {
    let captures = MAJOR_MINOR_RE.captures(version)?;
    let major = captures[1].parse::<u32>().ok()?;
    let minor = captures[2].parse::<u32>().ok()?;
    Some((major, minor))
}
