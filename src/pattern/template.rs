//! Compact textual notation for patterns
//!
//! `PREFIX{WIDTH:MIN..MAX}SUFFIX`, e.g. `user{3:1..100}` or `{-5..5}.x`.
//! `WIDTH:` may be omitted (no padding). Prefix and suffix must not
//! contain braces.

use regex::Regex;

use crate::error::{PatternEmailError, Result};
use crate::types::Pattern;
use crate::validation_error;

use super::validator::PatternValidator;

const TEMPLATE_RE: &str =
    r"^(?P<prefix>[^{}]*)\{\s*(?:(?P<width>[^:{}]*):)?\s*(?P<min>[^.{}]*)\.\.(?P<max>[^{}]*)\}(?P<suffix>[^{}]*)$";

/// Parse a template into a pattern; `position` (1-based) is used in errors
pub fn parse_template(position: usize, template: &str) -> Result<Pattern> {
    let re = Regex::new(TEMPLATE_RE).map_err(|e| PatternEmailError::internal(e.to_string()))?;

    let caps = re.captures(template).ok_or_else(|| {
        validation_error!(
            "pattern #{}: '{}' does not match PREFIX{{WIDTH:MIN..MAX}}SUFFIX",
            position,
            template
        )
    })?;

    let width = match caps.name("width") {
        Some(w) => PatternValidator::parse_width(position, w.as_str())?,
        None => 0,
    };

    Ok(Pattern {
        prefix: caps["prefix"].to_string(),
        suffix: caps["suffix"].to_string(),
        width,
        min: PatternValidator::parse_number(position, "min", &caps["min"])?,
        max: PatternValidator::parse_number(position, "max", &caps["max"])?,
    })
}
