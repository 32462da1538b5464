//! Rendering of a single slot value

use crate::types::Pattern;

/// Render `value` under `pattern`: prefix, zero-padded digits, suffix.
///
/// Padding is applied to the whole decimal representation, sign included,
/// so `-3` at width 4 becomes `00-3`. Longer numbers are never truncated.
pub fn format(pattern: &Pattern, value: i64) -> String {
    let capacity = pattern.prefix.len() + pattern.suffix.len() + pattern.width;
    let mut out = String::with_capacity(capacity);
    push_formatted(&mut out, pattern, value);
    out
}

/// Append the rendering of `value` to `out`
pub(crate) fn push_formatted(out: &mut String, pattern: &Pattern, value: i64) {
    let digits = value.to_string();
    out.push_str(&pattern.prefix);
    for _ in digits.len()..pattern.width {
        out.push('0');
    }
    out.push_str(&digits);
    out.push_str(&pattern.suffix);
}
