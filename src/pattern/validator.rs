//! Input validation for pattern sets
//!
//! Everything fallible about a generation run happens here, before the
//! combinator is started: turning typed field text into numbers, checking
//! slot widths, and applying the projected-output ceiling.

use crate::error::{PatternEmailError, Result};
use crate::validation_error;
use crate::types::{GenerationConfig, Pattern};

use super::combinator::Combinator;

/// Pattern fields exactly as the user typed them
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawPattern {
    pub prefix: String,
    pub suffix: String,
    pub length: String,
    pub min: String,
    pub max: String,
}

/// Validator for generation inputs
#[derive(Debug, Clone, Default)]
pub struct PatternValidator {
    max_output: Option<u128>,
}

impl PatternValidator {
    /// Create a validator without an output ceiling
    pub fn new() -> Self {
        Self { max_output: None }
    }

    /// Refuse runs projected to produce more than `max_output` addresses
    pub fn with_max_output(mut self, max_output: Option<u128>) -> Self {
        self.max_output = max_output;
        self
    }

    pub fn max_output(&self) -> Option<u128> {
        self.max_output
    }

    /// Parse an integer field of pattern `#position` (1-based)
    pub fn parse_number(position: usize, field: &str, text: &str) -> Result<i64> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(validation_error!("pattern #{}: {} is required", position, field));
        }

        trimmed.parse::<i64>().map_err(|_| {
            validation_error!(
                "pattern #{}: {} '{}' is not a whole number",
                position,
                field,
                trimmed
            )
        })
    }

    /// Parse a zero-pad width of pattern `#position` (1-based)
    pub fn parse_width(position: usize, text: &str) -> Result<usize> {
        let width = Self::parse_number(position, "length", text)?;
        usize::try_from(width).map_err(|_| {
            validation_error!("pattern #{}: length must not be negative (got {})", position, width)
        })
    }

    /// Turn raw field text into a pattern
    pub fn parse_pattern(&self, position: usize, raw: &RawPattern) -> Result<Pattern> {
        Ok(Pattern {
            prefix: raw.prefix.clone(),
            suffix: raw.suffix.clone(),
            width: Self::parse_width(position, &raw.length)?,
            min: Self::parse_number(position, "min", &raw.min)?,
            max: Self::parse_number(position, "max", &raw.max)?,
        })
    }

    /// Validate a configuration and return the projected address count
    pub fn validate(&self, config: &GenerationConfig) -> Result<u128> {
        let combinator = Combinator::new(&config.patterns, config.range_mode);
        let projected = combinator.total();

        if let Some(limit) = self.max_output {
            if projected > limit {
                tracing::warn!(
                    projected = %projected,
                    limit = %limit,
                    "Projected output exceeds limit"
                );
                return Err(PatternEmailError::range_too_large(projected, limit));
            }
        }

        self.inspect_domain(&config.domain);
        for (i, (pattern, range)) in config.patterns.iter().zip(combinator.ranges()).enumerate() {
            if range.len == 0 {
                tracing::debug!(
                    slot = i + 1,
                    %pattern,
                    "Slot range is empty; output will be empty"
                );
            }
        }

        Ok(projected)
    }

    /// Log suspicious domains. The domain is used verbatim either way.
    fn inspect_domain(&self, domain: &str) {
        if domain.is_empty() {
            tracing::warn!("Domain is empty; addresses will end with '@'");
        } else if domain.contains('@') || domain.chars().any(char::is_whitespace) {
            tracing::warn!(domain = %domain, "Domain contains '@' or whitespace");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{PatternSet, RangeMode};

    fn raw(length: &str, min: &str, max: &str) -> RawPattern {
        RawPattern {
            prefix: "u".to_string(),
            suffix: String::new(),
            length: length.to_string(),
            min: min.to_string(),
            max: max.to_string(),
        }
    }

    #[test]
    fn test_parse_pattern() {
        let validator = PatternValidator::new();
        let pattern = validator.parse_pattern(1, &raw("3", " 1 ", "-5")).unwrap();
        assert_eq!(pattern, Pattern::new(3, 1, -5).with_prefix("u"));
    }

    #[test]
    fn test_parse_rejects_non_numeric() {
        let validator = PatternValidator::new();
        let err = validator.parse_pattern(2, &raw("3", "abc", "5")).unwrap_err();
        assert!(err.to_string().contains("pattern #2"));
        assert!(err.to_string().contains("min"));

        assert!(validator.parse_pattern(1, &raw("3", "1", "")).is_err());
        assert!(validator.parse_pattern(1, &raw("3", "1.5", "4")).is_err());
    }

    #[test]
    fn test_parse_rejects_negative_width() {
        let err = PatternValidator::parse_width(1, "-2").unwrap_err();
        assert!(err.to_string().contains("negative"));
    }

    #[test]
    fn test_validate_projects_count() {
        let patterns =
            PatternSet::new(vec![Pattern::new(2, 0, 10), Pattern::new(1, 1, 3)]).unwrap();
        let config = GenerationConfig::new(patterns, "example.com");
        assert_eq!(PatternValidator::new().validate(&config).unwrap(), 30);

        let uniform = config.with_range_mode(RangeMode::Uniform);
        assert_eq!(PatternValidator::new().validate(&uniform).unwrap(), 33);
    }

    #[test]
    fn test_validate_enforces_ceiling() {
        let patterns = PatternSet::new(vec![
            Pattern::new(0, 0, 10_000),
            Pattern::new(0, 1, 10_000),
            Pattern::new(0, 1, 10_000),
        ])
        .unwrap();
        let config = GenerationConfig::new(patterns, "example.com");
        let validator = PatternValidator::new().with_max_output(Some(1_000_000));

        match validator.validate(&config) {
            Err(PatternEmailError::RangeTooLarge { projected, limit }) => {
                assert_eq!(projected, 1_000_000_000_000);
                assert_eq!(limit, 1_000_000);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_ceiling_is_inclusive() {
        let config = GenerationConfig::new(PatternSet::single(Pattern::new(0, 0, 100)), "x.com");
        let validator = PatternValidator::new().with_max_output(Some(100));
        assert_eq!(validator.validate(&config).unwrap(), 100);
    }
}
