//! Pattern Email Generator - enumerate email addresses from numeric patterns
//!
//! Up to three slots, each a zero-padded number between a literal prefix and
//! suffix, are combined by cartesian product into local-parts, joined to a
//! domain and written out one address per line.

pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod generator;
pub mod logging;
pub mod pattern;
pub mod types;

// Re-export commonly used types
pub use error::{PatternEmailError, Result};
pub use types::{
    GenerationConfig, Pattern, PatternSet, RangeMode, EXPORT_FILE_NAME, MAX_PATTERNS,
    SAMPLE_DOMAIN_PLACEHOLDER,
};

// Re-export main functionality
pub use export::{serialize, Exporter, FileExporter, StdoutExporter};
pub use generator::EmailGenerator;
pub use pattern::{combine, format, Combinator};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the library
pub fn init() -> Result<()> {
    // Load .env file if it exists
    dotenv::dotenv().ok();
    Ok(())
}

/// Generate the full document for `patterns` under `domain`.
///
/// Uses the legacy range rule and no output ceiling.
pub fn generate(patterns: &PatternSet, domain: &str) -> String {
    serialize(Combinator::new(patterns, RangeMode::Legacy), domain)
}

/// Preview address built from each slot's own `min`.
///
/// Falls back to [`SAMPLE_DOMAIN_PLACEHOLDER`] when `domain` is empty.
pub fn sample(patterns: &PatternSet, domain: &str) -> String {
    let local_part: String = patterns.iter().map(|p| format(p, p.min)).collect();
    let domain = if domain.is_empty() {
        SAMPLE_DOMAIN_PLACEHOLDER
    } else {
        domain
    };
    export::address(&local_part, domain)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_empty_when_max_zero() {
        let patterns = PatternSet::single(Pattern::new(3, 1, 0));
        assert_eq!(generate(&patterns, "x.com"), "");
    }

    #[test]
    fn test_sample_uses_min() {
        let patterns = PatternSet::single(Pattern::new(3, 7, 100).with_prefix("u"));
        assert_eq!(sample(&patterns, "x.com"), "u007@x.com");
        assert_eq!(sample(&patterns, ""), "u007@[domain]");
    }
}
