//! Core types and structures for pattern-email-gen

use serde::{Deserialize, Serialize};

use crate::error::{PatternEmailError, Result};

/// Maximum number of slots in a pattern set
pub const MAX_PATTERNS: usize = 3;

/// File name the generated document is exported under
pub const EXPORT_FILE_NAME: &str = "emails.csv";

/// Domain shown in previews when no domain has been entered yet
pub const SAMPLE_DOMAIN_PLACEHOLDER: &str = "[domain]";

/// Width used when none is given
pub const DEFAULT_WIDTH: usize = 3;

fn default_width() -> usize {
    DEFAULT_WIDTH
}

/// One numeric slot: `prefix` + zero-padded number + `suffix`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pattern {
    #[serde(default)]
    pub prefix: String,
    #[serde(default)]
    pub suffix: String,
    /// Minimum digit width for zero-padding
    #[serde(rename = "length", alias = "width", default = "default_width")]
    pub width: usize,
    pub min: i64,
    /// Inclusive upper bound. `min <= max` is not enforced here.
    pub max: i64,
}

impl Pattern {
    /// Create an undecorated pattern
    pub fn new(width: usize, min: i64, max: i64) -> Self {
        Self {
            prefix: String::new(),
            suffix: String::new(),
            width,
            min,
            max,
        }
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }
}

impl Default for Pattern {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH, 1, 100)
    }
}

impl std::fmt::Display for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}{{{}:{}..{}}}{}",
            self.prefix, self.width, self.min, self.max, self.suffix
        )
    }
}

/// Ordered group of 1 to 3 patterns.
///
/// The first pattern is the outermost loop and the leftmost part of every
/// generated local-part.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Pattern>", into = "Vec<Pattern>")]
pub struct PatternSet {
    patterns: Vec<Pattern>,
}

impl PatternSet {
    /// Create a pattern set, rejecting empty sets and sets larger than [`MAX_PATTERNS`]
    pub fn new(patterns: Vec<Pattern>) -> Result<Self> {
        if patterns.is_empty() || patterns.len() > MAX_PATTERNS {
            return Err(PatternEmailError::arity(patterns.len(), MAX_PATTERNS));
        }
        Ok(Self { patterns })
    }

    /// Create a single-slot pattern set
    pub fn single(pattern: Pattern) -> Self {
        Self {
            patterns: vec![pattern],
        }
    }

    pub fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Never true for a set built through [`PatternSet::new`]
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Pattern> {
        self.patterns.iter()
    }
}

impl TryFrom<Vec<Pattern>> for PatternSet {
    type Error = PatternEmailError;

    fn try_from(patterns: Vec<Pattern>) -> Result<Self> {
        Self::new(patterns)
    }
}

impl From<PatternSet> for Vec<Pattern> {
    fn from(set: PatternSet) -> Self {
        set.patterns
    }
}

impl<'a> IntoIterator for &'a PatternSet {
    type Item = &'a Pattern;
    type IntoIter = std::slice::Iter<'a, Pattern>;

    fn into_iter(self) -> Self::IntoIter {
        self.patterns.iter()
    }
}

/// How slot ranges are iterated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RangeMode {
    /// First slot runs over `[0, max)` ignoring its `min`; other slots over `[min, max]`.
    /// Kept as the default so existing exported lists stay reproducible.
    #[default]
    Legacy,
    /// Every slot runs over `[min, max]`
    Uniform,
}

impl std::fmt::Display for RangeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RangeMode::Legacy => write!(f, "legacy"),
            RangeMode::Uniform => write!(f, "uniform"),
        }
    }
}

impl std::str::FromStr for RangeMode {
    type Err = PatternEmailError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "legacy" => Ok(RangeMode::Legacy),
            "uniform" => Ok(RangeMode::Uniform),
            other => Err(PatternEmailError::config(format!(
                "unknown range mode '{}' (expected 'legacy' or 'uniform')",
                other
            ))),
        }
    }
}

/// Configuration for one generation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationConfig {
    pub patterns: PatternSet,
    pub domain: String,
    #[serde(default)]
    pub range_mode: RangeMode,
    /// Ceiling on the projected number of addresses; `None` means unbounded
    #[serde(default)]
    pub max_output: Option<u128>,
}

impl GenerationConfig {
    pub fn new(patterns: PatternSet, domain: impl Into<String>) -> Self {
        Self {
            patterns,
            domain: domain.into(),
            range_mode: RangeMode::Legacy,
            max_output: None,
        }
    }

    pub fn with_range_mode(mut self, range_mode: RangeMode) -> Self {
        self.range_mode = range_mode;
        self
    }

    pub fn with_max_output(mut self, max_output: Option<u128>) -> Self {
        self.max_output = max_output;
        self
    }

    /// Load a configuration from a JSON file
    pub fn load(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            PatternEmailError::io(e.to_string(), Some(path.to_string_lossy().to_string()))
        })?;

        serde_json::from_str(&content)
            .map_err(|e| PatternEmailError::parse(e.to_string(), Some(content)))
    }
}
