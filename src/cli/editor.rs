//! Interactive pattern editor

use inquire::validator::Validation;
use inquire::{Confirm, CustomUserError, Select, Text};

use crate::error::Result;
use crate::pattern::{PatternValidator, RawPattern};
use crate::types::{GenerationConfig, Pattern, PatternSet, RangeMode, MAX_PATTERNS};

/// Next step offered after each edit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EditorAction {
    Generate,
    AddPattern,
    EditPattern(usize),
    RemovePattern(usize),
}

impl std::fmt::Display for EditorAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EditorAction::Generate => write!(f, "Generate"),
            EditorAction::AddPattern => write!(f, "Add pattern"),
            EditorAction::EditPattern(i) => write!(f, "Edit pattern #{}", i + 1),
            EditorAction::RemovePattern(i) => write!(f, "Remove pattern #{}", i + 1),
        }
    }
}

/// Actions available for a set of `count` patterns.
///
/// `Generate` is only offered while the current set passes validation.
fn actions(count: usize, can_generate: bool) -> Vec<EditorAction> {
    let mut actions = Vec::new();
    if can_generate {
        actions.push(EditorAction::Generate);
    }
    if count < MAX_PATTERNS {
        actions.push(EditorAction::AddPattern);
    }
    actions.extend((0..count).map(EditorAction::EditPattern));
    // The first pattern cannot be removed.
    actions.extend((1..count).map(EditorAction::RemovePattern));
    actions
}

/// Collect a configuration through prompts
pub fn run_editor(range_mode: RangeMode, max_output: Option<u128>) -> Result<GenerationConfig> {
    println!("📧 Pattern Email Generator");
    println!("══════════════════════════");
    println!("   [prefix][pattern][suffix]@[domain]");
    println!();

    let domain = Text::new("Domain:")
        .with_placeholder("example.com")
        .prompt()?;

    let mut patterns = vec![prompt_pattern(1, &Pattern::default())?];

    loop {
        let set = PatternSet::new(patterns.clone())?;
        let config = GenerationConfig::new(set, domain.clone())
            .with_range_mode(range_mode)
            .with_max_output(max_output);

        println!();
        println!("🔎 Sample: {}", crate::sample(&config.patterns, &config.domain));
        let validator = PatternValidator::new().with_max_output(max_output);
        let can_generate = match validator.validate(&config) {
            Ok(count) => {
                println!("📊 Addresses: {}", count);
                true
            }
            Err(e) => {
                println!("{}", e.user_message());
                false
            }
        };
        println!();

        match Select::new("Next:", actions(patterns.len(), can_generate)).prompt()? {
            EditorAction::Generate => {
                if Confirm::new("Write the address list?").with_default(true).prompt()? {
                    return Ok(config);
                }
            }
            EditorAction::AddPattern => {
                let position = patterns.len() + 1;
                patterns.push(prompt_pattern(position, &Pattern::default())?);
            }
            EditorAction::EditPattern(i) => {
                patterns[i] = prompt_pattern(i + 1, &patterns[i])?;
            }
            EditorAction::RemovePattern(i) => {
                patterns.remove(i);
            }
        }
    }
}

/// Prompt for the fields of pattern `#position`, pre-filled from `current`
fn prompt_pattern(position: usize, current: &Pattern) -> Result<Pattern> {
    println!();
    println!("Pattern #{}", position);

    let raw = RawPattern {
        prefix: Text::new("Prefix:")
            .with_initial_value(&current.prefix)
            .with_help_message("optional")
            .prompt()?,
        suffix: Text::new("Suffix:")
            .with_initial_value(&current.suffix)
            .with_help_message("optional")
            .prompt()?,
        length: Text::new("Length:")
            .with_initial_value(&current.width.to_string())
            .with_validator(move |input: &str| {
                Ok::<_, CustomUserError>(match PatternValidator::parse_width(position, input) {
                    Ok(_) => Validation::Valid,
                    Err(e) => Validation::Invalid(e.to_string().into()),
                })
            })
            .prompt()?,
        min: number_prompt("Min:", position, "min", current.min)?,
        max: number_prompt("Max:", position, "max", current.max)?,
    };

    PatternValidator::new().parse_pattern(position, &raw)
}

fn number_prompt(
    message: &str,
    position: usize,
    field: &'static str,
    current: i64,
) -> Result<String> {
    let text = Text::new(message)
        .with_initial_value(&current.to_string())
        .with_validator(move |input: &str| {
            Ok::<_, CustomUserError>(match PatternValidator::parse_number(position, field, input) {
                Ok(_) => Validation::Valid,
                Err(e) => Validation::Invalid(e.to_string().into()),
            })
        })
        .prompt()?;
    Ok(text)
}
