//! Command-line argument handling

pub mod editor;

use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};

use crate::cli_error;
use crate::config::EnvDefaults;
use crate::error::Result;
use crate::pattern::parse_template;
use crate::types::{GenerationConfig, PatternSet, RangeMode, MAX_PATTERNS};

const AFTER_HELP: &str = "\
Without patterns or --config, an interactive editor is started.

Examples:
  pattern-email-gen -d example.com -p 'user{3:1..100}'
  pattern-email-gen -d example.com -p 'team{2:0..10}' -p '.{1:1..3}'
  pattern-email-gen --config patterns.json --stdout

Range modes:
  legacy   First pattern runs from 0 up to MAX-1 (its MIN is ignored),
           later patterns run from MIN to MAX inclusive
  uniform  Every pattern runs from MIN to MAX inclusive";

/// Generate email address lists from up to three numeric patterns
#[derive(Debug, Clone, Parser)]
#[command(name = "pattern-email-gen", version, after_help = AFTER_HELP)]
pub struct Cli {
    /// Domain appended after '@'
    #[arg(short, long)]
    pub domain: Option<String>,

    /// Pattern as PREFIX{WIDTH:MIN..MAX}SUFFIX (repeat up to 3 times)
    #[arg(short = 'p', long = "pattern", value_name = "TEMPLATE")]
    pub templates: Vec<String>,

    /// Load patterns and domain from a JSON file
    #[arg(short, long = "config", value_name = "FILE")]
    pub config_path: Option<PathBuf>,

    /// Output file [env: PATTERN_EMAIL_OUTPUT] (default: emails.csv)
    #[arg(short, long, value_name = "FILE", conflicts_with = "stdout")]
    pub output: Option<PathBuf>,

    /// Write the list to standard output
    #[arg(long)]
    pub stdout: bool,

    /// Iterate every pattern over [MIN, MAX]
    #[arg(long, conflicts_with = "mode")]
    pub uniform: bool,

    /// Range mode: legacy (default) or uniform
    #[arg(long, value_name = "MODE", value_parser = parse_mode)]
    pub mode: Option<RangeMode>,

    /// Refuse runs larger than N addresses, 0 = no limit [env: PATTERN_EMAIL_MAX_OUTPUT]
    #[arg(long, value_name = "N")]
    pub limit: Option<u128>,

    /// Print one sample address and exit
    #[arg(long = "sample")]
    pub sample_only: bool,

    /// Always use the interactive editor
    #[arg(short, long)]
    pub interactive: bool,

    /// Verbose logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

fn parse_mode(value: &str) -> std::result::Result<RangeMode, String> {
    value
        .parse()
        .map_err(|_| format!("expected 'legacy' or 'uniform', got '{}'", value))
}

impl Cli {
    /// Parse the process arguments, exiting with a usage error on failure
    pub fn parse_checked() -> Self {
        let cli = Self::parse();
        if let Err(e) = cli.check() {
            e.exit();
        }
        cli
    }

    /// Parse `args` (program name first) and apply the checks clap cannot express
    pub fn try_parse_checked<I, T>(args: I) -> std::result::Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let cli = Self::try_parse_from(args)?;
        cli.check()?;
        Ok(cli)
    }

    fn check(&self) -> std::result::Result<(), clap::Error> {
        if self.templates.len() > MAX_PATTERNS {
            return Err(Self::command().error(
                ErrorKind::TooManyValues,
                format!(
                    "at most {} patterns may be given, got {}",
                    MAX_PATTERNS,
                    self.templates.len()
                ),
            ));
        }
        Ok(())
    }

    /// Range mode chosen on the command line, if any
    pub fn range_mode(&self) -> Option<RangeMode> {
        if self.uniform {
            Some(RangeMode::Uniform)
        } else {
            self.mode
        }
    }

    /// Ceiling given with `--limit`; `Some(None)` disables it
    pub fn limit(&self) -> Option<Option<u128>> {
        self.limit.map(|n| (n != 0).then_some(n))
    }

    /// Whether the interactive editor should collect the configuration
    pub fn needs_editor(&self) -> bool {
        self.interactive || (self.templates.is_empty() && self.config_path.is_none())
    }

    /// Build the configuration from flags, an optional config file and environment defaults.
    ///
    /// Flags win over the file, the file wins over the environment.
    pub fn resolve(&self, defaults: &EnvDefaults) -> Result<GenerationConfig> {
        let mut config = match &self.config_path {
            Some(path) => {
                let mut config = GenerationConfig::load(path)?;
                if config.max_output.is_none() {
                    config.max_output = defaults.max_output;
                }
                config
            }
            None => {
                let domain = self
                    .domain
                    .clone()
                    .ok_or_else(|| cli_error!("--domain is required when patterns are given"))?;
                GenerationConfig::new(self.patterns()?, domain).with_max_output(defaults.max_output)
            }
        };

        if self.config_path.is_some() {
            if let Some(domain) = &self.domain {
                config.domain = domain.clone();
            }
            if !self.templates.is_empty() {
                config.patterns = self.patterns()?;
            }
        }
        if let Some(mode) = self.range_mode() {
            config.range_mode = mode;
        }
        if let Some(limit) = self.limit() {
            config.max_output = limit;
        }

        Ok(config)
    }

    /// Effective ceiling for editor-driven runs
    pub fn effective_limit(&self, defaults: &EnvDefaults) -> Option<u128> {
        self.limit().unwrap_or(defaults.max_output)
    }

    fn patterns(&self) -> Result<PatternSet> {
        let patterns = self
            .templates
            .iter()
            .enumerate()
            .map(|(i, template)| parse_template(i + 1, template))
            .collect::<Result<Vec<_>>>()?;
        PatternSet::new(patterns)
    }

    /// Output path, falling back to the environment default
    pub fn output_path(&self, defaults: &EnvDefaults) -> PathBuf {
        self.output.clone().unwrap_or_else(|| defaults.output.clone())
    }
}
