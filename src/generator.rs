//! Email list generator tying validation, enumeration and export together

use std::time::Instant;

use crate::error::Result;
use crate::export::{serialize, ExportReport, Exporter};
use crate::pattern::{Combinator, PatternValidator};
use crate::types::GenerationConfig;

/// Generator for one immutable [`GenerationConfig`].
///
/// Unlike the free [`crate::generate`], every operation here checks the
/// projected output against the configured ceiling before producing
/// anything.
#[derive(Debug, Clone)]
pub struct EmailGenerator {
    config: GenerationConfig,
    validator: PatternValidator,
}

impl EmailGenerator {
    /// Create a new generator
    pub fn new(config: GenerationConfig) -> Self {
        let validator = PatternValidator::new().with_max_output(config.max_output);
        Self { config, validator }
    }

    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    /// Number of addresses this configuration produces
    pub fn projected_count(&self) -> Result<u128> {
        self.validator.validate(&self.config)
    }

    /// Validated lazy sequence of local-parts
    pub fn combinator(&self) -> Result<Combinator<'_>> {
        let projected = self.projected_count()?;
        tracing::debug!(
            projected = %projected,
            patterns = self.config.patterns.len(),
            mode = %self.config.range_mode,
            "Starting enumeration"
        );
        Ok(Combinator::new(&self.config.patterns, self.config.range_mode))
    }

    /// Every local-part, eagerly collected
    pub fn local_parts(&self) -> Result<Vec<String>> {
        Ok(self.combinator()?.collect())
    }

    /// Build the whole document in memory
    pub fn generate(&self) -> Result<String> {
        let start_time = Instant::now();
        let document = serialize(self.combinator()?, &self.config.domain);
        tracing::info!(
            bytes = document.len(),
            elapsed_ms = start_time.elapsed().as_millis() as u64,
            "Document generated"
        );
        Ok(document)
    }

    /// Preview address built from each slot's `min`
    pub fn sample(&self) -> String {
        crate::sample(&self.config.patterns, &self.config.domain)
    }

    /// Stream the document to `exporter`
    pub fn export(&self, exporter: &dyn Exporter) -> Result<ExportReport> {
        let start_time = Instant::now();
        let combinator = self.combinator()?;
        tracing::info!(
            destination = %exporter.destination(),
            total = %combinator.total(),
            "Exporting"
        );

        let report = exporter.export(combinator, &self.config.domain)?;
        tracing::debug!(
            elapsed_ms = start_time.elapsed().as_millis() as u64,
            "Export complete"
        );
        Ok(report)
    }
}
