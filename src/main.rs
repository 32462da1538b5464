//! Pattern Email Generator - build email address lists from numeric patterns
//!
//! Interactive by default; fully scriptable with flags or a JSON config file.

use pattern_email_gen::{
    cli::{editor, Cli},
    config::EnvDefaults,
    export::{ExportReport, FileExporter, StdoutExporter},
    logging, EmailGenerator, RangeMode, Result,
};
use std::io::IsTerminal;
use std::process;

fn main() -> Result<()> {
    // Initialize the library
    if let Err(e) = pattern_email_gen::init() {
        eprintln!("❌ Failed to initialize: {}", e);
        process::exit(1);
    }

    let options = Cli::parse_checked();

    logging::init_logger(options.verbose);

    if let Err(e) = run(&options) {
        if e.is_cancelled() {
            eprintln!("👋 Cancelled");
            process::exit(130);
        }
        tracing::debug!(error = ?e, "Run failed");
        eprintln!("{}", e.user_message());
        process::exit(1);
    }

    Ok(())
}

/// Resolve the configuration, then generate and export
fn run(options: &Cli) -> Result<()> {
    let defaults = EnvDefaults::from_env()?;

    let config = if options.needs_editor() {
        editor::run_editor(
            options.range_mode().unwrap_or(RangeMode::Legacy),
            options.effective_limit(&defaults),
        )?
    } else {
        options.resolve(&defaults)?
    };

    let generator = EmailGenerator::new(config);

    if options.sample_only {
        println!("{}", generator.sample());
        return Ok(());
    }

    if options.stdout {
        generator.export(&StdoutExporter)?;
        return Ok(());
    }

    let exporter = FileExporter::new(options.output_path(&defaults))
        .with_progress(std::io::stderr().is_terminal());
    let report = generator.export(&exporter)?;
    display_report(&report, &generator);

    Ok(())
}

/// Print a short summary of the written file
fn display_report(report: &ExportReport, generator: &EmailGenerator) {
    println!();
    println!("✅ Wrote {} address(es) to {}", report.addresses, report.destination);
    if report.addresses > 0 {
        println!("   🔎 Sample: {}", generator.sample());
    }
    println!("   📦 Size: {} bytes", report.bytes);
    println!("   🕒 Generated at: {}", report.generated_at.format("%Y-%m-%d %H:%M:%S UTC"));
}
