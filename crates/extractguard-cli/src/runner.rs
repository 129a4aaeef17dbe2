use std::path::Path;

use anyhow::{Context, Result};
use extractguard_core::{ResultAccumulator, ValidationReport, Validator};
use extractguard_reports::{CheckOutcome, JsonFormatter, Reporter, StdOutFormatter};
use tracing::info;

use crate::{
    constructor::{construct_reader_config, construct_suite},
    parser::{parse_config, Config},
    writer::resolve_file_path,
    Args, OutputFormat,
};

/// Run every extract of `config` through its checks.
///
/// Each extract gets its own session, since extracts may use different
/// reader settings; the sessions are merged in config order into one report.
pub fn validate_all<R: Reporter>(
    config: &Config,
    reporter: &mut R,
    parallel: bool,
) -> Result<ValidationReport> {
    let mut session = ResultAccumulator::new();
    let total = config.extract.len();

    reporter.on_start();
    for (i, extract) in config.extract.iter().enumerate() {
        reporter.on_extract_start(i + 1, total, &extract.name);

        let reader_config = construct_reader_config(extract)
            .with_context(|| format!("Failed to configure extract: '{}'", extract.name))?;
        let suite = construct_suite(extract)
            .with_context(|| format!("Failed to build checks for '{}'", extract.name))?;

        let mut validator = Validator::with_config(reader_config);
        let verdicts = if parallel {
            suite.run_parallel(&mut validator)
        } else {
            suite.run(&mut validator)
        };
        info!(extract = extract.name.as_str(), ?verdicts, "extract validated");

        let outcomes: Vec<CheckOutcome> = suite
            .check_names()
            .into_iter()
            .zip(verdicts)
            .map(|(check, passed)| CheckOutcome { check, passed })
            .collect();
        reporter.on_extract_result(&extract.name, &extract.path, &outcomes);

        session.merge(validator.into_accumulator());
    }

    let report = ValidationReport::from(&session);
    reporter.on_report(&report);
    Ok(report)
}

/// Returns whether every check passed.
pub fn run(args: &Args) -> Result<bool> {
    let config_path = args
        .config
        .as_deref()
        .context("A configuration file is required (--config)")?;
    let config = parse_config(Path::new(config_path))?;
    let version = env!("CARGO_PKG_VERSION").to_string();

    match args.output {
        OutputFormat::Stdout => {
            let mut formatter = StdOutFormatter::new(version);
            let report = validate_all(&config, &mut formatter, args.parallel)?;
            Ok(report.is_passed())
        }
        OutputFormat::Json => {
            let mut formatter = JsonFormatter::new(version);
            let report = validate_all(&config, &mut formatter, args.parallel)?;
            let json = formatter
                .to_json()
                .context("Failed to serialize the validation report")?;

            match &args.output_file {
                Some(target) => {
                    let path = resolve_file_path(target, &formatter.file_stamp())?;
                    std::fs::write(&path, json)
                        .with_context(|| format!("Failed to write report: {}", path.display()))?;
                    info!(path = %path.display(), "report written");
                }
                None => println!("{}", json),
            }
            Ok(report.is_passed())
        }
    }
}
