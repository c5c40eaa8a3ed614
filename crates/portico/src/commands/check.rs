//! `portico check` command implementation.

use std::path::{Path, PathBuf};

use clap::{Args, ValueEnum};
use rayon::prelude::*;
use serde::Serialize;

use portico_diag::{Diagnostics, Issue, Warning};
use portico_site::Site;

use crate::commands::load_inputs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    /// Site directories to validate.
    #[arg(default_value = ".")]
    dirs: Vec<PathBuf>,

    /// Docs directory, relative to each site directory.
    #[arg(long, default_value = "docs")]
    docs_dir: PathBuf,

    /// Report format (text or json).
    #[arg(long, value_enum, default_value = "text")]
    format: ReportFormat,

    /// Enable verbose output.
    #[arg(short, long)]
    pub(crate) verbose: bool,
}

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ReportFormat {
    /// Human-readable report
    #[default]
    Text,
    /// JSON report for CI integration
    Json,
}

/// One site directory's outcome.
struct SiteReport {
    dir: PathBuf,
    outcome: Outcome,
}

enum Outcome {
    /// Assembled cleanly, possibly with warnings.
    Valid { warnings: Vec<Warning> },
    /// Assembly recorded validation errors.
    Invalid { diag: Diagnostics },
    /// The directory could not be read or parsed at all.
    Failed { message: String },
}

/// JSON shape of one site's report.
#[derive(Serialize)]
struct JsonReport {
    dir: String,
    status: &'static str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    errors: Vec<Issue>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    warnings: Vec<Warning>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

impl CheckArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        // Site directories are independent, so they validate in parallel;
        // collect() keeps the reports in argument order.
        let reports: Vec<SiteReport> = self
            .dirs
            .par_iter()
            .map(|dir| check_site(dir, &self.docs_dir))
            .collect();

        match self.format {
            ReportFormat::Text => report_text(&output, &reports),
            ReportFormat::Json => report_json(&output, &reports)?,
        }

        let failed = reports.iter().filter(|r| !r.is_ok()).count();
        if failed > 0 {
            return Err(CliError::Validation(if reports.len() == 1 {
                "validation failed".to_owned()
            } else {
                format!("{failed} of {} sites failed validation", reports.len())
            }));
        }
        Ok(())
    }
}

fn check_site(dir: &Path, docs_dir: &Path) -> SiteReport {
    tracing::info!(dir = %dir.display(), "checking site");

    let outcome = match load_inputs(dir, docs_dir) {
        Ok((config, sidebars, corpus)) => match Site::assemble(&config, &sidebars, &corpus) {
            Ok(assembled) => Outcome::Valid {
                warnings: assembled.warnings,
            },
            Err(diag) => Outcome::Invalid { diag },
        },
        Err(err) => Outcome::Failed {
            message: err.to_string(),
        },
    };

    SiteReport {
        dir: dir.to_path_buf(),
        outcome,
    }
}

fn report_text(output: &Output, reports: &[SiteReport]) {
    for report in reports {
        let dir = report.dir.display();
        match &report.outcome {
            Outcome::Valid { warnings } => {
                output.success(&format!("{dir}: ok"));
                for warning in warnings {
                    output.warning(&format!("  warning: {warning}"));
                }
            }
            Outcome::Invalid { diag } => {
                output.error(&format!("{dir}: {} validation error(s)", diag.len()));
                for issue in diag.errors() {
                    output.error(&format!("  error: {issue}"));
                }
                for warning in diag.warnings() {
                    output.warning(&format!("  warning: {warning}"));
                }
            }
            Outcome::Failed { message } => {
                output.error(&format!("{dir}: {message}"));
            }
        }
    }
}

fn report_json(output: &Output, reports: &[SiteReport]) -> Result<(), CliError> {
    let reports: Vec<JsonReport> = reports.iter().map(SiteReport::to_json).collect();
    output.machine(&serde_json::to_string_pretty(&reports)?);
    Ok(())
}

impl SiteReport {
    fn is_ok(&self) -> bool {
        matches!(self.outcome, Outcome::Valid { .. })
    }

    fn to_json(&self) -> JsonReport {
        let dir = self.dir.display().to_string();
        match &self.outcome {
            Outcome::Valid { warnings } => JsonReport {
                dir,
                status: "ok",
                errors: Vec::new(),
                warnings: warnings.clone(),
                message: None,
            },
            Outcome::Invalid { diag } => JsonReport {
                dir,
                status: "invalid",
                errors: diag.errors().to_vec(),
                warnings: diag.warnings().to_vec(),
                message: None,
            },
            Outcome::Failed { message } => JsonReport {
                dir,
                status: "error",
                errors: Vec::new(),
                warnings: Vec::new(),
                message: Some(message.clone()),
            },
        }
    }
}
