//! License report generation.
//!
//! [`generate_report`] walks the manifest in order, looks every package up in
//! the registry and writes one line per package to an [`output::Output`].
//! Any error stops the run; lines already written stay in the sink.

pub mod output;

use std::io::Write;

use anyhow::Result;
use indicatif::ProgressBar;

use crate::license::{describe_license, is_gpl_license};
use crate::models::{ReportLine, Requirement};
use crate::parser::RequirementParser;
use crate::registry::Registry;
use output::Output;

/// Totals of a finished run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ReportSummary {
    pub total: usize,
    pub flagged: usize,
}

/// Look up one requirement and build its report line.
pub async fn check_license<R: Registry>(registry: &R, requirement: Requirement) -> Result<ReportLine> {
    let record = registry
        .fetch(&requirement.name, requirement.version.as_deref())
        .await?;

    let description = describe_license(&record.info);
    let flagged = is_gpl_license(&description);

    Ok(ReportLine {
        package: requirement.name,
        version: requirement.version,
        description,
        flagged,
    })
}

pub async fn generate_report<P, R, W>(
    parser: &P,
    registry: &R,
    output: &mut Output<W>,
    progress: &ProgressBar,
) -> Result<ReportSummary>
where
    P: RequirementParser + ?Sized,
    R: Registry,
    W: Write,
{
    let mut summary = ReportSummary::default();

    for requirement in parser.requirements()? {
        let requirement = requirement?;
        progress.set_message(requirement.name.clone());

        let line = check_license(registry, requirement).await?;
        output.print_info(&line)?;

        summary.total += 1;
        if line.flagged {
            summary.flagged += 1;
        }
        progress.inc(1);
    }

    Ok(summary)
}
