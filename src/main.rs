//! Binary entry point for the `respec` converter.

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;

use respec::cli::Cli;
use respec::io;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let options = cli.options();

    let jobs = io::plan_dir(&cli.dir, &options)
        .with_context(|| format!("failed to scan {}", cli.dir.display()))?;

    let mut flagged = 0usize;
    for job in &jobs {
        if job.clobbers_input() {
            eprintln!(
                "{} {} maps onto itself and will be overwritten",
                "warning:".yellow().bold(),
                job.input.display(),
            );
        }
        let report = io::convert_job(job, options.style)
            .with_context(|| format!("failed to convert {}", job.input.display()))?;
        flagged += report.flagged();
        if !cli.quiet {
            println!(
                "{} {} -> {} ({} lines, {} flagged)",
                "converted".green(),
                job.input.display(),
                job.output.display(),
                report.lines(),
                report.flagged(),
            );
        }
    }

    if !cli.quiet {
        let summary = format!(
            "{} file(s) converted, {} line(s) need manual follow-up",
            jobs.len(),
            flagged,
        );
        println!("{}", summary.bold());
    }
    Ok(())
}
