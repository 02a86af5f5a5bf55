//! File plumbing: streaming conversion, job planning, and directory passes.
//!
//! The conversion itself is defined over `BufRead`/`Write` so it can be
//! exercised without touching a filesystem; the directory pass is a thin
//! convenience that scans, plans, and executes jobs in order, one file at a
//! time. Any I/O error aborts the pass; files already written stay as they
//! are.

use std::{
    fs::{self, File},
    io::{self, BufRead, BufReader, BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::core::{rewrite, Style};

/// Default suffix a file name must end with to be picked up.
pub const MATCH_SUFFIX: &str = ".js";
/// Default suffix replaced in the input file name.
pub const FROM_SUFFIX: &str = "-test.js";
/// Default suffix substituted into the output file name.
pub const TO_SUFFIX: &str = ".spec.ts";

/// Settings for a directory pass.
#[derive(Debug, Clone)]
pub struct Options {
    pub style: Style,
    pub match_suffix: String,
    pub from_suffix: String,
    pub to_suffix: String,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            style: Style::Positional,
            match_suffix: MATCH_SUFFIX.to_owned(),
            from_suffix: FROM_SUFFIX.to_owned(),
            to_suffix: TO_SUFFIX.to_owned(),
        }
    }
}

/// One unit of work: an input file and the output path derived for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    pub input: PathBuf,
    pub output: PathBuf,
}

impl Job {
    /// Whether suffix substitution failed to change the name, so executing
    /// this job would overwrite its own input.
    #[must_use]
    pub fn clobbers_input(&self) -> bool {
        self.input == self.output
    }
}

/// Per-file counters.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FileReport {
    lines: usize,
    rewritten: usize,
    flagged: usize,
}

impl FileReport {
    /// Lines read from the source file.
    #[must_use]
    pub fn lines(&self) -> usize {
        self.lines
    }

    /// Lines the pipeline changed in any way.
    #[must_use]
    pub fn rewritten(&self) -> usize {
        self.rewritten
    }

    /// Lines that carry a placeholder marker and need manual follow-up.
    #[must_use]
    pub fn flagged(&self) -> usize {
        self.flagged
    }
}

/// Per-run counters: every executed job with its file report.
#[derive(Debug, Default)]
pub struct RunReport {
    outcomes: Vec<(Job, FileReport)>,
}

impl RunReport {
    #[must_use]
    pub fn outcomes(&self) -> &[(Job, FileReport)] {
        &self.outcomes
    }

    /// Number of files converted.
    #[must_use]
    pub fn files(&self) -> usize {
        self.outcomes.len()
    }

    /// Total lines flagged for manual follow-up across the run.
    #[must_use]
    pub fn flagged(&self) -> usize {
        self.outcomes.iter().map(|(_, r)| r.flagged()).sum()
    }
}

/// Stream-convert one source: headers per [`Style`], then every line in
/// order through the pipeline.
///
/// Lines are read in universal-newline fashion: a `\r\n` terminator is
/// normalized to `\n` before conversion, so output files are always
/// LF-terminated.
///
/// # Errors
///
/// Any read or write failure (including non-UTF-8 input) is returned as-is;
/// the output is left however far it got.
pub fn convert<R: BufRead, W: Write>(
    mut reader: R,
    mut writer: W,
    style: Style,
) -> io::Result<FileReport> {
    for header in style.headers() {
        writeln!(writer, "{header}")?;
    }

    let mut report = FileReport::default();
    let mut line = String::new();
    loop {
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            break;
        }
        if line.ends_with("\r\n") {
            line.truncate(line.len() - 2);
            line.push('\n');
        }
        let result = rewrite::convert_line(&line, style);
        report.lines += 1;
        if result.text() != line {
            report.rewritten += 1;
        }
        if result.needs_review() {
            report.flagged += 1;
        }
        writer.write_all(result.text().as_bytes())?;
    }
    writer.flush()?;
    Ok(report)
}

/// Derive an output file name by suffix substitution.
///
/// A name that does not contain `from_suffix` maps to itself, which is the
/// documented overwrite hazard; see [`Job::clobbers_input`].
#[must_use]
pub fn map_name(name: &str, from_suffix: &str, to_suffix: &str) -> String {
    name.replace(from_suffix, to_suffix)
}

/// Pair an explicit list of inputs with output paths produced by `map`.
///
/// This is the injectable seam: callers that do not want the directory scan
/// bring their own inputs and mapping.
pub fn plan_jobs<I, F>(inputs: I, mut map: F) -> Vec<Job>
where
    I: IntoIterator<Item = PathBuf>,
    F: FnMut(&Path) -> PathBuf,
{
    inputs
        .into_iter()
        .map(|input| {
            let output = map(&input);
            Job { input, output }
        })
        .collect()
}

/// List the files in `dir` (non-recursive) whose names end with
/// `match_suffix`, sorted by name.
///
/// Entries with non-UTF-8 names are skipped.
///
/// # Errors
///
/// Returns the underlying error if the directory cannot be read.
pub fn scan_dir(dir: &Path, match_suffix: &str) -> io::Result<Vec<PathBuf>> {
    let mut found = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            continue;
        };
        if name.ends_with(match_suffix) {
            found.push(entry.path());
        }
    }
    found.sort();
    Ok(found)
}

/// Scan `dir` and plan the standard suffix-substitution jobs for it.
///
/// # Errors
///
/// Returns the underlying error if the directory cannot be read.
pub fn plan_dir(dir: &Path, options: &Options) -> io::Result<Vec<Job>> {
    let inputs = scan_dir(dir, &options.match_suffix)?;
    Ok(plan_jobs(inputs, |input| {
        let name = input.file_name().and_then(|n| n.to_str()).unwrap_or("");
        input.with_file_name(map_name(name, &options.from_suffix, &options.to_suffix))
    }))
}

/// Execute one job: open the input, create (truncate) the output, and
/// stream-convert.
///
/// # Errors
///
/// Returns the first I/O failure; the output file is not rolled back.
pub fn convert_job(job: &Job, style: Style) -> io::Result<FileReport> {
    let reader = BufReader::new(File::open(&job.input)?);
    let writer = BufWriter::new(File::create(&job.output)?);
    convert(reader, writer, style)
}

/// The whole directory pass: scan, plan, and execute each job in order.
///
/// Files are processed one at a time; each output handle is closed before
/// the next input is opened.
///
/// # Errors
///
/// Stops at the first I/O failure, leaving prior outputs in place.
pub fn convert_dir(dir: &Path, options: &Options) -> io::Result<RunReport> {
    let mut report = RunReport::default();
    for job in plan_dir(dir, options)? {
        let file_report = convert_job(&job, options.style)?;
        report.outcomes.push((job, file_report));
    }
    Ok(report)
}
