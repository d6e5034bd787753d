//! Persistent and console reporting of labeled examples.
//!
//! Reports are plain UTF-8 text, one example per line:
//!
//! ```text
//! <utterance text> => <label>
//! ```
//!
//! where `<label>` is `肯定` or `否定`. Files are truncated on every write.
//! Texts are written verbatim; a text containing a newline cannot be read
//! back line by line.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use lazy_static::lazy_static;
use log::{debug, info};
use regex::Regex;

use crate::corpus::LabeledExample;
use crate::error::{AssentError, Result};

/// Separator between text and label on a report line.
pub const SEPARATOR: &str = " => ";

/// Number of examples shown in the console summary by default.
pub const DEFAULT_SUMMARY_LIMIT: usize = 10;

lazy_static! {
    static ref REPORT_LINE: Regex =
        Regex::new(r"^(?s)(.*) => (肯定|否定)$").expect("report line pattern is valid");
}

/// Format one example as a report line (without the newline).
pub fn format_line(example: &LabeledExample) -> String {
    format!("{}{}{}", example.text, SEPARATOR, example.label)
}

/// Parse one report line. `line_number` is 1-based and only used in errors.
pub fn parse_line(line: &str, line_number: usize) -> Result<LabeledExample> {
    let captures = REPORT_LINE.captures(line).ok_or_else(|| {
        AssentError::parse(line_number, format!("expected '<text>{SEPARATOR}<label>'"))
    })?;
    Ok(LabeledExample::new(&captures[1], captures[2].parse()?))
}

/// Write `examples` as report lines to `writer`.
pub fn write_examples<W: Write>(examples: &[LabeledExample], writer: &mut W) -> Result<()> {
    for example in examples {
        writeln!(writer, "{}", format_line(example))?;
    }
    Ok(())
}

/// Write `examples` to `destination`, replacing any previous content.
pub fn report<P: AsRef<Path>>(examples: &[LabeledExample], destination: P) -> Result<()> {
    let path = destination.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);
    write_examples(examples, &mut writer)?;
    writer.flush()?;
    info!("Wrote {} examples to {}", examples.len(), path.display());
    Ok(())
}

/// Read a report back into labeled examples.
pub fn read_report<P: AsRef<Path>>(path: P) -> Result<Vec<LabeledExample>> {
    let reader = BufReader::new(File::open(path.as_ref())?);
    let mut examples = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.is_empty() {
            debug!("Skipping blank report line {}", index + 1);
            continue;
        }
        examples.push(parse_line(&line, index + 1)?);
    }
    Ok(examples)
}

/// Print the first `limit` examples as a human-readable summary.
pub fn summarize<W: Write>(examples: &[LabeledExample], limit: usize, out: &mut W) -> Result<()> {
    for example in examples.iter().take(limit) {
        writeln!(out, "输入: {} => 分类: {}", example.text, example.label)?;
    }
    Ok(())
}

/// Writes a report file and a console summary for a corpus.
#[derive(Debug, Clone)]
pub struct Reporter {
    output_path: PathBuf,
    summary_limit: usize,
}

impl Reporter {
    pub fn new<P: Into<PathBuf>>(output_path: P) -> Self {
        Self {
            output_path: output_path.into(),
            summary_limit: DEFAULT_SUMMARY_LIMIT,
        }
    }

    pub fn with_summary_limit(mut self, summary_limit: usize) -> Self {
        self.summary_limit = summary_limit;
        self
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Print the summary to `console`, persist `examples`, then print a
    /// completion message.
    ///
    /// The summary is printed even when the report file cannot be written.
    pub fn report<W: Write>(&self, examples: &[LabeledExample], console: &mut W) -> Result<()> {
        summarize(examples, self.summary_limit, console)?;
        report(examples, &self.output_path)?;
        writeln!(
            console,
            "测试完成，结果已保存到文件 '{}'。",
            self.output_path.display()
        )?;
        Ok(())
    }
}
