//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::classification::{Classification, TermMatch};
use crate::cli::args::{AssentArgs, OutputFormat};
use crate::corpus::LabelCounts;
use crate::error::Result;

/// Result structure for a pipeline run.
#[derive(Debug, Serialize, Deserialize)]
pub struct RunResult {
    pub output_path: String,
    pub counts: LabelCounts,
    pub duration_ms: u64,
}

/// Result structure for one classified utterance.
#[derive(Debug, Serialize, Deserialize)]
pub struct ClassifyResult {
    pub text: String,
    pub label: Classification,
    pub matched: Option<TermMatch>,
}

/// Result structure for the similarity command.
#[derive(Debug, Serialize, Deserialize)]
pub struct SimilarityResult {
    pub left: String,
    pub right: String,
    pub ratio: Option<f64>,
    pub threshold: f64,
    pub similar: bool,
}

/// Result structure for report statistics.
#[derive(Debug, Serialize, Deserialize)]
pub struct ReportStats {
    pub path: String,
    pub counts: LabelCounts,
    pub affirmative_ratio: f64,
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize + HumanReadable>(result: &T, args: &AssentArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            println!("{}", result.to_human());
            Ok(())
        }
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &AssentArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

/// Rendering of a result for the human output format.
pub trait HumanReadable {
    fn to_human(&self) -> String;
}

impl HumanReadable for RunResult {
    fn to_human(&self) -> String {
        format!(
            "Classified {} utterances ({} affirmative, {} negative) in {}ms\nReport: {}",
            self.counts.total(),
            self.counts.affirmative,
            self.counts.negative,
            self.duration_ms,
            self.output_path
        )
    }
}

impl HumanReadable for ClassifyResult {
    fn to_human(&self) -> String {
        match &self.matched {
            Some(matched) => format!("{} => {}  [{}]", self.text, self.label, matched),
            None => format!("{} => {}", self.text, self.label),
        }
    }
}

impl<T: HumanReadable> HumanReadable for Vec<T> {
    fn to_human(&self) -> String {
        self.iter()
            .map(HumanReadable::to_human)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl HumanReadable for SimilarityResult {
    fn to_human(&self) -> String {
        let ratio = match self.ratio {
            Some(ratio) => format!("{ratio:.3}"),
            None => "undefined".to_string(),
        };
        format!(
            "'{}' vs '{}': ratio {} (threshold {}) => {}",
            self.left,
            self.right,
            ratio,
            self.threshold,
            if self.similar { "similar" } else { "not similar" }
        )
    }
}

impl HumanReadable for ReportStats {
    fn to_human(&self) -> String {
        format!(
            concat!(
                "{}\n",
                "  total:       {}\n",
                "  affirmative: {}\n",
                "  negative:    {}\n",
                "  affirmative ratio: {:.1}%",
            ),
            self.path,
            self.counts.total(),
            self.counts.affirmative,
            self.counts.negative,
            self.affirmative_ratio * 100.0
        )
    }
}
