//! Fixture harness: run `(input, expected)` transliteration rows and
//! report a per-row verdict plus a summary.

use std::fs;
use std::process;

use serde::{Deserialize, Serialize};

use trin_core::detect::detect_scripts;
use trin_core::registry::ScriptRegistry;
use trin_core::translit::rules::RuleSet;
use trin_core::translit::{transliterate, Mode};

#[derive(Debug, Deserialize)]
pub struct CheckCorpus {
    pub cases: Vec<CheckCase>,
}

#[derive(Debug, Deserialize)]
pub struct CheckCase {
    pub input: String,
    /// Expected output; its script also selects the target script, so
    /// it must be monoscriptal.
    pub expected: String,
    #[serde(default)]
    pub note: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    Pass,
    Fail,
    /// The expected text spans zero or several scripts, so no target
    /// can be derived for the row.
    Ambiguous,
}

#[derive(Debug, Serialize)]
pub struct CheckResult {
    pub input: String,
    pub expected: String,
    pub actual: String,
    pub status: CheckStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CheckSummary {
    pub total: usize,
    pub pass: usize,
    pub fail: usize,
    pub ambiguous: usize,
    pub pass_rate: String,
}

#[derive(Debug, Serialize)]
pub struct CheckReport {
    pub results: Vec<CheckResult>,
    pub summary: CheckSummary,
}

/// Run every row: derive the target script from the expected text,
/// transliterate the input, and compare exactly. Per-row problems are
/// recorded and the batch continues.
pub fn run_check(
    registry: &ScriptRegistry,
    rules: &RuleSet,
    corpus: &CheckCorpus,
    mode: Mode,
) -> CheckReport {
    let mut results = Vec::with_capacity(corpus.cases.len());
    for case in &corpus.cases {
        let targets = detect_scripts(registry, &case.expected);
        let status;
        let actual;
        match targets.as_slice() {
            &[target] => {
                actual = transliterate(registry, rules, &case.input, target, mode).text;
                status = if actual == case.expected {
                    CheckStatus::Pass
                } else {
                    CheckStatus::Fail
                };
            }
            _ => {
                actual = String::new();
                status = CheckStatus::Ambiguous;
            }
        }
        results.push(CheckResult {
            input: case.input.clone(),
            expected: case.expected.clone(),
            actual,
            status,
            note: case.note.clone(),
        });
    }

    let total = results.len();
    let pass = results
        .iter()
        .filter(|r| r.status == CheckStatus::Pass)
        .count();
    let fail = results
        .iter()
        .filter(|r| r.status == CheckStatus::Fail)
        .count();
    let ambiguous = total - pass - fail;
    let rate = if total > 0 {
        pass as f64 / total as f64 * 100.0
    } else {
        0.0
    };
    CheckReport {
        results,
        summary: CheckSummary {
            total,
            pass,
            fail,
            ambiguous,
            pass_rate: format!("{rate:.1}%"),
        },
    }
}

pub fn check_cmd(
    registry: &ScriptRegistry,
    corpus_file: &str,
    basic: bool,
    verbose: bool,
    json: bool,
) {
    let content = fs::read_to_string(corpus_file).unwrap_or_else(|e| {
        eprintln!("Failed to read corpus file {corpus_file}: {e}");
        process::exit(1);
    });
    let corpus: CheckCorpus = toml::from_str(&content).unwrap_or_else(|e| {
        eprintln!("Failed to parse corpus TOML: {e}");
        process::exit(1);
    });

    let rules = RuleSet::builtin();
    let mode = if basic { Mode::Basic } else { Mode::Enhanced };
    let report = run_check(registry, &rules, &corpus, mode);

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&report).expect("JSON serialization failed")
        );
    } else {
        for r in &report.results {
            match r.status {
                CheckStatus::Pass => {
                    if verbose {
                        println!("  \u{2713} {} \u{2192} {}", r.input, r.expected);
                    }
                }
                CheckStatus::Fail => {
                    println!(
                        "  \u{2717} {} \u{2192} {} (expected: {})",
                        r.input, r.actual, r.expected
                    );
                }
                CheckStatus::Ambiguous => {
                    println!(
                        "  ? {} (expected text is not monoscriptal: {})",
                        r.input, r.expected
                    );
                }
            }
        }
        println!();
        println!("=== Summary ===");
        println!("  Total:     {}", report.summary.total);
        println!("  Pass:      {:>3}", report.summary.pass);
        println!("  Fail:      {:>3}", report.summary.fail);
        println!("  Ambiguous: {:>3}", report.summary.ambiguous);
        println!("  Pass rate: {}", report.summary.pass_rate);
    }

    if report.summary.fail > 0 || report.summary.ambiguous > 0 {
        process::exit(1);
    }
}
