//! Reporting which scripts appear in a text.

use crate::registry::ScriptRegistry;
use crate::script::Script;
use crate::segment::segment;

/// The distinct scripts present in `text`, in first-appearance order.
/// Runs that classify to none (punctuation, digits, foreign blocks) are
/// not reported.
pub fn detect_scripts<'r>(registry: &'r ScriptRegistry, text: &str) -> Vec<&'r Script> {
    let mut found: Vec<&Script> = Vec::new();
    for run in segment(registry, text) {
        if let Some(script) = run.script {
            if !found.iter().any(|s| s.block_start == script.block_start) {
                found.push(script);
            }
        }
    }
    found
}
