//! Splitting text into maximal script-homogeneous runs.

use crate::classify::classify;
use crate::registry::ScriptRegistry;
use crate::script::Script;

/// A maximal contiguous substring whose code points all classify to the
/// same script-or-none value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run<'r, 't> {
    pub text: &'t str,
    pub script: Option<&'r Script>,
}

/// Walk `text` left to right, yielding runs in order. Runs never split
/// a code point and concatenate back to the input exactly; empty input
/// yields no runs.
pub fn segment<'r, 't>(registry: &'r ScriptRegistry, text: &'t str) -> Runs<'r, 't> {
    Runs {
        registry,
        text,
        pos: 0,
    }
}

pub struct Runs<'r, 't> {
    registry: &'r ScriptRegistry,
    text: &'t str,
    pos: usize,
}

fn same_script(a: Option<&Script>, b: Option<&Script>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => a.block_start == b.block_start,
        (None, None) => true,
        _ => false,
    }
}

impl<'r, 't> Iterator for Runs<'r, 't> {
    type Item = Run<'r, 't>;

    fn next(&mut self) -> Option<Run<'r, 't>> {
        let rest = &self.text[self.pos..];
        let mut chars = rest.char_indices();
        let (_, first) = chars.next()?;
        let (script, _) = classify(self.registry, first as u32);

        let mut end = rest.len();
        for (i, c) in chars {
            if !same_script(script, classify(self.registry, c as u32).0) {
                end = i;
                break;
            }
        }
        self.pos += end;
        Some(Run {
            text: &rest[..end],
            script,
        })
    }
}
