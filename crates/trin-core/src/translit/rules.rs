//! Heuristic word-final rewrite rules.
//!
//! Block-offset mapping is exact for word interiors but leaves
//! artifacts at word ends where scripts disagree on the inherent vowel:
//! Kannada writes it out, Devanagari implies it. Each rule patches one
//! ordered script pair by appending a single sign after a word-final
//! consonant. Rules are plain data; adding one is adding a table entry.

use std::ops::RangeInclusive;

use crate::script::Script;

/// Consonant row shared by the Brahmic blocks, as block offsets.
/// Verified for Kannada and Devanagari; rules for other pairs should
/// confirm the span against that pair's block layout.
pub const DEFAULT_CONSONANT_SPAN: RangeInclusive<u8> = 0x15..=0x39;

/// A conditional word-final adjustment for one ordered script pair,
/// applied only in enhanced mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteRule {
    /// Stable identifier reported in [`Transliterated::fired`].
    ///
    /// [`Transliterated::fired`]: crate::translit::Transliterated
    pub id: String,
    /// Human-readable description for diagnostic display.
    pub description: String,
    /// Source script name.
    pub src: String,
    /// Target script name.
    pub dst: String,
    /// Offsets (in the target block) counting as a final consonant.
    pub consonant_span: RangeInclusive<u8>,
    /// Offset of the sign to append, within the target block.
    pub append_offset: u8,
}

impl RewriteRule {
    pub fn new(id: &str, description: &str, src: &str, dst: &str, append_offset: u8) -> RewriteRule {
        RewriteRule {
            id: id.to_string(),
            description: description.to_string(),
            src: src.to_string(),
            dst: dst.to_string(),
            consonant_span: DEFAULT_CONSONANT_SPAN,
            append_offset,
        }
    }
}

/// The rule table, keyed by ordered (source, target) script names.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<RewriteRule>,
}

impl RuleSet {
    pub fn new(rules: Vec<RewriteRule>) -> RuleSet {
        RuleSet { rules }
    }

    /// The two built-in Kannada/Devanagari rules.
    pub fn builtin() -> RuleSet {
        RuleSet::new(vec![
            RewriteRule::new(
                "kan2devAddA",
                "If the source word is in Kannada and ends with a consonant, and the \
                 target script is Devanagari, append an AA vowel sign.",
                "kannada",
                "devanagari",
                0x3E,
            ),
            RewriteRule::new(
                "dev2kanAddVir",
                "If the source word is in Devanagari and ends with a consonant, and the \
                 target script is Kannada, append a virama.",
                "devanagari",
                "kannada",
                0x4D,
            ),
        ])
    }

    pub fn rules(&self) -> &[RewriteRule] {
        &self.rules
    }

    /// The rule for the ordered `(src, dst)` pair, if any.
    pub fn lookup(&self, src: &Script, dst: &Script) -> Option<&RewriteRule> {
        self.rules
            .iter()
            .find(|r| r.src == src.name && r.dst == dst.name)
    }

    pub fn by_id(&self, id: &str) -> Option<&RewriteRule> {
        self.rules.iter().find(|r| r.id == id)
    }
}
