//! Word- and text-level transliteration via block-offset arithmetic
//! plus heuristic word-final rewrite rules.

pub mod rules;

use tracing::debug_span;

use crate::registry::ScriptRegistry;
use crate::script::{Script, BLOCK_SIZE};
use crate::segment::segment;
use self::rules::RuleSet;

/// Enhanced mode applies the word-final rewrite rules; basic mode is
/// pure block-offset arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Enhanced,
    Basic,
}

/// Transliteration output: the mapped text plus the ids of the rewrite
/// rules that fired, in firing order without duplicates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transliterated {
    pub text: String,
    pub fired: Vec<String>,
}

impl Transliterated {
    fn passthrough(text: &str) -> Transliterated {
        Transliterated {
            text: text.to_string(),
            fired: Vec::new(),
        }
    }
}

/// Map one script-homogeneous word from `src` to `dst`.
///
/// Every code point in `word` is assumed to belong to `src`'s block;
/// out-of-block input produces unspecified (but non-panicking) output.
/// A `src` of none, or `src == dst`, returns the word unchanged, so
/// punctuation and already-correct-script runs pass through untouched.
pub fn transliterate_word(
    word: &str,
    src: Option<&Script>,
    dst: &Script,
    rules: &RuleSet,
    mode: Mode,
) -> Transliterated {
    let src = match src {
        Some(s) if s.block_start != dst.block_start => s,
        _ => return Transliterated::passthrough(word),
    };

    let mut text = String::with_capacity(word.len());
    let mut last_offset = None;
    for c in word.chars() {
        let mapped = (c as u32)
            .wrapping_sub(src.block_start)
            .wrapping_add(dst.block_start);
        text.push(char::from_u32(mapped).unwrap_or(c));
        last_offset = Some((mapped & (BLOCK_SIZE - 1)) as u8);
    }

    let mut fired = Vec::new();
    if mode == Mode::Enhanced {
        if let (Some(offset), Some(rule)) = (last_offset, rules.lookup(src, dst)) {
            if rule.consonant_span.contains(&offset) {
                if let Some(sign) = dst.char_at(rule.append_offset) {
                    text.push(sign);
                    fired.push(rule.id.clone());
                }
            }
        }
    }

    Transliterated { text, fired }
}

/// Transliterate a whole text into `dst`: segment into script runs, map
/// each run, and concatenate in order. The single entry point for
/// "convert this text".
pub fn transliterate(
    registry: &ScriptRegistry,
    rules: &RuleSet,
    text: &str,
    dst: &Script,
    mode: Mode,
) -> Transliterated {
    let _span = debug_span!("transliterate", target = %dst.name, len = text.len()).entered();

    let mut out = String::with_capacity(text.len());
    let mut fired: Vec<String> = Vec::new();
    for run in segment(registry, text) {
        let word = transliterate_word(run.text, run.script, dst, rules, mode);
        out.push_str(&word.text);
        for id in word.fired {
            if !fired.contains(&id) {
                fired.push(id);
            }
        }
    }
    Transliterated { text: out, fired }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::detect::detect_scripts;

    fn setup() -> (ScriptRegistry, RuleSet) {
        (ScriptRegistry::builtin(), RuleSet::builtin())
    }

    #[test]
    fn identity_for_none_source() {
        let (reg, rules) = setup();
        let dev = reg.by_name("devanagari").unwrap();
        let out = transliterate_word("hello, 123", None, dev, &rules, Mode::Enhanced);
        assert_eq!(out.text, "hello, 123");
        assert!(out.fired.is_empty());
    }

    #[test]
    fn identity_for_same_script() {
        let (reg, rules) = setup();
        let dev = reg.by_name("devanagari").unwrap();
        let out = transliterate_word("नमस्ते", Some(dev), dev, &rules, Mode::Enhanced);
        assert_eq!(out.text, "नमस्ते");
        assert!(out.fired.is_empty());
    }

    #[test]
    fn block_arithmetic_dev_to_kan() {
        let (reg, rules) = setup();
        let kan = reg.by_name("kannada").unwrap();
        let dev = reg.by_name("devanagari").unwrap();
        // ends in a vowel sign, so no rule applies
        let out = transliterate_word("नमस्ते", Some(dev), kan, &rules, Mode::Enhanced);
        assert_eq!(out.text, "ನಮಸ್ತೇ");
        assert!(out.fired.is_empty());
    }

    #[test]
    fn kan_to_dev_appends_aa_sign() {
        let (reg, rules) = setup();
        let kan = reg.by_name("kannada").unwrap();
        let dev = reg.by_name("devanagari").unwrap();
        let out = transliterate_word("ಕ", Some(kan), dev, &rules, Mode::Enhanced);
        assert_eq!(out.text, "का");
        assert_eq!(out.fired, vec!["kan2devAddA".to_string()]);
    }

    #[test]
    fn dev_to_kan_appends_virama() {
        let (reg, rules) = setup();
        let kan = reg.by_name("kannada").unwrap();
        let dev = reg.by_name("devanagari").unwrap();
        let out = transliterate_word("क", Some(dev), kan, &rules, Mode::Enhanced);
        assert_eq!(out.text, "ಕ\u{0CCD}");
        assert_eq!(out.fired, vec!["dev2kanAddVir".to_string()]);
    }

    #[test]
    fn basic_mode_never_appends() {
        let (reg, rules) = setup();
        let kan = reg.by_name("kannada").unwrap();
        let dev = reg.by_name("devanagari").unwrap();

        let out = transliterate_word("ಕ", Some(kan), dev, &rules, Mode::Basic);
        assert_eq!(out.text, "क");
        assert!(out.fired.is_empty());

        let out = transliterate_word("क", Some(dev), kan, &rules, Mode::Basic);
        assert_eq!(out.text, "ಕ");
        assert!(out.fired.is_empty());
    }

    #[test]
    fn no_rule_for_other_pairs() {
        let (reg, rules) = setup();
        let tam = reg.by_name("tamil").unwrap();
        let dev = reg.by_name("devanagari").unwrap();
        // tamil KA, final consonant offset, but no dev→tam rule
        let out = transliterate_word("क", Some(dev), tam, &rules, Mode::Enhanced);
        assert_eq!(out.text, "க");
        assert!(out.fired.is_empty());
    }

    #[test]
    fn text_maps_runs_and_passes_none_through() {
        let (reg, rules) = setup();
        let dev = reg.by_name("devanagari").unwrap();
        let out = transliterate(&reg, &rules, "ನಮಸ್ಕಾರ ಕನ್ನಡ", dev, Mode::Enhanced);
        assert_eq!(out.text, "नमस्कारा कन्नडा");
        assert_eq!(out.fired, vec!["kan2devAddA".to_string()]);
    }

    #[test]
    fn danda_passes_through_unchanged() {
        let (reg, rules) = setup();
        let kan = reg.by_name("kannada").unwrap();
        let out = transliterate(&reg, &rules, "राम।", kan, Mode::Enhanced);
        assert_eq!(out.text, "ರಾಮ\u{0CCD}।");
        assert_eq!(out.fired, vec!["dev2kanAddVir".to_string()]);
    }

    #[test]
    fn fired_rules_are_deduplicated() {
        let (reg, rules) = setup();
        let dev = reg.by_name("devanagari").unwrap();
        let out = transliterate(&reg, &rules, "ಕ ಕ ಕ", dev, Mode::Enhanced);
        assert_eq!(out.text, "का का का");
        assert_eq!(out.fired, vec!["kan2devAddA".to_string()]);
    }

    #[test]
    fn already_target_script_text_is_unchanged() {
        let (reg, rules) = setup();
        let dev = reg.by_name("devanagari").unwrap();
        let text = "नमस्ते, hello। १२३";
        let out = transliterate(&reg, &rules, text, dev, Mode::Enhanced);
        assert_eq!(out.text, text);
        assert!(out.fired.is_empty());
    }

    #[test]
    fn empty_text() {
        let (reg, rules) = setup();
        let dev = reg.by_name("devanagari").unwrap();
        let out = transliterate(&reg, &rules, "", dev, Mode::Enhanced);
        assert_eq!(out.text, "");
        assert!(out.fired.is_empty());
    }

    proptest! {
        // Single-character block arithmetic: classify(c) == (A, o) means
        // basic-mode A→B yields the character at offset o in B's block.
        #[test]
        fn single_char_block_arithmetic(cp in 0x0900u32..0x0D80, target_idx in 0usize..9) {
            let (reg, rules) = setup();
            let Some(c) = char::from_u32(cp) else { return Ok(()) };
            let (script, offset) = crate::classify::classify(&reg, cp);
            let Some(src) = script else { return Ok(()) };
            let dst = &reg.scripts()[target_idx];
            let out = transliterate_word(&c.to_string(), Some(src), dst, &rules, Mode::Basic);
            let expected = dst.char_at(offset).unwrap();
            prop_assert_eq!(out.text, expected.to_string());
        }

        // Re-applying with the same target is a no-op once the text is
        // monoscriptal in that target.
        #[test]
        fn transliterate_is_idempotent(text in "[\\u{0900}-\\u{097F}\\u{0C80}-\\u{0CFF}a-z ।]*", target_idx in 0usize..9) {
            let (reg, rules) = setup();
            let dst = &reg.scripts()[target_idx];
            let once = transliterate(&reg, &rules, &text, dst, Mode::Basic);
            prop_assert!(detect_scripts(&reg, &once.text).len() <= 1);
            let twice = transliterate(&reg, &rules, &once.text, dst, Mode::Basic);
            prop_assert_eq!(once.text, twice.text);
        }
    }
}
