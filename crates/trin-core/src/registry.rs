//! Script catalogue: an ordered, immutable registry of scripts with
//! block-start and name lookups, loaded from TOML.
//!
//! The registry is an explicit value constructed once by the hosting
//! program and passed by shared reference into every engine call, so
//! alternate catalogues (tests, custom script sets) need no global
//! state.

use std::collections::HashMap;

use serde::Deserialize;

use crate::script::{BlockMask, Script, BLOCK_SIZE};

/// Embedded default catalogue: the nine Brahmic scripts whose blocks
/// share the same relative character layout.
pub const DEFAULT_SCRIPTS_TOML: &str = include_str!("default_scripts.toml");

#[derive(Debug, thiserror::Error)]
pub enum ScriptConfigError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("[[scripts]] list is empty")]
    Empty,
    #[error("script {0}: code must be exactly 3 ASCII letters")]
    BadCode(String),
    #[error("script {0}: name is empty")]
    EmptyName(String),
}

#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("block start U+{0:04X} is not 128-aligned")]
    UnalignedBlockStart(u32),
    #[error("duplicate block start U+{0:04X}")]
    DuplicateBlockStart(u32),
    #[error("duplicate script name or code: {0}")]
    DuplicateName(String),
}

#[derive(Deserialize)]
struct ScriptsConfig {
    scripts: Vec<ScriptEntry>,
}

#[derive(Deserialize)]
struct ScriptEntry {
    code: String,
    name: String,
    block_start: u32,
    #[serde(default)]
    assigned: Option<Vec<(u8, u8)>>,
}

/// Parse TOML text into an ordered script list.
pub fn parse_scripts_toml(toml_str: &str) -> Result<Vec<Script>, ScriptConfigError> {
    let config: ScriptsConfig =
        toml::from_str(toml_str).map_err(|e| ScriptConfigError::Parse(e.to_string()))?;

    if config.scripts.is_empty() {
        return Err(ScriptConfigError::Empty);
    }

    let mut scripts = Vec::with_capacity(config.scripts.len());
    for entry in config.scripts {
        if entry.code.len() != 3 || !entry.code.bytes().all(|b| b.is_ascii_lowercase()) {
            return Err(ScriptConfigError::BadCode(entry.code));
        }
        if entry.name.is_empty() {
            return Err(ScriptConfigError::EmptyName(entry.code));
        }
        let mut script = Script::new(&entry.code, &entry.name, entry.block_start);
        if let Some(ranges) = entry.assigned {
            script = script.with_mask(BlockMask::from_ranges(&ranges));
        }
        scripts.push(script);
    }
    Ok(scripts)
}

/// Ordered sequence of scripts plus derived lookup maps, immutable
/// after construction.
#[derive(Debug)]
pub struct ScriptRegistry {
    scripts: Vec<Script>,
    by_start: HashMap<u32, usize>,
    by_name: HashMap<String, usize>,
}

impl ScriptRegistry {
    /// Build a registry, rejecting unaligned or duplicate block starts
    /// and duplicate names/codes.
    pub fn new(scripts: Vec<Script>) -> Result<ScriptRegistry, RegistryError> {
        let mut by_start = HashMap::with_capacity(scripts.len());
        let mut by_name = HashMap::with_capacity(scripts.len() * 2);

        for (i, script) in scripts.iter().enumerate() {
            if script.block_start % BLOCK_SIZE != 0 {
                return Err(RegistryError::UnalignedBlockStart(script.block_start));
            }
            if by_start.insert(script.block_start, i).is_some() {
                return Err(RegistryError::DuplicateBlockStart(script.block_start));
            }
            for key in [script.name.as_str(), script.code.as_str()] {
                if by_name.insert(key.to_ascii_lowercase(), i).is_some() {
                    return Err(RegistryError::DuplicateName(key.to_string()));
                }
            }
        }

        Ok(ScriptRegistry {
            scripts,
            by_start,
            by_name,
        })
    }

    /// The built-in nine-script catalogue.
    pub fn builtin() -> ScriptRegistry {
        let scripts =
            parse_scripts_toml(DEFAULT_SCRIPTS_TOML).expect("embedded script table must be valid");
        ScriptRegistry::new(scripts).expect("embedded script table must be valid")
    }

    /// All scripts in catalogue order.
    pub fn scripts(&self) -> &[Script] {
        &self.scripts
    }

    pub fn by_block_start(&self, block_start: u32) -> Option<&Script> {
        self.by_start.get(&block_start).map(|&i| &self.scripts[i])
    }

    /// Look up by full name or 3-letter code, case-insensitively.
    pub fn by_name(&self, name: &str) -> Option<&Script> {
        self.by_name
            .get(&name.to_ascii_lowercase())
            .map(|&i| &self.scripts[i])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalogue() {
        let reg = ScriptRegistry::builtin();
        assert_eq!(reg.scripts().len(), 9);
        assert_eq!(reg.scripts()[0].name, "devanagari");
        assert_eq!(reg.by_name("kannada").unwrap().block_start, 0x0C80);
        assert_eq!(reg.by_name("kan").unwrap().name, "kannada");
        assert_eq!(reg.by_name("TAM").unwrap().name, "tamil");
        assert_eq!(reg.by_block_start(0x0900).unwrap().code, "dev");
        assert!(reg.by_block_start(0x0000).is_none());
        assert!(reg.by_name("latin").is_none());
    }

    #[test]
    fn parse_custom_toml_with_mask() {
        let toml = r#"
[[scripts]]
code = "dev"
name = "devanagari"
block_start = 0x0900
assigned = [[0x01, 0x39], [0x3E, 0x4D]]
"#;
        let scripts = parse_scripts_toml(toml).unwrap();
        assert_eq!(scripts.len(), 1);
        let mask = scripts[0].mask.unwrap();
        assert!(mask.contains(0x15));
        assert!(!mask.contains(0x00));
        assert!(!mask.contains(0x3A));
    }

    #[test]
    fn error_empty_scripts() {
        let err = parse_scripts_toml("scripts = []\n").unwrap_err();
        assert!(matches!(err, ScriptConfigError::Empty));
    }

    #[test]
    fn error_bad_code() {
        let toml = r#"
[[scripts]]
code = "devanagari"
name = "devanagari"
block_start = 0x0900
"#;
        let err = parse_scripts_toml(toml).unwrap_err();
        assert!(matches!(err, ScriptConfigError::BadCode(_)));
    }

    #[test]
    fn error_invalid_toml() {
        let err = parse_scripts_toml("not valid toml {{{").unwrap_err();
        assert!(matches!(err, ScriptConfigError::Parse(_)));
    }

    #[test]
    fn error_duplicate_block_start() {
        let scripts = vec![
            Script::new("dev", "devanagari", 0x0900),
            Script::new("xxx", "other", 0x0900),
        ];
        let err = ScriptRegistry::new(scripts).unwrap_err();
        assert!(matches!(err, RegistryError::DuplicateBlockStart(0x0900)));
    }

    #[test]
    fn error_duplicate_name() {
        let scripts = vec![
            Script::new("dev", "devanagari", 0x0900),
            Script::new("dva", "devanagari", 0x0980),
        ];
        let err = ScriptRegistry::new(scripts).unwrap_err();
        assert!(matches!(err, RegistryError::DuplicateName(_)));
    }

    #[test]
    fn error_unaligned_block_start() {
        let scripts = vec![Script::new("bad", "offbyone", 0x0901)];
        let err = ScriptRegistry::new(scripts).unwrap_err();
        assert!(matches!(err, RegistryError::UnalignedBlockStart(0x0901)));
    }
}
