use std::fs;
use std::io::Read;
use std::process;

use serde::Serialize;

use trin_core::detect::detect_scripts;
use trin_core::registry::{parse_scripts_toml, ScriptRegistry};
use trin_core::script::Script;
use trin_core::translit::rules::RuleSet;
use trin_core::translit::{transliterate, Mode};

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

/// Load the script catalogue: the built-in nine scripts, or a custom
/// TOML file given with `--scripts`.
pub fn load_registry(scripts_file: Option<&str>) -> ScriptRegistry {
    match scripts_file {
        Some(path) => {
            let content = die!(
                fs::read_to_string(path),
                "Failed to read scripts file: {}"
            );
            let scripts = die!(parse_scripts_toml(&content), "Invalid scripts file: {}");
            die!(ScriptRegistry::new(scripts), "Invalid script catalogue: {}")
        }
        None => ScriptRegistry::builtin(),
    }
}

pub fn resolve_script<'r>(registry: &'r ScriptRegistry, name: &str) -> &'r Script {
    registry.by_name(name).unwrap_or_else(|| {
        eprintln!("Unknown script: {name} (run `trin scripts` for the catalogue)");
        process::exit(1);
    })
}

/// Input text: positional argument, `--input` file, or stdin.
pub fn read_text(text: Option<String>, input: Option<&str>) -> String {
    match (text, input) {
        (Some(t), None) => t,
        (None, Some(path)) => die!(fs::read_to_string(path), "Failed to read input file: {}"),
        (None, None) => {
            let mut buf = String::new();
            die!(
                std::io::stdin().read_to_string(&mut buf),
                "Failed to read stdin: {}"
            );
            buf
        }
        (Some(_), Some(_)) => {
            eprintln!("Give either TEXT or --input, not both");
            process::exit(1);
        }
    }
}

#[derive(Serialize)]
struct FiredRule<'a> {
    id: &'a str,
    description: &'a str,
}

#[derive(Serialize)]
struct ConvertOutput<'a> {
    text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    hover: Option<&'a str>,
    fired: Vec<FiredRule<'a>>,
}

fn fired_rules<'a>(rules: &'a RuleSet, ids: &[String]) -> Vec<FiredRule<'a>> {
    ids.iter()
        .filter_map(|id| rules.by_id(id))
        .map(|r| FiredRule {
            id: &r.id,
            description: &r.description,
        })
        .collect()
}

#[allow(clippy::too_many_arguments)]
pub fn convert_cmd(
    registry: &ScriptRegistry,
    to: &str,
    text: Option<String>,
    input: Option<&str>,
    hover: Option<&str>,
    basic: bool,
    explain: bool,
    json: bool,
) {
    let rules = RuleSet::builtin();
    let target = resolve_script(registry, to);
    let mode = if basic { Mode::Basic } else { Mode::Enhanced };
    let text = read_text(text, input);

    let result = transliterate(registry, &rules, &text, target, mode);
    let hover_result =
        hover.map(|h| transliterate(registry, &rules, &text, resolve_script(registry, h), mode));

    let mut fired_ids = result.fired.clone();
    if let Some(ref h) = hover_result {
        for id in &h.fired {
            if !fired_ids.contains(id) {
                fired_ids.push(id.clone());
            }
        }
    }

    if json {
        let out = ConvertOutput {
            text: &result.text,
            hover: hover_result.as_ref().map(|h| h.text.as_str()),
            fired: fired_rules(&rules, &fired_ids),
        };
        println!(
            "{}",
            serde_json::to_string_pretty(&out).expect("JSON serialization failed")
        );
    } else {
        println!("{}", result.text);
        if let Some(ref h) = hover_result {
            println!("{}", h.text);
        }
        if explain {
            for rule in fired_rules(&rules, &fired_ids) {
                eprintln!("rule {}: {}", rule.id, rule.description);
            }
        }
    }
}

#[derive(Serialize)]
struct DetectedScript<'a> {
    code: &'a str,
    name: &'a str,
    block_start: u32,
}

pub fn detect_cmd(registry: &ScriptRegistry, text: Option<String>, input: Option<&str>, json: bool) {
    let text = read_text(text, input);
    let found = detect_scripts(registry, &text);

    if json {
        let out: Vec<DetectedScript> = found
            .iter()
            .map(|s| DetectedScript {
                code: &s.code,
                name: &s.name,
                block_start: s.block_start,
            })
            .collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&out).expect("JSON serialization failed")
        );
    } else if found.is_empty() {
        println!("(no recognized script)");
    } else {
        for script in found {
            println!("{script}");
        }
    }
}

pub fn scripts_cmd(registry: &ScriptRegistry, json: bool) {
    if json {
        let out: Vec<DetectedScript> = registry
            .scripts()
            .iter()
            .map(|s| DetectedScript {
                code: &s.code,
                name: &s.name,
                block_start: s.block_start,
            })
            .collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&out).expect("JSON serialization failed")
        );
    } else {
        for script in registry.scripts() {
            println!("{}  {:<12} U+{:04X}", script.code, script.name, script.block_start);
        }
    }
}
