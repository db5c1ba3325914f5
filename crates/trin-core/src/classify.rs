//! Per-code-point script classification.

use crate::registry::ScriptRegistry;
use crate::script::{Script, BLOCK_SIZE};

/// First code point of the Devanagari block.
pub const DEV_BLOCK_START: u32 = 0x0900;

/// Code points inside the Devanagari block that are shared punctuation
/// across the Brahmic scripts, not Devanagari characters: danda,
/// double danda, and the abbreviation sign.
pub const DEV_COMMON_CODE_POINTS: [u32; 3] = [0x0964, 0x0965, 0x0970];

/// Classify a code point as `(script-or-none, offset within block)`.
///
/// `None` covers punctuation, digits, whitespace, code points in
/// unregistered blocks, and the shared-punctuation carve-outs above.
/// O(1), no allocation.
pub fn classify(registry: &ScriptRegistry, code_point: u32) -> (Option<&Script>, u8) {
    let offset = (code_point & (BLOCK_SIZE - 1)) as u8;
    let block_start = code_point & !(BLOCK_SIZE - 1);
    if block_start == DEV_BLOCK_START && DEV_COMMON_CODE_POINTS.contains(&code_point) {
        return (None, offset);
    }
    (registry.by_block_start(block_start), offset)
}

/// Stricter membership test: the code point classifies to a script and,
/// when that script carries an assignment mask, the offset's bit is set.
pub fn is_assigned(registry: &ScriptRegistry, code_point: u32) -> bool {
    match classify(registry, code_point) {
        (Some(script), offset) => script.mask.map_or(true, |m| m.contains(offset)),
        (None, _) => false,
    }
}
