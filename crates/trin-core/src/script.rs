//! Script descriptors: one value per supported script, built once at
//! startup and shared read-only for the process lifetime.

use std::fmt;

/// Size of one script block. Every supported script occupies a
/// contiguous 128-code-point Unicode block starting at a 128-aligned
/// code point.
pub const BLOCK_SIZE: u32 = 0x80;

/// A fixed 128-bit set indexed by block offset, marking which offsets
/// carry assigned characters of a script.
///
/// Most blocks are dense enough that the plain block-level membership
/// check suffices, so the mask is an opt-in refinement for sparsely
/// populated blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockMask {
    bits: [u64; 2],
}

impl BlockMask {
    /// Build a mask from inclusive `(low, high)` offset ranges.
    /// Offsets above 127 are ignored.
    pub fn from_ranges(ranges: &[(u8, u8)]) -> BlockMask {
        let mut bits = [0u64; 2];
        for &(lo, hi) in ranges {
            for off in lo..=hi.min(127) {
                bits[usize::from(off >> 6)] |= 1u64 << (off & 63);
            }
        }
        BlockMask { bits }
    }

    pub fn contains(&self, offset: u8) -> bool {
        offset < 128 && (self.bits[usize::from(offset >> 6)] >> (offset & 63)) & 1 == 1
    }

    pub fn is_empty(&self) -> bool {
        self.bits == [0; 2]
    }
}

/// An immutable script descriptor. Compared by block start, which the
/// registry guarantees is unique.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Script {
    /// Three-letter identifier, e.g. `kan`.
    pub code: String,
    /// Full lowercase name, e.g. `kannada`.
    pub name: String,
    /// First code point of the script's block.
    pub block_start: u32,
    /// Optional per-offset assignment mask; absent means every offset
    /// in the block counts as assigned.
    pub mask: Option<BlockMask>,
}

impl Script {
    pub fn new(code: &str, name: &str, block_start: u32) -> Script {
        Script {
            code: code.to_string(),
            name: name.to_string(),
            block_start,
            mask: None,
        }
    }

    pub fn with_mask(mut self, mask: BlockMask) -> Script {
        self.mask = Some(mask);
        self
    }

    /// The character at `offset` within this script's block.
    pub fn char_at(&self, offset: u8) -> Option<char> {
        char::from_u32(self.block_start + u32::from(offset))
    }
}

impl fmt::Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (U+{:04X})", self.name, self.block_start)
    }
}
