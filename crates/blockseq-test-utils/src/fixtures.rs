//! Named block layouts for scenario tests and benchmarks.
//!
//! - [`free_list_layout`]: gapped blocks as an allocator's free list holds them.
//! - [`duplicate_layout`]: equal-valued blocks at the head, middle, and tail.

use blockseq_core::BlockRecord;

use crate::block;

/// `count` blocks of growing size separated by gaps, sorted by offset.
///
/// Block `i` has length `16 * (i + 1)` and is followed by a gap of the
/// same size, mimicking a fragmented heap's free list.
pub fn free_list_layout(count: usize) -> Vec<BlockRecord> {
    let mut offset = 0;
    (0..count as u64)
        .map(|i| {
            let len = 16 * (i + 1);
            let b = block(offset, len);
            offset += 2 * len;
            b
        })
        .collect()
}

/// Three distinct blocks with copies of the first at the middle and tail.
///
/// Layout: `[d, x, d, y, d]` where `d` is the returned duplicate.
pub fn duplicate_layout() -> (BlockRecord, Vec<BlockRecord>) {
    let d = block(0, 64);
    let x = block(64, 32);
    let y = block(96, 32);
    (d, vec![d, x, d, y, d])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn free_list_layout_has_gaps() {
        let blocks = free_list_layout(4);
        for pair in blocks.windows(2) {
            assert!(pair[0].end() < pair[1].offset());
        }
    }

    #[test]
    fn duplicate_layout_repeats_head() {
        let (d, blocks) = duplicate_layout();
        assert_eq!(blocks.iter().filter(|&&b| b == d).count(), 3);
    }
}
