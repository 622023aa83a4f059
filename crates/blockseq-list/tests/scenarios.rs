//! Integration test: named scenarios for free-list bookkeeping.
//!
//! Covers the boundary cases allocators lean on: building a list from
//! both ends, removing at head/tail/interior, first-match removal among
//! duplicates, and cursor exhaustion.

use blockseq_core::SeqError;
use blockseq_list::BlockSequence;
use blockseq_test_utils::block;
use blockseq_test_utils::fixtures::{duplicate_layout, free_list_layout};

#[test]
fn build_from_both_ends() {
    let (a, b, c) = (block(0, 8), block(8, 8), block(16, 8));
    let mut seq = BlockSequence::new();
    seq.push_back(a);
    seq.push_back(b);
    seq.push_front(c);
    assert_eq!(seq.iter().collect::<Vec<_>>(), vec![c, a, b]);
    assert_eq!(seq.len(), 3);
}

#[test]
fn remove_at_middle_of_three() {
    let (a, b, c) = (block(0, 8), block(8, 8), block(16, 8));
    let mut seq: BlockSequence = [a, b, c].into_iter().collect();
    seq.remove_at(1).unwrap();
    assert_eq!(seq.iter().collect::<Vec<_>>(), vec![a, c]);
    assert_eq!(seq.len(), 2);
}

#[test]
fn empty_sequence_node_at_zero_is_invalid() {
    let seq = BlockSequence::new();
    assert_eq!(
        seq.node_at(0).unwrap_err(),
        SeqError::InvalidIndex { index: 0, len: 0 }
    );
}

#[test]
fn block_at_len_is_invalid() {
    let seq: BlockSequence = free_list_layout(3).into_iter().collect();
    assert_eq!(
        seq.block_at(3),
        Err(SeqError::InvalidIndex { index: 3, len: 3 })
    );
}

#[test]
fn drain_free_list_from_the_front() {
    let layout = free_list_layout(6);
    let mut seq: BlockSequence = layout.iter().copied().collect();
    for expected in &layout {
        assert_eq!(seq.first().unwrap().block(), *expected);
        assert_eq!(seq.remove_at(0), Ok(*expected));
        seq.check_invariants().unwrap();
    }
    assert!(seq.is_empty());
    assert!(seq.first().is_none() && seq.last().is_none());
}

#[test]
fn drain_free_list_from_the_back() {
    let layout = free_list_layout(6);
    let mut seq: BlockSequence = layout.iter().copied().collect();
    for expected in layout.iter().rev() {
        assert_eq!(seq.last().unwrap().block(), *expected);
        seq.remove_at(seq.len() - 1).unwrap();
        seq.check_invariants().unwrap();
    }
    assert!(seq.is_empty());
}

#[test]
fn duplicates_are_removed_head_first() {
    let (d, layout) = duplicate_layout();
    let mut seq: BlockSequence = layout.iter().copied().collect();

    assert_eq!(seq.remove_value(d), Ok(0));
    assert_eq!(seq.index_of(d), Some(1));

    let tail = seq.last().unwrap().handle();
    assert_eq!(tail.block(), d);
    assert_eq!(seq.remove_node(Some(tail)), Ok(true));
    assert_eq!(seq.index_of(d), Some(2));
    assert_eq!(seq.last().unwrap().block(), d);

    seq.remove_value(d).unwrap();
    assert_eq!(seq.index_of(d), None);
    assert_eq!(seq.len(), 2);
    seq.check_invariants().unwrap();
}

#[test]
fn cursor_walks_then_reports_no_such_element() {
    let layout = free_list_layout(3);
    let seq: BlockSequence = layout.iter().copied().collect();
    let mut cursor = seq.iter();
    let mut seen = Vec::new();
    while cursor.has_next() {
        seen.push(cursor.next_block().unwrap());
    }
    assert_eq!(seen, layout);
    assert_eq!(cursor.next_block(), Err(SeqError::NoSuchElement));
}

#[test]
fn cursor_is_not_restartable() {
    let seq: BlockSequence = free_list_layout(2).into_iter().collect();
    let mut cursor = seq.iter();
    assert_eq!(cursor.by_ref().count(), 2);
    assert!(!cursor.has_next());
    assert_eq!(cursor.next(), None);
}

#[test]
fn for_loop_over_reference() {
    let layout = free_list_layout(4);
    let seq: BlockSequence = layout.iter().copied().collect();
    let mut total = 0;
    for b in &seq {
        total += b.len();
    }
    assert_eq!(total, seq.total_len());
    assert_eq!(total, 16 + 32 + 48 + 64);
}

#[test]
fn describe_renders_each_block() {
    let seq: BlockSequence = free_list_layout(2).into_iter().collect();
    assert_eq!(seq.describe(), "(0 , 16) (32 , 32)");
}
