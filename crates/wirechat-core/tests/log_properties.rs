//! Property-based tests for the message log.
//!
//! Verifies the FIFO eviction invariants hold for arbitrary capacities and
//! message sequences.

use proptest::prelude::*;
use wirechat_core::{Message, MessageLog};

proptest! {
    /// After N appends into a log of capacity C, the length is min(N, C) and
    /// the contents are the last C messages in arrival order.
    #[test]
    fn prop_log_keeps_last_capacity_messages(
        capacity in 0usize..64,
        count in 0usize..200,
    ) {
        let mut log = MessageLog::new(capacity);
        for i in 0..count {
            log.append(Message::remote(format!("m{i}")));
        }

        prop_assert_eq!(log.len(), count.min(capacity));

        let expected: Vec<String> =
            (count.saturating_sub(capacity)..count).map(|i| format!("m{i}")).collect();
        let actual: Vec<String> = log.iter().map(|m| m.text.clone()).collect();
        prop_assert_eq!(actual, expected);
    }

    /// The length invariant survives arbitrary interleavings of appends and
    /// capacity changes.
    #[test]
    fn prop_len_never_exceeds_capacity(
        initial in 0usize..16,
        ops in prop::collection::vec(
            prop_oneof![
                2 => (0usize..1000).prop_map(|i| Op::Append(format!("m{i}"))),
                1 => (0usize..16).prop_map(Op::SetCapacity),
            ],
            0..100,
        ),
    ) {
        let mut log = MessageLog::new(initial);
        for op in ops {
            match op {
                Op::Append(text) => log.append(Message::remote(text)),
                Op::SetCapacity(cap) => log.set_capacity(cap),
            }
            prop_assert!(log.len() <= log.capacity());
        }
    }
}

#[derive(Debug, Clone)]
enum Op {
    Append(String),
    SetCapacity(usize),
}
