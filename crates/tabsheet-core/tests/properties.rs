//! Property tests for row ordering and break-set behavior

use proptest::prelude::*;
use tabsheet_core::{Margin, Worksheet};

proptest! {
    #[test]
    fn rows_iterate_in_ascending_order(nums in prop::collection::vec(0u32..5_000, 0..64)) {
        let mut ws = Worksheet::new("Props");
        for &n in &nums {
            ws.create_row(n).unwrap();
        }

        let iterated: Vec<u32> = ws.rows().map(|r| r.row_num()).collect();
        let mut expected = nums.clone();
        expected.sort_unstable();
        expected.dedup();

        prop_assert_eq!(&iterated, &expected);
        prop_assert!(iterated.windows(2).all(|w| w[0] < w[1]));

        let tree_nums: Vec<u32> = ws.tree().sheet_data.rows.iter().map(|r| r.row_num).collect();
        prop_assert_eq!(&tree_nums, &iterated);

        prop_assert_eq!(ws.physical_row_count(), expected.len());
        prop_assert_eq!(ws.first_row_num(), expected.first().copied());
        prop_assert_eq!(ws.last_row_num(), expected.last().copied());
    }

    #[test]
    fn removal_keeps_index_and_tree_aligned(
        nums in prop::collection::vec(0u32..200, 1..40),
        removals in prop::collection::vec(0u32..200, 0..20),
    ) {
        let mut ws = Worksheet::new("Props");
        for &n in &nums {
            ws.create_row(n).unwrap();
        }
        for &n in &removals {
            ws.remove_row(n);
        }

        let index: Vec<u32> = ws.row_store().row_nums().to_vec();
        let tree_nums: Vec<u32> = ws.tree().sheet_data.rows.iter().map(|r| r.row_num).collect();
        prop_assert_eq!(&index, &tree_nums);
        for n in removals {
            prop_assert!(ws.row(n).is_none());
        }
    }

    #[test]
    fn set_break_twice_equals_once(positions in prop::collection::vec(0u32..1_000, 0..32)) {
        let mut once = Worksheet::new("Once");
        let mut twice = Worksheet::new("Twice");
        for &p in &positions {
            once.set_row_break(p).unwrap();
            twice.set_row_break(p).unwrap();
            twice.set_row_break(p).unwrap();
        }
        prop_assert_eq!(once.row_breaks(), twice.row_breaks());

        let mut distinct = positions.clone();
        distinct.sort_unstable();
        distinct.dedup();
        prop_assert_eq!(once.row_breaks().map_or(0, |b| b.len()), distinct.len());
    }

    #[test]
    fn margins_round_trip_independently(values in prop::array::uniform6(0.0f64..10.0)) {
        let mut ws = Worksheet::new("Margins");
        for (margin, value) in Margin::ALL.iter().zip(values.iter()) {
            ws.set_margin(*margin, *value);
        }
        for (margin, value) in Margin::ALL.iter().zip(values.iter()) {
            prop_assert_eq!(ws.margin(*margin), *value);
        }
    }
}
