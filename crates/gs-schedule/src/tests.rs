//! Unit tests for gs-schedule.

use gs_core::{Customer, CustomerId, CustomerKind, Tick};

use crate::{ArrivalBatch, group_into_batches};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn cust(id: u32, kind: CustomerKind, time: u64, items: u64) -> Customer {
    Customer::new(CustomerId(id), kind, Tick(time), items)
}

// ── ArrivalBatch ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod arrival_batch {
    use super::*;

    #[test]
    fn new_accepts_matching_times() {
        let batch = ArrivalBatch::new(
            Tick(3),
            vec![cust(0, CustomerKind::A, 3, 1), cust(1, CustomerKind::B, 3, 2)],
        )
        .unwrap();
        assert_eq!(batch.time(), Tick(3));
        assert_eq!(batch.len(), 2);
    }

    #[test]
    fn new_rejects_stray_customer() {
        let result = ArrivalBatch::new(
            Tick(3),
            vec![cust(0, CustomerKind::A, 3, 1), cust(1, CustomerKind::A, 4, 1)],
        );
        assert!(result.is_err());
    }
}

// ── group_into_batches ────────────────────────────────────────────────────────

#[cfg(test)]
mod grouping {
    use super::*;

    #[test]
    fn batches_ascend_by_time() {
        let batches = group_into_batches(vec![
            cust(0, CustomerKind::A, 9, 1),
            cust(1, CustomerKind::A, 2, 1),
            cust(2, CustomerKind::A, 5, 1),
            cust(3, CustomerKind::A, 2, 1),
        ]);
        let times: Vec<u64> = batches.iter().map(|b| b.time().0).collect();
        assert_eq!(times, vec![2, 5, 9]);
        assert_eq!(batches[0].len(), 2);
    }

    #[test]
    fn within_batch_sorted_by_items_then_kind() {
        let batches = group_into_batches(vec![
            cust(0, CustomerKind::B, 1, 5),
            cust(1, CustomerKind::A, 1, 5),
            cust(2, CustomerKind::B, 1, 2),
        ]);
        assert_eq!(batches.len(), 1);
        let ids: Vec<u32> = batches[0].customers().iter().map(|c| c.id.0).collect();
        assert_eq!(ids, vec![2, 1, 0]);
    }

    #[test]
    fn full_ties_keep_input_order() {
        let batches = group_into_batches(vec![
            cust(0, CustomerKind::A, 0, 4),
            cust(1, CustomerKind::A, 0, 4),
            cust(2, CustomerKind::A, 0, 4),
        ]);
        let ids: Vec<u32> = batches[0].customers().iter().map(|c| c.id.0).collect();
        assert_eq!(ids, vec![0, 1, 2]);
    }

    #[test]
    fn every_customer_matches_its_batch_time() {
        let batches = group_into_batches(vec![
            cust(0, CustomerKind::A, 4, 1),
            cust(1, CustomerKind::B, 1, 1),
            cust(2, CustomerKind::A, 4, 3),
        ]);
        for batch in &batches {
            assert!(batch.customers().iter().all(|c| c.arrival_time == batch.time()));
        }
    }

    #[test]
    fn empty_input_no_batches() {
        assert!(group_into_batches(vec![]).is_empty());
    }
}

// ── Loaders ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader {
    use std::io::{Cursor, Write};

    use super::*;
    use crate::{load_customers_csv_reader, load_store_file, load_store_reader};

    #[test]
    fn text_format_round_trip() {
        let input = "2\nA 1 2\nA 2 1\n\nB 2 3\n";
        let parsed = load_store_reader(Cursor::new(input)).unwrap();
        assert_eq!(parsed.register_count, 2);
        assert_eq!(parsed.customers.len(), 3);
        assert_eq!(parsed.customers[2], cust(2, CustomerKind::B, 2, 3));
    }

    #[test]
    fn tolerates_extra_whitespace() {
        let parsed = load_store_reader(Cursor::new("  1 \n B\t 4   7 \n")).unwrap();
        assert_eq!(parsed.customers[0], cust(0, CustomerKind::B, 4, 7));
    }

    #[test]
    fn into_parts_builds_batches() {
        let parsed = load_store_reader(Cursor::new("3\nA 5 1\nB 0 2\n")).unwrap();
        let (config, batches) = parsed.into_parts();
        assert_eq!(config.register_count, 3);
        assert_eq!(batches.len(), 2);
        assert_eq!(batches[0].time(), Tick(0));
    }

    #[test]
    fn empty_input_is_an_error() {
        assert!(load_store_reader(Cursor::new("\n\n")).is_err());
    }

    #[test]
    fn bad_register_count_is_an_error() {
        assert!(load_store_reader(Cursor::new("two\nA 1 1\n")).is_err());
        assert!(load_store_reader(Cursor::new("-1\n")).is_err());
    }

    #[test]
    fn unknown_kind_reports_line() {
        let err = load_store_reader(Cursor::new("1\nA 1 1\nC 1 1\n")).unwrap_err();
        assert!(err.to_string().contains("line 3"), "got {err}");
    }

    #[test]
    fn wrong_field_count_is_an_error() {
        assert!(load_store_reader(Cursor::new("1\nA 1\n")).is_err());
        assert!(load_store_reader(Cursor::new("1\nA 1 1 1\n")).is_err());
    }

    #[test]
    fn negative_or_fractional_numbers_are_errors() {
        assert!(load_store_reader(Cursor::new("1\nA -1 1\n")).is_err());
        assert!(load_store_reader(Cursor::new("1\nA 1 2.5\n")).is_err());
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "1\nB 0 8\nB 3 4\n").unwrap();
        let parsed = load_store_file(file.path()).unwrap();
        assert_eq!(parsed.register_count, 1);
        assert_eq!(parsed.customers.len(), 2);
    }

    #[test]
    fn missing_file_is_io_error() {
        let result = load_store_file(std::path::Path::new("/nonexistent/store.txt"));
        assert!(matches!(result, Err(crate::ScheduleError::Io(_))));
    }

    #[test]
    fn csv_format() {
        let input = "kind,arrival_time,items\nA,1,2\nB, 2 ,3\n";
        let customers = load_customers_csv_reader(Cursor::new(input)).unwrap();
        assert_eq!(customers, vec![
            cust(0, CustomerKind::A, 1, 2),
            cust(1, CustomerKind::B, 2, 3),
        ]);
    }

    #[test]
    fn csv_unknown_kind_is_an_error() {
        let input = "kind,arrival_time,items\nZ,1,2\n";
        assert!(load_customers_csv_reader(Cursor::new(input)).is_err());
    }
}
