// tests/integration/persistence.rs
use event_coverage::domain::RangeSetRecord;
use event_coverage::prelude::*;

use crate::common::RangeSetBuilder;

#[test]
fn stored_coverage_merges_like_the_original() {
    let a = RangeSetBuilder::new(4).events(1, [1, 2, 3, 5]).canonical();
    let b = RangeSetBuilder::new(4).events(1, [4, 6]).build();

    let stored_a = serde_json::to_string(&a).unwrap();
    let stored_b = serde_json::to_string(&b).unwrap();
    let mut loaded_a: RangeSet = serde_json::from_str(&stored_a).unwrap();
    let loaded_b: RangeSet = serde_json::from_str(&stored_b).unwrap();

    assert!(loaded_a.is_collapsed());
    assert!(!loaded_b.is_collapsed());
    assert_eq!(loaded_a.checksum(), a.checksum());

    loaded_a.merge(&loaded_b).unwrap();
    assert_eq!(loaded_a.to_compact_string(), "4:1[1,7)");
}

#[test]
fn tampered_record_is_rejected_as_corruption() {
    let canonical = RangeSetBuilder::new(4).range(1, 1, 3).range(1, 5, 9).canonical();
    let mut record = RangeSetRecord::from(canonical);
    record.ranges.swap(0, 1);

    let err = RangeSet::try_from(record).unwrap_err();
    assert!(err.is_data_corruption());
}

#[test]
fn accumulator_config_from_json() {
    let config = AccumulatorConfig::from_json_str(r#"{"duplicates":"reject","expected_run":4}"#).unwrap();
    assert_eq!(config.duplicates, DuplicatePolicy::Reject);
    assert_eq!(config.overlaps, OverlapPolicy::Reject);

    let part = RangeSetBuilder::new(5).range(1, 1, 3).build();
    assert!(combine(vec![part], config).is_err());
}
