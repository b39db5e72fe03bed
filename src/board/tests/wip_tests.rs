//! Tests for the WIP limit policy.

use super::{column_id, task_id};
use crate::board::domain::{
    BoardDomainError, Column, FillLevel, WipPolicy, can_accept, fill_level,
};
use rstest::rstest;

fn column_with(count: usize, max_tasks: Option<usize>) -> Column {
    let column = Column::new(column_id("col"), "Column", "#3b82f6")
        .with_task_ids((0..count).map(|index| task_id(&format!("t{index}"))));
    match max_tasks {
        Some(limit) => column.with_max_tasks(limit),
        None => column,
    }
}

#[rstest]
#[case(0, None, true)]
#[case(50, None, true)]
#[case(4, Some(5), true)]
#[case(5, Some(5), false)]
#[case(6, Some(5), false)]
#[case(0, Some(0), false)]
fn can_accept_respects_limit(
    #[case] count: usize,
    #[case] max_tasks: Option<usize>,
    #[case] expected: bool,
) {
    assert_eq!(can_accept(&column_with(count, max_tasks)), expected);
}

#[rstest]
#[case(7, Some(10), FillLevel::Normal)]
#[case(8, Some(10), FillLevel::Approaching)]
#[case(9, Some(10), FillLevel::Approaching)]
#[case(10, Some(10), FillLevel::AtLimit)]
#[case(11, Some(10), FillLevel::AtLimit)]
#[case(3, Some(5), FillLevel::Normal)]
#[case(4, Some(5), FillLevel::Approaching)]
#[case(2, Some(3), FillLevel::Normal)]
#[case(3, Some(3), FillLevel::AtLimit)]
#[case(0, Some(0), FillLevel::AtLimit)]
#[case(100, None, FillLevel::Normal)]
fn fill_level_classifies_columns(
    #[case] count: usize,
    #[case] max_tasks: Option<usize>,
    #[case] expected: FillLevel,
) {
    assert_eq!(fill_level(&column_with(count, max_tasks)), expected);
}

#[rstest]
fn custom_policy_moves_the_approaching_threshold() {
    let policy = WipPolicy::new(50).expect("valid percentage");

    assert_eq!(policy.fill_level(&column_with(4, Some(10))), FillLevel::Normal);
    assert_eq!(
        policy.fill_level(&column_with(5, Some(10))),
        FillLevel::Approaching
    );
}

#[rstest]
fn policy_rejects_percentages_above_one_hundred() {
    assert_eq!(
        WipPolicy::new(101),
        Err(BoardDomainError::InvalidApproachingPercent(101))
    );
}

#[rstest]
fn policy_deserializes_with_default_threshold() {
    let policy: WipPolicy = serde_json::from_str("{}").expect("empty policy parses");
    assert_eq!(policy, WipPolicy::default());
    assert_eq!(policy.approaching_percent(), 80);
}

#[rstest]
fn policy_deserialization_rejects_invalid_threshold() {
    let result = serde_json::from_str::<WipPolicy>(r#"{"approaching_percent": 150}"#);
    assert!(result.is_err());
}

#[rstest]
#[case(3, Some(5), Some(2))]
#[case(7, Some(5), Some(0))]
#[case(3, None, None)]
fn remaining_capacity_counts_free_slots(
    #[case] count: usize,
    #[case] max_tasks: Option<usize>,
    #[case] expected: Option<usize>,
) {
    let policy = WipPolicy::default();
    assert_eq!(
        policy.remaining_capacity(&column_with(count, max_tasks)),
        expected
    );
}

#[rstest]
fn fill_level_labels_are_stable() {
    assert_eq!(FillLevel::Normal.as_str(), "normal");
    assert_eq!(FillLevel::Approaching.as_str(), "approaching");
    assert_eq!(FillLevel::AtLimit.to_string(), "at_limit");
}
