//! 应用状态容器测试
//!
//! 覆盖评审选择的记账逻辑：记录选择、前后移动、越界保持不动。

use serde_json::json;

use ora_grading::Store;

#[test]
fn test_update_selection_resets_index() {
    let store = Store::new();

    store.update_selection(vec!["a".to_string(), "b".to_string()]);
    store.advance_selection();
    assert_eq!(store.active_submission_id(), Some("b".to_string()));

    // 新的选择把活跃下标归零、清掉旧详情
    store.set_current_review(json!({"old": true}));
    store.update_selection(vec!["c".to_string()]);
    assert_eq!(store.active_submission_id(), Some("c".to_string()));
    assert!(store.review().current.is_none());
}

#[test]
fn test_advance_and_retreat_within_bounds() {
    let store = Store::new();
    store.update_selection(vec!["a".to_string(), "b".to_string(), "c".to_string()]);

    assert!(store.advance_selection());
    assert!(store.advance_selection());
    assert_eq!(store.active_submission_id(), Some("c".to_string()));
    // 已在末尾，不再移动
    assert!(!store.advance_selection());
    assert_eq!(store.active_submission_id(), Some("c".to_string()));

    assert!(store.retreat_selection());
    assert!(store.retreat_selection());
    assert_eq!(store.active_submission_id(), Some("a".to_string()));
    // 已在开头，不再移动
    assert!(!store.retreat_selection());
}

#[test]
fn test_moving_clears_current_payload() {
    let store = Store::new();
    store.update_selection(vec!["a".to_string(), "b".to_string()]);

    store.set_current_review(json!({"submissionUUID": "a"}));
    assert!(store.review().current.is_some());

    store.advance_selection();
    assert!(store.review().current.is_none());
}

#[test]
fn test_empty_selection_has_no_active_submission() {
    let store = Store::new();
    assert_eq!(store.active_submission_id(), None);
}

#[test]
fn test_is_individual_flag() {
    let store = Store::new();
    assert!(store.is_individual());
    store.set_is_individual(false);
    assert!(!store.is_individual());
}
