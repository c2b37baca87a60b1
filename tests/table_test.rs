//! 提交表格测试
//!
//! 覆盖空列表渲染、列文案切换、成绩格式化、筛选 / 排序 / 分页、
//! 行选择和聚焦提交的收窄行为。

use chrono::{TimeZone, Utc};

use ora_grading::models::{GradingStatus, Score, SubmissionRecord};
use ora_grading::table::columns::{self, SubmissionColumn};
use ora_grading::table::{
    BadgeVariant, SortDirection, StatusBadge, SubmissionsTable,
};

fn record(
    uuid: &str,
    username: &str,
    team_name: &str,
    day: u32,
    status: GradingStatus,
    score: Option<Score>,
) -> SubmissionRecord {
    SubmissionRecord {
        submission_uuid: uuid.to_string(),
        username: Some(username.to_string()),
        team_name: Some(team_name.to_string()),
        date_submitted: Utc.with_ymd_and_hms(2021, 6, day, 12, 0, 0).unwrap(),
        grading_status: status,
        score,
    }
}

fn sample_data() -> Vec<SubmissionRecord> {
    vec![
        record(
            "uuid-alice",
            "alice",
            "Team Red",
            1,
            GradingStatus::Ungraded,
            None,
        ),
        record(
            "uuid-bob",
            "bob",
            "Team Blue",
            3,
            GradingStatus::Graded,
            Some(Score {
                points_earned: 3,
                points_possible: 5,
            }),
        ),
        record(
            "uuid-carol",
            "Carol",
            "Team Red",
            2,
            GradingStatus::InProgress,
            Some(Score {
                points_earned: 5,
                points_possible: 5,
            }),
        ),
    ]
}

#[test]
fn test_empty_list_renders_nothing() {
    let table = SubmissionsTable::new(Vec::new(), true, None);
    assert!(table.render().is_none());
}

#[test]
fn test_headers_switch_on_is_individual() {
    let individual = SubmissionsTable::new(sample_data(), true, None);
    let render = individual.render().unwrap();
    assert_eq!(
        render.headers,
        vec![
            "Username",
            "Learner submission date",
            "Grade",
            "Grading status"
        ]
    );

    let team = SubmissionsTable::new(sample_data(), false, None);
    let render = team.render().unwrap();
    assert_eq!(render.headers[0], "Team name");
    assert_eq!(render.headers[1], "Team submission date");
    // 团队模式下身份列取团队名
    assert_eq!(render.rows[0].cells[0], "Team Red");
}

#[test]
fn test_grade_formatting() {
    assert_eq!(columns::format_grade(None), "-");
    assert_eq!(
        columns::format_grade(Some(&Score {
            points_earned: 3,
            points_possible: 5,
        })),
        "3/5"
    );

    // 渲染出的单元格走同一条格式化路径
    let table = SubmissionsTable::new(sample_data(), true, None);
    let render = table.render().unwrap();
    assert_eq!(render.rows[0].cells[2], "-");
    assert_eq!(render.rows[1].cells[2], "3/5");
}

#[test]
fn test_status_badge_mapping() {
    assert_eq!(
        StatusBadge::new(GradingStatus::Ungraded).variant(),
        BadgeVariant::Primary
    );
    assert_eq!(
        StatusBadge::new(GradingStatus::Locked).variant(),
        BadgeVariant::Light
    );
    assert_eq!(
        StatusBadge::new(GradingStatus::Graded).variant(),
        BadgeVariant::Success
    );
    assert_eq!(
        StatusBadge::new(GradingStatus::InProgress).variant(),
        BadgeVariant::Warning
    );
    assert_eq!(StatusBadge::new(GradingStatus::Graded).label(), "Graded");
}

#[test]
fn test_column_filterability() {
    assert!(SubmissionColumn::Identity.text_filterable());
    assert!(!SubmissionColumn::DateSubmitted.text_filterable());
    assert!(!SubmissionColumn::Grade.text_filterable());
    // 状态列走多选筛选，不是文本筛选
    assert!(!SubmissionColumn::GradingStatus.text_filterable());
}

#[test]
fn test_identity_filter_case_insensitive() {
    let mut table = SubmissionsTable::new(sample_data(), true, None);
    table.view.set_identity_filter(Some("CAR".to_string()));

    let render = table.render().unwrap();
    assert_eq!(render.item_count, 1);
    assert_eq!(render.rows[0].cells[0], "Carol");
    assert!(render.filter_summary.is_some());
}

#[test]
fn test_status_multi_select_filter() {
    let mut table = SubmissionsTable::new(sample_data(), true, None);
    table
        .view
        .set_status_filter(vec![GradingStatus::Ungraded, GradingStatus::Graded]);

    let render = table.render().unwrap();
    assert_eq!(render.item_count, 2);
    let uuids: Vec<&str> = render
        .rows
        .iter()
        .map(|row| row.submission_uuid.as_str())
        .collect();
    assert_eq!(uuids, vec!["uuid-alice", "uuid-bob"]);
}

#[test]
fn test_sort_by_date_descending() {
    let mut table = SubmissionsTable::new(sample_data(), true, None);
    table
        .view
        .set_sort(SubmissionColumn::DateSubmitted, SortDirection::Descending);

    let render = table.render().unwrap();
    let uuids: Vec<&str> = render
        .rows
        .iter()
        .map(|row| row.submission_uuid.as_str())
        .collect();
    assert_eq!(uuids, vec!["uuid-bob", "uuid-carol", "uuid-alice"]);
}

#[test]
fn test_sort_by_grade_absent_scores_last() {
    let mut table = SubmissionsTable::new(sample_data(), true, None);
    table
        .view
        .set_sort(SubmissionColumn::Grade, SortDirection::Ascending);

    let render = table.render().unwrap();
    let uuids: Vec<&str> = render
        .rows
        .iter()
        .map(|row| row.submission_uuid.as_str())
        .collect();
    // 3/5 < 5/5，没有成绩的排最后
    assert_eq!(uuids, vec!["uuid-bob", "uuid-carol", "uuid-alice"]);
}

#[test]
fn test_toggle_sort_cycles() {
    let mut table = SubmissionsTable::new(sample_data(), true, None);

    table.view.toggle_sort(SubmissionColumn::Identity);
    assert_eq!(
        table.view.sort,
        Some((SubmissionColumn::Identity, SortDirection::Ascending))
    );
    table.view.toggle_sort(SubmissionColumn::Identity);
    assert_eq!(
        table.view.sort,
        Some((SubmissionColumn::Identity, SortDirection::Descending))
    );
    table.view.toggle_sort(SubmissionColumn::Identity);
    assert_eq!(table.view.sort, None);
}

#[test]
fn test_client_side_pagination() {
    let mut table = SubmissionsTable::new(sample_data(), true, None);
    table.view.page_size = 2;

    let render = table.render().unwrap();
    assert_eq!(render.page_index, 0);
    assert_eq!(render.page_count, 2);
    assert_eq!(render.rows.len(), 2);
    assert_eq!(render.item_count, 3);

    table.view.page_index = 1;
    let render = table.render().unwrap();
    assert_eq!(render.rows.len(), 1);
    assert_eq!(render.rows[0].submission_uuid, "uuid-carol");
}

#[test]
fn test_view_all_responses_uses_filtered_rows() {
    let mut table = SubmissionsTable::new(sample_data(), true, None);
    assert_eq!(
        table.view_all_responses(),
        vec!["uuid-alice", "uuid-bob", "uuid-carol"]
    );

    // 表级动作作用于筛选后的全部行，不只是当前页
    table.view.page_size = 1;
    table.view.set_status_filter(vec![GradingStatus::Graded]);
    assert_eq!(table.view_all_responses(), vec!["uuid-bob"]);
}

#[test]
fn test_selected_responses_uses_selection() {
    let mut table = SubmissionsTable::new(sample_data(), true, None);
    table.view.toggle_selected(0);
    table.view.toggle_selected(2);

    assert_eq!(
        table.selected_responses(),
        vec!["uuid-alice", "uuid-carol"]
    );

    // 取消选择后不再出现
    table.view.toggle_selected(0);
    assert_eq!(table.selected_responses(), vec!["uuid-carol"]);
}

#[test]
fn test_rendered_rows_carry_selection_flag() {
    let mut table = SubmissionsTable::new(sample_data(), true, None);
    table.toggle_page_row(1);

    let render = table.render().unwrap();
    assert!(!render.rows[0].selected);
    assert!(render.rows[1].selected);
}

#[test]
fn test_mount_without_focus_is_none() {
    let table = SubmissionsTable::new(sample_data(), true, None);
    assert!(table.mount().is_none());
}

#[test]
fn test_focused_submission_narrows_to_single_uuid() {
    let mut table =
        SubmissionsTable::new(sample_data(), true, Some("uuid-bob".to_string()));

    // 即使其他行也被选中，结果也收窄到聚焦的那一条
    table.view.toggle_selected(0);
    table.view.toggle_selected(1);
    table.view.toggle_selected(2);

    assert_eq!(table.mount(), Some(vec!["uuid-bob".to_string()]));
    assert_eq!(table.view_all_responses(), vec!["uuid-bob"]);
    assert_eq!(table.selected_responses(), vec!["uuid-bob"]);
}

#[test]
fn test_focused_submission_not_in_list_yields_empty() {
    let table = SubmissionsTable::new(
        sample_data(),
        true,
        Some("uuid-missing".to_string()),
    );
    assert_eq!(table.mount(), Some(Vec::new()));
}
