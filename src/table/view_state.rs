//! 表格视图状态
//!
//! 筛选、排序、分页和行选择。状态只在表格存活期间有效，
//! 数据变了就整体重建，不做增量同步。
//!
//! 筛选规则沿用评分列表的约定：
//! - 身份列：大小写不敏感的包含匹配
//! - 评分状态列：在封闭枚举上做多选
//! - 提交时间、成绩列：关闭筛选
//!
//! 排序对所有列可用；分页是纯客户端的，在筛好、排好的
//! 列表上切片。

use std::cmp::Ordering;
use std::collections::BTreeSet;

use crate::models::{GradingStatus, Score, SubmissionRecord};
use crate::table::columns::{self, SubmissionColumn};

/// 初始每页行数
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// 排序方向
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// 表格视图状态
#[derive(Debug, Clone)]
pub struct TableViewState {
    /// 身份列文本筛选
    pub identity_filter: Option<String>,
    /// 评分状态多选筛选（空表示不筛）
    pub status_filter: Vec<GradingStatus>,
    /// 当前排序（列 + 方向）
    pub sort: Option<(SubmissionColumn, SortDirection)>,
    /// 当前页下标（从 0 开始）
    pub page_index: usize,
    /// 每页行数
    pub page_size: usize,
    /// 选中行（提交列表里的下标）
    selected: BTreeSet<usize>,
}

impl Default for TableViewState {
    fn default() -> Self {
        Self {
            identity_filter: None,
            status_filter: Vec::new(),
            sort: None,
            page_index: 0,
            page_size: DEFAULT_PAGE_SIZE,
            selected: BTreeSet::new(),
        }
    }
}

impl TableViewState {
    // ========== 筛选 ==========

    /// 设置身份列文本筛选，翻页回到第一页
    pub fn set_identity_filter(&mut self, filter: Option<String>) {
        self.identity_filter = filter.filter(|f| !f.is_empty());
        self.page_index = 0;
    }

    /// 设置评分状态多选筛选，翻页回到第一页
    pub fn set_status_filter(&mut self, statuses: Vec<GradingStatus>) {
        self.status_filter = statuses;
        self.page_index = 0;
    }

    /// 当前激活筛选的描述文案（没有筛选时为 None）
    pub fn filter_summary(&self) -> Option<String> {
        let mut parts = Vec::new();
        if let Some(filter) = &self.identity_filter {
            parts.push(format!("identity contains \"{}\"", filter));
        }
        if !self.status_filter.is_empty() {
            let labels: Vec<&str> = self.status_filter.iter().map(|s| s.label()).collect();
            parts.push(format!("status in [{}]", labels.join(", ")));
        }
        if parts.is_empty() {
            None
        } else {
            Some(format!("Filtered by {}", parts.join("; ")))
        }
    }

    // ========== 排序 ==========

    /// 设置排序
    pub fn set_sort(&mut self, column: SubmissionColumn, direction: SortDirection) {
        self.sort = Some((column, direction));
    }

    /// 点击表头循环切换：升序 → 降序 → 不排序
    pub fn toggle_sort(&mut self, column: SubmissionColumn) {
        self.sort = match self.sort {
            Some((current, SortDirection::Ascending)) if current == column => {
                Some((column, SortDirection::Descending))
            }
            Some((current, SortDirection::Descending)) if current == column => None,
            _ => Some((column, SortDirection::Ascending)),
        };
    }

    // ========== 行选择 ==========

    /// 切换某一行的选中状态
    pub fn toggle_selected(&mut self, index: usize) {
        if !self.selected.remove(&index) {
            self.selected.insert(index);
        }
    }

    /// 某一行是否被选中
    pub fn is_selected(&self, index: usize) -> bool {
        self.selected.contains(&index)
    }

    /// 清空选择
    pub fn clear_selection(&mut self) {
        self.selected.clear();
    }

    /// 选中行数
    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    // ========== 行管线：筛选 → 排序 → 分页 ==========

    /// 筛选并排序后的行下标（指向完整列表）
    pub fn filtered_indices(&self, data: &[SubmissionRecord], is_individual: bool) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..data.len())
            .filter(|&i| self.matches_filters(&data[i], is_individual))
            .collect();

        if let Some((column, direction)) = self.sort {
            // 稳定排序：相等时保持原始顺序
            indices.sort_by(|&a, &b| {
                let ordering = compare_records(&data[a], &data[b], column, is_individual);
                match direction {
                    SortDirection::Ascending => ordering,
                    SortDirection::Descending => ordering.reverse(),
                }
            });
        }

        indices
    }

    /// 当前页的行下标（指向完整列表）
    pub fn page_indices(&self, data: &[SubmissionRecord], is_individual: bool) -> Vec<usize> {
        let filtered = self.filtered_indices(data, is_individual);
        filtered
            .into_iter()
            .skip(self.page_index * self.page_size)
            .take(self.page_size)
            .collect()
    }

    /// 筛选后的总页数
    pub fn page_count(&self, filtered_len: usize) -> usize {
        filtered_len.div_ceil(self.page_size)
    }

    /// 筛选后被选中的行下标（批量动作的输入）
    pub fn selected_filtered_indices(
        &self,
        data: &[SubmissionRecord],
        is_individual: bool,
    ) -> Vec<usize> {
        self.filtered_indices(data, is_individual)
            .into_iter()
            .filter(|i| self.selected.contains(i))
            .collect()
    }

    fn matches_filters(&self, record: &SubmissionRecord, is_individual: bool) -> bool {
        if let Some(filter) = &self.identity_filter {
            let identity = columns::identity_value(record, is_individual).to_lowercase();
            if !identity.contains(&filter.to_lowercase()) {
                return false;
            }
        }
        if !self.status_filter.is_empty() && !self.status_filter.contains(&record.grading_status) {
            return false;
        }
        true
    }
}

/// 按列比较两条提交记录
fn compare_records(
    a: &SubmissionRecord,
    b: &SubmissionRecord,
    column: SubmissionColumn,
    is_individual: bool,
) -> Ordering {
    match column {
        SubmissionColumn::Identity => columns::identity_value(a, is_individual)
            .to_lowercase()
            .cmp(&columns::identity_value(b, is_individual).to_lowercase()),
        SubmissionColumn::DateSubmitted => a.date_submitted.cmp(&b.date_submitted),
        SubmissionColumn::Grade => compare_scores(a.score, b.score),
        SubmissionColumn::GradingStatus => a
            .grading_status
            .label()
            .cmp(b.grading_status.label()),
    }
}

/// 比较成绩：按得分比例，没有成绩的排在最后
fn compare_scores(a: Option<Score>, b: Option<Score>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(a), Some(b)) => score_ratio(a)
            .partial_cmp(&score_ratio(b))
            .unwrap_or(Ordering::Equal),
    }
}

fn score_ratio(score: Score) -> f64 {
    if score.points_possible == 0 {
        0.0
    } else {
        f64::from(score.points_earned) / f64::from(score.points_possible)
    }
}
