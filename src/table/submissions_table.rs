//! 提交表格
//!
//! 渲染入口和选择动作的汇聚点。两个动作走同一个处理器：
//! - 表级动作 "View all responses"：作用于筛选后的全部行
//! - 批量动作：作用于选中行
//!
//! URL 里带了聚焦提交时，挂载即模拟点击表级动作，且结果
//! 收窄到那一条提交——深链接可以直接落进单条评审流。

use tracing::debug;

use crate::models::SubmissionRecord;
use crate::table::columns::{self, SubmissionColumn};
use crate::table::view_state::TableViewState;

/// 渲染好的一行
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedRow {
    /// 提交 UUID
    pub submission_uuid: String,
    /// 各列格式化后的单元格内容（列顺序见 SubmissionColumn::ALL）
    pub cells: Vec<String>,
    /// 是否被选中
    pub selected: bool,
}

/// 渲染好的表格
#[derive(Debug, Clone, PartialEq)]
pub struct TableRender {
    /// 表头文案
    pub headers: Vec<String>,
    /// 当前页的行
    pub rows: Vec<RenderedRow>,
    /// 筛选后的总行数
    pub item_count: usize,
    /// 当前页下标
    pub page_index: usize,
    /// 总页数
    pub page_count: usize,
    /// 激活筛选的描述（没有筛选时为 None）
    pub filter_summary: Option<String>,
}

/// 提交表格
pub struct SubmissionsTable {
    list_data: Vec<SubmissionRecord>,
    is_individual: bool,
    focused_submission: Option<String>,
    /// 表格视图状态（筛选 / 排序 / 分页 / 选择）
    pub view: TableViewState,
}

impl SubmissionsTable {
    /// 创建提交表格
    ///
    /// # 参数
    /// - `list_data`: 提交记录列表（只读输入）
    /// - `is_individual`: 是否是个人型评估
    /// - `focused_submission`: URL 里的聚焦提交 UUID（可选）
    pub fn new(
        list_data: Vec<SubmissionRecord>,
        is_individual: bool,
        focused_submission: Option<String>,
    ) -> Self {
        Self {
            list_data,
            is_individual,
            focused_submission,
            view: TableViewState::default(),
        }
    }

    /// 渲染当前页
    ///
    /// # 返回
    /// 列表为空时返回 None（不渲染空表壳），否则返回渲染好的表格数据
    pub fn render(&self) -> Option<TableRender> {
        if self.list_data.is_empty() {
            return None;
        }

        let headers = SubmissionColumn::ALL
            .iter()
            .map(|column| column.label(self.is_individual).to_string())
            .collect();

        let filtered = self.view.filtered_indices(&self.list_data, self.is_individual);
        let rows = self
            .view
            .page_indices(&self.list_data, self.is_individual)
            .into_iter()
            .map(|index| self.render_row(index))
            .collect();

        Some(TableRender {
            headers,
            rows,
            item_count: filtered.len(),
            page_index: self.view.page_index,
            page_count: self.view.page_count(filtered.len()),
            filter_summary: self.view.filter_summary(),
        })
    }

    /// 表级动作：对筛选后的全部行触发"载入评审"
    ///
    /// # 返回
    /// 返回要载入评审的提交 UUID 列表
    pub fn view_all_responses(&self) -> Vec<String> {
        let rows = self.view.filtered_indices(&self.list_data, self.is_individual);
        self.handle_view_all_responses(&rows)
    }

    /// 批量动作：对选中行触发"载入评审"
    ///
    /// # 返回
    /// 返回要载入评审的提交 UUID 列表
    pub fn selected_responses(&self) -> Vec<String> {
        let rows = self
            .view
            .selected_filtered_indices(&self.list_data, self.is_individual);
        self.handle_view_all_responses(&rows)
    }

    /// 挂载钩子：URL 带了聚焦提交时模拟点击表级动作
    ///
    /// # 返回
    /// 有聚焦提交时返回收窄后的 UUID 列表，否则返回 None
    pub fn mount(&self) -> Option<Vec<String>> {
        self.focused_submission.as_ref()?;
        debug!("检测到聚焦提交，自动触发表级动作");
        Some(self.view_all_responses())
    }

    /// 两个动作共用的处理器：取行的 UUID，有聚焦提交时收窄到那一条
    fn handle_view_all_responses(&self, row_indices: &[usize]) -> Vec<String> {
        let mut uuids: Vec<String> = row_indices
            .iter()
            .map(|&index| self.list_data[index].submission_uuid.clone())
            .collect();

        if let Some(focused) = &self.focused_submission {
            uuids.retain(|uuid| uuid == focused);
        }

        uuids
    }

    /// 按可见行切换选中状态
    ///
    /// # 参数
    /// - `row`: 当前页内的行下标
    pub fn toggle_page_row(&mut self, row: usize) {
        let page = self.view.page_indices(&self.list_data, self.is_individual);
        if let Some(&index) = page.get(row) {
            self.view.toggle_selected(index);
        }
    }

    /// 提交记录总数（未筛选）
    pub fn item_count(&self) -> usize {
        self.list_data.len()
    }

    /// 把一行渲染成单元格文本
    fn render_row(&self, index: usize) -> RenderedRow {
        let record = &self.list_data[index];
        RenderedRow {
            submission_uuid: record.submission_uuid.clone(),
            cells: SubmissionColumn::ALL
                .iter()
                .map(|&column| columns::cell_value(record, column, self.is_individual))
                .collect(),
            selected: self.view.is_selected(index),
        }
    }
}
