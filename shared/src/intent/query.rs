//! 查询请求类型
//!
//! 提供预设列表的过滤、排序与分页接口。

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::models::Preset;

/// Category value that disables category filtering
pub const ALL_CATEGORIES: &str = "All";

/// 排序方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortMode {
    /// Newest first by effective creation time
    Latest,
    /// Presets carrying pinned tags first, grouped by pin order
    PinnedFirst,
    /// By position of the first main category, then newest first
    Category,
}

impl SortMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Latest => "latest",
            Self::PinnedFirst => "pinned_first",
            Self::Category => "category",
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for an unrecognised sort mode name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSortMode(pub String);

impl fmt::Display for UnknownSortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown sort mode: {}", self.0)
    }
}

impl std::error::Error for UnknownSortMode {}

impl FromStr for SortMode {
    type Err = UnknownSortMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "latest" => Ok(Self::Latest),
            "pinned_first" => Ok(Self::PinnedFirst),
            "category" => Ok(Self::Category),
            other => Err(UnknownSortMode(other.to_string())),
        }
    }
}

/// 查询请求 - 用于预设列表查询
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PresetQuery {
    /// 精确匹配的标签名，`All` 或空表示不过滤
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// 关键词 (大小写不敏感)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
    /// 排序方式，缺省时保持存储顺序
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<SortMode>,
    /// 页码 (从 1 开始)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// 每页数量
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
}

impl PresetQuery {
    /// 创建简单查询 (全部预设，存储顺序)
    pub fn all() -> Self {
        Self::default()
    }

    /// 添加分类过滤
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// 添加关键词过滤
    pub fn search(mut self, q: impl Into<String>) -> Self {
        self.q = Some(q.into());
        self
    }

    /// 添加排序
    pub fn order_by(mut self, sort: SortMode) -> Self {
        self.sort = Some(sort);
        self
    }

    /// 添加分页
    pub fn paginate(mut self, page: u32, page_size: u32) -> Self {
        self.page = Some(page);
        self.page_size = Some(page_size);
        self
    }

    /// Active category filter, if any
    pub fn category_filter(&self) -> Option<&str> {
        self.category
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty() && *c != ALL_CATEGORIES)
    }

    /// Lower-cased search needle, if any
    pub fn text_filter(&self) -> Option<String> {
        self.q
            .as_deref()
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .map(str::to_lowercase)
    }

    /// `(page, page_size)` when both are present and at least 1
    pub fn pagination(&self) -> Option<(u32, u32)> {
        match (self.page, self.page_size) {
            (Some(page), Some(size)) if page >= 1 && size >= 1 => Some((page, size)),
            _ => None,
        }
    }
}

/// 分页响应
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PresetPage {
    /// 当前页数据
    pub presets: Vec<Preset>,
    /// 过滤后的总数 (分页前)
    pub total: usize,
    /// 当前页码
    pub page: u32,
    /// 每页数量
    pub page_size: u32,
    /// 总页数
    pub total_pages: u32,
    /// 全量 (未过滤) 集合中每个标签的引用数
    pub category_counts: BTreeMap<String, usize>,
}

impl PresetPage {
    pub fn new(
        presets: Vec<Preset>,
        total: usize,
        page: u32,
        page_size: u32,
        category_counts: BTreeMap<String, usize>,
    ) -> Self {
        let total_pages = if page_size > 0 {
            total.div_ceil(page_size as usize) as u32
        } else {
            1
        };

        Self {
            presets,
            total,
            page,
            page_size,
            total_pages,
            category_counts,
        }
    }
}

/// 查询结果 - 未分页时直接返回数组
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PresetQueryResult {
    Page(PresetPage),
    List(Vec<Preset>),
}

impl PresetQueryResult {
    /// Presets of this result regardless of paging
    pub fn presets(&self) -> &[Preset] {
        match self {
            Self::Page(page) => &page.presets,
            Self::List(list) => list,
        }
    }

    pub fn into_page(self) -> Option<PresetPage> {
        match self {
            Self::Page(page) => Some(page),
            Self::List(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_mode_parse() {
        assert_eq!("latest".parse::<SortMode>(), Ok(SortMode::Latest));
        assert_eq!("pinned_first".parse::<SortMode>(), Ok(SortMode::PinnedFirst));
        assert_eq!("category".parse::<SortMode>(), Ok(SortMode::Category));
        assert!("oldest".parse::<SortMode>().is_err());
    }

    #[test]
    fn test_all_sentinel_disables_category() {
        assert_eq!(PresetQuery::all().with_category("All").category_filter(), None);
        assert_eq!(PresetQuery::all().with_category("").category_filter(), None);
        assert_eq!(
            PresetQuery::all().with_category("插画艺术").category_filter(),
            Some("插画艺术")
        );
    }

    #[test]
    fn test_pagination_requires_both_values() {
        assert_eq!(PresetQuery::all().paginate(2, 10).pagination(), Some((2, 10)));
        assert_eq!(PresetQuery::all().paginate(0, 10).pagination(), None);
        assert_eq!(PresetQuery::all().paginate(1, 0).pagination(), None);

        let mut only_page = PresetQuery::all();
        only_page.page = Some(1);
        assert_eq!(only_page.pagination(), None);
    }

    #[test]
    fn test_total_pages() {
        let page = PresetPage::new(vec![], 21, 1, 10, BTreeMap::new());
        assert_eq!(page.total_pages, 3);
        let empty = PresetPage::new(vec![], 0, 1, 10, BTreeMap::new());
        assert_eq!(empty.total_pages, 0);
    }

    #[test]
    fn test_unpaged_result_serializes_as_array() {
        let json = serde_json::to_string(&PresetQueryResult::List(vec![])).unwrap();
        assert_eq!(json, "[]");
    }
}
