// web_app/model/mod.rs - Shared data models for client and server
//
// These structs travel between the WASM client and the server functions,
// so everything here is plain serde data with no framework types.

use serde::{Deserialize, Serialize};

#[cfg(feature = "db-tools")]
use sqlx::FromRow;

/// Rows per page requested by the manufacturer list
pub const LIMIT: u32 = 10;

/// Largest page the server will return, whatever `first` asks for
pub const MAX_PAGE_SIZE: u32 = 100;

/// Columns the manufacturers query can be ordered by
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QueryManufacturersOrderByColumn {
    #[default]
    CreatedAt,
    UpdatedAt,
    Name,
}

impl QueryManufacturersOrderByColumn {
    /// Column name in the `manufacturers` table
    pub fn sql_column(self) -> &'static str {
        match self {
            Self::CreatedAt => "created_at",
            Self::UpdatedAt => "updated_at",
            Self::Name => "name",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn as_sql(self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_sql())
    }
}

/// One `{column, order}` entry of the `orderBy` list
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderByClause {
    pub column: QueryManufacturersOrderByColumn,
    pub order: SortOrder,
}

/// Variables of the manufacturers list query
///
/// `text` is a SQL `LIKE` pattern and is absent until the first search.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManufacturersQueryVariables {
    pub first: u32,
    pub order_by: Vec<OrderByClause>,
    pub page: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl Default for ManufacturersQueryVariables {
    fn default() -> Self {
        Self::initial()
    }
}

impl ManufacturersQueryVariables {
    /// Variables of the very first load: newest first, page 1, no filter
    pub fn initial() -> Self {
        Self {
            first: LIMIT,
            order_by: vec![OrderByClause {
                column: QueryManufacturersOrderByColumn::CreatedAt,
                order: SortOrder::Desc,
            }],
            page: 1,
            text: None,
        }
    }

    /// Copy of `self` with the fields present in `patch` replaced
    pub fn merge(&self, patch: &RefetchVariables) -> Self {
        let mut merged = self.clone();
        if let Some(text) = &patch.text {
            merged.text = Some(text.clone());
        }
        if let Some(page) = patch.page {
            merged.page = page;
        }
        merged
    }

    /// Page size actually used by the server
    pub fn effective_first(&self) -> u32 {
        self.first.clamp(1, MAX_PAGE_SIZE)
    }

    /// 1-based page, pages below 1 read as the first page
    pub fn effective_page(&self) -> u32 {
        self.page.max(1)
    }

    /// Row offset for `LIMIT .. OFFSET ..`
    pub fn offset(&self) -> i64 {
        (self.effective_page() as i64 - 1) * self.effective_first() as i64
    }
}

/// Partial variables given to a refetch, merged into the last ones
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefetchVariables {
    pub text: Option<String>,
    pub page: Option<u32>,
}

/// Wrap a search term into a "contains" pattern
///
/// The term is used as typed: `%` and `_` inside it keep their wildcard
/// meaning, and the empty term yields `%%` which matches every row.
pub fn like_pattern(search_text: &str) -> String {
    format!("%{}%", search_text)
}

/// How a query may use previously fetched results
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FetchPolicy {
    /// Serve from cache when the same variables were fetched before
    #[default]
    CacheFirst,
    /// Always ask the server
    NetworkOnly,
}

/// Manufacturer / publication record (matches shop.manufacturers)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "db-tools", derive(FromRow))]
pub struct Manufacturer {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub website: Option<String>,
    pub is_approved: bool,
    pub products_count: i32,
    pub created_at: chrono::NaiveDateTime,
    pub updated_at: chrono::NaiveDateTime,
}

/// Pagination metadata of one result page
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginatorInfo {
    pub total: i64,
    pub current_page: u32,
    pub per_page: u32,
    pub last_page: u32,
    pub count: u32,
    pub first_item: Option<i64>,
    pub last_item: Option<i64>,
    pub has_more_pages: bool,
}

impl PaginatorInfo {
    /// Derive the metadata of page `current_page` holding `count` rows
    pub fn new(total: i64, current_page: u32, per_page: u32, count: u32) -> Self {
        let per_page = per_page.max(1);
        let total = total.max(0);
        let last_page = ((total + per_page as i64 - 1) / per_page as i64).max(1) as u32;

        let (first_item, last_item) = if count > 0 {
            let first = (current_page.max(1) as i64 - 1) * per_page as i64 + 1;
            (Some(first), Some(first + count as i64 - 1))
        } else {
            (None, None)
        };

        Self {
            total,
            current_page,
            per_page,
            last_page,
            count,
            first_item,
            last_item,
            has_more_pages: current_page < last_page,
        }
    }

    /// Page numbers to offer as buttons: up to `span` pages centred on the
    /// current one, shifted to stay within `1..=last_page`
    pub fn page_window(&self, span: u32) -> Vec<u32> {
        let last_page = self.last_page.max(1);
        let span = span.clamp(1, last_page);
        let current = self.current_page.clamp(1, last_page);
        let start = current
            .saturating_sub(span / 2)
            .max(1)
            .min(last_page - span + 1);
        (start..start + span).collect()
    }

    pub fn has_previous_page(&self) -> bool {
        self.current_page > 1
    }

    /// 1-based positions of the first and last row on this page
    pub fn item_range(&self) -> Option<(i64, i64)> {
        self.first_item.zip(self.last_item)
    }
}

/// One page of manufacturers as returned by the list query
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ManufacturerConnection {
    pub data: Vec<Manufacturer>,
    pub paginator_info: PaginatorInfo,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_variables() {
        let vars = ManufacturersQueryVariables::initial();
        assert_eq!(vars.first, LIMIT);
        assert_eq!(vars.page, 1);
        assert!(vars.text.is_none());
        assert_eq!(
            vars.order_by,
            vec![OrderByClause {
                column: QueryManufacturersOrderByColumn::CreatedAt,
                order: SortOrder::Desc,
            }]
        );
    }

    #[test]
    fn test_variables_wire_format() {
        let json = serde_json::to_value(ManufacturersQueryVariables::initial()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "first": 10,
                "orderBy": [{ "column": "CREATED_AT", "order": "DESC" }],
                "page": 1
            })
        );

        let searched = ManufacturersQueryVariables::initial().merge(&RefetchVariables {
            text: Some(like_pattern("Acme")),
            page: Some(2),
        });
        let json = serde_json::to_value(&searched).unwrap();
        assert_eq!(json["text"], "%Acme%");
        assert_eq!(json["page"], 2);
    }

    #[test]
    fn test_merge_keeps_untouched_fields() {
        let base = ManufacturersQueryVariables {
            text: Some("%old%".to_string()),
            page: 4,
            ..ManufacturersQueryVariables::initial()
        };

        let only_page = base.merge(&RefetchVariables { text: None, page: Some(2) });
        assert_eq!(only_page.text.as_deref(), Some("%old%"));
        assert_eq!(only_page.page, 2);
        assert_eq!(only_page.order_by, base.order_by);
        assert_eq!(only_page.first, base.first);

        let nothing = base.merge(&RefetchVariables::default());
        assert_eq!(nothing, base);
    }

    #[test]
    fn test_like_pattern() {
        assert_eq!(like_pattern("Acme"), "%Acme%");
        assert_eq!(like_pattern(""), "%%");
        assert_eq!(like_pattern("50%"), "%50%%");
    }

    #[test]
    fn test_offset_and_clamping() {
        let mut vars = ManufacturersQueryVariables::initial();
        assert_eq!(vars.offset(), 0);

        vars.page = 3;
        assert_eq!(vars.offset(), 20);

        vars.page = 0;
        assert_eq!(vars.effective_page(), 1);
        assert_eq!(vars.offset(), 0);

        vars.first = 0;
        assert_eq!(vars.effective_first(), 1);
        vars.first = 5000;
        assert_eq!(vars.effective_first(), MAX_PAGE_SIZE);
    }

    #[test]
    fn test_paginator_info_math() {
        let info = PaginatorInfo::new(25, 3, 10, 5);
        assert_eq!(info.last_page, 3);
        assert_eq!(info.first_item, Some(21));
        assert_eq!(info.last_item, Some(25));
        assert!(!info.has_more_pages);

        let info = PaginatorInfo::new(25, 1, 10, 10);
        assert!(info.has_more_pages);
        assert_eq!(info.first_item, Some(1));
        assert_eq!(info.last_item, Some(10));
        assert_eq!(info.item_range(), Some((1, 10)));
    }

    #[test]
    fn test_paginator_info_empty() {
        let info = PaginatorInfo::new(0, 1, 10, 0);
        assert_eq!(info.last_page, 1);
        assert_eq!(info.first_item, None);
        assert_eq!(info.last_item, None);
        assert_eq!(info.item_range(), None);
        assert!(!info.has_more_pages);

        // Past the end: no rows but the total is kept
        let info = PaginatorInfo::new(12, 9, 10, 0);
        assert_eq!(info.total, 12);
        assert_eq!(info.last_page, 2);
        assert!(!info.has_more_pages);
    }

    #[test]
    fn test_page_window() {
        let info = PaginatorInfo::new(95, 1, 10, 10);
        assert_eq!(info.page_window(5), vec![1, 2, 3, 4, 5]);

        let info = PaginatorInfo::new(95, 5, 10, 10);
        assert_eq!(info.page_window(5), vec![3, 4, 5, 6, 7]);

        let info = PaginatorInfo::new(95, 10, 10, 5);
        assert_eq!(info.page_window(5), vec![6, 7, 8, 9, 10]);

        // Fewer pages than the span
        let info = PaginatorInfo::new(15, 2, 10, 5);
        assert_eq!(info.page_window(5), vec![1, 2]);
        assert!(info.has_previous_page());

        let info = PaginatorInfo::new(0, 1, 10, 0);
        assert_eq!(info.page_window(5), vec![1]);
        assert!(!info.has_previous_page());

        assert_eq!(PaginatorInfo::default().page_window(5), vec![1]);
    }

    #[test]
    fn test_order_column_mapping() {
        assert_eq!(QueryManufacturersOrderByColumn::CreatedAt.sql_column(), "created_at");
        assert_eq!(QueryManufacturersOrderByColumn::Name.sql_column(), "name");
        assert_eq!(SortOrder::Asc.to_string(), "ASC");
        assert_eq!(SortOrder::default(), SortOrder::Desc);
    }
}
