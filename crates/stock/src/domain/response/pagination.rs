use crate::domain::requests::stock::QueryPagination;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PaginationResult {
    pub offset: i64,
    pub limit: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_offset: Option<i64>,
}

impl PaginationResult {
    /// Echoes the window a page was read with. `next_offset` is only set when
    /// the page had rows.
    pub fn new(pagination: QueryPagination, page_len: usize) -> Self {
        let next_offset =
            (page_len > 0).then(|| pagination.offset.saturating_add(pagination.limit));

        Self {
            offset: pagination.offset,
            limit: pagination.limit,
            next_offset,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_offset_only_for_non_empty_pages() {
        let window = QueryPagination::new(4, 2);

        assert_eq!(PaginationResult::new(window, 1).next_offset, Some(6));
        assert_eq!(PaginationResult::new(window, 0).next_offset, None);
    }

    #[test]
    fn empty_page_omits_next_offset_field() {
        let json = serde_json::to_value(PaginationResult::new(QueryPagination::new(5, 2), 0))
            .unwrap();
        assert_eq!(json, serde_json::json!({ "offset": 5, "limit": 2 }));
    }
}
