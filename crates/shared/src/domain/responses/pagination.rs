use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: u32,
    pub size: u32,
    pub total_items: i64,
    pub total_pages: i64,
}

impl Pagination {
    pub fn new(page: u32, size: u32, total_items: i64) -> Self {
        let size_i64 = i64::from(size.max(1));
        let total_pages = if total_items <= 0 {
            0
        } else {
            (total_items + size_i64 - 1) / size_i64
        };

        Self {
            page,
            size,
            total_items,
            total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_total_pages_up() {
        assert_eq!(Pagination::new(0, 10, 21).total_pages, 3);
        assert_eq!(Pagination::new(0, 10, 20).total_pages, 2);
        assert_eq!(Pagination::new(0, 10, 0).total_pages, 0);
    }
}
