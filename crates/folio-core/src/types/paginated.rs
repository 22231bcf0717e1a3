//! Paginated collection payload

use serde::{Deserialize, Serialize};

use crate::pagination::{PageTemplate, PaginationDescriptor};

/// Shape every list endpoint returns
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub current_page: u32,
    pub last_page: u32,
    pub per_page: u32,
    pub total: u64,
}

impl<T> Paginated<T> {
    /// A single page holding every item
    pub fn single(data: Vec<T>) -> Self {
        let total = data.len() as u64;
        Self {
            per_page: data.len().max(1) as u32,
            data,
            current_page: 1,
            last_page: 1,
            total,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Pagination descriptor for rendering links to sibling pages
    pub fn descriptor(&self, template: PageTemplate) -> PaginationDescriptor {
        PaginationDescriptor {
            current_page: self.current_page.max(1),
            last_page: self.last_page.max(1),
            per_page: self.per_page,
            total: self.total,
            template,
        }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Paginated<U> {
        Paginated {
            data: self.data.into_iter().map(f).collect(),
            current_page: self.current_page,
            last_page: self.last_page,
            per_page: self.per_page,
            total: self.total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_backend_payload() {
        let json = r#"{
            "data": [{"id": 1}, {"id": 2}],
            "current_page": 2,
            "last_page": 4,
            "per_page": 2,
            "total": 7
        }"#;
        let page: Paginated<serde_json::Value> = serde_json::from_str(json).unwrap();
        assert_eq!(page.data.len(), 2);
        assert_eq!(page.current_page, 2);
        assert_eq!(page.total, 7);

        let desc = page.descriptor(PageTemplate::new("/admin/posts"));
        assert_eq!(desc.last_page, 4);
        assert_eq!(desc.per_page, 2);
    }

    #[test]
    fn test_single_page() {
        let page = Paginated::single(vec!["a", "b", "c"]);
        assert_eq!(page.last_page, 1);
        assert_eq!(page.total, 3);
        assert_eq!(page.per_page, 3);

        let empty: Paginated<u8> = Paginated::single(vec![]);
        assert!(empty.is_empty());
        assert_eq!(empty.per_page, 1);
    }
}
