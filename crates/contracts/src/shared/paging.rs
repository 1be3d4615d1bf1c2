use serde::{Deserialize, Serialize};

/// Paginated page envelope returned by the list endpoints.
///
/// The backend includes its own `total_pages`; clients recompute it from
/// `total` and `page_size` (see [`Paginated::total_pages`]) so pager
/// arithmetic never depends on a field a proxy might strip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub total: u32,
    pub page: u32,
    pub page_size: u32,
    #[serde(default)]
    pub total_pages: u32,
}

impl<T> Paginated<T> {
    /// `ceil(total / page_size)`; zero when the set is empty.
    pub fn total_pages(&self) -> u32 {
        total_pages(self.total, self.page_size)
    }
}

pub fn total_pages(total: u32, page_size: u32) -> u32 {
    if page_size == 0 {
        return 0;
    }
    total.div_ceil(page_size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(0, 25), 0);
        assert_eq!(total_pages(1, 25), 1);
        assert_eq!(total_pages(25, 25), 1);
        assert_eq!(total_pages(26, 25), 2);
        assert_eq!(total_pages(101, 50), 3);
    }

    #[test]
    fn total_pages_survives_zero_page_size() {
        assert_eq!(total_pages(10, 0), 0);
    }

    #[test]
    fn envelope_deserializes_without_total_pages() {
        let page: Paginated<i64> =
            serde_json::from_str(r#"{"items":[1,2],"total":40,"page":1,"page_size":25}"#).unwrap();
        assert_eq!(page.total_pages(), 2);
        assert!(page.total >= page.items.len() as u32);
    }
}
