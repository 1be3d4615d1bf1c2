//! Structural comparison of filter drafts vs. applied filters.
//!
//! Drives Apply/Clear button enablement: Apply stays disabled while the
//! draft equals what was last applied. Id lists compare order-sensitively;
//! selection order is stable because the multi-selects emit ids in toggle
//! order.

use contracts::shared::filters::{ContainerFilters, ItemFilters};

fn names_equal(a: Option<&str>, b: Option<&str>) -> bool {
    a.unwrap_or("") == b.unwrap_or("")
}

fn ids_equal(a: Option<&[i64]>, b: Option<&[i64]>) -> bool {
    a.unwrap_or(&[]) == b.unwrap_or(&[])
}

pub fn item_filters_equal(a: Option<&ItemFilters>, b: Option<&ItemFilters>) -> bool {
    names_equal(
        a.and_then(|f| f.name.as_deref()),
        b.and_then(|f| f.name.as_deref()),
    ) && ids_equal(
        a.and_then(|f| f.rooms.as_deref()),
        b.and_then(|f| f.rooms.as_deref()),
    ) && ids_equal(
        a.and_then(|f| f.containers.as_deref()),
        b.and_then(|f| f.containers.as_deref()),
    )
}

pub fn container_filters_equal(a: Option<&ContainerFilters>, b: Option<&ContainerFilters>) -> bool {
    names_equal(
        a.and_then(|f| f.name.as_deref()),
        b.and_then(|f| f.name.as_deref()),
    ) && ids_equal(
        a.and_then(|f| f.rooms.as_deref()),
        b.and_then(|f| f.rooms.as_deref()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filters(name: Option<&str>, rooms: &[i64]) -> ItemFilters {
        ItemFilters {
            name: name.map(str::to_string),
            rooms: Some(rooms.to_vec()),
            containers: None,
        }
    }

    #[test]
    fn equal_filters_compare_equal() {
        let a = filters(Some("a"), &[1, 2]);
        let b = filters(Some("a"), &[1, 2]);
        assert!(item_filters_equal(Some(&a), Some(&b)));
    }

    #[test]
    fn id_order_matters() {
        let a = filters(None, &[1, 2]);
        let b = filters(None, &[2, 1]);
        assert!(!item_filters_equal(Some(&a), Some(&b)));
    }

    #[test]
    fn absent_and_empty_are_equal() {
        let empty = ItemFilters::default();
        assert!(item_filters_equal(None, Some(&empty)));
        assert!(item_filters_equal(None, None));

        let named = filters(Some("x"), &[]);
        assert!(!item_filters_equal(None, Some(&named)));
    }

    #[test]
    fn container_variant_ignores_containers_field() {
        let a = ContainerFilters {
            name: Some("bin".into()),
            rooms: Some(vec![3]),
        };
        let b = a.clone();
        assert!(container_filters_equal(Some(&a), Some(&b)));
        assert!(!container_filters_equal(Some(&a), None));
    }
}
