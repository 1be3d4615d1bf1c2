use serde::{Deserialize, Serialize};

/// Filter draft for the items list. Held separately from the applied
/// filters; only applying a draft triggers a refetch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemFilters {
    pub name: Option<String>,
    pub rooms: Option<Vec<i64>>,
    pub containers: Option<Vec<i64>>,
}

impl ItemFilters {
    pub fn is_empty(&self) -> bool {
        self.name.as_deref().is_none_or(|n| n.is_empty())
            && self.rooms.as_deref().is_none_or(|r| r.is_empty())
            && self.containers.as_deref().is_none_or(|c| c.is_empty())
    }
}

/// Filter draft for the containers list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContainerFilters {
    pub name: Option<String>,
    pub rooms: Option<Vec<i64>>,
}

impl ContainerFilters {
    pub fn is_empty(&self) -> bool {
        self.name.as_deref().is_none_or(|n| n.is_empty())
            && self.rooms.as_deref().is_none_or(|r| r.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_variants_are_empty() {
        assert!(ItemFilters::default().is_empty());
        assert!(ItemFilters {
            name: Some(String::new()),
            rooms: Some(Vec::new()),
            containers: None,
        }
        .is_empty());
        assert!(!ItemFilters {
            name: None,
            rooms: Some(vec![3]),
            containers: None,
        }
        .is_empty());
    }
}
