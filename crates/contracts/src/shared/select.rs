use serde::{Deserialize, Serialize};

/// Minimal `{id, name}` projection used wherever a selectable reference
/// is needed without pulling the full aggregate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub id: i64,
    pub name: Option<String>,
}

impl SelectOption {
    pub fn label(&self) -> String {
        self.name.clone().unwrap_or_else(|| "(unnamed)".to_string())
    }
}

/// Possibly-partial snapshot of all options for a category, as returned
/// by the `/all?limit=` endpoints. `has_more` means the snapshot was
/// truncated at the limit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionsPage {
    pub data: Vec<SelectOption>,
    pub total: u32,
    #[serde(rename = "hasMore")]
    pub has_more: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_page_wire_shape() {
        let page: OptionsPage = serde_json::from_str(
            r#"{"data":[{"id":1,"name":"Garage"},{"id":2,"name":null}],"total":250,"hasMore":true}"#,
        )
        .unwrap();
        assert!(page.has_more);
        assert_eq!(page.data[1].label(), "(unnamed)");
    }
}
