//! Project reference model.

use serde::{Deserialize, Serialize};

/// A project a shift can be logged against.
///
/// Projects are owned and managed by an external collaborator; the engine
/// only uses them to resolve `project_id` references into names for
/// per-project report totals. Existence of a referenced project is not
/// validated here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Store-assigned identifier.
    pub id: String,
    /// Human-readable project name.
    pub name: String,
    /// Short project code.
    #[serde(default)]
    pub code: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_deserializes_without_code() {
        let json = r#"{"id": "proj_001", "name": "Warehouse"}"#;
        let project: Project = serde_json::from_str(json).unwrap();
        assert_eq!(project.id, "proj_001");
        assert_eq!(project.name, "Warehouse");
        assert_eq!(project.code, "");
    }
}
