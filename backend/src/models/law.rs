use serde::{Deserialize, Serialize};

use super::event::Meta;

/// Structural law metadata (`FL-XX`, `OCI-XX`, `CL-XX`).
///
/// Events reference laws by id through [`Event::laws`](super::Event::laws);
/// nothing enforces them yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Law {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub meta: Meta,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_for_optional_fields() {
        let law: Law = serde_json::from_str(r#"{"id": "FL-01", "name": "Exposure"}"#).unwrap();
        assert_eq!(law.id, "FL-01");
        assert_eq!(law.description, "");
        assert!(law.meta.is_empty());
    }
}
