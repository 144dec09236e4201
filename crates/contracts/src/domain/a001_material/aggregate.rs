use serde::{Deserialize, Deserializer, Serialize};

// ============================================================================
// ID Type
// ============================================================================

/// Идентификатор материала, назначается сервером
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MaterialId(pub i64);

impl MaterialId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for MaterialId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// Материал: именованная запись, на которую ссылаются сплавы (alloys)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Material {
    pub id: MaterialId,
    pub name: String,
    pub is_active: bool,

    /// Вычисляется сервером; отсутствующее или `null` значение читается как 0
    #[serde(default, deserialize_with = "null_as_zero")]
    pub alloys_count: u32,
}

impl Material {
    /// Имя непустое после trim
    pub fn has_valid_name(&self) -> bool {
        !self.name.trim().is_empty()
    }
}

fn null_as_zero<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<u32>::deserialize(deserializer).map(Option::unwrap_or_default)
}

// ============================================================================
// DTOs
// ============================================================================

/// Черновик нового материала (тело запроса на создание)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaterialDraft {
    pub name: String,
    pub is_active: bool,
}

impl Default for MaterialDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            is_active: true,
        }
    }
}

impl MaterialDraft {
    pub fn has_valid_name(&self) -> bool {
        !self.name.trim().is_empty()
    }
}

/// GET /api/materials
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaterialListResponse {
    pub materials: Vec<Material>,
}

/// POST /api/materials, PUT /api/materials/{id}
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaterialResponse {
    pub material: Material,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_alloys_count_defaults_to_zero() {
        let m: Material =
            serde_json::from_str(r#"{"id": 7, "name": "Steel", "is_active": true}"#).unwrap();
        assert_eq!(m.id, MaterialId::new(7));
        assert_eq!(m.alloys_count, 0);

        let m: Material = serde_json::from_str(
            r#"{"id": 7, "name": "Steel", "is_active": true, "alloys_count": null}"#,
        )
        .unwrap();
        assert_eq!(m.alloys_count, 0);
    }

    #[test]
    fn test_list_response_keeps_server_order() {
        let body = r#"{"materials": [
            {"id": 3, "name": "Steel", "is_active": true, "alloys_count": 4},
            {"id": 1, "name": "Copper", "is_active": false, "alloys_count": 0}
        ]}"#;
        let resp: MaterialListResponse = serde_json::from_str(body).unwrap();
        let ids: Vec<i64> = resp.materials.iter().map(|m| m.id.value()).collect();
        assert_eq!(ids, vec![3, 1]);
        assert_eq!(resp.materials[0].alloys_count, 4);
    }

    #[test]
    fn test_draft_serializes_without_id() {
        let draft = MaterialDraft {
            name: "Bronze".to_string(),
            is_active: false,
        };
        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(json, serde_json::json!({"name": "Bronze", "is_active": false}));
    }

    #[test]
    fn test_draft_default_is_active() {
        let draft = MaterialDraft::default();
        assert_eq!(draft.name, "");
        assert!(draft.is_active);
        assert!(!draft.has_valid_name());
    }

    #[test]
    fn test_whitespace_name_is_invalid() {
        let m = Material {
            id: MaterialId::new(1),
            name: "   ".to_string(),
            is_active: true,
            alloys_count: 0,
        };
        assert!(!m.has_valid_name());
    }
}
