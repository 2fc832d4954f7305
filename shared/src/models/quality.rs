//! Quality Model (cloth quality grades)

use super::lenient;
use serde::{Deserialize, Serialize};

/// Quality grade entity
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quality {
    #[serde(deserialize_with = "lenient::id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Create / rename payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityPayload {
    pub name: String,
}

impl QualityPayload {
    /// Trimmed name, or `None` when blank
    pub fn new(name: &str) -> Option<Self> {
        let name = name.trim();
        (!name.is_empty()).then(|| Self {
            name: name.to_string(),
        })
    }
}
