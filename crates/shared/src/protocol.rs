use serde::{Deserialize, Serialize};

use crate::domain::Idea;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateIdeasRequest {
    pub business_type: String,
}

/// One idea exactly as the generation backend emits it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawIdeaRecord {
    pub categoria: String,
    pub formato_sugerido: String,
    pub titulo_gancho: String,
    pub descripcion_ejecucion: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BackendApiResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ideas: Option<Vec<RawIdeaRecord>>,
}

impl BackendApiResponse {
    pub fn ok(ideas: Vec<RawIdeaRecord>) -> Self {
        Self {
            success: true,
            ideas: Some(ideas),
        }
    }

    /// Returns the mapped ideas when the body carries `success: true` and an
    /// `ideas` sequence, `None` otherwise.
    pub fn into_ideas(self) -> Option<Vec<Idea>> {
        if !self.success {
            return None;
        }
        self.ideas
            .map(|records| records.into_iter().map(Idea::from_raw).collect())
    }
}

#[cfg(test)]
#[path = "tests/protocol_tests.rs"]
mod tests;
