use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::protocol::RawIdeaRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IdeaId(pub Uuid);

impl IdeaId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::fmt::Display for IdeaId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// A generated content suggestion, ready for display.
///
/// Ideas only ever come from a successful backend response and are replaced
/// wholesale on every new request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Idea {
    pub id: IdeaId,
    pub title: String,
    pub description: String,
    pub category: String,
}

impl Idea {
    /// Maps one backend record to an idea with a freshly generated id.
    pub fn from_raw(raw: RawIdeaRecord) -> Self {
        Self {
            id: IdeaId::generate(),
            category: category_label(&raw.categoria, &raw.formato_sugerido),
            title: raw.titulo_gancho,
            description: raw.descripcion_ejecucion,
        }
    }
}

pub fn category_label(category: &str, format: &str) -> String {
    format!("{category} | {format}")
}

#[cfg(test)]
#[path = "tests/domain_tests.rs"]
mod tests;
