use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Full registry template as served to the generation page.
///
/// `json` is the stored canvas document, parsed back into a JSON value.
/// The backend never inspects its contents.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TemplateDetail {
    pub id: i64,
    pub name: String,
    pub json: Value,
    pub created_at: String,
}

/// Flat registry listing entry (the `/api/templates/list` shape, which
/// predates `TemplateDetail` and keeps its own field names).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TemplateListEntry {
    pub id: i64,
    pub name: String,
    pub side: Option<String>,
    pub data: Value,
}
