use serde::{Deserialize, Serialize};

/// One row of the designer's "recent designs" picker.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DesignSummary {
    pub id: i64,
    pub name: String,
    pub updated_at: String,
}
