use serde::Deserialize;
use serde_json::Value;

/// Request payload for the designer's save endpoint.
///
/// The designer front-end has historically sent the document under either
/// `json` or `data`; both are accepted, `json` winning when both are present.
/// Supplying `id` switches the call from create to update-in-place.
#[derive(Debug, Deserialize)]
pub struct SaveDesignRequest {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub json: Option<Value>,
    pub data: Option<Value>,
}

/// Request payload for the batch-export acknowledgement endpoint.
///
/// Neither field is checked against the stores; the endpoint only reports
/// how many entries it was handed.
#[derive(Debug, Deserialize)]
pub struct BatchExportRequest {
    pub design_id: Option<Value>,
    #[serde(default)]
    pub users: Vec<Value>,
}

/// Request payload for registry template creation.
#[derive(Debug, Deserialize)]
pub struct SaveTemplateRequest {
    pub name: Option<String>,
    pub template: Value,
    pub side: Option<String>,
}

/// Dashboard settings update, with checkbox semantics: a flag missing from
/// the submitted payload means "off", not "unchanged".
#[derive(Debug, Default, Deserialize)]
pub struct SettingsUpdate {
    #[serde(default)]
    pub show_age: bool,
    #[serde(default)]
    pub show_department: bool,
    #[serde(default)]
    pub show_photo: bool,
    #[serde(default)]
    pub show_phone: bool,
    #[serde(default)]
    pub show_blood_group: bool,
    #[serde(default)]
    pub show_roll_no: bool,
    #[serde(default)]
    pub show_date_of_birth: bool,
    #[serde(default)]
    pub show_emergency_mobile: bool,
    #[serde(default)]
    pub show_valid_upto: bool,
    #[serde(default)]
    pub show_signature: bool,
    #[serde(default)]
    pub show_address: bool,
    #[serde(default)]
    pub show_role: bool,
    #[serde(default)]
    pub show_residence_status: bool,
}

impl From<SettingsUpdate> for crate::model::settings::DashboardSettings {
    fn from(update: SettingsUpdate) -> Self {
        Self {
            show_age: update.show_age,
            show_department: update.show_department,
            show_photo: update.show_photo,
            show_phone: update.show_phone,
            show_blood_group: update.show_blood_group,
            show_roll_no: update.show_roll_no,
            show_date_of_birth: update.show_date_of_birth,
            show_emergency_mobile: update.show_emergency_mobile,
            show_valid_upto: update.show_valid_upto,
            show_signature: update.show_signature,
            show_address: update.show_address,
            show_role: update.show_role,
            show_residence_status: update.show_residence_status,
        }
    }
}
