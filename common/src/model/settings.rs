use serde::{Deserialize, Serialize};

/// Singleton dashboard visibility settings.
///
/// Exactly one logical record exists; it is created on first access with
/// every flag enabled. Each flag controls whether the corresponding profile
/// field is shown on dashboards and generated cards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardSettings {
    pub show_age: bool,
    pub show_department: bool,
    pub show_photo: bool,
    pub show_phone: bool,
    pub show_blood_group: bool,
    pub show_roll_no: bool,
    pub show_date_of_birth: bool,
    pub show_emergency_mobile: bool,
    pub show_valid_upto: bool,
    pub show_signature: bool,
    pub show_address: bool,
    pub show_role: bool,
    pub show_residence_status: bool,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            show_age: true,
            show_department: true,
            show_photo: true,
            show_phone: true,
            show_blood_group: true,
            show_roll_no: true,
            show_date_of_birth: true,
            show_emergency_mobile: true,
            show_valid_upto: true,
            show_signature: true,
            show_address: true,
            show_role: true,
            show_residence_status: true,
        }
    }
}
