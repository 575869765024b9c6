use serde::{Deserialize, Serialize};

/// Client-safe projection of an identity record.
///
/// Identity accounts are owned by the authentication service; this backend
/// only ever reads them. The projection deliberately omits credentials and
/// permission flags — `role` is the only privilege-adjacent field exposed
/// to the generation UI.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UserProjection {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: String,
    pub age: Option<i64>,
    pub department: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub blood_group: Option<String>,
    pub roll_no: Option<String>,
    /// Opaque path into the media store; resolved by the blob layer.
    pub photo: Option<String>,
    pub residence_status: Option<String>,
    pub date_of_birth: Option<String>,
    pub emergency_mobile: Option<String>,
    pub valid_upto: Option<String>,
    /// Opaque path into the media store, like `photo`.
    pub signature: Option<String>,
}
