use crate::auth::AdminActor;
use crate::db::Db;
use crate::error::ApiError;
use crate::services::settings::get::get_or_init;
use actix_web::{web, HttpResponse};
use common::model::settings::DashboardSettings;
use common::requests::SettingsUpdate;
use rusqlite::{params, Connection};

pub(crate) async fn process(
    db: web::Data<Db>,
    _actor: AdminActor,
    payload: web::Json<SettingsUpdate>,
) -> Result<HttpResponse, ApiError> {
    let conn = db.open()?;
    let settings = replace_settings(&conn, payload.into_inner().into())?;
    Ok(HttpResponse::Ok().json(settings))
}

/// Replace the singleton's flags wholesale. The submitted state is the new
/// state; there is no merge with the previous row.
pub fn replace_settings(
    conn: &Connection,
    settings: DashboardSettings,
) -> Result<DashboardSettings, ApiError> {
    // Make sure the row exists before updating it.
    get_or_init(conn)?;
    conn.execute(
        "UPDATE dashboard_settings SET
            show_age = ?1, show_department = ?2, show_photo = ?3, show_phone = ?4,
            show_blood_group = ?5, show_roll_no = ?6, show_date_of_birth = ?7,
            show_emergency_mobile = ?8, show_valid_upto = ?9, show_signature = ?10,
            show_address = ?11, show_role = ?12, show_residence_status = ?13
         WHERE id = 1",
        params![
            settings.show_age,
            settings.show_department,
            settings.show_photo,
            settings.show_phone,
            settings.show_blood_group,
            settings.show_roll_no,
            settings.show_date_of_birth,
            settings.show_emergency_mobile,
            settings.show_valid_upto,
            settings.show_signature,
            settings.show_address,
            settings.show_role,
            settings.show_residence_status,
        ],
    )?;
    Ok(settings)
}
