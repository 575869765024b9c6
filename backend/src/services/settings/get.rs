use crate::auth::AdminActor;
use crate::db::Db;
use crate::error::ApiError;
use actix_web::{web, HttpResponse};
use common::model::settings::DashboardSettings;
use rusqlite::{params, Connection, OptionalExtension};

pub(crate) async fn process(db: web::Data<Db>, _actor: AdminActor) -> Result<HttpResponse, ApiError> {
    let conn = db.open()?;
    let settings = get_or_init(&conn)?;
    Ok(HttpResponse::Ok().json(settings))
}

/// Fetch the singleton settings row, creating it with all flags enabled if
/// it does not exist yet. The row is pinned to `id = 1`; a second concurrent
/// initialiser loses the insert race harmlessly (`OR IGNORE`) and reads the
/// winner's row.
pub fn get_or_init(conn: &Connection) -> Result<DashboardSettings, ApiError> {
    if let Some(settings) = read_settings(conn)? {
        return Ok(settings);
    }
    conn.execute(
        "INSERT OR IGNORE INTO dashboard_settings (id) VALUES (1)",
        [],
    )?;
    read_settings(conn)?.ok_or_else(|| ApiError::internal("settings row missing after init"))
}

pub(super) fn read_settings(conn: &Connection) -> Result<Option<DashboardSettings>, ApiError> {
    let settings = conn
        .query_row(
            "SELECT show_age, show_department, show_photo, show_phone, show_blood_group,
                    show_roll_no, show_date_of_birth, show_emergency_mobile, show_valid_upto,
                    show_signature, show_address, show_role, show_residence_status
             FROM dashboard_settings WHERE id = 1",
            params![],
            |row| {
                Ok(DashboardSettings {
                    show_age: row.get(0)?,
                    show_department: row.get(1)?,
                    show_photo: row.get(2)?,
                    show_phone: row.get(3)?,
                    show_blood_group: row.get(4)?,
                    show_roll_no: row.get(5)?,
                    show_date_of_birth: row.get(6)?,
                    show_emergency_mobile: row.get(7)?,
                    show_valid_upto: row.get(8)?,
                    show_signature: row.get(9)?,
                    show_address: row.get(10)?,
                    show_role: row.get(11)?,
                    show_residence_status: row.get(12)?,
                })
            },
        )
        .optional()?;
    Ok(settings)
}
