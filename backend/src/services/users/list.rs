use crate::db::Db;
use crate::error::ApiError;
use actix_web::{web, HttpResponse};
use common::model::user::UserProjection;
use rusqlite::Connection;

pub(crate) async fn process(db: web::Data<Db>) -> Result<HttpResponse, ApiError> {
    let conn = db.open()?;
    let users = all_users(&conn)?;
    let count = users.len();
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "users": users,
        "status": "ok",
        "count": count,
    })))
}

/// Every identity record as a client-safe projection, ordered by username.
///
/// Credentials and staff/superuser flags are not selected; the role string
/// is the only privilege-related field that leaves the server.
pub fn all_users(conn: &Connection) -> Result<Vec<UserProjection>, ApiError> {
    let mut stmt = conn.prepare(
        "SELECT id, username, email, first_name, last_name, role, age, department, address,
                phone, blood_group, roll_no, photo, residence_status, date_of_birth,
                emergency_mobile, valid_upto, signature
         FROM users ORDER BY username",
    )?;
    let rows = stmt.query_map([], |row| {
        Ok(UserProjection {
            id: row.get(0)?,
            username: row.get(1)?,
            email: row.get(2)?,
            first_name: row.get(3)?,
            last_name: row.get(4)?,
            role: row.get(5)?,
            age: row.get(6)?,
            department: row.get(7)?,
            address: row.get(8)?,
            phone: row.get(9)?,
            blood_group: row.get(10)?,
            roll_no: row.get(11)?,
            photo: row.get(12)?,
            residence_status: row.get(13)?,
            date_of_birth: row.get(14)?,
            emergency_mobile: row.get(15)?,
            valid_upto: row.get(16)?,
            signature: row.get(17)?,
        })
    })?;
    let users = rows.collect::<Result<Vec<_>, _>>()?;
    Ok(users)
}
