use chrono::{DateTime, Utc};
use common::model::hotel::{Hotel, HotelFields, HotelStatus};
use rusqlite::types::Type;
use rusqlite::{params, Connection, OptionalExtension, Row};

const COLUMNS: &str = "id, name, address, address2, zipcode, city, country, longitude, latitude, \
     description, max_capacity, price_per_night, status, created_at, updated_at, deleted_at";

/// Which rows a lookup may return.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    ActiveOnly,
    IncludeDeleted,
}

fn from_row(row: &Row) -> rusqlite::Result<Hotel> {
    let status: String = row.get(12)?;
    let status = status
        .parse::<HotelStatus>()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(12, Type::Text, e.into()))?;

    Ok(Hotel {
        id: row.get(0)?,
        fields: HotelFields {
            name: row.get(1)?,
            address: row.get(2)?,
            address2: row.get(3)?,
            zipcode: row.get(4)?,
            city: row.get(5)?,
            country: row.get(6)?,
            longitude: row.get(7)?,
            latitude: row.get(8)?,
            description: row.get(9)?,
            max_capacity: row.get(10)?,
            price_per_night: row.get(11)?,
        },
        status,
        created_at: row.get(13)?,
        updated_at: row.get(14)?,
        deleted_at: row.get(15)?,
        pictures: None,
    })
}

pub fn insert(conn: &Connection, fields: &HotelFields) -> rusqlite::Result<Hotel> {
    let now = Utc::now();
    conn.execute(
        "INSERT INTO hotels (name, address, address2, zipcode, city, country, longitude, latitude,
                             description, max_capacity, price_per_night, status, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?13)",
        params![
            fields.name,
            fields.address,
            fields.address2,
            fields.zipcode,
            fields.city,
            fields.country,
            fields.longitude,
            fields.latitude,
            fields.description,
            fields.max_capacity,
            fields.price_per_night,
            HotelStatus::Active.as_str(),
            now,
        ],
    )?;
    let id = conn.last_insert_rowid();
    find(conn, id, Visibility::ActiveOnly)?.ok_or(rusqlite::Error::QueryReturnedNoRows)
}

pub fn find(conn: &Connection, id: i64, visibility: Visibility) -> rusqlite::Result<Option<Hotel>> {
    let sql = match visibility {
        Visibility::ActiveOnly => format!("SELECT {} FROM hotels WHERE id = ?1 AND status = 'active'", COLUMNS),
        Visibility::IncludeDeleted => format!("SELECT {} FROM hotels WHERE id = ?1", COLUMNS),
    };
    conn.query_row(&sql, params![id], from_row).optional()
}

pub fn exists(conn: &Connection, id: i64) -> rusqlite::Result<bool> {
    conn.query_row(
        "SELECT EXISTS (SELECT 1 FROM hotels WHERE id = ?1 AND status = 'active')",
        params![id],
        |row| row.get(0),
    )
}

/// Overwrites the editable fields of an active hotel. `None` when the hotel
/// is missing or deleted.
pub fn update(conn: &Connection, id: i64, fields: &HotelFields) -> rusqlite::Result<Option<Hotel>> {
    let changed = conn.execute(
        "UPDATE hotels
         SET name = ?1, address = ?2, address2 = ?3, zipcode = ?4, city = ?5, country = ?6,
             longitude = ?7, latitude = ?8, description = ?9, max_capacity = ?10,
             price_per_night = ?11, updated_at = ?12
         WHERE id = ?13 AND status = 'active'",
        params![
            fields.name,
            fields.address,
            fields.address2,
            fields.zipcode,
            fields.city,
            fields.country,
            fields.longitude,
            fields.latitude,
            fields.description,
            fields.max_capacity,
            fields.price_per_night,
            Utc::now(),
            id,
        ],
    )?;
    if changed == 0 {
        return Ok(None);
    }
    find(conn, id, Visibility::ActiveOnly)
}

/// Marks an active hotel as deleted. Returns `false` if there was nothing to delete.
pub fn soft_delete(conn: &Connection, id: i64) -> rusqlite::Result<bool> {
    let now: DateTime<Utc> = Utc::now();
    let changed = conn.execute(
        "UPDATE hotels SET status = ?1, deleted_at = ?2, updated_at = ?2
         WHERE id = ?3 AND status = 'active'",
        params![HotelStatus::Deleted.as_str(), now, id],
    )?;
    Ok(changed > 0)
}

/// Physically removes the row. Only used to undo a creation that never
/// became visible; the hotel's pictures must be removed first.
pub fn hard_delete(conn: &Connection, id: i64) -> rusqlite::Result<bool> {
    Ok(conn.execute("DELETE FROM hotels WHERE id = ?1", params![id])? > 0)
}

pub fn count_active(conn: &Connection) -> rusqlite::Result<u64> {
    let count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM hotels WHERE status = 'active'",
        [],
        |row| row.get(0),
    )?;
    Ok(count as u64)
}

/// One page of active hotels ordered by id. `page` is 1-based.
pub fn page(conn: &Connection, page: u32, per_page: u32) -> rusqlite::Result<Vec<Hotel>> {
    let offset = (page.max(1) as i64 - 1) * per_page as i64;
    let mut stmt = conn.prepare(&format!(
        "SELECT {} FROM hotels WHERE status = 'active' ORDER BY id LIMIT ?1 OFFSET ?2",
        COLUMNS
    ))?;
    let hotels = stmt
        .query_map(params![per_page, offset], from_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(hotels)
}

pub fn active_ids(conn: &Connection) -> rusqlite::Result<Vec<i64>> {
    let mut stmt = conn.prepare("SELECT id FROM hotels WHERE status = 'active' ORDER BY id")?;
    let ids = stmt
        .query_map([], |row| row.get(0))?
        .collect::<rusqlite::Result<Vec<i64>>>()?;
    Ok(ids)
}
