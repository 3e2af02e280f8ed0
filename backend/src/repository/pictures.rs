use chrono::Utc;
use common::model::hotel::Hotel;
use common::model::picture::{order_pictures, Picture};
use rusqlite::{params, params_from_iter, Connection, OptionalExtension, Row};
use std::collections::HashMap;

const COLUMNS: &str = "id, hotel_id, file_path, file_size, position, created_at, updated_at";

/// A picture row about to be inserted.
#[derive(Debug, Clone)]
pub struct NewPicture {
    pub hotel_id: i64,
    pub file_path: String,
    pub file_size: i64,
    pub index: i64,
}

fn from_row(row: &Row) -> rusqlite::Result<Picture> {
    Ok(Picture {
        id: row.get(0)?,
        hotel_id: row.get(1)?,
        file_path: row.get(2)?,
        file_size: row.get(3)?,
        index: row.get(4)?,
        created_at: row.get(5)?,
        updated_at: row.get(6)?,
    })
}

pub fn insert(conn: &Connection, picture: &NewPicture) -> rusqlite::Result<Picture> {
    conn.execute(
        "INSERT INTO pictures (hotel_id, file_path, file_size, position, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?5)",
        params![
            picture.hotel_id,
            picture.file_path,
            picture.file_size,
            picture.index,
            Utc::now(),
        ],
    )?;
    let id = conn.last_insert_rowid();
    find(conn, id)?.ok_or(rusqlite::Error::QueryReturnedNoRows)
}

pub fn find(conn: &Connection, id: i64) -> rusqlite::Result<Option<Picture>> {
    conn.query_row(
        &format!("SELECT {} FROM pictures WHERE id = ?1", COLUMNS),
        params![id],
        from_row,
    )
    .optional()
}

/// Moves a picture to a new slideshow position. `None` if the picture is unknown.
pub fn update_index(conn: &Connection, id: i64, index: i64) -> rusqlite::Result<Option<Picture>> {
    let changed = conn.execute(
        "UPDATE pictures SET position = ?1, updated_at = ?2 WHERE id = ?3",
        params![index, Utc::now(), id],
    )?;
    if changed == 0 {
        return Ok(None);
    }
    find(conn, id)
}

pub fn delete(conn: &Connection, id: i64) -> rusqlite::Result<bool> {
    Ok(conn.execute("DELETE FROM pictures WHERE id = ?1", params![id])? > 0)
}

/// Pictures of one hotel in slideshow order.
pub fn for_hotel(conn: &Connection, hotel_id: i64) -> rusqlite::Result<Vec<Picture>> {
    let mut by_hotel = for_hotels(conn, &[hotel_id])?;
    Ok(by_hotel.remove(&hotel_id).unwrap_or_default())
}

/// Pictures of several hotels, grouped by hotel id, each group in slideshow order.
pub fn for_hotels(conn: &Connection, hotel_ids: &[i64]) -> rusqlite::Result<HashMap<i64, Vec<Picture>>> {
    let mut grouped: HashMap<i64, Vec<Picture>> = HashMap::new();
    if hotel_ids.is_empty() {
        return Ok(grouped);
    }

    let placeholders = vec!["?"; hotel_ids.len()].join(", ");
    let mut stmt = conn.prepare(&format!(
        "SELECT {} FROM pictures WHERE hotel_id IN ({})",
        COLUMNS, placeholders
    ))?;
    let rows = stmt.query_map(params_from_iter(hotel_ids.iter()), from_row)?;
    for picture in rows {
        let picture = picture?;
        grouped.entry(picture.hotel_id).or_default().push(picture);
    }
    for pictures in grouped.values_mut() {
        order_pictures(pictures);
    }
    Ok(grouped)
}

/// Loads and attaches the picture collection of every hotel in `hotels`.
pub fn attach(conn: &Connection, hotels: &mut [Hotel]) -> rusqlite::Result<()> {
    let ids: Vec<i64> = hotels.iter().map(|h| h.id).collect();
    let mut grouped = for_hotels(conn, &ids)?;
    for hotel in hotels.iter_mut() {
        hotel.pictures = Some(grouped.remove(&hotel.id).unwrap_or_default());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::hotels;
    use crate::test_support::{sample_fields, TestContext};

    fn new_picture(hotel_id: i64, index: i64) -> NewPicture {
        NewPicture {
            hotel_id,
            file_path: format!("http://localhost/storage/pictures/{}/{}.png", hotel_id, index),
            file_size: 128,
            index,
        }
    }

    #[test]
    fn pictures_come_back_in_index_order() {
        let ctx = TestContext::new();
        let conn = ctx.state.db.connect().unwrap();
        let hotel = hotels::insert(&conn, &sample_fields("Hotel Este")).unwrap();

        let third = insert(&conn, &new_picture(hotel.id, 2)).unwrap();
        let first = insert(&conn, &new_picture(hotel.id, 0)).unwrap();
        let second = insert(&conn, &new_picture(hotel.id, 1)).unwrap();

        let ids: Vec<i64> = for_hotel(&conn, hotel.id).unwrap().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![first.id, second.id, third.id]);
    }

    #[test]
    fn insert_requires_an_existing_hotel() {
        let ctx = TestContext::new();
        let conn = ctx.state.db.connect().unwrap();
        assert!(insert(&conn, &new_picture(999, 0)).is_err());
    }

    #[test]
    fn index_updates_and_deletes() {
        let ctx = TestContext::new();
        let conn = ctx.state.db.connect().unwrap();
        let hotel = hotels::insert(&conn, &sample_fields("Hotel Oeste")).unwrap();
        let picture = insert(&conn, &new_picture(hotel.id, 0)).unwrap();

        let moved = update_index(&conn, picture.id, 5).unwrap().unwrap();
        assert_eq!(moved.index, 5);
        assert!(update_index(&conn, 4242, 1).unwrap().is_none());

        assert!(delete(&conn, picture.id).unwrap());
        assert!(!delete(&conn, picture.id).unwrap());
        assert!(find(&conn, picture.id).unwrap().is_none());
    }

    #[test]
    fn attach_fills_every_hotel_even_without_pictures() {
        let ctx = TestContext::new();
        let conn = ctx.state.db.connect().unwrap();
        let with = hotels::insert(&conn, &sample_fields("With")).unwrap();
        let without = hotels::insert(&conn, &sample_fields("Without")).unwrap();
        insert(&conn, &new_picture(with.id, 0)).unwrap();

        let mut list = vec![with, without];
        attach(&conn, &mut list).unwrap();
        assert_eq!(list[0].pictures.as_ref().unwrap().len(), 1);
        assert_eq!(list[1].pictures.as_ref().unwrap().len(), 0);
    }
}
