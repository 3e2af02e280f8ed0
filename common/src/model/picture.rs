use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored hotel picture.
///
/// `file_path` is the public URL the binary is served from. `index` is the
/// slideshow position inside the owning hotel; it is advisory only, so two
/// pictures may share an index and gaps are allowed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Picture {
    pub id: i64,
    pub hotel_id: i64,
    pub file_path: String,
    pub file_size: i64,
    pub index: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Sorts pictures into slideshow order: by `index`, then by id so that
/// pictures sharing an index keep their upload order.
pub fn order_pictures(pictures: &mut [Picture]) {
    pictures.sort_by_key(|p| (p.index, p.id));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn picture(id: i64, index: i64) -> Picture {
        let now = Utc::now();
        Picture {
            id,
            hotel_id: 1,
            file_path: format!("http://localhost/storage/pictures/1/{}.png", id),
            file_size: 10,
            index,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn orders_by_index_then_id() {
        let mut pictures = vec![picture(3, 1), picture(1, 2), picture(2, 1), picture(4, 0)];
        order_pictures(&mut pictures);
        let ids: Vec<i64> = pictures.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![4, 2, 3, 1]);
    }
}
