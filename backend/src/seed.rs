//! Demo data for a fresh install: ten hotels with three pictures each, at
//! indexes 0, 1 and 2. Pictures point at hosted photos, so nothing is written
//! to the storage root.

use crate::repository::hotels;
use crate::repository::pictures::{self, NewPicture};
use common::model::hotel::HotelFields;
use log::info;
use rusqlite::Connection;

pub const DEMO_HOTELS: usize = 10;
const PICTURES_PER_HOTEL: i64 = 3;

const PHOTOS: &[&str] = &[
    "https://images.unsplash.com/photo-1618773928121-c32242e63f39",
    "https://images.unsplash.com/photo-1551882547-ff40c63fe5fa",
    "https://images.unsplash.com/photo-1549294413-26f195200c16",
    "https://images.unsplash.com/photo-1445019980597-93fa8acb246c",
    "https://images.unsplash.com/photo-1566073771259-6a8506099945",
    "https://images.unsplash.com/photo-1611892440504-42a792e24d32",
    "https://images.unsplash.com/photo-1455587734955-081b22074882",
    "https://images.unsplash.com/photo-1496417263034-38ec4f0b665a",
    "https://images.unsplash.com/photo-1542314831-068cd1dbfeeb",
    "https://images.unsplash.com/photo-1495365200479-c4ed1d35e1aa",
    "https://images.unsplash.com/photo-1445991842772-097fea258e7b",
    "https://images.unsplash.com/photo-1584132967334-10e028bd69f7",
    "https://images.unsplash.com/photo-1582719508461-905c673771fd",
    "https://images.unsplash.com/photo-1629140727571-9b5c6f6267b4",
    "https://images.unsplash.com/photo-1596701062351-8c2c14d1fdd0",
    "https://images.unsplash.com/photo-1564501049412-61c2a3083791",
    "https://images.unsplash.com/photo-1506059612708-99d6c258160e",
    "https://images.unsplash.com/photo-1522798514-97ceb8c4f1c8",
];

// (name, city, country, zipcode, longitude, latitude)
const PLACES: [(&str, &str, &str, &str, f64, f64); DEMO_HOTELS] = [
    ("Hotel Alameda", "Sevilla", "Spain", "41002", -5.9945, 37.3977),
    ("Hotel Ribera", "Porto", "Portugal", "4050-513", -8.6130, 41.1406),
    ("Hotel Canal", "Amsterdam", "Netherlands", "1015 DV", 4.8846, 52.3738),
    ("Hotel Prater", "Vienna", "Austria", "1020", 16.3960, 48.2166),
    ("Hotel Duomo", "Florence", "Italy", "50122", 11.2560, 43.7731),
    ("Hotel Vltava", "Prague", "Czechia", "110 00", 14.4141, 50.0865),
    ("Hotel Marais", "Paris", "France", "75004", 2.3590, 48.8566),
    ("Hotel Fjord", "Bergen", "Norway", "5003", 5.3241, 60.3971),
    ("Hotel Alfama", "Lisbon", "Portugal", "1100-585", -9.1303, 38.7115),
    ("Hotel Retiro", "Madrid", "Spain", "28009", -3.6846, 40.4153),
];

fn demo_fields(n: usize) -> HotelFields {
    let (name, city, country, zipcode, longitude, latitude) = PLACES[n];
    HotelFields {
        name: name.to_string(),
        address: format!("{} Main Street", 10 + n * 7),
        address2: None,
        zipcode: zipcode.to_string(),
        city: city.to_string(),
        country: country.to_string(),
        longitude,
        latitude,
        description: Some(format!("A quiet stay in the centre of {}.", city)),
        max_capacity: 20 + (n as i64) * 18,
        price_per_night: 45.0 + (n as f64) * 15.5,
    }
}

/// Inserts the demo hotels unless active hotels already exist. Returns the
/// number of hotels inserted.
pub fn seed_demo_data(conn: &Connection) -> rusqlite::Result<usize> {
    if hotels::count_active(conn)? > 0 {
        info!("Hotels already present, skipping demo data");
        return Ok(0);
    }

    let tx = conn.unchecked_transaction()?;
    for n in 0..DEMO_HOTELS {
        let hotel = hotels::insert(&tx, &demo_fields(n))?;
        for index in 0..PICTURES_PER_HOTEL {
            let photo = PHOTOS[(n * PICTURES_PER_HOTEL as usize + index as usize) % PHOTOS.len()];
            pictures::insert(
                &tx,
                &NewPicture {
                    hotel_id: hotel.id,
                    file_path: photo.to_string(),
                    file_size: 0,
                    index,
                },
            )?;
        }
    }
    tx.commit()?;

    info!("Seeded {} demo hotels", DEMO_HOTELS);
    Ok(DEMO_HOTELS)
}
