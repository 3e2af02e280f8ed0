//! Row-level SQL for hotels and pictures.
//!
//! Functions take a borrowed `rusqlite::Connection` and return
//! `rusqlite::Result`; mapping missing rows to HTTP errors is left to the
//! services.

pub mod hotels;
pub mod pictures;
