//! Types shared by the backend and the frontend: the hotel/picture models,
//! request and response shapes, and the validation rules both sides apply.

pub mod model;
pub mod requests;
pub mod validation;
