pub mod hotel;
pub mod picture;
pub mod response;
