/// API route modules
pub mod auth;
pub mod health;
pub mod payload;
pub mod playlists;
pub mod songs;
