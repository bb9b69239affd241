mod ids;
mod playlist;
mod song;
mod user;

pub use ids::{PlaylistId, SongId, UserId};
pub use playlist::{validate_playlist_name, Playlist};
pub use song::{NewSong, Song};
pub use user::User;
