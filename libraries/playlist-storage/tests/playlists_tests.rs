//! Integration tests for the playlist stores
//!
//! Every scenario runs against both `MemoryStore` and `SqliteStore`:
//! - CRUD with user ownership
//! - Per-owner name uniqueness
//! - Song triple uniqueness and ordering
//! - Cascading deletes


use playlist_core::{PlaylistError, PlaylistId, PlaylistStore, SongId};
use test_helpers::*;

macro_rules! store_tests {
    ($($scenario:ident),* $(,)?) => {
        mod memory {
            $(
                #[tokio::test]
                async fn $scenario() {
                    let store = super::memory_store();
                    super::$scenario(&store).await;
                }
            )*
        }

        mod sqlite {
            $(
                #[tokio::test]
                async fn $scenario() {
                    let test_db = super::TestDb::new().await;
                    super::$scenario(&test_db.store).await;
                }
            )*
        }
    };
}

store_tests!(
    create_and_get_playlist,
    list_is_scoped_to_owner,
    duplicate_name_is_rejected_per_owner,
    rename_checks_ownership_and_uniqueness,
    delete_cascades_and_is_not_repeatable,
    songs_are_unique_per_playlist,
    song_removal_requires_matching_playlist,
    foreign_playlists_are_invisible,
);

async fn create_and_get_playlist(store: &dyn PlaylistStore) {
    let user = create_test_user(store).await;

    let playlist = store
        .create_playlist(&user.id, "My Favorites")
        .await
        .expect("Failed to create playlist");
    assert_eq!(playlist.name, "My Favorites");
    assert_eq!(playlist.owner_id, user.id);

    let retrieved = store
        .get_playlist_with_songs(&user.id, &playlist.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(retrieved.id, playlist.id);
    assert_eq!(retrieved.name, "My Favorites");
    assert_eq!(retrieved.songs, Some(vec![]));
}

async fn list_is_scoped_to_owner(store: &dyn PlaylistStore) {
    let user1 = create_test_user(store).await;
    let user2 = create_test_user(store).await;

    store.create_playlist(&user1.id, "User 1 Playlist A").await.unwrap();
    store.create_playlist(&user1.id, "User 1 Playlist B").await.unwrap();
    store.create_playlist(&user2.id, "User 2 Playlist").await.unwrap();

    let user1_playlists = store.get_user_playlists(&user1.id).await.unwrap();
    let names: Vec<&str> = user1_playlists.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["User 1 Playlist A", "User 1 Playlist B"]);
    assert!(user1_playlists.iter().all(|p| p.owner_id == user1.id));
    assert!(user1_playlists.iter().all(|p| p.songs.is_none()));

    let nobody = create_test_user(store).await;
    assert!(store.get_user_playlists(&nobody.id).await.unwrap().is_empty());
}

async fn duplicate_name_is_rejected_per_owner(store: &dyn PlaylistStore) {
    let user1 = create_test_user(store).await;
    let user2 = create_test_user(store).await;

    store.create_playlist(&user1.id, "Mix").await.unwrap();

    let err = store.create_playlist(&user1.id, "Mix").await.unwrap_err();
    assert!(matches!(err, PlaylistError::Duplicate(_)), "got {err:?}");

    // Names are case-sensitive and scoped to the owner
    store.create_playlist(&user1.id, "mix").await.unwrap();
    store.create_playlist(&user2.id, "Mix").await.unwrap();

    assert_eq!(store.get_user_playlists(&user1.id).await.unwrap().len(), 2);
}

async fn rename_checks_ownership_and_uniqueness(store: &dyn PlaylistStore) {
    let owner = create_test_user(store).await;
    let intruder = create_test_user(store).await;

    let first = store.create_playlist(&owner.id, "First").await.unwrap();
    let second = store.create_playlist(&owner.id, "Second").await.unwrap();

    store.rename_playlist(&owner.id, &first.id, "Renamed").await.unwrap();
    let renamed = store
        .get_playlist_with_songs(&owner.id, &first.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(renamed.name, "Renamed");
    assert!(renamed.updated_at >= renamed.created_at);

    let err = store
        .rename_playlist(&owner.id, &second.id, "Renamed")
        .await
        .unwrap_err();
    assert!(matches!(err, PlaylistError::Duplicate(_)), "got {err:?}");

    // Keeping the current name is not a conflict
    store.rename_playlist(&owner.id, &second.id, "Second").await.unwrap();

    let err = store
        .rename_playlist(&intruder.id, &first.id, "Stolen")
        .await
        .unwrap_err();
    assert!(matches!(err, PlaylistError::PlaylistNotFound(_)), "got {err:?}");

    let err = store
        .rename_playlist(&owner.id, &PlaylistId::generate(), "Ghost")
        .await
        .unwrap_err();
    assert!(err.is_not_found());
}

async fn delete_cascades_and_is_not_repeatable(store: &dyn PlaylistStore) {
    let user = create_test_user(store).await;
    let playlist = store.create_playlist(&user.id, "Doomed").await.unwrap();
    store
        .add_song_to_playlist(&user.id, &playlist.id, test_song("Track 1"))
        .await
        .unwrap();

    store.delete_playlist(&user.id, &playlist.id).await.unwrap();

    assert!(store
        .get_playlist_with_songs(&user.id, &playlist.id)
        .await
        .unwrap()
        .is_none());
    assert!(store.get_user_playlists(&user.id).await.unwrap().is_empty());
    assert!(!store.can_access(&user.id, &playlist.id).await.unwrap());

    let err = store.delete_playlist(&user.id, &playlist.id).await.unwrap_err();
    assert!(matches!(err, PlaylistError::PlaylistNotFound(_)), "got {err:?}");

    let err = store
        .add_song_to_playlist(&user.id, &playlist.id, test_song("Track 2"))
        .await
        .unwrap_err();
    assert!(err.is_not_found());

    // The freed name can be reused
    store.create_playlist(&user.id, "Doomed").await.unwrap();
}

async fn songs_are_unique_per_playlist(store: &dyn PlaylistStore) {
    let user = create_test_user(store).await;
    let first = store.create_playlist(&user.id, "First").await.unwrap();
    let second = store.create_playlist(&user.id, "Second").await.unwrap();

    let song = store
        .add_song_to_playlist(&user.id, &first.id, test_song("Track"))
        .await
        .unwrap();
    assert_eq!(song.playlist_id, first.id);
    assert_eq!(song.position, 0);

    let err = store
        .add_song_to_playlist(&user.id, &first.id, test_song("Track"))
        .await
        .unwrap_err();
    assert!(matches!(err, PlaylistError::Duplicate(_)), "got {err:?}");

    // Same triple in a different playlist is fine
    store
        .add_song_to_playlist(&user.id, &second.id, test_song("Track"))
        .await
        .unwrap();

    let next = store
        .add_song_to_playlist(&user.id, &first.id, test_song("Another Track"))
        .await
        .unwrap();
    assert_eq!(next.position, 1);

    let loaded = store
        .get_playlist_with_songs(&user.id, &first.id)
        .await
        .unwrap()
        .unwrap();
    let tracks: Vec<String> = loaded
        .songs
        .unwrap()
        .into_iter()
        .map(|s| s.track)
        .collect();
    assert_eq!(tracks, ["Track", "Another Track"]);
}

async fn song_removal_requires_matching_playlist(store: &dyn PlaylistStore) {
    let user = create_test_user(store).await;
    let first = store.create_playlist(&user.id, "First").await.unwrap();
    let second = store.create_playlist(&user.id, "Second").await.unwrap();

    let song = store
        .add_song_to_playlist(&user.id, &first.id, test_song("Track"))
        .await
        .unwrap();

    let err = store
        .remove_song_from_playlist(&user.id, &second.id, &song.id)
        .await
        .unwrap_err();
    assert!(matches!(err, PlaylistError::SongNotFound(_)), "got {err:?}");

    store
        .remove_song_from_playlist(&user.id, &first.id, &song.id)
        .await
        .unwrap();

    let err = store
        .remove_song_from_playlist(&user.id, &first.id, &song.id)
        .await
        .unwrap_err();
    assert!(matches!(err, PlaylistError::SongNotFound(_)), "got {err:?}");

    let err = store
        .remove_song_from_playlist(&user.id, &first.id, &SongId::generate())
        .await
        .unwrap_err();
    assert!(err.is_not_found());
}

async fn foreign_playlists_are_invisible(store: &dyn PlaylistStore) {
    let owner = create_test_user(store).await;
    let intruder = create_test_user(store).await;

    let playlist = store.create_playlist(&owner.id, "Private").await.unwrap();
    let song = store
        .add_song_to_playlist(&owner.id, &playlist.id, test_song("Track"))
        .await
        .unwrap();

    assert!(store.can_access(&owner.id, &playlist.id).await.unwrap());
    assert!(!store.can_access(&intruder.id, &playlist.id).await.unwrap());
    assert!(store
        .get_playlist_with_songs(&intruder.id, &playlist.id)
        .await
        .unwrap()
        .is_none());

    let err = store
        .delete_playlist(&intruder.id, &playlist.id)
        .await
        .unwrap_err();
    assert!(matches!(err, PlaylistError::PlaylistNotFound(_)), "got {err:?}");

    let err = store
        .add_song_to_playlist(&intruder.id, &playlist.id, test_song("Other"))
        .await
        .unwrap_err();
    assert!(matches!(err, PlaylistError::PlaylistNotFound(_)), "got {err:?}");

    let err = store
        .remove_song_from_playlist(&intruder.id, &playlist.id, &song.id)
        .await
        .unwrap_err();
    assert!(matches!(err, PlaylistError::PlaylistNotFound(_)), "got {err:?}");

    // Untouched for the owner
    let loaded = store
        .get_playlist_with_songs(&owner.id, &playlist.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(loaded.songs.map(|s| s.len()), Some(1));
}
