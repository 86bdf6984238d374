use hotkey_player::error::PlaylistError;
use hotkey_player::playlist::Playlist;
use std::fs;
use std::path::Path;

fn touch(dir: &Path, name: &str) {
    fs::write(dir.join(name), b"").expect("write");
}

fn file_names(playlist: &Playlist) -> Vec<String> {
    playlist
        .tracks()
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect()
}

#[test]
fn directory_is_ordered_numerically_and_filtered() {
    let dir = tempfile::tempdir().expect("tempdir");
    for name in ["2.mp3", "10.mp3", "1.wav", "3.flac", "cover.jpg"] {
        touch(dir.path(), name);
    }

    let playlist = Playlist::from_source(dir.path()).expect("playlist");
    assert_eq!(file_names(&playlist), vec!["1.wav", "2.mp3", "3.flac", "10.mp3"]);
    assert!(playlist.tracks().iter().all(|p| p.starts_with(dir.path())));
}

#[test]
fn single_file_is_the_whole_playlist() {
    let dir = tempfile::tempdir().expect("tempdir");
    touch(dir.path(), "track.ogg");
    let file = dir.path().join("track.ogg");

    let playlist = Playlist::from_source(&file).expect("playlist");
    assert_eq!(playlist.len(), 1);
    assert_eq!(playlist.get(0), Some(file.as_path()));
}

#[test]
fn non_numeric_track_is_a_configuration_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    touch(dir.path(), "1.mp3");
    touch(dir.path(), "bonus.ogg");

    let err = Playlist::from_source(dir.path()).unwrap_err();
    assert!(matches!(err, PlaylistError::NonNumericTrackName { .. }));
    assert!(err.to_string().contains("bonus.ogg"));
}

#[test]
fn directory_without_audio_is_empty() {
    let dir = tempfile::tempdir().expect("tempdir");
    touch(dir.path(), "cover.jpg");
    touch(dir.path(), "notes.txt");

    let playlist = Playlist::from_source(dir.path()).expect("playlist");
    assert!(playlist.is_empty());
}
