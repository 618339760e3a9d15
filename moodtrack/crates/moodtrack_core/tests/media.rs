use moodtrack_core::media::{mime_for_path, MediaError, VideoInput, DEFAULT_VIDEO_MIME};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

#[test]
fn data_url_is_split_into_mime_and_payload() {
    let v = VideoInput::from_data_url("data:video/webm;base64,AAAA").unwrap();
    assert_eq!(v.mime_type, "video/webm");
    assert_eq!(v.data_base64, "AAAA");
}

#[test]
fn malformed_data_urls_are_rejected() {
    for bad in [
        "data:image/png;base64,AAAA",
        "data:video/mp4,AAAA",
        "data:video/mp4;base64,",
        "data:;base64,AAAA",
        "video/mp4;base64,AAAA",
    ] {
        assert!(
            matches!(VideoInput::from_data_url(bad), Err(MediaError::InvalidDataUrl)),
            "{bad}"
        );
    }
}

#[test]
fn raw_base64_defaults_to_mp4() {
    let v = VideoInput::from_base64(" AAAA ", None).unwrap();
    assert_eq!(v.mime_type, DEFAULT_VIDEO_MIME);
    assert_eq!(v.data_base64, "AAAA");

    let v = VideoInput::from_base64("AAAA", Some("video/webm")).unwrap();
    assert_eq!(v.mime_type, "video/webm");

    let v = VideoInput::from_base64("data:video/quicktime;base64,BBBB", Some("video/mp4")).unwrap();
    assert_eq!(v.mime_type, "video/quicktime");

    assert!(matches!(VideoInput::from_base64("  ", None), Err(MediaError::Empty)));
}

#[test]
fn bytes_require_a_video_mime() {
    let v = VideoInput::from_bytes(&[9, 8, 7], "video/mp4").unwrap();
    assert_eq!(v.data_base64, "CQgH");

    assert!(matches!(
        VideoInput::from_bytes(&[1], "audio/wav"),
        Err(MediaError::NotVideo(_))
    ));
    assert!(matches!(VideoInput::from_bytes(&[], "video/mp4"), Err(MediaError::Empty)));
}

#[test]
fn mime_is_inferred_from_extension() {
    assert_eq!(mime_for_path(Path::new("clip.MP4")), Some("video/mp4"));
    assert_eq!(mime_for_path(Path::new("clip.webm")), Some("video/webm"));
    assert_eq!(mime_for_path(Path::new("clip.mov")), Some("video/quicktime"));
    assert_eq!(mime_for_path(Path::new("clip.txt")), None);
    assert_eq!(mime_for_path(Path::new("clip")), None);
}

#[test]
fn from_file_reads_and_encodes() {
    let mut path: PathBuf = std::env::temp_dir();
    let unique = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    path.push(format!("moodtrack_media_test_{unique}.webm"));
    std::fs::write(&path, [9u8, 8, 7]).unwrap();

    let v = VideoInput::from_file(&path).unwrap();
    assert_eq!(v.mime_type, "video/webm");
    assert_eq!(v.data_base64, "CQgH");
    let _ = std::fs::remove_file(&path);

    let missing = path.with_file_name(format!("moodtrack_missing_{unique}.mp4"));
    assert!(matches!(VideoInput::from_file(&missing), Err(MediaError::Read { .. })));

    assert!(matches!(
        VideoInput::from_file(Path::new("notes.txt")),
        Err(MediaError::UnknownExtension(_))
    ));
}
