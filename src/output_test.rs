use super::*;

// =============================================================
// Placeholder handling
// =============================================================

#[test]
fn has_placeholder_detects_token() {
    assert!(has_placeholder("out/{frame}.svg"));
    assert!(has_placeholder("{frame}"));
    assert!(!has_placeholder("out/board.svg"));
    assert!(!has_placeholder("out/frame.svg"));
}

#[test]
fn substitute_frame_replaces_every_occurrence() {
    assert_eq!(
        substitute_frame("{frame}/{frame}.svg", "Roadmap"),
        "Roadmap/Roadmap.svg"
    );
    assert_eq!(substitute_frame("board.svg", "Roadmap"), "board.svg");
}

// =============================================================
// File writes
// =============================================================

#[tokio::test]
async fn write_output_writes_file_verbatim() {
    let dir = tempfile::tempdir().expect("tempdir should create");
    let path = dir.path().join("export.svg");
    let path_str = path.to_str().expect("path should be utf-8");

    write_output("<svg/>", Some(path_str))
        .await
        .expect("write should succeed");

    let written = std::fs::read_to_string(&path).expect("file should exist");
    assert_eq!(written, "<svg/>");
}

#[tokio::test]
async fn write_output_reports_path_on_failure() {
    let result = write_output("<svg/>", Some("/nonexistent-dir/export.svg")).await;

    match result {
        Err(ExportError::Write { path, .. }) => {
            assert_eq!(path, std::path::Path::new("/nonexistent-dir/export.svg"));
        }
        other => panic!("expected write error, got {other:?}"),
    }
}
