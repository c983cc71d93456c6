//! Tests for data-directory discovery.

use std::fs;
use std::path::Path;

use tdlc_ingest::{DataFile, DataLayout, IngestError};

fn touch(root: &Path, relative: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create dirs");
    }
    fs::write(&path, "a,b\n1,2\n").expect("write file");
}

#[test]
fn prefers_historic_and_updated_files() {
    let dir = tempfile::tempdir().expect("temp dir");
    touch(dir.path(), "rol_idcausa_detalle.csv");
    touch(dir.path(), "historic_data/rol_idcausa_detalle_actualizado.csv");
    touch(dir.path(), "rol_idcausa.csv");
    touch(dir.path(), "calendar/calendario_audiencias.csv");

    let layout = DataLayout::discover(dir.path()).expect("discover");
    assert_eq!(
        layout.case_details.as_deref(),
        Some(dir.path().join("historic_data/rol_idcausa_detalle_actualizado.csv").as_path())
    );
    assert_eq!(
        layout.case_index.as_deref(),
        Some(dir.path().join("rol_idcausa.csv").as_path())
    );
    assert_eq!(
        layout.hearings.as_deref(),
        Some(dir.path().join("calendar/calendario_audiencias.csv").as_path())
    );
    assert!(layout.daily_cases.is_none());
}

#[test]
fn require_lists_candidates() {
    let dir = tempfile::tempdir().expect("temp dir");
    let layout = DataLayout::discover(dir.path()).expect("discover");
    let error = layout.require(DataFile::DailyCases).expect_err("missing file");
    match &error {
        IngestError::FileNotFound { kind, candidates } => {
            assert_eq!(*kind, "daily cases");
            assert_eq!(candidates.len(), 2);
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(error.to_string().contains("estado_diario_tmp.csv"));
}

#[test]
fn missing_root_is_an_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let missing = dir.path().join("nope");
    assert!(matches!(
        DataLayout::discover(&missing),
        Err(IngestError::DirectoryNotFound { .. })
    ));
}
