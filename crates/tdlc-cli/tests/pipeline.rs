//! Integration tests for the pipeline module.

use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use tdlc_cli::pipeline::{
    date_window, ingest, ingest_daily, load_ladder_file, parse_date_arg, resolve_ladder,
    resolve_today, run_timeline,
};
use tdlc_core::summarize;
use tdlc_ingest::DataFile;
use tdlc_model::{AnalysisOptions, DateError, DurationBasis, LadderKind, TdlcError};

fn write(root: &Path, relative: &str, contents: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, contents).unwrap();
}

fn sample_data(root: &Path) {
    write(
        root,
        "calendario_audiencias.csv",
        "fecha,hora,rol,caratula,tipo_audiencia,estado,doc_resolucion\n\
         01-03-2024,10:00,C-1-2023,FNE contra A,Vista de la causa,Realizada,\n\
         01-03-2024,11:00,c-2-2023,FNE contra B,Audiencia pública,Realizada,\n\
         15-03-2024,09:30,C-3-2023,FNE contra C,Conciliación,Realizada,\n",
    );
    write(
        root,
        "historic_data/rol_idcausa_detalle.csv",
        "rol,idCausa,fecha_primer_tramite,fallo_detectado,referencia_fallo,fecha_fallo,link_fallo\n\
         C-1-2023,101,01-01-2024,True,Sentencia 1,11-03-2024,\n\
         C-2-2023,102,01-01-2024,True,Sentencia 2,31-04-2024,\n\
         C-3-2023,103,01-02-2024,False,,,\n",
    );
    write(
        root,
        "historic_data/rol_idcausa.csv",
        "tipo,rol,fecha_ingreso,descripcion,procedimiento,idcausa,link\n\
         Causa,C-1-2023,02-01-2023,FNE contra A,Contencioso,101,https://example.test/101\n\
         Causa,C-2-2023,02-01-2023,FNE contra B,Contencioso,102,https://example.test/102\n\
         Causa,C-3-2023,02-01-2023,FNE contra C,No Contencioso,103,https://example.test/103\n",
    );
}

#[test]
fn timeline_over_csv_files() {
    let dir = tempfile::tempdir().unwrap();
    sample_data(dir.path());

    let tables = ingest(
        dir.path(),
        &[DataFile::Hearings, DataFile::CaseDetails, DataFile::CaseIndex],
    )
    .unwrap();
    assert_eq!(tables.hearings.len(), 3);
    assert_eq!(tables.details.len(), 3);
    assert!(tables.details[0].ruling_detected);

    let ladder = LadderKind::Elapsed.ladder();
    let timeline = run_timeline(&tables, &AnalysisOptions::default(), &ladder);
    assert_eq!(timeline.len(), 1);
    assert_eq!(timeline.records[0].days, 10);
    // 31-04-2024 does not exist.
    assert_eq!(timeline.dropped.invalid_date, 1);

    let options = AnalysisOptions::default().with_basis(DurationBasis::SinceFirstFiling);
    let summary = summarize(&run_timeline(&tables, &options, &ladder));
    assert_eq!(summary.count(), 1);
    assert_eq!(summary.by_procedure.groups["Contencioso"].rounded_mean(), 70);
    assert_eq!(summary.dropped.missing_outcome, 1);
}

#[test]
fn missing_required_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "rol_idcausa.csv", "rol\nC-1\n");
    let error = ingest(dir.path(), &[DataFile::CaseDetails]).unwrap_err();
    assert!(error.to_string().contains("case detail"));

    let tables = ingest(dir.path(), &[]).unwrap();
    assert_eq!(tables.index.len(), 1);
    assert!(tables.hearings.is_empty());
}

#[test]
fn daily_bulletin_without_filings() {
    let dir = tempfile::tempdir().unwrap();
    write(
        dir.path(),
        "estado_diario/estado_diario_tmp.csv",
        "fecha_estado_diario,rol,descripcion,tramites,link\n\
         04-06-2024,C-9-2024,Demanda,Resolución,https://example.test/9\n",
    );
    let (cases, filings) = ingest_daily(dir.path()).unwrap();
    assert_eq!(cases.len(), 1);
    assert_eq!(cases[0].filings, "Resolución");
    assert!(filings.is_empty());
}

#[test]
fn date_arguments() {
    assert_eq!(
        parse_date_arg("05-06-2024").unwrap(),
        NaiveDate::from_ymd_opt(2024, 6, 5).unwrap()
    );
    match parse_date_arg("05-06-24") {
        Err(TdlcError::Date { value, source }) => {
            assert_eq!(value, "05-06-24");
            assert_eq!(source, DateError::AmbiguousYear);
        }
        other => panic!("unexpected {other:?}"),
    }

    let window = date_window(Some("01-01-2024"), Some("2024-12-31")).unwrap();
    assert!(window.contains(NaiveDate::from_ymd_opt(2024, 7, 1).unwrap()));
    assert!(date_window(None, None).unwrap().is_unbounded());
    assert!(date_window(Some("31-12-2024"), Some("01-01-2024")).is_err());

    assert_eq!(
        resolve_today(Some("2024-06-05")).unwrap(),
        NaiveDate::from_ymd_opt(2024, 6, 5).unwrap()
    );
}

#[test]
fn ladder_files() {
    let dir = tempfile::tempdir().unwrap();
    let good = dir.path().join("ladder.json");
    fs::write(
        &good,
        r#"{"name":"weeks","thresholds":[
            {"upper_bound":7,"label":"week","title":"This week"},
            {"upper_bound":null,"label":"later","title":"Later"}
        ]}"#,
    )
    .unwrap();
    let ladder = load_ladder_file(&good).unwrap();
    assert_eq!(ladder.name(), "weeks");
    assert_eq!(ladder.bucket_for(8).label, "later");

    let bad = dir.path().join("bad.json");
    fs::write(
        &bad,
        r#"{"name":"bad","thresholds":[{"upper_bound":7,"label":"week","title":"Week"}]}"#,
    )
    .unwrap();
    assert!(load_ladder_file(&bad).is_err());
    assert!(load_ladder_file(&dir.path().join("missing.json")).is_err());

    let builtin = resolve_ladder(LadderKind::Countdown, None).unwrap();
    assert_eq!(builtin.name(), "countdown");
    assert!(resolve_ladder(LadderKind::Countdown, Some(&bad)).is_err());
}
