use std::fs;
use std::path::PathBuf;

use tdlc_ingest::{
    load_case_details, load_case_index, load_daily_filings, load_hearings, read_csv_table,
};

fn temp_file(name: &str, contents: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    let stamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    dir.push(format!("tdlc_ingest_table_{stamp}_{name}"));
    fs::create_dir_all(&dir).expect("create temp dir");
    let path = dir.join(name);
    fs::write(&path, contents).expect("write file");
    path
}

#[test]
fn reads_table_skipping_blank_rows() {
    let path = temp_file("t.csv", "\u{feff}fecha , rol\n\n05-03-2024, c-1-2020 \n,\n06-03-2024\n");
    let table = read_csv_table(&path).expect("read csv");
    assert_eq!(table.headers, vec!["fecha", "rol"]);
    assert_eq!(table.rows.len(), 2);
    assert_eq!(table.rows[0], vec!["05-03-2024", "c-1-2020"]);
    assert_eq!(table.rows[1], vec!["06-03-2024", ""]);
    assert!(table.has_column("ROL"));

    let _ = fs::remove_dir_all(path.parent().unwrap());
}

#[test]
fn empty_file_gives_empty_table() {
    let path = temp_file("empty.csv", "");
    let table = read_csv_table(&path).expect("read csv");
    assert!(table.headers.is_empty());
    assert!(table.is_empty());

    let _ = fs::remove_dir_all(path.parent().unwrap());
}

#[test]
fn loads_hearings_by_column_name() {
    let contents = "rol,fecha,hora,caratula,tipo_audiencia,estado\n\
                    C-1-2020,05-03-2024,10:00,\"Empresa A con Empresa B\",Vista de la causa,Realizada\n";
    let path = temp_file("calendario_audiencias.csv", contents);
    let hearings = load_hearings(&path).expect("load hearings");
    assert_eq!(hearings.len(), 1);
    let hearing = &hearings[0];
    assert_eq!(hearing.case_role, "C-1-2020");
    assert_eq!(hearing.date, "05-03-2024");
    assert_eq!(hearing.caption, "Empresa A con Empresa B");
    assert_eq!(hearing.kind, "Vista de la causa");
    assert_eq!(hearing.status, "Realizada");
    assert_eq!(hearing.resolution_doc, "");

    let _ = fs::remove_dir_all(path.parent().unwrap());
}

#[test]
fn loads_case_details_with_flags() {
    let contents = "rol,idCausa,fecha_primer_tramite,fallo_detectado,referencia_fallo,fecha_fallo,link_fallo\n\
                    C-1-2020,101,02-01-2020,True,Sentencia 1,2024-04-01,http://x\n\
                    C-2-2021,102,03-02-2021,False,,,\n";
    let path = temp_file("rol_idcausa_detalle.csv", contents);
    let details = load_case_details(&path).expect("load details");
    assert_eq!(details.len(), 2);
    assert!(details[0].ruling_detected);
    assert_eq!(details[0].case_id, "101");
    assert_eq!(details[0].ruling_date, "2024-04-01");
    assert!(!details[1].ruling_detected);
    assert_eq!(details[1].ruling_date, "");

    let _ = fs::remove_dir_all(path.parent().unwrap());
}

#[test]
fn loads_case_index_with_reordered_headers() {
    let contents = "IDCAUSA,Procedimiento,ROL,Tipo\n\
                    4567,Contencioso,C-9-2022,Causa\n";
    let path = temp_file("rol_idcausa.csv", contents);
    let index = load_case_index(&path).expect("load index");
    assert_eq!(index.len(), 1);
    assert_eq!(index[0].case_role, "C-9-2022");
    assert_eq!(index[0].case_id, "4567");
    assert_eq!(index[0].procedure, "Contencioso");
    assert_eq!(index[0].kind, "Causa");
    assert_eq!(index[0].description, "");

    let _ = fs::remove_dir_all(path.parent().unwrap());
}

#[test]
fn daily_filings_keep_all_columns() {
    let contents = "idCausa,rol,TipoTramite,Fecha\n101,C-1-2020,Resolución,05-03-2024\n";
    let path = temp_file("estado_diario_detalle_tmp.csv", contents);
    let filings = load_daily_filings(&path).expect("load filings");
    assert_eq!(filings.len(), 1);
    assert_eq!(filings[0].get("TipoTramite"), Some("Resolución"));
    assert_eq!(filings[0].columns.len(), 4);

    let _ = fs::remove_dir_all(path.parent().unwrap());
}
