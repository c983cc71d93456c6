//! Data-directory discovery.
//!
//! The scrapers have written the same files to a few different places over
//! time (flat, `historic_data/`, `calendar/`). Each file kind has an ordered
//! list of candidates and the first one that exists wins.

use std::path::{Path, PathBuf};

use crate::error::{IngestError, Result};

/// Kinds of data file the analyses read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataFile {
    Hearings,
    CaseDetails,
    CaseIndex,
    DailyCases,
    DailyFilings,
}

impl DataFile {
    pub const ALL: [DataFile; 5] = [
        DataFile::Hearings,
        DataFile::CaseDetails,
        DataFile::CaseIndex,
        DataFile::DailyCases,
        DataFile::DailyFilings,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Hearings => "hearing calendar",
            Self::CaseDetails => "case detail",
            Self::CaseIndex => "case index",
            Self::DailyCases => "daily cases",
            Self::DailyFilings => "daily filings",
        }
    }

    /// Candidate paths relative to the data root, in priority order.
    pub fn candidates(self) -> &'static [&'static str] {
        match self {
            Self::Hearings => &[
                "calendario_audiencias.csv",
                "calendar/calendario_audiencias.csv",
            ],
            Self::CaseDetails => &[
                "historic_data/rol_idcausa_detalle_actualizado.csv",
                "rol_idcausa_detalle_actualizado.csv",
                "historic_data/rol_idcausa_detalle.csv",
                "rol_idcausa_detalle.csv",
            ],
            Self::CaseIndex => &["historic_data/rol_idcausa.csv", "rol_idcausa.csv"],
            Self::DailyCases => &[
                "estado_diario/estado_diario_tmp.csv",
                "estado_diario_tmp.csv",
            ],
            Self::DailyFilings => &[
                "estado_diario/estado_diario_detalle_tmp.csv",
                "estado_diario_detalle_tmp.csv",
            ],
        }
    }
}

/// Resolved locations of the data files under one root.
#[derive(Debug, Clone, Default)]
pub struct DataLayout {
    pub root: PathBuf,
    pub hearings: Option<PathBuf>,
    pub case_details: Option<PathBuf>,
    pub case_index: Option<PathBuf>,
    pub daily_cases: Option<PathBuf>,
    pub daily_filings: Option<PathBuf>,
}

impl DataLayout {
    /// Probe `root` for every data file kind.
    pub fn discover(root: &Path) -> Result<Self> {
        if !root.is_dir() {
            return Err(IngestError::DirectoryNotFound {
                path: root.to_path_buf(),
            });
        }
        let find = |file: DataFile| {
            file.candidates()
                .iter()
                .map(|candidate| root.join(candidate))
                .find(|path| path.is_file())
        };
        let layout = Self {
            root: root.to_path_buf(),
            hearings: find(DataFile::Hearings),
            case_details: find(DataFile::CaseDetails),
            case_index: find(DataFile::CaseIndex),
            daily_cases: find(DataFile::DailyCases),
            daily_filings: find(DataFile::DailyFilings),
        };
        for file in DataFile::ALL {
            match layout.path(file) {
                Some(path) => tracing::debug!(kind = file.name(), path = %path.display(), "data file found"),
                None => tracing::debug!(kind = file.name(), "data file missing"),
            }
        }
        Ok(layout)
    }

    pub fn path(&self, file: DataFile) -> Option<&Path> {
        match file {
            DataFile::Hearings => self.hearings.as_deref(),
            DataFile::CaseDetails => self.case_details.as_deref(),
            DataFile::CaseIndex => self.case_index.as_deref(),
            DataFile::DailyCases => self.daily_cases.as_deref(),
            DataFile::DailyFilings => self.daily_filings.as_deref(),
        }
    }

    /// Path of `file`, or an error listing every candidate that was tried.
    pub fn require(&self, file: DataFile) -> Result<&Path> {
        self.path(file).ok_or_else(|| IngestError::FileNotFound {
            kind: file.name(),
            candidates: file
                .candidates()
                .iter()
                .map(|candidate| self.root.join(candidate))
                .collect(),
        })
    }
}
