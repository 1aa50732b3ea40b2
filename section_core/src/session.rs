//! # Calculator Session
//!
//! A [`Session`] holds everything one interactive use of the calculator
//! needs: the selected shape, the raw text typed into each parameter field,
//! and the results saved so far. Nothing outlives the session; exporting to
//! CSV is the only way data leaves it.
//!
//! ## Structure
//!
//! ```text
//! Session
//! ├── settings: SessionSettings (export dir, file prefix, default shape)
//! ├── shape: ShapeKind (current selection)
//! ├── inputs: symbol → raw text (kept across shape changes)
//! └── saved: Vec<SavedResult> (append-only)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use section_core::session::{Session, SessionSettings};
//! use section_core::shapes::ShapeKind;
//!
//! let mut session = Session::new(SessionSettings::default());
//! session.select_shape(ShapeKind::SolidSquare);
//! session.set_input("a", "100").unwrap();
//! assert_eq!(session.current_result().area_mm2, 10_000.0);
//!
//! session.save();
//! assert_eq!(session.saved().len(), 1);
//! assert!(session.can_export());
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculations::{compute, try_compute, SectionResult};
use crate::errors::{CalcError, CalcResult};
use crate::export::{CsvExport, DEFAULT_FILE_PREFIX};
use crate::file_io::write_export;
use crate::parameters::ParameterSet;
use crate::shapes::ShapeKind;

/// Session configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSettings {
    /// Directory CSV exports are written to
    pub export_dir: PathBuf,

    /// File name prefix for exports (`<prefix>-<timestamp>.csv`)
    pub file_prefix: String,

    /// Shape selected when the session starts
    pub default_shape: ShapeKind,
}

impl Default for SessionSettings {
    fn default() -> Self {
        SessionSettings {
            export_dir: PathBuf::from("."),
            file_prefix: DEFAULT_FILE_PREFIX.to_string(),
            default_shape: ShapeKind::default(),
        }
    }
}

/// A result the user chose to keep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedResult {
    pub id: Uuid,
    pub shape: ShapeKind,
    /// One entry per schema symbol; unset fields are recorded as 0
    pub parameters: ParameterSet,
    pub result: SectionResult,
    pub created: DateTime<Utc>,
}

impl SavedResult {
    /// Record a result for `shape`. `parameters` is normalized to exactly the
    /// shape's schema symbols.
    pub fn new(shape: ShapeKind, parameters: &ParameterSet, result: SectionResult, created: DateTime<Utc>) -> Self {
        let parameters = shape
            .schema()
            .iter()
            .map(|spec| (spec.symbol, parameters.get(spec.symbol).unwrap_or(0.0)))
            .collect();

        SavedResult {
            id: Uuid::new_v4(),
            shape,
            parameters,
            result,
            created,
        }
    }
}

/// State of one calculator session.
#[derive(Debug, Clone)]
pub struct Session {
    settings: SessionSettings,
    shape: ShapeKind,
    inputs: BTreeMap<String, String>,
    saved: Vec<SavedResult>,
}

impl Session {
    /// Start an empty session on the settings' default shape.
    pub fn new(settings: SessionSettings) -> Self {
        Session {
            shape: settings.default_shape,
            settings,
            inputs: BTreeMap::new(),
            saved: Vec::new(),
        }
    }

    pub fn settings(&self) -> &SessionSettings {
        &self.settings
    }

    /// Currently selected shape
    pub fn shape(&self) -> ShapeKind {
        self.shape
    }

    /// Select a shape. Entered text is kept, so switching back restores it.
    pub fn select_shape(&mut self, shape: ShapeKind) {
        if shape != self.shape {
            log::debug!("shape {} -> {}", self.shape.key(), shape.key());
            self.shape = shape;
        }
    }

    /// Record the raw text of one parameter of the current shape.
    ///
    /// Returns `UnknownParameter` if `symbol` is not in the current schema.
    pub fn set_input(&mut self, symbol: &str, text: impl Into<String>) -> CalcResult<()> {
        let spec = self
            .shape
            .parameter(symbol)
            .ok_or_else(|| CalcError::unknown_parameter(self.shape.display_name(), symbol))?;
        self.inputs.insert(spec.symbol.to_string(), text.into());
        Ok(())
    }

    /// Raw text entered for a symbol
    pub fn input(&self, symbol: &str) -> Option<&str> {
        self.inputs.get(symbol).map(String::as_str)
    }

    /// Forget all entered text
    pub fn clear_inputs(&mut self) {
        self.inputs.clear();
    }

    /// Entered text for the current shape, parsed permissively
    pub fn current_parameters(&self) -> ParameterSet {
        ParameterSet::from_inputs(
            self.shape,
            self.inputs.iter().map(|(symbol, text)| (symbol.as_str(), text.as_str())),
        )
    }

    /// Live result for the current inputs (all zero when incomplete)
    pub fn current_result(&self) -> SectionResult {
        compute(self.shape, &self.current_parameters())
    }

    /// Live result, or the reason the inputs are not usable yet
    pub fn try_current_result(&self) -> CalcResult<SectionResult> {
        try_compute(self.shape, &self.current_parameters())
    }

    /// Append the current result to the saved list.
    pub fn save(&mut self) -> &SavedResult {
        let parameters = self.current_parameters();
        let result = compute(self.shape, &parameters);
        let saved = SavedResult::new(self.shape, &parameters, result, Utc::now());
        log::info!("saved {} result {} (#{})", saved.shape.key(), saved.id, self.saved.len() + 1);

        self.saved.push(saved);
        &self.saved[self.saved.len() - 1]
    }

    /// Saved results in save order
    pub fn saved(&self) -> &[SavedResult] {
        &self.saved
    }

    /// Export is only available once something has been saved
    pub fn can_export(&self) -> bool {
        !self.saved.is_empty()
    }

    /// Build the CSV export of every saved result.
    ///
    /// Returns `NothingToExport` when nothing has been saved.
    pub fn export(&self) -> CalcResult<CsvExport> {
        CsvExport::build(&self.saved, &self.settings.file_prefix, Utc::now())
    }

    /// Build the export and write it into `dir` (the settings' export
    /// directory when `None`). Returns the written file's path.
    pub fn export_to_dir(&self, dir: Option<&Path>) -> CalcResult<PathBuf> {
        let export = self.export()?;
        let dir = dir.unwrap_or(&self.settings.export_dir);
        let path = write_export(&export, dir)?;
        log::info!("exported {} result(s) to {}", export.rows, path.display());
        Ok(path)
    }
}

impl Default for Session {
    fn default() -> Self {
        Session::new(SessionSettings::default())
    }
}
