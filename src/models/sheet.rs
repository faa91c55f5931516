//! Spreadsheet input model.
//!
//! The extractor never sees a file container. Whatever reads the export hands
//! over a [`Workbook`] of typed cells, and this module owns the one place where
//! a cell becomes text.

use std::fs;
use std::path::Path;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Rendering used when a formula cell carries neither a text nor a numeric result.
pub const FORMULA_ERROR_TEXT: &str = "#FORMULA_ERROR#";

/// A single spreadsheet cell together with its semantic type.
///
/// Serialized adjacently tagged, e.g. `{"type": "numeric", "value": 22.0}`.
///
/// # Example
///
/// ```
/// use salary_engine::models::Cell;
///
/// assert_eq!(Cell::Numeric(22.0).to_text().as_deref(), Some("22"));
/// assert_eq!(Cell::Numeric(7.5).to_text().as_deref(), Some("7.5"));
/// assert_eq!(Cell::Blank.to_text(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Cell {
    /// A plain string cell.
    Text(String),
    /// A numeric cell that is not date formatted.
    Numeric(f64),
    /// A boolean cell.
    Boolean(bool),
    /// A date-formatted numeric cell.
    Date(NaiveDateTime),
    /// A formula cell with whichever cached result the reader could recover.
    Formula {
        /// Cached string result, if the formula evaluated to text.
        text: Option<String>,
        /// Cached numeric result, if the formula evaluated to a number.
        number: Option<f64>,
    },
    /// An empty cell.
    Blank,
}

impl Cell {
    /// Shorthand for a text cell.
    pub fn text(value: impl Into<String>) -> Self {
        Cell::Text(value.into())
    }

    /// Renders the cell as text, or `None` for a blank cell.
    ///
    /// Integral numbers drop their fractional part so that `22.0` reads as
    /// `22`. Formula cells prefer their text result, then their numeric
    /// result, then [`FORMULA_ERROR_TEXT`].
    pub fn to_text(&self) -> Option<String> {
        match self {
            Cell::Text(s) => Some(s.clone()),
            Cell::Numeric(n) => Some(format_number(*n)),
            Cell::Boolean(b) => Some(b.to_string()),
            Cell::Date(dt) => Some(dt.format("%Y-%m-%dT%H:%M:%S").to_string()),
            Cell::Formula { text, number } => Some(match (text, number) {
                (Some(t), _) => t.clone(),
                (None, Some(n)) => n.to_string(),
                (None, None) => FORMULA_ERROR_TEXT.to_string(),
            }),
            Cell::Blank => None,
        }
    }
}

fn format_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        (value as i64).to_string()
    } else {
        value.to_string()
    }
}

/// One spreadsheet row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Row {
    /// Cells in column order.
    #[serde(default)]
    pub cells: Vec<Cell>,
}

impl Row {
    /// Creates a row from its cells.
    pub fn new(cells: Vec<Cell>) -> Self {
        Self { cells }
    }

    /// Creates a row of text cells.
    pub fn from_texts<S: AsRef<str>>(texts: &[S]) -> Self {
        Self {
            cells: texts.iter().map(|t| Cell::text(t.as_ref())).collect(),
        }
    }

    /// Concatenates the text of every non-blank cell, space separated and trimmed.
    ///
    /// # Example
    ///
    /// ```
    /// use salary_engine::models::{Cell, Row};
    ///
    /// let row = Row::new(vec![
    ///     Cell::text("Present:"),
    ///     Cell::Blank,
    ///     Cell::Numeric(22.0),
    /// ]);
    /// assert_eq!(row.text(), "Present: 22");
    /// ```
    pub fn text(&self) -> String {
        self.cells
            .iter()
            .filter_map(Cell::to_text)
            .collect::<Vec<_>>()
            .join(" ")
            .trim()
            .to_string()
    }
}

/// A named sheet of rows.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Sheet {
    /// The sheet name as shown in the export.
    #[serde(default)]
    pub name: String,
    /// Rows in sheet order.
    #[serde(default)]
    pub rows: Vec<Row>,
}

/// An attendance export: an ordered list of sheets.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Workbook {
    /// Sheets in workbook order.
    pub sheets: Vec<Sheet>,
}

impl Workbook {
    /// Wraps a single sheet of rows.
    pub fn single_sheet(name: impl Into<String>, rows: Vec<Row>) -> Self {
        Self {
            sheets: vec![Sheet {
                name: name.into(),
                rows,
            }],
        }
    }

    /// Parses a workbook from its JSON representation.
    pub fn from_json(input: &str) -> EngineResult<Self> {
        serde_json::from_str(input).map_err(|e| EngineError::MalformedInput {
            source_name: "json input".to_string(),
            message: e.to_string(),
        })
    }

    /// Parses a workbook from its YAML representation.
    pub fn from_yaml(input: &str) -> EngineResult<Self> {
        serde_yaml::from_str(input).map_err(|e| EngineError::MalformedInput {
            source_name: "yaml input".to_string(),
            message: e.to_string(),
        })
    }

    /// Loads a workbook file, choosing the format from its extension.
    ///
    /// Supported extensions are `json`, `yaml` and `yml`. An unreadable or
    /// unparseable file is a hard failure.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let source_name = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|e| EngineError::MalformedInput {
            source_name: source_name.clone(),
            message: format!("unable to read file: {}", e),
        })?;

        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_lowercase);

        let parsed = match extension.as_deref() {
            Some("json") => serde_json::from_str(&content).map_err(|e| e.to_string()),
            Some("yaml") | Some("yml") => serde_yaml::from_str(&content).map_err(|e| e.to_string()),
            other => Err(format!(
                "unsupported input format: {}",
                other.unwrap_or("<none>")
            )),
        };

        parsed.map_err(|message| EngineError::MalformedInput {
            source_name,
            message,
        })
    }
}
