//! Wire records of the FFGZ REST API.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::numeric::to_number;

/// One damper or isolator type with its rated parameters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TypeRecord {
    /// Server id. `None` for rows that were never persisted.
    #[serde(default)]
    pub id: Option<i64>,
    pub model: String,
    #[serde(default)]
    pub load: Option<f64>,
    #[serde(default)]
    pub damp: Option<f64>,
    #[serde(default)]
    pub kx: Option<f64>,
    #[serde(default)]
    pub ky: Option<f64>,
    #[serde(default)]
    pub kz: Option<f64>,
}

impl TypeRecord {
    /// Build a record from raw cell text in `model, load, damp, kx, ky, kz` order.
    ///
    /// Missing cells become null, the model is trimmed.
    pub fn from_cells<S: AsRef<str>>(cells: &[S]) -> Self {
        let cell = |index: usize| cells.get(index).map(|c| c.as_ref()).unwrap_or_default();
        Self {
            id: None,
            model: cell(0).trim().to_owned(),
            load: to_number(cell(1)),
            damp: to_number(cell(2)),
            kx: to_number(cell(3)),
            ky: to_number(cell(4)),
            kz: to_number(cell(5)),
        }
    }

    pub fn payload(&self) -> TypePayload {
        TypePayload {
            model: self.model.trim().to_owned(),
            load: self.load,
            damp: self.damp,
            kx: self.kx,
            ky: self.ky,
            kz: self.kz,
        }
    }

    /// Coefficients in display column order.
    pub fn coefficients(&self) -> [Option<f64>; 5] {
        [self.load, self.damp, self.kx, self.ky, self.kz]
    }
}

/// Body of `POST /api/types` and `PUT /api/types/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypePayload {
    pub model: String,
    pub load: Option<f64>,
    pub damp: Option<f64>,
    pub kx: Option<f64>,
    pub ky: Option<f64>,
    pub kz: Option<f64>,
}

/// A measurement sample bound to an upper/lower type pair.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataRow {
    #[serde(default)]
    pub id: Option<i64>,
    pub upper_model: String,
    pub lower_model: String,
    /// `"a-b"` or empty.
    #[serde(default)]
    pub freq_range: String,
    #[serde(default)]
    pub max_excit: Option<f64>,
}

impl DataRow {
    pub fn payload(&self) -> DataPayload {
        DataPayload {
            upper_model: self.upper_model.clone(),
            lower_model: self.lower_model.clone(),
            freq_range: self.freq_range.clone(),
            max_excit: self.max_excit,
        }
    }
}

/// Body of `POST /api/data`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPayload {
    pub upper_model: String,
    pub lower_model: String,
    pub freq_range: String,
    pub max_excit: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct CreatedResponse {
    pub ok: bool,
    #[serde(default)]
    pub id: Option<i64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct OkResponse {
    pub ok: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct DeletedResponse {
    pub ok: bool,
    #[serde(default)]
    pub deleted: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BulkDeleteRequest {
    pub ids: Vec<i64>,
}

/// One line of the server activity log.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LogEntry {
    pub ts: NaiveDateTime,
    pub action: String,
}
