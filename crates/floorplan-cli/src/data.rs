//! Dataset loading.
//!
//! A dataset is one JSON document holding the data a floor plan page gets
//! from its backend: the list of buildings and the list of units.
//!
//! ```json
//! {
//!   "buildings": [{ "id": 1, "name": "Корпус А", "totalFloors": 16 }],
//!   "units": [{ "id": 10, "buildingId": 1, "floor": 2, "apartmentNumber": "2-1",
//!               "rooms": 1, "areaTotal": 38.5, "totalPrice": 2700000,
//!               "pricePerSqm": 70000, "status": "AVAILABLE" }]
//! }
//! ```

use std::{fs, path::Path};

use log::debug;
use serde::Deserialize;

use floorplan::{
    FloorPlanError,
    unit::{Building, Unit},
};

/// Buildings and units of one project.
#[derive(Debug, Deserialize)]
pub struct Dataset {
    pub buildings: Vec<Building>,
    #[serde(alias = "apartments")]
    pub units: Vec<Unit>,
}

impl Dataset {
    /// Parses a dataset from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`FloorPlanError::Data`] if the text is not a valid dataset.
    pub fn from_json(source: &str) -> Result<Self, FloorPlanError> {
        let dataset: Self = serde_json::from_str(source)
            .map_err(|err| FloorPlanError::Data(format!("Invalid dataset: {err}")))?;

        debug!(
            buildings = dataset.buildings.len(),
            units = dataset.units.len();
            "Dataset parsed"
        );
        Ok(dataset)
    }
}

/// Reads and parses the dataset at `path`.
pub fn load_dataset(path: impl AsRef<Path>) -> Result<Dataset, FloorPlanError> {
    let source = fs::read_to_string(path)?;
    Dataset::from_json(&source)
}
