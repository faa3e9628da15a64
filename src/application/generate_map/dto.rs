use serde::Deserialize;

use super::audit::LocationAudit;
use crate::domain::location::{
    entity::LocationRecord,
    errors::LocationError,
    value_objects::{Coordinate, LocationQuery},
};

/// Query string of `GET /map`. Both fields are optional and fall back to the
/// configured defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerateMapRequest {
    pub query: Option<String>,
    pub language: Option<String>,
}

impl GenerateMapRequest {
    pub fn into_query(
        self,
        default_area: &str,
        city: &str,
        default_language: &str,
    ) -> Result<LocationQuery, LocationError> {
        let area = self.query.unwrap_or_else(|| default_area.to_string());
        let language = self.language.unwrap_or_else(|| default_language.to_string());
        Ok(LocationQuery::new(area, city.to_string(), language)?)
    }
}

#[derive(Debug, Clone)]
pub struct LocationMap {
    pub records: Vec<LocationRecord>,
    pub center: Coordinate,
    pub audit: LocationAudit,
}
