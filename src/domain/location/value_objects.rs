use validator::Validate;

use super::entity::LocationRecord;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// Arithmetic mean of all record coordinates. `None` when there are no records.
pub fn map_center(records: &[LocationRecord]) -> Option<Coordinate> {
    if records.is_empty() {
        return None;
    }
    let count = records.len() as f64;
    let (lat_sum, lon_sum) = records
        .iter()
        .fold((0.0, 0.0), |(lat, lon), r| (lat + r.lat, lon + r.lon));
    Some(Coordinate::new(lat_sum / count, lon_sum / count))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerColor {
    Blue,
    Orange,
}

impl MarkerColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            MarkerColor::Blue => "blue",
            MarkerColor::Orange => "orange",
        }
    }
}

/// What the model is asked to find, and in which language to describe it.
#[derive(Debug, Clone, Validate)]
pub struct LocationQuery {
    #[validate(length(min = 2, max = 100))]
    pub area: String,

    #[validate(length(min = 2, max = 60))]
    pub city: String,

    #[validate(length(min = 2, max = 40))]
    pub language: String,
}

impl LocationQuery {
    pub fn new(
        area: String,
        city: String,
        language: String,
    ) -> Result<Self, validator::ValidationErrors> {
        let query = Self {
            area: area.trim().to_string(),
            city: city.trim().to_string(),
            language: language.trim().to_string(),
        };
        query.validate()?;
        Ok(query)
    }
}
