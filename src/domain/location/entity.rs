use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::value_objects::MarkerColor;

/// One candidate location returned by the model.
///
/// Records are built fresh for every request from the repaired model reply and
/// are dropped once the page has been rendered. Nothing here is validated
/// against an authoritative source: `area_type` is whatever classification the
/// model chose, and the coordinates are only as good as its answer.
///
/// # Decoding
/// Decoding is lenient where the reply commonly drifts:
/// - a missing `place_name` becomes `"Unknown"`;
/// - a missing or null `address`, `details` object or detail field becomes `""`;
/// - `lat`/`lon` may be JSON numbers or numeric strings, but must be present,
///   finite and within `[-90, 90]` / `[-180, 180]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationRecord {
    #[serde(default = "unknown_place")]
    pub place_name: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub address: String,

    #[serde(deserialize_with = "latitude")]
    pub lat: f64,

    #[serde(deserialize_with = "longitude")]
    pub lon: f64,

    #[serde(default)]
    pub area_type: AreaType,

    #[serde(default, deserialize_with = "null_as_default")]
    pub details: LocationDetails,
}

/// Free-text neighbourhood notes shown in the detail panel.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocationDetails {
    #[serde(deserialize_with = "null_as_default")]
    pub school_districts: String,
    #[serde(deserialize_with = "null_as_default")]
    pub public_transport: String,
    #[serde(deserialize_with = "null_as_default")]
    pub local_amenities: String,
    #[serde(deserialize_with = "null_as_default")]
    pub zoning_info: String,
}

/// Two-valued zone classification used for marker coloring.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AreaType {
    Prime,
    #[default]
    NonPrime,
}

impl AreaType {
    /// Anything other than a trimmed, case-insensitive `prime` is non-prime.
    pub fn parse(raw: &str) -> Self {
        if raw.trim().eq_ignore_ascii_case("prime") {
            AreaType::Prime
        } else {
            AreaType::NonPrime
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AreaType::Prime => "prime",
            AreaType::NonPrime => "non-prime",
        }
    }

    pub fn marker_color(&self) -> MarkerColor {
        match self {
            AreaType::Prime => MarkerColor::Blue,
            AreaType::NonPrime => MarkerColor::Orange,
        }
    }
}

impl Serialize for AreaType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for AreaType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // null and non-string values fall through to the non-prime default
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(value.as_str().map(AreaType::parse).unwrap_or_default())
    }
}

fn unknown_place() -> String {
    "Unknown".to_string()
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn lenient_degrees<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Degrees {
        Number(f64),
        Text(String),
    }

    match Degrees::deserialize(deserializer)? {
        Degrees::Number(value) => Ok(value),
        Degrees::Text(text) => text
            .trim()
            .parse::<f64>()
            .map_err(|_| serde::de::Error::custom(format!("invalid coordinate: {}", text))),
    }
}

fn bounded_degrees<'de, D>(deserializer: D, axis: &str, limit: f64) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = lenient_degrees(deserializer)?;
    // str::parse accepts "NaN" and "inf"
    if !value.is_finite() || value.abs() > limit {
        return Err(serde::de::Error::custom(format!(
            "{} out of range: {}",
            axis, value
        )));
    }
    Ok(value)
}

fn latitude<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    bounded_degrees(deserializer, "latitude", 90.0)
}

fn longitude<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    bounded_degrees(deserializer, "longitude", 180.0)
}
