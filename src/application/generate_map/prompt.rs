use std::fmt::Write;

use crate::{
    domain::location::{entity::AreaType, value_objects::LocationQuery},
    infrastructure::geocoding::reference_areas::{REFERENCE_RADIUS_KM, areas_of_type},
};

pub const EXPECTED_PER_TYPE: usize = 5;

fn area_list(area_type: AreaType) -> String {
    let mut out = String::new();
    for area in areas_of_type(area_type) {
        let _ = writeln!(
            out,
            "  * {} ({:.4}° N, {:.4}° E)",
            area.name, area.coordinate.lat, area.coordinate.lon
        );
    }
    out
}

/// Instruction asking the model for five prime and five non-prime locations
/// as a quote-free JSON-like array.
pub fn build_prompt(query: &LocationQuery) -> String {
    let LocationQuery {
        area,
        city,
        language,
    } = query;
    let total = EXPECTED_PER_TYPE * 2;
    let per_type = EXPECTED_PER_TYPE;
    let prime = area_list(AreaType::Prime);
    let non_prime = area_list(AreaType::NonPrime);
    let radius = REFERENCE_RADIUS_KM;

    format!(
        r#"Based on the user query: "{area}"
Return EXACTLY {total} locations ({per_type} prime + {per_type} non-prime) that match these criteria:
1. Must be within a specified area/address in {city}
2. Must match the type of location requested (e.g., building, office, mall, residential etc.)
3. Must be real, existing locations in {city}

STRICT LOCATION RULES:
- Show EXACTLY {per_type} locations from these Prime Areas (if they match criteria):
{prime}
- Show EXACTLY {per_type} locations from these Non-Prime Areas (if they match criteria):
{non_prime}
FORMATTING RULES:
1. NO QUOTES OR SPECIAL CHARACTERS:
   - Use simple text without quotes
   - Replace apostrophes with spaces
   - Use hyphens for compound names
   - Example: Tech-Park-Name instead of "Tech Park Name"

2. DATA FORMAT:
[{{
    place_name: Name-Without-Quotes,
    address: Exact-Road-Name Area-Name {city},
    lat: <coordinate>,
    lon: <coordinate>,
    area_type: prime or non-prime,
    details: {{
        school_districts: Plain text in {language},
        public_transport: Plain text in {language},
        local_amenities: Plain text in {language},
        zoning_info: Plain text in {language}
    }}
}}]

VALIDATION RULES:
- Each location MUST be within {radius}km of specified area coordinates
- Each location MUST match the specified criteria exactly
- Each location MUST be a real, verifiable place
- Must return EXACTLY {total} locations total
- All text fields must be quote-free
"#
    )
}
