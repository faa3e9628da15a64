use haversine::{Location as HaversineLocation, Units, distance};

use crate::domain::location::{entity::AreaType, value_objects::Coordinate};

/// How far a returned location may sit from its reference area.
pub const REFERENCE_RADIUS_KM: f64 = 0.2;

#[derive(Debug, Clone, Copy)]
pub struct ReferenceArea {
    pub name: &'static str,
    pub coordinate: Coordinate,
    pub area_type: AreaType,
}

/// Mumbai reference areas, in the order they are listed to the model.
pub static REFERENCE_AREAS: [ReferenceArea; 10] = [
    area("Nariman Point", 18.9242, 72.8234, AreaType::Prime),
    area("Bandra Kurla Complex", 19.0589, 72.8656, AreaType::Prime),
    area("Worli", 18.9986, 72.8174, AreaType::Prime),
    area("Lower Parel", 18.9932, 72.8262, AreaType::Prime),
    area("Andheri West", 19.1351, 72.8146, AreaType::Prime),
    area("Malad West", 19.1871, 72.8401, AreaType::NonPrime),
    area("Goregaon East", 19.1663, 72.8526, AreaType::NonPrime),
    area("Kurla East", 19.0798, 72.8845, AreaType::NonPrime),
    area("Chembur", 19.0522, 72.9005, AreaType::NonPrime),
    area("Wadala", 19.0178, 72.8662, AreaType::NonPrime),
];

const fn area(name: &'static str, lat: f64, lon: f64, area_type: AreaType) -> ReferenceArea {
    ReferenceArea {
        name,
        coordinate: Coordinate { lat, lon },
        area_type,
    }
}

pub fn areas_of_type(area_type: AreaType) -> impl Iterator<Item = &'static ReferenceArea> {
    REFERENCE_AREAS.iter().filter(move |a| a.area_type == area_type)
}

pub fn distance_km(from: Coordinate, to: Coordinate) -> f64 {
    distance(
        HaversineLocation {
            latitude: from.lat,
            longitude: from.lon,
        },
        HaversineLocation {
            latitude: to.lat,
            longitude: to.lon,
        },
        Units::Kilometers,
    )
}

/// Closest reference area to `coord` and its distance in kilometres.
pub fn nearest_reference_area(coord: Coordinate) -> (&'static ReferenceArea, f64) {
    REFERENCE_AREAS
        .iter()
        .map(|a| (a, distance_km(coord, a.coordinate)))
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .unwrap_or((&REFERENCE_AREAS[0], f64::INFINITY))
}
