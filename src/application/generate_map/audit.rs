
use super::prompt::EXPECTED_PER_TYPE;
use crate::{
    domain::location::{
        entity::{AreaType, LocationRecord},
        value_objects::Coordinate,
    },
    infrastructure::geocoding::{REFERENCE_RADIUS_KM, nearest_reference_area},
};

/// How a reply compares with what the prompt asked for.
///
/// Nothing here rejects a reply; it only feeds the logs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocationAudit {
    pub total: usize,
    pub prime: usize,
    pub non_prime: usize,
    pub outside_radius: usize,
}

impl LocationAudit {
    pub fn matches_request(&self) -> bool {
        self.prime == EXPECTED_PER_TYPE
            && self.non_prime == EXPECTED_PER_TYPE
            && self.outside_radius == 0
    }
}

pub fn audit_locations(records: &[LocationRecord]) -> LocationAudit {
    let mut audit = LocationAudit {
        total: records.len(),
        ..Default::default()
    };

    for record in records {
        match record.area_type {
            AreaType::Prime => audit.prime += 1,
            AreaType::NonPrime => audit.non_prime += 1,
        }
        let (_, km) = nearest_reference_area(Coordinate::new(record.lat, record.lon));
        if km > REFERENCE_RADIUS_KM {
            audit.outside_radius += 1;
        }
    }

    audit
}
