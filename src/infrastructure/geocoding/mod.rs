pub mod reference_areas;

pub use reference_areas::{REFERENCE_RADIUS_KM, nearest_reference_area};
