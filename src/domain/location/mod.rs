pub mod entity;
pub mod errors;
pub mod repair;
pub mod value_objects;
