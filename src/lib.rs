//! Locality map service.
//!
//! `GET /map` asks a generative model for prime and non-prime locations around
//! an area, repairs the model's loosely formatted JSON reply, and renders the
//! result as a Leaflet map with a client-side detail panel.

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
