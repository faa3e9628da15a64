//! Server-rendered HTML pages.
//!
//! Pages are assembled from `&'static str` fragments plus the per-request data,
//! so no template files are read at runtime.

pub mod error_page;
pub mod map_page;

pub use error_page::render_error_page;
pub use map_page::render_map_page;
