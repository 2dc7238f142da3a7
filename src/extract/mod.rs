// src/extract/mod.rs
//
// The Table Acquisition boundary: image bytes in, zero or more raw grids
// out. Everything here wraps the external layout-recognition service; the
// transform core never sees any of it.

pub mod cache;
pub mod client;
pub mod config;
pub mod html;
pub mod prep;

pub use cache::ResultCache;
pub use client::StructureClient;
pub use config::EngineConfig;
pub use html::grid_from_html;
pub use prep::{prepare_image, MAX_SIDE};
