//! Occupancy advisory service: a health probe and a rule based `/analyze`
//! endpoint consumed by the hotel backend.

pub mod advisor;
pub mod app;
pub mod error;
pub mod handler;
pub mod logging;
pub mod model;
pub mod schema;
pub mod settings;
