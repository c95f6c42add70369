//! Portal engine facade

mod engine;

pub use engine::PortalEngine;
