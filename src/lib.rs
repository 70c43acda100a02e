//! panel-bind: typed binding layer for server-rendered admin panels.
//!
//! The server emits static markup with structured data encoded into marker
//! elements and a hidden filter form; this crate reads that encoding, drives
//! external widgets (charts, data tables, maps, rich-text editors) through
//! backend traits, and writes user interaction back into the canonical
//! request state that becomes the next server round-trip.

pub mod api;
pub mod backend;
pub mod core;
pub mod dom;
pub mod error;
pub mod interaction;
pub mod telemetry;

pub use api::{PanelBackends, PanelBinder};
pub use error::{BindError, BindResult};
