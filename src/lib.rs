//! Turns repaired icon SVGs into the artifacts a mobile app ships: Android
//! vector drawables with a theme fill and SF Symbols template documents
//! placed in an Xcode asset catalog.

pub mod catalog;
pub mod config;
pub mod drawable;
mod error;
pub mod icon;
pub mod slot;
pub mod solidify;
pub mod template;
pub mod transform;

pub use config::Config;
pub use error::{Error, Result};
pub use icon::IconArtifacts;
pub use slot::{Placement, Slot, SlotTable};
pub use template::{PreviewTemplate, SymbolTemplate};
pub use transform::{transform_paths_for_slot, AxisMode, PathTransformer, FALLBACK_PATH};
