//! Filter Toggles subsystem for the place explorer.
//!
//! This crate provides the filter engine as a standalone module, with no
//! dependency on any rendering or input technology. Hosts wire it to their
//! own map layers, table widgets, and click handlers.
//!
//! Layers:
//! - `definition`: Configuration types (what a filter IS)
//! - `toggle`: Per-dimension toggle state machine (HOW a gesture mutates state)
//! - `engine`: Bucket construction and survivor composition (HOW we filter)
//! - `intersect`: Ordered-intersection helper (HOW dimensions combine)
//! - `error`: Error taxonomy

pub mod definition;
pub mod toggle;
pub mod engine;
pub mod intersect;
pub mod error;


pub use definition::*;
pub use toggle::{ChangeList, ToggleGroup};
pub use engine::{Dimension, FilterEngine};
pub use intersect::intersect_sorted;
pub use error::FilterError;
