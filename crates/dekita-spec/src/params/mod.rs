//! Parameter types for the two store assets.
//!
//! - [`FeatureGraphicParams`] - 1024x500 store banner with calendar card and copy
//! - [`IconParams`] - 1024x1024 app icon with binder rings and date markers

mod feature_graphic;
mod icon;

pub use feature_graphic::*;
pub use icon::*;
