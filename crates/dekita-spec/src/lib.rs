//! Dekita store asset parameters
//!
//! This crate holds the parameter types for the two store assets generated for
//! the Dekita Calendar app: the 1024x500 feature graphic and the 1024x1024 app
//! icon. Every field has a default matching the shipped artwork, so an empty
//! config document reproduces the assets exactly.
//!
//! # Example
//!
//! ```
//! use dekita_spec::{AssetConfig, FontSource};
//! use dekita_spec::validation::validate_config;
//!
//! let config = AssetConfig::from_json(r#"{ "icon": { "size": 512 } }"#).unwrap();
//! assert_eq!(config.icon.size, 512);
//! assert_eq!(config.feature_graphic.width, 1024);
//!
//! let config = config.with_font(FontSource::SystemDefault);
//! assert!(validate_config(&config).is_ok());
//! ```
//!
//! # Modules
//!
//! - [`color`]: `#RRGGBB` color values
//! - [`config`]: Top-level config document
//! - [`error`]: Error and warning codes, backend error trait
//! - [`font`]: Font source selection
//! - [`params`]: Feature graphic and icon parameters
//! - [`validation`]: Parameter validation

pub mod color;
pub mod config;
pub mod error;
pub mod font;
pub mod params;
pub mod validation;

pub use color::{HexColor, HexColorError};
pub use config::AssetConfig;
pub use error::{
    BackendError, ErrorCode, SpecError, ValidationError, ValidationResult, ValidationWarning,
    WarningCode,
};
pub use font::FontSource;
pub use params::{
    Badge, BadgeRowParams, CalendarCardParams, DateMarkerParams, FeatureGraphicParams, IconGridParams,
    IconParams, RingParams, TextLine,
};
