//! # mapkit-color
//!
//! Color math for map style generation.
//!
//! A style document carries its colors as CSS strings. This crate parses
//! them, runs a configurable edit pipeline over each one and writes them
//! back in the notation they came in.
//!
//! - [`channel`] - RGB channel operations (exposure, contrast, multiply)
//! - [`model`] - [`Rgba`] / [`Hsla`] values, parsing and serialization
//! - [`edit`] - [`ColorEdit`] configuration and the [`ColorEditor`] pipeline
//!
//! # Quick Start
//!
//! ```rust
//! use mapkit_color::{ColorEdit, edit_color};
//!
//! let edit = ColorEdit::new()
//!     .with_hue_rotation(180.0)
//!     .with_saturation(-0.5);
//!
//! let out = edit_color("rgb(200, 80, 40)", &edit).unwrap();
//! assert!(out.starts_with("rgb("));
//! ```
//!
//! # Used By
//!
//! - `mapkit-style` - applies the pipeline to every color of a style

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
pub mod channel;
pub mod edit;
pub mod model;

pub use channel::{
    apply_brightness_rgb, apply_brightness_single, apply_contrast_rgb, apply_contrast_single,
    apply_multiplication_rgb, apply_multiplication_single, RgbArray,
};
pub use edit::{edit_color, ColorEdit, ColorEditor};
pub use error::{ColorError, ColorResult};
pub use model::{is_color_description, ColorFormat, Hsla, Rgba};
