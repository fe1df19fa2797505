//! morphbox-region - Reconstruction, labeling and watershed
//!
//! This crate provides region processing built on conditional
//! propagation:
//!
//! - **Reconstruction** - [`infrec`] / [`suprec`] and the filters derived
//!   from them (opening/closing by reconstruction, hole closing, edge
//!   object removal, h-minima/h-maxima)
//! - **Labeling** - [`label`] and connected component statistics
//! - **Watershed** - [`cwatershed`] from markers, [`watershed`] from
//!   regional minima
//!
//! # Examples
//!
//! ## Labeling
//!
//! ```
//! use morphbox_core::{Image, PixelType};
//! use morphbox_morph::Sel;
//! use morphbox_region::label;
//!
//! let f = Image::from_rows(PixelType::Binary, &[[0, 1, 0, 1, 1], [1, 0, 0, 1, 0]]).unwrap();
//! let labels = label(&f, &Sel::create_cross(1)).unwrap();
//! assert_eq!(labels.row_data(0), &[0, 1, 0, 2, 2]);
//! assert_eq!(labels.row_data(1), &[3, 0, 0, 2, 0]);
//! ```
//!
//! ## Watershed
//!
//! ```
//! use morphbox_core::{Image, PixelType};
//! use morphbox_morph::Sel;
//! use morphbox_region::{WatershedOutput, cwatershed};
//!
//! let relief = Image::from_rows(PixelType::Uint8, &[[1, 2, 9, 2, 1]]).unwrap();
//! let markers = Image::from_rows(PixelType::Binary, &[[1, 0, 0, 0, 1]]).unwrap();
//! let lines = cwatershed(&relief, &markers, &Sel::create_cross(1), WatershedOutput::Lines).unwrap();
//! assert_eq!(lines.data(), &[0, 0, 1, 0, 0]);
//! ```

pub mod conncomp;
pub mod error;
pub mod label;
pub mod seedfill;
pub mod watershed;

// Re-export error types
pub use error::{RegionError, RegionResult};

// Re-export conncomp types and functions
pub use conncomp::{
    Bounds, ConnectedComponent, ConnectivityType, area_open, component_stats, extract_component,
    find_connected_components,
};

// Re-export label functions
pub use label::{count_components, label};

// Re-export seedfill functions
pub use seedfill::{
    close_by_reconstruction, close_holes, edge_off, hmax, hmin, infrec, open_by_reconstruction,
    suprec,
};

// Re-export watershed types and functions
pub use watershed::{
    WatershedOptions, WatershedOutput, cwatershed, regional_maxima, regional_minima, watershed,
};
