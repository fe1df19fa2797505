//! morphbox - Mathematical morphology toolbox
//!
//! # Overview
//!
//! morphbox provides the core of a mathematical morphology toolbox for
//! 2-D binary and gray-scale images:
//!
//! - Typed images (`binary`, `uint8`, `uint16`, `int32`) and pixelwise
//!   operators with an explicit promotion table
//! - Flat and non-flat structuring elements
//! - Dilation, erosion and conditional propagation
//! - Reconstruction, labeling and watershed segmentation
//!
//! # Example
//!
//! ```
//! use morphbox::morph::Sel;
//! use morphbox::region::{infrec, label};
//! use morphbox::{Image, PixelType};
//!
//! let g = Image::from_rows(PixelType::Binary, &[[1, 1, 0, 1], [0, 1, 0, 1]]).unwrap();
//! let marker = Image::from_rows(PixelType::Binary, &[[0, 0, 0, 1], [0, 0, 0, 0]]).unwrap();
//!
//! let kept = infrec(&marker, &g, &Sel::create_cross(1)).unwrap();
//! assert_eq!(kept.count_nonzero(), 2);
//!
//! let labels = label(&g, &Sel::create_cross(1)).unwrap();
//! assert_eq!(labels.min_max(), (0, 2));
//! ```

// Re-export core types (primary data structures used everywhere)
pub use morphbox_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use morphbox_morph as morph;
pub use morphbox_region as region;
