#![no_std]
//! Core types for the `waterui-anchor` constraint DSL.
//!
//! A [`LayoutItem`] is an affine expression over one attribute of a layout
//! region: `multiplier * region.attribute + constant`. Items are tagged with an
//! [`Axis`] marker so that only compatible attributes can be related:
//!
//! - [`Horizontal`] items relate to horizontal items,
//! - [`Vertical`] items relate to vertical items,
//! - [`Dimension`] items relate to dimension items *or* to a bare number.
//!
//! Relating two items produces an inert [`Constraint`] descriptor that an
//! external solver activates later.
//!
//! # Example
//!
//! ```rust,ignore
//! use waterui_anchor_core::{Anchors, Priority};
//!
//! let constraints = [
//!     label.leading().equal_to(card.leading() + 16.0),
//!     label.width().less_than_or_equal_to(card.width() * 0.5),
//!     icon.height().equal_to(44.0).with_priority(Priority::DEFAULT_HIGH),
//! ];
//! ```

extern crate alloc;

pub mod attribute;
pub mod axis;
pub mod constraint;
mod error;
pub mod item;
pub mod priority;
pub mod region;

pub use attribute::Attribute;
pub use axis::{
    Axis, AxisKind, Dimension, DimensionAttribute, Horizontal, HorizontalAttribute, Vertical,
    VerticalAttribute,
};
pub use constraint::{Constraint, ConstraintRecord, Operand, Relation};
pub use error::{Error, Result};
pub use item::{Anchors, LayoutItem, ViewAnchors};
pub use priority::Priority;
pub use region::{LayoutRegion, RegionId, RegionKind, ViewRegion};
