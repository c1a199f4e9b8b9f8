#![doc = include_str!("../README.md")]
#![allow(clippy::multiple_crate_versions)]

mod macros;
pub mod activate;
pub mod debug;

#[doc(inline)]
pub use activate::{Activatable, ActiveConstraints, ConstraintSink, activate};

#[doc(inline)]
pub use waterui_anchor_core::{
    Anchors, Attribute, Axis, AxisKind, Constraint, ConstraintRecord, Dimension, Error,
    Horizontal, LayoutItem, LayoutRegion, Operand, Priority, RegionId, RegionKind, Relation,
    Result, Vertical, ViewAnchors, ViewRegion,
};
#[doc(inline)]
pub use waterui_anchor_layout::{EdgeInsets, fill, fill_margins, pin_edges, pin_margins, without};

pub mod prelude {
    //! A collection of commonly used traits and types for easy importing.
    //!
    //! # Example
    //!
    //! ```rust
    //! use waterui_anchor::prelude::*;
    //!
    //! #[derive(Debug)]
    //! struct Card;
    //!
    //! impl LayoutRegion for Card {
    //!     fn id(&self) -> RegionId {
    //!         RegionId::new(1)
    //!     }
    //!
    //!     fn parent(&self) -> Option<&dyn LayoutRegion> {
    //!         None
    //!     }
    //! }
    //!
    //! let card = Card;
    //! let constraint = card.width().equal_to(card.height() * 2.0);
    //! assert_eq!(constraint.multiplier(), 2.0);
    //! ```
    pub use super::{
        Activatable, ActiveConstraints, Anchors, Constraint, ConstraintSink, EdgeInsets,
        LayoutRegion, Priority, RegionId, ViewAnchors, ViewRegion, activate, batch, fill,
        fill_margins, pin_edges, pin_margins, without,
    };
}
