//! Axis tags and the attribute sets that belong to each axis.
//!
//! The tags are zero-sized markers. They never exist at runtime in any
//! meaningful way; they only parameterise [`LayoutItem`](crate::LayoutItem) so
//! that relating a horizontal attribute to a vertical one does not type-check.

use core::fmt::Debug;

use crate::Attribute;

mod sealed {
    pub trait Sealed {}
}

/// Runtime name of an axis tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AxisKind {
    /// Left, right, leading, trailing and horizontal centers.
    Horizontal,
    /// Top, bottom, baselines and vertical centers.
    Vertical,
    /// Width and height.
    Dimension,
}

/// Compile-time classification of an attribute.
///
/// This trait is sealed: the three tags below are the only axes.
pub trait Axis: sealed::Sealed + Debug + Clone + Copy + 'static {
    /// The attributes that may be wrapped by an item of this axis.
    type Attribute: Into<Attribute> + Debug + Clone + Copy;

    /// The runtime name of this axis.
    const KIND: AxisKind;
}

/// Tag for horizontal position attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Horizontal;

/// Tag for vertical position attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Vertical;

/// Tag for size attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Dimension;

impl sealed::Sealed for Horizontal {}
impl sealed::Sealed for Vertical {}
impl sealed::Sealed for Dimension {}

impl Axis for Horizontal {
    type Attribute = HorizontalAttribute;
    const KIND: AxisKind = AxisKind::Horizontal;
}

impl Axis for Vertical {
    type Attribute = VerticalAttribute;
    const KIND: AxisKind = AxisKind::Vertical;
}

impl Axis for Dimension {
    type Attribute = DimensionAttribute;
    const KIND: AxisKind = AxisKind::Dimension;
}

/// Attributes on the horizontal axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HorizontalAttribute {
    /// Left edge.
    Left,
    /// Right edge.
    Right,
    /// Leading edge.
    Leading,
    /// Trailing edge.
    Trailing,
    /// Horizontal center.
    CenterX,
    /// Left margin.
    LeftMargin,
    /// Right margin.
    RightMargin,
    /// Leading margin.
    LeadingMargin,
    /// Trailing margin.
    TrailingMargin,
    /// Horizontal center within the margins.
    CenterXWithinMargins,
}

/// Attributes on the vertical axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VerticalAttribute {
    /// Top edge.
    Top,
    /// Bottom edge.
    Bottom,
    /// Vertical center.
    CenterY,
    /// First baseline.
    FirstBaseline,
    /// Last baseline.
    LastBaseline,
    /// Top margin.
    TopMargin,
    /// Bottom margin.
    BottomMargin,
    /// Vertical center within the margins.
    CenterYWithinMargins,
}

/// Size attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DimensionAttribute {
    /// Width.
    Width,
    /// Height.
    Height,
}

impl From<HorizontalAttribute> for Attribute {
    fn from(value: HorizontalAttribute) -> Self {
        match value {
            HorizontalAttribute::Left => Self::Left,
            HorizontalAttribute::Right => Self::Right,
            HorizontalAttribute::Leading => Self::Leading,
            HorizontalAttribute::Trailing => Self::Trailing,
            HorizontalAttribute::CenterX => Self::CenterX,
            HorizontalAttribute::LeftMargin => Self::LeftMargin,
            HorizontalAttribute::RightMargin => Self::RightMargin,
            HorizontalAttribute::LeadingMargin => Self::LeadingMargin,
            HorizontalAttribute::TrailingMargin => Self::TrailingMargin,
            HorizontalAttribute::CenterXWithinMargins => Self::CenterXWithinMargins,
        }
    }
}

impl From<VerticalAttribute> for Attribute {
    fn from(value: VerticalAttribute) -> Self {
        match value {
            VerticalAttribute::Top => Self::Top,
            VerticalAttribute::Bottom => Self::Bottom,
            VerticalAttribute::CenterY => Self::CenterY,
            VerticalAttribute::FirstBaseline => Self::FirstBaseline,
            VerticalAttribute::LastBaseline => Self::LastBaseline,
            VerticalAttribute::TopMargin => Self::TopMargin,
            VerticalAttribute::BottomMargin => Self::BottomMargin,
            VerticalAttribute::CenterYWithinMargins => Self::CenterYWithinMargins,
        }
    }
}

impl From<DimensionAttribute> for Attribute {
    fn from(value: DimensionAttribute) -> Self {
        match value {
            DimensionAttribute::Width => Self::Width,
            DimensionAttribute::Height => Self::Height,
        }
    }
}
