//! Geometric attributes a constraint can relate.

use core::fmt::{self, Display};

use crate::AxisKind;

/// A named geometric property of a layout region.
///
/// This is the untyped identifier stored in a [`Constraint`](crate::Constraint).
/// The typed per-axis sets in [`axis`](crate::axis) convert into it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum Attribute {
    /// Left edge.
    Left,
    /// Right edge.
    Right,
    /// Top edge.
    Top,
    /// Bottom edge.
    Bottom,
    /// Leading edge (left in left-to-right layouts).
    Leading,
    /// Trailing edge (right in left-to-right layouts).
    Trailing,
    /// Width of the region.
    Width,
    /// Height of the region.
    Height,
    /// Horizontal center.
    CenterX,
    /// Vertical center.
    CenterY,
    /// Baseline of the first line of content.
    FirstBaseline,
    /// Baseline of the last line of content.
    LastBaseline,
    /// Left edge inset by the layout margins.
    LeftMargin,
    /// Right edge inset by the layout margins.
    RightMargin,
    /// Top edge inset by the layout margins.
    TopMargin,
    /// Bottom edge inset by the layout margins.
    BottomMargin,
    /// Leading edge inset by the layout margins.
    LeadingMargin,
    /// Trailing edge inset by the layout margins.
    TrailingMargin,
    /// Horizontal center between the left and right margins.
    CenterXWithinMargins,
    /// Vertical center between the top and bottom margins.
    CenterYWithinMargins,
}

impl Attribute {
    /// The axis this attribute belongs to.
    #[must_use]
    pub const fn axis(self) -> AxisKind {
        match self {
            Self::Left
            | Self::Right
            | Self::Leading
            | Self::Trailing
            | Self::CenterX
            | Self::LeftMargin
            | Self::RightMargin
            | Self::LeadingMargin
            | Self::TrailingMargin
            | Self::CenterXWithinMargins => AxisKind::Horizontal,
            Self::Top
            | Self::Bottom
            | Self::CenterY
            | Self::FirstBaseline
            | Self::LastBaseline
            | Self::TopMargin
            | Self::BottomMargin
            | Self::CenterYWithinMargins => AxisKind::Vertical,
            Self::Width | Self::Height => AxisKind::Dimension,
        }
    }

    /// Returns true if the attribute is measured relative to the layout margins.
    #[must_use]
    pub const fn is_margin(self) -> bool {
        matches!(
            self,
            Self::LeftMargin
                | Self::RightMargin
                | Self::TopMargin
                | Self::BottomMargin
                | Self::LeadingMargin
                | Self::TrailingMargin
                | Self::CenterXWithinMargins
                | Self::CenterYWithinMargins
        )
    }

    /// Returns true for baseline attributes, which only views expose.
    #[must_use]
    pub const fn is_baseline(self) -> bool {
        matches!(self, Self::FirstBaseline | Self::LastBaseline)
    }

    /// Returns true for attributes that exist on views but not on layout guides.
    #[must_use]
    pub const fn is_view_only(self) -> bool {
        self.is_margin() || self.is_baseline()
    }

    /// The identifier used in constraint descriptions, e.g. `centerX`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Leading => "leading",
            Self::Trailing => "trailing",
            Self::Width => "width",
            Self::Height => "height",
            Self::CenterX => "centerX",
            Self::CenterY => "centerY",
            Self::FirstBaseline => "firstBaseline",
            Self::LastBaseline => "lastBaseline",
            Self::LeftMargin => "leftMargin",
            Self::RightMargin => "rightMargin",
            Self::TopMargin => "topMargin",
            Self::BottomMargin => "bottomMargin",
            Self::LeadingMargin => "leadingMargin",
            Self::TrailingMargin => "trailingMargin",
            Self::CenterXWithinMargins => "centerXWithinMargins",
            Self::CenterYWithinMargins => "centerYWithinMargins",
        }
    }
}

impl Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
