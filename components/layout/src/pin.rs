//! Pinning a region's four edges to its parent.
//!
//! Every combinator here returns exactly four constraints in a fixed order:
//! top, bottom, leading, trailing. Callers may rely on that order, for
//! instance to drop one edge with [`without`](crate::without).

use alloc::{vec, vec::Vec};

use waterui_anchor_core::{
    Attribute, Constraint, Error, Horizontal, HorizontalAttribute, LayoutItem, LayoutRegion,
    RegionKind, Result, Vertical, VerticalAttribute, ViewRegion,
};

use crate::EdgeInsets;

/// The four attributes a pinning pass relates.
#[derive(Debug, Clone, Copy)]
struct Edges {
    top: VerticalAttribute,
    bottom: VerticalAttribute,
    leading: HorizontalAttribute,
    trailing: HorizontalAttribute,
}

impl Edges {
    const FRAME: Self = Self {
        top: VerticalAttribute::Top,
        bottom: VerticalAttribute::Bottom,
        leading: HorizontalAttribute::Leading,
        trailing: HorizontalAttribute::Trailing,
    };

    const MARGINS: Self = Self {
        top: VerticalAttribute::TopMargin,
        bottom: VerticalAttribute::BottomMargin,
        leading: HorizontalAttribute::LeadingMargin,
        trailing: HorizontalAttribute::TrailingMargin,
    };

    /// Finds the region to pin against, checking it exposes these edges.
    fn parent_of(self, region: &dyn LayoutRegion) -> Result<&dyn LayoutRegion> {
        let Some(parent) = region.parent() else {
            let error = Error::MissingParentRegion {
                region: region.id(),
            };
            tracing::debug!(%error, "refusing to pin an unparented region");
            return Err(error);
        };

        if Attribute::from(self.top).is_view_only() && parent.kind() == RegionKind::Guide {
            let error = Error::ParentNotView {
                region: region.id(),
                parent: parent.id(),
            };
            tracing::debug!(%error, "refusing to pin margins to a layout guide");
            return Err(error);
        }

        Ok(parent)
    }

    fn pin<'a>(
        self,
        region: &'a dyn LayoutRegion,
        parent: &'a dyn LayoutRegion,
        insets: EdgeInsets,
    ) -> Vec<Constraint<'a>> {
        let vertical = |attribute| LayoutItem::<Vertical>::new(region, attribute);
        let horizontal = |attribute| LayoutItem::<Horizontal>::new(region, attribute);
        let parent_vertical = |attribute| LayoutItem::<Vertical>::new(parent, attribute);
        let parent_horizontal = |attribute| LayoutItem::<Horizontal>::new(parent, attribute);

        vec![
            vertical(self.top).equal_to(parent_vertical(self.top) + insets.top),
            vertical(self.bottom).equal_to(parent_vertical(self.bottom) - insets.bottom),
            horizontal(self.leading).equal_to(parent_horizontal(self.leading) + insets.left),
            horizontal(self.trailing).equal_to(parent_horizontal(self.trailing) - insets.right),
        ]
    }
}

/// Pins the top, bottom, leading and trailing edges of `region` to the same
/// edges of its parent, inset inward by `insets`.
///
/// # Errors
///
/// Returns [`Error::MissingParentRegion`] if `region` has no parent. No
/// constraint is built in that case.
pub fn pin_edges<'a>(
    region: &'a dyn LayoutRegion,
    insets: impl Into<EdgeInsets>,
) -> Result<Vec<Constraint<'a>>> {
    let parent = Edges::FRAME.parent_of(region)?;
    Ok(Edges::FRAME.pin(region, parent, insets.into()))
}

/// Like [`pin_edges`], but relates the margin attributes of both regions.
///
/// # Errors
///
/// Returns [`Error::MissingParentRegion`] if `region` has no parent, and
/// [`Error::ParentNotView`] if the parent is a layout guide.
pub fn pin_margins<'a, R: ViewRegion>(
    region: &'a R,
    insets: impl Into<EdgeInsets>,
) -> Result<Vec<Constraint<'a>>> {
    let region: &'a dyn LayoutRegion = region;
    let parent = Edges::MARGINS.parent_of(region)?;
    Ok(Edges::MARGINS.pin(region, parent, insets.into()))
}

/// Pins `region` flush against its parent's edges.
///
/// # Errors
///
/// Returns [`Error::MissingParentRegion`] if `region` has no parent.
pub fn fill(region: &dyn LayoutRegion) -> Result<Vec<Constraint<'_>>> {
    pin_edges(region, EdgeInsets::ZERO)
}

/// Pins `region` flush against its parent's margins.
///
/// # Errors
///
/// See [`pin_margins`].
pub fn fill_margins<R: ViewRegion>(region: &R) -> Result<Vec<Constraint<'_>>> {
    pin_margins(region, EdgeInsets::ZERO)
}
