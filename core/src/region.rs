//! The layout-region capability consumed by the DSL.
//!
//! Regions (views and layout guides) are owned by the host UI framework. The
//! DSL only borrows them, so every [`LayoutItem`](crate::LayoutItem) and
//! [`Constraint`](crate::Constraint) carries the borrow's lifetime.

use core::fmt::{self, Debug, Display};

/// Stable identity of a layout region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RegionId(u64);

impl RegionId {
    /// Creates a region identity from a raw value supplied by the host.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw identity value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for RegionId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

impl Display for RegionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// What kind of participant a region is in the layout tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegionKind {
    /// A visible element with content, baselines and layout margins.
    #[default]
    View,
    /// An invisible, layout-only rectangle.
    Guide,
}

/// Any participant of the layout tree that constraints can refer to.
///
/// Implementors only need to expose identity and the parent lookup used by
/// edge pinning. Attribute accessors come from the blanket
/// [`Anchors`](crate::Anchors) extension.
pub trait LayoutRegion: Debug {
    /// Identity used to compare the regions referenced by two constraints.
    fn id(&self) -> RegionId;

    /// The region this one is laid out in, if it is attached to one.
    fn parent(&self) -> Option<&dyn LayoutRegion>;

    /// Whether this region is a view or a layout guide.
    fn kind(&self) -> RegionKind {
        RegionKind::View
    }
}

/// A region that exposes baselines and layout margins.
///
/// Layout guides have neither, so they implement [`LayoutRegion`] only.
pub trait ViewRegion: LayoutRegion {}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn region_ids_display_with_a_hash() {
        assert_eq!(RegionId::new(42).to_string(), "#42");
        assert_eq!(RegionId::from(7).get(), 7);
    }

    #[test]
    fn regions_default_to_views() {
        #[derive(Debug)]
        struct Plain;

        impl LayoutRegion for Plain {
            fn id(&self) -> RegionId {
                RegionId::new(0)
            }

            fn parent(&self) -> Option<&dyn LayoutRegion> {
                None
            }
        }

        assert_eq!(Plain.kind(), RegionKind::View);
        assert!(Plain.parent().is_none());
    }
}
