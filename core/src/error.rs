use crate::RegionId;

/// Errors produced while building constraints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// Edge pinning was requested for a region that is not attached to a parent.
    #[error("region {region} has no parent region")]
    MissingParentRegion {
        /// The unparented region.
        region: RegionId,
    },
    /// Margin pinning was requested for a region whose parent is a layout
    /// guide, which has no margins.
    #[error("region {region} cannot pin its margins to {parent}, which is not a view")]
    ParentNotView {
        /// The region being pinned.
        region: RegionId,
        /// Its parent, a layout guide.
        parent: RegionId,
    },
}

/// Result type used throughout `waterui-anchor`.
pub type Result<T, E = Error> = core::result::Result<T, E>;
