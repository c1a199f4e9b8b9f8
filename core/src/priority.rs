//! Constraint priorities.

use core::fmt::{self, Display};

/// How strongly a constraint should be satisfied when the layout is
/// over-constrained.
///
/// The scale is defined by the host solver (conventionally `1..=1000`). The
/// value is passed through unchanged; it is never clamped or validated here.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Priority(f32);

impl Priority {
    /// The constraint must be satisfied.
    pub const REQUIRED: Self = Self(1000.0);
    /// Priority with which a button resists compressing its content.
    pub const DEFAULT_HIGH: Self = Self(750.0);
    /// Priority at which a window can be resized by dragging.
    pub const DRAG_THAT_CAN_RESIZE_WINDOW: Self = Self(510.0);
    /// Priority with which a button hugs its content.
    pub const DEFAULT_LOW: Self = Self(250.0);
    /// Priority used when sizing a view to its fitting size.
    pub const FITTING_SIZE_COMPRESSION: Self = Self(50.0);

    /// Creates a priority from a raw magnitude.
    #[must_use]
    pub const fn new(value: f32) -> Self {
        Self(value)
    }

    /// Returns the raw magnitude.
    #[must_use]
    pub const fn value(self) -> f32 {
        self.0
    }

    /// Returns true for [`Priority::REQUIRED`].
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn is_required(self) -> bool {
        self.0 == Self::REQUIRED.0
    }
}

impl Default for Priority {
    fn default() -> Self {
        Self::REQUIRED
    }
}

impl From<f32> for Priority {
    fn from(value: f32) -> Self {
        Self(value)
    }
}

impl Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_required() {
        assert_eq!(Priority::default(), Priority::REQUIRED);
        assert!(Priority::default().is_required());
        assert!(!Priority::DEFAULT_LOW.is_required());
    }

    #[test]
    fn passes_out_of_range_values_through() {
        assert_eq!(Priority::new(4000.0).value(), 4000.0);
        assert_eq!(Priority::from(-1.0).value(), -1.0);
    }
}
