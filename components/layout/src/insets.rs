//! Inward distances from each edge of a parent region.

/// Insets applied to the four edges when pinning a region inside its parent.
///
/// All values point inward: a positive `bottom` moves the pinned bottom edge
/// up, a positive `right` moves the trailing edge toward the leading one.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EdgeInsets {
    /// Distance from the parent's top edge.
    pub top: f32,
    /// Distance from the parent's left (leading) edge.
    pub left: f32,
    /// Distance from the parent's bottom edge.
    pub bottom: f32,
    /// Distance from the parent's right (trailing) edge.
    pub right: f32,
}

#[allow(clippy::cast_possible_truncation)]
impl<T: Into<f64>> From<T> for EdgeInsets {
    fn from(value: T) -> Self {
        let v = value.into() as f32;
        Self::all(v)
    }
}

impl Default for EdgeInsets {
    fn default() -> Self {
        Self::ZERO
    }
}

impl EdgeInsets {
    /// No inset on any edge.
    pub const ZERO: Self = Self::all(0.0);

    /// Creates an [`EdgeInsets`] value with explicit edges.
    #[must_use]
    pub const fn new(top: f32, left: f32, bottom: f32, right: f32) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
        }
    }

    /// Returns equal insets on every edge.
    #[must_use]
    pub const fn all(value: f32) -> Self {
        Self {
            top: value,
            left: value,
            bottom: value,
            right: value,
        }
    }

    /// Returns symmetric vertical and horizontal insets.
    #[must_use]
    pub const fn symmetric(vertical: f32, horizontal: f32) -> Self {
        Self {
            top: vertical,
            left: horizontal,
            bottom: vertical,
            right: horizontal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_zero() {
        assert_eq!(EdgeInsets::default(), EdgeInsets::ZERO);
        assert_eq!(EdgeInsets::ZERO, EdgeInsets::new(0.0, 0.0, 0.0, 0.0));
    }

    #[test]
    fn numbers_convert_to_uniform_insets() {
        assert_eq!(EdgeInsets::from(8), EdgeInsets::all(8.0));
        assert_eq!(EdgeInsets::from(2.5_f32), EdgeInsets::all(2.5));
    }

    #[test]
    fn symmetric_pairs_opposite_edges() {
        let insets = EdgeInsets::symmetric(4.0, 12.0);
        assert_eq!(insets.top, insets.bottom);
        assert_eq!(insets.left, 12.0);
        assert_eq!(insets.right, 12.0);
    }
}
