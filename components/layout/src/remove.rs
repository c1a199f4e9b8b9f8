//! Editing a set of constraints before it is activated.

use alloc::vec::Vec;

use waterui_anchor_core::{Axis, Constraint, LayoutItem};

/// Removes the first constraint whose first attribute is `item`'s attribute.
///
/// Only the attribute is compared; the region is not. The remaining
/// constraints keep their relative order, and the input is returned as-is when
/// nothing matches.
#[must_use]
pub fn without<'a, A: Axis>(
    mut constraints: Vec<Constraint<'a>>,
    item: &LayoutItem<'_, A>,
) -> Vec<Constraint<'a>> {
    if let Some(index) = constraints
        .iter()
        .position(|constraint| constraint.first_attribute() == item.attribute())
    {
        constraints.remove(index);
    }
    constraints
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;
    use waterui_anchor_core::{Anchors, Attribute, LayoutRegion, RegionId};

    #[derive(Debug)]
    struct MockView(u64);

    impl LayoutRegion for MockView {
        fn id(&self) -> RegionId {
            RegionId::new(self.0)
        }

        fn parent(&self) -> Option<&dyn LayoutRegion> {
            None
        }
    }

    #[test]
    fn removes_only_the_first_match() {
        let a = MockView(1);
        let b = MockView(2);
        let constraints = vec![
            a.width().equal_to(10.0),
            a.height().equal_to(20.0),
            a.width().equal_to(b.width()),
        ];

        let remaining = without(constraints, &a.width());

        assert_eq!(remaining.len(), 2);
        assert_eq!(remaining[0].first_attribute(), Attribute::Height);
        assert_eq!(remaining[1].first_attribute(), Attribute::Width);
        assert!(!remaining[1].is_constant());
    }

    #[test]
    fn no_match_is_a_no_op() {
        let a = MockView(1);
        let constraints = vec![a.width().equal_to(10.0), a.height().equal_to(20.0)];

        let remaining = without(constraints.clone(), &a.top());

        assert_eq!(remaining, constraints);
    }

    #[test]
    fn matches_by_attribute_not_region() {
        let a = MockView(1);
        let b = MockView(2);
        let constraints = vec![a.height().equal_to(20.0)];

        assert!(without(constraints, &b.height()).is_empty());
    }
}
