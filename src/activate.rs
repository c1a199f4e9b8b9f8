//! Handing batches of constraints to a solver.
//!
//! Call sites tend to mix single constraints with the vectors returned by
//! [`pin_edges`](crate::pin_edges) and friends. [`Activatable`] captures that
//! shape explicitly, and [`activate`] walks it in order.

use crate::Constraint;

/// A constraint, or a group of activatable values.
#[derive(Debug, Clone, PartialEq)]
pub enum Activatable<'a> {
    /// A single constraint.
    Constraint(Constraint<'a>),
    /// A nested group, activated in place.
    Group(Vec<Activatable<'a>>),
}

impl Activatable<'_> {
    /// Number of constraints contained, counting through nested groups.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Constraint(_) => 1,
            Self::Group(group) => group.iter().map(Self::len).sum(),
        }
    }

    /// Returns true if no constraint is contained.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<'a> From<Constraint<'a>> for Activatable<'a> {
    fn from(constraint: Constraint<'a>) -> Self {
        Self::Constraint(constraint)
    }
}

impl<'a> From<Vec<Constraint<'a>>> for Activatable<'a> {
    fn from(constraints: Vec<Constraint<'a>>) -> Self {
        Self::Group(constraints.into_iter().map(Self::Constraint).collect())
    }
}

impl<'a, const N: usize> From<[Constraint<'a>; N]> for Activatable<'a> {
    fn from(constraints: [Constraint<'a>; N]) -> Self {
        Self::Group(constraints.into_iter().map(Self::Constraint).collect())
    }
}

impl<'a> From<Vec<Activatable<'a>>> for Activatable<'a> {
    fn from(group: Vec<Activatable<'a>>) -> Self {
        Self::Group(group)
    }
}

/// The solver-side registry that activated constraints are handed to.
pub trait ConstraintSink<'a> {
    /// Marks `constraint` active.
    fn activate(&mut self, constraint: Constraint<'a>);
}

impl<'a> ConstraintSink<'a> for Vec<Constraint<'a>> {
    fn activate(&mut self, constraint: Constraint<'a>) {
        self.push(constraint);
    }
}

/// Records activated constraints in activation order.
#[derive(Debug, Clone, Default)]
pub struct ActiveConstraints<'a> {
    constraints: Vec<Constraint<'a>>,
}

impl<'a> ActiveConstraints<'a> {
    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            constraints: Vec::new(),
        }
    }

    /// Number of active constraints.
    #[must_use]
    pub fn len(&self) -> usize {
        self.constraints.len()
    }

    /// Returns true if nothing has been activated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
    }

    /// Returns true if an equal constraint has been activated.
    #[must_use]
    pub fn contains(&self, constraint: &Constraint<'_>) -> bool {
        let record = constraint.record();
        self.constraints.iter().any(|active| active.record() == record)
    }

    /// Active constraints in activation order.
    pub fn iter(&self) -> impl Iterator<Item = &Constraint<'a>> {
        self.constraints.iter()
    }

    /// Consumes the set, returning the constraints in activation order.
    #[must_use]
    pub fn into_vec(self) -> Vec<Constraint<'a>> {
        self.constraints
    }
}

impl<'a> ConstraintSink<'a> for ActiveConstraints<'a> {
    fn activate(&mut self, constraint: Constraint<'a>) {
        self.constraints.push(constraint);
    }
}

impl<'a> IntoIterator for ActiveConstraints<'a> {
    type Item = Constraint<'a>;
    type IntoIter = std::vec::IntoIter<Constraint<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.constraints.into_iter()
    }
}

/// Activates every constraint in `batch`, descending into groups.
///
/// Traversal is pre-order: a group is activated completely, in order, before
/// the elements that follow it. Returns the number of constraints activated.
pub fn activate<'a, I, S>(batch: I, sink: &mut S) -> usize
where
    I: IntoIterator,
    I::Item: Into<Activatable<'a>>,
    S: ConstraintSink<'a> + ?Sized,
{
    let mut count = 0;
    for item in batch {
        activate_in_place(item.into(), sink, &mut count);
    }
    tracing::debug!(count, "activated constraint batch");
    count
}

fn activate_in_place<'a, S>(item: Activatable<'a>, sink: &mut S, count: &mut usize)
where
    S: ConstraintSink<'a> + ?Sized,
{
    match item {
        Activatable::Constraint(constraint) => {
            tracing::trace!(%constraint, "activating constraint");
            sink.activate(constraint);
            *count += 1;
        }
        Activatable::Group(group) => {
            for item in group {
                activate_in_place(item, sink, count);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Anchors, LayoutRegion, RegionId};

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
    fn nested_groups_are_activated_in_pre_order() {
        let a = MockView(1);
        let b = MockView(2);
        let d1 = a.width().equal_to(10.0);
        let d2 = a.height().equal_to(20.0);
        let d3 = a.top().equal_to(b.top());
        let d4 = a.leading().equal_to(b.leading() + 4.0);

        let mut active = ActiveConstraints::new();
        let count = activate(crate::batch![d1, vec![d2, d3], d4], &mut active);

        assert_eq!(count, 4);
        assert_eq!(active.into_vec(), vec![d1, d2, d3, d4]);
    }

    #[test]
    fn deeper_nesting_is_flattened() {
        let a = MockView(1);
        let d1 = a.width().equal_to(1.0);
        let d2 = a.width().equal_to(2.0);
        let d3 = a.width().equal_to(3.0);

        let batch = vec![Activatable::Group(vec![
            Activatable::from(d1),
            Activatable::Group(vec![Activatable::from([d2, d3])]),
        ])];

        let mut sink: Vec<Constraint<'_>> = Vec::new();
        assert_eq!(activate(batch, &mut sink), 3);
        assert_eq!(sink, vec![d1, d2, d3]);
    }

    #[test]
    fn empty_groups_activate_nothing() {
        let group = Activatable::Group(vec![Activatable::Group(Vec::new())]);
        assert!(group.is_empty());

        let mut active = ActiveConstraints::new();
        assert_eq!(activate([group], &mut active), 0);
        assert!(active.is_empty());

        let a = MockView(1);
        let d1 = a.width().equal_to(1.0);
        let d2 = a.height().equal_to(2.0);
        let empty: Vec<Constraint<'_>> = Vec::new();
        assert_eq!(activate(crate::batch![d1, empty, d2], &mut active), 2);
        assert_eq!(active.into_vec(), vec![d1, d2]);
    }

    #[test]
    fn plain_constraint_vectors_are_accepted() {
        let a = MockView(1);
        let constraints = vec![a.width().equal_to(10.0), a.height().equal_to(10.0)];

        let mut active = ActiveConstraints::new();
        activate(constraints.clone(), &mut active);

        assert_eq!(active.len(), 2);
        assert!(constraints.iter().all(|constraint| active.contains(constraint)));
        assert!(!active.contains(&a.width().equal_to(11.0)));
    }

    #[test]
    fn degenerate_constraints_are_found_after_activation() {
        let a = MockView(1);
        let b = MockView(2);
        let degenerate = a.width().equal_to(b.width() * 0.0 / 0.0);

        let mut active = ActiveConstraints::new();
        activate([degenerate], &mut active);

        assert!(active.contains(&degenerate));
    }

    #[test]
    fn len_counts_through_groups() {
        let a = MockView(1);
        let d = a.width().equal_to(1.0);
        let nested = Activatable::from(vec![Activatable::from(d), Activatable::from(vec![d, d])]);
        assert_eq!(nested.len(), 3);
    }
}
