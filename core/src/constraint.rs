//! Constraint descriptors and the relations that produce them.

use core::fmt::{self, Debug, Display};

use crate::{Attribute, Axis, Dimension, LayoutItem, LayoutRegion, Priority, RegionId};

/// How the two sides of a constraint relate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum Relation {
    /// `first == second`
    Equal,
    /// `first >= second`
    GreaterThanOrEqual,
    /// `first <= second`
    LessThanOrEqual,
}

impl Relation {
    /// The operator symbol for this relation.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Equal => "==",
            Self::GreaterThanOrEqual => ">=",
            Self::LessThanOrEqual => "<=",
        }
    }
}

impl Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// An inert description of a linear layout relation:
///
/// ```text
/// first.attribute <relation> second.attribute * multiplier + constant
/// ```
///
/// The second side is absent when the constraint compares a dimension to a
/// constant. Descriptors do nothing until handed to a solver.
#[derive(Clone, Copy)]
pub struct Constraint<'a> {
    first_region: &'a dyn LayoutRegion,
    first_attribute: Attribute,
    relation: Relation,
    second_region: Option<&'a dyn LayoutRegion>,
    second_attribute: Option<Attribute>,
    multiplier: f32,
    constant: f32,
    priority: Priority,
}

impl<'a> Constraint<'a> {
    fn between<A: Axis>(
        first: &LayoutItem<'a, A>,
        relation: Relation,
        second: &LayoutItem<'a, A>,
    ) -> Self {
        Self {
            first_region: first.region(),
            first_attribute: first.attribute(),
            relation,
            second_region: Some(second.region()),
            second_attribute: Some(second.attribute()),
            multiplier: second.multiplier(),
            constant: second.constant(),
            priority: Priority::REQUIRED,
        }
    }

    fn to_constant(first: &LayoutItem<'a, Dimension>, relation: Relation, constant: f32) -> Self {
        Self {
            first_region: first.region(),
            first_attribute: first.attribute(),
            relation,
            second_region: None,
            second_attribute: None,
            multiplier: 1.0,
            constant,
            priority: Priority::REQUIRED,
        }
    }

    /// The constrained region.
    #[must_use]
    pub fn first_region(&self) -> &'a dyn LayoutRegion {
        self.first_region
    }

    /// The constrained attribute.
    #[must_use]
    pub const fn first_attribute(&self) -> Attribute {
        self.first_attribute
    }

    /// The relation between the two sides.
    #[must_use]
    pub const fn relation(&self) -> Relation {
        self.relation
    }

    /// The region on the right-hand side, if any.
    #[must_use]
    pub fn second_region(&self) -> Option<&'a dyn LayoutRegion> {
        self.second_region
    }

    /// The attribute on the right-hand side, if any.
    #[must_use]
    pub const fn second_attribute(&self) -> Option<Attribute> {
        self.second_attribute
    }

    /// Multiplier applied to the right-hand attribute.
    #[must_use]
    pub const fn multiplier(&self) -> f32 {
        self.multiplier
    }

    /// Constant added to the right-hand side.
    #[must_use]
    pub const fn constant(&self) -> f32 {
        self.constant
    }

    /// The priority, [`Priority::REQUIRED`] unless set.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns a copy of this constraint with `priority`; every other field is
    /// unchanged.
    #[must_use]
    pub fn with_priority(self, priority: impl Into<Priority>) -> Self {
        Self {
            priority: priority.into(),
            ..self
        }
    }

    /// Returns true if the right-hand side is a constant only.
    #[must_use]
    pub const fn is_constant(&self) -> bool {
        self.second_region.is_none()
    }

    /// An owned snapshot referring to regions by identity.
    #[must_use]
    pub fn record(&self) -> ConstraintRecord {
        ConstraintRecord {
            first_region: self.first_region.id(),
            first_attribute: self.first_attribute,
            relation: self.relation,
            second_region: self.second_region.map(LayoutRegion::id),
            second_attribute: self.second_attribute,
            multiplier: self.multiplier,
            constant: self.constant,
            priority: self.priority,
        }
    }
}

impl PartialEq for Constraint<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.record() == other.record()
    }
}

impl Debug for Constraint<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Debug::fmt(&self.record(), f)
    }
}

impl Display for Constraint<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.record(), f)
    }
}

/// A [`Constraint`] with regions replaced by their identities.
///
/// Records own no borrows, so they can be stored, compared or serialized for
/// a solver that lives elsewhere.
///
/// Equality treats two NaN numbers as equal, so a descriptor built by
/// degenerate scaling still compares equal to itself.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ConstraintRecord {
    /// Identity of the constrained region.
    pub first_region: RegionId,
    /// The constrained attribute.
    pub first_attribute: Attribute,
    /// Relation between the two sides.
    pub relation: Relation,
    /// Identity of the right-hand region, if any.
    pub second_region: Option<RegionId>,
    /// Right-hand attribute, if any.
    pub second_attribute: Option<Attribute>,
    /// Multiplier applied to the right-hand attribute.
    pub multiplier: f32,
    /// Constant added to the right-hand side.
    pub constant: f32,
    /// Priority of the constraint.
    pub priority: Priority,
}

#[allow(clippy::float_cmp)]
fn same_number(a: f32, b: f32) -> bool {
    a == b || (a.is_nan() && b.is_nan())
}

impl PartialEq for ConstraintRecord {
    fn eq(&self, other: &Self) -> bool {
        self.first_region == other.first_region
            && self.first_attribute == other.first_attribute
            && self.relation == other.relation
            && self.second_region == other.second_region
            && self.second_attribute == other.second_attribute
            && same_number(self.multiplier, other.multiplier)
            && same_number(self.constant, other.constant)
            && same_number(self.priority.value(), other.priority.value())
    }
}

impl Display for ConstraintRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{} {} ",
            self.first_region, self.first_attribute, self.relation
        )?;
        match (self.second_region, self.second_attribute) {
            (Some(region), Some(attribute)) => write!(
                f,
                "{region}.{attribute} * {} + {}",
                self.multiplier, self.constant
            )?,
            _ => write!(f, "{}", self.constant)?,
        }
        write!(f, " {}", self.priority)
    }
}

/// The right-hand side of a relation whose left-hand side has axis `A`.
///
/// Implemented for items of the same axis, and for `f32` when `A` is
/// [`Dimension`]. Anything else is rejected at compile time.
///
/// ```
/// # use waterui_anchor_core::{Anchors, LayoutRegion, RegionId};
/// # #[derive(Debug)]
/// # struct Card;
/// # impl LayoutRegion for Card {
/// #     fn id(&self) -> RegionId { RegionId::new(1) }
/// #     fn parent(&self) -> Option<&dyn LayoutRegion> { None }
/// # }
/// # let card = Card;
/// let _ = card.top().equal_to(card.bottom() - 8.0);
/// let _ = card.width().equal_to(card.height() * 2.0);
/// let _ = card.width().equal_to(120.0);
/// ```
///
/// A vertical edge cannot be related to a horizontal one:
///
/// ```compile_fail
/// # use waterui_anchor_core::{Anchors, LayoutRegion, RegionId};
/// # #[derive(Debug)]
/// # struct Card;
/// # impl LayoutRegion for Card {
/// #     fn id(&self) -> RegionId { RegionId::new(1) }
/// #     fn parent(&self) -> Option<&dyn LayoutRegion> { None }
/// # }
/// # let card = Card;
/// let _ = card.top().equal_to(card.left());
/// ```
///
/// A position cannot be related to a bare number:
///
/// ```compile_fail
/// # use waterui_anchor_core::{Anchors, LayoutRegion, RegionId};
/// # #[derive(Debug)]
/// # struct Card;
/// # impl LayoutRegion for Card {
/// #     fn id(&self) -> RegionId { RegionId::new(1) }
/// #     fn parent(&self) -> Option<&dyn LayoutRegion> { None }
/// # }
/// # let card = Card;
/// let _ = card.top().equal_to(10.0);
/// ```
///
/// A dimension cannot be related to a position:
///
/// ```compile_fail
/// # use waterui_anchor_core::{Anchors, LayoutRegion, RegionId};
/// # #[derive(Debug)]
/// # struct Card;
/// # impl LayoutRegion for Card {
/// #     fn id(&self) -> RegionId { RegionId::new(1) }
/// #     fn parent(&self) -> Option<&dyn LayoutRegion> { None }
/// # }
/// # let card = Card;
/// let _ = card.width().equal_to(card.top());
/// ```
pub trait Operand<'a, A: Axis> {
    /// Builds the constraint `first <relation> self`.
    fn relate_to(self, first: LayoutItem<'a, A>, relation: Relation) -> Constraint<'a>;
}

impl<'a, A: Axis> Operand<'a, A> for LayoutItem<'a, A> {
    fn relate_to(self, first: LayoutItem<'a, A>, relation: Relation) -> Constraint<'a> {
        Constraint::between(&first, relation, &self)
    }
}

impl<'a> Operand<'a, Dimension> for f32 {
    fn relate_to(self, first: LayoutItem<'a, Dimension>, relation: Relation) -> Constraint<'a> {
        Constraint::to_constant(&first, relation, self)
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;
    use crate::{Anchors, RegionId};

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
    fn item_to_item_takes_the_second_operands_scaling() {
        let a = MockView(1);
        let b = MockView(2);

        let constraint = a.top().equal_to(b.bottom() * 2.0 + 8.0);

        assert_eq!(constraint.relation(), Relation::Equal);
        assert_eq!(constraint.first_region().id(), a.id());
        assert_eq!(constraint.first_attribute(), Attribute::Top);
        assert_eq!(constraint.second_region().map(LayoutRegion::id), Some(b.id()));
        assert_eq!(constraint.second_attribute(), Some(Attribute::Bottom));
        assert_eq!(constraint.multiplier(), 2.0);
        assert_eq!(constraint.constant(), 8.0);
        assert_eq!(constraint.priority(), Priority::REQUIRED);
    }

    #[test]
    fn first_operand_scaling_is_dropped() {
        let a = MockView(1);
        let b = MockView(2);

        let scaled = (a.leading() * 3.0 + 1.0).equal_to(b.leading());
        let plain = a.leading().equal_to(b.leading());
        assert_eq!(scaled, plain);
        assert_eq!(scaled.multiplier(), 1.0);
        assert_eq!(scaled.constant(), 0.0);
    }

    #[test]
    fn dimensions_relate_across_attributes() {
        let a = MockView(1);
        let b = MockView(2);

        let constraint = a.width().less_than_or_equal_to(b.height() / 2.0);
        assert_eq!(constraint.relation(), Relation::LessThanOrEqual);
        assert_eq!(constraint.first_attribute(), Attribute::Width);
        assert_eq!(constraint.second_attribute(), Some(Attribute::Height));
        assert_eq!(constraint.multiplier(), 0.5);
    }

    #[test]
    fn dimension_to_constant_has_no_second_side() {
        let a = MockView(1);

        let constraint = a.height().greater_than_or_equal_to(44.0);
        assert!(constraint.is_constant());
        assert!(constraint.second_region().is_none());
        assert_eq!(constraint.second_attribute(), None);
        assert_eq!(constraint.relation(), Relation::GreaterThanOrEqual);
        assert_eq!(constraint.multiplier(), 1.0);
        assert_eq!(constraint.constant(), 44.0);
    }

    #[test]
    fn relations_are_pure() {
        let a = MockView(1);
        let b = MockView(2);
        assert_eq!(
            a.center_x().equal_to(b.center_x() + 4.0),
            a.center_x().equal_to(b.center_x() + 4.0)
        );
    }

    #[test]
    fn with_priority_changes_only_the_priority() {
        let a = MockView(1);
        let b = MockView(2);

        let original = a.width().equal_to(b.width() * 0.5 - 2.0);
        let lowered = original.with_priority(Priority::DEFAULT_LOW);

        assert_eq!(lowered.priority(), Priority::DEFAULT_LOW);
        assert_eq!(original.priority(), Priority::REQUIRED);
        assert_eq!(
            lowered.record(),
            ConstraintRecord {
                priority: Priority::DEFAULT_LOW,
                ..original.record()
            }
        );

        let raw = original.with_priority(321.0);
        assert_eq!(raw.priority().value(), 321.0);
    }

    #[test]
    fn degenerate_scaling_still_equals_itself() {
        let a = MockView(1);
        let b = MockView(2);

        let constraint = a.width().equal_to(b.width() / 0.0 * 0.0);
        let copy = constraint;
        assert!(constraint.multiplier().is_nan());
        assert_eq!(constraint, copy);
        assert_ne!(constraint, a.width().equal_to(b.width()));
    }

    #[test]
    fn display_reads_like_an_equation() {
        let a = MockView(1);
        let b = MockView(2);

        let constraint = a.top().equal_to(b.top() + 10.0);
        assert_eq!(constraint.to_string(), "#1.top == #2.top * 1 + 10 @1000");

        let constraint = a.width().less_than_or_equal_to(320.0);
        assert_eq!(constraint.to_string(), "#1.width <= 320 @1000");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn records_round_trip_through_json() {
        let a = MockView(1);
        let b = MockView(2);

        let record = a
            .leading()
            .equal_to(b.leading() + 16.0)
            .with_priority(Priority::DEFAULT_HIGH)
            .record();
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"firstAttribute\":\"leading\""));
        let decoded: ConstraintRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, record);
    }
}
