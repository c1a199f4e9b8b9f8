//! Axis-tagged affine expressions over region attributes.
//!
//! A [`LayoutItem`] reads as `multiplier * region.attribute + constant`. Items
//! are immutable values: scaling and offsetting return a new item and leave the
//! original untouched, so `view.width() * 2.0 + 10.0` can be built left to
//! right with every intermediate step inspectable on its own.

use core::{
    fmt::{self, Debug, Display},
    marker::PhantomData,
    ops::{Add, Div, Mul, Sub},
};

use crate::{
    Attribute, Axis, AxisKind, Constraint, Dimension, DimensionAttribute, Horizontal,
    HorizontalAttribute, LayoutRegion, Operand, Relation, Vertical, VerticalAttribute, ViewRegion,
};

/// `multiplier * region.attribute + constant`, tagged with the attribute's axis.
#[derive(Clone, Copy)]
pub struct LayoutItem<'a, A: Axis> {
    region: &'a dyn LayoutRegion,
    attribute: Attribute,
    multiplier: f32,
    constant: f32,
    _axis: PhantomData<A>,
}

impl<'a, A: Axis> LayoutItem<'a, A> {
    /// Wraps `attribute` of `region` with multiplier `1` and constant `0`.
    pub fn new(region: &'a dyn LayoutRegion, attribute: A::Attribute) -> Self {
        Self {
            region,
            attribute: attribute.into(),
            multiplier: 1.0,
            constant: 0.0,
            _axis: PhantomData,
        }
    }

    /// The region this item refers to.
    #[must_use]
    pub fn region(&self) -> &'a dyn LayoutRegion {
        self.region
    }

    /// The wrapped attribute.
    #[must_use]
    pub const fn attribute(&self) -> Attribute {
        self.attribute
    }

    /// The running multiplier.
    #[must_use]
    pub const fn multiplier(&self) -> f32 {
        self.multiplier
    }

    /// The running constant.
    #[must_use]
    pub const fn constant(&self) -> f32 {
        self.constant
    }

    /// The axis tag carried by this item.
    #[must_use]
    pub const fn axis(&self) -> AxisKind {
        A::KIND
    }

    /// Returns true if the item is the bare attribute (`1 * attribute + 0`).
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn is_identity(&self) -> bool {
        self.multiplier == 1.0 && self.constant == 0.0
    }

    /// Returns a copy with the multiplier scaled by `factor`.
    ///
    /// Scaling by zero or by a non-finite value is not rejected; the result
    /// follows IEEE arithmetic.
    #[must_use]
    pub const fn scaled_by(self, factor: f32) -> Self {
        self.with_multiplier(self.multiplier * factor)
    }

    /// Returns a copy with `offset` added to the constant.
    #[must_use]
    pub const fn offset_by(self, offset: f32) -> Self {
        self.with_constant(self.constant + offset)
    }

    /// `self == rhs`.
    ///
    /// `rhs` is either another item of the same axis, or a number when this
    /// item is a [`Dimension`]. The multiplier and constant of the resulting
    /// constraint are taken from `rhs`; any scaling carried by `self` is
    /// ignored.
    pub fn equal_to(self, rhs: impl Operand<'a, A>) -> Constraint<'a> {
        self.relate(rhs, Relation::Equal)
    }

    /// `self >= rhs`. See [`equal_to`](Self::equal_to) for the operand rules.
    pub fn greater_than_or_equal_to(self, rhs: impl Operand<'a, A>) -> Constraint<'a> {
        self.relate(rhs, Relation::GreaterThanOrEqual)
    }

    /// `self <= rhs`. See [`equal_to`](Self::equal_to) for the operand rules.
    pub fn less_than_or_equal_to(self, rhs: impl Operand<'a, A>) -> Constraint<'a> {
        self.relate(rhs, Relation::LessThanOrEqual)
    }

    fn relate(self, rhs: impl Operand<'a, A>, relation: Relation) -> Constraint<'a> {
        if !self.is_identity() {
            tracing::warn!(
                region = %self.region.id(),
                attribute = %self.attribute,
                multiplier = self.multiplier,
                constant = self.constant,
                "left-hand item is scaled or offset; only the right-hand item's multiplier and constant are kept"
            );
        }
        rhs.relate_to(self, relation)
    }

    const fn with_multiplier(self, multiplier: f32) -> Self {
        Self { multiplier, ..self }
    }

    const fn with_constant(self, constant: f32) -> Self {
        Self { constant, ..self }
    }
}

impl<A: Axis> Debug for LayoutItem<'_, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LayoutItem")
            .field("axis", &A::KIND)
            .field("region", &self.region.id())
            .field("attribute", &self.attribute)
            .field("multiplier", &self.multiplier)
            .field("constant", &self.constant)
            .finish()
    }
}

impl<A: Axis> Display for LayoutItem<'_, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{} * {} + {}",
            self.region.id(),
            self.attribute,
            self.multiplier,
            self.constant
        )
    }
}

impl<A: Axis> PartialEq for LayoutItem<'_, A> {
    #[allow(clippy::float_cmp)]
    fn eq(&self, other: &Self) -> bool {
        self.region.id() == other.region.id()
            && self.attribute == other.attribute
            && self.multiplier == other.multiplier
            && self.constant == other.constant
    }
}

impl<A: Axis> Mul<f32> for LayoutItem<'_, A> {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self::Output {
        self.scaled_by(rhs)
    }
}

impl<A: Axis> Div<f32> for LayoutItem<'_, A> {
    type Output = Self;

    fn div(self, rhs: f32) -> Self::Output {
        self.with_multiplier(self.multiplier / rhs)
    }
}

impl<A: Axis> Add<f32> for LayoutItem<'_, A> {
    type Output = Self;

    fn add(self, rhs: f32) -> Self::Output {
        self.offset_by(rhs)
    }
}

impl<A: Axis> Sub<f32> for LayoutItem<'_, A> {
    type Output = Self;

    fn sub(self, rhs: f32) -> Self::Output {
        self.with_constant(self.constant - rhs)
    }
}

/// Attribute accessors available on every layout region.
pub trait Anchors {
    /// Left edge.
    fn left(&self) -> LayoutItem<'_, Horizontal>;
    /// Right edge.
    fn right(&self) -> LayoutItem<'_, Horizontal>;
    /// Leading edge.
    fn leading(&self) -> LayoutItem<'_, Horizontal>;
    /// Trailing edge.
    fn trailing(&self) -> LayoutItem<'_, Horizontal>;
    /// Horizontal center.
    fn center_x(&self) -> LayoutItem<'_, Horizontal>;
    /// Top edge.
    fn top(&self) -> LayoutItem<'_, Vertical>;
    /// Bottom edge.
    fn bottom(&self) -> LayoutItem<'_, Vertical>;
    /// Vertical center.
    fn center_y(&self) -> LayoutItem<'_, Vertical>;
    /// Width.
    fn width(&self) -> LayoutItem<'_, Dimension>;
    /// Height.
    fn height(&self) -> LayoutItem<'_, Dimension>;
}

impl<T: LayoutRegion> Anchors for T {
    fn left(&self) -> LayoutItem<'_, Horizontal> {
        LayoutItem::new(self, HorizontalAttribute::Left)
    }

    fn right(&self) -> LayoutItem<'_, Horizontal> {
        LayoutItem::new(self, HorizontalAttribute::Right)
    }

    fn leading(&self) -> LayoutItem<'_, Horizontal> {
        LayoutItem::new(self, HorizontalAttribute::Leading)
    }

    fn trailing(&self) -> LayoutItem<'_, Horizontal> {
        LayoutItem::new(self, HorizontalAttribute::Trailing)
    }

    fn center_x(&self) -> LayoutItem<'_, Horizontal> {
        LayoutItem::new(self, HorizontalAttribute::CenterX)
    }

    fn top(&self) -> LayoutItem<'_, Vertical> {
        LayoutItem::new(self, VerticalAttribute::Top)
    }

    fn bottom(&self) -> LayoutItem<'_, Vertical> {
        LayoutItem::new(self, VerticalAttribute::Bottom)
    }

    fn center_y(&self) -> LayoutItem<'_, Vertical> {
        LayoutItem::new(self, VerticalAttribute::CenterY)
    }

    fn width(&self) -> LayoutItem<'_, Dimension> {
        LayoutItem::new(self, DimensionAttribute::Width)
    }

    fn height(&self) -> LayoutItem<'_, Dimension> {
        LayoutItem::new(self, DimensionAttribute::Height)
    }
}

/// Baseline and margin accessors, available on views only.
pub trait ViewAnchors {
    /// Baseline of the first line of content.
    fn first_baseline(&self) -> LayoutItem<'_, Vertical>;
    /// Baseline of the last line of content.
    fn last_baseline(&self) -> LayoutItem<'_, Vertical>;
    /// Left margin.
    fn left_margin(&self) -> LayoutItem<'_, Horizontal>;
    /// Right margin.
    fn right_margin(&self) -> LayoutItem<'_, Horizontal>;
    /// Top margin.
    fn top_margin(&self) -> LayoutItem<'_, Vertical>;
    /// Bottom margin.
    fn bottom_margin(&self) -> LayoutItem<'_, Vertical>;
    /// Leading margin.
    fn leading_margin(&self) -> LayoutItem<'_, Horizontal>;
    /// Trailing margin.
    fn trailing_margin(&self) -> LayoutItem<'_, Horizontal>;
    /// Horizontal center within the margins.
    fn center_x_within_margins(&self) -> LayoutItem<'_, Horizontal>;
    /// Vertical center within the margins.
    fn center_y_within_margins(&self) -> LayoutItem<'_, Vertical>;
}

impl<T: ViewRegion> ViewAnchors for T {
    fn first_baseline(&self) -> LayoutItem<'_, Vertical> {
        LayoutItem::new(self, VerticalAttribute::FirstBaseline)
    }

    fn last_baseline(&self) -> LayoutItem<'_, Vertical> {
        LayoutItem::new(self, VerticalAttribute::LastBaseline)
    }

    fn left_margin(&self) -> LayoutItem<'_, Horizontal> {
        LayoutItem::new(self, HorizontalAttribute::LeftMargin)
    }

    fn right_margin(&self) -> LayoutItem<'_, Horizontal> {
        LayoutItem::new(self, HorizontalAttribute::RightMargin)
    }

    fn top_margin(&self) -> LayoutItem<'_, Vertical> {
        LayoutItem::new(self, VerticalAttribute::TopMargin)
    }

    fn bottom_margin(&self) -> LayoutItem<'_, Vertical> {
        LayoutItem::new(self, VerticalAttribute::BottomMargin)
    }

    fn leading_margin(&self) -> LayoutItem<'_, Horizontal> {
        LayoutItem::new(self, HorizontalAttribute::LeadingMargin)
    }

    fn trailing_margin(&self) -> LayoutItem<'_, Horizontal> {
        LayoutItem::new(self, HorizontalAttribute::TrailingMargin)
    }

    fn center_x_within_margins(&self) -> LayoutItem<'_, Horizontal> {
        LayoutItem::new(self, HorizontalAttribute::CenterXWithinMargins)
    }

    fn center_y_within_margins(&self) -> LayoutItem<'_, Vertical> {
        LayoutItem::new(self, VerticalAttribute::CenterYWithinMargins)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{RegionId, RegionKind};

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

    impl ViewRegion for MockView {}

    #[derive(Debug)]
    struct MockGuide(u64);

    impl LayoutRegion for MockGuide {
        fn id(&self) -> RegionId {
            RegionId::new(self.0)
        }

        fn parent(&self) -> Option<&dyn LayoutRegion> {
            None
        }

        fn kind(&self) -> RegionKind {
            RegionKind::Guide
        }
    }

    #[test]
    fn accessors_start_at_identity() {
        let view = MockView(1);

        let left = view.left();
        assert_eq!(left.attribute(), Attribute::Left);
        assert_eq!(left.axis(), AxisKind::Horizontal);
        assert_eq!(left.multiplier(), 1.0);
        assert_eq!(left.constant(), 0.0);
        assert!(left.is_identity());

        assert_eq!(view.center_y().axis(), AxisKind::Vertical);
        assert_eq!(view.height().attribute(), Attribute::Height);
        assert_eq!(view.height().axis(), AxisKind::Dimension);
        assert_eq!(view.last_baseline().attribute(), Attribute::LastBaseline);
        assert_eq!(view.trailing_margin().axis(), AxisKind::Horizontal);
        assert_eq!(view.left().region().id(), RegionId::new(1));
    }

    #[test]
    fn guides_expose_edges_and_dimensions() {
        let guide = MockGuide(7);
        assert_eq!(guide.kind(), RegionKind::Guide);
        assert_eq!(guide.top().attribute(), Attribute::Top);
        assert_eq!(guide.width().region().id(), RegionId::new(7));
    }

    #[test]
    fn scaling_composes_multiplicatively() {
        let view = MockView(1);
        let item = view.width() * 2.0 * 3.0;
        assert_eq!(item.multiplier(), 6.0);
        assert_eq!(item.constant(), 0.0);

        let halved = view.width() / 2.0;
        assert_eq!(halved.multiplier(), 0.5);
    }

    #[test]
    fn offsets_compose_additively() {
        let view = MockView(1);
        let item = view.top() + 10.0 + 5.0 - 3.0;
        assert_eq!(item.constant(), 12.0);
        assert_eq!(item.multiplier(), 1.0);
    }

    #[test]
    fn scale_and_offset_touch_only_their_field() {
        let view = MockView(1);
        let item = (view.width() + 10.0) * 2.0;
        assert_eq!(item.multiplier(), 2.0);
        assert_eq!(item.constant(), 10.0);

        let item = (view.width() * 2.0) + 10.0;
        assert_eq!(item.multiplier(), 2.0);
        assert_eq!(item.constant(), 10.0);
    }

    #[test]
    fn transforms_leave_the_original_untouched() {
        let view = MockView(1);
        let base = view.leading();
        let scaled = base * 4.0;
        let shifted = base + 4.0;
        assert!(base.is_identity());
        assert_eq!(scaled.constant(), 0.0);
        assert_eq!(shifted.multiplier(), 1.0);
        assert_ne!(base, scaled);
    }

    #[test]
    fn division_by_zero_follows_ieee() {
        let view = MockView(1);
        assert!((view.width() / 0.0).multiplier().is_infinite());
        assert!((view.width() * 0.0 / 0.0).multiplier().is_nan());
    }

    #[test]
    fn fluent_and_operator_forms_agree() {
        let view = MockView(1);
        assert_eq!(view.width().scaled_by(2.0).offset_by(10.0), view.width() * 2.0 + 10.0);
    }
}
