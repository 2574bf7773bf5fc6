//! Flyout placement relative to an anchor
//!
//! [`resolve`] is pure: the same request always yields the same position.
//! Adaptive placement flips to the opposite side at most once and the result
//! is always clamped into the container.

use fluent_ui::{IntrinsicSize, LayoutDirection, PlacementError, Point, Rect};

/// Where a flyout opens relative to its anchor
///
/// `Start`/`End` follow the layout direction: in left-to-right layouts Start
/// is the left side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FlyoutPlacement {
    /// Centred over the anchor
    #[default]
    Auto,
    /// Centred over the whole container
    Full,
    Start,
    StartAlignedTop,
    StartAlignedBottom,
    Top,
    TopAlignedStart,
    TopAlignedEnd,
    End,
    EndAlignedTop,
    EndAlignedBottom,
    Bottom,
    BottomAlignedStart,
    BottomAlignedEnd,
}

impl FlyoutPlacement {
    pub const ALL: [FlyoutPlacement; 14] = [
        FlyoutPlacement::Auto,
        FlyoutPlacement::Full,
        FlyoutPlacement::Start,
        FlyoutPlacement::StartAlignedTop,
        FlyoutPlacement::StartAlignedBottom,
        FlyoutPlacement::Top,
        FlyoutPlacement::TopAlignedStart,
        FlyoutPlacement::TopAlignedEnd,
        FlyoutPlacement::End,
        FlyoutPlacement::EndAlignedTop,
        FlyoutPlacement::EndAlignedBottom,
        FlyoutPlacement::Bottom,
        FlyoutPlacement::BottomAlignedStart,
        FlyoutPlacement::BottomAlignedEnd,
    ];

    /// The placement on the opposite side of the anchor, keeping the alignment
    pub fn mirrored(self) -> Self {
        use FlyoutPlacement::*;
        match self {
            Auto => Auto,
            Full => Full,
            Start => End,
            StartAlignedTop => EndAlignedTop,
            StartAlignedBottom => EndAlignedBottom,
            Top => Bottom,
            TopAlignedStart => BottomAlignedStart,
            TopAlignedEnd => BottomAlignedEnd,
            End => Start,
            EndAlignedTop => StartAlignedTop,
            EndAlignedBottom => StartAlignedBottom,
            Bottom => Top,
            BottomAlignedStart => TopAlignedStart,
            BottomAlignedEnd => TopAlignedEnd,
        }
    }

    /// Physical side and alignment, or `None` for the centred placements
    fn edge(self, direction: LayoutDirection) -> Option<(Side, Align)> {
        use FlyoutPlacement::*;
        let rtl = direction == LayoutDirection::Rtl;
        let (start_side, end_side) = if rtl {
            (Side::Right, Side::Left)
        } else {
            (Side::Left, Side::Right)
        };
        let (align_start, align_end) = if rtl {
            (Align::Max, Align::Min)
        } else {
            (Align::Min, Align::Max)
        };

        let edge = match self {
            Auto | Full => return None,
            Start => (start_side, Align::Center),
            StartAlignedTop => (start_side, Align::Min),
            StartAlignedBottom => (start_side, Align::Max),
            Top => (Side::Above, Align::Center),
            TopAlignedStart => (Side::Above, align_start),
            TopAlignedEnd => (Side::Above, align_end),
            End => (end_side, Align::Center),
            EndAlignedTop => (end_side, Align::Min),
            EndAlignedBottom => (end_side, Align::Max),
            Bottom => (Side::Below, Align::Center),
            BottomAlignedStart => (Side::Below, align_start),
            BottomAlignedEnd => (Side::Below, align_end),
        };
        Some(edge)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Above,
    Below,
    Left,
    Right,
}

/// Alignment on the axis across the side; Min is the left/top edge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Align {
    Center,
    Min,
    Max,
}

/// Everything needed to place a flyout for one layout pass
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacementRequest {
    pub anchor: Rect,
    pub container: Rect,
    pub content: IntrinsicSize,
    pub preferred: FlyoutPlacement,
    pub adaptive: bool,
    pub direction: LayoutDirection,
}

/// Where the flyout goes and which placement actually got used
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedPlacement {
    /// Top-left corner of the content box
    pub position: Point,
    /// Differs from the requested placement when adaptive fallback kicked in
    pub placement: FlyoutPlacement,
}

impl ResolvedPlacement {
    pub fn rect(&self, content: IntrinsicSize) -> Rect {
        Rect::from_min_size(self.position.into(), content.as_array())
    }
}

/// Compute the flyout position for `request`
///
/// # Example
///
/// ```
/// use fluent_ui::{IntrinsicSize, LayoutDirection, Point, Rect};
/// use fluent_ui_components::{resolve, FlyoutPlacement, PlacementRequest};
///
/// let resolved = resolve(&PlacementRequest {
///     anchor: Rect::from_xywh(100.0, 100.0, 50.0, 20.0),
///     container: Rect::from_xywh(0.0, 0.0, 800.0, 600.0),
///     content: IntrinsicSize::new(80.0, 40.0),
///     preferred: FlyoutPlacement::Top,
///     adaptive: false,
///     direction: LayoutDirection::Ltr,
/// });
/// assert_eq!(resolved.position, Point::new(85.0, 60.0));
/// ```
pub fn resolve(request: &PlacementRequest) -> ResolvedPlacement {
    let PlacementRequest {
        anchor,
        container,
        content,
        preferred,
        adaptive,
        direction,
    } = *request;

    let (placement, position) = match preferred {
        FlyoutPlacement::Full => (preferred, centred_on(container, content)),
        FlyoutPlacement::Auto => match adaptive
            .then(|| auto_fallback(anchor, container, content, direction))
            .flatten()
        {
            Some(fallback) => (fallback, edge_position(fallback, anchor, content, direction)),
            None => (preferred, centred_on(anchor, content)),
        },
        _ => {
            let naive = edge_position(preferred, anchor, content, direction);
            let overflowing = preferred
                .edge(direction)
                .is_some_and(|(side, _)| overflows(side, naive, content, container));
            if adaptive && overflowing {
                let flipped = preferred.mirrored();
                (flipped, edge_position(flipped, anchor, content, direction))
            } else {
                (preferred, naive)
            }
        }
    };

    ResolvedPlacement {
        position: clamp_into(position, content, container),
        placement,
    }
}

fn centred_on(rect: Rect, content: IntrinsicSize) -> Point {
    let center = rect.center();
    Point::new(
        center.x - content.width / 2.0,
        center.y - content.height / 2.0,
    )
}

fn edge_position(
    placement: FlyoutPlacement,
    anchor: Rect,
    content: IntrinsicSize,
    direction: LayoutDirection,
) -> Point {
    let Some((side, align)) = placement.edge(direction) else {
        return centred_on(anchor, content);
    };

    let across = |min: f32, max: f32, extent: f32| match align {
        Align::Center => (min + max) / 2.0 - extent / 2.0,
        Align::Min => min,
        Align::Max => max - extent,
    };

    match side {
        Side::Above => Point::new(
            across(anchor.left(), anchor.right(), content.width),
            anchor.top() - content.height,
        ),
        Side::Below => Point::new(
            across(anchor.left(), anchor.right(), content.width),
            anchor.bottom(),
        ),
        Side::Left => Point::new(
            anchor.left() - content.width,
            across(anchor.top(), anchor.bottom(), content.height),
        ),
        Side::Right => Point::new(
            anchor.right(),
            across(anchor.top(), anchor.bottom(), content.height),
        ),
    }
}

fn overflows(side: Side, position: Point, content: IntrinsicSize, container: Rect) -> bool {
    match side {
        Side::Above => position.y < container.top(),
        Side::Below => position.y + content.height > container.bottom(),
        Side::Left => position.x < container.left(),
        Side::Right => position.x + content.width > container.right(),
    }
}

/// Edge placement for an `Auto` flyout whose anchor is too close to a container edge
fn auto_fallback(
    anchor: Rect,
    container: Rect,
    content: IntrinsicSize,
    direction: LayoutDirection,
) -> Option<FlyoutPlacement> {
    let center = anchor.center();
    let half_w = content.width / 2.0;
    let half_h = content.height / 2.0;
    let (left_side, right_side) = match direction {
        LayoutDirection::Ltr => (FlyoutPlacement::Start, FlyoutPlacement::End),
        LayoutDirection::Rtl => (FlyoutPlacement::End, FlyoutPlacement::Start),
    };

    if content.height <= container.height() {
        if center.y < container.top() + half_h {
            return Some(FlyoutPlacement::Bottom);
        }
        if center.y > container.bottom() - half_h {
            return Some(FlyoutPlacement::Top);
        }
    }
    if content.width <= container.width() {
        if center.x < container.left() + half_w {
            return Some(right_side);
        }
        if center.x > container.right() - half_w {
            return Some(left_side);
        }
    }
    None
}

/// Keep the content inside the container on every axis where it fits
fn clamp_into(position: Point, content: IntrinsicSize, container: Rect) -> Point {
    let axis = |pos: f32, extent: f32, min: f32, max: f32| {
        if extent <= max - min {
            pos.clamp(min, max - extent)
        } else {
            min
        }
    };
    Point::new(
        axis(position.x, content.width, container.left(), container.right()),
        axis(position.y, content.height, container.top(), container.bottom()),
    )
}

/// Placement settings of one flyout, applied to measurements as they become known
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FlyoutPositionProvider {
    pub placement: FlyoutPlacement,
    pub adaptive: bool,
    pub direction: LayoutDirection,
}

impl FlyoutPositionProvider {
    pub fn new(placement: FlyoutPlacement, adaptive: bool, direction: LayoutDirection) -> Self {
        Self {
            placement,
            adaptive,
            direction,
        }
    }

    /// Resolve once anchor, container and content are all measured
    pub fn resolve(
        &self,
        anchor: Option<Rect>,
        container: Option<Rect>,
        content: Option<IntrinsicSize>,
    ) -> Result<ResolvedPlacement, PlacementError> {
        use fluent_ui::Measurement;

        let anchor = anchor.ok_or(PlacementError::MeasurementUnavailable(Measurement::Anchor))?;
        let container =
            container.ok_or(PlacementError::MeasurementUnavailable(Measurement::Container))?;
        let content =
            content.ok_or(PlacementError::MeasurementUnavailable(Measurement::Content))?;

        Ok(resolve(&PlacementRequest {
            anchor,
            container,
            content,
            preferred: self.placement,
            adaptive: self.adaptive,
            direction: self.direction,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fluent_ui::Measurement;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    const ANCHOR: Rect = Rect::new([100.0, 100.0], [150.0, 120.0]);
    const CONTAINER: Rect = Rect::new([0.0, 0.0], [800.0, 600.0]);

    fn request(preferred: FlyoutPlacement, content: IntrinsicSize, adaptive: bool) -> PlacementRequest {
        PlacementRequest {
            anchor: ANCHOR,
            container: CONTAINER,
            content,
            preferred,
            adaptive,
            direction: LayoutDirection::Ltr,
        }
    }

    fn random_request(rng: &mut StdRng) -> PlacementRequest {
        let placement = FlyoutPlacement::ALL[rng.random_range(0..FlyoutPlacement::ALL.len())];
        PlacementRequest {
            anchor: Rect::from_xywh(
                rng.random_range(-50.0..850.0),
                rng.random_range(-50.0..650.0),
                rng.random_range(1.0..120.0),
                rng.random_range(1.0..60.0),
            ),
            container: CONTAINER,
            content: IntrinsicSize::new(rng.random_range(1.0..400.0), rng.random_range(1.0..300.0)),
            preferred: placement,
            adaptive: rng.random_bool(0.5),
            direction: if rng.random_bool(0.5) {
                LayoutDirection::Ltr
            } else {
                LayoutDirection::Rtl
            },
        }
    }

    #[test]
    fn test_top_sits_above_anchor() {
        let content = IntrinsicSize::new(80.0, 40.0);
        let resolved = resolve(&request(FlyoutPlacement::Top, content, false));

        assert_eq!(resolved.placement, FlyoutPlacement::Top);
        let rect = resolved.rect(content);
        assert_eq!(rect.bottom(), 100.0);
        assert_eq!(rect.center().x, 125.0);
    }

    #[test]
    fn test_adaptive_top_flips_to_bottom() {
        let content = IntrinsicSize::new(80.0, 150.0);
        let resolved = resolve(&request(FlyoutPlacement::Top, content, true));

        assert_eq!(resolved.placement, FlyoutPlacement::Bottom);
        assert_eq!(resolved.position.y, 120.0);
        assert!(CONTAINER.contains_rect(&resolved.rect(content)));
    }

    #[test]
    fn test_non_adaptive_overflow_is_clamped_not_flipped() {
        let content = IntrinsicSize::new(80.0, 150.0);
        let resolved = resolve(&request(FlyoutPlacement::Top, content, false));

        assert_eq!(resolved.placement, FlyoutPlacement::Top);
        assert_eq!(resolved.position.y, 0.0);
    }

    #[test]
    fn test_flip_keeps_alignment() {
        let content = IntrinsicSize::new(80.0, 150.0);
        let resolved = resolve(&request(FlyoutPlacement::TopAlignedEnd, content, true));

        assert_eq!(resolved.placement, FlyoutPlacement::BottomAlignedEnd);
        assert_eq!(resolved.position.x, 150.0 - 80.0);
    }

    #[test]
    fn test_every_edge_placement_flips_when_it_overflows() {
        let content = IntrinsicSize::new(80.0, 40.0);
        let centre = Rect::from_xywh(400.0, 300.0, 50.0, 20.0);

        for direction in [LayoutDirection::Ltr, LayoutDirection::Rtl] {
            for preferred in FlyoutPlacement::ALL {
                let Some((side, _)) = preferred.edge(direction) else {
                    continue;
                };
                // Anchor hugging the container edge on the preferred side
                let crowded = match side {
                    Side::Above => Rect::from_xywh(400.0, 10.0, 50.0, 20.0),
                    Side::Below => Rect::from_xywh(400.0, 570.0, 50.0, 20.0),
                    Side::Left => Rect::from_xywh(10.0, 300.0, 50.0, 20.0),
                    Side::Right => Rect::from_xywh(740.0, 300.0, 50.0, 20.0),
                };
                let req = |anchor, adaptive| PlacementRequest {
                    anchor,
                    container: CONTAINER,
                    content,
                    preferred,
                    adaptive,
                    direction,
                };

                let flipped = resolve(&req(crowded, true));
                assert_eq!(
                    flipped.placement,
                    preferred.mirrored(),
                    "{preferred:?} in {direction:?}"
                );
                assert!(CONTAINER.contains_rect(&flipped.rect(content)));
                assert_eq!(
                    flipped.position,
                    edge_position(preferred.mirrored(), crowded, content, direction)
                );

                let pinned = resolve(&req(crowded, false));
                assert_eq!(pinned.placement, preferred, "{preferred:?} in {direction:?}");

                let roomy = resolve(&req(centre, true));
                assert_eq!(roomy.placement, preferred, "{preferred:?} in {direction:?}");
                assert_eq!(
                    roomy.position,
                    edge_position(preferred, centre, content, direction)
                );
            }
        }
    }

    #[test]
    fn test_start_is_mirrored_in_rtl() {
        let content = IntrinsicSize::new(60.0, 20.0);
        let mut req = request(FlyoutPlacement::Start, content, false);

        let ltr = resolve(&req);
        assert_eq!(ltr.position, Point::new(40.0, 100.0));

        req.direction = LayoutDirection::Rtl;
        let rtl = resolve(&req);
        assert_eq!(rtl.position, Point::new(150.0, 100.0));
    }

    #[test]
    fn test_full_centres_in_container() {
        let content = IntrinsicSize::new(200.0, 100.0);
        let resolved = resolve(&request(FlyoutPlacement::Full, content, true));
        assert_eq!(resolved.position, Point::new(300.0, 250.0));
        assert_eq!(resolved.placement, FlyoutPlacement::Full);
    }

    #[test]
    fn test_auto_degrades_near_edges() {
        let content = IntrinsicSize::new(100.0, 100.0);
        let mut req = request(FlyoutPlacement::Auto, content, true);

        req.anchor = Rect::from_xywh(380.0, 10.0, 40.0, 20.0);
        assert_eq!(resolve(&req).placement, FlyoutPlacement::Bottom);

        req.anchor = Rect::from_xywh(380.0, 570.0, 40.0, 20.0);
        assert_eq!(resolve(&req).placement, FlyoutPlacement::Top);

        req.anchor = Rect::from_xywh(0.0, 290.0, 20.0, 20.0);
        assert_eq!(resolve(&req).placement, FlyoutPlacement::End);

        req.anchor = Rect::from_xywh(780.0, 290.0, 20.0, 20.0);
        assert_eq!(resolve(&req).placement, FlyoutPlacement::Start);

        req.anchor = Rect::from_xywh(380.0, 290.0, 40.0, 20.0);
        let centred = resolve(&req);
        assert_eq!(centred.placement, FlyoutPlacement::Auto);
        assert_eq!(centred.position, Point::new(350.0, 250.0));
    }

    #[test]
    fn test_oversized_content_aligns_to_container_min() {
        let content = IntrinsicSize::new(1000.0, 50.0);
        let resolved = resolve(&request(FlyoutPlacement::Bottom, content, true));
        assert_eq!(resolved.position.x, 0.0);
    }

    #[test]
    fn test_resolve_is_deterministic_and_idempotent() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for _ in 0..2000 {
            let req = random_request(&mut rng);
            let first = resolve(&req);
            assert_eq!(first, resolve(&req));

            // Re-resolving with the effective placement, non-adaptively, lands on the same spot
            let again = resolve(&PlacementRequest {
                preferred: first.placement,
                adaptive: false,
                ..req
            });
            assert_eq!(again.position, first.position, "{req:?}");
        }
    }

    #[test]
    fn test_fitting_content_stays_inside_container() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..2000 {
            let req = random_request(&mut rng);
            let resolved = resolve(&req);
            let rect = resolved.rect(req.content);
            let inside = rect.left() >= CONTAINER.left()
                && rect.top() >= CONTAINER.top()
                && rect.right() <= CONTAINER.right() + 1e-3
                && rect.bottom() <= CONTAINER.bottom() + 1e-3;
            assert!(inside, "{req:?} -> {resolved:?}");
        }
    }

    #[test]
    fn test_provider_reports_missing_measurements() {
        let provider = FlyoutPositionProvider::new(FlyoutPlacement::Bottom, true, LayoutDirection::Ltr);
        let content = IntrinsicSize::new(10.0, 10.0);

        assert_eq!(
            provider.resolve(None, Some(CONTAINER), Some(content)),
            Err(PlacementError::MeasurementUnavailable(Measurement::Anchor))
        );
        assert_eq!(
            provider.resolve(Some(ANCHOR), None, Some(content)),
            Err(PlacementError::MeasurementUnavailable(Measurement::Container))
        );
        assert_eq!(
            provider.resolve(Some(ANCHOR), Some(CONTAINER), None),
            Err(PlacementError::MeasurementUnavailable(Measurement::Content))
        );
        assert!(provider.resolve(Some(ANCHOR), Some(CONTAINER), Some(content)).is_ok());
    }
}
