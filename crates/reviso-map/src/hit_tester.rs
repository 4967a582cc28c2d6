use crate::geometry::{Rect, Vec2};
use reviso_core::NodeId;

/// Hit tester over the node rectangles of the current scene.
///
/// Holds content-space rects; callers convert pointer positions from screen
/// space first. Rebuilt via [`HitTester::update`] after every layout pass —
/// updating clears all previous regions.
#[derive(Debug, Clone, Default)]
pub struct HitTester {
    node_rects: Vec<(NodeId, Rect)>,
}

impl HitTester {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace all hit regions with the given (id, rect) pairs.
    pub fn update(&mut self, regions: impl IntoIterator<Item = (NodeId, Rect)>) {
        self.node_rects.clear();
        self.node_rects.extend(regions);
    }

    pub fn is_empty(&self) -> bool {
        self.node_rects.is_empty()
    }

    pub fn len(&self) -> usize {
        self.node_rects.len()
    }

    /// The node whose rect contains `pos`, if any.
    ///
    /// Nodes do not overlap in a valid layout; should they anyway, the
    /// smallest-area rect wins (the most specific hit).
    pub fn hit_test(&self, pos: Vec2) -> Option<&NodeId> {
        let mut best: Option<(&NodeId, f32)> = None;

        for (node_id, rect) in &self.node_rects {
            if rect.contains(pos) {
                let area = rect.width() * rect.height();
                match &best {
                    Some((_, best_area)) if area >= *best_area => {}
                    _ => best = Some((node_id, area)),
                }
            }
        }

        best.map(|(id, _)| id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_rect(x: f32, y: f32, w: f32, h: f32) -> Rect {
        Rect::from_pos_size(Vec2::new(x, y), Vec2::new(w, h))
    }

    #[test]
    fn test_hit_test_inside_and_outside() {
        let mut tester = HitTester::new();
        tester.update([(NodeId::from("a"), make_rect(100.0, 100.0, 160.0, 50.0))]);

        assert_eq!(
            tester.hit_test(Vec2::new(150.0, 120.0)),
            Some(&NodeId::from("a"))
        );
        assert_eq!(tester.hit_test(Vec2::new(50.0, 50.0)), None);
    }

    #[test]
    fn test_smallest_rect_wins_on_overlap() {
        let mut tester = HitTester::new();
        tester.update([
            (NodeId::from("big"), make_rect(0.0, 0.0, 300.0, 300.0)),
            (NodeId::from("small"), make_rect(100.0, 100.0, 50.0, 50.0)),
        ]);

        assert_eq!(
            tester.hit_test(Vec2::new(120.0, 120.0)),
            Some(&NodeId::from("small"))
        );
        assert_eq!(
            tester.hit_test(Vec2::new(10.0, 10.0)),
            Some(&NodeId::from("big"))
        );
    }

    #[test]
    fn test_update_clears_previous_data() {
        let mut tester = HitTester::new();
        tester.update([(NodeId::from("a"), make_rect(0.0, 0.0, 100.0, 100.0))]);
        assert_eq!(tester.len(), 1);

        tester.update([]);
        assert!(tester.is_empty());
        assert_eq!(tester.hit_test(Vec2::new(50.0, 50.0)), None);
    }
}

#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    fn rect_strategy() -> impl Strategy<Value = Rect> {
        (
            -500.0f32..500.0,
            -500.0f32..500.0,
            20.0f32..200.0,
            20.0f32..200.0,
        )
            .prop_map(|(x, y, w, h)| Rect::from_pos_size(Vec2::new(x, y), Vec2::new(w, h)))
    }

    proptest! {
        /// The center of a registered rect always hits that node.
        #[test]
        fn prop_hit_test_center_hits(rect in rect_strategy()) {
            let mut tester = HitTester::new();
            tester.update([(NodeId::from("n"), rect)]);
            prop_assert_eq!(tester.hit_test(rect.center()), Some(&NodeId::from("n")));
        }

        /// Points strictly outside every rect never hit.
        #[test]
        fn prop_hit_test_outside_misses(
            rect in rect_strategy(),
            offset_x in 10.0f32..100.0,
            offset_y in 10.0f32..100.0,
            quadrant in 0u8..4,
        ) {
            let mut tester = HitTester::new();
            tester.update([(NodeId::from("n"), rect)]);

            let outside = match quadrant {
                0 => Vec2::new(rect.min.x - offset_x, rect.min.y - offset_y),
                1 => Vec2::new(rect.max.x + offset_x, rect.min.y - offset_y),
                2 => Vec2::new(rect.min.x - offset_x, rect.max.y + offset_y),
                _ => Vec2::new(rect.max.x + offset_x, rect.max.y + offset_y),
            };
            prop_assert_eq!(tester.hit_test(outside), None);
        }
    }
}
