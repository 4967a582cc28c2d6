use crate::geometry::Vec2;
use crate::hit_tester::HitTester;
use crate::viewport::{Viewport, ZoomDirection};
use reviso_core::NodeId;

/// A discrete pointer or wheel input, already in canvas-local screen
/// coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Primary button pressed inside the canvas.
    Down(Vec2),
    Move(Vec2),
    /// Primary button released.
    Up,
    /// Pointer left the canvas. Ends a drag exactly like `Up`.
    Leave,
    Wheel(ZoomDirection),
}

/// Anchor recorded when a drag starts; pan tracks the pointer 1:1 from it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragState {
    pub start_pan: Vec2,
    pub start_pos: Vec2,
}

/// Interaction state machine: Idle or Dragging, plus an orthogonal hover
/// flag resolved against the hit tester.
///
/// Events mutate only the viewport and this state, never layout output, so
/// dragging and zooming interleave freely with cached positions.
#[derive(Debug, Clone, Default)]
pub struct InteractionState {
    drag: Option<DragState>,
    hovered: Option<NodeId>,
}

impl InteractionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn hovered(&self) -> Option<&NodeId> {
        self.hovered.as_ref()
    }

    /// Apply one input event.
    pub fn handle(&mut self, event: PointerEvent, viewport: &mut Viewport, hit: &HitTester) {
        match event {
            PointerEvent::Down(pos) => {
                self.drag = Some(DragState {
                    start_pan: viewport.pan,
                    start_pos: pos,
                });
            }
            PointerEvent::Move(pos) => {
                if let Some(drag) = self.drag {
                    viewport.pan = drag.start_pan + (pos - drag.start_pos);
                }
                self.hovered = hit.hit_test(viewport.screen_to_content(pos)).cloned();
            }
            PointerEvent::Up | PointerEvent::Leave => {
                self.drag = None;
                if matches!(event, PointerEvent::Leave) {
                    self.hovered = None;
                }
            }
            PointerEvent::Wheel(direction) => {
                viewport.zoom_step(direction);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Rect;
    use crate::viewport::{ZOOM_MAX, ZOOM_MIN};

    fn tester_with_node(x: f32, y: f32, w: f32, h: f32) -> HitTester {
        let mut tester = HitTester::new();
        tester.update([(
            NodeId::from("n"),
            Rect::from_pos_size(Vec2::new(x, y), Vec2::new(w, h)),
        )]);
        tester
    }

    #[test]
    fn test_drag_pans_one_to_one() {
        let mut state = InteractionState::new();
        let mut viewport = Viewport {
            zoom: 1.0,
            pan: Vec2::new(10.0, 20.0),
        };
        let hit = HitTester::new();

        state.handle(PointerEvent::Down(Vec2::new(100.0, 100.0)), &mut viewport, &hit);
        assert!(state.is_dragging());

        state.handle(PointerEvent::Move(Vec2::new(130.0, 90.0)), &mut viewport, &hit);
        assert_eq!(viewport.pan, Vec2::new(40.0, 10.0));

        // Further movement keeps tracking from the original anchor.
        state.handle(PointerEvent::Move(Vec2::new(100.0, 100.0)), &mut viewport, &hit);
        assert_eq!(viewport.pan, Vec2::new(10.0, 20.0));

        state.handle(PointerEvent::Up, &mut viewport, &hit);
        assert!(!state.is_dragging());

        // Moves after release no longer pan.
        state.handle(PointerEvent::Move(Vec2::new(500.0, 500.0)), &mut viewport, &hit);
        assert_eq!(viewport.pan, Vec2::new(10.0, 20.0));
    }

    #[test]
    fn test_leave_ends_drag_like_up() {
        let mut state = InteractionState::new();
        let mut viewport = Viewport::default();
        let hit = HitTester::new();

        state.handle(PointerEvent::Down(Vec2::ZERO), &mut viewport, &hit);
        state.handle(PointerEvent::Leave, &mut viewport, &hit);
        assert!(!state.is_dragging());
        assert_eq!(state.hovered(), None);
    }

    #[test]
    fn test_wheel_zooms_in_any_state() {
        let mut state = InteractionState::new();
        let mut viewport = Viewport::default();
        let hit = HitTester::new();

        state.handle(PointerEvent::Wheel(ZoomDirection::In), &mut viewport, &hit);
        assert!(viewport.zoom > 1.0);

        // Wheel during a drag neither cancels the drag nor breaks clamping.
        state.handle(PointerEvent::Down(Vec2::ZERO), &mut viewport, &hit);
        for _ in 0..100 {
            state.handle(PointerEvent::Wheel(ZoomDirection::In), &mut viewport, &hit);
        }
        assert!(state.is_dragging());
        assert_eq!(viewport.zoom, ZOOM_MAX);

        for _ in 0..300 {
            state.handle(PointerEvent::Wheel(ZoomDirection::Out), &mut viewport, &hit);
        }
        assert_eq!(viewport.zoom, ZOOM_MIN);
    }

    #[test]
    fn test_hover_follows_hit_regions() {
        let mut state = InteractionState::new();
        let mut viewport = Viewport::default();
        let hit = tester_with_node(100.0, 100.0, 160.0, 50.0);

        state.handle(PointerEvent::Move(Vec2::new(150.0, 120.0)), &mut viewport, &hit);
        assert_eq!(state.hovered(), Some(&NodeId::from("n")));

        state.handle(PointerEvent::Move(Vec2::new(10.0, 10.0)), &mut viewport, &hit);
        assert_eq!(state.hovered(), None);
    }

    #[test]
    fn test_hover_respects_viewport_transform() {
        let mut state = InteractionState::new();
        // Content point (150, 120) appears at screen (150*0.5+40, 120*0.5+20).
        let mut viewport = Viewport {
            zoom: 0.5,
            pan: Vec2::new(40.0, 20.0),
        };
        let hit = tester_with_node(100.0, 100.0, 160.0, 50.0);

        state.handle(PointerEvent::Move(Vec2::new(115.0, 80.0)), &mut viewport, &hit);
        assert_eq!(state.hovered(), Some(&NodeId::from("n")));

        // The same screen point with an identity transform misses.
        let mut identity = Viewport::default();
        state.handle(PointerEvent::Move(Vec2::new(115.0, 80.0)), &mut identity, &hit);
        assert_eq!(state.hovered(), None);
    }
}
