use eframe::egui;
use egui::epaint::{CubicBezierShape, QuadraticBezierShape};
use reviso_map::geometry::{Rect, Vec2};
use reviso_map::scene::{EdgeCurve, Scene};
use reviso_map::style::Color;
use reviso_map::viewport::ZoomDirection;
use reviso_map::{PointerEvent, build_scene, layouter_for};

use crate::app::RevisoApp;

const BACKGROUND: egui::Color32 = egui::Color32::from_rgb(24, 26, 31);

/// Lay out the tree, process this frame's input, and paint the scene.
pub fn show(app: &mut RevisoApp, ui: &mut egui::Ui) {
    let rect = ui.available_rect_before_wrap();
    let response = ui.allocate_rect(rect, egui::Sense::click_and_drag());
    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, 0.0, BACKGROUND);

    // Hover resolves against the previous frame's hit regions; at 60fps the
    // one-frame lag is invisible and keeps this a single pass.
    for event in collect_events(ui, &response, rect) {
        app.interaction.handle(event, &mut app.viewport, &app.hit_tester);
    }

    let layout = layouter_for(app.mode, app.config).execute(&app.tree, Vec2::ZERO);
    if app.needs_fit
        && app
            .viewport
            .fit(layout.bounds, Vec2::new(rect.width(), rect.height()))
    {
        app.needs_fit = false;
    }

    let scene = build_scene(&layout, &app.viewport, app.mode, app.interaction.hovered());
    app.hit_tester.update(scene.hit_regions());

    paint_scene(&painter, rect, &scene);

    if app.interaction.is_dragging() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::Grabbing);
    } else if app.interaction.hovered().is_some() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
    }
}

/// Translate egui input into canvas-local pointer events.
fn collect_events(
    ui: &egui::Ui,
    response: &egui::Response,
    rect: egui::Rect,
) -> Vec<PointerEvent> {
    let mut events = Vec::new();
    let (pressed, released, scroll_y) = ui.input(|i| {
        (
            i.pointer.primary_pressed(),
            i.pointer.primary_released(),
            i.raw_scroll_delta.y,
        )
    });

    match response.hover_pos() {
        Some(screen_pos) => {
            let pos = Vec2::new(screen_pos.x - rect.min.x, screen_pos.y - rect.min.y);
            if pressed {
                events.push(PointerEvent::Down(pos));
            }
            events.push(PointerEvent::Move(pos));
            if scroll_y > 0.0 {
                events.push(PointerEvent::Wheel(ZoomDirection::In));
            } else if scroll_y < 0.0 {
                events.push(PointerEvent::Wheel(ZoomDirection::Out));
            }
        }
        None => events.push(PointerEvent::Leave),
    }

    if released {
        events.push(PointerEvent::Up);
    }

    events
}

/// Maps content-space coordinates through the scene transform into absolute
/// screen coordinates inside the canvas rect.
struct ScreenMap {
    origin: egui::Pos2,
    pan: Vec2,
    zoom: f32,
}

impl ScreenMap {
    fn pos(&self, p: Vec2) -> egui::Pos2 {
        egui::pos2(
            self.origin.x + p.x * self.zoom + self.pan.x,
            self.origin.y + p.y * self.zoom + self.pan.y,
        )
    }

    fn rect(&self, r: Rect) -> egui::Rect {
        egui::Rect::from_min_max(self.pos(r.min), self.pos(r.max))
    }
}

fn color32(c: Color) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(c.r, c.g, c.b, c.a)
}

fn paint_scene(painter: &egui::Painter, rect: egui::Rect, scene: &Scene) {
    let map = ScreenMap {
        origin: rect.min,
        pan: scene.transform.pan,
        zoom: scene.transform.zoom,
    };
    let zoom = map.zoom;

    // Edges underneath, nodes on top.
    for edge in &scene.edges {
        let stroke = egui::Stroke::new(edge.width * zoom, color32(edge.color));
        match edge.curve {
            EdgeCurve::Cubic(curve) => {
                painter.add(CubicBezierShape::from_points_stroke(
                    [
                        map.pos(curve.start),
                        map.pos(curve.control1),
                        map.pos(curve.control2),
                        map.pos(curve.end),
                    ],
                    false,
                    egui::Color32::TRANSPARENT,
                    stroke,
                ));
            }
            EdgeCurve::Quadratic(curve) => {
                painter.add(QuadraticBezierShape::from_points_stroke(
                    [map.pos(curve.start), map.pos(curve.control), map.pos(curve.end)],
                    false,
                    egui::Color32::TRANSPARENT,
                    stroke,
                ));
            }
        }
    }

    for node in &scene.nodes {
        let node_rect = map.rect(node.rect);
        let radius = 8.0 * zoom;

        painter.rect_filled(node_rect, radius, color32(node.colors.fill));
        let border = if node.hovered {
            egui::Stroke::new(2.5 * zoom, color32(node.hover_border))
        } else {
            egui::Stroke::new(1.5 * zoom, color32(node.colors.border))
        };
        painter.rect_stroke(node_rect, radius, border, egui::StrokeKind::Middle);

        painter.text(
            node_rect.center(),
            egui::Align2::CENTER_CENTER,
            &node.label,
            egui::FontId::proportional(node.font_size * zoom),
            color32(node.colors.text),
        );

        if let Some(badge) = &node.badge {
            let center = map.pos(badge.center);
            painter.circle_filled(center, badge.radius * zoom, color32(badge.fill));
            painter.text(
                center,
                egui::Align2::CENTER_CENTER,
                badge.count.to_string(),
                egui::FontId::proportional(10.0 * zoom),
                color32(badge.text),
            );
        }
    }
}
