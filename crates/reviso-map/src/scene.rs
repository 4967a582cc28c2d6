use crate::geometry::{CubicBezier, QuadraticBezier, Rect, Vec2};
use crate::layout::LayoutResult;
use crate::style::{
    self, Color, NodeColors, COLOR_BADGE_FILL, COLOR_BADGE_TEXT, COLOR_HOVER_BORDER,
    EDGE_COLOR, EDGE_HOVER_COLOR, EDGE_HOVER_WIDTH, EDGE_WIDTH,
};
use crate::viewport::Viewport;
use reviso_core::{LayoutMode, NodeId};

// Node sizing. Root nodes are wider per character and taller than the rest.
const ROOT_CHAR_WIDTH: f32 = 9.0;
const ROOT_MIN_WIDTH: f32 = 140.0;
const ROOT_HEIGHT: f32 = 60.0;
const CHAR_WIDTH: f32 = 7.5;
const MIN_WIDTH: f32 = 90.0;
const NODE_HEIGHT: f32 = 44.0;
const MAX_WIDTH: f32 = 240.0;
const LABEL_PADDING: f32 = 28.0;

const ROOT_FONT_SIZE: f32 = 16.0;
const FONT_SIZE: f32 = 13.0;

/// Labels longer than this many characters are shown truncated with an
/// ellipsis; the underlying string is never altered.
const LABEL_DISPLAY_CHARS: usize = 24;

/// Perpendicular control-point offset factor for radial edges; the arc
/// helper halves it, giving the curve a bow of `distance * 0.1`.
const RADIAL_ARC_OFFSET: f32 = 0.2;

const BADGE_RADIUS: f32 = 10.0;

/// The single outer transform the whole scene is drawn under:
/// `translate(pan) scale(zoom)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneTransform {
    pub pan: Vec2,
    pub zoom: f32,
}

/// One edge curve, in content-space coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EdgeCurve {
    Cubic(CubicBezier),
    Quadratic(QuadraticBezier),
}

#[derive(Debug, Clone, PartialEq)]
pub struct EdgePath {
    pub curve: EdgeCurve,
    pub width: f32,
    pub color: Color,
    pub hovered: bool,
}

/// Circular child-count badge drawn on non-leaf nodes.
#[derive(Debug, Clone, PartialEq)]
pub struct Badge {
    pub center: Vec2,
    pub radius: f32,
    pub count: usize,
    pub fill: Color,
    pub text: Color,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NodeShape {
    pub id: NodeId,
    pub rect: Rect,
    pub level: u32,
    pub colors: NodeColors,
    /// Display text; may end in an ellipsis if the label was truncated.
    pub label: String,
    pub font_size: f32,
    pub badge: Option<Badge>,
    pub hovered: bool,
    pub hover_border: Color,
}

/// Render instruction set for one frame: edges first (drawn underneath),
/// then nodes, all in content space under one outer transform.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub transform: SceneTransform,
    pub edges: Vec<EdgePath>,
    pub nodes: Vec<NodeShape>,
}

impl Scene {
    /// Content-space hit regions for feeding the hit tester.
    pub fn hit_regions(&self) -> impl Iterator<Item = (NodeId, Rect)> + '_ {
        self.nodes.iter().map(|n| (n.id.clone(), n.rect))
    }
}

/// Build the renderable scene for one frame.
///
/// Pure: reads the layout, viewport, and hover id, mutates nothing.
pub fn build_scene(
    layout: &LayoutResult<'_>,
    viewport: &Viewport,
    mode: LayoutMode,
    hovered: Option<&NodeId>,
) -> Scene {
    let rects: Vec<Rect> = layout
        .nodes
        .iter()
        .map(|p| node_rect(mode, p.pos, p.level, &p.node.label))
        .collect();

    let mut edges = Vec::with_capacity(layout.nodes.len().saturating_sub(1));
    for (idx, positioned) in layout.nodes.iter().enumerate() {
        let Some(parent_idx) = positioned.parent else {
            continue;
        };
        let parent = &layout.nodes[parent_idx];
        let edge_hovered = hovered
            .is_some_and(|h| *h == positioned.node.id || *h == parent.node.id);

        let curve = match mode {
            LayoutMode::Tree => {
                let from = Vec2::new(rects[parent_idx].max.x, rects[parent_idx].center().y);
                let to = Vec2::new(rects[idx].min.x, rects[idx].center().y);
                EdgeCurve::Cubic(CubicBezier::s_curve(from, to))
            }
            LayoutMode::Radial => EdgeCurve::Quadratic(QuadraticBezier::arc(
                rects[parent_idx].center(),
                rects[idx].center(),
                RADIAL_ARC_OFFSET,
            )),
        };

        edges.push(EdgePath {
            curve,
            width: if edge_hovered { EDGE_HOVER_WIDTH } else { EDGE_WIDTH },
            color: if edge_hovered { EDGE_HOVER_COLOR } else { EDGE_COLOR },
            hovered: edge_hovered,
        });
    }

    let nodes = layout
        .nodes
        .iter()
        .zip(&rects)
        .map(|(positioned, rect)| {
            let child_count = positioned.node.children.len();
            let badge = (child_count > 0).then(|| Badge {
                center: Vec2::new(rect.max.x, rect.min.y),
                radius: BADGE_RADIUS,
                count: child_count,
                fill: COLOR_BADGE_FILL,
                text: COLOR_BADGE_TEXT,
            });

            NodeShape {
                id: positioned.node.id.clone(),
                rect: *rect,
                level: positioned.level,
                colors: style::level_colors(positioned.level),
                label: display_label(&positioned.node.label),
                font_size: if positioned.level == 0 { ROOT_FONT_SIZE } else { FONT_SIZE },
                badge,
                hovered: hovered.is_some_and(|h| *h == positioned.node.id),
                hover_border: COLOR_HOVER_BORDER,
            }
        })
        .collect();

    Scene {
        transform: SceneTransform {
            pan: viewport.pan,
            zoom: viewport.zoom,
        },
        edges,
        nodes,
    }
}

fn node_rect(mode: LayoutMode, pos: Vec2, level: u32, label: &str) -> Rect {
    let size = node_size(level, label);
    match mode {
        // Tree positions are top-left corners, radial positions are centers.
        LayoutMode::Tree => Rect::from_pos_size(pos, size),
        LayoutMode::Radial => Rect::from_center_size(pos, size),
    }
}

fn node_size(level: u32, label: &str) -> Vec2 {
    let chars = label.chars().count() as f32;
    let (char_width, min_width, height) = if level == 0 {
        (ROOT_CHAR_WIDTH, ROOT_MIN_WIDTH, ROOT_HEIGHT)
    } else {
        (CHAR_WIDTH, MIN_WIDTH, NODE_HEIGHT)
    };
    let width = (chars * char_width + LABEL_PADDING).clamp(min_width, MAX_WIDTH);
    Vec2::new(width, height)
}

fn display_label(label: &str) -> String {
    if label.chars().count() > LABEL_DISPLAY_CHARS {
        let mut truncated: String = label.chars().take(LABEL_DISPLAY_CHARS).collect();
        truncated.push('…');
        truncated
    } else {
        label.to_string()
    }
}
