use crate::geometry::{Rect, Vec2};
use reviso_core::{LayoutMode, MindMapNode};
use std::f32::consts::TAU;

/// Geometry constants shared by both layout strategies.
///
/// Gathered into one struct so the numbers that shape a layout are explicit
/// configuration rather than magic values inside the algorithms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutConfig {
    /// Distance from the center to level-1 nodes in the radial layout
    pub base_radius: f32,
    /// Additional radius per level beyond the first
    pub radius_increment: f32,
    /// Horizontal slot reserved per node
    pub node_width: f32,
    /// Vertical row reserved per node
    pub node_height: f32,
    /// Gap between depth columns in the tree layout
    pub horizontal_gap: f32,
    /// Gap between sibling rows in the tree layout
    pub vertical_gap: f32,
    /// Padding added around the content bounding box
    pub bounds_margin: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            base_radius: 180.0,
            radius_increment: 160.0,
            node_width: 160.0,
            node_height: 50.0,
            horizontal_gap: 80.0,
            vertical_gap: 30.0,
            bounds_margin: 60.0,
        }
    }
}

/// A tree node annotated with concrete 2D coordinates and depth for one
/// render pass.
///
/// `parent` is an index into the flat output array, or `None` for the root;
/// it exists for edge drawing and centering math only. In tree mode `pos` is
/// the node's top-left corner, in radial mode its visual center.
#[derive(Debug, Clone, Copy)]
pub struct PositionedNode<'a> {
    pub node: &'a MindMapNode,
    pub pos: Vec2,
    pub level: u32,
    pub parent: Option<usize>,
}

/// Output of one layout pass: the flat positioned-node list (root first,
/// depth-first order) and the padded content bounding box.
#[derive(Debug, Clone)]
pub struct LayoutResult<'a> {
    pub nodes: Vec<PositionedNode<'a>>,
    pub bounds: Rect,
}

/// A layout strategy mapping a rooted tree into positioned nodes.
///
/// Implementations are pure: no side effects, and identical input always
/// produces identical coordinates.
pub trait Layouter {
    fn execute<'a>(&self, root: &'a MindMapNode, origin: Vec2) -> LayoutResult<'a>;
}

/// The layouter for a given layout mode, with the given constants.
pub fn layouter_for(mode: LayoutMode, config: LayoutConfig) -> Box<dyn Layouter> {
    match mode {
        LayoutMode::Tree => Box::new(TreeLayouter { config }),
        LayoutMode::Radial => Box::new(RadialLayouter { config }),
    }
}

/// Radial layout: the root sits at the origin and each deeper level is
/// pushed onto a larger circle. Every node subdivides its angular sector
/// into equal sub-sectors, one per child in child order; a child is placed
/// at the midpoint angle of its sub-sector.
pub struct RadialLayouter {
    pub config: LayoutConfig,
}

impl Layouter for RadialLayouter {
    fn execute<'a>(&self, root: &'a MindMapNode, origin: Vec2) -> LayoutResult<'a> {
        let mut nodes = Vec::with_capacity(root.node_count());
        nodes.push(PositionedNode {
            node: root,
            pos: origin,
            level: 0,
            parent: None,
        });
        self.place_children(&mut nodes, root, 0, 0, (0.0, TAU), origin);

        let bounds = centered_bounds(&nodes, self.config);
        LayoutResult { nodes, bounds }
    }
}

impl RadialLayouter {
    fn place_children<'a>(
        &self,
        nodes: &mut Vec<PositionedNode<'a>>,
        parent_node: &'a MindMapNode,
        parent_idx: usize,
        parent_level: u32,
        sector: (f32, f32),
        center: Vec2,
    ) {
        let count = parent_node.children.len();
        if count == 0 {
            return;
        }

        let level = parent_level + 1;
        let radius = self.config.base_radius + (level - 1) as f32 * self.config.radius_increment;
        let span = (sector.1 - sector.0) / count as f32;

        for (i, child) in parent_node.children.iter().enumerate() {
            let start = sector.0 + i as f32 * span;
            let angle = start + span * 0.5;
            let pos = Vec2::new(
                center.x + radius * angle.cos(),
                center.y + radius * angle.sin(),
            );

            let idx = nodes.len();
            nodes.push(PositionedNode {
                node: child,
                pos,
                level,
                parent: Some(parent_idx),
            });
            self.place_children(nodes, child, idx, level, (start, start + span), center);
        }
    }
}

/// Horizontal tree layout: depth-ordered columns, with leaves stacked
/// top-to-bottom by a running cursor and internal nodes centered on the
/// midpoint of their first and last child.
pub struct TreeLayouter {
    pub config: LayoutConfig,
}

impl Layouter for TreeLayouter {
    fn execute<'a>(&self, root: &'a MindMapNode, origin: Vec2) -> LayoutResult<'a> {
        let mut nodes = Vec::with_capacity(root.node_count());
        self.place_subtree(&mut nodes, root, 0, None, origin, origin.y);

        let bounds = top_left_bounds(&nodes, self.config);
        LayoutResult { nodes, bounds }
    }
}

impl TreeLayouter {
    /// Position `node` and its subtree, with rows starting at `cursor_y`.
    /// Returns the total vertical height consumed by the subtree so siblings
    /// can be stacked without overlap.
    fn place_subtree<'a>(
        &self,
        nodes: &mut Vec<PositionedNode<'a>>,
        node: &'a MindMapNode,
        level: u32,
        parent: Option<usize>,
        origin: Vec2,
        cursor_y: f32,
    ) -> f32 {
        let x = origin.x + level as f32 * (self.config.node_width + self.config.horizontal_gap);
        let index = nodes.len();
        nodes.push(PositionedNode {
            node,
            pos: Vec2::new(x, cursor_y),
            level,
            parent,
        });

        if node.children.is_empty() {
            return self.config.node_height;
        }

        let mut child_cursor = cursor_y;
        let mut first_child = None;
        let mut last_child = index;
        for child in &node.children {
            let child_idx = nodes.len();
            let height =
                self.place_subtree(nodes, child, level + 1, Some(index), origin, child_cursor);
            child_cursor += height + self.config.vertical_gap;
            first_child.get_or_insert(child_idx);
            last_child = child_idx;
        }
        let consumed = child_cursor - cursor_y - self.config.vertical_gap;

        // Center over the subtree: midpoint of the first and last child
        // specifically, not the mean of all children.
        let first_y = nodes[first_child.unwrap_or(index)].pos.y;
        let last_y = nodes[last_child].pos.y;
        nodes[index].pos.y = (first_y + last_y) * 0.5;

        consumed.max(self.config.node_height)
    }
}

/// Bounds for center-anchored positions (radial mode): node half-extents
/// plus the configured margin around the coordinate extremes.
fn centered_bounds(nodes: &[PositionedNode<'_>], config: LayoutConfig) -> Rect {
    let pad = Vec2::new(
        config.node_width * 0.5 + config.bounds_margin,
        config.node_height * 0.5 + config.bounds_margin,
    );
    raw_bounds(nodes).expand2(pad)
}

/// Bounds for top-left-anchored positions (tree mode): the full node extent
/// hangs right/down from each position.
fn top_left_bounds(nodes: &[PositionedNode<'_>], config: LayoutConfig) -> Rect {
    let raw = raw_bounds(nodes);
    Rect::from_min_max(
        raw.min,
        Vec2::new(raw.max.x + config.node_width, raw.max.y + config.node_height),
    )
    .expand(config.bounds_margin)
}

fn raw_bounds(nodes: &[PositionedNode<'_>]) -> Rect {
    let mut min = Vec2::new(f32::INFINITY, f32::INFINITY);
    let mut max = Vec2::new(f32::NEG_INFINITY, f32::NEG_INFINITY);
    for positioned in nodes {
        min.x = min.x.min(positioned.pos.x);
        min.y = min.y.min(positioned.pos.y);
        max.x = max.x.max(positioned.pos.x);
        max.y = max.y.max(positioned.pos.y);
    }
    Rect::from_min_max(min, max)
}
