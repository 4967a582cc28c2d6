pub mod geometry;
pub mod hit_tester;
pub mod interaction;
pub mod layout;
pub mod scene;
pub mod style;
pub mod viewport;

pub use geometry::{CubicBezier, QuadraticBezier, Rect, Vec2};
pub use hit_tester::HitTester;
pub use interaction::{DragState, InteractionState, PointerEvent};
pub use layout::{
    LayoutConfig, LayoutResult, Layouter, PositionedNode, RadialLayouter, TreeLayouter,
    layouter_for,
};
pub use scene::{Badge, EdgeCurve, EdgePath, NodeShape, Scene, SceneTransform, build_scene};
pub use style::{Color, NodeColors, level_colors};
pub use viewport::{Viewport, ZoomDirection};
