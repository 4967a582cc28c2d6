use eframe::egui;
use reviso_core::{LayoutMode, MindMapNode};
use reviso_map::layout::LayoutConfig;
use reviso_map::viewport::ZoomDirection;
use reviso_map::{HitTester, InteractionState, Viewport};

use crate::canvas;

/// Bundled demo map shown when no file is given on the command line.
const SAMPLE_MAP: &str = r#"{
  "id": "root",
  "label": "Reviso",
  "children": [
    {
      "id": "capture",
      "label": "Capture",
      "children": [
        { "id": "capture-notes", "label": "Quick notes" },
        { "id": "capture-import", "label": "Import documents" }
      ]
    },
    {
      "id": "organize",
      "label": "Organize",
      "children": [
        { "id": "organize-maps", "label": "Mind maps" },
        { "id": "organize-tags", "label": "Tags and links" },
        { "id": "organize-archive", "label": "Archive" }
      ]
    },
    {
      "id": "review",
      "label": "Review",
      "children": [
        { "id": "review-spaced", "label": "Spaced repetition" },
        { "id": "review-quiz", "label": "Self-quizzing" }
      ]
    },
    { "id": "share", "label": "Share" }
  ]
}"#;

pub fn sample_map() -> MindMapNode {
    let tree: MindMapNode =
        serde_json::from_str(SAMPLE_MAP).expect("bundled sample map must parse");
    tree.validate().expect("bundled sample map must validate");
    tree
}

pub struct RevisoApp {
    pub tree: MindMapNode,
    pub mode: LayoutMode,
    pub config: LayoutConfig,
    pub viewport: Viewport,
    pub interaction: InteractionState,
    pub hit_tester: HitTester,
    /// Refit the viewport on the next frame (startup, mode switch).
    pub needs_fit: bool,
}

impl RevisoApp {
    pub fn new(tree: MindMapNode) -> Self {
        Self {
            tree,
            mode: LayoutMode::default(),
            config: LayoutConfig::default(),
            viewport: Viewport::default(),
            interaction: InteractionState::new(),
            hit_tester: HitTester::new(),
            needs_fit: true,
        }
    }

    fn set_mode(&mut self, mode: LayoutMode) {
        if self.mode != mode {
            self.mode = mode;
            self.needs_fit = true;
        }
    }

    fn toolbar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label("Layout:");
            let mut mode = self.mode;
            ui.selectable_value(&mut mode, LayoutMode::Tree, "Tree");
            ui.selectable_value(&mut mode, LayoutMode::Radial, "Radial");
            self.set_mode(mode);

            ui.separator();

            if ui.button("Fit").clicked() {
                self.needs_fit = true;
            }
            if ui.button("\u{2212}").clicked() {
                self.viewport.zoom_step(ZoomDirection::Out);
            }
            if ui.button("+").clicked() {
                self.viewport.zoom_step(ZoomDirection::In);
            }
            ui.label(format!("{:.0}%", self.viewport.zoom * 100.0));

            ui.separator();
            ui.label(format!(
                "{} nodes, depth {}",
                self.tree.node_count(),
                self.tree.depth()
            ));
        });
    }
}

impl eframe::App for RevisoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            self.toolbar(ui);
        });

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                canvas::show(self, ui);
            });
    }
}
