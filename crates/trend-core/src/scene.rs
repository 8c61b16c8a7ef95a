// File: crates/trend-core/src/scene.rs
// Summary: Owned scene of immediate-mode drawing layers and text labels, addressed by opaque handles.
// Notes:
// - Layers record path ops until `stroke`/`fill` commits them as a draw command.
// - Draw order is creation order; the raster backend replays commands in that order.

use skia_safe as skia;

use crate::geometry::Point;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LayerId(usize);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LabelId(usize);

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathOp {
    MoveTo(Point),
    LineTo(Point),
    Circle { center: Point, radius: f32 },
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Stroke { ops: Vec<PathOp>, color: skia::Color, width: f32 },
    Fill { ops: Vec<PathOp>, color: skia::Color },
}

#[derive(Clone, Debug)]
pub struct Layer {
    pub name: String,
    pub stroke_color: skia::Color,
    pub fill_color: skia::Color,
    pub line_width: f32,
    path: Vec<PathOp>,
    commands: Vec<DrawCommand>,
}

impl Layer {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            stroke_color: skia::Color::BLACK,
            fill_color: skia::Color::WHITE,
            line_width: 1.0,
            path: Vec::new(),
            commands: Vec::new(),
        }
    }

    pub fn move_to(&mut self, p: Point) {
        self.path.push(PathOp::MoveTo(p));
    }

    pub fn line_to(&mut self, p: Point) {
        self.path.push(PathOp::LineTo(p));
    }

    pub fn circle(&mut self, center: Point, radius: f32) {
        self.path.push(PathOp::Circle { center, radius });
    }

    /// Commit the pending path as a stroke with the current color and width.
    pub fn stroke(&mut self) {
        if self.path.is_empty() { return; }
        let ops = std::mem::take(&mut self.path);
        self.commands.push(DrawCommand::Stroke { ops, color: self.stroke_color, width: self.line_width });
    }

    /// Commit the pending path as a fill with the current fill color.
    pub fn fill(&mut self) {
        if self.path.is_empty() { return; }
        let ops = std::mem::take(&mut self.path);
        self.commands.push(DrawCommand::Fill { ops, color: self.fill_color });
    }

    /// Drop both committed commands and any pending path.
    pub fn clear(&mut self) {
        self.path.clear();
        self.commands.clear();
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty() && self.path.is_empty()
    }

    /// Number of committed circles across all commands.
    pub fn circle_count(&self) -> usize {
        self.committed_ops().filter(|op| matches!(op, PathOp::Circle { .. })).count()
    }

    /// Number of committed line segments across all commands.
    pub fn line_count(&self) -> usize {
        self.committed_ops().filter(|op| matches!(op, PathOp::LineTo(_))).count()
    }

    fn committed_ops(&self) -> impl Iterator<Item = &PathOp> {
        self.commands.iter().flat_map(|c| match c {
            DrawCommand::Stroke { ops, .. } | DrawCommand::Fill { ops, .. } => ops.iter(),
        })
    }
}

#[derive(Clone, Debug)]
pub struct Label {
    pub name: String,
    pub text: String,
    pub position: Point,
    pub font_size: f32,
    pub color: skia::Color,
    pub visible: bool,
}

/// Owner of every drawable the chart creates.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    layers: Vec<Layer>,
    labels: Vec<Label>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create_layer(&mut self, name: &str) -> LayerId {
        self.layers.push(Layer::new(name));
        LayerId(self.layers.len() - 1)
    }

    pub fn create_label(&mut self, name: &str, text: &str, position: Point, font_size: f32, color: skia::Color) -> LabelId {
        self.labels.push(Label {
            name: name.to_string(),
            text: text.to_string(),
            position,
            font_size,
            color,
            visible: true,
        });
        LabelId(self.labels.len() - 1)
    }

    pub fn layer(&self, id: LayerId) -> &Layer { &self.layers[id.0] }
    pub fn layer_mut(&mut self, id: LayerId) -> &mut Layer { &mut self.layers[id.0] }
    pub fn label(&self, id: LabelId) -> &Label { &self.labels[id.0] }
    pub fn label_mut(&mut self, id: LabelId) -> &mut Label { &mut self.labels[id.0] }

    /// Two distinct layers borrowed mutably at once.
    pub fn layer_pair_mut(&mut self, a: LayerId, b: LayerId) -> (&mut Layer, &mut Layer) {
        assert_ne!(a, b, "layer_pair_mut needs two distinct layers");
        if a.0 < b.0 {
            let (lo, hi) = self.layers.split_at_mut(b.0);
            (&mut lo[a.0], &mut hi[0])
        } else {
            let (lo, hi) = self.layers.split_at_mut(a.0);
            (&mut hi[0], &mut lo[b.0])
        }
    }

    /// A layer and a label borrowed mutably at once.
    pub fn layer_and_label_mut(&mut self, layer: LayerId, label: LabelId) -> (&mut Layer, &mut Label) {
        (&mut self.layers[layer.0], &mut self.labels[label.0])
    }

    pub fn layers(&self) -> &[Layer] { &self.layers }
    pub fn labels(&self) -> &[Label] { &self.labels }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stroke_commits_pending_path() {
        let mut scene = Scene::new();
        let id = scene.create_layer("lines");
        let layer = scene.layer_mut(id);
        layer.move_to(Point::new(0.0, 0.0));
        layer.line_to(Point::new(1.0, 1.0));
        assert!(layer.commands().is_empty());
        layer.stroke();
        assert_eq!(layer.commands().len(), 1);
        assert_eq!(layer.line_count(), 1);
        layer.clear();
        assert!(layer.is_empty());
    }

    #[test]
    fn pair_borrow_keeps_order() {
        let mut scene = Scene::new();
        let a = scene.create_layer("a");
        let b = scene.create_layer("b");
        let (lb, la) = scene.layer_pair_mut(b, a);
        assert_eq!(lb.name, "b");
        assert_eq!(la.name, "a");
    }
}
