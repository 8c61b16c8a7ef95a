// File: crates/trend-core/src/render.rs
// Summary: Headless rendering of the chart scene using Skia CPU raster surfaces (PNG file, PNG bytes, RGBA8).

use anyhow::{Context, Result};
use skia_safe as skia;

use crate::chart::TrendChart;
use crate::scene::{DrawCommand, PathOp, Scene};
use crate::text::TextShaper;
use crate::types::{Insets, HEIGHT, WIDTH};

pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    /// Space between the surface edge and the chart's local origin.
    pub insets: Insets,
    /// Overrides the theme background when set.
    pub background: Option<skia::Color>,
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            background: None,
            draw_labels: true,
        }
    }
}

impl TrendChart {
    /// Render the chart to a PNG at `output_png_path` using a CPU raster surface.
    pub fn render_to_png(&self, opts: &RenderOptions, output_png_path: impl AsRef<std::path::Path>) -> Result<()> {
        let path = output_png_path.as_ref();
        let bytes = self.render_to_png_bytes(opts)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, bytes).with_context(|| format!("write {}", path.display()))?;
        Ok(())
    }

    /// Render the chart and return encoded PNG bytes.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let mut surface = self.raster(opts)?;
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render the chart and read back unpremultiplied RGBA8 pixels: `(pixels, width, height, stride)`.
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, i32, i32, usize)> {
        let mut surface = self.raster(opts)?;
        let info = skia::ImageInfo::new(
            (opts.width, opts.height),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let stride = opts.width as usize * 4;
        let mut px = vec![0u8; stride * opts.height as usize];
        if !surface.read_pixels(&info, &mut px, stride, (0, 0)) {
            anyhow::bail!("read_pixels failed");
        }
        Ok((px, opts.width, opts.height, stride))
    }

    fn raster(&self, opts: &RenderOptions) -> Result<skia::Surface> {
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
        let canvas = surface.canvas();
        canvas.clear(opts.background.unwrap_or(self.theme().background));
        canvas.save();
        canvas.translate((opts.insets.left as f32, opts.insets.top as f32));
        draw_scene(canvas, self.scene(), opts.draw_labels);
        canvas.restore();
        Ok(surface)
    }
}

/// Replay every layer in creation order, then every visible label.
pub fn draw_scene(canvas: &skia::Canvas, scene: &Scene, draw_labels: bool) {
    for layer in scene.layers() {
        for cmd in layer.commands() {
            draw_command(canvas, cmd);
        }
    }
    if !draw_labels { return; }
    let shaper = TextShaper::new();
    for label in scene.labels().iter().filter(|l| l.visible) {
        shaper.draw_centered(canvas, &label.text, label.position.x, label.position.y, label.font_size, label.color);
    }
}

fn draw_command(canvas: &skia::Canvas, cmd: &DrawCommand) {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    let ops = match cmd {
        DrawCommand::Stroke { ops, color, width } => {
            paint.set_style(skia::paint::Style::Stroke);
            paint.set_stroke_width(*width);
            paint.set_color(*color);
            ops
        }
        DrawCommand::Fill { ops, color } => {
            paint.set_style(skia::paint::Style::Fill);
            paint.set_color(*color);
            ops
        }
    };
    canvas.draw_path(&build_path(ops), &paint);
}

fn build_path(ops: &[PathOp]) -> skia::Path {
    let mut path = skia::Path::new();
    for op in ops {
        match *op {
            PathOp::MoveTo(p) => { path.move_to((p.x, p.y)); }
            PathOp::LineTo(p) => { path.line_to((p.x, p.y)); }
            PathOp::Circle { center, radius } => { path.add_circle((center.x, center.y), radius, None); }
        }
    }
    path
}
