// File: crates/trend-core/src/table.rs
// Summary: Static chart furniture: one horizontal line per grid row plus row and column titles.

use crate::config::ChartConfig;
use crate::grid::GridPoints;
use crate::scene::{LabelId, Layer, Scene};
use crate::theme::Theme;

/// Stroke one line per row across the full rect width.
pub fn draw_rows(grid: &GridPoints, layer: &mut Layer, theme: &Theme) {
    layer.line_width = 1.0;
    layer.stroke_color = theme.grid;
    layer.fill_color = theme.grid;
    let right = grid.rect().right();
    for &p in grid.column(0) {
        layer.move_to(p);
        layer.line_to(p.with_x(right));
    }
    layer.stroke();
}

/// Create one label per row and per column from the configured title tables.
pub fn add_titles(grid: &GridPoints, scene: &mut Scene, cfg: &ChartConfig, theme: &Theme) -> Vec<LabelId> {
    let ro = cfg.row_title_offset;
    let co = cfg.column_title_offset;
    let mut ids = Vec::with_capacity(grid.row_count() + grid.column_count());
    for (r, &p) in grid.column(0).iter().enumerate() {
        let name = format!("row-title-{r}");
        ids.push(scene.create_label(&name, &cfg.row_titles[r], p.offset(ro.x, ro.y), cfg.title_font_size, theme.title));
    }
    for c in 0..grid.column_count() {
        let p = grid.column(c)[0];
        let name = format!("column-title-{c}");
        ids.push(scene.create_label(&name, &cfg.column_titles[c], p.offset(co.x, co.y), cfg.title_font_size, theme.title));
    }
    ids
}
