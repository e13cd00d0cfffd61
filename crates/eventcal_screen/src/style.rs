//! Day cell styles.
//!
//! Each [`StyleKey`] maps to a pair of functions: `build` allocates the cell
//! and returns its response, `update` paints a [`DayCell`] into the allocated
//! rect. The calendar picks the style from the cell's key every frame.

use std::collections::HashMap;

use egui::{
    pos2, vec2, Align2, CornerRadius, FontId, Painter, Rect, Response, Sense, Stroke, Vec2,
};
use eventcal::{DayCell, StyleKey};

use crate::Palette;

const LABEL_FONT_SIZE: f32 = 18.0;
const LABEL_CORNER_RADIUS: f32 = 16.0;
const MARKER_SIZE: f32 = 10.0;
const MARKER_SPACING: f32 = 4.0;
const MARKER_BOTTOM_INSET: f32 = 4.0;

pub type BuildFn = fn(&mut egui::Ui, Vec2) -> Response;
pub type UpdateFn = fn(&Painter, Rect, &DayCell, &Palette);

#[derive(Clone, Copy)]
pub struct CellStyle {
    pub build: BuildFn,
    pub update: UpdateFn,
}

pub struct StyleRegistry {
    styles: HashMap<StyleKey, CellStyle>,
}

impl StyleRegistry {
    pub fn empty() -> Self {
        Self {
            styles: HashMap::new(),
        }
    }

    pub fn register(&mut self, key: StyleKey, style: CellStyle) {
        self.styles.insert(key, style);
    }

    pub fn get(&self, key: StyleKey) -> Option<&CellStyle> {
        self.styles.get(&key)
    }

    /// Builds and paints one cell, falling back to the plain day style when
    /// `cell.style` has nothing registered.
    pub fn show(
        &self,
        ui: &mut egui::Ui,
        size: Vec2,
        cell: &DayCell,
        palette: &Palette,
    ) -> Response {
        let style = self
            .get(cell.style)
            .or_else(|| self.get(StyleKey::Day))
            .copied()
            .unwrap_or(DAY_STYLE);

        let response = (style.build)(ui, size);
        if ui.is_rect_visible(response.rect) {
            (style.update)(&ui.painter_at(response.rect), response.rect, cell, palette);
        }
        response
    }
}

impl Default for StyleRegistry {
    fn default() -> Self {
        let mut registry = Self::empty();
        registry.register(StyleKey::Day, DAY_STYLE);
        registry.register(StyleKey::SelectedDay, SELECTED_DAY_STYLE);
        registry
    }
}

pub const DAY_STYLE: CellStyle = CellStyle {
    build: build_day_label,
    update: update_day_label,
};

pub const SELECTED_DAY_STYLE: CellStyle = CellStyle {
    build: build_day_label,
    update: update_selected_day_label,
};

fn build_day_label(ui: &mut egui::Ui, size: Vec2) -> Response {
    let (_rect, response) = ui.allocate_exact_size(size, Sense::click());
    response
}

fn corner_radius(rect: Rect) -> CornerRadius {
    let radius = LABEL_CORNER_RADIUS.min(rect.width().min(rect.height()) * 0.5);
    CornerRadius::same(radius as u8)
}

fn update_day_label(painter: &Painter, rect: Rect, cell: &DayCell, palette: &Palette) {
    let fill = palette.background(cell.background);
    if fill != egui::Color32::TRANSPARENT {
        painter.rect_filled(rect, corner_radius(rect), fill);
    }

    painter.text(
        rect.center(),
        Align2::CENTER_CENTER,
        &cell.text,
        FontId::proportional(LABEL_FONT_SIZE),
        palette.text(cell.text_color),
    );

    paint_markers(painter, rect, cell, palette);
}

fn update_selected_day_label(painter: &Painter, rect: Rect, cell: &DayCell, palette: &Palette) {
    update_day_label(painter, rect, cell, palette);
    painter.rect_stroke(
        rect.shrink(1.0),
        corner_radius(rect),
        Stroke::new(1.5, palette.outline),
        egui::StrokeKind::Inside,
    );
}

/// Visible markers sit in a row centered along the bottom edge; hidden ones
/// take no space.
fn paint_markers(painter: &Painter, rect: Rect, cell: &DayCell, palette: &Palette) {
    let colors: Vec<_> = [
        (cell.marker_a, palette.marker_a),
        (cell.marker_b, palette.marker_b),
    ]
    .into_iter()
    .filter_map(|(visible, color)| visible.then_some(color))
    .collect();

    if colors.is_empty() {
        return;
    }

    let n = colors.len() as f32;
    let row_width = n * MARKER_SIZE + (n - 1.0) * MARKER_SPACING;
    let y = rect.bottom() - MARKER_BOTTOM_INSET - MARKER_SIZE * 0.5;
    let mut x = rect.center().x - row_width * 0.5 + MARKER_SIZE * 0.5;

    for color in colors {
        painter.circle_filled(pos2(x, y), MARKER_SIZE * 0.5, color);
        x += MARKER_SIZE + MARKER_SPACING;
    }
}

/// Square cell side that fits seven columns with `margin` between them.
pub fn cell_size(month_width: f32, margin: f32) -> Vec2 {
    let side = ((month_width - 6.0 * margin) / 7.0).max(MARKER_SIZE * 2.0 + MARKER_SPACING);
    vec2(side, side)
}
