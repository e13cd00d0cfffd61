use egui::{vec2, RichText, ScrollArea, Sense};
use eventcal::{CalendarContent, CalendarDate, MonthSection, MonthsLayout};

use crate::style::{cell_size, StyleRegistry};
use crate::Palette;

const WEEKDAY_HEADER_HEIGHT: f32 = 16.0;

/// Draws the whole calendar and returns the day tapped this frame, if any.
#[profiling::function]
pub fn calendar_ui(
    ui: &mut egui::Ui,
    content: &CalendarContent,
    styles: &StyleRegistry,
    palette: &Palette,
) -> Option<CalendarDate> {
    if content.is_empty() {
        ui.centered_and_justified(|ui| {
            ui.label(RichText::new("No days left before the calendar horizon").weak());
        });
        return None;
    }

    let mut tapped = None;

    match content.layout {
        MonthsLayout::Horizontal { month_width } => {
            ScrollArea::horizontal()
                .id_salt("eventcal-months-horizontal")
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    ui.horizontal_top(|ui| {
                        ui.spacing_mut().item_spacing.x = content.inter_month_spacing;
                        for month in &content.months {
                            ui.vertical(|ui| {
                                ui.set_width(month_width);
                                if let Some(day) =
                                    month_ui(ui, month, content, month_width, styles, palette)
                                {
                                    tapped = Some(day);
                                }
                            });
                        }
                    });
                });
        }
        MonthsLayout::Vertical => {
            let month_width = ui.available_width();
            ScrollArea::vertical()
                .id_salt("eventcal-months-vertical")
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    for month in &content.months {
                        if let Some(day) =
                            month_ui(ui, month, content, month_width, styles, palette)
                        {
                            tapped = Some(day);
                        }
                        ui.add_space(content.inter_month_spacing);
                    }
                });
        }
    }

    tapped
}

fn month_ui(
    ui: &mut egui::Ui,
    month: &MonthSection,
    content: &CalendarContent,
    month_width: f32,
    styles: &StyleRegistry,
    palette: &Palette,
) -> Option<CalendarDate> {
    let mut tapped = None;
    let size = cell_size(month_width, content.horizontal_day_margin);

    ui.label(RichText::new(&month.title).size(18.0).strong());
    ui.add_space(4.0);

    ui.scope(|ui| {
        ui.spacing_mut().item_spacing =
            vec2(content.horizontal_day_margin, content.vertical_day_margin);

        ui.horizontal(|ui| {
            for label in content.weekday_labels() {
                ui.allocate_ui(vec2(size.x, WEEKDAY_HEADER_HEIGHT), |ui| {
                    ui.centered_and_justified(|ui| {
                        ui.label(RichText::new(label).small().weak());
                    });
                });
            }
        });

        for week in month.weeks() {
            ui.horizontal(|ui| {
                for slot in week {
                    let Some(cell) = slot else {
                        ui.allocate_exact_size(size, Sense::hover());
                        continue;
                    };

                    let response = styles.show(ui, size, cell, palette);
                    if response.clicked() {
                        tapped = Some(cell.date);
                    }
                }
            });
        }
    });

    tapped
}
