use egui::Color32;
use eventcal::{Background, TextColor};

pub const PURPLE: Color32 = Color32::from_rgb(0x80, 0x00, 0x80);
pub const TODAY_BLUE: Color32 = Color32::from_rgb(0x00, 0x5B, 0xBB);
const MARKER_RED: Color32 = Color32::from_rgb(0xE0, 0x2B, 0x2B);
const MARKER_GREEN: Color32 = Color32::from_rgb(0x2B, 0xB6, 0x4A);

const LIGHT_GRAY: Color32 = Color32::from_rgb(0xc8, 0xc8, 0xc8);
const DARK_GRAY: Color32 = Color32::from_rgb(0x44, 0x44, 0x44);
const GRAY_SECONDARY: Color32 = Color32::from_rgb(0x8A, 0x8A, 0x8A);

/// Concrete colors for the abstract variants a [`eventcal::DayCell`] carries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub text_muted: Color32,
    pub text_selected: Color32,
    pub text_normal: Color32,
    pub bg_selected: Color32,
    pub bg_today: Color32,
    pub marker_a: Color32,
    pub marker_b: Color32,
    pub outline: Color32,
}

impl Palette {
    pub fn light() -> Self {
        Self {
            text_muted: LIGHT_GRAY,
            text_selected: Color32::WHITE,
            text_normal: DARK_GRAY,
            bg_selected: PURPLE,
            bg_today: TODAY_BLUE,
            marker_a: MARKER_RED,
            marker_b: MARKER_GREEN,
            outline: Color32::from_rgb(0xCC, 0x43, 0xC5),
        }
    }

    pub fn dark() -> Self {
        Self {
            text_muted: GRAY_SECONDARY,
            text_normal: LIGHT_GRAY,
            ..Self::light()
        }
    }

    pub fn text(&self, color: TextColor) -> Color32 {
        match color {
            TextColor::Muted => self.text_muted,
            TextColor::Selected => self.text_selected,
            TextColor::Normal => self.text_normal,
        }
    }

    pub fn background(&self, background: Background) -> Color32 {
        match background {
            Background::Selected => self.bg_selected,
            Background::Today => self.bg_today,
            Background::None => Color32::TRANSPARENT,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::dark()
    }
}
