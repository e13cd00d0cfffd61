use std::path::PathBuf;

use eframe::NativeOptions;

use crate::Palette;

pub fn is_compiled_as_mobile() -> bool {
    #[cfg(any(target_os = "android", target_os = "ios"))]
    {
        true
    }

    #[cfg(not(any(target_os = "android", target_os = "ios")))]
    {
        false
    }
}

/// Base directory for logs, `<local data dir>/eventcal` unless overridden.
pub fn data_path(datapath: Option<&str>) -> PathBuf {
    match datapath {
        Some(path) => PathBuf::from(path),
        None => dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("eventcal"),
    }
}

pub fn log_path(datapath: Option<&str>) -> PathBuf {
    data_path(datapath).join("logs")
}

pub fn generate_native_options(is_mobile: bool) -> NativeOptions {
    let viewport = egui::ViewportBuilder::default().with_title("eventcal");
    let viewport = if is_mobile {
        viewport.with_inner_size([405.0, 915.0])
    } else {
        viewport.with_inner_size([1024.0, 720.0])
    };

    NativeOptions {
        viewport,
        ..Default::default()
    }
}

/// Applies the theme and returns the matching cell palette.
pub fn setup_cc(ctx: &egui::Context, light: bool) -> Palette {
    if light {
        ctx.set_visuals(egui::Visuals::light());
        Palette::light()
    } else {
        ctx.set_visuals(egui::Visuals::dark());
        Palette::dark()
    }
}
