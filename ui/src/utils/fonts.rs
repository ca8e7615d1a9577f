use egui::{
    FontData, FontFamily,
    epaint::text::{FontInsert, FontPriority, InsertFontFamily},
};

/// Register a fallback font so CJK header keywords render.
pub fn add_font(ctx: &egui::Context, font_data: Vec<u8>) {
    let data = FontData::from_owned(font_data);
    ctx.add_font(FontInsert::new(
        "cjk fallback",
        data,
        vec![InsertFontFamily {
            family: FontFamily::Proportional,
            priority: FontPriority::Lowest,
        }],
    ));
}

/// Load the font configured in `FFGZ_FONT_PATH`, if any.
#[cfg(not(target_arch = "wasm32"))]
pub fn load_configured_font(ctx: &egui::Context, config: &crate::config::UiConfig) {
    let Some(path) = &config.font_path else {
        log::info!("FFGZ_FONT_PATH not set, CJK text may not render");
        return;
    };
    match std::fs::read(path) {
        Ok(data) => {
            log::info!("Loaded font {}", path.display());
            add_font(ctx, data);
        }
        Err(err) => log::warn!("Failed to read font {}: {err}", path.display()),
    }
}
