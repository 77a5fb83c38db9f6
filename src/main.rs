use eframe::egui;

use memory_universe::assets;
use memory_universe::UniverseConfig;

mod app;

fn main() -> eframe::Result<()> {
    env_logger::init();

    let icon = assets::load_icon_or_placeholder();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([360.0, 480.0])
            .with_icon(egui::IconData {
                rgba: icon.rgba,
                width: icon.width,
                height: icon.height,
            }),
        ..Default::default()
    };

    eframe::run_native(
        "Memory Universe",
        options,
        Box::new(|cc| {
            cc.egui_ctx.set_visuals(egui::Visuals::dark());
            Ok(Box::new(app::UniverseApp::new(UniverseConfig::default())))
        }),
    )
}
