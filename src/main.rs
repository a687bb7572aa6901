// Range Picker Demo
// Main entry point

use date_range_picker::services::settings::SettingsService;
use date_range_picker::ui_egui::RangePickerApp;

fn main() -> Result<(), eframe::Error> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Range Picker Demo");

    let settings_service = SettingsService::default_location();
    let settings = settings_service.get_or_default();
    log::info!(
        "Loaded settings from {}: date_format={}, theme={}",
        settings_service.path().display(),
        settings.date_format,
        settings.theme
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([640.0, 480.0])
            .with_min_inner_size([480.0, 360.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Range Picker Demo",
        options,
        Box::new(move |cc| {
            Ok(Box::new(RangePickerApp::new(cc, settings_service, settings)))
        }),
    )
}
