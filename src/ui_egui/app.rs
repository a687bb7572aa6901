use crate::models::range::CommittedRange;
use crate::models::settings::{PickerSettings, DATE_FORMATS, THEMES};
use crate::services::formatter::RangeFormatter;
use crate::services::settings::SettingsService;
use crate::ui_egui::picker::{DateRangePicker, DateRangePickerState};
use crate::ui_egui::theme::PickerTheme;

/// Most recent commits kept in the demo's history list
const HISTORY_LIMIT: usize = 10;

/// Demo host page: owns the committed range and stores every change the
/// picker reports.
pub struct RangePickerApp {
    settings_service: SettingsService,
    settings: PickerSettings,
    /// Host-owned selection
    range: CommittedRange,
    picker_state: DateRangePickerState,
    formatter: RangeFormatter,
    theme: PickerTheme,
    history: Vec<CommittedRange>,
}

impl RangePickerApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        settings_service: SettingsService,
        settings: PickerSettings,
    ) -> Self {
        let app = Self::with_settings(settings_service, settings);
        app.theme.apply_to_context(&cc.egui_ctx);
        app
    }

    fn with_settings(settings_service: SettingsService, settings: PickerSettings) -> Self {
        let range = CommittedRange::from_strings(
            settings.initial_start.as_deref(),
            settings.initial_end.as_deref(),
        );
        log::info!("Initial range: {:?}", range);

        Self {
            picker_state: DateRangePickerState::default()
                .with_remember_view(settings.remember_view),
            formatter: RangeFormatter::from_settings(&settings),
            theme: PickerTheme::from_settings(&settings),
            settings_service,
            settings,
            range,
            history: Vec::new(),
        }
    }

    fn record(&mut self, next: CommittedRange) {
        self.range = next;
        self.history.insert(0, next);
        self.history.truncate(HISTORY_LIMIT);
    }

    /// Rebuild everything derived from the settings and write them to disk.
    fn save_settings(&mut self) {
        self.formatter = RangeFormatter::from_settings(&self.settings);
        self.theme = PickerTheme::from_settings(&self.settings);
        self.picker_state.set_remember_view(self.settings.remember_view);

        if let Err(err) = self.settings_service.update(&self.settings) {
            log::error!("Failed to update settings: {:#}", err);
        }
    }

    /// Store the current selection as the range shown on next launch.
    fn remember_range(&mut self) {
        self.settings.initial_start = self.range.start.map(|d| d.to_string());
        self.settings.initial_end = self.range.end.map(|d| d.to_string());
        self.save_settings();
    }

    fn reset_settings(&mut self) {
        if let Err(err) = self.settings_service.reset() {
            log::error!("Failed to reset settings: {:#}", err);
            return;
        }
        self.settings = PickerSettings::default();
        self.save_settings();
    }

    fn show_preferences(&mut self, ui: &mut egui::Ui) {
        let mut changed = false;

        egui::ComboBox::from_label("Date format")
            .selected_text(self.settings.date_format.clone())
            .show_ui(ui, |ui| {
                for format in DATE_FORMATS {
                    changed |= ui
                        .selectable_value(&mut self.settings.date_format, format.to_string(), format)
                        .changed();
                }
            });

        egui::ComboBox::from_label("Theme")
            .selected_text(self.settings.theme.clone())
            .show_ui(ui, |ui| {
                for theme in THEMES {
                    changed |= ui
                        .selectable_value(&mut self.settings.theme, theme.to_string(), theme)
                        .changed();
                }
            });

        changed |= ui
            .checkbox(&mut self.settings.remember_view, "Keep displayed months when reopening")
            .changed();

        if changed {
            self.save_settings();
            self.theme.apply_to_context(ui.ctx());
        }

        ui.horizontal(|ui| {
            if ui.button("Open with this range").clicked() {
                self.remember_range();
            }
            if ui.button("Reset to defaults").clicked() {
                self.reset_settings();
                self.theme.apply_to_context(ui.ctx());
            }
        });
    }
}

impl eframe::App for RangePickerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Booking period");
            ui.add_space(8.0);

            let current = self.range;
            let output = DateRangePicker::new(&mut self.picker_state, &current)
                .placeholder(self.settings.placeholder.clone())
                .formatter(self.formatter.clone())
                .theme(self.theme.clone())
                .show(ui);
            if let Some(next) = output.changed {
                self.record(next);
            }

            ui.add_space(16.0);
            match self.range.len_days() {
                Some(days) => ui.label(format!("{} day(s) selected", days)),
                None => ui.label("No complete range selected"),
            };

            ui.add_space(16.0);
            ui.separator();
            ui.collapsing("Preferences", |ui| self.show_preferences(ui));

            ui.separator();
            ui.label(egui::RichText::new("Recent changes").strong());
            if self.history.is_empty() {
                ui.weak("None yet");
            }
            for entry in &self.history {
                ui.label(self.formatter.format(entry, "(cleared)"));
            }
        });
    }
}
