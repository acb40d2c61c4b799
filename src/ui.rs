use crate::trigger::Trigger;
use crate::Dashboard;
use eframe::egui::{self, Align, Context, Layout, RichText, ScrollArea, Ui};
use eframe::glow;

const DEVICE_PANEL_WIDTH: f32 = 220.0;
const BUTTON_COLUMN_WIDTH: f32 = 140.0;
const BUTTON_HEIGHT: f32 = 24.0;
const BOTTOM_ROW_HEIGHT: f32 = 150.0;
const LOG_ROWS: usize = 6;

// --- UI Drawing Functions ---

/// Builds one frame of the dashboard and dispatches whatever the user
/// triggered during it.
pub fn draw_dashboard(app: &mut Dashboard, ctx: &Context) {
    #[cfg(feature = "logging")]
    log::trace!("Drawing dashboard frame.");

    let mut triggers = Vec::new();

    egui::TopBottomPanel::top("header").show(ctx, |ui| {
        draw_header(app, ui);
    });

    egui::SidePanel::left("device_list")
        .resizable(false)
        .exact_width(DEVICE_PANEL_WIDTH)
        .show(ctx, |ui| {
            draw_device_list(app, ui, &mut triggers);
        });

    egui::CentralPanel::default().show(ctx, |ui| {
        draw_status_section(app, ui);
        ui.add_space(10.0);
        draw_chart_section(app, ui);
        ui.add_space(5.0);
        draw_bottom_row(app, ui, &mut triggers);
    });

    for trigger in triggers {
        app.dispatch(trigger);
    }
}

fn draw_header(app: &Dashboard, ui: &mut Ui) {
    ui.add_space(6.0);
    ui.horizontal(|ui| {
        ui.label(
            RichText::new(app.config().header_title.as_str())
                .size(20.0)
                .strong(),
        );
        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            let status = app.connection_status();
            ui.label(
                RichText::new(status.to_string())
                    .strong()
                    .color(status.color()),
            );
        });
    });
    ui.add_space(6.0);
}

fn draw_device_list(app: &Dashboard, ui: &mut Ui, triggers: &mut Vec<Trigger>) {
    ui.label(app.config().device_list_heading.as_str());
    ui.separator();

    let highlight = app.list_highlight();
    ScrollArea::vertical()
        .id_salt("device_scroll")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for (i, device) in app.devices().iter().enumerate() {
                let row = ui.add_sized(
                    [ui.available_width(), BUTTON_HEIGHT],
                    egui::SelectableLabel::new(highlight == Some(i), device.to_string()),
                );
                if row.clicked() {
                    triggers.push(Trigger::DeviceSelected(Some(i)));
                }
            }
        });

    // Escape drops the list highlight, like a list widget losing its selection
    if highlight.is_some()
        && ui.rect_contains_pointer(ui.max_rect())
        && ui.input(|i| i.key_pressed(egui::Key::Escape))
    {
        triggers.push(Trigger::DeviceSelected(None));
    }
}

fn draw_status_section(app: &Dashboard, ui: &mut Ui) {
    ui.group(|ui| {
        ui.set_width(ui.available_width());
        ui.label(RichText::new("Current Status").weak());
        ui.label(RichText::new(app.selected_label()).size(15.0).strong());

        let reading = app.reading();
        egui::Grid::new("status_grid")
            .num_columns(2)
            .spacing([12.0, 4.0])
            .show(ui, |ui| {
                for (name, value) in [
                    ("Temperature:", &reading.temperature),
                    ("Pressure:", &reading.pressure),
                    ("Status:", &reading.status),
                ] {
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        ui.label(name);
                    });
                    ui.label(value.as_str());
                    ui.end_row();
                }
            });
    });
}

fn draw_chart_section(app: &Dashboard, ui: &mut Ui) {
    let height = (ui.available_height() - BOTTOM_ROW_HEIGHT).max(60.0);
    ui.allocate_ui(egui::vec2(ui.available_width(), height), |ui| {
        ui.group(|ui| {
            ui.set_min_size(ui.available_size());
            ui.label(RichText::new("Trend / Chart (placeholder)").weak());
            ui.centered_and_justified(|ui| {
                ui.label(app.config().chart_placeholder.as_str());
            });
        });
    });
}

fn draw_bottom_row(app: &mut Dashboard, ui: &mut Ui, triggers: &mut Vec<Trigger>) {
    ui.horizontal(|ui| {
        let log_width =
            (ui.available_width() - BUTTON_COLUMN_WIDTH - ui.spacing().item_spacing.x).max(100.0);
        ui.allocate_ui(egui::vec2(log_width, BOTTOM_ROW_HEIGHT), |ui| {
            draw_event_log(app, ui);
        });

        ui.vertical(|ui| {
            draw_control_buttons(ui, triggers);
        });
    });
}

fn draw_event_log(app: &mut Dashboard, ui: &mut Ui) {
    let scroll_requested = app.event_log_mut().take_scroll_request();
    let log = app.event_log();

    ui.group(|ui| {
        ui.set_width(ui.available_width());
        ui.label(RichText::new("Event Log").weak());
        ScrollArea::vertical()
            .id_salt("event_log_scroll")
            .stick_to_bottom(true)
            .auto_shrink([false, false])
            .show(ui, |ui| {
                // A &str buffer keeps the view read-only
                let mut text = log.text();
                let response = ui.add(
                    egui::TextEdit::multiline(&mut text)
                        .desired_rows(LOG_ROWS)
                        .desired_width(f32::INFINITY)
                        .font(egui::TextStyle::Monospace),
                );
                if let Some(last) = log.last() {
                    response.on_hover_text(format!(
                        "Last event at {}",
                        last.received.format("%Y-%m-%d %H:%M:%S")
                    ));
                }
                if scroll_requested {
                    ui.scroll_to_cursor(Some(Align::BOTTOM));
                }
            });
    });
}

/// Draws the action buttons stacked in the right column.
fn draw_control_buttons(ui: &mut Ui, triggers: &mut Vec<Trigger>) {
    let size = [BUTTON_COLUMN_WIDTH, BUTTON_HEIGHT];
    if ui.add_sized(size, egui::Button::new("Connect")).clicked() {
        triggers.push(Trigger::Connect);
    }
    if ui.add_sized(size, egui::Button::new("Start Monitoring")).clicked() {
        triggers.push(Trigger::StartMonitoring);
    }
    if ui.add_sized(size, egui::Button::new("Stop")).clicked() {
        triggers.push(Trigger::Stop);
    }
}

// Main eframe application loop
impl eframe::App for Dashboard {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        draw_dashboard(self, ctx);
    }

    // Called when the window is about to close
    fn on_exit(&mut self, _gl: Option<&glow::Context>) {
        log::debug!(
            "Window closing with {} event log entries.",
            self.event_log().len()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Runs one headless frame with no window attached.
    fn run_frame(app: &mut Dashboard) {
        let ctx = Context::default();
        let _ = ctx.run(egui::RawInput::default(), |ctx| draw_dashboard(app, ctx));
    }

    #[test]
    fn draws_initial_state_without_triggering() {
        let mut app = Dashboard::new();
        run_frame(&mut app);
        assert!(app.event_log().is_empty());
        assert_eq!(app.selected_label(), "Selected: (none)");
    }

    #[test]
    fn drawing_consumes_scroll_request() {
        let mut app = Dashboard::new();
        app.dispatch(Trigger::Connect);
        app.dispatch(Trigger::DeviceSelected(Some(3)));
        run_frame(&mut app);
        assert!(!app.event_log_mut().take_scroll_request());
        assert_eq!(app.event_log().len(), 2);
    }
}
