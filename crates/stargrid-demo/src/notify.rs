//! Pointer event reports.

/// Title of every report.
pub const REPORT_TITLE: &str = "Button Event Fired";

/// Sink for user-facing reports.
pub trait Notifier {
    /// Delivers one report. Blocks until the user acknowledges it when the
    /// sink is interactive.
    fn notify(&mut self, title: &str, body: &str);
}

/// Shows each report in a synchronous modal message box.
#[derive(Debug, Default)]
pub struct DialogNotifier;

impl Notifier for DialogNotifier {
    fn notify(&mut self, title: &str, body: &str) {
        let _ = rfd::MessageDialog::new()
            .set_level(rfd::MessageLevel::Info)
            .set_title(title)
            .set_description(body)
            .set_buttons(rfd::MessageButtons::Ok)
            .show();
    }
}

/// Writes each report to the log.
#[derive(Debug, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&mut self, title: &str, body: &str) {
        log::info!("{title}: {body}");
    }
}

pub fn format_report(event_name: &str, x: i32, y: i32) -> String {
    format!("Event {event_name} is fired, pos is ({x}, {y}).")
}

/// Formats and delivers the report for one pointer event.
pub fn report_pointer_event<N>(notifier: &mut N, event_name: &str, x: i32, y: i32)
where
    N: Notifier + ?Sized,
{
    let body = format_report(event_name, x, y);
    log::debug!("reporting {event_name} at ({x}, {y})");
    notifier.notify(REPORT_TITLE, &body);
}
