//! TUI Views module
//!
//! The entry form and the status bar.

pub mod entry_form;
pub mod status_bar;

use ratatui::Frame;

use super::app::{ActiveDialog, App};
use super::dialogs;
use super::layout::AppLayout;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &mut App) {
    let layout = AppLayout::new(frame.area());

    entry_form::render(frame, app, layout.main);
    status_bar::render(frame, app, layout.status_bar);

    if app.has_dialog() {
        render_dialog(frame, app);
    }
}

/// Render active dialog
fn render_dialog(frame: &mut Frame, app: &App) {
    match &app.active_dialog {
        ActiveDialog::Help => dialogs::help::render(frame),
        ActiveDialog::Chart(view) => dialogs::chart::render(frame, view),
        ActiveDialog::None => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::LedgerPaths;
    use crate::config::settings::Settings;
    use crate::models::{ExpenseRecord, LedgerMonth};
    use crate::storage::Storage;
    use crate::tui::views::entry_form::FormAction;
    use ratatui::{backend::TestBackend, Terminal};
    use tempfile::TempDir;

    fn draw(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_render_form_with_status() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        let settings = Settings::default();
        let month = LedgerMonth::new(2025, 8);
        let mut app = App::new(&storage, &settings).with_month(month);
        app.set_status("Data saved to expenses_2025_08.csv.");
        app.result_label = "Total: 15.50".to_string();

        let text = draw(&mut app);

        assert!(text.contains("Expenses: 2025-08"));
        assert!(text.contains("Amount"));
        assert!(text.contains("Select Option"));
        assert!(text.contains("[ Food Total ]"));
        assert!(text.contains("Total: 15.50"));
        assert!(text.contains("Data saved to expenses_2025_08.csv."));
    }

    #[test]
    fn test_render_open_chart_dialog() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        let settings = Settings::default();
        let month = LedgerMonth::new(2025, 8);
        let record = ExpenseRecord::new("3", "9", "Food");
        storage.ledgers.append(month, &record).unwrap();
        let mut app = App::new(&storage, &settings).with_month(month);

        app.run_action(&FormAction::MonthlyChart).unwrap();
        let text = draw(&mut app);

        assert!(text.contains("Daily Expenses for 2025-08"));
        assert!(text.contains("3.00"));
    }
}
