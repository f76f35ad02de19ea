//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events,
//! and implements the form's actions.

use crate::config::settings::Settings;
use crate::display::{format_category_total, format_total, NO_LEDGER_CATEGORY, NO_LEDGER_TOTAL};
use crate::error::{LedgerError, LedgerResult};
use crate::models::LedgerMonth;
use crate::reports::{DailyExpenseReport, YearlyExpenseReport};
use crate::services::{ExpenseService, SummaryService};
use crate::storage::Storage;

use super::dialogs::chart::ChartView;
use super::views::entry_form::{EntryFormState, FormAction};

/// Currently active dialog (if any)
#[derive(Debug, Clone, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    Chart(ChartView),
    Help,
}

/// Main application state
pub struct App<'a> {
    /// The storage layer
    pub storage: &'a Storage,

    /// Application settings
    pub settings: &'a Settings,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Currently active dialog
    pub active_dialog: ActiveDialog,

    /// Entry form state
    pub entry_form: EntryFormState,

    /// Most recent summary result
    pub result_label: String,

    /// Status message to display
    pub status_message: Option<String>,

    /// Month the form writes to; the current month when unset
    pub pinned_month: Option<LedgerMonth>,
}

impl<'a> App<'a> {
    /// Create a new App instance
    pub fn new(storage: &'a Storage, settings: &'a Settings) -> Self {
        Self {
            storage,
            settings,
            should_quit: false,
            active_dialog: ActiveDialog::default(),
            entry_form: EntryFormState::new(&settings.categories),
            result_label: String::new(),
            status_message: None,
            pinned_month: None,
        }
    }

    /// Pin the form to a month instead of following the clock
    pub fn with_month(mut self, month: LedgerMonth) -> Self {
        self.pinned_month = Some(month);
        self
    }

    /// Month the form reads from and writes to
    pub fn active_month(&self) -> LedgerMonth {
        self.pinned_month.unwrap_or_else(LedgerMonth::current)
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Open a dialog
    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        self.active_dialog = dialog;
    }

    /// Close the current dialog
    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
    }

    /// Check if a dialog is active
    pub fn has_dialog(&self) -> bool {
        !matches!(self.active_dialog, ActiveDialog::None)
    }

    /// Run one of the form's buttons
    pub fn run_action(&mut self, action: &FormAction) -> LedgerResult<()> {
        match action {
            FormAction::Submit => self.submit(),
            FormAction::Total => self.show_total(),
            FormAction::CategoryTotal(name) => self.show_category_total(name),
            FormAction::MonthlyChart => self.show_monthly_chart(self.active_month()),
            FormAction::YearlyChart => self.show_yearly_chart(self.active_month().year),
        }
    }

    /// Append the form's entry to the active month's ledger, then clear the form
    ///
    /// A missing category is reported in the status bar; other failures are
    /// returned.
    pub fn submit(&mut self) -> LedgerResult<()> {
        let month = self.active_month();
        let service = ExpenseService::new(self.storage, self.settings);

        let result = service.submit(
            month,
            self.entry_form.amount_input.value(),
            self.entry_form.day_input.value(),
            self.entry_form.selected_category(),
        );

        match result {
            Ok(path) => {
                let file = path
                    .file_name()
                    .map(|f| f.to_string_lossy().into_owned())
                    .unwrap_or_else(|| month.file_name());
                self.entry_form.clear();
                self.set_status(format!("Data saved to {}.", file));
                Ok(())
            }
            Err(LedgerError::Validation(message)) => {
                self.set_status(message);
                Ok(())
            }
            Err(e) => Err(e),
        }
    }

    /// Put the active month's total in the result label
    pub fn show_total(&mut self) -> LedgerResult<()> {
        let service = SummaryService::new(self.storage);
        match service.total(self.active_month()) {
            Ok(total) => {
                self.result_label = format_total(self.settings, total);
                Ok(())
            }
            Err(e) if e.is_not_found() => {
                self.result_label = NO_LEDGER_TOTAL.to_string();
                Ok(())
            }
            Err(e) => Err(e),
        }
    }

    /// Put one category's total for the active month in the result label
    pub fn show_category_total(&mut self, category: &str) -> LedgerResult<()> {
        let service = SummaryService::new(self.storage);
        match service.category_total(self.active_month(), category) {
            Ok(total) => {
                self.result_label = format_category_total(self.settings, category, total);
                Ok(())
            }
            Err(e) if e.is_not_found() => {
                self.result_label = NO_LEDGER_CATEGORY.to_string();
                Ok(())
            }
            Err(e) => Err(e),
        }
    }

    /// Open the daily chart of a month
    ///
    /// When the month has no ledger nothing opens and the status bar says so.
    pub fn show_monthly_chart(&mut self, month: LedgerMonth) -> LedgerResult<()> {
        match DailyExpenseReport::generate(self.storage, month) {
            Ok(report) => {
                self.open_dialog(ActiveDialog::Chart(ChartView::Daily(report)));
                Ok(())
            }
            Err(e) if e.is_not_found() => {
                self.set_status(format!(
                    "No data found for {}. File {} does not exist.",
                    month,
                    month.file_name()
                ));
                Ok(())
            }
            Err(e) => Err(e),
        }
    }

    /// Open the monthly chart of a year
    pub fn show_yearly_chart(&mut self, year: i32) -> LedgerResult<()> {
        let report = YearlyExpenseReport::generate(self.storage, year)?;
        self.open_dialog(ActiveDialog::Chart(ChartView::Yearly(report)));
        Ok(())
    }

    /// Move an open chart one month or year back (`-1`) or forward (`1`)
    pub fn step_chart(&mut self, step: i32) -> LedgerResult<()> {
        let target = match &self.active_dialog {
            ActiveDialog::Chart(ChartView::Daily(report)) => {
                let month = if step < 0 {
                    report.month.prev()
                } else {
                    report.month.next()
                };
                ChartTarget::Month(month)
            }
            ActiveDialog::Chart(ChartView::Yearly(report)) => ChartTarget::Year(report.year + step),
            _ => return Ok(()),
        };

        match target {
            ChartTarget::Month(month) => self.show_monthly_chart(month),
            ChartTarget::Year(year) => self.show_yearly_chart(year),
        }
    }
}

enum ChartTarget {
    Month(LedgerMonth),
    Year(i32),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::LedgerPaths;
    use crate::models::ExpenseRecord;
    use crate::tui::views::entry_form::FormField;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        (temp_dir, storage)
    }

    fn fill(app: &mut App, amount: &str, day: &str) {
        for c in amount.chars() {
            app.entry_form.amount_input.insert(c);
        }
        for c in day.chars() {
            app.entry_form.day_input.insert(c);
        }
        app.entry_form.next_category();
    }

    #[test]
    fn test_submit_appends_and_clears() {
        let (_temp_dir, storage) = create_test_storage();
        let settings = Settings::default();
        let month = LedgerMonth::new(2025, 8);
        let mut app = App::new(&storage, &settings).with_month(month);

        fill(&mut app, "10", "1");
        app.entry_form.set_focus(FormField::Day);
        app.submit().unwrap();

        assert_eq!(
            storage.ledgers.read(month).unwrap(),
            vec![ExpenseRecord::new("10", "1", "Food")]
        );
        assert_eq!(app.entry_form.amount_input.value(), "");
        assert_eq!(app.entry_form.day_input.value(), "");
        assert_eq!(app.entry_form.focused_field, FormField::Amount);
        assert_eq!(
            app.status_message.as_deref(),
            Some("Data saved to expenses_2025_08.csv.")
        );
    }

    #[test]
    fn test_submit_without_category_is_refused() {
        let (_temp_dir, storage) = create_test_storage();
        let settings = Settings::default();
        let month = LedgerMonth::new(2025, 8);
        let mut app = App::new(&storage, &settings).with_month(month);

        app.entry_form.amount_input.insert('5');
        app.submit().unwrap();

        assert!(!storage.ledgers.exists(month));
        assert_eq!(
            app.status_message.as_deref(),
            Some("Select a category first")
        );
        assert_eq!(app.entry_form.amount_input.value(), "5");
    }

    #[test]
    fn test_totals_in_result_label() {
        let (_temp_dir, storage) = create_test_storage();
        let settings = Settings::default();
        let month = LedgerMonth::new(2025, 8);
        let mut app = App::new(&storage, &settings).with_month(month);

        app.show_total().unwrap();
        assert_eq!(app.result_label, NO_LEDGER_TOTAL);
        app.show_category_total("Food").unwrap();
        assert_eq!(app.result_label, NO_LEDGER_CATEGORY);

        let food = ExpenseRecord::new("10", "1", "Food");
        let fun = ExpenseRecord::new("5.5", "2", "Entertainment");
        storage.ledgers.append(month, &food).unwrap();
        storage.ledgers.append(month, &fun).unwrap();

        app.run_action(&FormAction::Total).unwrap();
        assert_eq!(app.result_label, "Total: 15.50");
        let food_total = FormAction::CategoryTotal("Food".into());
        app.run_action(&food_total).unwrap();
        assert_eq!(app.result_label, "Food: 10.00");
    }

    #[test]
    fn test_monthly_chart_missing_ledger() {
        let (_temp_dir, storage) = create_test_storage();
        let settings = Settings::default();
        let month = LedgerMonth::new(2025, 8);
        let mut app = App::new(&storage, &settings).with_month(month);

        app.run_action(&FormAction::MonthlyChart).unwrap();

        assert!(!app.has_dialog());
        assert_eq!(
            app.status_message.as_deref(),
            Some("No data found for 2025-08. File expenses_2025_08.csv does not exist.")
        );
    }

    #[test]
    fn test_charts_open_and_step() {
        let (_temp_dir, storage) = create_test_storage();
        let settings = Settings::default();
        let month = LedgerMonth::new(2025, 8);
        let mut app = App::new(&storage, &settings).with_month(month);
        let record = ExpenseRecord::new("3", "9", "Food");
        storage.ledgers.append(month, &record).unwrap();

        app.run_action(&FormAction::MonthlyChart).unwrap();
        assert!(matches!(
            app.active_dialog,
            ActiveDialog::Chart(ChartView::Daily(ref r)) if r.month == month
        ));

        // No ledger for September: the August chart stays open
        app.step_chart(1).unwrap();
        assert!(matches!(
            app.active_dialog,
            ActiveDialog::Chart(ChartView::Daily(ref r)) if r.month == month
        ));

        app.run_action(&FormAction::YearlyChart).unwrap();
        app.step_chart(-1).unwrap();
        match &app.active_dialog {
            ActiveDialog::Chart(ChartView::Yearly(report)) => {
                assert_eq!(report.year, 2024);
                assert_eq!(report.grand_total(), 0.0);
            }
            other => panic!("unexpected dialog: {:?}", other),
        }
    }
}
