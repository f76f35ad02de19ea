//! Chart dialog
//!
//! Transient window with a bar chart: daily totals of a month or monthly
//! totals of a year. Each bar carries its value as a label.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::reports::{DailyExpenseReport, YearlyExpenseReport};
use crate::tui::layout::centered_rect;

/// The chart shown by the dialog
#[derive(Debug, Clone)]
pub enum ChartView {
    Daily(DailyExpenseReport),
    Yearly(YearlyExpenseReport),
}

impl ChartView {
    /// Dialog title
    pub fn title(&self) -> String {
        match self {
            Self::Daily(report) => report.title(),
            Self::Yearly(report) => report.title(),
        }
    }

    /// Axis captions (x, y)
    pub fn axes(&self) -> (&'static str, &'static str) {
        match self {
            Self::Daily(_) => ("Day of Month", "Total Amount Used"),
            Self::Yearly(_) => ("Month", "Total Expenses"),
        }
    }

    /// Largest total of the chart
    pub fn max_total(&self) -> f64 {
        match self {
            Self::Daily(report) => report.max_total(),
            Self::Yearly(report) => report.max_total(),
        }
    }

    /// Bars as (label, value) pairs in display order
    pub fn points(&self) -> Vec<(String, f64)> {
        match self {
            Self::Daily(report) => report
                .days
                .iter()
                .map(|d| (d.day.to_string(), d.total))
                .collect(),
            Self::Yearly(report) => report
                .months
                .iter()
                .map(|m| (m.month.month_name().to_string(), m.total))
                .collect(),
        }
    }
}

/// Height of the tallest bar
const BAR_SCALE: u64 = 10_000;

/// Bar height for an amount, relative to the chart's largest total
///
/// Heights stay within `0..=BAR_SCALE`. Negative and NaN totals get no bar;
/// infinite totals count as the largest finite value.
fn bar_height(amount: f64, max: f64) -> u64 {
    let clamp = |v: f64| if v.is_nan() { 0.0 } else { v.clamp(0.0, f64::MAX) };
    let (amount, max) = (clamp(amount), clamp(max));
    if max == 0.0 {
        return 0;
    }
    ((amount / max).min(1.0) * BAR_SCALE as f64).round() as u64
}

/// Width of each bar so that `count` bars fit in `available` columns
pub fn bar_width(count: usize, available: u16) -> u16 {
    if count == 0 {
        return 1;
    }
    let per_bar = (available as usize / count).saturating_sub(1);
    per_bar.clamp(1, 12) as u16
}

/// Shorten a label to fit under a bar
fn fit_label(label: &str, width: u16) -> String {
    label.chars().take(width.max(1) as usize).collect()
}

/// Render the chart dialog
pub fn render(frame: &mut Frame, view: &ChartView) {
    let area = centered_rect(90, 80, frame.area());

    frame.render_widget(Clear, area);

    let (x_axis, y_axis) = view.axes();

    let block = Block::default()
        .title(format!(" {} ", view.title()))
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .title_bottom(Line::from(format!(" x: {}  y: {} ", x_axis, y_axis)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),    // Chart
            Constraint::Length(1), // Hints
        ])
        .split(inner);

    let points = view.points();
    if points.is_empty() {
        let message = Paragraph::new(Span::styled(
            "No entries with a numeric day.",
            Style::default().fg(Color::DarkGray),
        ));
        frame.render_widget(message, chunks[0]);
    } else {
        render_bars(frame, &points, view.max_total(), chunks[0]);
    }

    let hints = Line::from(vec![
        Span::styled("[←/→]", Style::default().fg(Color::Yellow)),
        Span::raw(" Previous/Next  "),
        Span::styled("[Esc]", Style::default().fg(Color::Red)),
        Span::raw(" Close"),
    ]);
    frame.render_widget(Paragraph::new(hints), chunks[1]);
}

fn render_bars(frame: &mut Frame, points: &[(String, f64)], max: f64, area: Rect) {
    let width = bar_width(points.len(), area.width);

    let bars: Vec<Bar> = points
        .iter()
        .map(|(label, amount)| {
            Bar::default()
                .value(bar_height(*amount, max))
                .text_value(format!("{:.2}", amount))
                .label(Line::from(fit_label(label, width)))
        })
        .collect();

    let chart = BarChart::default()
        .data(BarGroup::default().bars(&bars))
        .bar_width(width)
        .bar_gap(1)
        .max(BAR_SCALE)
        .bar_style(Style::default().fg(Color::LightBlue))
        .value_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::LightBlue)
                .add_modifier(Modifier::BOLD),
        )
        .label_style(Style::default().fg(Color::White));

    frame.render_widget(chart, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseRecord, LedgerMonth};
    use crate::reports::{MonthTotal, YearlyExpenseReport};
    use ratatui::{backend::TestBackend, Terminal};

    fn render_to_text(view: &ChartView) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal.draw(|frame| render(frame, view)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_bar_width() {
        assert_eq!(bar_width(12, 120), 9);
        assert_eq!(bar_width(12, 40), 2);
        assert_eq!(bar_width(31, 20), 1);
        assert_eq!(bar_width(2, 200), 12);
        assert_eq!(bar_width(0, 80), 1);
    }

    #[test]
    fn test_bar_height() {
        assert_eq!(bar_height(15.5, 31.0), 5_000);
        assert_eq!(bar_height(31.0, 31.0), BAR_SCALE);
        assert_eq!(bar_height(-4.0, 31.0), 0);
        assert_eq!(bar_height(0.0, 0.0), 0);
        assert_eq!(bar_height(f64::NAN, 10.0), 0);
        assert_eq!(bar_height(f64::INFINITY, f64::INFINITY), BAR_SCALE);
        assert_eq!(bar_height(5.0, f64::INFINITY), 0);
        assert_eq!(bar_height(1e17, 1e17), BAR_SCALE);
    }

    #[test]
    fn test_fit_label() {
        assert_eq!(fit_label("September", 3), "Sep");
        assert_eq!(fit_label("12", 5), "12");
    }

    #[test]
    fn test_daily_points() {
        let report = DailyExpenseReport::from_records(
            LedgerMonth::new(2025, 2),
            &[
                ExpenseRecord::new("4", "10", "Food"),
                ExpenseRecord::new("6", "2", "Food"),
            ],
        );
        let view = ChartView::Daily(report);

        assert_eq!(
            view.points(),
            vec![("2".to_string(), 6.0), ("10".to_string(), 4.0)]
        );
        assert_eq!(view.title(), "Daily Expenses for 2025-02");
        assert_eq!(view.axes().0, "Day of Month");
    }

    #[test]
    fn test_render_daily_chart() {
        let report = DailyExpenseReport::from_records(
            LedgerMonth::new(2025, 2),
            &[
                ExpenseRecord::new("4", "10", "Food"),
                ExpenseRecord::new("6", "2", "Food"),
            ],
        );

        let text = render_to_text(&ChartView::Daily(report));

        assert!(text.contains("Daily Expenses for 2025-02"));
        assert!(text.contains("6.00"));
        assert!(text.contains("4.00"));
        assert!(text.contains("Day of Month"));
    }

    #[test]
    fn test_render_yearly_chart() {
        let year = 2025;
        let months = LedgerMonth::months_of(year)
            .map(|month| MonthTotal {
                month,
                total: if month.month == 2 { 20.0 } else { 0.0 },
                has_ledger: month.month == 2,
            })
            .collect();
        let report = YearlyExpenseReport { year, months };

        let text = render_to_text(&ChartView::Yearly(report));

        assert!(text.contains("Monthly Expense Summary for 2025"));
        assert!(text.contains("Jan"));
        assert!(text.contains("Feb"));
        assert!(text.contains("Dec"));
        assert!(text.contains("20.00"));
    }

    #[test]
    fn test_render_huge_and_infinite_totals() {
        let huge = DailyExpenseReport::from_records(
            LedgerMonth::new(2025, 2),
            &[
                ExpenseRecord::new("1e17", "3", "Food"),
                ExpenseRecord::new("5", "4", "Food"),
            ],
        );
        let text = render_to_text(&ChartView::Daily(huge));
        assert!(text.contains("Daily Expenses for 2025-02"));

        let infinite = DailyExpenseReport::from_records(
            LedgerMonth::new(2025, 2),
            &[
                ExpenseRecord::new("1e308", "3", "Food"),
                ExpenseRecord::new("1e308", "3", "Food"),
                ExpenseRecord::new("5", "4", "Food"),
            ],
        );
        assert!(infinite.max_total().is_infinite());
        let text = render_to_text(&ChartView::Daily(infinite));
        assert!(text.contains("inf"));
    }
}
