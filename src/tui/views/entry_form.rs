//! Expense entry form
//!
//! The main view: amount and day text fields, a category selector, a row of
//! action buttons and the result label.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::services::SELECT_PLACEHOLDER;
use crate::tui::app::App;
use crate::tui::widgets::input::{TextInput, LABEL_WIDTH};

/// Which part of the form has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Amount,
    Day,
    Category,
    Actions,
}

impl FormField {
    /// Get the next field (for Tab navigation)
    pub fn next(self) -> Self {
        match self {
            Self::Amount => Self::Day,
            Self::Day => Self::Category,
            Self::Category => Self::Actions,
            Self::Actions => Self::Amount,
        }
    }

    /// Get the previous field (for Shift+Tab navigation)
    pub fn prev(self) -> Self {
        match self {
            Self::Amount => Self::Actions,
            Self::Day => Self::Amount,
            Self::Category => Self::Day,
            Self::Actions => Self::Category,
        }
    }
}

/// A button of the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormAction {
    Submit,
    Total,
    CategoryTotal(String),
    MonthlyChart,
    YearlyChart,
}

impl FormAction {
    /// Buttons in display order, with one category button per category
    pub fn all(categories: &[String]) -> Vec<FormAction> {
        let mut actions = vec![FormAction::Submit, FormAction::Total];
        actions.extend(categories.iter().cloned().map(FormAction::CategoryTotal));
        actions.push(FormAction::MonthlyChart);
        actions.push(FormAction::YearlyChart);
        actions
    }

    /// Button caption
    pub fn label(&self) -> String {
        match self {
            Self::Submit => "Submit".to_string(),
            Self::Total => "Total".to_string(),
            Self::CategoryTotal(name) => format!("{} Total", name),
            Self::MonthlyChart => "Monthly Chart".to_string(),
            Self::YearlyChart => "Yearly Chart".to_string(),
        }
    }
}

/// State of the entry form
#[derive(Debug, Clone)]
pub struct EntryFormState {
    /// Currently focused field
    pub focused_field: FormField,

    /// Amount input
    pub amount_input: TextInput,

    /// Day input
    pub day_input: TextInput,

    /// Options offered by the category selector
    pub categories: Vec<String>,

    /// Selected category index, `None` while the placeholder is shown
    pub category_index: Option<usize>,

    /// Buttons of the form
    pub actions: Vec<FormAction>,

    /// Highlighted button when the action row has focus
    pub action_index: usize,
}

impl EntryFormState {
    /// Create an empty form offering the given categories
    pub fn new(categories: &[String]) -> Self {
        let mut state = Self {
            focused_field: FormField::Amount,
            amount_input: TextInput::new().label("Amount").placeholder("e.g. 12.50"),
            day_input: TextInput::new().label("Day").placeholder("1-31"),
            categories: categories.to_vec(),
            category_index: None,
            actions: FormAction::all(categories),
            action_index: 0,
        };
        state.update_focus();
        state
    }

    /// Move to the next field
    pub fn next_field(&mut self) {
        self.focused_field = self.focused_field.next();
        self.update_focus();
    }

    /// Move to the previous field
    pub fn prev_field(&mut self) {
        self.focused_field = self.focused_field.prev();
        self.update_focus();
    }

    /// Set focus to a specific field
    pub fn set_focus(&mut self, field: FormField) {
        self.focused_field = field;
        self.update_focus();
    }

    fn update_focus(&mut self) {
        self.amount_input.focused = self.focused_field == FormField::Amount;
        self.day_input.focused = self.focused_field == FormField::Day;
    }

    /// The focused text input, if a text field has focus
    pub fn focused_input(&mut self) -> Option<&mut TextInput> {
        match self.focused_field {
            FormField::Amount => Some(&mut self.amount_input),
            FormField::Day => Some(&mut self.day_input),
            FormField::Category | FormField::Actions => None,
        }
    }

    /// Select the next category, wrapping around
    pub fn next_category(&mut self) {
        if self.categories.is_empty() {
            return;
        }
        self.category_index = Some(match self.category_index {
            Some(i) => (i + 1) % self.categories.len(),
            None => 0,
        });
    }

    /// Select the previous category, wrapping around
    pub fn prev_category(&mut self) {
        if self.categories.is_empty() {
            return;
        }
        let last = self.categories.len() - 1;
        self.category_index = Some(match self.category_index {
            Some(0) | None => last,
            Some(i) => i - 1,
        });
    }

    /// Text shown by the selector
    pub fn selected_category(&self) -> &str {
        self.category_index
            .and_then(|i| self.categories.get(i))
            .map(String::as_str)
            .unwrap_or(SELECT_PLACEHOLDER)
    }

    /// Highlight the next button
    pub fn next_action(&mut self) {
        if !self.actions.is_empty() {
            self.action_index = (self.action_index + 1) % self.actions.len();
        }
    }

    /// Highlight the previous button
    pub fn prev_action(&mut self) {
        if !self.actions.is_empty() {
            self.action_index = self
                .action_index
                .checked_sub(1)
                .unwrap_or(self.actions.len() - 1);
        }
    }

    /// The highlighted button
    pub fn current_action(&self) -> Option<&FormAction> {
        self.actions.get(self.action_index)
    }

    /// Reset the fields after a submit
    pub fn clear(&mut self) {
        self.amount_input.clear();
        self.day_input.clear();
        self.category_index = None;
        self.set_focus(FormField::Amount);
    }
}

/// Render the form
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .title(format!(" Expenses: {} ", app.active_month()))
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let inner = Rect {
        x: inner.x + 1,
        width: inner.width.saturating_sub(2),
        ..inner
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Amount
            Constraint::Length(1), // Day
            Constraint::Length(1), // Category
            Constraint::Length(1), // Spacer
            Constraint::Length(3), // Buttons
            Constraint::Length(1), // Spacer
            Constraint::Length(3), // Result label
            Constraint::Min(0),    // Remaining
        ])
        .split(inner);

    let form = &app.entry_form;

    frame.render_widget(form.amount_input.clone(), chunks[1]);
    frame.render_widget(form.day_input.clone(), chunks[2]);
    render_category_selector(frame, form, chunks[3]);
    render_actions(frame, form, chunks[5]);

    let result = Paragraph::new(Line::from(Span::styled(
        app.result_label.clone(),
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
    )))
    .block(
        Block::default()
            .title(" Result ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(result, chunks[7]);
}

/// Render the category selector line
fn render_category_selector(frame: &mut Frame, form: &EntryFormState, area: Rect) {
    let focused = form.focused_field == FormField::Category;

    let label_style = if focused {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Cyan)
    };

    let value_style = if focused {
        Style::default().fg(Color::Black).bg(Color::Cyan)
    } else if form.category_index.is_none() {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::Yellow)
    };

    let mut spans = vec![Span::styled(
        format!("{:>width$}: ", "Category", width = LABEL_WIDTH),
        label_style,
    )];
    if focused {
        spans.push(Span::styled("◀ ", Style::default().fg(Color::Yellow)));
    }
    spans.push(Span::styled(
        form.selected_category().to_string(),
        value_style,
    ));
    if focused {
        spans.push(Span::styled(" ▶", Style::default().fg(Color::Yellow)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Render the button row
fn render_actions(frame: &mut Frame, form: &EntryFormState, area: Rect) {
    let row_focused = form.focused_field == FormField::Actions;

    let mut spans = Vec::new();
    for (i, action) in form.actions.iter().enumerate() {
        let style = if row_focused && i == form.action_index {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Green)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Green)
        };
        spans.push(Span::styled(format!("[ {} ]", action.label()), style));
        spans.push(Span::raw(" "));
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans)).wrap(Wrap { trim: true }),
        area,
    );
}
