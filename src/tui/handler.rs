//! Event handler for the TUI
//!
//! Routes key events to the open dialog or to the focused part of the form.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app::{ActiveDialog, App};
use super::event::Event;
use super::views::entry_form::{FormAction, FormField};

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick | Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.kind != KeyEventKind::Press {
        return Ok(());
    }

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return Ok(());
    }

    if app.has_dialog() {
        return handle_dialog_key(app, key);
    }

    handle_form_key(app, key)
}

/// Handle keys while a dialog is open
fn handle_dialog_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match app.active_dialog {
        ActiveDialog::Help => app.close_dialog(),
        ActiveDialog::Chart(_) => match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Enter => app.close_dialog(),
            KeyCode::Left | KeyCode::Char('h') => step_chart(app, -1),
            KeyCode::Right | KeyCode::Char('l') => step_chart(app, 1),
            _ => {}
        },
        ActiveDialog::None => {}
    }
    Ok(())
}

fn step_chart(app: &mut App, step: i32) {
    if let Err(e) = app.step_chart(step) {
        tracing::error!(error = %e, "chart navigation failed");
        app.set_status(format!("Error: {}", e));
    }
}

/// Handle keys on the form
fn handle_form_key(app: &mut App, key: KeyEvent) -> Result<()> {
    // Shortcuts that work from any field
    match key.code {
        KeyCode::Esc => {
            app.quit();
            return Ok(());
        }
        KeyCode::F(1) => {
            app.open_dialog(ActiveDialog::Help);
            return Ok(());
        }
        KeyCode::F(2) => return run(app, FormAction::Total),
        KeyCode::F(3) => return run(app, FormAction::MonthlyChart),
        KeyCode::F(4) => return run(app, FormAction::YearlyChart),
        KeyCode::Tab => {
            app.entry_form.next_field();
            return Ok(());
        }
        KeyCode::BackTab => {
            app.entry_form.prev_field();
            return Ok(());
        }
        _ => {}
    }

    match app.entry_form.focused_field {
        FormField::Amount | FormField::Day => handle_text_key(app, key),
        FormField::Category => handle_category_key(app, key),
        FormField::Actions => handle_actions_key(app, key),
    }
}

/// Editing keys for the amount and day fields
fn handle_text_key(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.code == KeyCode::Enter {
        return run(app, FormAction::Submit);
    }

    let Some(input) = app.entry_form.focused_input() else {
        return Ok(());
    };

    match key.code {
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => input.insert(c),
        KeyCode::Backspace => input.backspace(),
        KeyCode::Delete => input.delete(),
        KeyCode::Left => input.move_left(),
        KeyCode::Right => input.move_right(),
        KeyCode::Home => input.move_start(),
        KeyCode::End => input.move_end(),
        _ => return Ok(()),
    }

    app.clear_status();
    Ok(())
}

fn handle_category_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Left | KeyCode::Up | KeyCode::Char('h') | KeyCode::Char('k') => {
            app.entry_form.prev_category()
        }
        KeyCode::Right | KeyCode::Down | KeyCode::Char('l') | KeyCode::Char('j') => {
            app.entry_form.next_category()
        }
        KeyCode::Char('?') => app.open_dialog(ActiveDialog::Help),
        KeyCode::Enter => return run(app, FormAction::Submit),
        _ => {}
    }
    Ok(())
}

fn handle_actions_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Left | KeyCode::Char('h') => app.entry_form.prev_action(),
        KeyCode::Right | KeyCode::Char('l') => app.entry_form.next_action(),
        KeyCode::Char('?') => app.open_dialog(ActiveDialog::Help),
        KeyCode::Enter | KeyCode::Char(' ') => {
            if let Some(action) = app.entry_form.current_action().cloned() {
                return run(app, action);
            }
        }
        _ => {}
    }
    Ok(())
}

/// Run a form action; failures are shown in the status bar
fn run(app: &mut App, action: FormAction) -> Result<()> {
    tracing::debug!(action = %action.label(), "form action");
    if let Err(e) = app.run_action(&action) {
        tracing::error!(action = %action.label(), error = %e, "form action failed");
        app.set_status(format!("Error: {}", e));
    }
    Ok(())
}
