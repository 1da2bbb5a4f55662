// event handling

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use std::time::Duration;

use crate::tui::app::{App, Mode, Popup};

pub enum Action {
    None,
    Quit,
    Submit(String),
    CopyReply,
    ExportTranscript,
}

pub fn poll_event(timeout: Duration) -> std::io::Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

pub fn handle_event(app: &mut App, event: Event) -> Action {
    match event {
        Event::Key(key) => handle_key(app, key),
        _ => Action::None,
    }
}

fn handle_key(app: &mut App, key: KeyEvent) -> Action {
    // global keys (work in any mode)
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Action::Quit;
    }

    // handle popups first
    match app.popup {
        Popup::Acknowledge => return handle_acknowledge_popup(app, key),
        Popup::Suggest => return handle_suggest_popup(app, key),
        Popup::Themes => return handle_theme_popup(app, key),
        Popup::None => {}
    }

    match app.mode {
        Mode::Normal => handle_normal_key(app, key),
        Mode::Insert => handle_insert_key(app, key),
    }
}

// no chatting until the disclaimer is accepted; declining quits
fn handle_acknowledge_popup(app: &mut App, key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Enter | KeyCode::Char('y') | KeyCode::Char('Y') => {
            app.acknowledge();
            Action::None
        }
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('n') => Action::Quit,
        _ => Action::None,
    }
}

fn handle_suggest_popup(app: &mut App, key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => {
            app.close_popup();
            Action::None
        }
        KeyCode::Char('j') | KeyCode::Down => {
            app.suggest_down();
            Action::None
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.suggest_up();
            Action::None
        }
        KeyCode::Enter => {
            // a picked suggestion goes through the same path as typed input
            if let Some(prompt) = app.select_suggestion() {
                Action::Submit(prompt)
            } else {
                Action::None
            }
        }
        _ => Action::None,
    }
}

fn handle_theme_popup(app: &mut App, key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => {
            app.close_popup();
            Action::None
        }
        KeyCode::Char('j') | KeyCode::Down => {
            app.theme_scroll_down();
            Action::None
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.theme_scroll_up();
            Action::None
        }
        KeyCode::Enter => {
            app.select_theme();
            Action::None
        }
        _ => Action::None,
    }
}

fn handle_normal_key(app: &mut App, key: KeyEvent) -> Action {
    match key.code {
        // quit
        KeyCode::Char('q') => Action::Quit,

        // enter insert mode
        KeyCode::Char('i') => {
            app.enter_insert();
            Action::None
        }
        KeyCode::Char('a') | KeyCode::Char('A') => {
            app.move_cursor_end();
            app.enter_insert();
            Action::None
        }
        KeyCode::Char('I') => {
            app.move_cursor_start();
            app.enter_insert();
            Action::None
        }

        // panel navigation
        KeyCode::Tab => {
            app.cycle_panel();
            Action::None
        }
        KeyCode::Char('f') => {
            app.toggle_fullscreen();
            Action::None
        }

        // popups
        KeyCode::Char('t') => {
            app.open_theme_popup();
            Action::None
        }
        KeyCode::Char('s') => {
            app.open_suggest_popup();
            Action::None
        }

        // copy latest reply
        KeyCode::Char('y') => Action::CopyReply,

        // export conversation
        KeyCode::Char('x') => Action::ExportTranscript,

        // scrolling
        KeyCode::Char('j') | KeyCode::Down => {
            app.scroll_down();
            Action::None
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.scroll_up();
            Action::None
        }
        KeyCode::Char('G') => {
            app.jump_to_latest();
            Action::None
        }

        // input history
        KeyCode::Char('p') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.history_up();
            Action::None
        }
        KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.history_down();
            Action::None
        }

        // submit
        KeyCode::Enter => {
            if let Some(message) = app.submit() {
                Action::Submit(message)
            } else {
                Action::None
            }
        }

        _ => Action::None,
    }
}

fn handle_insert_key(app: &mut App, key: KeyEvent) -> Action {
    // check control keys first
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('a') => {
                app.move_cursor_start();
                Action::None
            }
            KeyCode::Char('e') => {
                app.move_cursor_end();
                Action::None
            }
            KeyCode::Char('u') => {
                app.clear_prompt();
                Action::None
            }
            KeyCode::Char('p') => {
                app.history_up();
                Action::None
            }
            KeyCode::Char('n') => {
                app.history_down();
                Action::None
            }
            KeyCode::Enter => {
                // ctrl+enter for newline
                app.insert_newline();
                Action::None
            }
            _ => Action::None,
        };
    }

    // shift+enter for newline
    if key.modifiers.contains(KeyModifiers::SHIFT) && key.code == KeyCode::Enter {
        app.insert_newline();
        return Action::None;
    }

    match key.code {
        // exit insert mode
        KeyCode::Esc => {
            app.exit_insert();
            Action::None
        }

        // submit
        KeyCode::Enter => {
            app.exit_insert();
            if let Some(message) = app.submit() {
                Action::Submit(message)
            } else {
                Action::None
            }
        }

        // editing
        KeyCode::Char(c) => {
            app.insert_char(c);
            Action::None
        }
        KeyCode::Backspace => {
            app.delete_char();
            Action::None
        }
        KeyCode::Delete => {
            app.delete_char_forward();
            Action::None
        }

        // cursor movement
        KeyCode::Left => {
            app.move_cursor_left();
            Action::None
        }
        KeyCode::Right => {
            app.move_cursor_right();
            Action::None
        }
        KeyCode::Home => {
            app.move_cursor_start();
            Action::None
        }
        KeyCode::End => {
            app.move_cursor_end();
            Action::None
        }

        // input history
        KeyCode::Up => {
            app.history_up();
            Action::None
        }
        KeyCode::Down => {
            app.history_down();
            Action::None
        }

        _ => Action::None,
    }
}
