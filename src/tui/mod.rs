// terminal ui

mod app;
mod ascii;
mod event;
mod theme;
mod ui;

pub use app::App;
pub use theme::ThemeKind;

use crossterm::{
    cursor::SetCursorStyle,
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, stdout};
use std::time::Duration;

use crate::Error;
use crate::core::{Claude, MODEL, Message, Router, Screen};
use app::{LogLevel, Mode};
use event::{Action, handle_event, poll_event};

fn pipe_to(cmd: &str, args: &[&str], text: &str) -> bool {
    use std::io::Write;
    use std::process::{Command, Stdio};

    let Ok(mut child) = Command::new(cmd).args(args).stdin(Stdio::piped()).spawn() else {
        return false;
    };
    let Some(stdin) = child.stdin.as_mut() else {
        return false;
    };
    if stdin.write_all(text.as_bytes()).is_err() {
        return false;
    }
    child.wait().map(|s| s.success()).unwrap_or(false)
}

fn copy_to_clipboard(text: &str) -> bool {
    // pbcopy (macOS), then the linux fallbacks
    pipe_to("pbcopy", &[], text)
        || pipe_to("xclip", &["-selection", "clipboard"], text)
        || pipe_to("xsel", &["--clipboard", "--input"], text)
}

pub async fn run(router: Router<Claude>) -> Result<(), Error> {
    // setup terminal
    enable_raw_mode().map_err(|e| Error::Terminal(e.to_string()))?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen).map_err(|e| Error::Terminal(e.to_string()))?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).map_err(|e| Error::Terminal(e.to_string()))?;

    // run app
    let result = run_app(&mut terminal, router).await;

    // restore terminal
    disable_raw_mode().ok();
    execute!(
        terminal.backend_mut(),
        SetCursorStyle::DefaultUserShape,
        LeaveAlternateScreen
    )
    .ok();
    terminal.show_cursor().ok();

    result
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    router: Router<Claude>,
) -> Result<(), Error> {
    let mut app = App::new(MODEL.to_string());
    let mut last_mode = app.mode;

    loop {
        // update cursor style before render
        if app.mode != last_mode {
            let cursor_style = match app.mode {
                Mode::Insert => SetCursorStyle::BlinkingBar,
                Mode::Normal => SetCursorStyle::BlinkingBlock,
            };
            execute!(terminal.backend_mut(), cursor_style).ok();
            last_mode = app.mode;
        }

        // render (cursor position is set in ui::render when in insert mode)
        terminal
            .draw(|frame| ui::render(frame, &mut app))
            .map_err(|e| Error::Terminal(e.to_string()))?;

        // poll events
        if let Some(event) =
            poll_event(Duration::from_millis(100)).map_err(|e| Error::Terminal(e.to_string()))?
        {
            match handle_event(&mut app, event) {
                Action::Quit => break,
                Action::Submit(message) => {
                    app.loading = true;
                    app.log(
                        LogLevel::Info,
                        format!("sending: {}", message.lines().next().unwrap_or(&message)),
                    );

                    // the router re-screens internally; this hit is only
                    // surfaced for the activity panel
                    if let Some(term) = Screen::check(&message).matched {
                        app.log(
                            LogLevel::Warn,
                            format!("needs a professional: matched \"{term}\""),
                        );
                    }

                    // snapshot the prior turns, then show the user message
                    // right away while the reply is pending
                    let history: Vec<Message> = app.transcript.messages().to_vec();
                    app.push_user(&message);

                    terminal
                        .draw(|frame| ui::render(frame, &mut app))
                        .map_err(|e| Error::Terminal(e.to_string()))?;

                    // one blocking turn; failures come back as chat text
                    let reply = router.respond(&message, &history).await;
                    app.push_reply(reply);
                }
                Action::CopyReply => {
                    if let Some(reply) = app.last_reply() {
                        if copy_to_clipboard(&reply) {
                            app.log(LogLevel::Ok, "reply copied to clipboard".to_string());
                        } else {
                            app.log(LogLevel::Warn, "clipboard not available".to_string());
                        }
                    } else {
                        app.log(LogLevel::Warn, "no reply to copy".to_string());
                    }
                }
                Action::ExportTranscript => {
                    if let Some(text) = app.export_transcript() {
                        let filename = format!(
                            "aidvice_{}.txt",
                            chrono::Local::now().format("%Y%m%d_%H%M%S")
                        );
                        match std::fs::write(&filename, &text) {
                            Ok(_) => app.log(LogLevel::Ok, format!("exported to {}", filename)),
                            Err(e) => app.log(LogLevel::Error, format!("export failed: {}", e)),
                        }
                    } else {
                        app.log(LogLevel::Warn, "nothing to export".to_string());
                    }
                }
                Action::None => {}
            }
        }

        if !app.running {
            break;
        }
    }

    Ok(())
}
