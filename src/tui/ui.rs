// ui rendering

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::core::Role;
use crate::tui::app::{App, LogLevel, Mode, Panel, Popup, SUGGESTED_PROMPTS};
use crate::tui::ascii::AIDVICE_LOGO;
use crate::tui::theme::ThemeKind;

pub fn render(frame: &mut Frame, app: &mut App) {
    let theme = &app.theme;

    // clear with bg color
    frame.render_widget(Clear, frame.area());
    frame.render_widget(Block::default().style(theme.base()), frame.area());

    // main layout: header + content + footer
    let main = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7), // header with logo
            Constraint::Min(10),   // content
            Constraint::Length(1), // footer
        ])
        .split(frame.area());

    render_header(frame, app, main[0]);
    render_content(frame, app, main[1]);
    render_footer(frame, app, main[2]);

    // render popups on top
    match app.popup {
        Popup::Acknowledge => render_acknowledge_popup(frame, app),
        Popup::Suggest => render_suggest_popup(frame, app),
        Popup::Themes => render_theme_popup(frame, app),
        Popup::None => {}
    }
}

fn render_header(frame: &mut Frame, app: &mut App, area: Rect) {
    let theme = &app.theme;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border())
        .style(theme.base());

    frame.render_widget(block, area);

    // split header: logo on left, info on right
    let inner = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(34), Constraint::Min(20)])
        .margin(1)
        .split(area);

    // render ascii logo
    let logo_lines: Vec<Line> = AIDVICE_LOGO
        .iter()
        .map(|&line| Line::styled(line, theme.accent()))
        .collect();

    let logo = Paragraph::new(logo_lines).style(theme.base());
    frame.render_widget(logo, inner[0]);

    // render info panel
    let latency = app
        .latency_ms
        .map(|ms| format!("{}ms", ms))
        .unwrap_or_else(|| "-".to_string());

    let mode_str = match app.mode {
        Mode::Normal => "normal",
        Mode::Insert => "insert",
    };

    let turns = app.transcript.len();

    let info_lines = vec![
        Line::from(vec![
            Span::styled("| ", theme.muted()),
            Span::styled("aidvice", theme.accent()),
            Span::styled(
                " - supportive perspectives, not professional advice",
                theme.muted(),
            ),
        ]),
        Line::from(vec![
            Span::styled("| Model: ", theme.muted()),
            Span::styled(app.model.as_str(), theme.base()),
            Span::styled(" | ", theme.muted()),
            Span::styled(&latency, theme.accent()),
            Span::styled(" | Messages: ", theme.muted()),
            Span::styled(turns.to_string(), theme.base()),
        ]),
        Line::from(vec![
            Span::styled("| Mode: ", theme.muted()),
            Span::styled(mode_str, theme.accent()),
        ]),
        Line::from(vec![
            Span::styled("| ", theme.muted()),
            Span::styled("[Tab]", theme.accent()),
            Span::styled(" Panels  ", theme.muted()),
            Span::styled("[s]", theme.accent()),
            Span::styled(" Suggestions  ", theme.muted()),
            Span::styled("[t]", theme.accent()),
            Span::styled(" Themes  ", theme.muted()),
            Span::styled("[q]", theme.accent()),
            Span::styled(" Quit", theme.muted()),
        ]),
    ];

    let info = Paragraph::new(info_lines).style(theme.base());
    frame.render_widget(info, inner[1]);
}

fn render_content(frame: &mut Frame, app: &mut App, area: Rect) {
    if app.fullscreen {
        // render only the active panel in fullscreen
        match app.panel {
            Panel::Chat => render_chat(frame, app, area),
            Panel::Input => render_input(frame, app, area),
            Panel::Logs => render_logs(frame, app, area),
        }
        return;
    }

    // chat on top, input and logs below
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(8), Constraint::Length(7)])
        .split(area);

    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(rows[1]);

    render_chat(frame, app, rows[0]);
    render_input(frame, app, bottom[0]);
    render_logs(frame, app, bottom[1]);
}

fn render_footer(frame: &mut Frame, app: &mut App, area: Rect) {
    let theme = &app.theme;

    let mut parts = vec![
        Span::styled(" Enter ", theme.base().bg(theme.accent).fg(theme.bg)),
        Span::styled(" Send ", theme.muted()),
        Span::styled("| ", theme.border()),
        Span::styled("i ", theme.accent()),
        Span::styled("Type ", theme.muted()),
        Span::styled("| ", theme.border()),
        Span::styled("s ", theme.accent()),
        Span::styled("Suggest ", theme.muted()),
        Span::styled("| ", theme.border()),
        Span::styled("y ", theme.accent()),
        Span::styled("Copy ", theme.muted()),
        Span::styled("| ", theme.border()),
        Span::styled("x ", theme.accent()),
        Span::styled("Export ", theme.muted()),
        Span::styled("| ", theme.border()),
        Span::styled("f ", theme.accent()),
    ];

    if app.fullscreen {
        parts.push(Span::styled("Exit Full ", theme.warning()));
    } else {
        parts.push(Span::styled("Full ", theme.muted()));
    }

    parts.extend([
        Span::styled("| ", theme.border()),
        Span::styled("t ", theme.accent()),
        Span::styled("Theme ", theme.muted()),
        Span::styled("| ", theme.border()),
        Span::styled("q ", theme.accent()),
        Span::styled("Quit ", theme.muted()),
    ]);

    let line = Line::from(parts);
    let paragraph = Paragraph::new(line)
        .style(theme.base())
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

fn render_chat(frame: &mut Frame, app: &mut App, area: Rect) {
    let theme = &app.theme;
    let active = app.panel == Panel::Chat;

    let border_style = if active {
        theme.accent()
    } else {
        theme.border()
    };

    let block = Block::default()
        .title(Span::styled(" Conversation ", theme.title()))
        .borders(Borders::ALL)
        .border_style(border_style)
        .style(theme.base());

    let mut lines: Vec<Line> = Vec::new();
    for message in app.transcript.messages() {
        let speaker = match message.role {
            Role::Assistant => Span::styled("aidvice", theme.assistant()),
            _ => Span::styled("you", theme.user()),
        };
        lines.push(Line::from(speaker));
        for content_line in message.content.lines() {
            lines.push(Line::styled(content_line.to_string(), theme.base()));
        }
        lines.push(Line::from(""));
    }

    if app.loading {
        lines.push(Line::styled("thinking...", theme.muted()));
    }

    // keep the newest messages in view unless the user scrolled away
    let inner_width = area.width.saturating_sub(2) as usize;
    let inner_height = area.height.saturating_sub(2) as usize;
    if app.chat_follow {
        let total = wrapped_height(&lines, inner_width);
        app.chat_scroll = total.saturating_sub(inner_height);
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(theme.base())
        .wrap(Wrap { trim: false })
        .scroll((app.chat_scroll as u16, 0));

    frame.render_widget(paragraph, area);
}

fn render_input(frame: &mut Frame, app: &mut App, area: Rect) {
    let theme = &app.theme;
    let active = app.panel == Panel::Input;

    let border_style = if active {
        theme.accent()
    } else {
        theme.border()
    };

    let block = Block::default()
        .title(Span::styled(" Your Message ", theme.title()))
        .borders(Borders::ALL)
        .border_style(border_style)
        .style(theme.base());

    // no visual cursor here, the real terminal cursor is positioned below
    let content = if app.prompt.is_empty() && app.mode != Mode::Insert {
        vec![Line::styled(
            "press 'i' to type, 's' for suggestions...",
            theme.muted(),
        )]
    } else {
        app.prompt
            .lines()
            .map(|l| Line::styled(l.to_string(), theme.base()))
            .collect()
    };

    let paragraph = Paragraph::new(content)
        .block(block)
        .style(theme.base())
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);

    // set cursor position when in insert mode
    if app.mode == Mode::Insert && active {
        let inner = area.inner(ratatui::layout::Margin {
            horizontal: 1,
            vertical: 1,
        });

        // calculate cursor position within text
        let (cursor_line, cursor_col) = {
            let mut line = 0usize;
            let mut col = 0usize;
            for (i, ch) in app.prompt.chars().enumerate() {
                if i >= app.prompt_cursor {
                    break;
                }
                if ch == '\n' {
                    line += 1;
                    col = 0;
                } else {
                    col += 1;
                }
            }
            (line, col)
        };

        let cursor_x = inner.x + cursor_col as u16;
        let cursor_y = inner.y + cursor_line as u16;

        // only set cursor if within bounds
        if cursor_x < inner.right() && cursor_y < inner.bottom() {
            frame.set_cursor_position((cursor_x, cursor_y));
        }
    }
}

fn render_logs(frame: &mut Frame, app: &mut App, area: Rect) {
    let theme = &app.theme;
    let active = app.panel == Panel::Logs;

    let border_style = if active {
        theme.accent()
    } else {
        theme.border()
    };

    let block = Block::default()
        .title(Span::styled(" Activity ", theme.title()))
        .borders(Borders::ALL)
        .border_style(border_style)
        .style(theme.base());

    let lines: Vec<Line> = app
        .logs
        .iter()
        .map(|entry| {
            let (prefix, style) = match entry.level {
                LogLevel::Ok => ("[OK]", theme.assistant()),
                LogLevel::Info => ("[--]", theme.muted()),
                LogLevel::Warn => ("[!!]", theme.warning()),
                LogLevel::Error => ("[ERR]", theme.error()),
            };
            Line::from(vec![
                Span::styled(format!("{} ", prefix), style),
                Span::styled(&entry.message, theme.base()),
            ])
        })
        .collect();

    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(theme.base())
        .scroll((app.log_scroll as u16, 0));

    frame.render_widget(paragraph, area);
}

fn render_acknowledge_popup(frame: &mut Frame, app: &mut App) {
    let theme = &app.theme;
    let area = centered_rect(60, 50, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(Span::styled(" important disclaimer ", theme.title()))
        .borders(Borders::ALL)
        .border_style(theme.warning())
        .style(theme.base());

    let lines = vec![
        Line::styled("This chatbot is for entertainment purposes only.", theme.warning()),
        Line::from(""),
        Line::styled(
            "It is not meant to replace professional human advice",
            theme.base(),
        ),
        Line::styled(
            "(medical, legal, financial, or psychological).",
            theme.base(),
        ),
        Line::styled(
            "Always consult a qualified professional for personal concerns.",
            theme.base(),
        ),
        Line::from(""),
        Line::styled(
            "Your privacy matters: do not share sensitive personal information.",
            theme.muted(),
        ),
        Line::from(""),
        Line::from(""),
        Line::from(vec![
            Span::styled("enter ", theme.accent()),
            Span::styled("I understand and accept  ", theme.muted()),
            Span::styled("q ", theme.accent()),
            Span::styled("quit", theme.muted()),
        ]),
    ];

    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(theme.base())
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

fn render_suggest_popup(frame: &mut Frame, app: &mut App) {
    let theme = &app.theme;
    let area = centered_rect(60, 40, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(Span::styled(" get started with a suggestion ", theme.title()))
        .borders(Borders::ALL)
        .border_style(theme.accent())
        .style(theme.base());

    let mut lines = vec![
        Line::styled("sent exactly as if you typed it:", theme.muted()),
        Line::from(""),
    ];

    for (i, prompt) in SUGGESTED_PROMPTS.iter().enumerate() {
        let is_selected = i == app.suggest_index;
        if is_selected {
            lines.push(Line::from(vec![
                Span::styled(" > ", theme.accent()),
                Span::styled(*prompt, theme.selected().fg(theme.accent)),
            ]));
        } else {
            lines.push(Line::from(vec![Span::styled(
                format!("   {}", prompt),
                theme.base(),
            )]));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("j/k ", theme.accent()),
        Span::styled("navigate  ", theme.muted()),
        Span::styled("enter ", theme.accent()),
        Span::styled("send  ", theme.muted()),
        Span::styled("esc ", theme.accent()),
        Span::styled("close", theme.muted()),
    ]));

    let paragraph = Paragraph::new(lines).block(block).style(theme.base());
    frame.render_widget(paragraph, area);
}

fn render_theme_popup(frame: &mut Frame, app: &mut App) {
    let theme = &app.theme;
    let area = centered_rect(40, 50, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(Span::styled(" select theme ", theme.title()))
        .borders(Borders::ALL)
        .border_style(theme.accent())
        .style(theme.base());

    let lines: Vec<Line> = ThemeKind::ALL
        .iter()
        .enumerate()
        .map(|(i, &kind)| {
            let name = kind.name();
            let is_selected = i == app.theme_scroll;

            if is_selected {
                Line::from(vec![
                    Span::styled(" > ", theme.accent()),
                    Span::styled(name, theme.selected().fg(theme.accent)),
                ])
            } else {
                Line::from(vec![Span::styled(format!("   {name}"), theme.base())])
            }
        })
        .collect();

    let help = Line::from(vec![
        Span::styled(" j/k ", theme.accent()),
        Span::styled("navigate  ", theme.muted()),
        Span::styled("enter ", theme.accent()),
        Span::styled("select  ", theme.muted()),
        Span::styled("esc ", theme.accent()),
        Span::styled("close", theme.muted()),
    ]);

    let mut all_lines = lines;
    all_lines.push(Line::from(""));
    all_lines.push(help);

    let paragraph = Paragraph::new(all_lines).block(block).style(theme.base());
    frame.render_widget(paragraph, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

// estimate how many display rows the wrapped lines occupy
fn wrapped_height(lines: &[Line], width: usize) -> usize {
    if width == 0 {
        return lines.len();
    }
    lines
        .iter()
        .map(|line| {
            let len = line.width();
            if len == 0 { 1 } else { len.div_ceil(width) }
        })
        .sum()
}
