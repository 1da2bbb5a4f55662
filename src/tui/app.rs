// app state for the tui

use crate::core::{Message, Transcript};
use crate::tui::theme::{Theme, ThemeKind, detect_theme};
use std::time::Instant;

/// First transcript entry; takes part in history like any assistant turn.
pub const GREETING: &str =
    "Hi! I'm AIdvice, ready to offer supportive perspectives. How can I help you today?";

/// Canned openers. A selection is submitted exactly as if it were typed.
pub const SUGGESTED_PROMPTS: &[&str] = &[
    "How can I stay motivated?",
    "What are some tips for managing stress?",
    "I need a new perspective on dealing with procrastination.",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Chat,
    Input,
    Logs,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Normal,
    Insert,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Popup {
    None,
    Acknowledge,
    Suggest,
    Themes,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Ok,
    Info,
    Warn,
    Error,
}

#[derive(Debug, Clone)]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
}

pub struct App {
    pub running: bool,
    pub mode: Mode,
    pub panel: Panel,
    pub popup: Popup,
    pub fullscreen: bool,
    pub theme_kind: ThemeKind,
    pub theme: Theme,

    // the one-time gate before any chat is allowed
    pub acknowledged: bool,

    // model shown in the header
    pub model: String,

    // conversation state, append-only for the session
    pub transcript: Transcript,

    // prompt input (multi-line)
    pub prompt: String,
    pub prompt_cursor: usize,

    // logs
    pub logs: Vec<LogEntry>,

    // turn state
    pub loading: bool,
    pub latency_ms: Option<u64>,
    pub turn_start: Option<Instant>,

    // scroll
    pub chat_scroll: usize,
    pub chat_follow: bool,
    pub log_scroll: usize,
    pub theme_scroll: usize,
    pub suggest_index: usize,

    // input history
    pub history: Vec<String>,
    pub history_index: Option<usize>,
}

impl App {
    pub fn new(model: String) -> Self {
        let theme_kind = detect_theme();

        let mut transcript = Transcript::new();
        transcript.push(Message::assistant(GREETING));

        let mut app = Self {
            running: true,
            mode: Mode::Normal,
            panel: Panel::Input,
            popup: Popup::Acknowledge,
            fullscreen: false,
            theme_kind,
            theme: Theme::from_kind(theme_kind),
            acknowledged: false,
            model,
            transcript,
            prompt: String::new(),
            prompt_cursor: 0,
            logs: Vec::new(),
            loading: false,
            latency_ms: None,
            turn_start: None,
            chat_scroll: 0,
            chat_follow: true,
            log_scroll: 0,
            theme_scroll: theme_kind.index(),
            suggest_index: 0,
            history: Vec::new(),
            history_index: None,
        };

        app.log(LogLevel::Info, "waiting for acknowledgement".to_string());
        app
    }

    pub fn acknowledge(&mut self) {
        self.acknowledged = true;
        self.popup = Popup::None;
        self.log(LogLevel::Ok, "disclaimer accepted, ready to chat".to_string());
    }

    pub fn log(&mut self, level: LogLevel, message: String) {
        self.logs.push(LogEntry { level, message });
        // auto-scroll to bottom
        if self.logs.len() > 1 {
            self.log_scroll = self.logs.len().saturating_sub(8);
        }
    }

    // transcript appends - the only way conversation state changes
    pub fn push_user(&mut self, content: &str) {
        self.transcript.push(Message::user(content));
        self.chat_follow = true;
    }

    pub fn push_reply(&mut self, content: String) {
        if let Some(start) = self.turn_start.take() {
            self.latency_ms = Some(start.elapsed().as_millis() as u64);
        }
        self.transcript.push(Message::assistant(content));
        self.loading = false;
        self.chat_follow = true;
        self.log(
            LogLevel::Ok,
            format!("reply received ({}ms)", self.latency_ms.unwrap_or(0)),
        );
    }

    pub fn last_reply(&self) -> Option<String> {
        self.transcript
            .messages()
            .iter()
            .rev()
            .find(|m| m.role == crate::core::Role::Assistant)
            .map(|m| m.content.clone())
    }

    /// Plain-text rendering of the conversation, for export.
    pub fn export_transcript(&self) -> Option<String> {
        if self.transcript.is_empty() {
            return None;
        }

        let mut out = String::from("aidvice conversation\n\n");
        for message in self.transcript.messages() {
            let speaker = match message.role {
                crate::core::Role::Assistant => "aidvice",
                _ => "you",
            };
            out.push_str(speaker);
            out.push_str(": ");
            out.push_str(&message.content);
            out.push_str("\n\n");
        }
        Some(out)
    }

    // themes
    pub fn set_theme(&mut self, kind: ThemeKind) {
        self.theme_kind = kind;
        self.theme = Theme::from_kind(kind);
        self.theme_scroll = kind.index();
    }

    pub fn open_theme_popup(&mut self) {
        self.popup = Popup::Themes;
        self.theme_scroll = self.theme_kind.index();
    }

    pub fn close_popup(&mut self) {
        self.popup = Popup::None;
    }

    pub fn theme_scroll_up(&mut self) {
        if self.theme_scroll > 0 {
            self.theme_scroll -= 1;
            self.set_theme(ThemeKind::ALL[self.theme_scroll]);
        }
    }

    pub fn theme_scroll_down(&mut self) {
        if self.theme_scroll < ThemeKind::ALL.len() - 1 {
            self.theme_scroll += 1;
            self.set_theme(ThemeKind::ALL[self.theme_scroll]);
        }
    }

    pub fn select_theme(&mut self) {
        self.set_theme(ThemeKind::ALL[self.theme_scroll]);
        self.close_popup();
    }

    // suggested prompts
    pub fn open_suggest_popup(&mut self) {
        self.popup = Popup::Suggest;
        self.suggest_index = 0;
    }

    pub fn suggest_up(&mut self) {
        self.suggest_index = self.suggest_index.saturating_sub(1);
    }

    pub fn suggest_down(&mut self) {
        if self.suggest_index < SUGGESTED_PROMPTS.len() - 1 {
            self.suggest_index += 1;
        }
    }

    pub fn select_suggestion(&mut self) -> Option<String> {
        let prompt = SUGGESTED_PROMPTS.get(self.suggest_index)?.to_string();
        self.popup = Popup::None;
        self.history.push(prompt.clone());
        self.history_index = None;
        self.turn_start = Some(Instant::now());
        Some(prompt)
    }

    pub fn cycle_panel(&mut self) {
        self.panel = match self.panel {
            Panel::Chat => Panel::Input,
            Panel::Input => Panel::Logs,
            Panel::Logs => Panel::Chat,
        };
    }

    pub fn toggle_fullscreen(&mut self) {
        self.fullscreen = !self.fullscreen;
    }

    pub fn enter_insert(&mut self) {
        self.mode = Mode::Insert;
        self.panel = Panel::Input;
    }

    pub fn exit_insert(&mut self) {
        self.mode = Mode::Normal;
    }

    // prompt editing
    pub fn insert_char(&mut self, c: char) {
        self.prompt.insert(self.prompt_cursor, c);
        self.prompt_cursor += 1;
    }

    pub fn insert_newline(&mut self) {
        self.prompt.insert(self.prompt_cursor, '\n');
        self.prompt_cursor += 1;
    }

    pub fn delete_char(&mut self) {
        if self.prompt_cursor > 0 {
            self.prompt_cursor -= 1;
            self.prompt.remove(self.prompt_cursor);
        }
    }

    pub fn delete_char_forward(&mut self) {
        if self.prompt_cursor < self.prompt.len() {
            self.prompt.remove(self.prompt_cursor);
        }
    }

    pub fn move_cursor_left(&mut self) {
        self.prompt_cursor = self.prompt_cursor.saturating_sub(1);
    }

    pub fn move_cursor_right(&mut self) {
        if self.prompt_cursor < self.prompt.len() {
            self.prompt_cursor += 1;
        }
    }

    pub fn move_cursor_start(&mut self) {
        self.prompt_cursor = 0;
    }

    pub fn move_cursor_end(&mut self) {
        self.prompt_cursor = self.prompt.len();
    }

    pub fn clear_prompt(&mut self) {
        self.prompt.clear();
        self.prompt_cursor = 0;
    }

    // input history navigation
    pub fn history_up(&mut self) {
        if self.history.is_empty() {
            return;
        }
        match self.history_index {
            None => {
                self.history_index = Some(self.history.len() - 1);
            }
            Some(i) if i > 0 => {
                self.history_index = Some(i - 1);
            }
            _ => {}
        }
        if let Some(i) = self.history_index {
            self.prompt = self.history[i].clone();
            self.prompt_cursor = self.prompt.len();
        }
    }

    pub fn history_down(&mut self) {
        match self.history_index {
            Some(i) if i < self.history.len() - 1 => {
                self.history_index = Some(i + 1);
                self.prompt = self.history[i + 1].clone();
                self.prompt_cursor = self.prompt.len();
            }
            Some(_) => {
                self.history_index = None;
                self.clear_prompt();
            }
            None => {}
        }
    }

    pub fn submit(&mut self) -> Option<String> {
        if !self.acknowledged || self.loading {
            return None;
        }
        if self.prompt.trim().is_empty() {
            return None;
        }
        let message = self.prompt.clone();
        self.history.push(message.clone());
        self.history_index = None;
        self.clear_prompt();
        self.turn_start = Some(Instant::now());
        Some(message)
    }

    pub fn scroll_up(&mut self) {
        match self.panel {
            Panel::Chat => {
                self.chat_follow = false;
                self.chat_scroll = self.chat_scroll.saturating_sub(1);
            }
            Panel::Logs => self.log_scroll = self.log_scroll.saturating_sub(1),
            Panel::Input => {}
        }
    }

    pub fn scroll_down(&mut self) {
        match self.panel {
            Panel::Chat => {
                self.chat_follow = false;
                self.chat_scroll += 1;
            }
            Panel::Logs => self.log_scroll += 1,
            Panel::Input => {}
        }
    }

    pub fn jump_to_latest(&mut self) {
        self.chat_follow = true;
    }
}
