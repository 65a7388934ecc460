//! Terminal User Interface
//!
//! TUI for the detective game using ratatui

pub mod app;
pub mod widgets;

pub use app::App;

use crate::data::Severity;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders},
};

/// Color scheme for the game
pub struct Theme {
    pub bg: Color,
    pub fg: Color,
    pub accent: Color,
    pub alert: Color,
    pub success: Color,
    pub warning: Color,
    pub border: Color,
    pub header: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            bg: Color::Black,
            fg: Color::White,
            accent: Color::Yellow,
            alert: Color::Red,
            success: Color::Green,
            warning: Color::Yellow,
            border: Color::DarkGray,
            header: Color::Magenta,
        }
    }
}

/// Get color for severity level
pub fn severity_color(severity: &Severity) -> Color {
    match severity {
        Severity::Info => Color::Gray,
        Severity::Low => Color::Blue,
        Severity::Medium => Color::Yellow,
        Severity::High => Color::Red,
        Severity::Critical => Color::Magenta,
    }
}

/// Create a styled border block
pub fn styled_block<'a>(title: &str, theme: &Theme) -> Block<'a> {
    Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border))
        .title_style(Style::default().fg(theme.accent).add_modifier(Modifier::BOLD))
}

/// ASCII art logo
pub const LOGO: &str = r#"
╔══════════════════════════════════════════════════════════════╗
║                                                              ║
║   ██████╗ ███████╗████████╗███████╗ ██████╗████████╗██╗██╗   ║
║   ██╔══██╗██╔════╝╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██║██║   ║
║   ██║  ██║█████╗     ██║   █████╗  ██║        ██║   ██║██║   ║
║   ██║  ██║██╔══╝     ██║   ██╔══╝  ██║        ██║   ██║╚═╝   ║
║   ██████╔╝███████╗   ██║   ███████╗╚██████╗   ██║   ██║██╗   ║
║   ╚═════╝ ╚══════╝   ╚═╝   ╚══════╝ ╚═════╝   ╚═╝   ╚═╝╚═╝   ║
║                                                              ║
║    ██████╗ ██╗   ██╗███████╗███████╗████████╗                ║
║   ██╔═══██╗██║   ██║██╔════╝██╔════╝╚══██╔══╝                ║
║   ██║   ██║██║   ██║█████╗  ███████╗   ██║                   ║
║   ██║▄▄ ██║██║   ██║██╔══╝  ╚════██║   ██║                   ║
║   ╚██████╔╝╚██████╔╝███████╗███████║   ██║                   ║
║    ╚══▀▀═╝  ╚═════╝ ╚══════╝╚══════╝   ╚═╝                   ║
║                                                              ║
║              The Final Judgment                              ║
╚══════════════════════════════════════════════════════════════╝
"#;

/// Smaller logo for header
pub const SMALL_LOGO: &str = " DETECTIVE QUEST ";

/// Help text
pub const HELP_TEXT: &str = r#"
╔═══════════════════════════════════════════════════════════════╗
║                       CONTROLS                                ║
╠═══════════════════════════════════════════════════════════════╣
║  ↑/↓  Navigate the main menu                                  ║
║  Enter Select option / Confirm accusation                     ║
║  Esc   Close this help                                        ║
║  ?     Toggle this help                                       ║
║  q     Quit (from the main menu)                              ║
╠═══════════════════════════════════════════════════════════════╣
║                      EXPLORATION                              ║
╠═══════════════════════════════════════════════════════════════╣
║  e     Take the left door                                     ║
║  d     Take the right door                                    ║
║  s     Stop exploring and go to the judgment                  ║
╠═══════════════════════════════════════════════════════════════╣
║  Clues are collected automatically when you enter a room.     ║
║  There is no way back: choose your route with care.           ║
╚═══════════════════════════════════════════════════════════════╝
"#;

/// Create the main layout (header / content / status bar)
pub fn create_main_layout(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),   // Header
            Constraint::Min(10),     // Main content
            Constraint::Length(3),   // Status bar
        ])
        .split(area)
        .to_vec()
}

/// Create the game content layout (notebook panel + main area)
pub fn create_content_layout(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),  // Clue notebook
            Constraint::Percentage(70),  // Transcript
        ])
        .split(area)
        .to_vec()
}
