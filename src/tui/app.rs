//! Main application state and rendering

use crate::data::Severity;
use crate::game::scenario::CaseFile;
use crate::game::{GameMessage, Investigation, Verdict};
use crate::tui::widgets::{ClueTally, VerdictBox};
use crate::tui::{create_content_layout, create_main_layout, severity_color, styled_block};
use crate::tui::{Theme, HELP_TEXT, LOGO, SMALL_LOGO};
use crate::VERSION;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};
use std::time::Duration;

const MENU_ITEMS: [&str; 2] = ["Begin the investigation", "Quit"];

/// Application state
pub struct App {
    pub investigation: Investigation,
    pub theme: Theme,
    pub running: bool,
    pub show_help: bool,
    pub current_screen: Screen,
    pub menu_state: ListState,
    /// The accused name being typed on the judgment screen
    pub input_buffer: String,
    /// Verdict lines shown on the final screen
    pub verdict_lines: Vec<String>,
    /// Clues hidden in the mansion at the start of the case
    clue_total: usize,
}

/// Current screen being displayed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    MainMenu,
    Briefing,
    Playing,
    Judgment,
    Verdict,
}

impl App {
    pub fn new() -> Self {
        let investigation = Investigation::new(CaseFile::final_judgment());
        let clue_total =
            investigation.case.map.remaining_clues() + investigation.clues.len();
        let mut menu_state = ListState::default();
        menu_state.select(Some(0));

        Self {
            investigation,
            theme: Theme::default(),
            running: true,
            show_help: false,
            current_screen: Screen::MainMenu,
            menu_state,
            input_buffer: String::new(),
            verdict_lines: Vec::new(),
            clue_total,
        }
    }

    /// Start over with a fresh copy of the case
    fn restart(&mut self) {
        let fresh = App::new();
        self.investigation = fresh.investigation;
        self.clue_total = fresh.clue_total;
        self.input_buffer.clear();
        self.verdict_lines.clear();
        self.current_screen = Screen::MainMenu;
    }

    /// Poll for one input event and apply it. Returns `Ok(false)` to quit.
    pub fn handle_input(&mut self) -> std::io::Result<bool> {
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    return Ok(true);
                }

                if self.show_help {
                    if matches!(key.code, KeyCode::Esc | KeyCode::Char('?')) {
                        self.show_help = false;
                    }
                    return Ok(true);
                }
                if key.code == KeyCode::Char('?') && self.current_screen != Screen::Judgment {
                    self.show_help = true;
                    return Ok(true);
                }

                match self.current_screen {
                    Screen::MainMenu => self.handle_menu_key(key.code),
                    Screen::Briefing => {
                        if key.code == KeyCode::Enter {
                            self.current_screen = Screen::Playing;
                        }
                    }
                    Screen::Playing => self.handle_playing_key(key.code),
                    Screen::Judgment => self.handle_judgment_key(key.code),
                    Screen::Verdict => match key.code {
                        KeyCode::Enter => self.restart(),
                        KeyCode::Char('q') | KeyCode::Esc => {
                            self.running = false;
                            return Ok(false);
                        }
                        _ => {}
                    },
                }
            }
        }
        Ok(self.running)
    }

    fn handle_menu_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') => {
                self.running = false;
            }
            KeyCode::Up => {
                let i = self.menu_state.selected().unwrap_or(0);
                self.menu_state
                    .select(Some(i.checked_sub(1).unwrap_or(MENU_ITEMS.len() - 1)));
            }
            KeyCode::Down => {
                let i = self.menu_state.selected().unwrap_or(0);
                self.menu_state.select(Some((i + 1) % MENU_ITEMS.len()));
            }
            KeyCode::Enter => match self.menu_state.selected() {
                Some(0) => self.current_screen = Screen::Briefing,
                Some(1) => self.running = false,
                _ => {}
            },
            _ => {}
        }
    }

    fn handle_playing_key(&mut self, code: KeyCode) {
        if let KeyCode::Char(c) = code {
            match self.investigation.step(c) {
                Ok(_) => {
                    if c == 's' {
                        self.current_screen = Screen::Judgment;
                    }
                }
                Err(e) => {
                    self.investigation.add_message(GameMessage::alert(
                        Severity::High,
                        "System",
                        &format!("{e}"),
                    ));
                }
            }
        }
    }

    fn handle_judgment_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Enter => {
                let accused = self.input_buffer.trim().to_string();
                if accused.is_empty() {
                    return;
                }
                match self.investigation.accuse(&accused) {
                    Ok(lines) => {
                        self.verdict_lines = lines;
                        self.current_screen = Screen::Verdict;
                    }
                    Err(e) => {
                        self.verdict_lines = vec![format!("{e}")];
                        self.current_screen = Screen::Verdict;
                    }
                }
            }
            KeyCode::Backspace => {
                self.input_buffer.pop();
            }
            KeyCode::Char(c) => {
                self.input_buffer.push(c);
            }
            _ => {}
        }
    }

    pub fn render(&mut self, frame: &mut Frame) {
        match self.current_screen {
            Screen::MainMenu => self.render_main_menu(frame),
            Screen::Briefing => self.render_briefing(frame),
            Screen::Playing | Screen::Judgment => self.render_game(frame),
            Screen::Verdict => self.render_verdict(frame),
        }

        if self.show_help {
            self.render_help_overlay(frame);
        }
    }

    fn render_main_menu(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(20),
                Constraint::Length(MENU_ITEMS.len() as u16 + 2),
                Constraint::Min(1),
            ])
            .split(area);

        let logo = Paragraph::new(LOGO)
            .style(Style::default().fg(self.theme.accent))
            .alignment(Alignment::Center);
        frame.render_widget(logo, chunks[0]);

        let items: Vec<ListItem> = MENU_ITEMS
            .iter()
            .map(|item| ListItem::new(format!("  {}  ", item)))
            .collect();
        let menu = List::new(items)
            .block(styled_block("Main Menu", &self.theme))
            .highlight_style(
                Style::default()
                    .fg(self.theme.bg)
                    .bg(self.theme.accent)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("▶ ");
        let menu_area = centered_rect(40, chunks[1]);
        frame.render_stateful_widget(menu, menu_area, &mut self.menu_state);

        let footer = Paragraph::new(format!("v{}  •  ? for help  •  q to quit", VERSION))
            .style(Style::default().fg(self.theme.border))
            .alignment(Alignment::Center);
        frame.render_widget(footer, chunks[2]);
    }

    fn render_briefing(&self, frame: &mut Frame) {
        let area = centered_rect(70, frame.area());
        let case = &self.investigation.case;

        let mut lines = vec![
            Line::from(Span::styled(
                case.title.clone(),
                Style::default()
                    .fg(self.theme.header)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(case.synopsis.clone()),
            Line::from(""),
            Line::from(Span::styled(
                "The suspects:",
                Style::default().fg(self.theme.accent),
            )),
        ];
        for suspect in &case.suspects {
            lines.push(Line::from(format!("  • {}", suspect)));
        }
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Press Enter to step into the mansion...",
            Style::default().fg(self.theme.success),
        )));

        let briefing = Paragraph::new(lines)
            .block(styled_block("Case Briefing", &self.theme))
            .wrap(Wrap { trim: true });
        frame.render_widget(briefing, area);
    }

    fn render_game(&self, frame: &mut Frame) {
        let chunks = create_main_layout(frame.area());
        self.render_header(frame, chunks[0]);

        let content = create_content_layout(chunks[1]);
        self.render_notebook(frame, content[0]);
        if self.current_screen == Screen::Judgment {
            self.render_judgment_prompt(frame, content[1]);
        } else {
            self.render_messages(frame, content[1]);
        }

        self.render_status_bar(frame, chunks[2]);
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let header = Paragraph::new(Line::from(vec![
            Span::styled(
                SMALL_LOGO,
                Style::default()
                    .fg(self.theme.bg)
                    .bg(self.theme.header)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(
                self.investigation.case.title.clone(),
                Style::default().fg(self.theme.fg),
            ),
        ]))
        .block(styled_block("", &self.theme));
        frame.render_widget(header, area);
    }

    fn render_notebook(&self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(4), Constraint::Length(3)])
            .split(area);

        let items: Vec<ListItem> = if self.investigation.clues.is_empty() {
            vec![ListItem::new("  (nothing yet)")
                .style(Style::default().fg(self.theme.border))]
        } else {
            self.investigation
                .clues
                .iter()
                .map(|clue| ListItem::new(format!("• {}", clue)))
                .collect()
        };
        let notebook = List::new(items).block(styled_block("Clue Notebook", &self.theme));
        frame.render_widget(notebook, chunks[0]);

        let tally = ClueTally::new(self.investigation.clues.len(), self.clue_total)
            .color(self.theme.accent);
        frame.render_widget(tally, inner(chunks[1]));
    }

    fn render_messages(&self, frame: &mut Frame, area: Rect) {
        let visible = area.height.saturating_sub(2) as usize;
        let log = &self.investigation.message_log;
        let start = log.len().saturating_sub(visible);

        let lines: Vec<Line> = log[start..]
            .iter()
            .map(|msg| {
                Line::from(vec![
                    Span::styled(
                        format!("{} ", msg.severity.symbol()),
                        Style::default().fg(severity_color(&msg.severity)),
                    ),
                    Span::raw(msg.message.clone()),
                ])
            })
            .collect();

        let messages = Paragraph::new(lines)
            .block(styled_block("Investigation", &self.theme))
            .wrap(Wrap { trim: false });
        frame.render_widget(messages, area);
    }

    fn render_judgment_prompt(&self, frame: &mut Frame, area: Rect) {
        let case = &self.investigation.case;
        let mut lines: Vec<Line> = self
            .investigation
            .clue_report()
            .into_iter()
            .map(Line::from)
            .collect();
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("Who do you accuse? ({})", case.suspects.join(", ")),
            Style::default().fg(self.theme.accent),
        )));
        lines.push(Line::from(vec![
            Span::raw("> "),
            Span::styled(
                self.input_buffer.clone(),
                Style::default().fg(self.theme.fg).add_modifier(Modifier::BOLD),
            ),
            Span::styled("█", Style::default().fg(self.theme.accent)),
        ]));

        let prompt = Paragraph::new(lines)
            .block(styled_block("The Judgment", &self.theme))
            .wrap(Wrap { trim: false });
        frame.render_widget(prompt, area);
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        let stats = &self.investigation.stats;
        let status = format!(
            " {} │ Room: {} │ Rooms entered: {} │ Blocked: {} │ e/d move, s judge, ? help",
            self.investigation.phase.name(),
            self.investigation.current_room_name(),
            stats.rooms_entered,
            stats.blocked_attempts,
        );
        let bar = Paragraph::new(status)
            .style(Style::default().fg(self.theme.fg))
            .block(styled_block("", &self.theme));
        frame.render_widget(bar, area);
    }

    fn render_verdict(&self, frame: &mut Frame) {
        let won = matches!(
            self.investigation.verdict.as_ref().map(|v| v.verdict),
            Some(Verdict::Sustained)
        );
        let (title, color) = if won {
            ("CASE CLOSED", self.theme.success)
        } else {
            ("CASE UNSOLVED", self.theme.alert)
        };

        let mut content = self.verdict_lines.clone();
        content.push(String::new());
        content.push("Enter: new investigation   q: quit".to_string());

        let height = (content.len() + 2).max(7) as u16;
        let area = frame.area();
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(1),
                Constraint::Length(height),
                Constraint::Min(1),
            ])
            .split(area);

        let boxed = VerdictBox::new(title)
            .content(content)
            .border_color(color);
        frame.render_widget(boxed, centered_rect(70, vertical[1]));
    }

    fn render_help_overlay(&self, frame: &mut Frame) {
        let area = centered_rect(70, frame.area());
        frame.render_widget(Clear, area);
        let help = Paragraph::new(HELP_TEXT)
            .style(Style::default().fg(self.theme.fg))
            .alignment(Alignment::Center);
        frame.render_widget(help, area);
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

/// Center a rect horizontally at `percent` of the width
fn centered_rect(percent: u16, area: Rect) -> Rect {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent) / 2),
            Constraint::Percentage(percent),
            Constraint::Percentage((100 - percent) / 2),
        ])
        .split(area);
    chunks[1]
}

/// Shrink a rect by one cell on each side
fn inner(area: Rect) -> Rect {
    Rect {
        x: area.x + 1,
        y: area.y,
        width: area.width.saturating_sub(2),
        height: area.height,
    }
}
