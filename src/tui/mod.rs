// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Mnemo-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Mnemo and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Terminal UI.
//!
//! The interactive host shell (ratatui + crossterm): subject tabs, card
//! lists, the search sidebar, and the quiz overlay. Every user action is
//! turned into an intent and applied through `ops`; the screen is redrawn
//! from the resulting session state.

use std::error::Error;
use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Tabs, Wrap},
};

use rand::rngs::ThreadRng;

use crate::model::{fixtures, Session, SubjectScope};
use crate::ops::{apply_intent, Intent, Outcome, QuizOp, StoreOp, ViewOp};
use crate::query::search;

const HIGHLIGHT_BG: Color = Color::Yellow;
const HIGHLIGHT_FG: Color = Color::Black;
const SELECTION_COLOR: Color = Color::LightGreen;
const BACK_TEXT_COLOR: Color = Color::DarkGray;
const LATEX_TAG_COLOR: Color = Color::Cyan;
const TOAST_COLOR: Color = Color::LightBlue;
const FOOTER_HINT_COLOR: Color = Color::Gray;
const FOOTER_BRAND_COLOR: Color = Color::White;
const FOOTER_BRAND: &str = "🅼 🅽 🅴 🅼 🅾 ";

/// Runs the interactive terminal UI against a fresh session.
pub fn run() -> Result<Session, Box<dyn Error>> {
    run_with_session(Session::new())
}

/// Runs the interactive terminal UI and hands the final session back to the
/// caller on quit (so the host can export a snapshot of it).
pub fn run_with_session(session: Session) -> Result<Session, Box<dyn Error>> {
    let mut terminal = TerminalSession::new()?;
    let mut app = App::new(session);

    while !app.should_quit {
        terminal.draw(|frame| draw(frame, &mut app))?;

        if event::poll(Duration::from_millis(250))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    app.handle_key(key);
                }
                _ => {}
            }
        }
    }

    Ok(app.into_session())
}

/// A built-in session with a handful of formula cards.
pub fn demo_session() -> Session {
    Session::with_cards(fixtures::demo_store())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Browse,
    AddCard,
    AddSubject,
    Search,
    Quiz,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AddCardField {
    Front,
    Back,
}

struct App {
    session: Session,
    rng: ThreadRng,
    mode: Mode,
    tab_index: usize,
    card_index: usize,
    front_input: String,
    back_input: String,
    latex_input: bool,
    add_field: AddCardField,
    subject_input: String,
    search_input: String,
    search_selection: usize,
    toast: Option<String>,
    should_quit: bool,
}

impl App {
    fn new(session: Session) -> Self {
        Self {
            session,
            rng: rand::thread_rng(),
            mode: Mode::Browse,
            tab_index: 0,
            card_index: 0,
            front_input: String::new(),
            back_input: String::new(),
            latex_input: true,
            add_field: AddCardField::Front,
            subject_input: String::new(),
            search_input: String::new(),
            search_selection: 0,
            toast: None,
            should_quit: false,
        }
    }

    fn into_session(self) -> Session {
        self.session
    }

    fn displayed_subjects(&self) -> Vec<String> {
        self.session
            .view()
            .subjects_to_display(self.session.cards())
            .into_iter()
            .map(str::to_owned)
            .collect()
    }

    fn current_subject(&self) -> Option<String> {
        let subjects = self.displayed_subjects();
        if subjects.is_empty() {
            return None;
        }
        Some(subjects[self.tab_index.min(subjects.len() - 1)].clone())
    }

    fn clamp_indices(&mut self) {
        let subjects = self.displayed_subjects();
        self.tab_index = clamp_index(self.tab_index, subjects.len());
        let card_count = self
            .current_subject()
            .map(|subject| self.session.cards().count_cards(&subject))
            .unwrap_or(0);
        self.card_index = clamp_index(self.card_index, card_count);
    }

    /// Applies one intent and turns its result into a toast. Returns whether
    /// the intent was accepted.
    fn dispatch(&mut self, intent: Intent) -> bool {
        match apply_intent(&mut self.session, &intent, &mut self.rng) {
            Ok(outcome) => {
                self.toast = toast_for_outcome(&outcome);
                true
            }
            Err(err) => {
                self.toast = Some(err.to_string());
                false
            }
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        self.clamp_indices();
        match self.mode {
            Mode::Browse => self.handle_browse_key(key),
            Mode::AddCard => self.handle_add_card_key(key),
            Mode::AddSubject => self.handle_add_subject_key(key),
            Mode::Search => self.handle_search_key(key),
            Mode::Quiz => self.handle_quiz_key(key),
        }
    }

    fn handle_browse_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Left | KeyCode::BackTab => {
                self.tab_index = self.tab_index.saturating_sub(1);
                self.card_index = 0;
            }
            KeyCode::Right | KeyCode::Tab => {
                let count = self.displayed_subjects().len();
                if count > 0 && self.tab_index + 1 < count {
                    self.tab_index += 1;
                    self.card_index = 0;
                }
            }
            KeyCode::Up => self.card_index = self.card_index.saturating_sub(1),
            KeyCode::Down => {
                if let Some(subject) = self.current_subject() {
                    let count = self.session.cards().count_cards(&subject);
                    if count > 0 && self.card_index + 1 < count {
                        self.card_index += 1;
                    }
                }
            }
            KeyCode::Char('a') => {
                self.front_input.clear();
                self.back_input.clear();
                self.latex_input = true;
                self.add_field = AddCardField::Front;
                self.mode = Mode::AddCard;
            }
            KeyCode::Char('s') => {
                self.subject_input.clear();
                self.mode = Mode::AddSubject;
            }
            KeyCode::Char('/') => {
                self.search_input.clear();
                self.search_selection = 0;
                self.mode = Mode::Search;
            }
            KeyCode::Char('d') => {
                if let Some(subject) = self.current_subject() {
                    self.dispatch(Intent::Store(StoreOp::DeleteCard {
                        subject,
                        index: self.card_index,
                    }));
                }
            }
            KeyCode::Char('x') => {
                if let Some(subject) = self.current_subject() {
                    self.dispatch(Intent::Store(StoreOp::RemoveSubject { name: subject }));
                    self.tab_index = 0;
                    self.card_index = 0;
                }
            }
            KeyCode::Char('g') => {
                let scope = quiz_scope(self.current_subject().as_deref(), false);
                if self.dispatch(Intent::Quiz(QuizOp::Draw { scope })) {
                    self.mode = Mode::Quiz;
                }
            }
            KeyCode::Char('G') => {
                let scope = quiz_scope(self.current_subject().as_deref(), true);
                if self.dispatch(Intent::Quiz(QuizOp::Draw { scope })) {
                    self.mode = Mode::Quiz;
                }
            }
            KeyCode::Esc => {
                if self.session.view().active_subject().is_some() {
                    self.dispatch(Intent::View(ViewOp::ShowAllTabs));
                    self.tab_index = 0;
                } else {
                    self.toast = None;
                }
            }
            _ => {}
        }
    }

    fn handle_add_card_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('l') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.latex_input = !self.latex_input;
            return;
        }
        match key.code {
            KeyCode::Esc => self.mode = Mode::Browse,
            KeyCode::Tab | KeyCode::BackTab => {
                self.add_field = match self.add_field {
                    AddCardField::Front => AddCardField::Back,
                    AddCardField::Back => AddCardField::Front,
                };
            }
            KeyCode::Enter => {
                let Some(subject) = self.current_subject() else {
                    self.toast = Some("No subjects yet, add one first".to_owned());
                    return;
                };
                let intent = Intent::Store(StoreOp::AddCard {
                    subject,
                    front: self.front_input.clone(),
                    back: self.back_input.clone(),
                    latex: self.latex_input,
                });
                if self.dispatch(intent) {
                    self.mode = Mode::Browse;
                }
            }
            KeyCode::Backspace => {
                match self.add_field {
                    AddCardField::Front => self.front_input.pop(),
                    AddCardField::Back => self.back_input.pop(),
                };
            }
            KeyCode::Char(ch) => match self.add_field {
                AddCardField::Front => self.front_input.push(ch),
                AddCardField::Back => self.back_input.push(ch),
            },
            _ => {}
        }
    }

    fn handle_add_subject_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.mode = Mode::Browse,
            KeyCode::Enter => {
                let name = self.subject_input.clone();
                self.dispatch(Intent::Store(StoreOp::AddSubject { name }));
                self.mode = Mode::Browse;
            }
            KeyCode::Backspace => {
                self.subject_input.pop();
            }
            KeyCode::Char(ch) => self.subject_input.push(ch),
            _ => {}
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.mode = Mode::Browse,
            KeyCode::Up => self.search_selection = self.search_selection.saturating_sub(1),
            KeyCode::Down => self.search_selection = self.search_selection.saturating_add(1),
            KeyCode::Enter => {
                let target = self.selected_hit();
                if let Some((subject, front, index)) = target {
                    self.dispatch(Intent::View(ViewOp::JumpToCard { subject, front }));
                    // The display narrows to the focused subject.
                    self.tab_index = 0;
                    self.card_index = index;
                    self.mode = Mode::Browse;
                }
            }
            KeyCode::Backspace => {
                self.search_input.pop();
                self.search_selection = 0;
            }
            KeyCode::Char(ch) => {
                self.search_input.push(ch);
                self.search_selection = 0;
            }
            _ => {}
        }
    }

    fn handle_quiz_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.mode = Mode::Browse,
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('r') | KeyCode::Char(' ') => {
                self.dispatch(Intent::Quiz(QuizOp::Reveal));
            }
            KeyCode::Char('n') | KeyCode::Enter => {
                let scope = self.session.quiz().scope().clone();
                self.dispatch(Intent::Quiz(QuizOp::Next { scope }));
            }
            _ => {}
        }
    }

    /// The currently selected search hit as owned data, so the borrow of the
    /// store ends before the jump intent mutates the session.
    fn selected_hit(&mut self) -> Option<(String, String, usize)> {
        if self.search_input.is_empty() {
            return None;
        }
        let hits = search(self.session.cards(), &self.search_input, &SubjectScope::All)
            .collect::<Vec<_>>();
        if hits.is_empty() {
            return None;
        }
        let selection = self.search_selection.min(hits.len() - 1);
        self.search_selection = selection;
        let hit = &hits[selection];
        Some((hit.subject.to_owned(), hit.card.front().to_owned(), hit.index))
    }
}

fn clamp_index(index: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        index.min(len - 1)
    }
}

/// Quiz pool selection: the focused tab's subject, unless the host asks for
/// everything (or there is no tab to focus).
fn quiz_scope(current_subject: Option<&str>, all: bool) -> SubjectScope {
    match current_subject {
        Some(subject) if !all => SubjectScope::Subject(subject.to_owned()),
        _ => SubjectScope::All,
    }
}

fn toast_for_outcome(outcome: &Outcome) -> Option<String> {
    match outcome {
        Outcome::Noop => None,
        Outcome::SubjectAdded { name } => Some(format!("Added subject '{name}'")),
        Outcome::SubjectRemoved { name } => Some(format!("Removed subject '{name}'")),
        Outcome::CardStored { subject, front } => Some(format!("Saved '{front}' to '{subject}'")),
        Outcome::CardDeleted { subject, front } => {
            Some(format!("Deleted '{front}' from '{subject}'"))
        }
        Outcome::JumpedToCard { key } => Some(format!("Jumped to {key}")),
        Outcome::SubjectFocused { name } => Some(format!("Focused '{name}'")),
        Outcome::ViewReset => Some("Showing all subjects".to_owned()),
        Outcome::CardDrawn | Outcome::AnswerRevealed => None,
    }
}

fn tab_titles(session: &Session) -> Vec<String> {
    session
        .view()
        .subjects_to_display(session.cards())
        .into_iter()
        .map(|subject| format!("{subject} ({})", session.cards().count_cards(subject)))
        .collect()
}

fn footer_hints(mode: Mode) -> &'static str {
    match mode {
        Mode::Browse => {
            "q quit · ←/→ tabs · ↑/↓ cards · a add card · s add subject · d delete card · x delete subject · / search · g quiz tab · G quiz all · Esc show all"
        }
        Mode::AddCard => "Tab switch field · Ctrl-L toggle LaTeX · Enter save · Esc cancel",
        Mode::AddSubject => "Enter add · Esc cancel",
        Mode::Search => "type to search · ↑/↓ select · Enter jump · Esc close",
        Mode::Quiz => "r reveal · n next · Esc back",
    }
}

fn draw(frame: &mut Frame<'_>, app: &mut App) {
    app.clamp_indices();
    let area = frame.size();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0), Constraint::Length(1)])
        .split(area);
    let tabs_area = layout[0];
    let body_area = layout[1];
    let footer_area = layout[2];

    draw_tabs(frame, app, tabs_area);

    match app.mode {
        Mode::Search => {
            let panes = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
                .split(body_area);
            draw_cards(frame, app, panes[0]);
            draw_search(frame, app, panes[1]);
        }
        Mode::Quiz => draw_quiz(frame, app, body_area),
        Mode::AddCard => {
            let panes = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(0), Constraint::Length(5)])
                .split(body_area);
            draw_cards(frame, app, panes[0]);
            draw_add_card(frame, app, panes[1]);
        }
        Mode::AddSubject => {
            let panes = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(0), Constraint::Length(3)])
                .split(body_area);
            draw_cards(frame, app, panes[0]);
            draw_add_subject(frame, app, panes[1]);
        }
        Mode::Browse => draw_cards(frame, app, body_area),
    }

    draw_footer(frame, app, footer_area);
}

fn draw_tabs(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let titles = tab_titles(&app.session);
    if titles.is_empty() {
        let empty = Paragraph::new("No subjects, press 's' to add one")
            .style(Style::default().fg(BACK_TEXT_COLOR));
        frame.render_widget(empty, area);
        return;
    }

    let tabs = Tabs::new(titles)
        .select(app.tab_index)
        .highlight_style(
            Style::default()
                .fg(SELECTION_COLOR)
                .add_modifier(Modifier::BOLD),
        )
        .divider("|");
    frame.render_widget(tabs, area);
}

fn draw_cards(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let Some(subject) = app.current_subject() else {
        let empty = Paragraph::new("Nothing to show").style(Style::default().fg(BACK_TEXT_COLOR));
        frame.render_widget(empty, area);
        return;
    };

    let cards = app.session.cards().cards(&subject);
    let items = cards
        .iter()
        .enumerate()
        .map(|(index, card)| {
            let highlighted = app.session.view().is_highlighted(&subject, card.front());
            let front_style = if highlighted {
                Style::default().bg(HIGHLIGHT_BG).fg(HIGHLIGHT_FG)
            } else {
                Style::default()
            };

            let mut front_spans = vec![Span::styled(
                format!("{}. {}", index + 1, card.front()),
                front_style,
            )];
            if card.latex() {
                front_spans.push(Span::styled(" [TeX]", Style::default().fg(LATEX_TAG_COLOR)));
            }

            let back_line = Line::from(Span::styled(
                format!("   {}", card.back()),
                Style::default().fg(BACK_TEXT_COLOR),
            ));

            ListItem::new(Text::from(vec![Line::from(front_spans), back_line]))
        })
        .collect::<Vec<_>>();

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {subject} "));
    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    let mut state = ListState::default();
    if !cards.is_empty() {
        state.select(Some(app.card_index.min(cards.len() - 1)));
    }
    frame.render_stateful_widget(list, area, &mut state);
}

fn draw_search(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let input = Paragraph::new(format!("{}_", app.search_input))
        .block(Block::default().borders(Borders::ALL).title(" Search "));
    frame.render_widget(input, layout[0]);

    if app.search_input.is_empty() {
        let hint = Paragraph::new("Results appear here as you type")
            .style(Style::default().fg(BACK_TEXT_COLOR))
            .block(Block::default().borders(Borders::ALL).title(" Results "));
        frame.render_widget(hint, layout[1]);
        return;
    }

    let hits = search(app.session.cards(), &app.search_input, &SubjectScope::All)
        .collect::<Vec<_>>();

    if hits.is_empty() {
        let none = Paragraph::new("No matches")
            .style(Style::default().fg(BACK_TEXT_COLOR))
            .block(Block::default().borders(Borders::ALL).title(" Results "));
        frame.render_widget(none, layout[1]);
        return;
    }

    let items = hits
        .iter()
        .map(|hit| ListItem::new(format!("[{}] {}", hit.subject, hit.card.front())))
        .collect::<Vec<_>>();
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(" Results "))
        .highlight_style(
            Style::default()
                .fg(SELECTION_COLOR)
                .add_modifier(Modifier::BOLD),
        );

    let mut state = ListState::default();
    state.select(Some(app.search_selection.min(hits.len() - 1)));
    frame.render_stateful_widget(list, layout[1], &mut state);
}

fn draw_quiz(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let quiz = app.session.quiz();
    let mut lines = vec![
        Line::from(Span::styled(
            format!("Scope: {}", quiz.scope()),
            Style::default().fg(BACK_TEXT_COLOR),
        )),
        Line::from(""),
    ];

    match quiz.current_card() {
        Some(card) => {
            lines.push(Line::from(Span::styled(
                format!("Q: {}", card.front()),
                Style::default().add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(""));
            if quiz.answer_revealed() {
                let mut spans = vec![Span::raw(format!("A: {}", card.back()))];
                if card.latex() {
                    spans.push(Span::styled(" [TeX]", Style::default().fg(LATEX_TAG_COLOR)));
                }
                lines.push(Line::from(spans));
            } else {
                lines.push(Line::from(Span::styled(
                    "Press 'r' to reveal the answer",
                    Style::default().fg(BACK_TEXT_COLOR),
                )));
            }
        }
        None => lines.push(Line::from("No card drawn yet")),
    }

    let quiz_pane = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title(" Quiz "));
    frame.render_widget(quiz_pane, area);
}

fn draw_add_card(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let field_style = |field: AddCardField| {
        if app.add_field == field {
            Style::default().fg(SELECTION_COLOR)
        } else {
            Style::default()
        }
    };

    let latex_label = if app.latex_input { "on" } else { "off" };
    let lines = vec![
        Line::from(vec![
            Span::styled("Front: ", field_style(AddCardField::Front)),
            Span::raw(app.front_input.as_str()),
        ]),
        Line::from(vec![
            Span::styled("Back:  ", field_style(AddCardField::Back)),
            Span::raw(app.back_input.as_str()),
        ]),
        Line::from(Span::styled(
            format!("LaTeX: {latex_label}"),
            Style::default().fg(LATEX_TAG_COLOR),
        )),
    ];

    let pane = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" New card "));
    frame.render_widget(pane, area);
}

fn draw_add_subject(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let pane = Paragraph::new(format!("{}_", app.subject_input))
        .block(Block::default().borders(Borders::ALL).title(" New subject "));
    frame.render_widget(pane, area);
}

fn draw_footer(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let line = match app.toast.as_deref() {
        Some(toast) => Line::from(vec![
            Span::styled(FOOTER_BRAND, Style::default().fg(FOOTER_BRAND_COLOR)),
            Span::styled(toast.to_owned(), Style::default().fg(TOAST_COLOR)),
        ]),
        None => Line::from(vec![
            Span::styled(FOOTER_BRAND, Style::default().fg(FOOTER_BRAND_COLOR)),
            Span::styled(footer_hints(app.mode), Style::default().fg(FOOTER_HINT_COLOR)),
        ]),
    };
    frame.render_widget(Paragraph::new(line), area);
}

struct TerminalSession {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TerminalSession {
    fn new() -> Result<Self, Box<dyn Error>> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).map_err(|err| {
            teardown_terminal();
            err
        })?;

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).map_err(|err| {
            teardown_terminal();
            err
        })?;
        terminal.clear().map_err(|err| {
            teardown_terminal();
            err
        })?;

        Ok(Self { terminal })
    }

    fn draw(&mut self, draw_fn: impl FnOnce(&mut Frame<'_>)) -> io::Result<()> {
        self.terminal.draw(draw_fn)?;
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = self.terminal.show_cursor();
        teardown_terminal();
    }
}

fn teardown_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen);
}
