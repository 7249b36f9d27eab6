/// Top-level TUI event loop and input handler
use crate::components::{theme, ChecklistState};
use crate::keymap::KeyMap;
use crate::screens::{
    InputScreen, InputState, MatchCard, MatchesScreen, MatchesState, RoadmapScreen, RoadmapState,
    TrackerScreen,
};
use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame, Terminal,
};
use roadmap_core::{load_catalog, Level, Recommender, Session};
use std::io;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Input,
    Matches,
    Roadmap,
    Tracker,
    Help,
}

#[derive(Debug, Clone)]
struct Modal {
    title: String,
    message: String,
}

impl Modal {
    fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }
}

pub struct AppState {
    screen: Screen,
    help_return: Screen,
    recommender: Recommender,
    session: Session,
    input: InputState,
    matches: Option<MatchesState>,
    roadmap: Option<RoadmapState>,
    checklist: ChecklistState,
    modal_stack: Vec<Modal>,
    high_contrast: bool,
    last_action: String,
    should_quit: bool,
}

impl AppState {
    pub fn new(recommender: Recommender, skills: &str, interests: &str) -> Self {
        Self {
            screen: Screen::Input,
            help_return: Screen::Input,
            recommender,
            session: Session::new(),
            input: InputState::new(skills, interests),
            matches: None,
            roadmap: None,
            checklist: ChecklistState::default(),
            modal_stack: Vec::new(),
            high_contrast: false,
            last_action: "Ready".to_string(),
            should_quit: false,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn last_action(&self) -> &str {
        &self.last_action
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    pub fn matches(&self) -> Option<&MatchesState> {
        self.matches.as_ref()
    }

    pub fn roadmap(&self) -> Option<&RoadmapState> {
        self.roadmap.as_ref()
    }

    pub fn has_modal(&self) -> bool {
        !self.modal_stack.is_empty()
    }

    fn set_last_action(&mut self, action: impl Into<String>) {
        self.last_action = action.into();
    }

    fn push_modal(&mut self, modal: Modal) {
        self.modal_stack.push(modal);
    }

    fn pop_modal(&mut self) {
        self.modal_stack.pop();
    }

    fn current_modal(&self) -> Option<&Modal> {
        self.modal_stack.last()
    }

    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        if KeyMap::is_interrupt(code, modifiers) {
            self.should_quit = true;
            return;
        }

        // Any key dismisses a modal; [p] also jumps to the tracker
        if self.current_modal().is_some() {
            self.pop_modal();
            if KeyMap::is_tracker(code) {
                self.open_tracker();
            }
            return;
        }

        // Text entry owns every other key
        if self.screen == Screen::Input {
            self.handle_input_key(code);
            return;
        }

        if KeyMap::is_quit(code, modifiers) {
            self.should_quit = true;
            return;
        }

        if KeyMap::is_help(code) {
            if self.screen == Screen::Help {
                self.screen = self.help_return;
            } else {
                self.help_return = self.screen;
                self.screen = Screen::Help;
            }
            return;
        }

        if KeyMap::is_toggle_theme(code) {
            self.toggle_theme();
            return;
        }

        match self.screen {
            Screen::Input => {}
            Screen::Matches => self.handle_matches_key(code),
            Screen::Roadmap => self.handle_roadmap_key(code),
            Screen::Tracker => self.handle_tracker_key(code),
            Screen::Help => {
                // Any key closes help
                self.screen = self.help_return;
            }
        }
    }

    fn handle_input_key(&mut self, code: KeyCode) {
        if KeyMap::is_back(code) {
            if self.matches.is_some() {
                self.screen = Screen::Matches;
            } else {
                self.should_quit = true;
            }
        } else if KeyMap::is_switch_field(code) {
            self.input.toggle_focus();
        } else if KeyMap::is_confirm(code) {
            self.generate_matches();
        } else if matches!(code, KeyCode::Backspace) {
            self.input.focused_mut().backspace();
        } else if let KeyCode::Char(c) = code {
            self.input.focused_mut().push(c);
        }
    }

    fn handle_matches_key(&mut self, code: KeyCode) {
        if KeyMap::is_down(code) {
            if let Some(state) = self.matches.as_mut() {
                state.move_down();
            }
            self.sync_selected_career();
        } else if KeyMap::is_up(code) {
            if let Some(state) = self.matches.as_mut() {
                state.move_up();
            }
            self.sync_selected_career();
        } else if KeyMap::is_right(code) {
            let level = self.current_level().next();
            self.set_level(level);
        } else if KeyMap::is_left(code) {
            let level = self.current_level().prev();
            self.set_level(level);
        } else if let Some(idx) = KeyMap::level_shortcut(code) {
            self.set_level(Level::ALL[idx]);
        } else if KeyMap::is_confirm(code) {
            self.generate_roadmap();
        } else if KeyMap::is_edit(code) || KeyMap::is_back(code) {
            self.screen = Screen::Input;
        } else if KeyMap::is_tracker(code) {
            self.open_tracker();
        }
    }

    fn handle_roadmap_key(&mut self, code: KeyCode) {
        if KeyMap::is_down(code) {
            if let Some(state) = self.roadmap.as_mut() {
                state.scroll_down();
            }
        } else if KeyMap::is_up(code) {
            if let Some(state) = self.roadmap.as_mut() {
                state.scroll_up();
            }
        } else if KeyMap::is_save(code) {
            self.save_roadmap();
        } else if KeyMap::is_tracker(code) {
            self.open_tracker();
        } else if KeyMap::is_back(code) {
            self.screen = Screen::Matches;
        }
    }

    fn handle_tracker_key(&mut self, code: KeyCode) {
        if KeyMap::is_down(code) {
            self.checklist.move_down();
        } else if KeyMap::is_up(code) {
            self.checklist.move_up();
        } else if KeyMap::is_space(code) || KeyMap::is_confirm(code) {
            let cursor = self.checklist.cursor;
            match self.session.plan_mut() {
                Ok(plan) => {
                    plan.toggle(cursor);
                    let message = format!(
                        "Progress: {}/{} steps",
                        plan.completed_count(),
                        plan.tasks.len()
                    );
                    self.set_last_action(message);
                }
                Err(e) => self.set_last_action(e.to_string()),
            }
        } else if KeyMap::is_back(code) {
            self.screen = if self.roadmap.is_some() {
                Screen::Roadmap
            } else {
                Screen::Matches
            };
        }
    }

    fn generate_matches(&mut self) {
        self.session.generate(
            &self.recommender,
            &self.input.skills.value,
            &self.input.interests.value,
        );

        if !self.session.has_recommendations() {
            self.matches = None;
            self.roadmap = None;
            self.set_last_action("No matching careers found. Try different skills or interests.");
            return;
        }

        let catalog = self.recommender.catalog();
        let cards: Vec<MatchCard> = self
            .session
            .recommendations
            .iter()
            .filter_map(|m| catalog.get(m.index).map(|p| MatchCard::new(m, p)))
            .collect();

        let default_level = self.session.default_level().unwrap_or(Level::Beginner);
        let mut state = MatchesState::new(cards, default_level);
        state.high_contrast = self.high_contrast;

        let count = state.cards.len();
        self.matches = Some(state);
        self.roadmap = None;
        self.screen = Screen::Matches;
        self.set_last_action(format!("Found {} career matches", count));
    }

    fn sync_selected_career(&mut self) {
        let Some(career) = self
            .matches
            .as_ref()
            .and_then(|m| m.selected_card())
            .map(|c| c.career.clone())
        else {
            return;
        };

        match self.session.select_career(&self.recommender, &career) {
            Ok(level) => {
                if let Some(state) = self.matches.as_mut() {
                    state.reset_level(level);
                }
                // Shown roadmap no longer matches the selection
                self.roadmap = None;
            }
            Err(e) => self.set_last_action(e.to_string()),
        }
    }

    fn current_level(&self) -> Level {
        self.session.selected_level().unwrap_or(Level::Beginner)
    }

    fn set_level(&mut self, level: Level) {
        self.session.select_level(level);
        if let Some(state) = self.matches.as_mut() {
            state.level = level;
        }
        self.roadmap = None;
    }

    fn generate_roadmap(&mut self) {
        let Some(profile) = self.session.selected_profile(&self.recommender) else {
            self.set_last_action("Select a career first");
            return;
        };
        let level = self.current_level();

        let mut state = RoadmapState::new(profile, level);
        state.high_contrast = self.high_contrast;
        let title = state.title();

        self.roadmap = Some(state);
        self.screen = Screen::Roadmap;
        self.set_last_action(title);
    }

    fn save_roadmap(&mut self) {
        let saved = self
            .session
            .save_plan(&self.recommender)
            .map(|plan| plan.tasks.len());

        match saved {
            Ok(task_count) => {
                log::debug!("[TUI] Saved plan with {} tasks", task_count);
                self.checklist = ChecklistState::new(task_count);
                self.set_last_action("Career and roadmap saved successfully!");
                self.push_modal(Modal::new(
                    "Saved",
                    "Career and roadmap saved successfully!\n\nYou can now track your progress step-by-step.\n\n[p] Go to Learning Progress Tracker  [any key] Close",
                ));
            }
            Err(e) => self.set_last_action(e.to_string()),
        }
    }

    fn open_tracker(&mut self) {
        match self.session.plan() {
            Some(plan) => {
                self.checklist.resize(plan.tasks.len());
                self.screen = Screen::Tracker;
            }
            None => self.set_last_action("Save a roadmap first (press 's')"),
        }
    }

    fn toggle_theme(&mut self) {
        self.high_contrast = !self.high_contrast;
        self.input.high_contrast = self.high_contrast;
        if let Some(state) = self.matches.as_mut() {
            state.high_contrast = self.high_contrast;
        }
        if let Some(state) = self.roadmap.as_mut() {
            state.high_contrast = self.high_contrast;
        }
    }

    pub fn render(&self, f: &mut Frame) {
        let size = f.area();

        if self.screen == Screen::Input {
            f.render_widget(InputScreen::new(&self.input, &self.last_action), size);
        } else {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(0), Constraint::Length(1)])
                .split(size);

            match self.screen {
                Screen::Input => {}
                Screen::Matches => {
                    if let Some(ref state) = self.matches {
                        f.render_widget(MatchesScreen::new(state), chunks[0]);
                    }
                }
                Screen::Roadmap => {
                    if let Some(ref state) = self.roadmap {
                        f.render_widget(RoadmapScreen::new(state), chunks[0]);
                    }
                }
                Screen::Tracker => {
                    if let Some(plan) = self.session.plan() {
                        let tracker = TrackerScreen::new(plan, &self.checklist)
                            .high_contrast(self.high_contrast);
                        f.render_widget(tracker, chunks[0]);
                    }
                }
                Screen::Help => render_help(f, chunks[0], self.high_contrast),
            }

            render_status_bar(f, chunks[1], &self.last_action, self.high_contrast);
        }

        if let Some(modal) = self.current_modal() {
            render_modal(f, size, &modal.title, &modal.message, self.high_contrast);
        }
    }
}

pub fn run_tui(catalog_path: &str, skills: &str, interests: &str) -> Result<()> {
    // Load before touching the terminal so errors print normally
    let catalog = load_catalog(catalog_path)
        .with_context(|| format!("Failed to load catalog from {}", catalog_path))?;
    log::info!("[TUI] Loaded {} careers from {}", catalog.len(), catalog_path);
    let mut app = AppState::new(Recommender::with_defaults(catalog), skills, interests);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn event_loop<B: Backend>(terminal: &mut Terminal<B>, app: &mut AppState) -> Result<()> {
    while !app.should_quit {
        terminal.draw(|f| app.render(f))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key.code, key.modifiers);
                }
            }
        }
    }
    Ok(())
}

fn render_help(f: &mut Frame, area: Rect, high_contrast: bool) {
    let accent = theme::accent(high_contrast);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::border_style(high_contrast))
        .title(theme::title_span("Help - Keybindings", high_contrast));

    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut lines = vec![
        Line::from(Span::styled(
            "AI Career Roadmap Generator",
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    for (key, desc) in KeyMap::help_text() {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {:10}", key),
                Style::default().fg(accent).add_modifier(Modifier::BOLD),
            ),
            Span::raw(desc),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press any key to close",
        theme::dim(),
    )));

    let paragraph = Paragraph::new(lines).alignment(Alignment::Left);
    f.render_widget(paragraph, inner);
}

fn render_modal(f: &mut Frame, area: Rect, title: &str, message: &str, high_contrast: bool) {
    let accent = theme::accent(high_contrast);

    // Center the modal
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(40),
            Constraint::Percentage(30),
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(60),
            Constraint::Percentage(20),
        ])
        .split(vertical[1]);

    let modal_area = horizontal[1];
    f.render_widget(Clear, modal_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent))
        .title(theme::title_span(title, high_contrast))
        .style(Style::default().bg(Color::Black));

    let inner = block.inner(modal_area);
    f.render_widget(block, modal_area);

    let text = Paragraph::new(message)
        .wrap(Wrap { trim: true })
        .alignment(Alignment::Left);
    f.render_widget(text, inner);
}

fn render_status_bar(f: &mut Frame, area: Rect, last_action: &str, high_contrast: bool) {
    let text = Line::from(vec![
        Span::styled(" Status: ", theme::dim()),
        Span::styled(last_action, Style::default().fg(theme::accent(high_contrast))),
    ]);

    let paragraph = Paragraph::new(text)
        .style(Style::default().bg(Color::Black))
        .alignment(Alignment::Left);
    f.render_widget(paragraph, area);
}
