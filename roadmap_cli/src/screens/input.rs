/// Input screen - skills and interests entry
use crate::components::{theme, TextField, TextFieldState};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

pub const DEFAULT_SKILLS: &str = "Python, SQL, pandas";
pub const DEFAULT_INTERESTS: &str = "AI, analytics, data science";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputField {
    Skills,
    Interests,
}

#[derive(Debug, Clone)]
pub struct InputState {
    pub skills: TextFieldState,
    pub interests: TextFieldState,
    pub focus: InputField,
    pub high_contrast: bool,
}

impl Default for InputState {
    fn default() -> Self {
        Self::new(DEFAULT_SKILLS, DEFAULT_INTERESTS)
    }
}

impl InputState {
    pub fn new(skills: &str, interests: &str) -> Self {
        Self {
            skills: TextFieldState::new(skills),
            interests: TextFieldState::new(interests),
            focus: InputField::Skills,
            high_contrast: false,
        }
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            InputField::Skills => InputField::Interests,
            InputField::Interests => InputField::Skills,
        };
    }

    pub fn focused_mut(&mut self) -> &mut TextFieldState {
        match self.focus {
            InputField::Skills => &mut self.skills,
            InputField::Interests => &mut self.interests,
        }
    }
}

pub struct InputScreen<'a> {
    state: &'a InputState,
    status: &'a str,
}

impl<'a> InputScreen<'a> {
    pub fn new(state: &'a InputState, status: &'a str) -> Self {
        Self { state, status }
    }
}

impl<'a> Widget for InputScreen<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(2),
            ])
            .split(area);

        self.render_header(chunks[0], buf);

        let hc = self.state.high_contrast;
        TextField::new("Enter your skills (comma-separated)", &self.state.skills)
            .focused(self.state.focus == InputField::Skills)
            .high_contrast(hc)
            .render(chunks[1], buf);
        TextField::new("Enter your interests (comma-separated)", &self.state.interests)
            .focused(self.state.focus == InputField::Interests)
            .high_contrast(hc)
            .render(chunks[2], buf);

        self.render_footer(chunks[4], buf);
    }
}

impl<'a> InputScreen<'a> {
    fn render_header(&self, area: Rect, buf: &mut Buffer) {
        let accent = theme::accent(self.state.high_contrast);
        let text = vec![
            Line::from(Span::styled(
                "AI Career Roadmap Generator",
                Style::default().fg(accent).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(vec![
                Span::raw("Enter your "),
                Span::styled("skills", Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(" and "),
                Span::styled("interests", Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(" to discover your ideal career path and personalized roadmap."),
            ]),
        ];
        Paragraph::new(text)
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }

    fn render_footer(&self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![
            Span::styled("Status: ", theme::dim()),
            Span::styled(
                self.status,
                Style::default().fg(theme::accent(self.state.high_contrast)),
            ),
            Span::raw("  "),
        ];
        spans.extend(theme::key_hints(&[
            ("Tab", "Switch field"),
            ("Enter", "Generate Career Matches"),
            ("Esc", "Back/Quit"),
        ]));
        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
