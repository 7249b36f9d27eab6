/// Matches screen - top career cards and level selector
use crate::components::theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};
use roadmap_core::{CareerMatch, CareerProfile, Level};

/// What a card shows for one matched career
#[derive(Debug, Clone, PartialEq)]
pub struct MatchCard {
    pub career: String,
    pub score: f32,
    pub key_skills: String,
    pub focus_areas: String,
}

impl MatchCard {
    pub fn new(m: &CareerMatch, profile: &CareerProfile) -> Self {
        Self {
            career: m.career.clone(),
            score: m.score,
            key_skills: profile.key_skills().join(", "),
            focus_areas: profile.focus_areas().join(", "),
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchesState {
    pub cards: Vec<MatchCard>,
    pub selected: usize,
    pub level: Level,
    /// Level detected from skill overlap for the selected card
    pub default_level: Level,
    pub high_contrast: bool,
}

impl MatchesState {
    pub fn new(cards: Vec<MatchCard>, default_level: Level) -> Self {
        Self {
            cards,
            selected: 0,
            level: default_level,
            default_level,
            high_contrast: false,
        }
    }

    pub fn move_down(&mut self) {
        if !self.cards.is_empty() && self.selected < self.cards.len() - 1 {
            self.selected += 1;
        }
    }

    pub fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn selected_card(&self) -> Option<&MatchCard> {
        self.cards.get(self.selected)
    }

    /// Called when the selected career changes
    pub fn reset_level(&mut self, default_level: Level) {
        self.default_level = default_level;
        self.level = default_level;
    }
}

pub struct MatchesScreen<'a> {
    state: &'a MatchesState,
}

impl<'a> MatchesScreen<'a> {
    pub fn new(state: &'a MatchesState) -> Self {
        Self { state }
    }
}

impl<'a> Widget for MatchesScreen<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Min(8),
                Constraint::Length(5),
                Constraint::Length(2),
            ])
            .split(area);

        self.render_header(chunks[0], buf);
        self.render_cards(chunks[1], buf);
        self.render_level_selector(chunks[2], buf);
        self.render_footer(chunks[3], buf);
    }
}

impl<'a> MatchesScreen<'a> {
    fn render_header(&self, area: Rect, buf: &mut Buffer) {
        let accent = theme::accent(self.state.high_contrast);
        let header = Paragraph::new(Line::from(Span::styled(
            "Top Career Matches For You",
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        )));
        Widget::render(header, area, buf);
    }

    fn render_cards(&self, area: Rect, buf: &mut Buffer) {
        if self.state.cards.is_empty() {
            let empty = Paragraph::new("No matching careers. Press [e] to edit your input.")
                .style(theme::dim());
            Widget::render(empty, area, buf);
            return;
        }

        let count = self.state.cards.len() as u32;
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(
                (0..count)
                    .map(|_| Constraint::Ratio(1, count))
                    .collect::<Vec<_>>(),
            )
            .split(area);

        for (idx, card) in self.state.cards.iter().enumerate() {
            self.render_card(card, idx == self.state.selected, columns[idx], buf);
        }
    }

    fn render_card(&self, card: &MatchCard, selected: bool, area: Rect, buf: &mut Buffer) {
        let hc = self.state.high_contrast;
        let accent = theme::accent(hc);

        let border_style = if selected {
            Style::default().fg(accent).add_modifier(Modifier::BOLD)
        } else {
            theme::border_style(hc)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(theme::title_span(&card.career, hc));
        let inner = block.inner(area);
        Widget::render(block, area, buf);

        let marker = if selected { "▶ " } else { "  " };
        let text = vec![
            Line::from(vec![
                Span::styled(marker, Style::default().fg(accent)),
                Span::styled(
                    card.career.as_str(),
                    Style::default().fg(accent).add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(vec![
                Span::styled("Match: ", theme::dim()),
                Span::raw(format!("{:.0}%", card.score * 100.0)),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Key Skills: ", Style::default().add_modifier(Modifier::BOLD)),
                Span::styled(card.key_skills.as_str(), theme::dim()),
            ]),
            Line::from(vec![
                Span::styled("Focus Areas: ", Style::default().add_modifier(Modifier::BOLD)),
                Span::styled(card.focus_areas.as_str(), theme::dim()),
            ]),
        ];

        let paragraph = Paragraph::new(text).wrap(Wrap { trim: true });
        Widget::render(paragraph, inner, buf);
    }

    fn render_level_selector(&self, area: Rect, buf: &mut Buffer) {
        let hc = self.state.high_contrast;
        let accent = theme::accent(hc);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme::border_style(hc))
            .title(theme::title_span("Select your current level", hc));
        let inner = block.inner(area);
        Widget::render(block, area, buf);

        let mut spans = Vec::new();
        for level in Level::ALL {
            let chosen = level == self.state.level;
            let radio = if chosen { "(•)" } else { "( )" };
            let style = if chosen {
                Style::default().fg(accent).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            spans.push(Span::styled(format!(" {} {} ", radio, level.label()), style));
        }

        let text = vec![
            Line::from(spans),
            Line::from(Span::styled(
                format!("Detected from your skills: {}", self.state.default_level),
                theme::dim(),
            )),
        ];
        Widget::render(Paragraph::new(text), inner, buf);
    }

    fn render_footer(&self, area: Rect, buf: &mut Buffer) {
        let line = Line::from(theme::key_hints(&[
            ("j/k", "Career"),
            ("h/l", "Level"),
            ("Enter", "Generate My Roadmap"),
            ("e", "Edit input"),
            ("?", "Help"),
            ("q", "Quit"),
        ]));
        Widget::render(Paragraph::new(line), area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cards() -> Vec<MatchCard> {
        ["Data Scientist", "Data Analyst", "ML Engineer"]
            .iter()
            .map(|name| MatchCard {
                career: name.to_string(),
                score: 0.5,
                key_skills: "Python".to_string(),
                focus_areas: "AI".to_string(),
            })
            .collect()
    }

    #[test]
    fn test_selection_is_clamped() {
        let mut state = MatchesState::new(cards(), Level::Beginner);
        state.move_up();
        assert_eq!(state.selected, 0);

        state.move_down();
        state.move_down();
        state.move_down();
        assert_eq!(state.selected, 2);
        assert_eq!(state.selected_card().unwrap().career, "ML Engineer");
    }

    #[test]
    fn test_reset_level_overrides_manual_choice() {
        let mut state = MatchesState::new(cards(), Level::Beginner);
        state.level = Level::Advanced;
        state.reset_level(Level::Intermediate);
        assert_eq!(state.level, Level::Intermediate);
        assert_eq!(state.default_level, Level::Intermediate);
    }

    #[test]
    fn test_card_from_profile_truncates_summaries() {
        let profile = CareerProfile {
            career: "Data Analyst".to_string(),
            required_skills: ["SQL", "Excel", "Tableau", "Power BI", "Statistics", "pandas"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            interest_tags: ["analytics", "business", "data", "reporting"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            ..Default::default()
        };
        let m = CareerMatch {
            index: 1,
            career: "Data Analyst".to_string(),
            score: 0.37,
        };

        let card = MatchCard::new(&m, &profile);
        assert_eq!(card.key_skills, "SQL, Excel, Tableau, Power BI, Statistics");
        assert_eq!(card.focus_areas, "analytics, business, data");
    }
}
