/// Roadmap screen - numbered step cards in two columns plus resources
use crate::components::{theme, StepCard, CARD_HEIGHT};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};
use roadmap_core::{CareerProfile, Level};

const COLUMNS: usize = 2;

#[derive(Debug, Clone)]
pub struct RoadmapState {
    pub career: String,
    pub level: Level,
    pub steps: Vec<String>,
    pub resources: Vec<String>,
    /// First visible row of step cards
    pub scroll_offset: usize,
    pub high_contrast: bool,
}

impl RoadmapState {
    pub fn new(profile: &CareerProfile, level: Level) -> Self {
        Self {
            career: profile.career.clone(),
            level,
            steps: profile.steps(level).to_vec(),
            resources: profile.resources.clone(),
            scroll_offset: 0,
            high_contrast: false,
        }
    }

    pub fn title(&self) -> String {
        format!("Personalized Roadmap for {} ({})", self.career, self.level)
    }

    /// Rows of step cards, two per row
    pub fn row_count(&self) -> usize {
        self.steps.len().div_ceil(COLUMNS)
    }

    pub fn scroll_down(&mut self) {
        if self.scroll_offset + 1 < self.row_count() {
            self.scroll_offset += 1;
        }
    }

    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }
}

pub struct RoadmapScreen<'a> {
    state: &'a RoadmapState,
}

impl<'a> RoadmapScreen<'a> {
    pub fn new(state: &'a RoadmapState) -> Self {
        Self { state }
    }
}

impl<'a> Widget for RoadmapScreen<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let resources_height = (self.state.resources.len() as u16).saturating_add(2).min(10);
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Min(CARD_HEIGHT),
                Constraint::Length(resources_height),
                Constraint::Length(2),
            ])
            .split(area);

        self.render_header(chunks[0], buf);
        self.render_steps(chunks[1], buf);
        self.render_resources(chunks[2], buf);
        self.render_footer(chunks[3], buf);
    }
}

impl<'a> RoadmapScreen<'a> {
    fn render_header(&self, area: Rect, buf: &mut Buffer) {
        let accent = theme::accent(self.state.high_contrast);
        let header = Paragraph::new(Line::from(Span::styled(
            self.state.title(),
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        )));
        Widget::render(header, area, buf);
    }

    fn render_steps(&self, area: Rect, buf: &mut Buffer) {
        if self.state.steps.is_empty() {
            let empty = Paragraph::new(format!("No {} steps for this career.", self.state.level))
                .style(theme::dim());
            Widget::render(empty, area, buf);
            return;
        }

        let visible_rows = (area.height / CARD_HEIGHT).max(1) as usize;
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);

        let first = self.state.scroll_offset * COLUMNS;
        let last = (first + visible_rows * COLUMNS).min(self.state.steps.len());

        for i in first..last {
            let row = ((i - first) / COLUMNS) as u16;
            let column = columns[i % COLUMNS];
            let card_area = Rect::new(
                column.x,
                column.y + row * CARD_HEIGHT,
                column.width,
                CARD_HEIGHT.min(column.bottom().saturating_sub(column.y + row * CARD_HEIGHT)),
            );
            if card_area.height == 0 {
                continue;
            }
            StepCard::new(i + 1, &self.state.steps[i])
                .high_contrast(self.state.high_contrast)
                .render(card_area, buf);
        }
    }

    fn render_resources(&self, area: Rect, buf: &mut Buffer) {
        let hc = self.state.high_contrast;
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme::border_style(hc))
            .title(theme::title_span("Recommended Resources", hc));
        let inner = block.inner(area);
        Widget::render(block, area, buf);

        let lines: Vec<Line> = self
            .state
            .resources
            .iter()
            .map(|r| {
                Line::from(vec![
                    Span::styled("→ ", Style::default().fg(theme::accent(hc))),
                    Span::styled(r.as_str(), Style::default().fg(Color::White)),
                ])
            })
            .collect();

        Widget::render(Paragraph::new(lines).wrap(Wrap { trim: true }), inner, buf);
    }

    fn render_footer(&self, area: Rect, buf: &mut Buffer) {
        let line = Line::from(theme::key_hints(&[
            ("j/k", "Scroll"),
            ("s", "Save roadmap"),
            ("p", "Progress tracker"),
            ("Esc", "Back"),
            ("q", "Quit"),
        ]));
        Widget::render(Paragraph::new(line), area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn profile(steps: usize) -> CareerProfile {
        let mut roadmap = BTreeMap::new();
        roadmap.insert(
            "Beginner".to_string(),
            (1..=steps).map(|i| format!("Task {}", i)).collect(),
        );
        CareerProfile {
            career: "Web Developer".to_string(),
            roadmap,
            resources: vec!["https://developer.mozilla.org".to_string()],
            ..Default::default()
        }
    }

    #[test]
    fn test_title_names_career_and_level() {
        let state = RoadmapState::new(&profile(3), Level::Beginner);
        assert_eq!(state.title(), "Personalized Roadmap for Web Developer (Beginner)");
    }

    #[test]
    fn test_rows_and_scrolling() {
        let mut state = RoadmapState::new(&profile(5), Level::Beginner);
        assert_eq!(state.row_count(), 3);

        state.scroll_down();
        state.scroll_down();
        state.scroll_down();
        assert_eq!(state.scroll_offset, 2);

        state.scroll_up();
        assert_eq!(state.scroll_offset, 1);
    }

    #[test]
    fn test_missing_level_has_no_steps() {
        let mut state = RoadmapState::new(&profile(3), Level::Advanced);
        assert!(state.steps.is_empty());
        assert_eq!(state.row_count(), 0);
        state.scroll_down();
        assert_eq!(state.scroll_offset, 0);
    }
}
