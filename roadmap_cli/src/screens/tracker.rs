/// Learning progress tracker screen
use crate::components::{theme, Checklist, ChecklistState};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Widget},
};
use roadmap_core::LearningTracker;

pub struct TrackerScreen<'a> {
    tracker: &'a LearningTracker,
    checklist: &'a ChecklistState,
    high_contrast: bool,
}

impl<'a> TrackerScreen<'a> {
    pub fn new(tracker: &'a LearningTracker, checklist: &'a ChecklistState) -> Self {
        Self {
            tracker,
            checklist,
            high_contrast: false,
        }
    }

    pub fn high_contrast(mut self, enabled: bool) -> Self {
        self.high_contrast = enabled;
        self
    }
}

impl<'a> Widget for TrackerScreen<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(2),
            ])
            .split(area);

        self.render_header(chunks[0], buf);
        self.render_progress(chunks[1], buf);

        let done: Vec<bool> = (0..self.tracker.tasks.len())
            .map(|i| self.tracker.is_done(i))
            .collect();
        Checklist::new("Roadmap Steps", &self.tracker.tasks, done, self.checklist)
            .high_contrast(self.high_contrast)
            .render(chunks[2], buf);

        self.render_footer(chunks[3], buf);
    }
}

impl<'a> TrackerScreen<'a> {
    fn render_header(&self, area: Rect, buf: &mut Buffer) {
        let accent = theme::accent(self.high_contrast);
        let header = Paragraph::new(Line::from(vec![
            Span::styled(
                "Learning Progress Tracker",
                Style::default().fg(accent).add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!(
                "  {} ({})",
                self.tracker.career, self.tracker.level
            )),
        ]));
        Widget::render(header, area, buf);
    }

    fn render_progress(&self, area: Rect, buf: &mut Buffer) {
        let accent = theme::accent(self.high_contrast);
        let label = format!(
            "{}/{} steps done",
            self.tracker.completed_count(),
            self.tracker.tasks.len()
        );

        let gauge = Gauge::default()
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(theme::border_style(self.high_contrast)),
            )
            .gauge_style(Style::default().fg(accent).bg(Color::Black))
            .ratio(self.tracker.progress().clamp(0.0, 1.0))
            .label(label);
        Widget::render(gauge, area, buf);
    }

    fn render_footer(&self, area: Rect, buf: &mut Buffer) {
        let mut spans = theme::key_hints(&[
            ("j/k", "Move"),
            ("Space", "Toggle done"),
            ("Esc", "Back"),
        ]);
        if let Some((i, _)) = self.tracker.next_pending() {
            spans.push(Span::styled(format!("Next up: Step {}", i + 1), theme::dim()));
        } else if self.tracker.is_complete() {
            spans.push(Span::styled(
                "All steps complete!",
                Style::default().fg(Color::Green),
            ));
        }
        Widget::render(Paragraph::new(Line::from(spans)), area, buf);
    }
}
