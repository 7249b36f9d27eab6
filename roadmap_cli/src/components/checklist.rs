/// Checklist component: cursor over a list of items that can be ticked off
use super::theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChecklistState {
    pub cursor: usize,
    pub len: usize,
}

impl ChecklistState {
    pub fn new(len: usize) -> Self {
        Self { cursor: 0, len }
    }

    pub fn move_down(&mut self) {
        if self.len > 0 && self.cursor < self.len - 1 {
            self.cursor += 1;
        }
    }

    pub fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Adjust to a new item count, keeping the cursor in range
    pub fn resize(&mut self, len: usize) {
        self.len = len;
        if self.cursor >= len {
            self.cursor = len.saturating_sub(1);
        }
    }
}

pub struct Checklist<'a> {
    title: &'a str,
    items: &'a [String],
    done: Vec<bool>,
    state: &'a ChecklistState,
    high_contrast: bool,
}

impl<'a> Checklist<'a> {
    /// `done[i]` marks whether `items[i]` is ticked
    pub fn new(title: &'a str, items: &'a [String], done: Vec<bool>, state: &'a ChecklistState) -> Self {
        Self {
            title,
            items,
            done,
            state,
            high_contrast: false,
        }
    }

    pub fn high_contrast(mut self, enabled: bool) -> Self {
        self.high_contrast = enabled;
        self
    }
}

impl<'a> Widget for Checklist<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let accent = theme::accent(self.high_contrast);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme::border_style(self.high_contrast))
            .title(theme::title_span(self.title, self.high_contrast));
        let inner = block.inner(area);
        Widget::render(block, area, buf);

        if self.items.is_empty() {
            let empty = Paragraph::new(Line::from(Span::styled(
                "No steps for this level",
                theme::dim(),
            )));
            Widget::render(empty, inner, buf);
            return;
        }

        let lines: Vec<Line> = self
            .items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                let done = self.done.get(i).copied().unwrap_or(false);
                let checkbox = if done { "[x]" } else { "[ ]" };
                let mut style = if done {
                    Style::default().fg(Color::Green)
                } else {
                    Style::default().fg(Color::White)
                };
                if i == self.state.cursor {
                    style = style
                        .fg(accent)
                        .bg(Color::DarkGray)
                        .add_modifier(Modifier::BOLD);
                }
                Line::from(vec![
                    Span::styled(format!(" {} ", checkbox), style),
                    Span::styled(format!("Step {}: {}", i + 1, item), style),
                ])
            })
            .collect();

        // Keep the cursor row visible
        let height = inner.height as usize;
        let offset = if height > 0 && self.state.cursor >= height {
            self.state.cursor + 1 - height
        } else {
            0
        };

        let paragraph = Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((offset as u16, 0));
        Widget::render(paragraph, inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_checklist() {
        let state = ChecklistState::new(3);
        assert_eq!(state.cursor, 0);
        assert_eq!(state.len, 3);
    }

    #[test]
    fn test_cursor_is_clamped() {
        let mut state = ChecklistState::new(2);
        state.move_up();
        assert_eq!(state.cursor, 0);

        state.move_down();
        state.move_down();
        assert_eq!(state.cursor, 1);
    }

    #[test]
    fn test_empty_checklist_does_not_move() {
        let mut state = ChecklistState::new(0);
        state.move_down();
        assert_eq!(state.cursor, 0);
    }

    #[test]
    fn test_resize_pulls_cursor_back() {
        let mut state = ChecklistState::new(5);
        state.cursor = 4;
        state.resize(2);
        assert_eq!(state.cursor, 1);

        state.resize(0);
        assert_eq!(state.cursor, 0);
    }
}
