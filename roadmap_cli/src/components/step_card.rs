/// Numbered roadmap step rendered as a card with an accent left border
use super::theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

/// Rows a card needs: top border, title, body, bottom border
pub const CARD_HEIGHT: u16 = 5;

pub struct StepCard<'a> {
    number: usize,
    text: &'a str,
    high_contrast: bool,
}

impl<'a> StepCard<'a> {
    /// `number` is 1-based, as shown to the user
    pub fn new(number: usize, text: &'a str) -> Self {
        Self {
            number,
            text,
            high_contrast: false,
        }
    }

    pub fn high_contrast(mut self, enabled: bool) -> Self {
        self.high_contrast = enabled;
        self
    }
}

impl<'a> Widget for StepCard<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let accent = theme::accent(self.high_contrast);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme::border_style(self.high_contrast));
        let inner = block.inner(area);
        Widget::render(block, area, buf);

        // Accent stripe over the left border
        for y in area.top()..area.bottom() {
            if let Some(cell) = buf.cell_mut((area.left(), y)) {
                cell.set_char('▌').set_fg(accent);
            }
        }

        let body_color = if self.high_contrast {
            Color::White
        } else {
            Color::Gray
        };

        let text = vec![
            Line::from(Span::styled(
                format!("Step {}", self.number),
                Style::default().fg(accent).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(self.text, Style::default().fg(body_color))),
        ];

        let paragraph = Paragraph::new(text).wrap(Wrap { trim: true });
        Widget::render(paragraph, inner, buf);
    }
}
