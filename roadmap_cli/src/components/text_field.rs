/// Single-line text input with a label
use super::theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextFieldState {
    pub value: String,
}

impl TextFieldState {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    pub fn push(&mut self, c: char) {
        self.value.push(c);
    }

    pub fn backspace(&mut self) {
        self.value.pop();
    }
}

pub struct TextField<'a> {
    label: &'a str,
    state: &'a TextFieldState,
    focused: bool,
    high_contrast: bool,
}

impl<'a> TextField<'a> {
    pub fn new(label: &'a str, state: &'a TextFieldState) -> Self {
        Self {
            label,
            state,
            focused: false,
            high_contrast: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn high_contrast(mut self, enabled: bool) -> Self {
        self.high_contrast = enabled;
        self
    }
}

impl<'a> Widget for TextField<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let accent = theme::accent(self.high_contrast);
        let border_style = if self.focused {
            Style::default().fg(accent)
        } else {
            theme::border_style(self.high_contrast)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(Span::styled(
                format!(" {} ", self.label),
                Style::default().fg(accent).add_modifier(Modifier::BOLD),
            ));
        let inner = block.inner(area);
        Widget::render(block, area, buf);

        let mut spans = vec![Span::styled(
            self.state.value.as_str(),
            Style::default().fg(Color::White),
        )];
        if self.focused {
            spans.push(Span::styled("█", Style::default().fg(accent)));
        }

        Widget::render(Paragraph::new(Line::from(spans)), inner, buf);
    }
}
