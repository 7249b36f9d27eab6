/// Shared colors for the roadmap TUI
use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
};

/// Teal #2DD4BF, or plain white in high-contrast mode
pub fn accent(high_contrast: bool) -> Color {
    if high_contrast {
        Color::White
    } else {
        Color::Rgb(45, 212, 191)
    }
}

pub fn border_style(high_contrast: bool) -> Style {
    if high_contrast {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

pub fn title_span<'a>(text: impl Into<String>, high_contrast: bool) -> Span<'a> {
    Span::styled(
        format!(" {} ", text.into()),
        Style::default()
            .fg(accent(high_contrast))
            .add_modifier(Modifier::BOLD),
    )
}

pub fn dim() -> Style {
    Style::default().add_modifier(Modifier::DIM)
}

/// "[key] label" pairs for footers
pub fn key_hints<'a>(hints: &[(&'a str, &'a str)]) -> Vec<Span<'a>> {
    hints
        .iter()
        .flat_map(|(key, label)| {
            [
                Span::styled(format!("[{}] ", key), dim()),
                Span::raw(format!("{}  ", label)),
            ]
        })
        .collect()
}
