/// Centralized keybindings and help text for the roadmap TUI

use crossterm::event::{KeyCode, KeyModifiers};

pub struct KeyMap;

impl KeyMap {
    /// Get help text for all keybindings
    pub fn help_text() -> Vec<(&'static str, &'static str)> {
        vec![
            ("Tab", "Switch input field"),
            ("Enter", "Generate matches / roadmap"),
            ("j/↓", "Next career / scroll down"),
            ("k/↑", "Previous career / scroll up"),
            ("h/←", "Previous level"),
            ("l/→", "Next level"),
            ("1-3", "Pick Beginner/Intermediate/Advanced"),
            ("e", "Edit skills and interests"),
            ("s", "Save roadmap"),
            ("p", "Open progress tracker"),
            ("Space", "Toggle step done"),
            ("t", "Toggle high-contrast"),
            ("?", "Show help"),
            ("Esc", "Back"),
            ("q", "Quit"),
        ]
    }

    /// Check if key is quit
    pub fn is_quit(code: KeyCode, modifiers: KeyModifiers) -> bool {
        matches!(code, KeyCode::Char('q')) || Self::is_interrupt(code, modifiers)
    }

    /// Ctrl-C quits from every screen, including text entry
    pub fn is_interrupt(code: KeyCode, modifiers: KeyModifiers) -> bool {
        matches!(code, KeyCode::Char('c')) && modifiers.contains(KeyModifiers::CONTROL)
    }

    pub fn is_back(code: KeyCode) -> bool {
        matches!(code, KeyCode::Esc)
    }

    /// Check if key is help
    pub fn is_help(code: KeyCode) -> bool {
        matches!(code, KeyCode::Char('?'))
    }

    /// Check if key is down
    pub fn is_down(code: KeyCode) -> bool {
        matches!(code, KeyCode::Char('j') | KeyCode::Down)
    }

    /// Check if key is up
    pub fn is_up(code: KeyCode) -> bool {
        matches!(code, KeyCode::Char('k') | KeyCode::Up)
    }

    pub fn is_left(code: KeyCode) -> bool {
        matches!(code, KeyCode::Char('h') | KeyCode::Left)
    }

    pub fn is_right(code: KeyCode) -> bool {
        matches!(code, KeyCode::Char('l') | KeyCode::Right)
    }

    /// Digit shortcut for a level: 1, 2 or 3
    pub fn level_shortcut(code: KeyCode) -> Option<usize> {
        match code {
            KeyCode::Char(c @ '1'..='3') => c.to_digit(10).map(|d| d as usize - 1),
            _ => None,
        }
    }

    pub fn is_edit(code: KeyCode) -> bool {
        matches!(code, KeyCode::Char('e'))
    }

    pub fn is_save(code: KeyCode) -> bool {
        matches!(code, KeyCode::Char('s'))
    }

    pub fn is_tracker(code: KeyCode) -> bool {
        matches!(code, KeyCode::Char('p'))
    }

    pub fn is_switch_field(code: KeyCode) -> bool {
        matches!(code, KeyCode::Tab | KeyCode::BackTab)
    }

    /// Check if key is toggle theme
    pub fn is_toggle_theme(code: KeyCode) -> bool {
        matches!(code, KeyCode::Char('t'))
    }

    /// Check if key is confirm (Enter)
    pub fn is_confirm(code: KeyCode) -> bool {
        matches!(code, KeyCode::Enter)
    }

    /// Check if key is space (for toggling checkboxes)
    pub fn is_space(code: KeyCode) -> bool {
        matches!(code, KeyCode::Char(' '))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quit_keys() {
        assert!(KeyMap::is_quit(KeyCode::Char('q'), KeyModifiers::NONE));
        assert!(KeyMap::is_quit(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(!KeyMap::is_quit(KeyCode::Char('c'), KeyModifiers::NONE));
        assert!(!KeyMap::is_quit(KeyCode::Esc, KeyModifiers::NONE));
    }

    #[test]
    fn test_level_shortcuts() {
        assert_eq!(KeyMap::level_shortcut(KeyCode::Char('1')), Some(0));
        assert_eq!(KeyMap::level_shortcut(KeyCode::Char('3')), Some(2));
        assert_eq!(KeyMap::level_shortcut(KeyCode::Char('4')), None);
        assert_eq!(KeyMap::level_shortcut(KeyCode::Enter), None);
    }
}
