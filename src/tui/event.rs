use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// TUI-specific input events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TuiEvent {
    // Global
    Quit,
    NextScreen,
    PrevScreen,
    ToggleTheme, // Ctrl+T
    Resize,

    // Routed to the active screen
    Submit,
    InputChar(char),
    Backspace,
    FocusNext,
    FocusPrev,
    StopTimer, // Ctrl+S
}

/// Poll for an event with timeout
pub fn poll_event_timeout(timeout: std::time::Duration) -> Option<TuiEvent> {
    if !matches!(event::poll(timeout), Ok(true)) {
        return None;
    }
    match event::read().ok()? {
        Event::Key(key_event) => map_key(key_event),
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    }
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> Option<TuiEvent> {
    poll_event_timeout(std::time::Duration::ZERO)
}

/// Translate a key press into a `TuiEvent`. Releases and repeats of
/// non-character keys are dropped.
pub fn map_key(key_event: KeyEvent) -> Option<TuiEvent> {
    if key_event.kind == KeyEventKind::Release {
        return None;
    }
    log::debug!("Key event: {:?} with modifiers {:?}", key_event.code, key_event.modifiers);
    match (key_event.modifiers, key_event.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::Quit),
        (KeyModifiers::CONTROL, KeyCode::Char('t')) => Some(TuiEvent::ToggleTheme),
        (KeyModifiers::CONTROL, KeyCode::Char('s')) => Some(TuiEvent::StopTimer),
        // Other Ctrl/Alt chords aren't text
        (m, KeyCode::Char(_)) if m.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => None,
        (_, KeyCode::Char(c)) => Some(TuiEvent::InputChar(c)),
        (_, KeyCode::Backspace) => Some(TuiEvent::Backspace),
        (_, KeyCode::Enter) => Some(TuiEvent::Submit),
        (_, KeyCode::Esc) => Some(TuiEvent::Quit),
        (_, KeyCode::Left) => Some(TuiEvent::PrevScreen),
        (_, KeyCode::Right) => Some(TuiEvent::NextScreen),
        (_, KeyCode::Tab) | (_, KeyCode::Down) => Some(TuiEvent::FocusNext),
        (_, KeyCode::BackTab) | (_, KeyCode::Up) => Some(TuiEvent::FocusPrev),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_plain_chars_are_input() {
        assert_eq!(
            map_key(key(KeyCode::Char('5'), KeyModifiers::NONE)),
            Some(TuiEvent::InputChar('5'))
        );
        assert_eq!(
            map_key(key(KeyCode::Char('R'), KeyModifiers::SHIFT)),
            Some(TuiEvent::InputChar('R'))
        );
    }

    #[test]
    fn test_control_chords() {
        assert_eq!(
            map_key(key(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(TuiEvent::Quit)
        );
        assert_eq!(
            map_key(key(KeyCode::Char('t'), KeyModifiers::CONTROL)),
            Some(TuiEvent::ToggleTheme)
        );
        assert_eq!(
            map_key(key(KeyCode::Char('s'), KeyModifiers::CONTROL)),
            Some(TuiEvent::StopTimer)
        );
        assert_eq!(map_key(key(KeyCode::Char('x'), KeyModifiers::CONTROL)), None);
    }

    #[test]
    fn test_navigation_keys() {
        assert_eq!(
            map_key(key(KeyCode::Right, KeyModifiers::NONE)),
            Some(TuiEvent::NextScreen)
        );
        assert_eq!(
            map_key(key(KeyCode::Left, KeyModifiers::NONE)),
            Some(TuiEvent::PrevScreen)
        );
        assert_eq!(
            map_key(key(KeyCode::Tab, KeyModifiers::NONE)),
            Some(TuiEvent::FocusNext)
        );
        assert_eq!(
            map_key(key(KeyCode::BackTab, KeyModifiers::SHIFT)),
            Some(TuiEvent::FocusPrev)
        );
        assert_eq!(
            map_key(key(KeyCode::Esc, KeyModifiers::NONE)),
            Some(TuiEvent::Quit)
        );
    }

    #[test]
    fn test_key_release_is_ignored() {
        let mut release = key(KeyCode::Enter, KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        assert_eq!(map_key(release), None);
    }
}
