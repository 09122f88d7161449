use std::time::Instant;

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::ui::app::App;
use crate::ui::direction::Direction;
use crate::ui::section::Section;

/// Action to take after processing an input event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputAction {
    /// No further action needed (handled internally).
    None,
    /// Copy a link to the system clipboard.
    CopyToClipboard(String),
}

pub fn handle_key(app: &mut App, key: KeyEvent) -> InputAction {
    if key.kind != KeyEventKind::Press {
        return InputAction::None;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return InputAction::None;
    }

    match key.code {
        KeyCode::Tab => {
            app.next_section();
            return InputAction::None;
        }
        KeyCode::BackTab => {
            app.prev_section();
            return InputAction::None;
        }
        KeyCode::F(n @ 1..=4) => {
            app.set_section(Section::ALL[usize::from(n) - 1]);
            return InputAction::None;
        }
        _ => {}
    }

    match app.section() {
        Section::Cotizador => handle_wizard_key(app, key),
        Section::Isapres | Section::Noticias => handle_carousel_key(app, key),
        Section::Agenda => match key.code {
            KeyCode::Enter => InputAction::CopyToClipboard(app.schedule_url().to_string()),
            _ => InputAction::None,
        },
    }
}

fn handle_wizard_key(app: &mut App, key: KeyEvent) -> InputAction {
    // Only Ctrl+N leaves the success view.
    if app.wizard().is_submitted() {
        if is_ctrl_char(key, 'n') {
            app.new_quote();
        }
        return InputAction::None;
    }

    match key.code {
        KeyCode::Up => app.focus_field(-1),
        KeyCode::Down => app.focus_field(1),
        KeyCode::Left => app.cycle_option(false),
        KeyCode::Right => app.cycle_option(true),
        KeyCode::Enter => app.wizard_next(),
        KeyCode::Esc => app.wizard_back(),
        KeyCode::Backspace => app.backspace(),
        KeyCode::Char(ch)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            app.type_char(ch)
        }
        _ => {}
    }
    InputAction::None
}

fn handle_carousel_key(app: &mut App, key: KeyEvent) -> InputAction {
    match key.code {
        KeyCode::Left => app.paginate(Direction::Backward),
        KeyCode::Right => app.paginate(Direction::Forward),
        KeyCode::Home => app.go_to_page(0),
        KeyCode::End => app.go_to_last_page(),
        KeyCode::Char(ch @ '1'..='9') => {
            let index = ch.to_digit(10).unwrap_or(1) as usize;
            app.go_to_page(index - 1);
        }
        KeyCode::Up if app.section() == Section::Noticias => app.move_news_selection(-1),
        KeyCode::Down if app.section() == Section::Noticias => app.move_news_selection(1),
        KeyCode::Enter if app.section() == Section::Noticias => {
            if let Some(url) = app.selected_news_url() {
                return InputAction::CopyToClipboard(url.to_string());
            }
        }
        _ => {}
    }
    InputAction::None
}

/// Left-button drags on a carousel become swipe gestures.
pub fn handle_mouse(app: &mut App, mouse: MouseEvent, at: Instant) {
    if !app.section().is_carousel() {
        return;
    }
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => app.on_pointer_down(mouse.column, at),
        MouseEventKind::Drag(MouseButton::Left) => app.on_pointer_drag(mouse.column, at),
        MouseEventKind::Up(MouseButton::Left) => app.on_pointer_up(mouse.column, at),
        MouseEventKind::ScrollDown => app.paginate(Direction::Forward),
        MouseEventKind::ScrollUp => app.paginate(Direction::Backward),
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::config::Config;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app() -> App {
        App::new(&Config::default(), Catalog::builtin())
    }

    #[test]
    fn ctrl_q_quits() {
        let mut app = app();
        handle_key(&mut app, KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL));
        assert!(app.should_quit());
    }

    #[test]
    fn plain_q_is_typed_not_quit() {
        let mut app = app();
        handle_key(&mut app, press(KeyCode::Char('q')));
        assert!(!app.should_quit());
        assert_eq!(app.wizard().fields().get("nombreCompleto"), Some("q"));
    }

    #[test]
    fn function_keys_select_sections() {
        let mut app = app();
        handle_key(&mut app, press(KeyCode::F(4)));
        assert_eq!(app.section(), Section::Noticias);
        handle_key(&mut app, press(KeyCode::Tab));
        assert_eq!(app.section(), Section::Cotizador);
    }

    #[test]
    fn enter_on_agenda_copies_schedule_link() {
        let mut app = app();
        app.set_section(Section::Agenda);
        let action = handle_key(&mut app, press(KeyCode::Enter));
        assert_eq!(action, InputAction::CopyToClipboard(app.schedule_url().to_string()));
    }

    #[test]
    fn enter_on_news_copies_selected_link() {
        let mut app = app();
        app.on_resize(80, 24);
        app.set_section(Section::Noticias);
        let expected = app.news().visible_items()[0].url.clone();
        let action = handle_key(&mut app, press(KeyCode::Enter));
        assert_eq!(action, InputAction::CopyToClipboard(expected));
    }

    #[test]
    fn arrows_page_the_provider_carousel() {
        let mut app = app();
        app.on_resize(80, 24);
        app.set_section(Section::Isapres);
        handle_key(&mut app, press(KeyCode::Right));
        assert_eq!(app.providers().page(), 1);
        handle_key(&mut app, press(KeyCode::End));
        assert_eq!(app.providers().page(), app.providers().total_pages() - 1);
        handle_key(&mut app, press(KeyCode::Char('1')));
        assert_eq!(app.providers().page(), 0);
    }

    #[test]
    fn release_events_are_ignored() {
        let mut app = app();
        let mut key = press(KeyCode::Char('x'));
        key.kind = KeyEventKind::Release;
        handle_key(&mut app, key);
        assert_eq!(app.wizard().fields().get("nombreCompleto"), Some(""));
    }
}
