use crate::ui::app::{App, PAGE_LINES};
use crate::ui::layout::{button_rect, contains};
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && matches!(key.code, KeyCode::Char('c')) {
        app.request_quit();
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.request_quit(),
        KeyCode::Enter | KeyCode::Char('s') | KeyCode::Char(' ') => {
            app.trigger_summarize();
        }
        KeyCode::Up => app.scroll(-1),
        KeyCode::Down => app.scroll(1),
        KeyCode::PageUp => app.scroll(-PAGE_LINES),
        KeyCode::PageDown => app.scroll(PAGE_LINES),
        _ => {}
    }
}

pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            let Some((cols, rows)) = app.size() else {
                return;
            };
            if contains(button_rect(cols, rows), mouse.column, mouse.row) {
                app.trigger_summarize();
            }
        }
        MouseEventKind::ScrollUp => app.scroll(-1),
        MouseEventKind::ScrollDown => app.scroll(1),
        _ => {}
    }
}
