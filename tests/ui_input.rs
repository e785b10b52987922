mod common;

use clipsum::ui::events::AppEvent;
use clipsum::ui::layout::button_rect;
use clipsum::ui::render::draw;
use clipsum::ui::runtime::apply_event;
use common::{Harness, ScriptedModel};
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::time::Duration;

fn key(code: KeyCode) -> AppEvent {
    AppEvent::Key(KeyEvent {
        code,
        modifiers: KeyModifiers::NONE,
        kind: KeyEventKind::Press,
        state: KeyEventState::NONE,
    })
}

fn left_click(column: u16, row: u16) -> AppEvent {
    AppEvent::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

#[test]
fn q_requests_quit() {
    let mut h = Harness::new("", ScriptedModel::replying("unused"));
    apply_event(&mut h.app, key(KeyCode::Char('q')));
    assert!(h.app.should_quit());
}

#[test]
fn enter_triggers_summarize() {
    let mut h = Harness::new("keyboard text", ScriptedModel::replying("from keyboard"));
    apply_event(&mut h.app, key(KeyCode::Enter));
    assert!(h.app.panel().is_busy());
    h.drain_until_idle(Duration::from_secs(5));
    assert_eq!(h.app.panel().label(), "Summary: from keyboard");
}

#[test]
fn clicking_the_button_triggers_summarize() {
    let mut h = Harness::new("mouse text", ScriptedModel::replying("from mouse"));
    apply_event(&mut h.app, AppEvent::Resize(80, 24));

    let button = button_rect(80, 24);
    apply_event(&mut h.app, left_click(button.x + 1, button.y + 1));
    assert!(h.app.panel().is_busy());
    h.drain_until_idle(Duration::from_secs(5));
    assert_eq!(h.app.panel().progress, 100);
}

#[test]
fn clicking_outside_the_button_does_nothing() {
    let mut h = Harness::new("mouse text", ScriptedModel::replying("unused"));
    apply_event(&mut h.app, AppEvent::Resize(80, 24));
    apply_event(&mut h.app, left_click(0, 20));
    assert!(!h.app.panel().is_busy());
    assert_eq!(h.clipboard.contents(), "mouse text");
}

#[test]
fn tick_advances_spinner_only_while_busy() {
    let mut h = Harness::new(
        "text",
        ScriptedModel::replying("ok").with_delay(Duration::from_millis(200)),
    );
    apply_event(&mut h.app, AppEvent::Tick);
    assert_eq!(h.app.panel().animation_tick(), None);

    h.app.trigger_summarize();
    apply_event(&mut h.app, AppEvent::Tick);
    assert_eq!(h.app.panel().animation_tick(), Some(1));
    h.drain_until_idle(Duration::from_secs(5));
}

#[test]
fn full_frame_shows_title_button_and_model() {
    let h = Harness::new("", ScriptedModel::replying("unused"));
    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    terminal.draw(|frame| draw(frame, &h.app)).unwrap();

    let text: String = terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect();
    assert!(text.contains("Text Summarizer"));
    assert!(text.contains("Summarize from Clipboard"));
    assert!(text.contains("scripted"));
    assert!(text.contains("Summary will appear here."));
}
