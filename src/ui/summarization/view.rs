//! Rendering for the summary panel: button, label and gauge.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
    Frame,
};

use crate::ui::layout::panel_regions;
use crate::ui::theme::{
    ACCENT, BUTTON_BUSY, HEADER_TEXT, PANEL_BORDER, STATUS_ERROR, STATUS_OK,
};

use super::state::{PanelStatus, SummaryPanelState};

pub const BUTTON_LABEL: &str = "Summarize from Clipboard";

/// Spinner animation frames.
const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Render the whole panel into the body area.
pub fn render_summary_panel(frame: &mut Frame, area: Rect, state: &SummaryPanelState) {
    let (button, label, gauge) = panel_regions(area);
    render_button(frame, button, state.is_busy());
    render_label(frame, label, state);
    render_gauge(frame, gauge, state.progress);
}

fn render_button(frame: &mut Frame, area: Rect, busy: bool) {
    let style = if busy {
        Style::default().fg(HEADER_TEXT).bg(BUTTON_BUSY).add_modifier(Modifier::DIM)
    } else {
        Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD)
    };

    let button = Paragraph::new(Line::from(Span::styled(BUTTON_LABEL, style)))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(if busy { BUTTON_BUSY } else { ACCENT })),
        );
    frame.render_widget(button, area);
}

fn render_label(frame: &mut Frame, area: Rect, state: &SummaryPanelState) {
    let color = match state.status {
        PanelStatus::Error(_) => STATUS_ERROR,
        PanelStatus::Summary(_) => STATUS_OK,
        _ => HEADER_TEXT,
    };

    let mut spans = Vec::new();
    if let Some(tick) = state.animation_tick() {
        let spinner = SPINNER_FRAMES[(tick as usize) % SPINNER_FRAMES.len()];
        spans.push(Span::styled(format!("{} ", spinner), Style::default().fg(STATUS_OK)));
    }
    spans.push(Span::styled(state.label(), Style::default().fg(color)));

    let paragraph = Paragraph::new(Line::from(spans))
        .wrap(Wrap { trim: false })
        .scroll((state.scroll, 0))
        .block(
            Block::default()
                .title(" Result ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(PANEL_BORDER)),
        );
    frame.render_widget(paragraph, area);
}

fn render_gauge(frame: &mut Frame, area: Rect, progress: u8) {
    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(PANEL_BORDER)),
        )
        .gauge_style(Style::default().fg(ACCENT))
        .percent(progress.min(100) as u16);
    frame.render_widget(gauge, area);
}
