use crate::ui::theme::{GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_OK, STATUS_WARN};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub const WINDOW_TITLE: &str = "Text Summarizer";

pub struct Header<'a> {
    model: &'a str,
    endpoint: &'a str,
}

impl<'a> Header<'a> {
    pub fn new(model: &'a str, endpoint: &'a str) -> Self {
        Self { model, endpoint }
    }

    pub fn widget(&self, busy: bool) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let indicator_style = Style::default().fg(if busy { STATUS_WARN } else { STATUS_OK });
        let line = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled("●", indicator_style),
            Span::styled("  ", text_style),
            Span::styled(WINDOW_TITLE, text_style.add_modifier(Modifier::BOLD)),
            Span::styled("  │  ", separator_style),
            Span::styled(self.model.to_string(), text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(self.endpoint.to_string(), text_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
