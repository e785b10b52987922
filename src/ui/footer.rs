use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT, STATUS_WARN};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

const HINTS: &str = " Enter/S: Summarize │ ↑↓ PgUp PgDn: Scroll │ Q: Quit";

pub struct Footer<'a> {
    notice: Option<&'a str>,
}

impl<'a> Footer<'a> {
    pub fn new(notice: Option<&'a str>) -> Self {
        Self { notice }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let version = format!("v{} ", VERSION);
        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);

        let mut spans = vec![Span::styled(HINTS, text_style)];
        let mut used = HINTS.chars().count();
        if let Some(notice) = self.notice {
            let notice = format!("  {}", notice);
            used += notice.chars().count();
            spans.push(Span::styled(notice, Style::default().fg(STATUS_WARN)));
        }

        // Calculate padding using char count, not byte count (for Unicode)
        let content_width = area.width.saturating_sub(2) as usize; // minus borders
        let padding = content_width
            .saturating_sub(used)
            .saturating_sub(version.chars().count());
        spans.push(Span::styled(" ".repeat(padding), text_style));
        spans.push(Span::styled(version, text_style));

        Paragraph::new(Line::from(spans))
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}
