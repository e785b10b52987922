use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Height of the trigger button, borders included.
pub const BUTTON_HEIGHT: u16 = 3;
/// Height of the progress gauge, borders included.
pub const GAUGE_HEIGHT: u16 = 3;
/// Width of the trigger button, borders included.
pub const BUTTON_WIDTH: u16 = 30;

pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

/// Split the body into the button row, the label and the gauge, top to bottom.
pub fn panel_regions(body: Rect) -> (Rect, Rect, Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(BUTTON_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(GAUGE_HEIGHT),
        ])
        .split(body);

    let button_row = rows[0];
    let button_width = BUTTON_WIDTH.min(button_row.width);
    let button = Rect {
        x: button_row.x + (button_row.width - button_width) / 2,
        y: button_row.y,
        width: button_width,
        height: button_row.height,
    };
    (button, rows[1], rows[2])
}

/// Screen rectangle of the trigger button for a terminal of `cols` x `rows`.
pub fn button_rect(cols: u16, rows: u16) -> Rect {
    let area = Rect {
        x: 0,
        y: 0,
        width: cols,
        height: rows,
    };
    let (_, body, _) = layout_regions(area);
    panel_regions(body).0
}

pub fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}
