use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::summarization::render_summary_panel;
use ratatui::widgets::Clear;
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);
    let panel = app.panel();

    let header_widget = Header::new(app.model_name(), app.endpoint());
    frame.render_widget(header_widget.widget(panel.is_busy()), header);

    frame.render_widget(Clear, body);
    render_summary_panel(frame, body, panel);

    let footer_widget = Footer::new(panel.notice.as_deref());
    frame.render_widget(footer_widget.widget(footer), footer);
}
