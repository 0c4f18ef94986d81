use crate::ui::rocket_list::LoadStatus;
use crate::ui::theme::{
    GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_ERROR, STATUS_OK, STATUS_PENDING,
};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header;

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, title: &str, status: LoadStatus, count: usize) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let (dot, label) = status_badge(status, count);
        let line = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled("●", Style::default().fg(dot)),
            Span::styled("  ", text_style),
            Span::styled(title.to_string(), text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(label, text_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

fn status_badge(status: LoadStatus, count: usize) -> (Color, String) {
    match status {
        LoadStatus::Idle => (HEADER_SEPARATOR, "not loaded".to_string()),
        LoadStatus::Loading => (STATUS_PENDING, "loading".to_string()),
        LoadStatus::Loaded => (STATUS_OK, format!("{} rockets", count)),
        LoadStatus::Failed => (STATUS_ERROR, "fetch failed".to_string()),
    }
}
