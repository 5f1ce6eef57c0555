use crate::listing::ListingView;
use crate::ui::theme::{
    ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_LOADING, STATUS_OK,
};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Title line, breadcrumbs and the loading indicator.
pub struct Header<'a> {
    view: &'a ListingView,
    loading: bool,
}

impl<'a> Header<'a> {
    pub fn new(view: &'a ListingView, loading: bool) -> Self {
        Self { view, loading }
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let (status, status_style) = if self.loading {
            ("● loading", Style::default().fg(STATUS_LOADING))
        } else {
            ("● ready", Style::default().fg(STATUS_OK))
        };

        let title = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled(
                self.view.title.clone(),
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │  ", separator_style),
            Span::styled(status, status_style),
        ]);

        let mut crumbs = vec![Span::styled("  ", text_style)];
        for (index, segment) in self.view.breadcrumbs.iter().enumerate() {
            if index > 0 {
                crumbs.push(Span::styled(" / ", separator_style));
            }
            crumbs.push(Span::styled(segment.title.clone(), text_style));
        }

        Paragraph::new(vec![title, Line::from(crumbs)]).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
