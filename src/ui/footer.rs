use crate::listing::SidebarView;
use crate::ui::app::Focus;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Key hints for the focused area.
pub fn hints(focus: Focus, sidebar: &SidebarView) -> &'static str {
    match (focus, sidebar) {
        (Focus::Sort | Focus::View, _) => " ←/→: Change │ Tab: Focus │ m: More │ Bksp: Back │ q: Quit",
        (Focus::Sidebar, SidebarView::Brand { .. }) => {
            " ↑/↓: Select │ Enter: Open │ Tab: Focus │ Bksp: Back │ q: Quit"
        }
        (Focus::Sidebar, SidebarView::Category(_)) => {
            " a: Active │ h/l: Min │ ←/→: Max │ Enter: Apply │ p/n: Stores │ q: Quit"
        }
        (Focus::Sidebar, SidebarView::Products) | (Focus::Grid, _) => {
            " ↑/↓: Scroll │ Tab: Focus │ m: More │ Bksp: Back │ q: Quit"
        }
    }
}

pub fn widget(focus: Focus, sidebar: &SidebarView, area: Rect) -> Paragraph<'static> {
    let hints = hints(focus, sidebar);
    let version = format!("v{} ", VERSION);

    let content_width = area.width.saturating_sub(2) as usize;
    let padding = content_width
        .saturating_sub(hints.chars().count())
        .saturating_sub(version.chars().count());

    let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);
    let line = Line::from(vec![
        Span::styled(hints, text_style),
        Span::styled(" ".repeat(padding), text_style),
        Span::styled(version, text_style),
    ]);

    Paragraph::new(line)
        .style(text_style)
        .alignment(Alignment::Left)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
}
