use crate::listing::{GridView, ListingView, SelectView, SidebarView};
use crate::ui::app::{App, Focus};
use crate::ui::footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, FOCUS_BORDER, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT,
};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App, view: &ListingView) {
    let regions = layout_regions(frame.area());
    let focus = app.focus();

    frame.render_widget(Header::new(view, app.is_loading()).widget(), regions.header);
    frame.render_widget(Clear, regions.grid);

    frame.render_widget(
        Paragraph::new(sidebar_lines(&view.sidebar, app.sidebar_selection()))
            .wrap(Wrap { trim: false })
            .block(panel(sidebar_title(&view.sidebar), focus == Focus::Sidebar)),
        regions.sidebar,
    );

    let mut description = vec![Line::from(strip_tags(&view.description.text))];
    if view.description.is_truncated() {
        description.push(Line::from(Span::styled(
            "[m] Show More",
            Style::default().fg(ACCENT),
        )));
    }
    let banner_title = view.banner.overlay_heading.as_deref().unwrap_or("About");
    frame.render_widget(
        Paragraph::new(description)
            .wrap(Wrap { trim: true })
            .block(panel(banner_title, false)),
        regions.description,
    );

    let controls = Line::from(vec![
        select_span(&view.sort, focus == Focus::Sort),
        Span::raw("   "),
        select_span(&view.view, focus == Focus::View),
        Span::raw("   "),
        Span::styled(view.count_line.clone(), Style::default().fg(MUTED_TEXT)),
    ]);
    frame.render_widget(Paragraph::new(controls).block(panel("", false)), regions.controls);

    frame.render_widget(
        Paragraph::new(grid_lines(&view.grid, app.grid_offset()))
            .block(panel("Products", focus == Focus::Grid)),
        regions.grid,
    );

    frame.render_widget(
        footer::widget(focus, &view.sidebar, regions.footer),
        regions.footer,
    );
}

fn panel(title: &str, focused: bool) -> Block<'static> {
    let border = if focused { FOCUS_BORDER } else { GLOBAL_BORDER };
    Block::default()
        .title(Span::styled(title.to_string(), Style::default().fg(ACCENT)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
}

fn select_span(select: &SelectView, focused: bool) -> Span<'static> {
    let style = if focused {
        Style::default().fg(HEADER_TEXT).bg(ACTIVE_HIGHLIGHT).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(HEADER_TEXT)
    };
    Span::styled(format!("{}: ‹ {} ›", select.label, select.selected_label()), style)
}

fn sidebar_title(sidebar: &SidebarView) -> &'static str {
    match sidebar {
        SidebarView::Brand { title, .. } => *title,
        SidebarView::Category(_) => "Filters",
        SidebarView::Products => "",
    }
}

fn sidebar_lines(sidebar: &SidebarView, selection: usize) -> Vec<Line<'static>> {
    let text = Style::default().fg(HEADER_TEXT);
    let muted = Style::default().fg(MUTED_TEXT);
    match sidebar {
        SidebarView::Brand { links, .. } => links
            .iter()
            .enumerate()
            .map(|(index, link)| {
                let mut style = text;
                if link.active {
                    style = style.add_modifier(Modifier::BOLD).fg(ACCENT);
                }
                if index == selection {
                    style = style.bg(ACTIVE_HIGHLIGHT);
                }
                Line::from(vec![
                    Span::styled(link.name.clone(), style),
                    Span::styled(format!("  ({})", link.count), muted),
                ])
            })
            .collect(),
        SidebarView::Category(filters) => {
            let checkbox = if filters.active.checked { "[x]" } else { "[ ]" };
            let price = &filters.price;
            let pending = if price.is_dirty() { "  (Enter to apply)" } else { "" };
            let previous = if filters.stores.previous.is_some() { "‹ p" } else { "   " };
            vec![
                Line::from(Span::styled(format!("{} {}", checkbox, filters.active.label), text)),
                Line::from(Span::styled(filters.active.description, muted)),
                Line::from(""),
                Line::from(Span::styled(price.title, text)),
                Line::from(Span::styled(
                    format!("{} - {} of {}{}", price.draft.min, price.draft.max, price.max, pending),
                    text,
                )),
                Line::from(""),
                Line::from(Span::styled(
                    format!("Stores  {}  page {}  n ›", previous, filters.stores.page),
                    text,
                )),
            ]
        }
        SidebarView::Products => Vec::new(),
    }
}

fn grid_lines(grid: &GridView, offset: usize) -> Vec<Line<'static>> {
    let muted = Style::default().fg(MUTED_TEXT);
    match grid {
        GridView::Empty => Vec::new(),
        GridView::Skeletons(count) => (0..*count)
            .map(|_| Line::from(Span::styled("░░░░░░░░░░░░░░░░░░░░░░░░", muted)))
            .collect(),
        GridView::Cards(cards) => cards
            .iter()
            .skip(offset)
            .map(|card| {
                let price = match (card.product.price, card.product.currency.as_deref()) {
                    (Some(price), Some(currency)) => format!("{currency} {price:.2}"),
                    (Some(price), None) => format!("{price:.2}"),
                    (None, _) => String::new(),
                };
                Line::from(vec![
                    Span::styled(format!("{:>3}. ", card.index + 1), muted),
                    Span::styled(card.product.title.clone(), Style::default().fg(HEADER_TEXT)),
                    Span::styled(format!("  {price}"), Style::default().fg(ACCENT)),
                ])
            })
            .collect(),
    }
}

/// Drop markup from an HTML fragment and collapse whitespace.
fn strip_tags(html: &str) -> String {
    let mut text = String::with_capacity(html.len());
    let mut in_tag = false;
    for ch in html.chars() {
        match ch {
            '<' => {
                in_tag = true;
                text.push(' ');
            }
            '>' if in_tag => in_tag = false,
            _ if !in_tag => text.push(ch),
            _ => {}
        }
    }
    let text = text
        .replace("&nbsp;", " ")
        .replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"");
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
