use ratatui::layout::{Constraint, Direction, Layout, Rect};

const HEADER_HEIGHT: u16 = 4;
const FOOTER_HEIGHT: u16 = 3;
const SIDEBAR_WIDTH: u16 = 34;
const DESCRIPTION_HEIGHT: u16 = 6;
const CONTROLS_HEIGHT: u16 = 3;

/// Screen areas of the listing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Regions {
    pub header: Rect,
    pub sidebar: Rect,
    pub description: Rect,
    pub controls: Rect,
    pub grid: Rect,
    pub footer: Rect,
}

pub fn layout_regions(area: Rect) -> Regions {
    let [header, body, footer] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(FOOTER_HEIGHT),
        ])
        .areas(area);

    let [sidebar, main] = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SIDEBAR_WIDTH.min(body.width / 2)), Constraint::Min(0)])
        .areas(body);

    let [description, controls, grid] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(DESCRIPTION_HEIGHT),
            Constraint::Length(CONTROLS_HEIGHT),
            Constraint::Min(0),
        ])
        .areas(main);

    Regions {
        header,
        sidebar,
        description,
        controls,
        grid,
        footer,
    }
}
