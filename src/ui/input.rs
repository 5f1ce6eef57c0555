use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::listing::{GridView, ListingView, SidebarView, ViewAction};
use crate::ui::app::{App, Focus};

/// What a key press means on the current page.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    None,
    Quit,
    Focus(isize),
    Back,
    MoveSelection(isize),
    Scroll(isize),
    Action(ViewAction),
}

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }
    let view = app.view();
    match resolve(key, app.focus(), &view, app.sidebar_selection()) {
        Command::None => {}
        Command::Quit => app.request_quit(),
        Command::Focus(offset) => app.cycle_focus(offset),
        Command::Back => {
            app.back();
        }
        Command::MoveSelection(delta) => app.move_sidebar_selection(delta, sidebar_len(&view)),
        Command::Scroll(delta) => app.scroll_grid(delta, view.grid.card_count()),
        Command::Action(action) => app.on_action(action),
    }
}

/// Map `key` to a command without touching any state.
pub fn resolve(key: KeyEvent, focus: Focus, view: &ListingView, selection: usize) -> Command {
    if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) || is_ctrl_char(key, 'c') {
        return Command::Quit;
    }
    match key.code {
        KeyCode::Tab => return Command::Focus(1),
        KeyCode::BackTab => return Command::Focus(-1),
        KeyCode::Backspace => return Command::Back,
        KeyCode::Char('m') => {
            return view
                .description
                .show_more
                .clone()
                .map_or(Command::None, Command::Action)
        }
        _ => {}
    }

    let action = match focus {
        Focus::Sort => cycle_select(key, |offset| view.sort.cycle(offset)),
        Focus::View => cycle_select(key, |offset| view.view.cycle(offset)),
        Focus::Sidebar => return sidebar_command(key, &view.sidebar, selection),
        Focus::Grid => {
            return match (key.code, &view.grid) {
                (KeyCode::Up, GridView::Cards(_)) => Command::Scroll(-1),
                (KeyCode::Down, GridView::Cards(_)) => Command::Scroll(1),
                _ => Command::None,
            }
        }
    };
    action.map_or(Command::None, Command::Action)
}

fn cycle_select(key: KeyEvent, cycle: impl Fn(isize) -> Option<ViewAction>) -> Option<ViewAction> {
    match key.code {
        KeyCode::Left | KeyCode::Up => cycle(-1),
        KeyCode::Right | KeyCode::Down => cycle(1),
        _ => None,
    }
}

fn sidebar_command(key: KeyEvent, sidebar: &SidebarView, selection: usize) -> Command {
    match sidebar {
        SidebarView::Brand { links, .. } => match key.code {
            KeyCode::Up => Command::MoveSelection(-1),
            KeyCode::Down => Command::MoveSelection(1),
            KeyCode::Enter => links
                .get(selection)
                .map_or(Command::None, |link| Command::Action(link.on_click.clone())),
            _ => Command::None,
        },
        SidebarView::Category(filters) => {
            let action = match key.code {
                KeyCode::Char('a') => Some(filters.active.on_toggle.clone()),
                KeyCode::Char('h') => Some(filters.price.nudge_min(-1)),
                KeyCode::Char('l') => Some(filters.price.nudge_min(1)),
                KeyCode::Left => Some(filters.price.nudge_max(-1)),
                KeyCode::Right => Some(filters.price.nudge_max(1)),
                KeyCode::Enter if filters.price.is_dirty() => Some(filters.price.apply()),
                KeyCode::Char('p') => filters.stores.previous.clone(),
                KeyCode::Char('n') => Some(filters.stores.next.clone()),
                _ => None,
            };
            action.map_or(Command::None, Command::Action)
        }
        SidebarView::Products => Command::None,
    }
}

fn sidebar_len(view: &ListingView) -> usize {
    match &view.sidebar {
        SidebarView::Brand { links, .. } => links.len(),
        _ => 0,
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
