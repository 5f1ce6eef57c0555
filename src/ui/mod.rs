//! Terminal host for the listing page.

mod app;
mod events;
mod footer;
mod header;
mod input;
mod layout;
mod render;
mod runtime;
mod terminal_guard;
mod theme;

pub use app::{App, Focus};
pub use runtime::run;
