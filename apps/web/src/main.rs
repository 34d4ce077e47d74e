mod fetch;
mod theme;
mod view;

use std::cell::RefCell;
use std::io;
use std::rc::Rc;

use portfolio_core::nav::{build_nav, default_pages};
use portfolio_core::ProjectsController;
use ratzilla::event::KeyCode;
use ratzilla::ratatui::Terminal;
use ratzilla::{DomBackend, WebRenderer};
use wasm_bindgen_futures::spawn_local;

use view::PageState;

const GITHUB_USER: &str = "amw013";
/// Relative to the page, like the site's own projects page.
const PROJECTS_URL: &str = "../lib/projects.json";
const HEADING_LEVEL: &str = "h2";

fn current_nav() -> Vec<portfolio_core::nav::NavLink> {
    let pages = default_pages(GITHUB_USER);
    let Some(location) = web_sys::window().map(|window| window.location()) else {
        return build_nav(&pages, "", "", "/");
    };
    let host = location.host().unwrap_or_default();
    let hostname = location.hostname().unwrap_or_default();
    let path = location.pathname().unwrap_or_default();
    build_nav(&pages, &host, &hostname, &path)
}

async fn load(state: Rc<RefCell<PageState>>) {
    let records = fetch::load_projects(PROJECTS_URL).await;
    {
        let mut state = state.borrow_mut();
        state.controller = Some(ProjectsController::new(records, HEADING_LEVEL));
        state.refresh();
    }

    let github = fetch::load_github_stats(GITHUB_USER).await;
    state.borrow_mut().github = github;
}

fn main() -> io::Result<()> {
    let scheme = theme::stored_scheme().unwrap_or_default();
    theme::show_scheme(scheme);

    let state = Rc::new(RefCell::new(PageState {
        controller: None,
        query: String::new(),
        legend_cursor: 0,
        scheme,
        nav: current_nav(),
        github: None,
    }));

    spawn_local(load(state.clone()));

    let backend = DomBackend::new()?;
    let mut terminal = Terminal::new(backend)?;

    terminal.on_key_event({
        let state = state.clone();
        move |event| {
            let mut state = state.borrow_mut();
            match event.code {
                KeyCode::Char(ch) => {
                    state.query.push(ch);
                    state.refresh();
                }
                KeyCode::Backspace => {
                    state.query.pop();
                    state.refresh();
                }
                KeyCode::Esc => {
                    state.query.clear();
                    state.refresh();
                }
                KeyCode::Up => {
                    let len = state.legend_len();
                    state.legend_cursor = if state.legend_cursor == 0 {
                        len.saturating_sub(1)
                    } else {
                        state.legend_cursor - 1
                    };
                }
                KeyCode::Down => {
                    let len = state.legend_len().max(1);
                    state.legend_cursor = (state.legend_cursor + 1) % len;
                }
                KeyCode::Enter => state.toggle_cursor(),
                KeyCode::Tab => {
                    state.scheme = state.scheme.next();
                    theme::apply_scheme(state.scheme);
                }
                _ => {}
            }
        }
    });

    terminal.draw_web(move |f| view::render(&state.borrow(), f));

    Ok(())
}
