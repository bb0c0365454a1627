use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use tracing::info;

use crate::tracker::Tracker;
use crate::ui::app::{App, InputMode, MenuItem, Screen};
use crate::ui::util::scroll_by;

pub(crate) fn as_tui(tracker: &Tracker) -> Result<()> {
    let mut app = App::new();
    app.refresh_transactions(tracker);
    info!(path = %tracker.ledger_path().display(), "starting TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app, tracker);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(ref e) = result {
        eprintln!("Error: {e:?}");
    }

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    tracker: &Tracker,
) -> Result<()> {
    while app.running {
        terminal.draw(|f| {
            // 1 tab + 1 status + 1 message bar, then the list borders below the form
            let content_height = f.area().height.saturating_sub(3 + 10 + 2) as usize;
            app.visible_rows = content_height.max(1);
            crate::ui::render::render(f, app);
        })?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if app.show_help {
                app.show_help = false;
                continue;
            }
            if is_quit(&key) {
                app.running = false;
                continue;
            }
            match app.input_mode {
                InputMode::Normal => handle_normal_input(key, app, tracker),
                InputMode::Editing => handle_editing_input(key, app, tracker),
            }
        }
    }
    Ok(())
}

fn is_quit(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('c'))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

// ── Input handlers ───────────────────────────────────────────

fn handle_normal_input(key: KeyEvent, app: &mut App, tracker: &Tracker) {
    match key.code {
        KeyCode::Char(c @ '1'..='4') => {
            let idx = (c as usize) - ('1' as usize);
            if let Some(&screen) = Screen::all().get(idx) {
                app.switch_screen(screen, tracker);
            }
        }
        KeyCode::Char('?') => app.show_help = true,
        KeyCode::Esc | KeyCode::Char('m') | KeyCode::Backspace => {
            app.switch_screen(Screen::Menu, tracker);
        }
        _ => match app.screen {
            Screen::Menu => handle_menu_input(key, app, tracker),
            Screen::Dashboard if key.code == KeyCode::Char('r') => {
                app.refresh_dashboard(tracker);
                app.set_status("Dashboard refreshed");
            }
            Screen::Graph if key.code == KeyCode::Char('r') => {
                app.switch_screen(Screen::Graph, tracker);
            }
            Screen::Dashboard | Screen::Graph | Screen::AddTransaction => {}
        },
    }
}

fn handle_menu_input(key: KeyEvent, app: &mut App, tracker: &Tracker) {
    let count = MenuItem::all().len();
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            app.menu_index = (app.menu_index + 1) % count;
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.menu_index = if app.menu_index == 0 {
                count - 1
            } else {
                app.menu_index - 1
            };
        }
        KeyCode::Enter => app.activate_menu_item(tracker),
        KeyCode::Char('b') => {
            app.menu_index = 0;
            app.input_mode = InputMode::Editing;
        }
        KeyCode::Char('a') => app.switch_screen(Screen::AddTransaction, tracker),
        KeyCode::Char('d') => app.switch_screen(Screen::Dashboard, tracker),
        KeyCode::Char('g') => app.switch_screen(Screen::Graph, tracker),
        KeyCode::Char('q') => app.running = false,
        _ => {}
    }
}

fn handle_editing_input(key: KeyEvent, app: &mut App, tracker: &Tracker) {
    match app.screen {
        Screen::AddTransaction => handle_form_input(key, app, tracker),
        _ => handle_budget_input(key, app),
    }
}

fn handle_budget_input(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Enter | KeyCode::Esc => {
            app.input_mode = InputMode::Normal;
            if !app.budget_input.is_empty() {
                app.set_status(format!("Budget set to {}", app.budget_input));
            }
        }
        KeyCode::Backspace => {
            app.budget_input.pop();
        }
        KeyCode::Char(c) => app.budget_input.push(c),
        _ => {}
    }
}

fn handle_form_input(key: KeyEvent, app: &mut App, tracker: &Tracker) {
    match key.code {
        KeyCode::Enter => app.submit_entry(tracker),
        KeyCode::Esc => app.switch_screen(Screen::Menu, tracker),
        KeyCode::Tab | KeyCode::Down => app.form.focus = app.form.focus.next(),
        KeyCode::BackTab | KeyCode::Up => app.form.focus = app.form.focus.prev(),
        KeyCode::PageDown => {
            let page = app.visible_rows;
            scroll_by(
                &mut app.transaction_scroll,
                page as isize,
                app.transactions.len(),
                page,
            );
        }
        KeyCode::PageUp => {
            let page = app.visible_rows;
            scroll_by(
                &mut app.transaction_scroll,
                -(page as isize),
                app.transactions.len(),
                page,
            );
        }
        KeyCode::Backspace => {
            app.form.focused_mut().pop();
        }
        KeyCode::Char(c) => app.form.focused_mut().push(c),
        _ => {}
    }
}
