use tracing::error;

use crate::error::{AddError, StoreError};
use crate::tracker::{Breakdown, Dashboard, Tracker};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Screen {
    Menu,
    AddTransaction,
    Dashboard,
    Graph,
}

impl Screen {
    pub(crate) fn all() -> &'static [Screen] {
        &[
            Self::Menu,
            Self::AddTransaction,
            Self::Dashboard,
            Self::Graph,
        ]
    }
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Menu => write!(f, "Main Menu"),
            Self::AddTransaction => write!(f, "Add Transaction"),
            Self::Dashboard => write!(f, "Dashboard"),
            Self::Graph => write!(f, "Graph"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InputMode {
    Normal,
    Editing,
}

impl std::fmt::Display for InputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => write!(f, "NORMAL"),
            Self::Editing => write!(f, "EDIT"),
        }
    }
}

/// Entries on the main menu, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MenuItem {
    SetBudget,
    AddTransaction,
    ViewDashboard,
    ViewGraph,
    Quit,
}

impl MenuItem {
    pub(crate) fn all() -> &'static [MenuItem] {
        &[
            Self::SetBudget,
            Self::AddTransaction,
            Self::ViewDashboard,
            Self::ViewGraph,
            Self::Quit,
        ]
    }

    pub(crate) fn label(self) -> &'static str {
        match self {
            Self::SetBudget => "Set Your Budget",
            Self::AddTransaction => "Add Transaction",
            Self::ViewDashboard => "View Dashboard",
            Self::ViewGraph => "View Graph",
            Self::Quit => "Quit",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum EntryField {
    Description,
    Amount,
    Date,
}

impl EntryField {
    pub(crate) fn all() -> &'static [EntryField] {
        &[Self::Description, Self::Amount, Self::Date]
    }

    pub(crate) fn label(self) -> &'static str {
        match self {
            Self::Description => "Description",
            Self::Amount => "Amount",
            Self::Date => "Date (YYYY-MM-DD)",
        }
    }

    pub(crate) fn next(self) -> Self {
        match self {
            Self::Description => Self::Amount,
            Self::Amount => Self::Date,
            Self::Date => Self::Description,
        }
    }

    pub(crate) fn prev(self) -> Self {
        match self {
            Self::Description => Self::Date,
            Self::Amount => Self::Description,
            Self::Date => Self::Amount,
        }
    }
}

/// Live contents of the add-transaction form.
#[derive(Debug, Clone)]
pub(crate) struct EntryForm {
    pub(crate) description: String,
    pub(crate) amount: String,
    pub(crate) date: String,
    pub(crate) focus: EntryField,
    pub(crate) error: Option<String>,
}

impl Default for EntryForm {
    fn default() -> Self {
        Self {
            description: String::new(),
            amount: String::new(),
            date: String::new(),
            focus: EntryField::Description,
            error: None,
        }
    }
}

impl EntryForm {
    pub(crate) fn value(&self, field: EntryField) -> &str {
        match field {
            EntryField::Description => &self.description,
            EntryField::Amount => &self.amount,
            EntryField::Date => &self.date,
        }
    }

    pub(crate) fn focused_mut(&mut self) -> &mut String {
        match self.focus {
            EntryField::Description => &mut self.description,
            EntryField::Amount => &mut self.amount,
            EntryField::Date => &mut self.date,
        }
    }

    pub(crate) fn clear(&mut self) {
        *self = Self::default();
    }
}

pub(crate) struct App {
    pub(crate) running: bool,
    pub(crate) screen: Screen,
    pub(crate) input_mode: InputMode,
    pub(crate) status_message: String,
    pub(crate) show_help: bool,

    // Main menu
    pub(crate) menu_index: usize,
    pub(crate) budget_input: String,

    // Add transaction
    pub(crate) form: EntryForm,
    pub(crate) transactions: Vec<String>,
    pub(crate) transaction_scroll: usize,

    // Dashboard / graph
    pub(crate) dashboard: Option<Dashboard>,
    pub(crate) breakdown: Breakdown,

    // Layout (updated each render frame)
    pub(crate) visible_rows: usize,
}

impl App {
    pub(crate) fn new() -> Self {
        Self {
            running: true,
            screen: Screen::Menu,
            input_mode: InputMode::Normal,
            status_message: String::new(),
            show_help: false,

            menu_index: 0,
            budget_input: String::new(),

            form: EntryForm::default(),
            transactions: Vec::new(),
            transaction_scroll: 0,

            dashboard: None,
            breakdown: Breakdown::NoData,

            visible_rows: 10,
        }
    }

    pub(crate) fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = msg.into();
    }

    pub(crate) fn selected_menu_item(&self) -> MenuItem {
        MenuItem::all()
            .get(self.menu_index)
            .copied()
            .unwrap_or(MenuItem::Quit)
    }

    /// Move to a screen, re-reading whatever it shows from the ledger.
    pub(crate) fn switch_screen(&mut self, screen: Screen, tracker: &Tracker) {
        self.screen = screen;
        self.input_mode = InputMode::Normal;
        self.status_message.clear();
        match screen {
            Screen::Menu => {}
            Screen::AddTransaction => {
                self.input_mode = InputMode::Editing;
                self.refresh_transactions(tracker);
            }
            Screen::Dashboard => self.refresh_dashboard(tracker),
            Screen::Graph => {
                self.refresh_breakdown(tracker);
                if self.breakdown.is_empty() && self.status_message.is_empty() {
                    self.set_status("There are no expense data to display.");
                }
            }
        }
    }

    pub(crate) fn activate_menu_item(&mut self, tracker: &Tracker) {
        match self.selected_menu_item() {
            MenuItem::SetBudget => self.input_mode = InputMode::Editing,
            MenuItem::AddTransaction => self.switch_screen(Screen::AddTransaction, tracker),
            MenuItem::ViewDashboard => self.switch_screen(Screen::Dashboard, tracker),
            MenuItem::ViewGraph => self.switch_screen(Screen::Graph, tracker),
            MenuItem::Quit => self.running = false,
        }
    }

    /// Validate and store the form. Invalid input stays in the fields with an
    /// inline error; success clears them and reloads the list.
    pub(crate) fn submit_entry(&mut self, tracker: &Tracker) {
        let result =
            tracker.append_transaction(&self.form.date, &self.form.description, &self.form.amount);
        match result {
            Ok(txn) => {
                self.form.clear();
                self.set_status(format!("Added: {txn}"));
                self.refresh_transactions(tracker);
                self.scroll_to_latest();
            }
            Err(AddError::Validation(e)) => {
                self.form.error = Some(e.to_string());
            }
            Err(AddError::Store(e)) => self.report_store_error(&e),
        }
    }

    pub(crate) fn refresh_transactions(&mut self, tracker: &Tracker) {
        match tracker.list_transactions() {
            Ok(lines) => self.transactions = lines,
            Err(e) => {
                self.transactions.clear();
                self.report_store_error(&e);
            }
        }
        let max_scroll = self.transactions.len().saturating_sub(1);
        self.transaction_scroll = self.transaction_scroll.min(max_scroll);
    }

    pub(crate) fn refresh_dashboard(&mut self, tracker: &Tracker) {
        match tracker.compute_dashboard(&self.budget_input) {
            Ok(dash) => self.dashboard = Some(dash),
            Err(e) => {
                self.dashboard = None;
                self.report_store_error(&e);
            }
        }
    }

    pub(crate) fn refresh_breakdown(&mut self, tracker: &Tracker) {
        match tracker.compute_breakdown() {
            Ok(breakdown) => self.breakdown = breakdown,
            Err(e) => {
                self.breakdown = Breakdown::NoData;
                self.report_store_error(&e);
            }
        }
    }

    /// Keep the most recent rows in view after an append.
    fn scroll_to_latest(&mut self) {
        let page = self.visible_rows.max(1);
        self.transaction_scroll = self.transactions.len().saturating_sub(page);
    }

    fn report_store_error(&mut self, e: &StoreError) {
        error!(error = %e, "ledger operation failed");
        self.set_status(format!("Error: {e}"));
    }
}

#[cfg(test)]
#[path = "app_tests.rs"]
mod tests;
