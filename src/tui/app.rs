use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::model::{TaskId, TaskStore};

use super::input;
use super::render;
use super::theme::Theme;

/// Terminal-boundary errors. The domain itself has no failure modes.
#[derive(Debug, thiserror::Error)]
pub enum TuiError {
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Which screen is currently displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// The task list
    List,
    /// Detail for a single task
    Detail(TaskId),
    /// The add-task form
    Add,
}

/// List screen state. Single source of truth for expansion — rows are
/// stateless renderers driven by this.
#[derive(Debug, Clone, Default)]
pub struct ListState {
    /// Cursor index into the task list
    pub cursor: usize,
    /// Scroll offset (first visible row)
    pub scroll_offset: usize,
    /// The row currently showing its description, if any. At most one.
    pub expanded: Option<TaskId>,
}

/// Which field of the add form has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Title,
    Description,
}

/// An uncommitted task staged while the Add screen is open.
#[derive(Debug, Clone, Default)]
pub struct Draft {
    pub title: String,
    pub description: String,
}

/// Add screen state: the draft plus text-input focus and cursor.
#[derive(Debug, Clone)]
pub struct AddState {
    pub draft: Draft,
    pub field: DraftField,
    /// Byte offset of the edit cursor within the focused field
    pub cursor: usize,
}

impl AddState {
    fn new() -> Self {
        AddState {
            draft: Draft::default(),
            field: DraftField::Title,
            cursor: 0,
        }
    }

    /// The text of the focused field.
    pub fn focused_text(&self) -> &str {
        match self.field {
            DraftField::Title => &self.draft.title,
            DraftField::Description => &self.draft.description,
        }
    }

    pub fn focused_text_mut(&mut self) -> &mut String {
        match self.field {
            DraftField::Title => &mut self.draft.title,
            DraftField::Description => &mut self.draft.description,
        }
    }
}

/// Main application state
pub struct App {
    pub store: TaskStore,
    pub view: View,
    pub list: ListState,
    /// Present exactly while the Add screen is open
    pub add: Option<AddState>,
    pub should_quit: bool,
    pub theme: Theme,
}

impl App {
    pub fn new(store: TaskStore) -> Self {
        App {
            store,
            view: View::List,
            list: ListState::default(),
            add: None,
            should_quit: false,
            theme: Theme::default(),
        }
    }

    /// The task under the list cursor.
    pub fn cursor_task_id(&self) -> Option<TaskId> {
        self.store.tasks().get(self.list.cursor).map(|t| t.id)
    }

    /// Keep the cursor inside the list after removals.
    pub fn clamp_cursor(&mut self) {
        let max = self.store.len().saturating_sub(1);
        if self.list.cursor > max {
            self.list.cursor = max;
        }
        if self.list.scroll_offset > self.list.cursor {
            self.list.scroll_offset = self.list.cursor;
        }
    }

    // --- Navigation transitions ---

    /// List → Add. Stages a fresh empty draft.
    pub fn open_add(&mut self) {
        self.add = Some(AddState::new());
        self.view = View::Add;
    }

    /// List → Detail. Collapses the expanded row on the way out.
    pub fn open_detail(&mut self, id: TaskId) {
        self.list.expanded = None;
        self.view = View::Detail(id);
    }

    /// Detail/Add → List.
    pub fn back_to_list(&mut self) {
        self.add = None;
        self.view = View::List;
    }

    /// Commit the draft and return to the list. An empty-after-trim title
    /// silently discards the draft — no validation error is surfaced.
    pub fn save_draft(&mut self) {
        if let Some(add) = self.add.take() {
            self.store.add(add.draft.title, add.draft.description);
        }
        self.back_to_list();
    }

    /// Discard the draft unconditionally and return to the list.
    pub fn cancel_draft(&mut self) {
        self.add = None;
        self.back_to_list();
    }

    // --- List screen operations ---

    /// Toggle expansion of the cursor row. Expanding a row collapses any
    /// other expanded row; at most one row shows its description.
    pub fn toggle_expanded(&mut self) {
        let Some(id) = self.cursor_task_id() else {
            return;
        };
        if self.list.expanded == Some(id) {
            self.list.expanded = None;
        } else {
            self.list.expanded = Some(id);
        }
    }

    /// Delete the cursor row. Clears expansion if the expanded row goes.
    pub fn delete_at_cursor(&mut self) {
        let Some(id) = self.cursor_task_id() else {
            return;
        };
        self.store.remove(id);
        if self.list.expanded == Some(id) {
            self.list.expanded = None;
        }
        self.clamp_cursor();
    }
}

/// Run the TUI application
pub fn run(empty: bool) -> Result<(), TuiError> {
    let store = if empty {
        TaskStore::new()
    } else {
        TaskStore::seeded()
    };
    let mut app = App::new(store);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), TuiError> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            input::handle_key(app, key);
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
