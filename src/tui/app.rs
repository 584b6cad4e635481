use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::io::{Store, read_config};
use crate::model::TaskList;

use super::input;
use super::render;
use super::theme::Theme;

/// Current interaction mode. Modes that collect text carry their buffer
/// with them, so a half-typed title cannot leak into another mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Browsing the list
    Normal,
    /// Typing the title of a new task
    Inserting { buffer: String },
    /// Retyping the title of the task at index `target`
    Editing { buffer: String, target: usize },
    /// Waiting for y/n on deleting the task under the cursor
    ConfirmingDelete,
}

/// Main application state
pub struct App {
    pub tasks: TaskList,
    pub store: Store,
    /// Index of the selected task (0 when the list is empty)
    pub cursor: usize,
    pub mode: Mode,
    /// One-line warning shown in the status row until the next key press
    pub notice: Option<String>,
    pub should_quit: bool,
    pub theme: Theme,
}

impl App {
    /// Build the app over `store`, loading whatever it holds. Load problems
    /// degrade to an empty list plus a notice; only a missing home
    /// directory (handled before this point) is fatal.
    pub fn new(store: Store) -> Self {
        let theme = Theme::from_config(&read_config(store.dir()));
        let (tasks, notice) = store.load_or_empty();

        App {
            tasks: TaskList::from_tasks(tasks),
            store,
            cursor: 0,
            mode: Mode::Normal,
            notice,
            should_quit: false,
            theme,
        }
    }

    /// Write the full list through to disk. A failed save keeps the
    /// in-memory change and raises a notice rather than aborting.
    pub fn persist(&mut self) {
        if let Err(e) = self.store.save(self.tasks.tasks()) {
            self.notice = Some(format!("save failed: {}", e));
        }
    }

    /// Pull the cursor back onto a valid row after a removal
    pub fn clamp_cursor(&mut self) {
        if self.cursor >= self.tasks.len() {
            self.cursor = self.tasks.len().saturating_sub(1);
        }
    }

    /// Title of the task under the cursor, if any
    pub fn selected_title(&self) -> Option<&str> {
        self.tasks.get(self.cursor).map(|t| t.title.as_str())
    }
}

/// Run the TUI application
pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let store = Store::open_default()?;
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

    // Run event loop
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
) -> Result<(), Box<dyn std::error::Error>> {
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
