use crate::board::BoardState;
use crate::events::{Event, EventHandler};
use crate::form::{FormField, FormState};
use crate::ui;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;
use taskboard_core::{TaskboardError, TaskboardResult};
use taskboard_persistence::TaskStore;

/// Which controller currently receives input.
///
/// Board -> Form on the new-task key; Form -> Board on submit success or
/// cancel. The form state travels inside the variant, so switching modes is
/// a single assignment and handing the created task back is a plain method
/// call in the key handler.
pub enum Mode {
    Board,
    Form(FormState),
}

pub struct App {
    store: Arc<dyn TaskStore>,
    pub board: BoardState,
    pub mode: Mode,
    /// Last store failure, shown in the footer until the next key.
    pub notice: Option<String>,
    pub should_quit: bool,
}

impl App {
    pub fn new(store: Arc<dyn TaskStore>) -> Self {
        Self {
            store,
            board: BoardState::new(),
            mode: Mode::Board,
            notice: None,
            should_quit: false,
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    fn report(&mut self, action: &str, err: TaskboardError) {
        tracing::error!(%err, action, "store operation failed");
        self.notice = Some(format!("{} failed: {}", action, err));
    }

    /// Fully process one key event, including any store call it triggers.
    /// Store failures here are non-fatal: they land in the notice line.
    pub async fn handle_key(&mut self, key: KeyEvent) {
        self.notice = None;
        if matches!(self.mode, Mode::Board) {
            self.handle_board_key(key).await;
        } else {
            self.handle_form_key(key).await;
        }
    }

    async fn handle_board_key(&mut self, key: KeyEvent) {
        let store = Arc::clone(&self.store);
        match key.code {
            KeyCode::Char('q') => self.quit(),
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => self.quit(),
            KeyCode::Left | KeyCode::Char('h') => self.board.focus_prev(),
            KeyCode::Right | KeyCode::Char('l') => self.board.focus_next(),
            KeyCode::Up | KeyCode::Char('k') => self.board.select_prev(),
            KeyCode::Down | KeyCode::Char('j') => self.board.select_next(),
            KeyCode::Enter => {
                if let Err(err) = self.board.move_selected(store.as_ref()).await {
                    self.report("move task", err);
                }
            }
            KeyCode::Delete | KeyCode::Backspace => {
                if let Err(err) = self.board.delete_selected(store.as_ref()).await {
                    self.report("delete task", err);
                }
            }
            KeyCode::Char('n') => {
                self.mode = Mode::Form(FormState::new(self.board.focus));
            }
            KeyCode::Char('r') => {
                if let Err(err) = self.board.load(store.as_ref()).await {
                    self.report("reload board", err);
                }
            }
            _ => {}
        }
    }

    async fn handle_form_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit();
            return;
        }
        if key.code == KeyCode::Esc {
            tracing::debug!("form cancelled");
            self.mode = Mode::Board;
            return;
        }

        if key.code == KeyCode::Enter && !key.modifiers.contains(KeyModifiers::ALT) {
            let store = Arc::clone(&self.store);
            let Mode::Form(form) = &mut self.mode else {
                return;
            };
            match form.active {
                FormField::Title => form.advance_field(),
                FormField::Description => {
                    let submitted = form.submit(store.as_ref()).await;
                    match submitted {
                        Ok(task) => {
                            self.board.accept_created(task);
                            self.mode = Mode::Board;
                        }
                        Err(err) => self.report("create task", err),
                    }
                }
            }
            return;
        }

        let Mode::Form(form) = &mut self.mode else {
            return;
        };
        let multiline = form.active == FormField::Description;
        let field = form.active_input_mut();
        match key.code {
            KeyCode::Enter if multiline => field.insert_newline(),
            KeyCode::Char(c) => field.insert_char(c),
            KeyCode::Backspace => field.backspace(),
            KeyCode::Delete => field.delete(),
            KeyCode::Left => field.move_left(),
            KeyCode::Right => field.move_right(),
            KeyCode::Home => field.move_home(),
            KeyCode::End => field.move_end(),
            _ => {}
        }
    }

    pub async fn run(&mut self) -> TaskboardResult<()> {
        // The board cannot render without its seed data, so a store failure
        // here is fatal and surfaces before the terminal is taken over.
        let store = Arc::clone(&self.store);
        self.board.load(store.as_ref()).await?;

        // The terminal is restored whether the loop ends normally or with
        // an error, so a failure diagnostic prints on a usable screen.
        let mut terminal = setup_terminal()?;
        let result = self.event_loop(&mut terminal).await;
        restore_terminal(&mut terminal)?;
        result
    }

    async fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> TaskboardResult<()> {
        let mut events = EventHandler::new();

        while !self.should_quit {
            terminal.draw(|frame| ui::render(self, frame))?;

            match events.next().await {
                Some(Event::Key(key)) => self.handle_key(key).await,
                Some(Event::Tick) => {}
                None => break,
            }
        }

        Ok(())
    }
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>, io::Error> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<(), io::Error> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}
