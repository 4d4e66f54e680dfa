use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind};
use std::time::Duration;
use tokio::sync::mpsc;

#[derive(Debug, Clone)]
pub enum Event {
    Key(KeyEvent),
    Tick,
}

/// Pumps crossterm input into an async channel.
///
/// A dedicated thread owns the blocking poll/read pair; the reader thread
/// exits once the receiving side is dropped.
pub struct EventHandler {
    rx: mpsc::UnboundedReceiver<Event>,
}

impl EventHandler {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();

        std::thread::spawn(move || loop {
            let ready = event::poll(Duration::from_millis(200)).unwrap_or(false);
            let message = if ready {
                match event::read() {
                    // Windows terminals also report releases; only presses
                    // count as input.
                    Ok(CrosstermEvent::Key(key)) if key.kind == KeyEventKind::Press => {
                        Some(Event::Key(key))
                    }
                    Ok(_) => None,
                    Err(_) => break,
                }
            } else {
                Some(Event::Tick)
            };

            if let Some(message) = message {
                if tx.send(message).is_err() {
                    break;
                }
            }
        });

        Self { rx }
    }

    pub async fn next(&mut self) -> Option<Event> {
        self.rx.recv().await
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}
