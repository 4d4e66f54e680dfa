pub mod app;
pub mod board;
pub mod column;
pub mod events;
pub mod form;
pub mod selection;
pub mod theme;
pub mod ui;

pub use app::{App, Mode};
pub use board::BoardState;
pub use form::{FormField, FormState};
