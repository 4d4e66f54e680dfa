pub mod store;
pub mod traits;

pub use store::SqliteTaskStore;
pub use traits::TaskStore;
