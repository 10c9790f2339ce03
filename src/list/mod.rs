pub mod error;
pub mod manager;
pub mod session;

pub use error::ListError;
pub use manager::ItemListManager;
pub use session::EditSession;
