pub mod entities;
pub mod ports;

pub use entities::{LogicalDb, Session};
pub use ports::SessionProvider;
