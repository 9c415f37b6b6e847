pub mod entities;
pub mod ports;

pub use entities::{FeedbackRecord, FeedbackType};
pub use ports::FeedbackRepository;
