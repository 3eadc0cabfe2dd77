pub mod completion;

pub use completion::{ChatService, FALLBACK_MESSAGE};
