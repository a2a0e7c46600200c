#![forbid(unsafe_code)]

pub mod engine;
pub mod error;
pub mod matching;
pub mod view;

pub use drill_core::Clock;

pub use engine::{LoadGeneration, SessionEngine, SessionStats};
pub use error::SessionError;
pub use matching::Verdict;
pub use view::SessionSnapshot;
