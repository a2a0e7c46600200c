#![forbid(unsafe_code)]

pub mod model;
pub mod store;
pub mod time;

pub use model::{Card, CardDraft, CardError, Score, SetId, SetIdError};
pub use store::{CardStore, StoreError};
pub use time::Clock;
