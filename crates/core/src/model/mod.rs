mod card;
mod ids;

pub use card::{Card, CardDraft, CardError, Score};
pub use ids::{SetId, SetIdError};
