//! Database models.

pub mod character;
pub mod grabber;
pub mod user_collection;

pub use character::Character;
pub use grabber::Grabber;
pub use user_collection::UserCollection;
