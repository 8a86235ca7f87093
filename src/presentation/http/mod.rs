pub mod error;
pub mod health;
pub mod notes;
