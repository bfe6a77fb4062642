pub mod health;
pub mod users;

pub use health::check;
pub use users::{create, list, managed, remove, update};
