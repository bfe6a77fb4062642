pub mod memory_storage;
pub mod seed;
pub mod user_store;

pub use memory_storage::MemoryUserStore;
pub use seed::predefined_users;
pub use user_store::UserStore;
