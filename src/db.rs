pub mod repository;
pub use repository::InMemoryRepository;
pub mod seed;
pub mod store;
pub use store::{Collection, Record};
