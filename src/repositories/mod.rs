mod contact_table;
mod file_contact_repository;
mod memory_contact_repository;
mod traits;

pub use file_contact_repository::FileContactRepository;
pub use memory_contact_repository::InMemoryContactRepository;
pub use traits::ContactRepository;
