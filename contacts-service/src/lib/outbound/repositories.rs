pub mod contact;
pub mod memory;
pub mod user;

pub use contact::PostgresContactRepository;
pub use memory::InMemoryContactRepository;
pub use memory::InMemoryCredentialStore;
pub use user::PostgresCredentialStore;
