//! Process-local adapters used when no database is configured.
//!
//! State lives for the lifetime of the process. Each store guards its map
//! with a single mutex, which is also what makes user creation atomic.

mod applications;
mod users;

pub use applications::InMemoryApplicationRepository;
pub use users::InMemoryUserRepository;
