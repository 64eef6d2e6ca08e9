//! User store implementations and startup seeding

mod memory;
mod seed;

pub use memory::InMemoryUserStore;
pub use seed::seed_users;
