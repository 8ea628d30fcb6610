//! Event routing and the Lambda binding

pub mod handler;
pub mod router;

// Re-export the main handler for convenience
pub use handler::handler;
pub use router::Skill;
