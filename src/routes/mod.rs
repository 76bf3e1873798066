// Export all route modules
pub mod jobs;
pub mod session;

// Re-export all route handlers for easy importing
pub use jobs::*;
pub use session::*;
