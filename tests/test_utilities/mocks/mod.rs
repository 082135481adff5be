/// Mock implementations for testing
mod mock_progress_reporter;
mod mock_user_session;

pub use mock_progress_reporter::MockProgressReporter;
pub use mock_user_session::MockUserSession;
