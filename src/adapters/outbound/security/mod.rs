/// Security adapters providing the caller's permissions
mod static_user_session;

pub use static_user_session::StaticUserSession;
