mod login_user;
mod verify_session;

pub use login_user::login_user_handler;
pub use verify_session::verify_session_handler;
