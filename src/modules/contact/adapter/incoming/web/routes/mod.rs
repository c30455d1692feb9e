mod create_contact_submission;
mod delete_contact_submission;
mod get_contact_submissions;
mod mark_contact_submission_read;

pub use create_contact_submission::create_contact_submission_handler;
pub use delete_contact_submission::delete_contact_submission_handler;
pub use get_contact_submissions::get_contact_submissions_handler;
pub use mark_contact_submission_read::mark_contact_submission_read_handler;
