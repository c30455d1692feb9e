pub mod delete_submission;
pub mod list_submissions;
pub mod mark_submission_read;
pub mod submit_contact;

#[cfg(test)]
pub(crate) mod test_support;

pub use delete_submission::{
    DeleteSubmissionError, DeleteSubmissionUseCase, IDeleteSubmissionUseCase,
};
pub use list_submissions::{
    ContactInbox, IListSubmissionsUseCase, ListSubmissionsError, ListSubmissionsUseCase,
};
pub use mark_submission_read::{
    IMarkSubmissionReadUseCase, MarkSubmissionReadError, MarkSubmissionReadUseCase,
};
pub use submit_contact::{
    EmailDispatchStatus, ISubmitContactUseCase, SubmitContactError, SubmitContactResult,
    SubmitContactUseCase,
};
