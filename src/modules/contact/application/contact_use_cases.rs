use std::sync::Arc;

use crate::contact::application::use_cases::{
    IDeleteSubmissionUseCase, IListSubmissionsUseCase, IMarkSubmissionReadUseCase,
    ISubmitContactUseCase,
};

#[derive(Clone)]
pub struct ContactUseCases {
    pub submit: Arc<dyn ISubmitContactUseCase + Send + Sync>,
    pub list: Arc<dyn IListSubmissionsUseCase + Send + Sync>,
    pub mark_read: Arc<dyn IMarkSubmissionReadUseCase + Send + Sync>,
    pub delete: Arc<dyn IDeleteSubmissionUseCase + Send + Sync>,
}
