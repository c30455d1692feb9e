use std::sync::Arc;

use crate::auth::application::use_cases::ILoginUserUseCase;

#[derive(Clone)]
pub struct AuthUseCases {
    pub login: Arc<dyn ILoginUserUseCase + Send + Sync>,
}
