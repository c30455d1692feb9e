use std::sync::Arc;

use crate::project::application::use_cases::{
    ICreateProjectUseCase, IDeleteProjectUseCase, IGetProjectUseCase, IListProjectsUseCase,
    IUpdateProjectUseCase,
};

#[derive(Clone)]
pub struct ProjectUseCases {
    pub list: Arc<dyn IListProjectsUseCase + Send + Sync>,
    pub get: Arc<dyn IGetProjectUseCase + Send + Sync>,
    pub create: Arc<dyn ICreateProjectUseCase + Send + Sync>,
    pub update: Arc<dyn IUpdateProjectUseCase + Send + Sync>,
    pub delete: Arc<dyn IDeleteProjectUseCase + Send + Sync>,
}
