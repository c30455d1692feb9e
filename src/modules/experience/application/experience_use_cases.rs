use std::sync::Arc;

use crate::experience::application::use_cases::{
    ICreateExperienceUseCase, IDeleteExperienceUseCase, IGetExperienceUseCase,
    IListExperiencesUseCase, IUpdateExperienceUseCase,
};

#[derive(Clone)]
pub struct ExperienceUseCases {
    pub list: Arc<dyn IListExperiencesUseCase + Send + Sync>,
    pub get: Arc<dyn IGetExperienceUseCase + Send + Sync>,
    pub create: Arc<dyn ICreateExperienceUseCase + Send + Sync>,
    pub update: Arc<dyn IUpdateExperienceUseCase + Send + Sync>,
    pub delete: Arc<dyn IDeleteExperienceUseCase + Send + Sync>,
}
