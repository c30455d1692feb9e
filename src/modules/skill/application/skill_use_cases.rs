use std::sync::Arc;

use crate::skill::application::use_cases::{
    ICreateSkillUseCase, IDeleteSkillUseCase, IGetSkillUseCase, IListSkillsUseCase,
    IUpdateSkillUseCase,
};

#[derive(Clone)]
pub struct SkillUseCases {
    pub list: Arc<dyn IListSkillsUseCase + Send + Sync>,
    pub get: Arc<dyn IGetSkillUseCase + Send + Sync>,
    pub create: Arc<dyn ICreateSkillUseCase + Send + Sync>,
    pub update: Arc<dyn IUpdateSkillUseCase + Send + Sync>,
    pub delete: Arc<dyn IDeleteSkillUseCase + Send + Sync>,
}
