pub mod skill_repository;

pub use skill_repository::{
    CreateSkillData, SkillCategory, SkillRecord, SkillRepository, SkillRepositoryError,
    UpdateSkillData,
};
