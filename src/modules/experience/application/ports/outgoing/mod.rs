pub mod experience_repository;

pub use experience_repository::{
    CreateExperienceData, ExperienceRecord, ExperienceRepository, ExperienceRepositoryError,
    ExperienceType, UpdateExperienceData,
};
