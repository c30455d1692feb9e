pub mod create_experience;
pub mod delete_experience;
pub mod get_experience;
pub mod list_experiences;
pub mod update_experience;

pub use create_experience::{
    CreateExperienceError, CreateExperienceUseCase, ICreateExperienceUseCase,
};
pub use delete_experience::{
    DeleteExperienceError, DeleteExperienceUseCase, IDeleteExperienceUseCase,
};
pub use get_experience::{GetExperienceError, GetExperienceUseCase, IGetExperienceUseCase};
pub use list_experiences::{IListExperiencesUseCase, ListExperiencesError, ListExperiencesUseCase};
pub use update_experience::{
    IUpdateExperienceUseCase, UpdateExperienceError, UpdateExperienceUseCase,
};
