pub mod create_skill;
pub mod delete_skill;
pub mod get_skill;
pub mod list_skills;
pub mod update_skill;

pub use create_skill::{CreateSkillError, CreateSkillUseCase, ICreateSkillUseCase};
pub use delete_skill::{DeleteSkillError, DeleteSkillUseCase, IDeleteSkillUseCase};
pub use get_skill::{GetSkillError, GetSkillUseCase, IGetSkillUseCase};
pub use list_skills::{IListSkillsUseCase, ListSkillsError, ListSkillsUseCase};
pub use update_skill::{IUpdateSkillUseCase, UpdateSkillError, UpdateSkillUseCase};
