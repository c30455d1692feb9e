pub mod create_project;
pub mod delete_project;
pub mod get_project;
pub mod list_projects;
pub mod update_project;

#[cfg(test)]
pub(crate) mod test_support;

pub use create_project::{CreateProjectError, CreateProjectUseCase, ICreateProjectUseCase};
pub use delete_project::{DeleteProjectError, DeleteProjectUseCase, IDeleteProjectUseCase};
pub use get_project::{GetProjectError, GetProjectUseCase, IGetProjectUseCase};
pub use list_projects::{IListProjectsUseCase, ListProjectsError, ListProjectsUseCase};
pub use update_project::{IUpdateProjectUseCase, UpdateProjectError, UpdateProjectUseCase};
