use actix_web::web;
use std::sync::Arc;

use crate::auth::application::auth_use_cases::AuthUseCases;
use crate::auth::application::use_cases::login_user::ILoginUserUseCase;
use crate::certificate::application::certificate_use_cases::CertificateUseCases;
use crate::chat::application::chat_state::ChatState;
use crate::chat::application::ports::outgoing::ChatGateway;
use crate::contact::application::contact_use_cases::ContactUseCases;
use crate::experience::application::experience_use_cases::ExperienceUseCases;
use crate::project::application::project_use_cases::ProjectUseCases;
use crate::settings::application::settings_use_cases::SettingsUseCases;
use crate::skill::application::skill_use_cases::SkillUseCases;
use crate::tests::support::stubs::*;
use crate::AppState;

/// Builds an `AppState` where every use case is a stub; tests swap in the
/// one bundle they exercise.
pub struct TestAppStateBuilder {
    auth: AuthUseCases,
    project: ProjectUseCases,
    skill: SkillUseCases,
    experience: ExperienceUseCases,
    certificate: CertificateUseCases,
    settings: SettingsUseCases,
    contact: ContactUseCases,
    chat: ChatState,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            auth: stub_auth_use_cases(),
            project: stub_project_use_cases(),
            skill: stub_skill_use_cases(),
            experience: stub_experience_use_cases(),
            certificate: stub_certificate_use_cases(),
            settings: stub_settings_use_cases(),
            contact: stub_contact_use_cases(),
            chat: stub_chat_state(),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_login_use_case(mut self, uc: impl ILoginUserUseCase + Send + Sync + 'static) -> Self {
        self.auth.login = Arc::new(uc);
        self
    }

    pub fn with_project(mut self, project: ProjectUseCases) -> Self {
        self.project = project;
        self
    }

    pub fn with_skill(mut self, skill: SkillUseCases) -> Self {
        self.skill = skill;
        self
    }

    pub fn with_experience(mut self, experience: ExperienceUseCases) -> Self {
        self.experience = experience;
        self
    }

    pub fn with_certificate(mut self, certificate: CertificateUseCases) -> Self {
        self.certificate = certificate;
        self
    }

    pub fn with_settings(mut self, settings: SettingsUseCases) -> Self {
        self.settings = settings;
        self
    }

    pub fn with_contact(mut self, contact: ContactUseCases) -> Self {
        self.contact = contact;
        self
    }

    pub fn with_chat_gateway(mut self, gateway: Arc<dyn ChatGateway + Send + Sync>) -> Self {
        self.chat.gateway = gateway;
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            auth: self.auth,
            project: self.project,
            skill: self.skill,
            experience: self.experience,
            certificate: self.certificate,
            settings: self.settings,
            contact: self.contact,
            chat: self.chat,
        })
    }
}
