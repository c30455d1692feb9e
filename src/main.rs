pub mod modules;
pub use modules::auth;
pub use modules::certificate;
pub use modules::chat;
pub use modules::contact;
pub use modules::email;
pub use modules::experience;
pub use modules::project;
pub use modules::settings;
pub use modules::skill;
pub mod health;
pub mod shared;

use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::adapter::outgoing::security::Argon2Hasher;
use crate::auth::adapter::outgoing::user_query_postgres::UserQueryPostgres;
use crate::auth::application::auth_use_cases::AuthUseCases;
use crate::auth::application::ports::outgoing::TokenProvider;
use crate::auth::application::use_cases::login_user::LoginUserUseCase;

use crate::certificate::adapter::outgoing::certificate_repository_postgres::CertificateRepositoryPostgres;
use crate::certificate::application::certificate_use_cases::CertificateUseCases;
use crate::certificate::application::use_cases::{
    CreateCertificateUseCase, DeleteCertificateUseCase, GetCertificateUseCase,
    ListCertificatesUseCase, UpdateCertificateUseCase,
};

use crate::chat::adapter::outgoing::HttpChatGateway;
use crate::chat::application::chat_state::ChatState;

use crate::contact::adapter::outgoing::contact_repository_postgres::ContactRepositoryPostgres;
use crate::contact::application::contact_use_cases::ContactUseCases;
use crate::contact::application::use_cases::{
    DeleteSubmissionUseCase, ListSubmissionsUseCase, MarkSubmissionReadUseCase,
    SubmitContactUseCase,
};

use crate::email::adapter::outgoing::SmtpEmailSender;
use crate::email::application::ports::outgoing::ContactEmailNotifier;
use crate::email::application::services::ContactEmailService;

use crate::experience::adapter::outgoing::experience_repository_postgres::ExperienceRepositoryPostgres;
use crate::experience::application::experience_use_cases::ExperienceUseCases;
use crate::experience::application::use_cases::{
    CreateExperienceUseCase, DeleteExperienceUseCase, GetExperienceUseCase, ListExperiencesUseCase,
    UpdateExperienceUseCase,
};

use crate::project::adapter::outgoing::project_repository_postgres::ProjectRepositoryPostgres;
use crate::project::application::project_use_cases::ProjectUseCases;
use crate::project::application::use_cases::{
    CreateProjectUseCase, DeleteProjectUseCase, GetProjectUseCase, ListProjectsUseCase,
    UpdateProjectUseCase,
};

use crate::settings::adapter::outgoing::settings_repository_postgres::{
    NotificationSettingsPostgres, ProfileSettingsPostgres, ResumeSettingsPostgres,
};
use crate::settings::application::settings_use_cases::SettingsUseCases;
use crate::settings::application::use_cases::{
    GetNotificationSettingsUseCase, GetProfileSettingsUseCase, GetResumeSettingsUseCase,
    UpdateNotificationSettingsUseCase, UpdateProfileSettingsUseCase, UpdateResumeSettingsUseCase,
};

use crate::skill::adapter::outgoing::skill_repository_postgres::SkillRepositoryPostgres;
use crate::skill::application::skill_use_cases::SkillUseCases;
use crate::skill::application::use_cases::{
    CreateSkillUseCase, DeleteSkillUseCase, GetSkillUseCase, ListSkillsUseCase, UpdateSkillUseCase,
};

use crate::shared::api::custom_json_config;
use crate::shared::config::AppConfig;

use actix_web::{web, App, HttpServer};
use sea_orm::{ConnectOptions, Database};
use std::env;
use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub auth: AuthUseCases,
    pub project: ProjectUseCases,
    pub skill: SkillUseCases,
    pub experience: ExperienceUseCases,
    pub certificate: CertificateUseCases,
    pub settings: SettingsUseCases,
    pub contact: ContactUseCases,
    pub chat: ChatState,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Environment variable loading: .env.{environment} first, then .env
    let environment = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
    let env_file = format!(".env.{}", environment);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let config = AppConfig::from_env().expect("Invalid configuration");

    // SMTP SETUP
    let from_email = env::var("EMAIL_FROM").expect("EMAIL_FROM not set");
    let smtp_sender = if env::var("RUST_ENV").as_deref() == Ok("test") {
        // Local Mailpit
        let host = env::var("SMTP_HOST").unwrap_or_else(|_| "localhost".to_string());
        let port: u16 = env::var("SMTP_PORT")
            .unwrap_or_else(|_| "1025".to_string())
            .parse()
            .expect("Invalid SMTP_PORT");

        SmtpEmailSender::new_local(&host, port, &from_email)
    } else {
        let smtp_server = env::var("SMTP_SERVER").expect("SMTP_SERVER not set");
        let smtp_user = env::var("SMTP_USERNAME").expect("SMTP_USERNAME not set");
        let smtp_pass = env::var("SMTP_PASSWORD").expect("SMTP_PASSWORD not set");

        SmtpEmailSender::new(&smtp_server, &smtp_user, &smtp_pass, &from_email)
            .expect("Invalid SMTP relay configuration")
    };

    let server_addr = config.server_addr();
    info!("Server run on: {}", server_addr);

    // Database connection
    let mut opt = ConnectOptions::new(config.database_url.clone());
    opt.max_connections(50)
        .min_connections(10)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .expect("Failed to connect to database");

    let db_arc = Arc::new(conn);

    // Auth
    let jwt_service = JwtTokenService::new(JwtConfig::from_env());
    let argon2_hasher = Argon2Hasher::from_env();
    let user_query = UserQueryPostgres::new(Arc::clone(&db_arc));

    let auth = AuthUseCases {
        login: Arc::new(LoginUserUseCase::new(
            user_query,
            Arc::new(argon2_hasher),
            Arc::new(jwt_service.clone()),
        )),
    };

    // Content repositories and use cases
    let project_repo = ProjectRepositoryPostgres::new(Arc::clone(&db_arc));
    let project = ProjectUseCases {
        list: Arc::new(ListProjectsUseCase::new(project_repo.clone())),
        get: Arc::new(GetProjectUseCase::new(project_repo.clone())),
        create: Arc::new(CreateProjectUseCase::new(project_repo.clone())),
        update: Arc::new(UpdateProjectUseCase::new(project_repo.clone())),
        delete: Arc::new(DeleteProjectUseCase::new(project_repo)),
    };

    let skill_repo = SkillRepositoryPostgres::new(Arc::clone(&db_arc));
    let skill = SkillUseCases {
        list: Arc::new(ListSkillsUseCase::new(skill_repo.clone())),
        get: Arc::new(GetSkillUseCase::new(skill_repo.clone())),
        create: Arc::new(CreateSkillUseCase::new(skill_repo.clone())),
        update: Arc::new(UpdateSkillUseCase::new(skill_repo.clone())),
        delete: Arc::new(DeleteSkillUseCase::new(skill_repo)),
    };

    let experience_repo = ExperienceRepositoryPostgres::new(Arc::clone(&db_arc));
    let experience = ExperienceUseCases {
        list: Arc::new(ListExperiencesUseCase::new(experience_repo.clone())),
        get: Arc::new(GetExperienceUseCase::new(experience_repo.clone())),
        create: Arc::new(CreateExperienceUseCase::new(experience_repo.clone())),
        update: Arc::new(UpdateExperienceUseCase::new(experience_repo.clone())),
        delete: Arc::new(DeleteExperienceUseCase::new(experience_repo)),
    };

    let certificate_repo = CertificateRepositoryPostgres::new(Arc::clone(&db_arc));
    let certificate = CertificateUseCases {
        list: Arc::new(ListCertificatesUseCase::new(certificate_repo.clone())),
        get: Arc::new(GetCertificateUseCase::new(certificate_repo.clone())),
        create: Arc::new(CreateCertificateUseCase::new(certificate_repo.clone())),
        update: Arc::new(UpdateCertificateUseCase::new(certificate_repo.clone())),
        delete: Arc::new(DeleteCertificateUseCase::new(certificate_repo)),
    };

    // Singleton settings
    let profile_repo = ProfileSettingsPostgres::new(Arc::clone(&db_arc));
    let resume_repo = ResumeSettingsPostgres::new(Arc::clone(&db_arc));
    let notification_repo = NotificationSettingsPostgres::new(Arc::clone(&db_arc));

    let settings = SettingsUseCases {
        get_profile: Arc::new(GetProfileSettingsUseCase::new(profile_repo.clone())),
        update_profile: Arc::new(UpdateProfileSettingsUseCase::new(profile_repo)),
        get_resume: Arc::new(GetResumeSettingsUseCase::new(resume_repo.clone())),
        update_resume: Arc::new(UpdateResumeSettingsUseCase::new(resume_repo)),
        get_notification: Arc::new(GetNotificationSettingsUseCase::new(
            notification_repo.clone(),
        )),
        update_notification: Arc::new(UpdateNotificationSettingsUseCase::new(
            notification_repo.clone(),
        )),
    };

    // Contact pipeline: persist first, then best-effort mail
    let contact_notifier: Arc<dyn ContactEmailNotifier + Send + Sync> =
        Arc::new(ContactEmailService::new(smtp_sender));
    let contact_repo = ContactRepositoryPostgres::new(Arc::clone(&db_arc));

    let contact = ContactUseCases {
        submit: Arc::new(SubmitContactUseCase::new(
            contact_repo.clone(),
            Arc::new(notification_repo),
            contact_notifier,
        )),
        list: Arc::new(ListSubmissionsUseCase::new(contact_repo.clone())),
        mark_read: Arc::new(MarkSubmissionReadUseCase::new(contact_repo.clone())),
        delete: Arc::new(DeleteSubmissionUseCase::new(contact_repo)),
    };

    // Chat proxy
    let chat = ChatState {
        gateway: Arc::new(HttpChatGateway::new(config.chat.clone())),
        client_key: config.chat.client_key.clone(),
    };

    let state = AppState {
        auth,
        project,
        skill,
        experience,
        certificate,
        settings,
        contact,
        chat,
    };

    let token_provider_arc: Arc<dyn TokenProvider + Send + Sync> = Arc::new(jwt_service);
    let db_for_server = Arc::clone(&db_arc);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider_arc)))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .app_data(custom_json_config())
            .configure(init_routes)
    })
    .bind(server_addr)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Auth
    cfg.service(crate::auth::adapter::incoming::web::routes::login_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::verify_session_handler);
    // Projects
    cfg.service(crate::project::adapter::incoming::web::routes::get_projects_handler);
    cfg.service(crate::project::adapter::incoming::web::routes::get_single_project_handler);
    cfg.service(crate::project::adapter::incoming::web::routes::create_project_handler);
    cfg.service(crate::project::adapter::incoming::web::routes::update_project_handler);
    cfg.service(crate::project::adapter::incoming::web::routes::delete_project_handler);
    // Skills
    cfg.service(crate::skill::adapter::incoming::web::routes::get_skills_handler);
    cfg.service(crate::skill::adapter::incoming::web::routes::get_single_skill_handler);
    cfg.service(crate::skill::adapter::incoming::web::routes::create_skill_handler);
    cfg.service(crate::skill::adapter::incoming::web::routes::update_skill_handler);
    cfg.service(crate::skill::adapter::incoming::web::routes::delete_skill_handler);
    // Experiences
    cfg.service(crate::experience::adapter::incoming::web::routes::get_experiences_handler);
    cfg.service(crate::experience::adapter::incoming::web::routes::get_single_experience_handler);
    cfg.service(crate::experience::adapter::incoming::web::routes::create_experience_handler);
    cfg.service(crate::experience::adapter::incoming::web::routes::update_experience_handler);
    cfg.service(crate::experience::adapter::incoming::web::routes::delete_experience_handler);
    // Certificates
    cfg.service(crate::certificate::adapter::incoming::web::routes::get_certificates_handler);
    cfg.service(crate::certificate::adapter::incoming::web::routes::get_single_certificate_handler);
    cfg.service(crate::certificate::adapter::incoming::web::routes::create_certificate_handler);
    cfg.service(crate::certificate::adapter::incoming::web::routes::update_certificate_handler);
    cfg.service(crate::certificate::adapter::incoming::web::routes::delete_certificate_handler);
    // Settings singletons
    cfg.service(crate::settings::adapter::incoming::web::routes::get_profile_settings_handler);
    cfg.service(crate::settings::adapter::incoming::web::routes::update_profile_settings_handler);
    cfg.service(crate::settings::adapter::incoming::web::routes::get_resume_settings_handler);
    cfg.service(crate::settings::adapter::incoming::web::routes::update_resume_settings_handler);
    cfg.service(crate::settings::adapter::incoming::web::routes::get_notification_settings_handler);
    cfg.service(
        crate::settings::adapter::incoming::web::routes::update_notification_settings_handler,
    );
    // Contact
    cfg.service(crate::contact::adapter::incoming::web::routes::create_contact_submission_handler);
    cfg.service(crate::contact::adapter::incoming::web::routes::get_contact_submissions_handler);
    cfg.service(
        crate::contact::adapter::incoming::web::routes::mark_contact_submission_read_handler,
    );
    cfg.service(crate::contact::adapter::incoming::web::routes::delete_contact_submission_handler);
    // Chat
    cfg.service(crate::chat::adapter::incoming::web::routes::stream_chat_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
