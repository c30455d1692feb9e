//! Hand-rolled stubs backing `TestAppStateBuilder`. Route tests override the
//! one use case they exercise; everything else answers with a benign default.

use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use tokio::sync::mpsc;
use uuid::Uuid;

use crate::auth::application::auth_use_cases::AuthUseCases;
use crate::auth::application::use_cases::login_user::{
    ILoginUserUseCase, LoginError, LoginRequest, LoginUserResponse,
};
use crate::certificate::application::certificate_use_cases::CertificateUseCases;
use crate::certificate::application::ports::outgoing::{
    CertificateRecord, CreateCertificateData, UpdateCertificateData,
};
use crate::certificate::application::use_cases::{
    CreateCertificateError, DeleteCertificateError, GetCertificateError, ICreateCertificateUseCase,
    IDeleteCertificateUseCase, IGetCertificateUseCase, IListCertificatesUseCase,
    IUpdateCertificateUseCase, ListCertificatesError, UpdateCertificateError,
};
use crate::chat::application::chat_state::ChatState;
use crate::chat::application::ports::outgoing::{
    ChatGateway, GatewayError, GatewayEvent, OutboundMessage,
};
use crate::contact::application::contact_use_cases::ContactUseCases;
use crate::contact::application::ports::outgoing::ContactSubmissionRecord;
use crate::contact::application::use_cases::{
    ContactInbox, DeleteSubmissionError, EmailDispatchStatus, IDeleteSubmissionUseCase,
    IListSubmissionsUseCase, IMarkSubmissionReadUseCase, ISubmitContactUseCase,
    ListSubmissionsError, MarkSubmissionReadError, SubmitContactError, SubmitContactResult,
};
use crate::experience::application::experience_use_cases::ExperienceUseCases;
use crate::experience::application::ports::outgoing::{
    CreateExperienceData, ExperienceRecord, ExperienceType, UpdateExperienceData,
};
use crate::experience::application::use_cases::{
    CreateExperienceError, DeleteExperienceError, GetExperienceError, ICreateExperienceUseCase,
    IDeleteExperienceUseCase, IGetExperienceUseCase, IListExperiencesUseCase,
    IUpdateExperienceUseCase, ListExperiencesError, UpdateExperienceError,
};
use crate::contact::application::ports::outgoing::CreateContactSubmissionData;
use crate::project::application::ports::outgoing::{
    CreateProjectData, ProjectRecord, UpdateProjectData,
};
use crate::project::application::project_use_cases::ProjectUseCases;
use crate::project::application::use_cases::{
    CreateProjectError, DeleteProjectError, GetProjectError, ICreateProjectUseCase,
    IDeleteProjectUseCase, IGetProjectUseCase, IListProjectsUseCase, IUpdateProjectUseCase,
    ListProjectsError, UpdateProjectError,
};
use crate::settings::application::ports::outgoing::{
    NotificationSettingsRecord, ProfileSettingsRecord, ResumeSettingsRecord,
    UpdateNotificationSettingsData, UpdateProfileSettingsData, UpdateResumeSettingsData,
};
use crate::settings::application::settings_use_cases::SettingsUseCases;
use crate::settings::application::use_cases::{
    GetSettingsError, IGetNotificationSettingsUseCase, IGetProfileSettingsUseCase,
    IGetResumeSettingsUseCase, IUpdateNotificationSettingsUseCase, IUpdateProfileSettingsUseCase,
    IUpdateResumeSettingsUseCase, UpdateNotificationSettingsError, UpdateProfileSettingsError,
    UpdateResumeSettingsError,
};
use crate::skill::application::ports::outgoing::{
    CreateSkillData, SkillCategory, SkillRecord, UpdateSkillData,
};
use crate::skill::application::skill_use_cases::SkillUseCases;
use crate::skill::application::use_cases::{
    CreateSkillError, DeleteSkillError, GetSkillError, ICreateSkillUseCase, IDeleteSkillUseCase,
    IGetSkillUseCase, IListSkillsUseCase, IUpdateSkillUseCase, ListSkillsError, UpdateSkillError,
};

pub const TEST_CLIENT_KEY: &str = "test-client-key";

// ============================================================================
// Samples
// ============================================================================

pub fn sample_project_record(title: &str, display_order: i32) -> ProjectRecord {
    let now = Utc::now();
    ProjectRecord {
        id: Uuid::new_v4(),
        title: title.to_string(),
        description: "desc".to_string(),
        image_url: None,
        tech_stack: vec!["Rust".to_string()],
        github_url: Some("https://github.com/x/y".to_string()),
        live_url: None,
        featured: false,
        display_order,
        created_at: now,
        updated_at: now,
    }
}

pub fn sample_skill_record(name: &str, display_order: i32) -> SkillRecord {
    let now = Utc::now();
    SkillRecord {
        id: Uuid::new_v4(),
        name: name.to_string(),
        category: SkillCategory::Backend,
        proficiency: 90,
        icon: None,
        display_order,
        created_at: now,
        updated_at: now,
    }
}

pub fn sample_experience_record(title: &str, display_order: i32) -> ExperienceRecord {
    let now = Utc::now();
    ExperienceRecord {
        id: Uuid::new_v4(),
        title: title.to_string(),
        company: "Acme".to_string(),
        location: Some("Remote".to_string()),
        period: "2023 - Present".to_string(),
        description: vec!["Did things".to_string()],
        technologies: vec!["Rust".to_string()],
        experience_type: ExperienceType::Job,
        is_current: true,
        display_order,
        created_at: now,
        updated_at: now,
    }
}

pub fn sample_submission_record() -> ContactSubmissionRecord {
    ContactSubmissionRecord {
        id: Uuid::new_v4(),
        name: "Ann".to_string(),
        email: "ann@x.com".to_string(),
        subject: "Hi".to_string(),
        message: "Interested in a project".to_string(),
        is_read: false,
        created_at: Utc::now(),
    }
}

pub fn sample_submit_result() -> SubmitContactResult {
    SubmitContactResult {
        submission: sample_submission_record(),
        owner_notification: EmailDispatchStatus::Sent,
        submitter_confirmation: EmailDispatchStatus::Skipped,
    }
}

// ============================================================================
// Auth
// ============================================================================

pub struct StubLoginUseCase;

#[async_trait]
impl ILoginUserUseCase for StubLoginUseCase {
    async fn execute(&self, _request: LoginRequest) -> Result<LoginUserResponse, LoginError> {
        Err(LoginError::InvalidCredentials)
    }
}

// ============================================================================
// Project
// ============================================================================

pub struct StubListProjectsUseCase {
    result: Option<Vec<ProjectRecord>>,
}

impl StubListProjectsUseCase {
    pub fn success(rows: Vec<ProjectRecord>) -> Self {
        Self { result: Some(rows) }
    }

    pub fn failing() -> Self {
        Self { result: None }
    }
}

#[async_trait]
impl IListProjectsUseCase for StubListProjectsUseCase {
    async fn execute(&self) -> Result<Vec<ProjectRecord>, ListProjectsError> {
        match &self.result {
            Some(rows) => Ok(rows.clone()),
            None => Err(ListProjectsError::RepositoryError("stub failure".to_string())),
        }
    }
}

pub struct StubGetProjectUseCase {
    record: Option<ProjectRecord>,
}

impl StubGetProjectUseCase {
    pub fn success(record: ProjectRecord) -> Self {
        Self {
            record: Some(record),
        }
    }

    pub fn not_found() -> Self {
        Self { record: None }
    }
}

#[async_trait]
impl IGetProjectUseCase for StubGetProjectUseCase {
    async fn execute(&self, _id: Uuid) -> Result<ProjectRecord, GetProjectError> {
        self.record.clone().ok_or(GetProjectError::NotFound)
    }
}

pub struct StubCreateProjectUseCase {
    result: Result<ProjectRecord, CreateProjectError>,
}

impl StubCreateProjectUseCase {
    pub fn success(record: ProjectRecord) -> Self {
        Self { result: Ok(record) }
    }

    pub fn error(error: CreateProjectError) -> Self {
        Self { result: Err(error) }
    }
}

#[async_trait]
impl ICreateProjectUseCase for StubCreateProjectUseCase {
    async fn execute(&self, _data: CreateProjectData) -> Result<ProjectRecord, CreateProjectError> {
        self.result.clone()
    }
}

pub struct StubUpdateProjectUseCase {
    record: Option<ProjectRecord>,
}

impl StubUpdateProjectUseCase {
    pub fn success(record: ProjectRecord) -> Self {
        Self {
            record: Some(record),
        }
    }

    pub fn not_found() -> Self {
        Self { record: None }
    }
}

#[async_trait]
impl IUpdateProjectUseCase for StubUpdateProjectUseCase {
    async fn execute(
        &self,
        _id: Uuid,
        _data: UpdateProjectData,
    ) -> Result<ProjectRecord, UpdateProjectError> {
        self.record.clone().ok_or(UpdateProjectError::NotFound)
    }
}

pub struct StubDeleteProjectUseCase {
    found: bool,
}

impl StubDeleteProjectUseCase {
    pub fn success() -> Self {
        Self { found: true }
    }

    pub fn not_found() -> Self {
        Self { found: false }
    }
}

#[async_trait]
impl IDeleteProjectUseCase for StubDeleteProjectUseCase {
    async fn execute(&self, _id: Uuid) -> Result<(), DeleteProjectError> {
        if self.found {
            Ok(())
        } else {
            Err(DeleteProjectError::NotFound)
        }
    }
}

pub fn stub_project_use_cases() -> ProjectUseCases {
    ProjectUseCases {
        list: Arc::new(StubListProjectsUseCase::success(Vec::new())),
        get: Arc::new(StubGetProjectUseCase::not_found()),
        create: Arc::new(StubCreateProjectUseCase::error(
            CreateProjectError::RepositoryError("not wired in this test".to_string()),
        )),
        update: Arc::new(StubUpdateProjectUseCase::not_found()),
        delete: Arc::new(StubDeleteProjectUseCase::not_found()),
    }
}

// ============================================================================
// Skill
// ============================================================================

pub struct StubListSkillsUseCase {
    rows: Vec<SkillRecord>,
}

impl StubListSkillsUseCase {
    pub fn success(rows: Vec<SkillRecord>) -> Self {
        Self { rows }
    }
}

#[async_trait]
impl IListSkillsUseCase for StubListSkillsUseCase {
    async fn execute(&self) -> Result<Vec<SkillRecord>, ListSkillsError> {
        Ok(self.rows.clone())
    }
}

pub struct StubGetSkillUseCase;

#[async_trait]
impl IGetSkillUseCase for StubGetSkillUseCase {
    async fn execute(&self, _id: Uuid) -> Result<SkillRecord, GetSkillError> {
        Err(GetSkillError::NotFound)
    }
}

pub struct StubCreateSkillUseCase {
    result: Result<SkillRecord, CreateSkillError>,
}

impl StubCreateSkillUseCase {
    pub fn success(record: SkillRecord) -> Self {
        Self { result: Ok(record) }
    }

    pub fn error(error: CreateSkillError) -> Self {
        Self { result: Err(error) }
    }
}

#[async_trait]
impl ICreateSkillUseCase for StubCreateSkillUseCase {
    async fn execute(&self, _data: CreateSkillData) -> Result<SkillRecord, CreateSkillError> {
        self.result.clone()
    }
}

pub struct StubUpdateSkillUseCase;

#[async_trait]
impl IUpdateSkillUseCase for StubUpdateSkillUseCase {
    async fn execute(
        &self,
        _id: Uuid,
        _data: UpdateSkillData,
    ) -> Result<SkillRecord, UpdateSkillError> {
        Err(UpdateSkillError::NotFound)
    }
}

pub struct StubDeleteSkillUseCase;

#[async_trait]
impl IDeleteSkillUseCase for StubDeleteSkillUseCase {
    async fn execute(&self, _id: Uuid) -> Result<(), DeleteSkillError> {
        Err(DeleteSkillError::NotFound)
    }
}

pub fn stub_skill_use_cases() -> SkillUseCases {
    SkillUseCases {
        list: Arc::new(StubListSkillsUseCase::success(Vec::new())),
        get: Arc::new(StubGetSkillUseCase),
        create: Arc::new(StubCreateSkillUseCase::error(
            CreateSkillError::RepositoryError("not wired in this test".to_string()),
        )),
        update: Arc::new(StubUpdateSkillUseCase),
        delete: Arc::new(StubDeleteSkillUseCase),
    }
}

// ============================================================================
// Experience
// ============================================================================

pub struct StubListExperiencesUseCase {
    rows: Vec<ExperienceRecord>,
}

impl StubListExperiencesUseCase {
    pub fn success(rows: Vec<ExperienceRecord>) -> Self {
        Self { rows }
    }
}

#[async_trait]
impl IListExperiencesUseCase for StubListExperiencesUseCase {
    async fn execute(&self) -> Result<Vec<ExperienceRecord>, ListExperiencesError> {
        Ok(self.rows.clone())
    }
}

pub struct StubGetExperienceUseCase;

#[async_trait]
impl IGetExperienceUseCase for StubGetExperienceUseCase {
    async fn execute(&self, _id: Uuid) -> Result<ExperienceRecord, GetExperienceError> {
        Err(GetExperienceError::NotFound)
    }
}

pub struct StubCreateExperienceUseCase {
    result: Result<ExperienceRecord, CreateExperienceError>,
}

impl StubCreateExperienceUseCase {
    pub fn success(record: ExperienceRecord) -> Self {
        Self { result: Ok(record) }
    }

    pub fn error(error: CreateExperienceError) -> Self {
        Self { result: Err(error) }
    }
}

#[async_trait]
impl ICreateExperienceUseCase for StubCreateExperienceUseCase {
    async fn execute(
        &self,
        _data: CreateExperienceData,
    ) -> Result<ExperienceRecord, CreateExperienceError> {
        self.result.clone()
    }
}

pub struct StubUpdateExperienceUseCase;

#[async_trait]
impl IUpdateExperienceUseCase for StubUpdateExperienceUseCase {
    async fn execute(
        &self,
        _id: Uuid,
        _data: UpdateExperienceData,
    ) -> Result<ExperienceRecord, UpdateExperienceError> {
        Err(UpdateExperienceError::NotFound)
    }
}

pub struct StubDeleteExperienceUseCase;

#[async_trait]
impl IDeleteExperienceUseCase for StubDeleteExperienceUseCase {
    async fn execute(&self, _id: Uuid) -> Result<(), DeleteExperienceError> {
        Err(DeleteExperienceError::NotFound)
    }
}

pub fn stub_experience_use_cases() -> ExperienceUseCases {
    ExperienceUseCases {
        list: Arc::new(StubListExperiencesUseCase::success(Vec::new())),
        get: Arc::new(StubGetExperienceUseCase),
        create: Arc::new(StubCreateExperienceUseCase::error(
            CreateExperienceError::RepositoryError("not wired in this test".to_string()),
        )),
        update: Arc::new(StubUpdateExperienceUseCase),
        delete: Arc::new(StubDeleteExperienceUseCase),
    }
}

// ============================================================================
// Certificate
// ============================================================================

pub struct StubListCertificatesUseCase;

#[async_trait]
impl IListCertificatesUseCase for StubListCertificatesUseCase {
    async fn execute(&self) -> Result<Vec<CertificateRecord>, ListCertificatesError> {
        Ok(Vec::new())
    }
}

pub struct StubGetCertificateUseCase;

#[async_trait]
impl IGetCertificateUseCase for StubGetCertificateUseCase {
    async fn execute(&self, _id: Uuid) -> Result<CertificateRecord, GetCertificateError> {
        Err(GetCertificateError::NotFound)
    }
}

pub struct StubCreateCertificateUseCase;

#[async_trait]
impl ICreateCertificateUseCase for StubCreateCertificateUseCase {
    async fn execute(
        &self,
        _data: CreateCertificateData,
    ) -> Result<CertificateRecord, CreateCertificateError> {
        Err(CreateCertificateError::RepositoryError(
            "not wired in this test".to_string(),
        ))
    }
}

pub struct StubUpdateCertificateUseCase;

#[async_trait]
impl IUpdateCertificateUseCase for StubUpdateCertificateUseCase {
    async fn execute(
        &self,
        _id: Uuid,
        _data: UpdateCertificateData,
    ) -> Result<CertificateRecord, UpdateCertificateError> {
        Err(UpdateCertificateError::NotFound)
    }
}

pub struct StubDeleteCertificateUseCase;

#[async_trait]
impl IDeleteCertificateUseCase for StubDeleteCertificateUseCase {
    async fn execute(&self, _id: Uuid) -> Result<(), DeleteCertificateError> {
        Err(DeleteCertificateError::NotFound)
    }
}

pub fn stub_certificate_use_cases() -> CertificateUseCases {
    CertificateUseCases {
        list: Arc::new(StubListCertificatesUseCase),
        get: Arc::new(StubGetCertificateUseCase),
        create: Arc::new(StubCreateCertificateUseCase),
        update: Arc::new(StubUpdateCertificateUseCase),
        delete: Arc::new(StubDeleteCertificateUseCase),
    }
}

// ============================================================================
// Settings
// ============================================================================

pub struct StubGetProfileSettingsUseCase {
    row: Option<ProfileSettingsRecord>,
}

impl StubGetProfileSettingsUseCase {
    pub fn success(row: Option<ProfileSettingsRecord>) -> Self {
        Self { row }
    }
}

#[async_trait]
impl IGetProfileSettingsUseCase for StubGetProfileSettingsUseCase {
    async fn execute(&self) -> Result<Option<ProfileSettingsRecord>, GetSettingsError> {
        Ok(self.row.clone())
    }
}

pub struct StubUpdateProfileSettingsUseCase;

#[async_trait]
impl IUpdateProfileSettingsUseCase for StubUpdateProfileSettingsUseCase {
    async fn execute(
        &self,
        _data: UpdateProfileSettingsData,
    ) -> Result<ProfileSettingsRecord, UpdateProfileSettingsError> {
        Ok(ProfileSettingsRecord::default())
    }
}

pub struct StubGetResumeSettingsUseCase;

#[async_trait]
impl IGetResumeSettingsUseCase for StubGetResumeSettingsUseCase {
    async fn execute(&self) -> Result<Option<ResumeSettingsRecord>, GetSettingsError> {
        Ok(None)
    }
}

pub struct StubUpdateResumeSettingsUseCase;

#[async_trait]
impl IUpdateResumeSettingsUseCase for StubUpdateResumeSettingsUseCase {
    async fn execute(
        &self,
        _data: UpdateResumeSettingsData,
    ) -> Result<ResumeSettingsRecord, UpdateResumeSettingsError> {
        Ok(ResumeSettingsRecord::default())
    }
}

pub struct StubGetNotificationSettingsUseCase;

#[async_trait]
impl IGetNotificationSettingsUseCase for StubGetNotificationSettingsUseCase {
    async fn execute(&self) -> Result<Option<NotificationSettingsRecord>, GetSettingsError> {
        Ok(None)
    }
}

pub struct StubUpdateNotificationSettingsUseCase;

#[async_trait]
impl IUpdateNotificationSettingsUseCase for StubUpdateNotificationSettingsUseCase {
    async fn execute(
        &self,
        _data: UpdateNotificationSettingsData,
    ) -> Result<NotificationSettingsRecord, UpdateNotificationSettingsError> {
        Ok(NotificationSettingsRecord::default())
    }
}

pub fn stub_settings_use_cases() -> SettingsUseCases {
    SettingsUseCases {
        get_profile: Arc::new(StubGetProfileSettingsUseCase::success(None)),
        update_profile: Arc::new(StubUpdateProfileSettingsUseCase),
        get_resume: Arc::new(StubGetResumeSettingsUseCase),
        update_resume: Arc::new(StubUpdateResumeSettingsUseCase),
        get_notification: Arc::new(StubGetNotificationSettingsUseCase),
        update_notification: Arc::new(StubUpdateNotificationSettingsUseCase),
    }
}

// ============================================================================
// Contact
// ============================================================================

pub struct StubSubmitContactUseCase {
    result: Result<SubmitContactResult, SubmitContactError>,
}

impl StubSubmitContactUseCase {
    pub fn success(result: SubmitContactResult) -> Self {
        Self { result: Ok(result) }
    }

    pub fn error(error: SubmitContactError) -> Self {
        Self { result: Err(error) }
    }
}

#[async_trait]
impl ISubmitContactUseCase for StubSubmitContactUseCase {
    async fn execute(
        &self,
        _data: CreateContactSubmissionData,
    ) -> Result<SubmitContactResult, SubmitContactError> {
        self.result.clone()
    }
}

pub struct StubListSubmissionsUseCase;

#[async_trait]
impl IListSubmissionsUseCase for StubListSubmissionsUseCase {
    async fn execute(&self) -> Result<ContactInbox, ListSubmissionsError> {
        Ok(ContactInbox {
            submissions: Vec::new(),
            unread_count: 0,
        })
    }
}

pub struct StubMarkSubmissionReadUseCase {
    record: Option<ContactSubmissionRecord>,
}

impl StubMarkSubmissionReadUseCase {
    pub fn success(record: ContactSubmissionRecord) -> Self {
        Self {
            record: Some(record),
        }
    }

    pub fn not_found() -> Self {
        Self { record: None }
    }
}

#[async_trait]
impl IMarkSubmissionReadUseCase for StubMarkSubmissionReadUseCase {
    async fn execute(&self, _id: Uuid) -> Result<ContactSubmissionRecord, MarkSubmissionReadError> {
        self.record.clone().ok_or(MarkSubmissionReadError::NotFound)
    }
}

pub struct StubDeleteSubmissionUseCase;

#[async_trait]
impl IDeleteSubmissionUseCase for StubDeleteSubmissionUseCase {
    async fn execute(&self, _id: Uuid) -> Result<(), DeleteSubmissionError> {
        Err(DeleteSubmissionError::NotFound)
    }
}

pub fn stub_contact_use_cases() -> ContactUseCases {
    ContactUseCases {
        submit: Arc::new(StubSubmitContactUseCase::error(
            SubmitContactError::RepositoryError("not wired in this test".to_string()),
        )),
        list: Arc::new(StubListSubmissionsUseCase),
        mark_read: Arc::new(StubMarkSubmissionReadUseCase::not_found()),
        delete: Arc::new(StubDeleteSubmissionUseCase),
    }
}

// ============================================================================
// Chat
// ============================================================================

/// Answers every request with an immediate empty-but-complete stream.
pub struct StubChatGateway;

#[async_trait]
impl ChatGateway for StubChatGateway {
    async fn stream_chat(
        &self,
        _messages: Vec<OutboundMessage>,
    ) -> Result<mpsc::Receiver<GatewayEvent>, GatewayError> {
        let (tx, rx) = mpsc::channel(1);
        tokio::spawn(async move {
            let _ = tx.send(GatewayEvent::Done).await;
        });
        Ok(rx)
    }
}

pub fn stub_chat_state() -> ChatState {
    ChatState {
        gateway: Arc::new(StubChatGateway),
        client_key: TEST_CLIENT_KEY.to_string(),
    }
}

pub fn stub_auth_use_cases() -> AuthUseCases {
    AuthUseCases {
        login: Arc::new(StubLoginUseCase),
    }
}
