use async_trait::async_trait;
use chrono::Utc;

use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::certificate::adapter::outgoing::sea_orm_entity::certificates::{
    self, ActiveModel, Column, Entity,
};
use crate::certificate::application::ports::outgoing::{
    CertificateRecord, CertificateRepository, CertificateRepositoryError, CreateCertificateData,
    UpdateCertificateData,
};
use crate::shared::patch::PatchField;

#[derive(Clone)]
pub struct CertificateRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CertificateRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CertificateRepository for CertificateRepositoryPostgres {
    async fn list_certificates(
        &self,
    ) -> Result<Vec<CertificateRecord>, CertificateRepositoryError> {
        let rows = Entity::find()
            .order_by_asc(Column::DisplayOrder)
            .order_by_asc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows.into_iter().map(model_to_record).collect())
    }

    async fn find_certificate(
        &self,
        id: Uuid,
    ) -> Result<CertificateRecord, CertificateRepositoryError> {
        let row = Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(CertificateRepositoryError::NotFound)?;

        Ok(model_to_record(row))
    }

    async fn create_certificate(
        &self,
        data: CreateCertificateData,
    ) -> Result<CertificateRecord, CertificateRepositoryError> {
        let now = Utc::now().fixed_offset();

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            title: Set(data.title.trim().to_string()),
            issuer: Set(data.issuer.trim().to_string()),
            issue_date: Set(data.issue_date),
            credential_url: Set(data.credential_url),
            image_url: Set(data.image_url),
            display_order: Set(data.display_order),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = model.insert(&*self.db).await.map_err(map_db_err)?;

        Ok(model_to_record(result))
    }

    async fn update_certificate(
        &self,
        id: Uuid,
        data: UpdateCertificateData,
    ) -> Result<CertificateRecord, CertificateRepositoryError> {
        let mut model = <ActiveModel as Default>::default();

        if let PatchField::Value(title) = data.title {
            model.title = Set(title.trim().to_string());
        }
        if let PatchField::Value(issuer) = data.issuer {
            model.issuer = Set(issuer.trim().to_string());
        }
        if let PatchField::Value(issue_date) = data.issue_date {
            model.issue_date = Set(issue_date);
        }
        match data.credential_url {
            PatchField::Unset => {}
            PatchField::Null => model.credential_url = Set(None),
            PatchField::Value(url) => model.credential_url = Set(Some(url)),
        }
        match data.image_url {
            PatchField::Unset => {}
            PatchField::Null => model.image_url = Set(None),
            PatchField::Value(url) => model.image_url = Set(Some(url)),
        }
        if let PatchField::Value(order) = data.display_order {
            model.display_order = Set(order);
        }

        let has_changes = model.title.is_set()
            || model.issuer.is_set()
            || model.issue_date.is_set()
            || model.credential_url.is_set()
            || model.image_url.is_set()
            || model.display_order.is_set();

        if !has_changes {
            return self.find_certificate(id).await;
        }

        model.updated_at = Set(Utc::now().fixed_offset());

        let results = Entity::update_many()
            .set(model)
            .filter(Column::Id.eq(id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        let result = results
            .into_iter()
            .next()
            .ok_or(CertificateRepositoryError::NotFound)?;

        Ok(model_to_record(result))
    }

    async fn delete_certificate(&self, id: Uuid) -> Result<(), CertificateRepositoryError> {
        let result = Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(CertificateRepositoryError::NotFound);
        }

        Ok(())
    }
}

fn model_to_record(model: certificates::Model) -> CertificateRecord {
    CertificateRecord {
        id: model.id,
        title: model.title,
        issuer: model.issuer,
        issue_date: model.issue_date,
        credential_url: model.credential_url,
        image_url: model.image_url,
        display_order: model.display_order,
        created_at: model.created_at.to_utc(),
        updated_at: model.updated_at.to_utc(),
    }
}

fn map_db_err(e: sea_orm::DbErr) -> CertificateRepositoryError {
    CertificateRepositoryError::DatabaseError(e.to_string())
}
