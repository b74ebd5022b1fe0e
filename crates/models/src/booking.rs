use chrono::Utc;
use sea_orm::{entity::prelude::*, sea_query::Expr, DatabaseConnection, QueryOrder, Set};
use serde::{Deserialize, Serialize};

use crate::errors;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "bookings")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub service_type: String,
    pub preferred_location: String,
    pub preferred_date: Date,
    pub preferred_time: Time,
    pub status: String,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Intake fields for a new booking; status and timestamps are set on insert.
#[derive(Debug, Clone)]
pub struct NewBooking {
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub service_type: String,
    pub preferred_location: String,
    pub preferred_date: Date,
    pub preferred_time: Time,
}

pub fn validate(new: &NewBooking) -> Result<(), errors::ModelError> {
    let required = [
        &new.customer_name,
        &new.customer_email,
        &new.customer_phone,
        &new.service_type,
        &new.preferred_location,
    ];
    if required.iter().any(|f| f.trim().is_empty()) {
        return Err(errors::ModelError::Validation(
            "booking intake fields must be non-empty".into(),
        ));
    }
    Ok(())
}

pub async fn create(db: &DatabaseConnection, new: NewBooking) -> Result<Model, errors::ModelError> {
    validate(&new)?;
    let am = ActiveModel {
        customer_name: Set(new.customer_name),
        customer_email: Set(new.customer_email),
        customer_phone: Set(new.customer_phone),
        service_type: Set(new.service_type),
        preferred_location: Set(new.preferred_location),
        preferred_date: Set(new.preferred_date),
        preferred_time: Set(new.preferred_time),
        status: Set("Pending".into()),
        created_at: Set(Utc::now().into()),
        ..Default::default()
    };
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}

/// All bookings, newest first.
pub async fn list_recent(db: &DatabaseConnection) -> Result<Vec<Model>, errors::ModelError> {
    Entity::find()
        .order_by_desc(Column::CreatedAt)
        .all(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))
}

/// Set status by id. Status is free text; no allowed-values check, and an
/// unknown id is a no-op.
pub async fn set_status(db: &DatabaseConnection, id: i32, status: &str) -> Result<(), errors::ModelError> {
    Entity::update_many()
        .col_expr(Column::Status, Expr::value(status))
        .filter(Column::Id.eq(id))
        .exec(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))?;
    Ok(())
}
