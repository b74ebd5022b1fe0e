use sea_orm::{entity::prelude::*, sea_query::OnConflict, DatabaseConnection, Set};
use serde::{Deserialize, Serialize};

use crate::errors;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "available_days")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub day_of_week: String,
    pub is_available: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub async fn list(db: &DatabaseConnection) -> Result<Vec<Model>, errors::ModelError> {
    Entity::find()
        .all(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))
}

/// Insert or flip the flag for one weekday name.
pub async fn upsert(
    db: &DatabaseConnection,
    day_of_week: &str,
    is_available: bool,
) -> Result<(), errors::ModelError> {
    if day_of_week.trim().is_empty() {
        return Err(errors::ModelError::Validation("day_of_week required".into()));
    }
    let am = ActiveModel {
        day_of_week: Set(day_of_week.to_string()),
        is_available: Set(is_available),
    };
    Entity::insert(am)
        .on_conflict(
            OnConflict::column(Column::DayOfWeek)
                .update_column(Column::IsAvailable)
                .to_owned(),
        )
        .exec(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))?;
    Ok(())
}
