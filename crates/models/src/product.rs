use sea_orm::{entity::prelude::*, DatabaseConnection, Set};
use serde::{Deserialize, Serialize};

use crate::errors;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "product")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub product_name: String,
    pub price: f64,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        panic!("no relations defined here")
    }
}

impl ActiveModelBehavior for ActiveModel {}

pub async fn create(
    db: &DatabaseConnection,
    product_name: &str,
    price: f64,
) -> Result<Model, errors::ModelError> {
    if product_name.trim().is_empty() {
        return Err(errors::ModelError::Validation("product_name required".into()));
    }
    if price < 0.0 {
        return Err(errors::ModelError::Validation("price must be non-negative".into()));
    }
    let am = ActiveModel {
        product_name: Set(product_name.to_string()),
        price: Set(price),
        ..Default::default()
    };
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}
