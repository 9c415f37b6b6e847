use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "foods")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub food_id: i32,
    pub food_name: String,
    pub calorie: i32,
    pub carbohydrate: Option<f64>,
    pub protein: Option<f64>,
    pub fat: Option<f64>,
    pub sugar: Option<f64>,
    pub sodium: Option<f64>,
    pub base_amount: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
