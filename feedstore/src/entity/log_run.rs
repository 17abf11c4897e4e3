use sea_orm::entity::prelude::*;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "logs_runs")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Not a foreign key: may hold a source's channel_id or an elfa endpoint name.
    pub channel_id: Option<String>,
    pub platform: Option<String>,
    pub pulled: i32,
    pub kept: i32,
}

impl Model {
    pub fn is_consistent(&self) -> bool {
        self.kept <= self.pulled
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
