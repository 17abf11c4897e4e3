use sea_orm::entity::prelude::*;
use serde::Serialize;

use crate::platform::{self, Platform, UnknownPlatform};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "sources")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Platform-specific identifier. For elfa this is an endpoint query string,
    /// not a bare channel id.
    #[sea_orm(unique)]
    pub channel_id: String,
    pub platform: String,
    pub channel_name: String,
}

impl Model {
    pub fn platform(&self) -> Result<Platform, UnknownPlatform> {
        self.platform.parse()
    }

    /// Endpoint name for elfa sources; `None` for other platforms.
    pub fn endpoint_name(&self) -> Option<&str> {
        match self.platform() {
            Ok(Platform::Elfa) => platform::elfa_endpoint(&self.channel_id),
            _ => None,
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
