//! Single-row high-water mark of issued route numbers.

use sea_orm::entity::prelude::*;

/// Primary key of the only row in the table.
pub const SEQUENCE_ROW_ID: i32 = 1;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "route_number_sequence")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,
    pub last_value: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
