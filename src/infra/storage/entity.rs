use sea_orm::entity::prelude::*;

/// Row model for the `empregados` table. Column names follow the original
/// Portuguese schema; no unique index on email (uniqueness is a domain rule).
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "empregados")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(column_name = "nome")]
    pub name: String,
    #[sea_orm(column_name = "sobrenome")]
    pub surname: String,
    pub email: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
