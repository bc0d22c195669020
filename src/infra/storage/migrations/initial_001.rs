use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Empregados::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Empregados::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Empregados::Nome).string().not_null())
                    .col(ColumnDef::new(Empregados::Sobrenome).string().not_null())
                    // No unique constraint: the duplicate-email rule lives in
                    // the service layer, matching the reference schema.
                    .col(ColumnDef::new(Empregados::Email).string().not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Empregados::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Empregados {
    Table,
    Id,
    Nome,
    Sobrenome,
    Email,
}
