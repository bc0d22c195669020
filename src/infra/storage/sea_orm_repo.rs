//! SeaORM-backed repository implementation for the domain port.
//!
//! This struct is generic over `C: ConnectionTrait`, so you can construct it
//! with a `DatabaseConnection` or a transactional connection.

use anyhow::Context;
use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, QueryOrder,
    Set,
};

use crate::contract::model::{Employee, NewEmployee};
use crate::domain::repo::EmployeeRepository;
use crate::infra::storage::entity::{ActiveModel as EmployeeAM, Column, Entity as EmployeeEntity};
use crate::infra::storage::mapper::entity_to_contract;

/// SeaORM repository impl.
/// Holds a connection object; its lifetime/ownership is up to the caller.
pub struct SeaOrmEmployeeRepository<C>
where
    C: ConnectionTrait + Send + Sync,
{
    conn: C,
}

impl<C> SeaOrmEmployeeRepository<C>
where
    C: ConnectionTrait + Send + Sync,
{
    pub fn new(conn: C) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl<C> EmployeeRepository for SeaOrmEmployeeRepository<C>
where
    C: ConnectionTrait + Send + Sync + 'static,
{
    async fn insert(&self, new_employee: NewEmployee) -> anyhow::Result<Employee> {
        // Leaving the key NotSet makes sqlite assign the auto-increment id.
        let m = EmployeeAM {
            id: NotSet,
            name: Set(new_employee.name),
            surname: Set(new_employee.surname),
            email: Set(new_employee.email),
        };
        let inserted = m.insert(&self.conn).await.context("insert failed")?;
        Ok(entity_to_contract(inserted))
    }

    async fn save(&self, employee: Employee) -> anyhow::Result<Employee> {
        let m = EmployeeAM {
            id: Set(employee.id),
            name: Set(employee.name),
            surname: Set(employee.surname),
            email: Set(employee.email),
        };
        let updated = m.update(&self.conn).await.context("save failed")?;
        Ok(entity_to_contract(updated))
    }

    async fn find_by_id(&self, id: i64) -> anyhow::Result<Option<Employee>> {
        let found = EmployeeEntity::find_by_id(id)
            .one(&self.conn)
            .await
            .context("find_by_id failed")?;
        Ok(found.map(entity_to_contract))
    }

    async fn find_by_email(&self, email: &str) -> anyhow::Result<Option<Employee>> {
        let found = EmployeeEntity::find()
            .filter(Column::Email.eq(email))
            .one(&self.conn)
            .await
            .context("find_by_email failed")?;
        Ok(found.map(entity_to_contract))
    }

    async fn find_all(&self) -> anyhow::Result<Vec<Employee>> {
        let rows = EmployeeEntity::find()
            .order_by_asc(Column::Id)
            .all(&self.conn)
            .await
            .context("find_all failed")?;
        Ok(rows.into_iter().map(entity_to_contract).collect())
    }

    async fn delete_by_id(&self, id: i64) -> anyhow::Result<bool> {
        let res = EmployeeEntity::delete_by_id(id)
            .exec(&self.conn)
            .await
            .context("delete failed")?;
        Ok(res.rows_affected > 0)
    }
}
