use crate::contract::model::Employee;
use crate::infra::storage::entity::Model as EmployeeEntity;

/// Convert a database entity to a contract model
pub fn entity_to_contract(entity: EmployeeEntity) -> Employee {
    Employee {
        id: entity.id,
        name: entity.name,
        surname: entity.surname,
        email: entity.email,
    }
}
