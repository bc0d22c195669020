use serde::{Deserialize, Serialize};

use crate::contract::model::{Employee, NewEmployee};

/// REST DTO for employee representation. JSON field names follow the wire
/// contract (`nome`/`sobrenome`), not the internal model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeDto {
    pub id: i64,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "sobrenome")]
    pub surname: String,
    pub email: String,
}

/// REST DTO for creating a new employee. An `id` in the request body is
/// ignored; the store assigns one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateEmployeeReq {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "sobrenome")]
    pub surname: String,
    pub email: String,
}

/// REST DTO for updating an employee (full replace of the mutable fields)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateEmployeeReq {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "sobrenome")]
    pub surname: String,
    pub email: String,
}

// Conversion implementations between REST DTOs and contract models

impl From<Employee> for EmployeeDto {
    fn from(employee: Employee) -> Self {
        Self {
            id: employee.id,
            name: employee.name,
            surname: employee.surname,
            email: employee.email,
        }
    }
}

impl From<CreateEmployeeReq> for NewEmployee {
    fn from(req: CreateEmployeeReq) -> Self {
        Self {
            name: req.name,
            surname: req.surname,
            email: req.email,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn employee_dto_uses_wire_field_names() {
        let dto = EmployeeDto {
            id: 1,
            name: "Daniel".to_string(),
            surname: "Penelva".to_string(),
            email: "d4n@x.com".to_string(),
        };

        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["nome"], "Daniel");
        assert_eq!(json["sobrenome"], "Penelva");
        assert_eq!(json["email"], "d4n@x.com");
        assert_eq!(json["id"], 1);
    }

    #[test]
    fn create_req_ignores_id_in_body() {
        let req: CreateEmployeeReq = serde_json::from_str(
            r#"{"id": 42, "nome": "Daniel", "sobrenome": "Penelva", "email": "d4n@x.com"}"#,
        )
        .unwrap();

        let new_employee = NewEmployee::from(req);
        assert_eq!(new_employee.name, "Daniel");
        assert_eq!(new_employee.surname, "Penelva");
        assert_eq!(new_employee.email, "d4n@x.com");
    }
}
