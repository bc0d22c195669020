//! Unit tests for the domain service over a mocked repository port.

use std::sync::Arc;

use mockall::mock;
use mockall::predicate::eq;

use empregados_service::contract::model::{Employee, NewEmployee};
use empregados_service::domain::error::DomainError;
use empregados_service::domain::repo::EmployeeRepository;
use empregados_service::domain::service::Service;

mock! {
    pub EmployeeRepo {}

    #[async_trait::async_trait]
    impl EmployeeRepository for EmployeeRepo {
        async fn insert(&self, new_employee: NewEmployee) -> anyhow::Result<Employee>;
        async fn save(&self, employee: Employee) -> anyhow::Result<Employee>;
        async fn find_by_id(&self, id: i64) -> anyhow::Result<Option<Employee>>;
        async fn find_by_email(&self, email: &str) -> anyhow::Result<Option<Employee>>;
        async fn find_all(&self) -> anyhow::Result<Vec<Employee>>;
        async fn delete_by_id(&self, id: i64) -> anyhow::Result<bool>;
    }
}

fn daniel() -> NewEmployee {
    NewEmployee {
        name: "Daniel".to_string(),
        surname: "Penelva".to_string(),
        email: "d4n@x.com".to_string(),
    }
}

fn stored_daniel(id: i64) -> Employee {
    Employee {
        id,
        name: "Daniel".to_string(),
        surname: "Penelva".to_string(),
        email: "d4n@x.com".to_string(),
    }
}

#[tokio::test]
async fn create_employee_persists_when_email_is_free() {
    let mut repo = MockEmployeeRepo::new();
    repo.expect_find_by_email()
        .with(eq("d4n@x.com"))
        .times(1)
        .returning(|_| Ok(None));
    repo.expect_insert()
        .times(1)
        .returning(|new_employee| {
            Ok(Employee {
                id: 1,
                name: new_employee.name,
                surname: new_employee.surname,
                email: new_employee.email,
            })
        });

    let service = Service::new(Arc::new(repo));
    let created = service.create_employee(daniel()).await.unwrap();

    assert!(created.id > 0);
    assert_eq!(created.name, "Daniel");
    assert_eq!(created.surname, "Penelva");
    assert_eq!(created.email, "d4n@x.com");
}

#[tokio::test]
async fn create_employee_rejects_duplicate_email() {
    let mut repo = MockEmployeeRepo::new();
    repo.expect_find_by_email()
        .with(eq("d4n@x.com"))
        .times(1)
        .returning(|_| Ok(Some(stored_daniel(1))));
    // The store must never see the second record
    repo.expect_insert().times(0);

    let service = Service::new(Arc::new(repo));
    let err = service.create_employee(daniel()).await.unwrap_err();

    match err {
        DomainError::EmailAlreadyExists { email } => assert_eq!(email, "d4n@x.com"),
        other => panic!("Expected EmailAlreadyExists, got {other:?}"),
    }
}

#[tokio::test]
async fn create_employee_rejects_empty_name() {
    // Validation fires before any repository call
    let repo = MockEmployeeRepo::new();
    let service = Service::new(Arc::new(repo));

    let err = service
        .create_employee(NewEmployee {
            name: "   ".to_string(),
            surname: "Penelva".to_string(),
            email: "d4n@x.com".to_string(),
        })
        .await
        .unwrap_err();

    match err {
        DomainError::EmptyField { field } => assert_eq!(field, "nome"),
        other => panic!("Expected EmptyField, got {other:?}"),
    }
}

#[tokio::test]
async fn list_employees_returns_all_records() {
    let mut repo = MockEmployeeRepo::new();
    repo.expect_find_all().times(1).returning(|| {
        Ok(vec![
            stored_daniel(1),
            Employee {
                id: 2,
                name: "Maria".to_string(),
                surname: "Silva".to_string(),
                email: "maria@x.com".to_string(),
            },
        ])
    });

    let service = Service::new(Arc::new(repo));
    let employees = service.list_employees().await.unwrap();

    assert_eq!(employees.len(), 2);
    assert_eq!(employees[0].id, 1);
    assert_eq!(employees[1].id, 2);
}

#[tokio::test]
async fn list_employees_returns_empty_vec_on_empty_store() {
    let mut repo = MockEmployeeRepo::new();
    repo.expect_find_all().times(1).returning(|| Ok(vec![]));

    let service = Service::new(Arc::new(repo));
    let employees = service.list_employees().await.unwrap();

    assert!(employees.is_empty());
}

#[tokio::test]
async fn get_employee_returns_none_for_unknown_id() {
    let mut repo = MockEmployeeRepo::new();
    repo.expect_find_by_id()
        .with(eq(999))
        .times(1)
        .returning(|_| Ok(None));

    let service = Service::new(Arc::new(repo));
    let found = service.get_employee(999).await.unwrap();

    assert!(found.is_none());
}

#[tokio::test]
async fn update_employee_saves_as_is_without_email_recheck() {
    let mut repo = MockEmployeeRepo::new();
    // No find_by_email expectation: calling it would fail the test
    repo.expect_save()
        .times(1)
        .returning(|employee| Ok(employee));

    let service = Service::new(Arc::new(repo));
    let mut employee = stored_daniel(1);
    employee.surname = "Penelva Andrade".to_string();

    let updated = service.update_employee(employee).await.unwrap();

    assert_eq!(updated.id, 1);
    assert_eq!(updated.surname, "Penelva Andrade");
}

#[tokio::test]
async fn delete_employee_is_silent_for_unknown_id() {
    let mut repo = MockEmployeeRepo::new();
    repo.expect_delete_by_id()
        .with(eq(999))
        .times(1)
        .returning(|_| Ok(false));

    let service = Service::new(Arc::new(repo));
    service.delete_employee(999).await.unwrap();
}

#[tokio::test]
async fn repository_failures_surface_as_database_errors() {
    let mut repo = MockEmployeeRepo::new();
    repo.expect_find_all()
        .times(1)
        .returning(|| Err(anyhow::anyhow!("connection lost")));

    let service = Service::new(Arc::new(repo));
    let err = service.list_employees().await.unwrap_err();

    match err {
        DomainError::Database { message } => assert!(message.contains("connection lost")),
        other => panic!("Expected Database, got {other:?}"),
    }
}
