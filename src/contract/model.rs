/// Pure employee model for consumers of the public API (no serde)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    pub id: i64,
    pub name: String,
    pub surname: String,
    pub email: String,
}

/// Data for creating a new employee; the store assigns the identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEmployee {
    pub name: String,
    pub surname: String,
    pub email: String,
}
