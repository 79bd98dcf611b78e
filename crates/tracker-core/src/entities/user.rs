//! User entity - an account known to the identity layer

use chrono::{DateTime, NaiveDate, Utc};

use crate::value_objects::UserId;

/// User entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new active user
    pub fn new(name: String, email: String) -> Self {
        Self {
            id: UserId::new(),
            name,
            email,
            phone: None,
            address: None,
            date_of_birth: None,
            is_active: true,
            created_at: Utc::now(),
        }
    }
}
