//! Client and contact domain models.

use serde::{Deserialize, Serialize};

use crate::errors::{Result, ValidationError};

/// Domain model representing a client company.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: i32,
    pub company_name: String,
    pub sector: Option<String>,
    pub region: Option<String>,
    pub location: Option<String>,
    pub size: Option<String>,
    pub revenue: f64,
    pub potential_value: f64,
    pub notes: Option<String>,
    pub created_at: String,
}

impl Client {
    /// True when any of company name, sector, region, or location contains
    /// the (already lowercased) query. A missing location is treated as the
    /// empty string.
    pub fn matches_query(&self, query_lower: &str) -> bool {
        let contains = |field: &Option<String>| {
            field
                .as_deref()
                .unwrap_or("")
                .to_lowercase()
                .contains(query_lower)
        };
        self.company_name.to_lowercase().contains(query_lower)
            || contains(&self.sector)
            || contains(&self.region)
            || contains(&self.location)
    }
}

/// Input model for creating a new client.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewClient {
    pub company_name: String,
    pub sector: Option<String>,
    pub region: Option<String>,
    pub location: Option<String>,
    pub size: Option<String>,
    #[serde(default)]
    pub revenue: f64,
    #[serde(default)]
    pub potential_value: f64,
    pub notes: Option<String>,
}

impl NewClient {
    /// Validates the input and normalizes whitespace. Runs before any
    /// statement executes, so a rejected form writes nothing.
    pub fn validate(&mut self) -> Result<()> {
        self.company_name = self.company_name.trim().to_string();
        if self.company_name.is_empty() {
            return Err(ValidationError::MissingField("company_name".to_string()).into());
        }
        if let Some(location) = self.location.as_mut() {
            *location = location.trim().to_string();
        }
        Ok(())
    }
}

/// Domain model representing a contact person at a client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: i32,
    pub client_id: i32,
    pub name: String,
    pub designation: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub linkedin: Option<String>,
    pub created_at: String,
}

/// Input model for creating a new contact.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewContact {
    pub client_id: i32,
    pub name: String,
    pub designation: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub linkedin: Option<String>,
}

impl NewContact {
    pub fn validate(&mut self) -> Result<()> {
        self.name = self.name.trim().to_string();
        if self.name.is_empty() {
            return Err(ValidationError::MissingField("name".to_string()).into());
        }
        Ok(())
    }
}
