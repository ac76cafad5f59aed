//! IAM node configuration structures.

use serde::Deserialize;

/// Object kinds under user management.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Resource {
    User,
    Group,
    S3Key,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Operation {
    Create,
    Delete,
    Get,
    GetMany,
    Update,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Selector {
    pub resource: Resource,
    pub operation: Operation,
}

/// Parameters for creating or updating a user account.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserFields {
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    #[serde(default, deserialize_with = "crate::serde::empty_as_none")]
    pub password: Option<String>,
    #[serde(default)]
    pub administrator: bool,
}
