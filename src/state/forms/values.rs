//! The form-values record

use serde::{Deserialize, Serialize};

/// Field names in record order
pub const FIELD_NAMES: [&str; 7] = [
    "fullName", "email", "password", "age", "phone", "website", "bio",
];

/// Flat mapping of field name to value for the whole form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormValues {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub age: String,
    pub phone: String,
    pub website: String,
    pub bio: String,
}

impl FormValues {
    /// Look a value up by field name
    pub fn get(&self, name: &str) -> Option<&str> {
        let value = match name {
            "fullName" => &self.full_name,
            "email" => &self.email,
            "password" => &self.password,
            "age" => &self.age,
            "phone" => &self.phone,
            "website" => &self.website,
            "bio" => &self.bio,
            _ => return None,
        };
        Some(value)
    }

    /// Set a value by field name. Returns false for unknown names.
    pub fn set(&mut self, name: &str, value: impl Into<String>) -> bool {
        let slot = match name {
            "fullName" => &mut self.full_name,
            "email" => &mut self.email,
            "password" => &mut self.password,
            "age" => &mut self.age,
            "phone" => &mut self.phone,
            "website" => &mut self.website,
            "bio" => &mut self.bio,
            _ => return false,
        };
        *slot = value.into();
        true
    }

    /// `(name, value)` pairs in record order
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, &str)> {
        FIELD_NAMES
            .into_iter()
            .filter_map(move |name| self.get(name).map(|value| (name, value)))
    }

    /// Human-readable dump with two-space indentation
    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
