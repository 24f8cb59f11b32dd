use crate::model::{assign_non_empty, Entity};
use crate::types::Record;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A customer. Keyed by `email`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// Partial customer update. Absent or empty fields leave the customer unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl Customer {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
        }
    }

    pub fn display_info(&self) -> String {
        format!(
            "Customer Name: {}\nEmail: {}\nPhone: {}\n",
            self.name, self.email, self.phone
        )
    }

    pub fn modify_info(&mut self, update: &CustomerUpdate) {
        assign_non_empty(&mut self.name, update.name.as_deref());
        assign_non_empty(&mut self.email, update.email.as_deref());
        assign_non_empty(&mut self.phone, update.phone.as_deref());
    }
}

impl CustomerUpdate {
    pub fn is_empty(&self) -> bool {
        [&self.name, &self.email, &self.phone]
            .into_iter()
            .all(|field| field.as_deref().map_or(true, str::is_empty))
    }
}

impl Entity for Customer {
    const KIND: &'static str = "customer";
    type Key = String;

    fn key(&self) -> String {
        self.email.clone()
    }

    fn to_mapping(&self) -> Record {
        let mut mapping = Record::new();
        mapping.insert("name".to_string(), Value::String(self.name.clone()));
        mapping.insert("email".to_string(), Value::String(self.email.clone()));
        mapping.insert("phone".to_string(), Value::String(self.phone.clone()));
        mapping
    }
}
