use std::fmt::{Display, Formatter};

use error_stack::Report;
use serde::{Deserialize, Serialize};

use crate::KernelError;

#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Customer,
    Merchant,
    Admin,
}

impl Role {
    pub fn parse(value: &str) -> error_stack::Result<Self, KernelError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "customer" => Ok(Role::Customer),
            "merchant" => Ok(Role::Merchant),
            "admin" => Ok(Role::Admin),
            other => Err(Report::new(KernelError::Validation)
                .attach_printable(format!("unknown role `{other}`"))),
        }
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Customer => write!(f, "customer"),
            Role::Merchant => write!(f, "merchant"),
            Role::Admin => write!(f, "admin"),
        }
    }
}
