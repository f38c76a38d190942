use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

/// Login identifier. Unique across registered identities.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Fromln, AsRefln, Serialize, Deserialize)]
pub struct Email(String);

impl Email {
    pub fn new(email: impl Into<String>) -> Self {
        Self(email.into())
    }
}
