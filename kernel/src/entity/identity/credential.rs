use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

#[derive(Clone, PartialEq, Eq, Fromln, AsRefln, Serialize, Deserialize)]
pub struct Credential(String);

impl Credential {
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }

    pub fn verify(&self, secret: &str) -> bool {
        self.0 == secret
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Credential(***)")
    }
}
