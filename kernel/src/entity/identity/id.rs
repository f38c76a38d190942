use serde::{Deserialize, Serialize};
use uuid::Uuid;
use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Default, Serialize, Deserialize, Fromln, AsRefln)]
pub struct IdentityId(Uuid);

impl IdentityId {
    pub fn new(id: impl Into<Uuid>) -> Self {
        Self(id.into())
    }
}
