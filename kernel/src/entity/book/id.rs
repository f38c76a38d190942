use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize, Fromln, AsRefln)]
pub struct BookId(i64);

impl BookId {
    pub fn new(id: impl Into<i64>) -> Self {
        Self(id.into())
    }
}
