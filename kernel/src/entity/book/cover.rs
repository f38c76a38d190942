use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize, Fromln, AsRefln)]
pub struct BookCover(String);

impl BookCover {
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }
}
