use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Fromln, AsRefln, Serialize, Deserialize)]
pub struct Avatar(String);

impl Avatar {
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    /// Placeholder picture handed out at registration.
    pub fn generated() -> Self {
        let seed = OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000;
        Self(format!("https://picsum.photos/200/200?random={seed}"))
    }
}
