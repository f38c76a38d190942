use error_stack::Report;
use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

use crate::KernelError;

#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize, Fromln, AsRefln)]
pub struct Quantity(u32);

impl Quantity {
    pub fn one() -> Self {
        Self(1)
    }

    pub fn parse(value: i64) -> error_stack::Result<Self, KernelError> {
        u32::try_from(value)
            .ok()
            .filter(|value| *value > 0)
            .map(Self)
            .ok_or_else(|| {
                Report::new(KernelError::Validation)
                    .attach_printable(format!("quantity must be a positive integer, got {value}"))
            })
    }

    pub fn stack(&self, other: &Quantity) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}
