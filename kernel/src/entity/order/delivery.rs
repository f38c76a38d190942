use destructure::Destructure;
use serde::{Deserialize, Serialize};
use vodca::References;

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize, References, Destructure)]
#[serde(rename_all = "camelCase")]
pub struct Delivery {
    address: String,
    contact_phone: String,
    contact_name: String,
    payment_method: String,
}

impl Delivery {
    pub fn new(
        address: impl Into<String>,
        contact_phone: impl Into<String>,
        contact_name: impl Into<String>,
        payment_method: impl Into<String>,
    ) -> Self {
        Self {
            address: address.into(),
            contact_phone: contact_phone.into(),
            contact_name: contact_name.into(),
            payment_method: payment_method.into(),
        }
    }
}
