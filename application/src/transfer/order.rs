use kernel::prelude::entity::Delivery;
use uuid::Uuid;

#[derive(Debug)]
pub struct CreateOrderDto {
    pub address: String,
    pub contact_phone: String,
    pub contact_name: String,
    pub payment_method: String,
}

impl From<CreateOrderDto> for Delivery {
    fn from(value: CreateOrderDto) -> Self {
        Delivery::new(
            value.address,
            value.contact_phone,
            value.contact_name,
            value.payment_method,
        )
    }
}

pub struct GetOrderDto {
    pub id: Uuid,
}

pub struct DeleteOrderDto {
    pub id: Uuid,
}

pub struct GetUserOrdersDto {
    pub user_id: Uuid,
}

pub struct GetStoreOrdersDto {
    pub store_id: i64,
}
