use application::transfer::{
    CreateOrderDto, DeleteOrderDto, GetOrderDto, GetStoreOrdersDto, GetUserOrdersDto,
};
use error_stack::Report;
use kernel::KernelError;
use serde::Deserialize;
use uuid::Uuid;

use crate::controller::{Intake, TryIntake};
use crate::request::require_filled;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    address: String,
    contact_phone: String,
    contact_name: String,
    payment_method: String,
}

#[derive(Debug)]
pub struct GetOrderRequest {
    id: Uuid,
}

impl GetOrderRequest {
    pub fn new(id: Uuid) -> Self {
        Self { id }
    }
}

#[derive(Debug)]
pub struct DeleteOrderRequest {
    id: Uuid,
}

impl DeleteOrderRequest {
    pub fn new(id: Uuid) -> Self {
        Self { id }
    }
}

#[derive(Debug)]
pub struct GetUserOrdersRequest {
    user_id: Uuid,
}

impl GetUserOrdersRequest {
    pub fn new(user_id: Uuid) -> Self {
        Self { user_id }
    }
}

#[derive(Debug)]
pub struct GetStoreOrdersRequest {
    store_id: i64,
}

impl GetStoreOrdersRequest {
    pub fn new(store_id: i64) -> Self {
        Self { store_id }
    }
}

pub struct OrderTransformer;

impl TryIntake<CreateOrderRequest> for OrderTransformer {
    type To = CreateOrderDto;
    type Error = Report<KernelError>;
    fn emit(&self, input: CreateOrderRequest) -> Result<Self::To, Self::Error> {
        Ok(CreateOrderDto {
            address: require_filled("address", input.address)?,
            contact_phone: require_filled("contactPhone", input.contact_phone)?,
            contact_name: require_filled("contactName", input.contact_name)?,
            payment_method: require_filled("paymentMethod", input.payment_method)?,
        })
    }
}

impl Intake<GetOrderRequest> for OrderTransformer {
    type To = GetOrderDto;
    fn emit(&self, input: GetOrderRequest) -> Self::To {
        GetOrderDto { id: input.id }
    }
}

impl Intake<DeleteOrderRequest> for OrderTransformer {
    type To = DeleteOrderDto;
    fn emit(&self, input: DeleteOrderRequest) -> Self::To {
        DeleteOrderDto { id: input.id }
    }
}

impl Intake<GetUserOrdersRequest> for OrderTransformer {
    type To = GetUserOrdersDto;
    fn emit(&self, input: GetUserOrdersRequest) -> Self::To {
        GetUserOrdersDto {
            user_id: input.user_id,
        }
    }
}

impl Intake<GetStoreOrdersRequest> for OrderTransformer {
    type To = GetStoreOrdersDto;
    fn emit(&self, input: GetStoreOrdersRequest) -> Self::To {
        GetStoreOrdersDto {
            store_id: input.store_id,
        }
    }
}
