use kernel::prelude::entity::{Book, Quantity};
use uuid::Uuid;

#[derive(Debug)]
pub struct AddCartItemDto {
    pub book: Book,
    pub quantity: Quantity,
}

#[derive(Debug)]
pub struct UpdateCartQuantityDto {
    pub line_id: Uuid,
    pub quantity: Quantity,
}

pub struct RemoveCartItemDto {
    pub line_id: Uuid,
}
