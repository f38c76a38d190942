use serde::{Deserialize, Serialize};
use vodca::References;

use crate::entity::{BookAuthor, BookId, BookTitle, CartLine, CartLineId, Money, Quantity};

/// Frozen copy of a cart line. Later cart or catalog changes never reach it.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize, References)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    id: CartLineId,
    book_id: BookId,
    title: BookTitle,
    author: BookAuthor,
    price: Money,
    quantity: Quantity,
    subtotal: Money,
}

impl OrderItem {
    pub fn freeze(line: &CartLine) -> Self {
        Self {
            id: *line.id(),
            book_id: *line.book_id(),
            title: line.title().clone(),
            author: line.author().clone(),
            price: *line.price(),
            quantity: *line.quantity(),
            subtotal: line.subtotal(),
        }
    }
}
