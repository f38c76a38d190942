use destructure::{Destructure, Mutation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use vodca::{AsRefln, Fromln, References};

use crate::entity::{Book, BookAuthor, BookCover, BookId, BookTitle, Money, Quantity, StoreId};

#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize, Fromln, AsRefln)]
pub struct CartLineId(Uuid);

impl CartLineId {
    pub fn new(id: impl Into<Uuid>) -> Self {
        Self(id.into())
    }
}

/// Price, title and the rest are copied from the book when the line is created
/// and are never refreshed from the catalog afterwards.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize, References, Destructure, Mutation)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    id: CartLineId,
    book_id: BookId,
    title: BookTitle,
    author: BookAuthor,
    price: Money,
    image_url: BookCover,
    quantity: Quantity,
    store_id: StoreId,
}

impl CartLine {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: CartLineId,
        book_id: BookId,
        title: BookTitle,
        author: BookAuthor,
        price: Money,
        image_url: BookCover,
        quantity: Quantity,
        store_id: StoreId,
    ) -> Self {
        Self {
            id,
            book_id,
            title,
            author,
            price,
            image_url,
            quantity,
            store_id,
        }
    }

    pub fn snapshot(id: CartLineId, book: &Book, quantity: Quantity) -> Self {
        Self::new(
            id,
            *book.id(),
            book.title().clone(),
            book.author().clone(),
            *book.price(),
            book.cover().clone(),
            quantity,
            *book.store_id(),
        )
    }

    pub fn subtotal(&self) -> Money {
        self.price.times(&self.quantity)
    }
}
