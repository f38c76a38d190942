mod author;
mod cover;
mod id;
mod title;

pub use self::{author::*, cover::*, id::*, title::*};
use crate::entity::{Money, StoreId};
use destructure::Destructure;
use serde::{Deserialize, Serialize};
use vodca::References;

/// Catalog entry as handed over by the catalog at add-to-cart time.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize, References, Destructure)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    id: BookId,
    title: BookTitle,
    author: BookAuthor,
    price: Money,
    cover: BookCover,
    store_id: StoreId,
}

impl Book {
    pub fn new(
        id: BookId,
        title: BookTitle,
        author: BookAuthor,
        price: Money,
        cover: BookCover,
        store_id: StoreId,
    ) -> Self {
        Self {
            id,
            title,
            author,
            price,
            cover,
            store_id,
        }
    }
}
