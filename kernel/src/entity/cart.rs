mod line;
mod quantity;

pub use self::{line::*, quantity::*};
use crate::entity::{Book, IdentityId, Money};
use destructure::Destructure;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use vodca::References;

/// Lines currently held by one identity. No two lines share a book.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize, References, Destructure)]
pub struct Cart {
    owner: IdentityId,
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new(owner: IdentityId, lines: Vec<CartLine>) -> Self {
        Self { owner, lines }
    }

    pub fn empty(owner: IdentityId) -> Self {
        Self::new(owner, Vec::new())
    }

    /// Adds `quantity` of `book`, stacking onto the existing line for the same book.
    /// Returns the id of the line that received the quantity.
    pub fn add(&mut self, book: &Book, quantity: Quantity) -> CartLineId {
        if let Some(line) = self.lines.iter_mut().find(|line| line.book_id() == book.id()) {
            let stacked = line.quantity().stack(&quantity);
            line.substitute(|line| *line.quantity = stacked);
            return *line.id();
        }
        let id = CartLineId::new(Uuid::new_v4());
        self.lines.push(CartLine::snapshot(id, book, quantity));
        id
    }

    pub fn update_quantity(&mut self, id: &CartLineId, quantity: Quantity) -> bool {
        match self.lines.iter_mut().find(|line| line.id() == id) {
            Some(line) => {
                line.substitute(|line| *line.quantity = quantity);
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: &CartLineId) -> bool {
        let before = self.lines.len();
        self.lines.retain(|line| line.id() != id);
        before != self.lines.len()
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn total_amount(&self) -> Money {
        self.lines.iter().map(CartLine::subtotal).sum()
    }

    pub fn total_item_count(&self) -> u64 {
        self.lines
            .iter()
            .map(|line| u64::from(*line.quantity().as_ref()))
            .sum()
    }
}
