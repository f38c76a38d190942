mod book;
mod cart;
mod common;
mod identity;
mod order;
mod session;
mod store;

pub use self::{book::*, cart::*, common::*, identity::*, order::*, session::*, store::*};
