mod cart;
mod identity;
mod order;
mod session;

pub use self::{cart::*, identity::*, order::*, session::*};
