pub use self::{cart::*, order::*, session::*};

pub(crate) mod cart;
mod order;
mod session;
