pub use self::{cart::*, order::*, session::*};

mod cart;
mod order;
mod session;
