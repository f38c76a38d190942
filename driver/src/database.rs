mod backend;
mod memory;
mod redis;
mod remote;

pub use self::{backend::*, memory::*, redis::*, remote::*};
