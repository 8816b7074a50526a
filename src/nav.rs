pub use self::{modal::*, provider::*, route::*};

mod modal;
mod provider;
mod route;
