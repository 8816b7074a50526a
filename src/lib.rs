#![forbid(unsafe_code)]

pub mod errors;
pub mod imports;
pub mod model;
pub mod nav;
pub mod query;
pub mod screens;
pub mod util;
