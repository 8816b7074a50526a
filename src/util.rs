pub mod timer;
pub mod toggles;
