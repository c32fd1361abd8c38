pub mod roster;
pub mod validation;
