pub mod field;
pub mod glitter;
