pub mod field;
pub mod tempo;
pub mod time;
