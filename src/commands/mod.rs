pub mod character;
pub mod console;
