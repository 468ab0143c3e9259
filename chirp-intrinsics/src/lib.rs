//! Pure helpers behind the builtin functions. Nothing in here knows about
//! script values; every function works on plain Rust types.

pub mod codec;
pub mod date;
pub mod text;
