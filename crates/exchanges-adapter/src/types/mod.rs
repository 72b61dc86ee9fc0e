/*
[INPUT]:  Exchange parameter definitions and serde requirements
[OUTPUT]: Typed Rust structs/enums with serialization support
[POS]:    Data layer - typed request parameters for facade methods
[UPDATE]: When request schemas change or new types added
*/

pub mod enums;
pub mod requests;

pub use enums::*;
pub use requests::*;
