/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust structs/enums with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

pub mod accounts;
pub mod enums;
pub mod market;

pub use accounts::*;
pub use enums::*;
pub use market::*;
