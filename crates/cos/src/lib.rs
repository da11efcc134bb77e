//! Object graph primitives for pdf-forms.
//!
//! A form field lives in the document as a dictionary of named entries whose
//! values are loosely typed. This crate provides that collaborator:
//!
//! | Rust type       | Role                                          |
//! |-----------------|-----------------------------------------------|
//! | [`CosName`]     | Dictionary key / name object (`/Opt`, `/Ff`)  |
//! | [`CosValue`]    | Tagged value (string, integer, array, ...)    |
//! | [`CosDictionary`] | Insertion-ordered name → value map          |
//! | [`CosError`]    | Typed-access failures                         |
//!
//! Every value can render a `serde_json::Value` view for debugging and
//! assertions.

mod dictionary;
mod error;
mod name;
mod value;

pub use dictionary::CosDictionary;
pub use error::CosError;
pub use name::CosName;
pub use value::CosValue;
