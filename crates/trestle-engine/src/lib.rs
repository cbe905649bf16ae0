//! Trestle class-builder engine
//!
//! Declarative class definition for table-based dynamic objects:
//! - **Definition capture**: a callback writes members into a validated
//!   surface (`def` module)
//! - **Modifiers**: `static` and `private` method tokens (`modifier` module)
//! - **Assembly**: captured members become an immutable class record with
//!   access rules enforced by guard stubs (`class` module)
//! - **Instantiation**: each record carries a constructor stamping out
//!   independent instances from a shallow-copied template
//!
//! # Example
//!
//! ```rust,ignore
//! use trestle_engine::{define_class, describe_method, Modifier, Value};
//!
//! let math = define_class(|def| {
//!     def.set(
//!         "add",
//!         describe_method(&[Modifier::Static], Value::function(|args| {
//!             let a = args[0].as_int().unwrap();
//!             let b = args[1].as_int().unwrap();
//!             Ok(Value::int(a + b))
//!         })),
//!     )
//! })?;
//!
//! assert_eq!(math.call("add", &[Value::int(7), Value::int(3)])?, Value::int(10));
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

pub mod class;
pub mod def;
pub mod error;
pub mod lookup;
pub mod method;
pub mod modifier;
pub mod value;

pub use class::{define_class, ClassRecord, ObjectInstance, CONSTRUCT_METHOD};
pub use def::{ClassDef, RawMembers};
pub use error::{ClassError, ClassResult};
pub use lookup::find_first;
pub use method::{describe_method, MethodDescriptor};
pub use modifier::{is_reserved, modifiers, Modifier, RESERVED_NAMES};
pub use value::{NativeFn, Table, Value};
