//! Method descriptors
//!
//! A method is registered on the definition surface as a [`MethodDescriptor`]
//! wrapped in [`Value::Method`]: a callable bundled with the modifiers that
//! govern who may reach it. [`describe_method`] is the only way to produce
//! one.

use crate::lookup::find_first;
use crate::modifier::Modifier;
use crate::value::Value;

/// A callable bundled with its access modifiers
///
/// The call slot usually holds a [`Value::Function`]; anything else is a
/// malformed descriptor, rejected when the class is assembled. Modifier
/// order is preserved as given but carries no meaning.
#[derive(Debug, Clone, PartialEq)]
pub struct MethodDescriptor {
    call: Box<Value>,
    modifiers: Vec<Modifier>,
}

impl MethodDescriptor {
    pub(crate) fn new(modifiers: &[Modifier], call: Value) -> Self {
        Self {
            call: Box::new(call),
            modifiers: modifiers.to_vec(),
        }
    }

    /// The value occupying the call slot
    pub fn call(&self) -> &Value {
        &self.call
    }

    /// The modifiers, in the order they were given
    pub fn modifiers(&self) -> &[Modifier] {
        &self.modifiers
    }

    /// Whether `modifier` was given for this method
    pub fn has(&self, modifier: Modifier) -> bool {
        find_first(&self.modifiers, &modifier).is_some()
    }
}

/// Bundle a callable and zero or more modifiers into a method value.
///
/// Writing the returned value to the definition surface registers a method
/// rather than a property. The call slot is not validated here; a descriptor
/// whose slot is not callable fails assembly with
/// [`ClassError::MalformedMethod`](crate::error::ClassError::MalformedMethod).
pub fn describe_method(modifiers: &[Modifier], call: Value) -> Value {
    Value::Method(MethodDescriptor::new(modifiers, call))
}
