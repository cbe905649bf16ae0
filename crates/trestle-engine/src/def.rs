//! Definition capture
//!
//! The definition callback receives a [`ClassDef`], the mutable surface whose
//! only mutator is the validated [`set`](ClassDef::set). Each write is
//! checked against the reserved-name list before anything becomes visible,
//! then routed into the method or property partition depending on whether the
//! value is a method descriptor.

use rustc_hash::FxHashMap;

use crate::error::{ClassError, ClassResult};
use crate::method::MethodDescriptor;
use crate::modifier::is_reserved;
use crate::value::{Table, Value};

/// Closure-scoped view of a class's real members
///
/// Obtained from [`ClassDef::raw`] during definition. Every surface write
/// lands here unguarded (a method entry holds the real callable even when
/// the method is private), so a method body that captured a clone can still
/// reach a private sibling after the class record has hidden it. The engine
/// never exposes this handle through the class record or an instance.
#[derive(Clone, Debug, Default)]
pub struct RawMembers {
    inner: Table,
}

impl RawMembers {
    /// Read a member as written: a method's real callable, a property's value
    pub fn get(&self, name: &str) -> Option<Value> {
        self.inner.get(name)
    }

    /// Invoke a member, passing `args` through unchanged
    ///
    /// No guard stubs live here, so a private method called this way runs its
    /// real body. The caller is responsible for forwarding the receiver as
    /// the first argument when the method expects one.
    pub fn call(&self, name: &str, args: &[Value]) -> ClassResult<Value> {
        match self.inner.get(name) {
            Some(Value::Function(call)) => call.invoke(args),
            Some(_) => Err(ClassError::NotCallable(name.to_string())),
            None => Err(ClassError::UnknownMember(name.to_string())),
        }
    }

    fn set(&self, name: &str, value: Value) {
        self.inner.set(name, value);
    }
}

/// The mutable surface a definition callback writes into
#[derive(Debug, Default)]
pub struct ClassDef {
    methods: FxHashMap<String, MethodDescriptor>,
    properties: FxHashMap<String, Value>,
    raw: RawMembers,
}

impl ClassDef {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Register a member under `name`.
    ///
    /// A value produced by [`describe_method`](crate::method::describe_method)
    /// lands in the method partition, anything else in the property
    /// partition. The later write wins when a name is reused, including when
    /// it switches a name from one partition to the other. A reserved name is
    /// rejected with [`ClassError::ReservedName`] and the write has no
    /// effect.
    pub fn set(&mut self, name: &str, value: Value) -> ClassResult<()> {
        if is_reserved(name) {
            return Err(ClassError::ReservedName(name.to_string()));
        }
        match value {
            Value::Method(descriptor) => {
                self.properties.remove(name);
                self.raw.set(name, descriptor.call().clone());
                self.methods.insert(name.to_string(), descriptor);
            }
            property => {
                self.methods.remove(name);
                self.raw.set(name, property.clone());
                self.properties.insert(name.to_string(), property);
            }
        }
        Ok(())
    }

    /// Read back what has been written under `name`, if anything
    ///
    /// Methods read back as their real callable, which is what lets one
    /// method look up a sibling while the class is still being defined.
    pub fn get(&self, name: &str) -> Option<Value> {
        self.raw.get(name)
    }

    /// A shared handle onto the real members, for capture by method bodies
    pub fn raw(&self) -> RawMembers {
        self.raw.clone()
    }

    pub(crate) fn into_partitions(
        self,
    ) -> (
        FxHashMap<String, MethodDescriptor>,
        FxHashMap<String, Value>,
    ) {
        (self.methods, self.properties)
    }
}
