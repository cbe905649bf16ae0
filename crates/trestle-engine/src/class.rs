//! Class assembly and instantiation
//!
//! [`define_class`] runs a definition callback once against a fresh surface,
//! then assembles the captured partitions into an immutable [`ClassRecord`]
//! and its internal instantiable template in a single pass. The record is
//! built from a mutable draft inside this module and never mutated after
//! construction; freezing is the type, not a runtime flag.

use std::cell::RefCell;
use std::rc::Rc;

use rustc_hash::FxHashMap;

use crate::def::ClassDef;
use crate::error::{ClassError, ClassResult};
use crate::modifier::Modifier;
use crate::value::Value;

/// Method name invoked automatically on every fresh instance
pub const CONSTRUCT_METHOD: &str = "_construct";

/// Define a class.
///
/// `define` is invoked exactly once, synchronously, with the fresh definition
/// surface; every member it registers is then resolved into the returned
/// record. Assembly either completes fully or the triggering error
/// propagates; no partial record is ever returned.
pub fn define_class<F>(define: F) -> ClassResult<ClassRecord>
where
    F: FnOnce(&mut ClassDef) -> ClassResult<()>,
{
    let mut def = ClassDef::new();
    define(&mut def)?;
    ClassRecord::assemble(def)
}

/// The immutable artifact of [`define_class`]
///
/// Static methods and properties are readable and callable directly; every
/// non-static or private method is present as a guard stub that fails with
/// the matching access violation. The member-name shape never changes after
/// assembly.
#[derive(Clone, Debug)]
pub struct ClassRecord {
    members: FxHashMap<String, Value>,
    template: FxHashMap<String, Value>,
    has_construct: bool,
}

impl ClassRecord {
    fn assemble(def: ClassDef) -> ClassResult<Self> {
        let (methods, properties) = def.into_partitions();
        let has_construct = methods.contains_key(CONSTRUCT_METHOD);

        let mut members = FxHashMap::default();
        let mut template = FxHashMap::default();

        for (name, descriptor) in &methods {
            let call = match descriptor.call() {
                Value::Function(call) => call.clone(),
                _ => return Err(ClassError::MalformedMethod(name.clone())),
            };
            let is_private = descriptor.has(Modifier::Private);
            let is_static = descriptor.has(Modifier::Static);

            let mut instance_slot = Value::Function(call.clone());
            let mut class_slot = Value::Function(call);
            if is_private {
                let guard = private_guard(name);
                instance_slot = guard.clone();
                class_slot = guard;
            }
            // Order matters: a private non-static method reports the static
            // violation at class level while instances keep the private guard.
            if !is_static {
                class_slot = static_guard(name);
            }

            template.insert(name.clone(), instance_slot);
            members.insert(name.clone(), class_slot);
        }

        for (name, value) in properties {
            template.insert(name.clone(), value.clone());
            members.insert(name, value);
        }

        Ok(Self {
            members,
            template,
            has_construct,
        })
    }

    /// Read a member: a property value, a static method's callable, or a
    /// guard stub
    pub fn get(&self, name: &str) -> Option<Value> {
        self.members.get(name).cloned()
    }

    /// Invoke a class-level member with `args` exactly as given
    ///
    /// Succeeds for static methods; a non-static method fails with
    /// [`ClassError::StaticAccess`] and a private one with
    /// [`ClassError::PrivateAccess`].
    pub fn call(&self, name: &str, args: &[Value]) -> ClassResult<Value> {
        match self.members.get(name) {
            Some(Value::Function(call)) => call.invoke(args),
            Some(_) => Err(ClassError::NotCallable(name.to_string())),
            None => Err(ClassError::UnknownMember(name.to_string())),
        }
    }

    /// Whether the class defines `name`
    pub fn has_member(&self, name: &str) -> bool {
        self.members.contains_key(name)
    }

    /// Member names, in no particular order
    pub fn member_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.members.keys().map(String::as_str)
    }

    /// Number of members
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether the class has no members
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Construct a new object instance.
    ///
    /// Shallow-copies the instantiable template (top-level bindings are
    /// duplicated, referenced structures shared) and then, if the class defines
    /// `_construct`, invokes it on the fresh instance with `args` before
    /// returning. A failing `_construct` (including a private one, whose
    /// template slot is a guard) propagates and no instance is returned.
    pub fn instantiate(&self, args: &[Value]) -> ClassResult<ObjectInstance> {
        let instance = ObjectInstance::from_template(&self.template);
        if self.has_construct {
            instance.call(CONSTRUCT_METHOD, args)?;
        }
        Ok(instance)
    }
}

/// One constructed object instance
///
/// Owns its own top-level name→value bindings, seeded from the class's
/// instantiable template. Rebinding a name on one instance never affects
/// siblings or the class record; a shared table value stays aliased across
/// instances until one of them rebinds the name.
#[derive(Clone, Debug)]
pub struct ObjectInstance {
    fields: Rc<RefCell<FxHashMap<String, Value>>>,
}

impl ObjectInstance {
    fn from_template(template: &FxHashMap<String, Value>) -> Self {
        Self {
            fields: Rc::new(RefCell::new(template.clone())),
        }
    }

    /// Read a top-level binding
    pub fn get(&self, name: &str) -> Option<Value> {
        self.fields.borrow().get(name).cloned()
    }

    /// Rebind `name` on this instance only
    pub fn set(&self, name: &str, value: Value) {
        self.fields.borrow_mut().insert(name.to_string(), value);
    }

    /// Invoke a member with this instance prepended as the receiver
    ///
    /// The method-call convention of the system: `instance.call("m", args)`
    /// runs the member with `(self, args...)`. Private members resolve to
    /// their guard stub and fail with [`ClassError::PrivateAccess`].
    pub fn call(&self, name: &str, args: &[Value]) -> ClassResult<Value> {
        let member = self
            .get(name)
            .ok_or_else(|| ClassError::UnknownMember(name.to_string()))?;
        match member {
            Value::Function(call) => {
                let mut full = Vec::with_capacity(args.len() + 1);
                full.push(Value::Object(self.clone()));
                full.extend_from_slice(args);
                call.invoke(&full)
            }
            _ => Err(ClassError::NotCallable(name.to_string())),
        }
    }

    /// Invoke a member exactly as stored, without inserting the receiver
    ///
    /// This is how a static method reached through an instance is called with
    /// the same convention as on the class record.
    pub fn call_unbound(&self, name: &str, args: &[Value]) -> ClassResult<Value> {
        let member = self
            .get(name)
            .ok_or_else(|| ClassError::UnknownMember(name.to_string()))?;
        match member {
            Value::Function(call) => call.invoke(args),
            _ => Err(ClassError::NotCallable(name.to_string())),
        }
    }
}

impl PartialEq for ObjectInstance {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.fields, &other.fields)
    }
}

fn private_guard(name: &str) -> Value {
    let name = name.to_string();
    Value::function(move |_| Err(ClassError::PrivateAccess(name.clone())))
}

fn static_guard(name: &str) -> Value {
    let name = name.to_string();
    Value::function(move |_| Err(ClassError::StaticAccess(name.clone())))
}
