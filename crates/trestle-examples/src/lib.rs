//! Example classes built with the Trestle engine
//!
//! Three small classes exercising the public surface end to end: a
//! static-only `Math`, a `Cake` with a private helper method, and an
//! `Account` whose `_construct` seeds per-instance state. The crate's tests
//! drive them the way calling code would.

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

use trestle_engine::{
    define_class, describe_method, ClassError, ClassRecord, ClassResult, Modifier, ObjectInstance,
    Value,
};

/// Pull the receiver out of a method's argument list
fn receiver(args: &[Value]) -> ClassResult<ObjectInstance> {
    args.first()
        .and_then(Value::as_object)
        .cloned()
        .ok_or_else(|| ClassError::TypeError("method expects a receiver".into()))
}

fn int_arg(args: &[Value], index: usize, what: &str) -> ClassResult<i64> {
    args.get(index)
        .and_then(Value::as_int)
        .ok_or_else(|| ClassError::TypeError(format!("{what} must be an integer")))
}

/// A class of static arithmetic helpers.
///
/// `Math.add(7, 3)` works directly on the record; no instance is ever
/// constructed.
pub fn math_class() -> ClassResult<ClassRecord> {
    define_class(|def| {
        def.set(
            "add",
            describe_method(
                &[Modifier::Static],
                Value::function(|args| {
                    let a = int_arg(args, 0, "add: left operand")?;
                    let b = int_arg(args, 1, "add: right operand")?;
                    Ok(Value::int(a + b))
                }),
            ),
        )
    })
}

/// A cake that knows whether it is cooked.
///
/// `temp` is a plain property, `get_temperature` is private, and the public
/// `is_cooked` reaches the private sibling through the raw surface handle
/// captured inside the definition closure.
pub fn cake_class() -> ClassResult<ClassRecord> {
    define_class(|def| {
        let raw = def.raw();
        def.set("temp", Value::int(250))?;
        def.set(
            "get_temperature",
            describe_method(
                &[Modifier::Private],
                Value::function(|args| {
                    let this = receiver(args)?;
                    Ok(this.get("temp").unwrap_or(Value::Nil))
                }),
            ),
        )?;
        def.set(
            "is_cooked",
            describe_method(
                &[],
                Value::function(move |args| {
                    let temp = raw
                        .call("get_temperature", args)?
                        .as_number()
                        .ok_or_else(|| ClassError::TypeError("temp is not a number".into()))?;
                    if temp >= 250.0 {
                        Ok(Value::str("Cooked!"))
                    } else {
                        Ok(Value::str("Still raw"))
                    }
                }),
            ),
        )
    })
}

/// A bank account seeded by `_construct`.
///
/// `instantiate(&[opening])` stores the opening balance on the fresh
/// instance; `deposit` and `balance_of` then operate on per-instance state.
pub fn account_class() -> ClassResult<ClassRecord> {
    define_class(|def| {
        def.set("balance", Value::int(0))?;
        def.set(
            "_construct",
            describe_method(
                &[],
                Value::function(|args| {
                    let this = receiver(args)?;
                    if let Some(opening) = args.get(1) {
                        this.set("balance", opening.clone());
                    }
                    Ok(Value::Nil)
                }),
            ),
        )?;
        def.set(
            "deposit",
            describe_method(
                &[],
                Value::function(|args| {
                    let this = receiver(args)?;
                    let amount = int_arg(args, 1, "deposit amount")?;
                    let balance = this.get("balance").and_then(|v| v.as_int()).unwrap_or(0);
                    this.set("balance", Value::int(balance + amount));
                    Ok(Value::int(balance + amount))
                }),
            ),
        )?;
        def.set(
            "balance_of",
            describe_method(
                &[],
                Value::function(|args| {
                    let this = receiver(args)?;
                    Ok(this.get("balance").unwrap_or(Value::Nil))
                }),
            ),
        )
    })
}
