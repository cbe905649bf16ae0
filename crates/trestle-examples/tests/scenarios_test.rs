//! End-to-end runs of the example classes

use trestle_engine::{ClassError, Value};
use trestle_examples::{account_class, cake_class, math_class};

#[test]
fn test_math_add_without_instantiation() {
    let math = math_class().unwrap();
    assert_eq!(
        math.call("add", &[Value::int(7), Value::int(3)]),
        Ok(Value::int(10))
    );
}

#[test]
fn test_math_add_rejects_bad_operands() {
    let math = math_class().unwrap();
    let err = math
        .call("add", &[Value::str("seven"), Value::int(3)])
        .unwrap_err();
    assert!(matches!(err, ClassError::TypeError(_)));
}

#[test]
fn test_cake_is_cooked_through_private_sibling() {
    let cake = cake_class().unwrap();
    let slice = cake.instantiate(&[]).unwrap();
    assert_eq!(slice.call("is_cooked", &[]), Ok(Value::str("Cooked!")));
}

#[test]
fn test_cake_private_method_is_unreachable_directly() {
    let cake = cake_class().unwrap();
    let slice = cake.instantiate(&[]).unwrap();
    assert_eq!(
        slice.call("get_temperature", &[]),
        Err(ClassError::PrivateAccess("get_temperature".to_string()))
    );
    // At class level the non-static guard wins per resolution order.
    assert_eq!(
        cake.call("get_temperature", &[]),
        Err(ClassError::StaticAccess("get_temperature".to_string()))
    );
}

#[test]
fn test_cooler_cake_reports_still_raw() {
    let cake = cake_class().unwrap();
    let slice = cake.instantiate(&[]).unwrap();
    slice.set("temp", Value::int(180));
    assert_eq!(slice.call("is_cooked", &[]), Ok(Value::str("Still raw")));
}

#[test]
fn test_account_construct_seeds_balance() {
    let accounts = account_class().unwrap();
    let checking = accounts.instantiate(&[Value::int(100)]).unwrap();
    assert_eq!(checking.call("balance_of", &[]), Ok(Value::int(100)));

    let empty = accounts.instantiate(&[]).unwrap();
    assert_eq!(empty.call("balance_of", &[]), Ok(Value::int(0)));
}

#[test]
fn test_account_instances_do_not_share_balances() {
    let accounts = account_class().unwrap();
    let a = accounts.instantiate(&[Value::int(10)]).unwrap();
    let b = accounts.instantiate(&[Value::int(10)]).unwrap();

    assert_eq!(a.call("deposit", &[Value::int(5)]), Ok(Value::int(15)));
    assert_eq!(a.call("balance_of", &[]), Ok(Value::int(15)));
    assert_eq!(b.call("balance_of", &[]), Ok(Value::int(10)));
}

#[test]
fn test_deposit_requires_an_instance() {
    let accounts = account_class().unwrap();
    assert_eq!(
        accounts.call("deposit", &[Value::int(5)]),
        Err(ClassError::StaticAccess("deposit".to_string()))
    );
}
