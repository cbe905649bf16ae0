use criterion::{black_box, criterion_group, criterion_main, Criterion};
use trestle_engine::{define_class, describe_method, ClassRecord, Modifier, Value};

fn build_class() -> ClassRecord {
    define_class(|def| {
        def.set("temp", Value::int(250))?;
        def.set("flavor", Value::str("vanilla"))?;
        def.set(
            "add",
            describe_method(
                &[Modifier::Static],
                Value::function(|args| {
                    let a = args.first().and_then(Value::as_int).unwrap_or(0);
                    let b = args.get(1).and_then(Value::as_int).unwrap_or(0);
                    Ok(Value::int(a + b))
                }),
            ),
        )?;
        def.set(
            "read_temp",
            describe_method(
                &[],
                Value::function(|args| {
                    let this = args.first().and_then(Value::as_object);
                    Ok(this.and_then(|o| o.get("temp")).unwrap_or(Value::Nil))
                }),
            ),
        )
    })
    .expect("benchmark class must assemble")
}

fn bench_define_class(c: &mut Criterion) {
    c.bench_function("define_class", |b| b.iter(|| black_box(build_class())));
}

fn bench_instantiate(c: &mut Criterion) {
    let class = build_class();
    c.bench_function("instantiate", |b| {
        b.iter(|| black_box(class.instantiate(&[]).unwrap()))
    });
}

fn bench_instance_call(c: &mut Criterion) {
    let class = build_class();
    let instance = class.instantiate(&[]).unwrap();
    c.bench_function("instance_method_call", |b| {
        b.iter(|| black_box(instance.call("read_temp", &[]).unwrap()))
    });
}

criterion_group!(
    benches,
    bench_define_class,
    bench_instantiate,
    bench_instance_call
);
criterion_main!(benches);
