//! Benchmarks for registry lookup and operator creation.
//!
//! Run with: cargo bench -p lattice-op

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use lattice_core::{Context, NdArray};
use lattice_op::{BoxedOperator, Operator, OperatorRegistry, RegistryItem};

struct NoopOp {
    ctx: Context,
}

impl Operator for NoopOp {
    fn name(&self) -> &'static str {
        "noop"
    }

    fn backend(&self) -> &str {
        "bench"
    }

    fn context(&self) -> &Context {
        &self.ctx
    }

    fn apply(&self, input: &NdArray) -> NdArray {
        input.clone()
    }
}

fn registry_with_backends(n: usize) -> OperatorRegistry<()> {
    let mut registry = OperatorRegistry::new("noop");
    for i in 0..n {
        registry.add(RegistryItem::new(
            format!("backend-{i}"),
            |ctx: &Context, _: &()| Box::new(NoopOp { ctx: ctx.clone() }) as BoxedOperator,
        ));
    }
    registry
}

fn bench_create_first_choice(c: &mut Criterion) {
    let registry = registry_with_backends(8);
    let ctx = Context::new().with_backend("backend-0");

    c.bench_function("create_first_choice", |b| {
        b.iter(|| black_box(registry.create(&ctx, &()).unwrap()));
    });
}

fn bench_create_after_fallback(c: &mut Criterion) {
    let registry = registry_with_backends(8);
    let ctx = Context::from_backends(["missing-a", "missing-b", "backend-7"]);

    c.bench_function("create_after_fallback", |b| {
        b.iter(|| black_box(registry.create(&ctx, &()).unwrap()));
    });
}

criterion_group!(benches, bench_create_first_choice, bench_create_after_fallback);
criterion_main!(benches);
