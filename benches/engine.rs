use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use cart_eng::{Catalog, Command, Engine, Price, Product, Rarity};

/// Synthetic catalog of common-rarity products (each seeds 10 units).
fn synthetic_catalog(num_products: u32) -> Catalog {
    (0..num_products)
        .map(|i| {
            (
                format!("sku-{i}"),
                Product {
                    name: format!("Product {i}"),
                    price: Price::from_units(1_000 + i as u64),
                    rarity: Rarity::Common,
                    img: None,
                },
            )
        })
        .collect()
}

/// Valid command sequence: each round reserves one unit of every product and
/// checks out. Common rarity seeds 10 units, so up to 10 rounds never hit an
/// out-of-stock rejection.
fn shopping_rounds(num_products: u32, rounds: u32) -> Vec<Command> {
    let mut commands = Vec::with_capacity(((num_products + 1) * rounds) as usize);
    for _ in 0..rounds {
        for i in 0..num_products {
            commands.push(Command::AddToCart {
                sku: format!("sku-{i}"),
                qty: 1,
            });
        }
        commands.push(Command::Checkout);
    }
    commands
}

fn bench_shopping_rounds(c: &mut Criterion) {
    let mut group = c.benchmark_group("shopping_rounds");

    for num_products in [16u32, 128, 512] {
        let commands = shopping_rounds(num_products, 10);
        group.bench_with_input(
            BenchmarkId::from_parameter(num_products),
            &commands,
            |b, commands| {
                b.iter(|| {
                    let mut engine = Engine::in_memory(synthetic_catalog(num_products));
                    for cmd in commands {
                        let _ = black_box(engine.apply(cmd.clone()));
                    }
                    engine
                });
            },
        );
    }

    group.finish();
}

fn bench_cart_churn(c: &mut Criterion) {
    let mut group = c.benchmark_group("cart_churn");

    // Repeated add/remove of a single sku; the cart never exceeds one unit,
    // so no rejection path is taken.
    group.bench_function("add_remove_10k", |b| {
        b.iter(|| {
            let mut engine = Engine::in_memory(synthetic_catalog(16));
            for _ in 0..10_000 {
                let _ = black_box(engine.add_to_cart("sku-0", 1));
                let _ = black_box(engine.remove_from_cart("sku-0"));
            }
            engine
        });
    });

    group.finish();
}

fn bench_rejections(c: &mut Criterion) {
    let mut group = c.benchmark_group("rejections");

    // Every add beyond the seeded 10 units is rejected; measures the cost of
    // the validation-only path.
    group.bench_function("insufficient_stock_10k", |b| {
        b.iter(|| {
            let mut engine = Engine::in_memory(synthetic_catalog(1));
            let _ = engine.add_to_cart("sku-0", 10);
            for _ in 0..10_000 {
                let _ = black_box(engine.add_to_cart("sku-0", 1));
            }
            engine
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_shopping_rounds,
    bench_cart_churn,
    bench_rejections
);

criterion_main!(benches);
