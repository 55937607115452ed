use std::collections::BTreeMap;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use entente::board::{GameState, Order, PowerId, UnitKind};
use entente::resolve::resolve;

/// A plausible 1901 spring: every power opens, with a contested Burgundy
/// and a Black Sea standoff in the mix.
fn opening_orders() -> BTreeMap<PowerId, Vec<Order>> {
    let mut orders = BTreeMap::new();
    orders.insert(
        PowerId::Austria,
        vec![
            Order::mov(PowerId::Austria, UnitKind::Army, "vie", "gal"),
            Order::mov(PowerId::Austria, UnitKind::Army, "bud", "ser"),
            Order::mov(PowerId::Austria, UnitKind::Fleet, "tri", "alb"),
        ],
    );
    orders.insert(
        PowerId::England,
        vec![
            Order::mov(PowerId::England, UnitKind::Fleet, "lon", "nth"),
            Order::mov(PowerId::England, UnitKind::Fleet, "edi", "nrg"),
            Order::mov(PowerId::England, UnitKind::Army, "lvp", "yor"),
        ],
    );
    orders.insert(
        PowerId::France,
        vec![
            Order::mov(PowerId::France, UnitKind::Army, "par", "bur"),
            Order::mov(PowerId::France, UnitKind::Army, "mar", "spa"),
            Order::mov(PowerId::France, UnitKind::Fleet, "bre", "mao"),
        ],
    );
    orders.insert(
        PowerId::Germany,
        vec![
            Order::mov(PowerId::Germany, UnitKind::Army, "mun", "bur"),
            Order::mov(PowerId::Germany, UnitKind::Army, "ber", "kie"),
            Order::mov(PowerId::Germany, UnitKind::Fleet, "kie", "den"),
        ],
    );
    orders.insert(
        PowerId::Italy,
        vec![
            Order::mov(PowerId::Italy, UnitKind::Army, "ven", "pie"),
            Order::mov(PowerId::Italy, UnitKind::Army, "rom", "ven"),
            Order::mov(PowerId::Italy, UnitKind::Fleet, "nap", "ion"),
        ],
    );
    orders.insert(
        PowerId::Russia,
        vec![
            Order::mov(PowerId::Russia, UnitKind::Army, "mos", "ukr"),
            Order::mov(PowerId::Russia, UnitKind::Army, "war", "gal"),
            Order::mov(PowerId::Russia, UnitKind::Fleet, "sev", "bla"),
            Order::mov(PowerId::Russia, UnitKind::Fleet, "stp", "bot"),
        ],
    );
    orders.insert(
        PowerId::Turkey,
        vec![
            Order::mov(PowerId::Turkey, UnitKind::Fleet, "ank", "bla"),
            Order::mov(PowerId::Turkey, UnitKind::Army, "con", "bul"),
            Order::mov(PowerId::Turkey, UnitKind::Army, "smy", "con"),
        ],
    );
    orders
}

fn bench_resolve(c: &mut Criterion) {
    let state = GameState::standard();
    let orders = opening_orders();
    c.bench_function("resolve opening turn", |b| {
        b.iter(|| resolve(black_box(&state), black_box(&orders)).unwrap())
    });
    c.bench_function("build standard state", |b| {
        b.iter(|| black_box(GameState::standard()))
    });
}

criterion_group!(benches, bench_resolve);
criterion_main!(benches);
