use chrono::{Duration, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tempfile::tempdir;

use gestao_facil::{
    domain::{Dish, FixedCost, Ingredient, MonthKey, PaymentMethod, Sale, SaleItem, Snapshot, UnitOfMeasure},
    engine::{DreService, PeriodService},
    storage::{load_snapshot_from_path, save_snapshot_to_path},
    Config,
};

fn build_sample_snapshot(sale_count: usize) -> Snapshot {
    let mut snapshot = Snapshot::new();
    let ingredients: Vec<Ingredient> = (0..50)
        .map(|idx| {
            Ingredient::new(
                format!("Ingrediente {idx}"),
                UnitOfMeasure::Kilogram,
                2.0 + idx as f64 * 0.35,
            )
        })
        .collect();
    let dishes: Vec<Dish> = (0..40)
        .map(|idx| {
            let mut dish = Dish::new(format!("Prato {idx}"), "Pratos Principais", 25.0 + idx as f64);
            for offset in 0..5 {
                dish.add_ingredient(&ingredients[(idx + offset * 7) % ingredients.len()], 0.1);
            }
            dish
        })
        .collect();

    let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
    for idx in 0..sale_count {
        let method = PaymentMethod::ALL[idx % PaymentMethod::ALL.len()];
        let items = vec![
            SaleItem::for_dish(&dishes[idx % dishes.len()], 1 + (idx % 3) as u32),
            SaleItem::for_dish(&dishes[(idx * 7) % dishes.len()], 1),
        ];
        snapshot.add_sale(Sale::new(start + Duration::days((idx % 90) as i64), method, items));
    }
    for ingredient in ingredients {
        snapshot.add_ingredient(ingredient);
    }
    for dish in dishes {
        snapshot.add_dish(dish);
    }
    snapshot.add_fixed_cost(FixedCost::new("Aluguel", 3500.0, "Aluguel"));
    snapshot.add_fixed_cost(FixedCost::new("Salarios", 9000.0, "Funcionarios"));
    snapshot
}

fn bench_engines(c: &mut Criterion) {
    let snapshot = build_sample_snapshot(black_box(10_000));
    let config = Config::default();
    let february = MonthKey::new(2025, 2).unwrap();
    let today = NaiveDate::from_ymd_opt(2025, 3, 31).unwrap();

    c.bench_function("dre_month_10k_sales", |b| {
        b.iter(|| black_box(DreService::for_month(&snapshot, february, &config)))
    });

    c.bench_function("sales_series_30d_10k_sales", |b| {
        b.iter(|| black_box(PeriodService::sales_series(&snapshot.sales, 30, today)))
    });
}

fn bench_snapshot_io(c: &mut Criterion) {
    let snapshot = build_sample_snapshot(black_box(10_000));
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("data.json");

    c.bench_function("snapshot_save_10k", |b| {
        b.iter(|| save_snapshot_to_path(&snapshot, &path).expect("save snapshot"))
    });

    save_snapshot_to_path(&snapshot, &path).expect("seed");

    c.bench_function("snapshot_load_10k", |b| {
        b.iter(|| black_box(load_snapshot_from_path(&path).expect("load snapshot")))
    });
}

criterion_group!(benches, bench_engines, bench_snapshot_io);
criterion_main!(benches);
