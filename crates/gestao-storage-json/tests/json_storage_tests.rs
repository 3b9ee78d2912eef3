use std::fs;

use chrono::NaiveDate;
use gestao_config::Config;
use gestao_core::{CoreError, DataProvider};
use gestao_domain::{
    Dish, Ingredient, PaymentMethod, RecipeLine, Sale, SaleItem, Snapshot, UnitOfMeasure,
};
use gestao_storage_json::{load_snapshot_from_path, JsonDataProvider};
use tempfile::tempdir;
use uuid::Uuid;

fn sample_snapshot() -> Snapshot {
    let mut snapshot = Snapshot::new();
    let rice = Ingredient::new("Arroz", UnitOfMeasure::Kilogram, 3.30);
    let dish = Dish::new("Arroz Branco", "Acompanhamentos", 8.0).with_ingredient(&rice, 0.15);
    let sale = Sale::new(
        NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
        PaymentMethod::DigitalTransfer,
        vec![SaleItem::for_dish(&dish, 2)],
    );
    snapshot.add_ingredient(rice);
    snapshot.add_dish(dish);
    snapshot.add_sale(sale);
    snapshot
}

#[test]
fn json_provider_starts_empty_and_round_trips() {
    let dir = tempdir().expect("tempdir");
    let provider = JsonDataProvider::new(dir.path().to_path_buf()).expect("provider");

    let empty = provider.load_snapshot().expect("load empty");
    assert!(empty.dishes.is_empty());
    assert!(!provider.data_path().exists());

    let snapshot = sample_snapshot();
    provider.save_snapshot(&snapshot).expect("save");
    let loaded = provider.load_snapshot().expect("load");

    assert_eq!(loaded.ingredients, snapshot.ingredients);
    assert_eq!(loaded.dishes, snapshot.dishes);
    assert_eq!(loaded.sales, snapshot.sales);
    assert!(provider.data_path().exists());
}

#[test]
fn json_provider_backs_up_before_overwriting() {
    let dir = tempdir().expect("tempdir");
    let provider = JsonDataProvider::new(dir.path().to_path_buf()).expect("provider");

    provider.save_snapshot(&Snapshot::new()).expect("first save");
    assert!(provider.list_backups().expect("list").is_empty());

    provider.save_snapshot(&sample_snapshot()).expect("second save");
    let backups = provider.list_backups().expect("list");
    assert_eq!(backups.len(), 1);
    let previous = load_snapshot_from_path(&backups[0].path).expect("read backup");
    assert!(previous.dishes.is_empty());
}

#[test]
fn json_provider_keeps_every_backup_from_rapid_saves() {
    let dir = tempdir().expect("tempdir");
    let provider = JsonDataProvider::new(dir.path().to_path_buf()).expect("provider");

    provider.save_snapshot(&Snapshot::new()).expect("first save");
    provider.save_snapshot(&sample_snapshot()).expect("second save");
    provider.save_snapshot(&Snapshot::new()).expect("third save");

    let backups = provider.list_backups().expect("list");
    assert_eq!(backups.len(), 2);
    assert_ne!(backups[0].id, backups[1].id);
    let mut dish_counts: Vec<usize> = backups
        .iter()
        .map(|backup| {
            load_snapshot_from_path(&backup.path)
                .expect("read backup")
                .dishes
                .len()
        })
        .collect();
    dish_counts.sort();
    assert_eq!(dish_counts, vec![0, 1]);
}

#[test]
fn json_provider_restores_named_backup() {
    let dir = tempdir().expect("tempdir");
    let provider = JsonDataProvider::new(dir.path().to_path_buf()).expect("provider");
    let snapshot = sample_snapshot();

    let backup = provider
        .backup_snapshot(&snapshot, Some("antes do fechamento"))
        .expect("backup");
    assert!(backup.id.ends_with("_antes-do-fechamento.json"));
    assert!(backup.created_at.is_some());

    provider.save_snapshot(&Snapshot::new()).expect("overwrite");
    let restored = provider.restore_backup(&backup).expect("restore");
    assert_eq!(restored.dishes.len(), 1);
    assert_eq!(provider.load_snapshot().expect("load").dishes.len(), 1);

    fs::remove_file(&backup.path).expect("remove backup");
    assert!(matches!(
        provider.restore_backup(&backup),
        Err(CoreError::Storage(_))
    ));
}

#[test]
fn json_provider_prunes_backups_past_retention() {
    let dir = tempdir().expect("tempdir");
    let provider = JsonDataProvider::with_retention(dir.path().to_path_buf(), 2).expect("provider");
    let snapshot = sample_snapshot();

    for note in ["um", "dois", "tres"] {
        provider
            .backup_snapshot(&snapshot, Some(note))
            .expect("backup");
    }

    assert_eq!(provider.list_backups().expect("list").len(), 2);
}

#[test]
fn json_provider_persists_config_through_manager() {
    let dir = tempdir().expect("tempdir");
    let provider = JsonDataProvider::new(dir.path().to_path_buf()).expect("provider");

    assert_eq!(provider.load_config().expect("defaults"), Config::default());

    let config = Config {
        company_name: "Cantina da Praca".into(),
        daily_goal: 3500.0,
        ..Config::default()
    };
    provider.save_config(&config).expect("save config");
    assert_eq!(provider.load_config().expect("load config"), config);
    assert!(dir.path().join("config").join("settings.json").exists());

    let broken = Config {
        desired_profit_percent: 70.0,
        ..Config::default()
    };
    assert!(matches!(
        provider.save_config(&broken),
        Err(CoreError::Config(_))
    ));
}

#[test]
fn json_provider_loads_snapshots_with_dangling_references() {
    let dir = tempdir().expect("tempdir");
    let provider = JsonDataProvider::new(dir.path().to_path_buf()).expect("provider");
    let mut snapshot = Snapshot::new();
    let mut dish = Dish::new("Orfao", "Pratos Principais", 25.0);
    dish.recipe
        .push(RecipeLine::new(Uuid::new_v4(), 0.3, UnitOfMeasure::Kilogram));
    snapshot.add_dish(dish);

    provider.save_snapshot(&snapshot).expect("save");
    let loaded = provider.load_snapshot().expect("load tolerates warnings");
    assert_eq!(loaded.dishes.len(), 1);
}

#[test]
fn json_provider_reports_corrupt_data_file() {
    let dir = tempdir().expect("tempdir");
    let provider = JsonDataProvider::new(dir.path().to_path_buf()).expect("provider");
    fs::write(provider.data_path(), "{ not json").expect("write garbage");

    assert!(matches!(
        provider.load_snapshot(),
        Err(CoreError::Storage(_))
    ));
}
