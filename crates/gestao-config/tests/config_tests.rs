use gestao_config::{Config, ConfigError, ConfigManager};
use tempfile::tempdir;

#[test]
fn default_config_has_non_empty_fields() {
    let cfg = Config::default();

    assert!(!cfg.company_name.is_empty());
    assert!(cfg.daily_goal > 0.0);
}

#[test]
fn config_manager_persists_and_loads_config() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::new(dir.path().join("settings.json"), dir.path().join("backups"));

    let cfg = Config {
        company_name: "Cantina da Praia".into(),
        tax_rate: 6.0,
        daily_goal: 1500.0,
        ..Config::default()
    };

    manager.save(&cfg).expect("save config");
    let loaded = manager.load().expect("load config");

    assert_eq!(loaded, cfg);
}

#[test]
fn missing_settings_file_loads_defaults() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).expect("manager");

    let loaded = manager.load().expect("load defaults");
    assert_eq!(loaded, Config::default());
}

#[test]
fn saving_invalid_markup_is_refused() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).expect("manager");

    let cfg = Config {
        fixed_cost_percent: 50.0,
        desired_profit_percent: 45.0,
        ..Config::default()
    };

    let err = manager.save(&cfg).expect_err("invalid config");
    assert!(matches!(err, ConfigError::MarkupUndefined { .. }));
    assert!(!manager.settings_path().exists());
}

#[test]
fn backups_can_be_listed_restored_and_pruned() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).expect("manager");

    let cfg = Config {
        company_name: "Backup Bistro".into(),
        ..Config::default()
    };
    let first = manager.backup(&cfg, Some("first")).expect("backup");
    let second = manager.backup(&cfg, Some("second")).expect("backup");

    let listed = manager.list_backups().expect("list");
    assert_eq!(listed.len(), 2);
    assert!(listed.contains(&first));
    assert!(listed.contains(&second));

    let restored = manager.restore(&first).expect("restore");
    assert_eq!(restored.company_name, "Backup Bistro");

    let removed = manager.prune_backups(1).expect("prune");
    assert_eq!(removed, 1);
    assert_eq!(manager.list_backups().expect("list").len(), 1);

    let missing = manager.restore("settings_19990101_0000.json");
    assert!(matches!(missing, Err(ConfigError::BackupNotFound(_))));
}
