use super::*;
use crate::test_utils::arb_messy_string;
use proptest::prelude::*;

/// Generates an arbitrary Config
fn arb_config() -> impl Strategy<Value = Config> {
    (
        arb_messy_string(),
        any::<u16>(),
        prop::option::of(arb_messy_string()),
        any::<bool>(),
    )
        .prop_map(|(host, port, data_file, json_logs)| Config {
            host,
            port,
            data_file: data_file.map(PathBuf::from),
            json_logs,
        })
}

/// Generates an arbitrary ConfigUpdate
fn arb_config_update() -> impl Strategy<Value = ConfigUpdate> {
    (
        prop::option::of(arb_messy_string()),
        prop::option::of(any::<u16>()),
        prop::option::of(arb_messy_string()),
        prop::option::of(any::<bool>()),
        prop::option::of(arb_messy_string()),
    )
        .prop_map(|(host, port, data_file, json_logs, server_url)| ConfigUpdate {
            host,
            port,
            data_file: data_file.map(PathBuf::from),
            json_logs,
            server_url,
        })
}

// ============================================================================
// C1: apply_update Algebraic Properties
// ============================================================================

proptest! {
    /// C1.1: Identity: apply_update(default) == original config
    #[test]
    fn prop_c1_1_identity(config in arb_config()) {
        let updated = config.clone().apply_update(ConfigUpdate::default());
        prop_assert_eq!(updated, config);
    }

    /// C1.2: Every Some field replaces, every None field preserves
    #[test]
    fn prop_c1_2_field_wise_override(config in arb_config(), update in arb_config_update()) {
        let updated = config.clone().apply_update(update.clone());

        prop_assert_eq!(updated.host, update.host.unwrap_or(config.host));
        prop_assert_eq!(updated.port, update.port.unwrap_or(config.port));
        prop_assert_eq!(updated.data_file, update.data_file.or(config.data_file));
        prop_assert_eq!(updated.json_logs, update.json_logs.unwrap_or(config.json_logs));
    }

    /// C1.3: Last write wins: applying a then b equals applying b over a's fields
    #[test]
    fn prop_c1_3_last_write_wins(
        config in arb_config(),
        first in arb_config_update(),
        second in arb_config_update(),
    ) {
        let sequential = config.clone().apply_update(first.clone()).apply_update(second.clone());

        let merged = ConfigUpdate {
            host: second.host.or(first.host),
            port: second.port.or(first.port),
            data_file: second.data_file.or(first.data_file),
            json_logs: second.json_logs.or(first.json_logs),
            server_url: second.server_url.or(first.server_url),
        };
        let combined = config.apply_update(merged);

        prop_assert_eq!(sequential, combined);
    }

    /// C1.4: Idempotence: applying the same update twice changes nothing further
    #[test]
    fn prop_c1_4_idempotent(config in arb_config(), update in arb_config_update()) {
        let once = config.apply_update(update.clone());
        let twice = once.clone().apply_update(update);
        prop_assert_eq!(once, twice);
    }
}

// ============================================================================
// C2: Derived values
// ============================================================================

proptest! {
    /// C2.1: bind_address always ends with the configured port
    #[test]
    fn prop_c2_1_bind_address_port(config in arb_config()) {
        let address = config.bind_address();
        let expected_suffix = format!(":{}", config.port);
        prop_assert!(address.ends_with(&expected_suffix));
        prop_assert!(address.starts_with(&config.host));
    }

    /// C2.2: A configured server URL always wins over the file value
    #[test]
    fn prop_c2_2_cli_url_wins(cli in arb_messy_string(), update in arb_config_update()) {
        prop_assert_eq!(resolve_server_url(Some(cli.clone()), update), cli);
    }
}
