//! Property-based tests for configuration system.

use super::merger::ConfigMerger;
use super::schema::{Config, GeneratorConfig, OutputFormat, SearchConfig};
use proptest::prelude::*;
use std::path::PathBuf;

fn search_strategy() -> impl Strategy<Value = SearchConfig> {
    (
        prop::option::of(1u64..1_000_000),
        prop::option::of(1u64..60_000),
        prop::option::of(1u64..4_096),
    )
        .prop_map(|(max_steps, time_limit_ms, check_interval)| SearchConfig {
            max_steps,
            time_limit_ms,
            check_interval,
        })
}

fn generator_strategy() -> impl Strategy<Value = GeneratorConfig> {
    (
        prop::option::of(any::<u64>()),
        prop::option::of(1usize..10_000),
        prop::option::of(0.0f64..=1.0),
    )
        .prop_map(|(seed, count, available_ratio)| GeneratorConfig {
            seed,
            count,
            available_ratio,
        })
}

fn format_strategy() -> impl Strategy<Value = OutputFormat> {
    prop_oneof![
        Just(OutputFormat::Json),
        Just(OutputFormat::Human),
        Just(OutputFormat::Csv),
    ]
}

fn config_strategy() -> impl Strategy<Value = Config> {
    (
        prop::option::of("[a-z]{1,12}\\.json"),
        prop::option::of(search_strategy()),
        prop::option::of(generator_strategy()),
        prop::option::of(format_strategy()),
    )
        .prop_map(|(rooms_file, search, generator, output_format)| Config {
            rooms_file: rooms_file.map(PathBuf::from),
            search,
            generator,
            output_format,
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // Every field set in the higher source survives the merge
    #[test]
    fn config_merge_higher_precedence_wins(low in config_strategy(), high in config_strategy()) {
        let mut result = low.clone();
        ConfigMerger::merge_into(&mut result, &high);

        if high.rooms_file.is_some() {
            prop_assert_eq!(&result.rooms_file, &high.rooms_file);
        } else {
            prop_assert_eq!(&result.rooms_file, &low.rooms_file);
        }

        if let Some(format) = high.output_format {
            prop_assert_eq!(result.output_format, Some(format));
        } else {
            prop_assert_eq!(result.output_format, low.output_format);
        }

        if let Some(high_search) = &high.search {
            let merged = result.search.as_ref().unwrap();
            if high_search.max_steps.is_some() {
                prop_assert_eq!(merged.max_steps, high_search.max_steps);
            }
            if high_search.time_limit_ms.is_some() {
                prop_assert_eq!(merged.time_limit_ms, high_search.time_limit_ms);
            }
        }
    }

    // Merging with an empty config changes nothing
    #[test]
    fn config_merge_empty_is_identity(config in config_strategy()) {
        let mut result = config.clone();
        ConfigMerger::merge_into(&mut result, &Config::default());
        prop_assert_eq!(result, config);
    }

    // Merging a config into itself changes nothing
    #[test]
    fn config_merge_idempotent(config in config_strategy()) {
        let mut result = config.clone();
        ConfigMerger::merge_into(&mut result, &config);
        prop_assert_eq!(result, config);
    }

    // Configs survive a YAML round trip
    #[test]
    fn config_yaml_roundtrip(config in config_strategy()) {
        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed: Config = serde_yaml::from_str(&yaml).unwrap();
        prop_assert_eq!(parsed, config);
    }
}
