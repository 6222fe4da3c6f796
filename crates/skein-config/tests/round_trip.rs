//! Serialization stability of the configuration record.

use proptest::prelude::*;
use serde_json::json;
use skein_config::{
    BundleConfig, ExportsMode, ModuleFormat, OutputOptions, PluginSpec, SourceMapPolicy,
};

#[test]
fn reference_scenario_constructs_exact_fields() {
    let config = BundleConfig::from_value(json!({
        "input": "dist/Delta.js",
        "output": {
            "file": "delta-rollup.js",
            "format": "amd",
            "name": "quill-delta",
            "sourcemap": "inline"
        },
        "plugins": ["commonjs", "nodeResolve"]
    }))
    .unwrap();

    assert_eq!(config, BundleConfig::reference());
    assert!(config.validate().is_ok());
}

#[test]
fn json_round_trip_of_reference() {
    let config = BundleConfig::reference();
    let json = config.to_json_string().unwrap();
    assert_eq!(BundleConfig::from_json_str(&json).unwrap(), config);
}

#[test]
fn explicit_false_sourcemap_equals_absent() {
    let explicit = BundleConfig::from_value(json!({
        "input": "a.js",
        "output": { "file": "b.js", "sourcemap": false }
    }))
    .unwrap();
    let absent = BundleConfig::from_value(json!({
        "input": "a.js",
        "output": { "file": "b.js" }
    }))
    .unwrap();
    assert_eq!(explicit, absent);
}

fn format_strategy() -> impl Strategy<Value = ModuleFormat> {
    prop::sample::select(ModuleFormat::ALL.to_vec())
}

fn sourcemap_strategy() -> impl Strategy<Value = SourceMapPolicy> {
    prop::sample::select(vec![
        SourceMapPolicy::None,
        SourceMapPolicy::External,
        SourceMapPolicy::Inline,
        SourceMapPolicy::Hidden,
    ])
}

fn plugin_strategy() -> impl Strategy<Value = PluginSpec> {
    prop_oneof![
        Just(PluginSpec::commonjs()),
        Just(PluginSpec::node_resolve()),
        "[a-z][a-z-]{0,12}".prop_map(PluginSpec::new),
        ("[a-z]{1,8}", any::<bool>())
            .prop_map(|(name, flag)| PluginSpec::with_options(name, json!({ "flag": flag }))),
    ]
}

fn config_strategy() -> impl Strategy<Value = BundleConfig> {
    (
        "[a-z]{1,8}/[A-Za-z]{1,8}\\.js",
        "[a-z-]{1,12}\\.js",
        format_strategy(),
        prop::option::of("[A-Za-z_][A-Za-z0-9_]{0,10}"),
        sourcemap_strategy(),
        prop::collection::vec(plugin_strategy(), 0..6),
        prop::collection::vec("[a-z]{1,6}", 0..3),
        prop::option::of(prop::sample::select(vec![
            ExportsMode::Auto,
            ExportsMode::Default,
            ExportsMode::Named,
            ExportsMode::None,
        ])),
    )
        .prop_map(
            |(input, file, format, name, sourcemap, plugins, external, exports)| {
                let mut output = OutputOptions::new(file, format).with_sourcemap(sourcemap);
                output.name = name;
                output.exports = exports;
                let mut config = BundleConfig::new(input, output).with_plugins(plugins);
                config.external = external;
                config
            },
        )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// Serializing then deserializing yields a field-for-field identical record
    #[test]
    fn prop_json_round_trip(config in config_strategy()) {
        let value = config.to_value().unwrap();
        prop_assert_eq!(BundleConfig::from_value(value).unwrap(), config);
    }

    #[test]
    fn prop_toml_round_trip(config in config_strategy()) {
        let toml = config.to_toml_string().unwrap();
        prop_assert_eq!(BundleConfig::from_toml_str(&toml).unwrap(), config);
    }

    /// Plugin order is kept exactly as given
    #[test]
    fn prop_plugin_order_preserved(plugins in prop::collection::vec(plugin_strategy(), 0..8)) {
        let config = BundleConfig::new("a.js", OutputOptions::new("b.js", ModuleFormat::Es))
            .with_plugins(plugins.clone());
        let names: Vec<String> = plugins.iter().map(|p| p.name.clone()).collect();
        prop_assert_eq!(config.plugin_names(), names);
    }
}
