//! End-to-end resolution tests
//!
//! Exercises the pipeline the way an embedding tool would: parse a
//! descriptor, validate it against a catalog, then query per-file
//! configurations and check what each file actually gets.

use indexmap::IndexMap;
use lintrc_core::{
    ConfigDescriptor, ConfigLoader, LintrcError, Plugin, Preset, Resolver, RuleCatalog,
    RuleDefinition, RuleEntry, Severity,
};
use serde_json::json;
use std::path::Path;

fn parse(value: serde_json::Value) -> ConfigDescriptor {
    serde_json::from_value(value).unwrap()
}

fn resolver(catalog: &RuleCatalog, value: serde_json::Value) -> Resolver<'_> {
    let descriptor = parse(value);
    Resolver::with_source(catalog, &descriptor, Path::new("/repo/.lintrc.json")).unwrap()
}

fn house_catalog() -> RuleCatalog {
    let mut catalog = RuleCatalog::builtin();
    catalog.add_preset(
        "house-strict",
        Preset {
            description: None,
            rules: IndexMap::from([
                ("eqeqeq".to_string(), RuleEntry::new(Severity::Error)),
                ("no-console".to_string(), RuleEntry::new(Severity::Error)),
                ("semi".to_string(), RuleEntry::new(Severity::Error)),
            ]),
        },
    );
    catalog.add_preset(
        "house-loose",
        Preset {
            description: None,
            rules: IndexMap::from([("no-console".to_string(), RuleEntry::new(Severity::Off))]),
        },
    );
    catalog
}

#[test]
fn test_resolving_the_same_file_twice_is_identical() {
    let catalog = RuleCatalog::builtin();
    let resolver = resolver(
        &catalog,
        json!({
            "extends": ["recommended"],
            "env": { "browser": true },
            "overrides": [
                { "files": ["*.test.js"], "env": { "jest": true } }
            ]
        }),
    );

    let first = resolver.resolve(Path::new("/repo/src/app.test.js"));
    let second = resolver.resolve(Path::new("/repo/src/app.test.js"));

    assert_eq!(first, second);
    // Including iteration order, not just set equality
    let first_keys: Vec<_> = first.rules.keys().collect();
    let second_keys: Vec<_> = second.rules.keys().collect();
    assert_eq!(first_keys, second_keys);
}

#[test]
fn test_later_preset_wins_for_shared_keys() {
    let catalog = house_catalog();
    let resolver = resolver(&catalog, json!({ "extends": ["house-strict", "house-loose"] }));

    let effective = resolver.base();
    assert_eq!(effective.severity_of("no-console"), Some(Severity::Off));
}

#[test]
fn test_unshadowed_preset_entries_survive() {
    let catalog = house_catalog();
    let resolver = resolver(&catalog, json!({ "extends": ["house-strict", "house-loose"] }));

    let effective = resolver.base();
    assert_eq!(effective.severity_of("eqeqeq"), Some(Severity::Error));
    assert_eq!(effective.severity_of("semi"), Some(Severity::Error));
}

#[test]
fn test_typescript_and_javascript_files_get_different_rule_sets() {
    // The classic mixed-repo shape: strict TypeScript baseline, looser
    // treatment for plain JavaScript
    let catalog = RuleCatalog::builtin();
    let resolver = resolver(
        &catalog,
        json!({
            "root": true,
            "extends": ["recommended"],
            "parser": "typescript",
            "env": { "browser": true, "node": true, "es6": true },
            "rules": { "no-unused-vars": "error" },
            "overrides": [
                { "files": ["*.js", "*.jsx"], "rules": { "no-unused-vars": "off" } }
            ]
        }),
    );

    let ts = resolver.resolve(Path::new("/repo/src/main.ts"));
    assert_eq!(ts.severity_of("no-unused-vars"), Some(Severity::Error));
    assert!(ts.is_active("no-unused-vars"));

    let js = resolver.resolve(Path::new("/repo/src/legacy.js"));
    assert_eq!(js.severity_of("no-unused-vars"), Some(Severity::Off));
    assert!(!js.is_active("no-unused-vars"));

    let jsx = resolver.resolve(Path::new("/repo/src/widget.jsx"));
    assert_eq!(jsx.severity_of("no-unused-vars"), Some(Severity::Off));

    // Everything else from the preset is untouched either way
    assert_eq!(js.severity_of("no-undef"), Some(Severity::Error));
    // Parser comes from the base; the override does not change it
    assert_eq!(js.parser, "typescript");
}

#[test]
fn test_enabling_environments_only_widens_globals() {
    let catalog = RuleCatalog::builtin();
    let resolver = resolver(
        &catalog,
        json!({
            "env": { "browser": true },
            "overrides": [
                { "files": ["*.test.js"], "env": { "jest": true } }
            ]
        }),
    );

    let base = resolver.base();
    let test_file = resolver.resolve(Path::new("/repo/app.test.js"));

    for name in &base.globals {
        assert!(
            test_file.globals.contains(name),
            "env widening dropped global {name}"
        );
    }
    assert!(test_file.globals.contains("describe"));
    assert!(!base.globals.contains("describe"));
}

#[test]
fn test_numeric_and_named_severities_resolve_identically() {
    let catalog = RuleCatalog::builtin();
    let named = resolver(&catalog, json!({ "rules": { "semi": "warn" } }));
    let numeric = resolver(&catalog, json!({ "rules": { "semi": 1 } }));

    assert_eq!(named.base(), numeric.base());
}

#[test]
fn test_explicit_rules_shadow_plugin_defaults() {
    let mut catalog = RuleCatalog::builtin();
    let mut plugin = Plugin::default();
    plugin.rules.insert(
        "detect-eval".to_string(),
        RuleDefinition::new("Flag eval-like sinks"),
    );
    plugin
        .defaults
        .insert("detect-eval".to_string(), RuleEntry::new(Severity::Error));
    catalog.add_plugin("security", plugin);

    let resolver = resolver(
        &catalog,
        json!({
            "plugins": ["security"],
            "rules": { "security/detect-eval": "warn" }
        }),
    );

    assert_eq!(
        resolver.base().severity_of("security/detect-eval"),
        Some(Severity::Warn)
    );
}

#[test]
fn test_off_rules_stay_visible_but_inactive() {
    let catalog = RuleCatalog::builtin();
    let resolver = resolver(
        &catalog,
        json!({ "rules": { "no-console": "off", "semi": "warn" } }),
    );

    let effective = resolver.base();
    assert_eq!(effective.severity_of("no-console"), Some(Severity::Off));
    let active: Vec<_> = effective.active_rules().map(|(key, _)| key).collect();
    assert_eq!(active, vec!["semi"]);
}

#[test]
fn test_validation_fails_before_any_file_is_consulted() {
    // The bad key sits inside an override; no target file is needed to
    // reject the whole config
    let catalog = RuleCatalog::builtin();
    let descriptor = parse(json!({
        "overrides": [
            { "files": ["*.js"], "rules": { "no-consoel": "off" } }
        ]
    }));

    let result = Resolver::with_source(&catalog, &descriptor, Path::new("/repo/.lintrc.json"));
    let error = result.err().expect("construction must fail");
    assert!(matches!(error, LintrcError::RuleNotFound { ref rule, .. } if rule == "no-consoel"));
    // The report names the config file, not a target file
    assert!(error.to_string().contains(".lintrc.json"));
}

#[test]
fn test_rule_options_ride_along_with_severity() {
    let catalog = RuleCatalog::builtin();
    let resolver = resolver(
        &catalog,
        json!({
            "rules": { "max-len": ["warn", { "code": 120, "ignoreUrls": true }] }
        }),
    );

    let entry = resolver.base().rules.get("max-len").cloned().unwrap();
    assert_eq!(entry.severity, Severity::Warn);
    assert_eq!(entry.options, vec![json!({ "code": 120, "ignoreUrls": true })]);
}

#[test]
fn test_discovered_cascade_feeds_resolution() {
    use std::fs;
    use tempfile::TempDir;

    let temp_dir = TempDir::new().unwrap();
    let pkg = temp_dir.path().join("packages/web");
    fs::create_dir_all(&pkg).unwrap();

    fs::write(
        temp_dir.path().join(".lintrc.json"),
        r#"{
            "root": true,
            "extends": ["recommended"],
            "env": { "es6": true }
        }"#,
    )
    .unwrap();
    fs::write(
        pkg.join(".lintrc.json"),
        r#"{
            "env": { "browser": true },
            "rules": { "no-debugger": "warn" }
        }"#,
    )
    .unwrap();

    let loaded = ConfigLoader::load(None, Some(pkg.as_path())).unwrap();
    let catalog = RuleCatalog::builtin();
    let resolver = Resolver::new(&catalog, &loaded).unwrap();

    let effective = resolver.resolve(&pkg.join("index.js"));
    // Nearer file demotes one preset rule, the rest of the preset holds
    assert_eq!(effective.severity_of("no-debugger"), Some(Severity::Warn));
    assert_eq!(effective.severity_of("no-undef"), Some(Severity::Error));
    // Environments accumulate across the cascade
    assert!(effective.globals.contains("Promise"));
    assert!(effective.globals.contains("window"));
}
