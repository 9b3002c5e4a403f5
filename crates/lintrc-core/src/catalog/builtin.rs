//! Built-in catalog entries
//!
//! The stock rule universe: the core rules a baseline checker ships with,
//! the standard presets over them, and the bundled parsers. Environment
//! tables live in `environments.rs`.

use super::{Preset, RuleCatalog, RuleDefinition, environments};
use crate::config::{RuleEntry, Severity};
use indexmap::IndexMap;

/// Rules that catch likely bugs; `recommended` turns all of these on
const PROBLEM_RULES: &[(&str, &str)] = &[
    (
        "no-cond-assign",
        "Disallow assignment operators in conditional expressions",
    ),
    (
        "no-constant-condition",
        "Disallow constant expressions in conditions",
    ),
    ("no-debugger", "Disallow the use of debugger"),
    (
        "no-dupe-args",
        "Disallow duplicate arguments in function definitions",
    ),
    ("no-dupe-keys", "Disallow duplicate keys in object literals"),
    ("no-duplicate-case", "Disallow duplicate case labels"),
    ("no-empty", "Disallow empty block statements"),
    ("no-fallthrough", "Disallow fallthrough of case statements"),
    ("no-irregular-whitespace", "Disallow irregular whitespace"),
    ("no-redeclare", "Disallow variable redeclaration"),
    (
        "no-self-assign",
        "Disallow assignments where both sides are exactly the same",
    ),
    ("no-sparse-arrays", "Disallow sparse arrays"),
    (
        "no-undef",
        "Disallow undeclared variables unless mentioned in environment globals",
    ),
    (
        "no-unreachable",
        "Disallow unreachable code after return, throw, continue, and break statements",
    ),
    ("no-unused-vars", "Disallow unused variables"),
    ("use-isnan", "Require calls to isNaN() when checking for NaN"),
    (
        "valid-typeof",
        "Enforce comparing typeof expressions against valid strings",
    ),
];

/// Rules suggesting better patterns; defined but not preset-activated
const SUGGESTION_RULES: &[(&str, &str)] = &[
    ("camelcase", "Enforce camelcase naming convention"),
    (
        "curly",
        "Enforce consistent brace style for all control statements",
    ),
    ("eqeqeq", "Require the use of === and !=="),
    ("no-console", "Disallow the use of console"),
    ("no-eval", "Disallow the use of eval()"),
    (
        "no-shadow",
        "Disallow variable declarations from shadowing variables in the outer scope",
    ),
    ("no-var", "Require let or const instead of var"),
    (
        "prefer-const",
        "Require const declarations for variables that are never reassigned",
    ),
];

/// Layout rules; `formatter-compat` turns all of these off
const LAYOUT_RULES: &[(&str, &str)] = &[
    (
        "arrow-parens",
        "Require parentheses around arrow function arguments",
    ),
    ("comma-dangle", "Require or disallow trailing commas"),
    ("indent", "Enforce consistent indentation"),
    ("max-len", "Enforce a maximum line length"),
    ("no-extra-semi", "Disallow unnecessary semicolons"),
    ("no-multi-spaces", "Disallow multiple spaces"),
    (
        "quotes",
        "Enforce the consistent use of either backticks, double, or single quotes",
    ),
    ("semi", "Require or disallow semicolons instead of ASI"),
];

/// Parsers bundled with the stock distribution
const PARSERS: &[&str] = &["default", "typescript"];

pub(crate) fn catalog() -> RuleCatalog {
    let mut catalog = RuleCatalog::new();

    for (id, description) in PROBLEM_RULES
        .iter()
        .chain(SUGGESTION_RULES.iter())
        .chain(LAYOUT_RULES.iter())
    {
        catalog.add_rule(*id, RuleDefinition::new(*description));
    }

    catalog.add_preset("recommended", recommended());
    catalog.add_preset("all", all());
    catalog.add_preset("formatter-compat", formatter_compat());

    for parser in PARSERS {
        catalog.add_parser(*parser);
    }

    environments::register(&mut catalog);
    catalog
}

fn recommended() -> Preset {
    Preset {
        description: Some("Rules that catch likely bugs".to_string()),
        rules: activations(PROBLEM_RULES.iter(), Severity::Error),
    }
}

fn all() -> Preset {
    Preset {
        description: Some("Every core rule at error severity".to_string()),
        rules: activations(
            PROBLEM_RULES
                .iter()
                .chain(SUGGESTION_RULES.iter())
                .chain(LAYOUT_RULES.iter()),
            Severity::Error,
        ),
    }
}

fn formatter_compat() -> Preset {
    Preset {
        description: Some("Turns off layout rules that fight an autoformatter".to_string()),
        rules: activations(LAYOUT_RULES.iter(), Severity::Off),
    }
}

fn activations<'a>(
    rules: impl Iterator<Item = &'a (&'a str, &'a str)>,
    severity: Severity,
) -> IndexMap<String, RuleEntry> {
    rules
        .map(|(id, _)| (id.to_string(), RuleEntry::new(severity)))
        .collect()
}
