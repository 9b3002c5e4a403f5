//! Built-in environment definitions
//!
//! Each environment names the identifiers treated as pre-declared globals
//! while it is enabled. Enabling an environment can only widen this set;
//! disabling one merely declines to add its globals.

use super::{Environment, RuleCatalog};

const BROWSER_GLOBALS: &[&str] = &[
    "window",
    "document",
    "navigator",
    "location",
    "history",
    "screen",
    "self",
    "parent",
    "frames",
    "console",
    "alert",
    "atob",
    "btoa",
    "fetch",
    "localStorage",
    "sessionStorage",
    "setTimeout",
    "clearTimeout",
    "setInterval",
    "clearInterval",
    "requestAnimationFrame",
    "cancelAnimationFrame",
    "addEventListener",
    "removeEventListener",
    "Event",
    "CustomEvent",
    "XMLHttpRequest",
    "URL",
    "URLSearchParams",
    "Blob",
    "File",
    "FileReader",
    "FormData",
    "Image",
    "Audio",
    "WebSocket",
    "Worker",
    "performance",
    "crypto",
];

const NODE_GLOBALS: &[&str] = &[
    "global",
    "process",
    "Buffer",
    "console",
    "require",
    "module",
    "exports",
    "__dirname",
    "__filename",
    "setTimeout",
    "clearTimeout",
    "setInterval",
    "clearInterval",
    "setImmediate",
    "clearImmediate",
    "queueMicrotask",
    "URL",
    "URLSearchParams",
    "TextEncoder",
    "TextDecoder",
    "AbortController",
    "AbortSignal",
    "structuredClone",
];

const SHARED_NODE_BROWSER_GLOBALS: &[&str] = &[
    "console",
    "setTimeout",
    "clearTimeout",
    "setInterval",
    "clearInterval",
    "queueMicrotask",
    "URL",
    "URLSearchParams",
    "TextEncoder",
    "TextDecoder",
    "AbortController",
    "AbortSignal",
    "fetch",
    "performance",
    "crypto",
    "structuredClone",
];

const WORKER_GLOBALS: &[&str] = &[
    "self",
    "postMessage",
    "importScripts",
    "onmessage",
    "close",
    "caches",
    "fetch",
    "setTimeout",
    "clearTimeout",
    "setInterval",
    "clearInterval",
    "console",
];

const ES2015_GLOBALS: &[&str] = &[
    "Promise",
    "Symbol",
    "Map",
    "Set",
    "WeakMap",
    "WeakSet",
    "Proxy",
    "Reflect",
    "ArrayBuffer",
    "DataView",
    "Int8Array",
    "Uint8Array",
    "Uint8ClampedArray",
    "Int16Array",
    "Uint16Array",
    "Int32Array",
    "Uint32Array",
    "Float32Array",
    "Float64Array",
];

// Later editions are cumulative over ES2015
const ES2017_EXTRA: &[&str] = &["Atomics", "SharedArrayBuffer"];
const ES2020_EXTRA: &[&str] = &["BigInt", "BigInt64Array", "BigUint64Array", "globalThis"];
const ES2021_EXTRA: &[&str] = &["AggregateError", "FinalizationRegistry", "WeakRef"];

const JEST_GLOBALS: &[&str] = &[
    "describe",
    "it",
    "test",
    "expect",
    "beforeAll",
    "beforeEach",
    "afterAll",
    "afterEach",
    "jest",
];

const MOCHA_GLOBALS: &[&str] = &[
    "describe",
    "it",
    "context",
    "specify",
    "suite",
    "test",
    "before",
    "after",
    "beforeEach",
    "afterEach",
];

pub(crate) fn register(catalog: &mut RuleCatalog) {
    catalog.add_environment(
        "browser",
        Environment::new("Browser globals", globals(&[BROWSER_GLOBALS])),
    );
    catalog.add_environment(
        "node",
        Environment::new("Node.js globals", globals(&[NODE_GLOBALS])),
    );
    catalog.add_environment(
        "shared-node-browser",
        Environment::new(
            "Globals common to Node.js and browsers",
            globals(&[SHARED_NODE_BROWSER_GLOBALS]),
        ),
    );
    catalog.add_environment(
        "worker",
        Environment::new("Web worker globals", globals(&[WORKER_GLOBALS])),
    );

    let es2015 = globals(&[ES2015_GLOBALS]);
    catalog.add_environment(
        "es6",
        Environment::new("ES2015 globals", es2015.clone()),
    );
    // Alias kept for configs written against the year-based name
    catalog.add_environment("es2015", Environment::new("ES2015 globals", es2015));
    catalog.add_environment(
        "es2017",
        Environment::new("ES2017 globals", globals(&[ES2015_GLOBALS, ES2017_EXTRA])),
    );
    catalog.add_environment(
        "es2020",
        Environment::new(
            "ES2020 globals",
            globals(&[ES2015_GLOBALS, ES2017_EXTRA, ES2020_EXTRA]),
        ),
    );
    catalog.add_environment(
        "es2021",
        Environment::new(
            "ES2021 globals",
            globals(&[ES2015_GLOBALS, ES2017_EXTRA, ES2020_EXTRA, ES2021_EXTRA]),
        ),
    );

    catalog.add_environment(
        "jest",
        Environment::new("Jest test globals", globals(&[JEST_GLOBALS])),
    );
    catalog.add_environment(
        "mocha",
        Environment::new("Mocha test globals", globals(&[MOCHA_GLOBALS])),
    );
}

fn globals(tables: &[&[&str]]) -> Vec<String> {
    tables
        .iter()
        .flat_map(|table| table.iter())
        .map(|name| name.to_string())
        .collect()
}
