//! Benchmark fixtures, generated at runtime from rule groups.
//!
//! Fixtures are generated lazily on first access and cached for the
//! duration of the benchmark run. All generation is deterministic.

use robots_directives_core::generate::{GeneratorConfig, generate};
use std::sync::LazyLock;

static SMALL: LazyLock<String> = LazyLock::new(|| generate(&GeneratorConfig::small()));
static MEDIUM: LazyLock<String> = LazyLock::new(|| generate(&GeneratorConfig::medium()));
static LARGE: LazyLock<String> = LazyLock::new(|| generate(&GeneratorConfig::large()));
static XLARGE: LazyLock<String> = LazyLock::new(|| generate(&GeneratorConfig::xlarge()));

/// Standard fixtures for regular benchmarks.
pub fn fixtures() -> &'static [(&'static str, &'static str)] {
    static FIXTURES: LazyLock<Vec<(&'static str, &'static str)>> = LazyLock::new(|| {
        vec![
            ("small", SMALL.as_str()),
            ("medium", MEDIUM.as_str()),
            ("large", LARGE.as_str()),
        ]
    });
    FIXTURES.as_slice()
}

/// Extended fixtures including the 10k group stress file.
pub fn fixtures_extended() -> &'static [(&'static str, &'static str)] {
    static FIXTURES: LazyLock<Vec<(&'static str, &'static str)>> = LazyLock::new(|| {
        vec![
            ("small", SMALL.as_str()),
            ("medium", MEDIUM.as_str()),
            ("large", LARGE.as_str()),
            ("xlarge", XLARGE.as_str()),
        ]
    });
    FIXTURES.as_slice()
}

/// Crawler names and paths queried by the matching benchmarks.
pub const QUERIES: &[(&str, &str)] = &[
    ("googlebot-7", "/admin/private"),
    ("bingbot-3/2.0", "/search?q=robots"),
    ("unknownbot", "/static/images/logo.gif"),
    ("crawler-42", "/docs/api/index.html"),
];
