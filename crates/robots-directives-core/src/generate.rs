//! Random robots.txt generation for benchmarking and testing.
//!
//! Builds [`RuleGroup`]s directly and renders them, so the output always
//! loads without diagnostics.

use crate::robots_txt::{CATCH_ALL, Directive, RuleGroup};
use rand::prelude::*;
use rand::rngs::StdRng;

/// Configuration for generating robots.txt files.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Number of user-agent groups to generate.
    pub num_groups: usize,
    /// Maximum directives per group (at least 1).
    pub max_rules_per_group: usize,
    /// Number of sitemap lines to generate.
    pub num_sitemaps: usize,
    /// Seed for deterministic generation.
    pub seed: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            num_groups: 100,
            max_rules_per_group: 8,
            num_sitemaps: 5,
            seed: 42,
        }
    }
}

impl GeneratorConfig {
    /// Create a new config with the given number of groups.
    pub fn new(num_groups: usize) -> Self {
        Self {
            num_groups,
            num_sitemaps: (num_groups / 20).max(1),
            ..Default::default()
        }
    }

    /// Small fixture (~10 groups).
    pub fn small() -> Self {
        Self::new(10)
    }

    /// Medium fixture (~100 groups).
    pub fn medium() -> Self {
        Self::new(100)
    }

    /// Large fixture (~1000 groups).
    pub fn large() -> Self {
        Self::new(1_000)
    }

    /// Extra large fixture (~10k groups).
    pub fn xlarge() -> Self {
        Self::new(10_000)
    }

    /// Set the random seed for deterministic generation.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the number of groups explicitly.
    pub fn with_groups(mut self, num_groups: usize) -> Self {
        self.num_groups = num_groups;
        self
    }

    /// Set the number of sitemaps explicitly.
    pub fn with_sitemaps(mut self, num_sitemaps: usize) -> Self {
        self.num_sitemaps = num_sitemaps;
        self
    }

    /// Set the maximum directives per group.
    pub fn with_max_rules(mut self, max: usize) -> Self {
        self.max_rules_per_group = max.max(1);
        self
    }
}

/// Vocabulary for realistic agents and paths.
mod vocabulary {
    pub const PATH_TEMPLATES: &[&str] = &[
        "/{dir}/",
        "/{dir}/*.{ext}",
        "/{dir}/*.{ext}$",
        "/{dir}/private",
        "/*/{dir}/",
        "/{dir}?*",
        "/{dir}/{dir2}/",
        "/*.{ext}$",
    ];

    pub const DIRECTORIES: &[&str] = &[
        "admin", "search", "cart", "api", "private", "tmp", "static", "docs", "images",
    ];
    pub const EXTENSIONS: &[&str] = &["php", "pdf", "gif", "json", "xml", "html"];
    pub const AGENTS: &[&str] = &["googlebot", "bingbot", "slurp", "duckbot", "crawler"];
}

/// Probability of an allow directive (percentage).
const ALLOW_PROBABILITY: u32 = 30;

/// Probability of a crawl-delay line in a group (percentage).
const CRAWL_DELAY_PROBABILITY: u32 = 25;

/// Probability of a wildcard agent name (percentage).
const WILDCARD_AGENT_PROBABILITY: u32 = 10;

fn generate_path(rng: &mut StdRng) -> String {
    use vocabulary::*;

    let template = PATH_TEMPLATES[rng.random_range(0..PATH_TEMPLATES.len())];
    template
        .replace("{dir2}", DIRECTORIES[rng.random_range(0..DIRECTORIES.len())])
        .replace("{dir}", DIRECTORIES[rng.random_range(0..DIRECTORIES.len())])
        .replace("{ext}", EXTENSIONS[rng.random_range(0..EXTENSIONS.len())])
}

fn generate_user_agent(rng: &mut StdRng, index: usize) -> String {
    use vocabulary::*;

    if index == 0 {
        return CATCH_ALL.to_string();
    }
    let agent = AGENTS[rng.random_range(0..AGENTS.len())];
    if rng.random_ratio(WILDCARD_AGENT_PROBABILITY, 100) {
        format!("{}-{}*", agent, index)
    } else {
        format!("{}-{}", agent, index)
    }
}

/// Generates random rule groups based on configuration.
///
/// The first group is always the catch-all and every group carries at
/// least one directive.
pub fn generate_groups(config: &GeneratorConfig) -> Vec<RuleGroup> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let max_rules = config.max_rules_per_group.max(1);

    (0..config.num_groups)
        .map(|index| {
            let mut group = RuleGroup::new(generate_user_agent(&mut rng, index));
            if rng.random_ratio(CRAWL_DELAY_PROBABILITY, 100) {
                group.set_crawl_delay(rng.random_range(1..=30));
            }
            let num_rules = rng.random_range(1..=max_rules);
            for _ in 0..num_rules {
                let path = generate_path(&mut rng);
                let allowed = rng.random_ratio(ALLOW_PROBABILITY, 100);
                group.add_directive(Directive::new(allowed, path));
            }
            group
        })
        .collect()
}

/// Generates a robots.txt file as a string.
pub fn generate(config: &GeneratorConfig) -> String {
    let mut out = String::from("# Auto-generated robots.txt for benchmarking\n\n");
    for group in generate_groups(config) {
        out.push_str(&group.to_string());
        out.push('\n');
    }
    for index in 0..config.num_sitemaps {
        out.push_str(&format!(
            "Sitemap: https://example.com/sitemaps/sitemap-{}.xml\n",
            index
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::robots_txt::RobotsTxt;

    #[test]
    fn generated_small_loads_cleanly() {
        let content = generate(&GeneratorConfig::small());
        let (robots, errors) = RobotsTxt::parse(&content);
        assert!(errors.is_empty(), "Generated content should load: {:?}", errors);
        assert_eq!(robots.user_agents().count(), 10);
        assert_eq!(robots.sitemaps().len(), 1);
    }

    #[test]
    fn generated_large_loads_cleanly() {
        let content = generate(&GeneratorConfig::large());
        let (robots, errors) = RobotsTxt::parse(&content);
        assert!(errors.is_empty());
        assert_eq!(robots.user_agents().count(), 1_000);
        assert!(robots.rule_groups().all(|group| !group.is_empty()));
    }

    #[test]
    fn first_group_is_catch_all() {
        let groups = generate_groups(&GeneratorConfig::small());
        assert_eq!(groups[0].user_agent(), CATCH_ALL);
    }

    #[test]
    fn deterministic_generation() {
        let config = GeneratorConfig::medium();
        assert_eq!(generate(&config), generate(&config));
    }

    #[test]
    fn different_seeds_differ() {
        let content1 = generate(&GeneratorConfig::medium().with_seed(1));
        let content2 = generate(&GeneratorConfig::medium().with_seed(2));
        assert_ne!(content1, content2);
    }

    #[test]
    fn zero_groups_produces_sitemaps_only() {
        let config = GeneratorConfig::new(0).with_sitemaps(2);
        let (robots, errors) = RobotsTxt::parse(&generate(&config));
        assert!(errors.is_empty());
        assert_eq!(robots.user_agents().count(), 0);
        assert_eq!(robots.sitemaps().len(), 2);
    }

    #[test]
    fn with_max_rules_minimum() {
        let config = GeneratorConfig::default().with_max_rules(0);
        assert_eq!(config.max_rules_per_group, 1);
    }
}
