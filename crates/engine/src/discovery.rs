//! Configuration and benchmark discovery
//!
//! Top-level configurations are the subdirectories of the results root.
//! Below each, `size_<min>-<max>` directories are size-sweep children.
//! Benchmarks are whatever benchmark directories the selected
//! configurations (and their children) contain.

use benchkit_core::{
    Benchmark, Configuration, Error, ReportSettings, Result, SizeRange, SIZE_PREFIX,
};
use benchkit_storage::{subdirectories, ResultStore};
use std::collections::HashSet;
use std::path::Path;
use tracing::debug;

/// Literal selecting every top-level configuration.
pub const ALL: &str = "all";

/// A size-sweep parent and its children, ascending by minimum size.
#[derive(Debug, Clone, PartialEq)]
pub struct SizeSweep {
    /// The parent configuration
    pub parent: Configuration,
    /// All parseable `size_*` children
    pub children: Vec<Configuration>,
}

impl SizeSweep {
    /// Children with min == max, ascending by size.
    pub fn fixed_children(&self) -> Vec<&Configuration> {
        self.children
            .iter()
            .filter(|c| c.size().map(|s| s.is_fixed()).unwrap_or(false))
            .collect()
    }
}

/// Everything found under a results root.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultTree {
    configurations: Vec<Configuration>,
    sweeps: Vec<SizeSweep>,
}

/// Enumerate configurations and size-sweep children under `root`.
///
/// A missing root yields an empty tree.
pub fn discover_configurations(root: &Path) -> ResultTree {
    let mut configurations = Vec::new();
    let mut sweeps = Vec::new();
    for name in subdirectories(root) {
        let parent = Configuration::new(name.clone());
        let mut children: Vec<Configuration> = subdirectories(&root.join(&name))
            .into_iter()
            .filter(|dir| dir.starts_with(SIZE_PREFIX))
            .filter_map(|dir| match SizeRange::parse(&dir) {
                Ok(size) => Some(Configuration::size_child(name.clone(), dir, size)),
                Err(e) => {
                    debug!(parent = %name, error = %e, "Ignoring size directory");
                    None
                }
            })
            .collect();
        if !children.is_empty() {
            children.sort_by(|a, b| {
                let key = |c: &Configuration| c.size().map(|s| (s.min_gb, s.max_gb));
                key(a)
                    .partial_cmp(&key(b))
                    .unwrap_or(std::cmp::Ordering::Equal)
            });
            debug!(parent = %name, children = children.len(), "Found size sweep");
            sweeps.push(SizeSweep {
                parent: parent.clone(),
                children,
            });
        }
        configurations.push(parent);
    }
    ResultTree {
        configurations,
        sweeps,
    }
}

impl ResultTree {
    /// Top-level configurations, sorted by name.
    pub fn configurations(&self) -> &[Configuration] {
        &self.configurations
    }

    /// Size sweeps, in parent order.
    pub fn sweeps(&self) -> &[SizeSweep] {
        &self.sweeps
    }

    /// True when no configuration was found.
    pub fn is_empty(&self) -> bool {
        self.configurations.is_empty()
    }

    /// Every selectable id: top-level names and `parent/size_…` children.
    pub fn ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = Vec::new();
        for conf in &self.configurations {
            ids.push(conf.id());
            if let Some(sweep) = self.sweep_for(conf) {
                ids.extend(sweep.children.iter().map(Configuration::id));
            }
        }
        ids
    }

    /// Look up a configuration by id.
    pub fn find(&self, id: &str) -> Option<&Configuration> {
        self.configurations
            .iter()
            .chain(self.sweeps.iter().flat_map(|s| s.children.iter()))
            .find(|c| c.id() == id)
    }

    /// The size sweep whose parent is `conf`.
    pub fn sweep_for(&self, conf: &Configuration) -> Option<&SizeSweep> {
        self.sweeps.iter().find(|s| &s.parent == conf)
    }

    /// Turn command-line names into configurations, baseline first.
    ///
    /// An empty list or the literal `all` selects every top-level
    /// configuration. Alias prefixes from the settings are expanded.
    ///
    /// # Errors
    ///
    /// Fails for an empty tree or an unknown name.
    pub fn resolve_selection(
        &self,
        requested: &[String],
        settings: &ReportSettings,
    ) -> Result<Vec<Configuration>> {
        if self.is_empty() {
            return Err(Error::NoConfigurations(settings.results_dir.clone()));
        }
        if requested.is_empty() || requested.iter().any(|r| r == ALL) {
            if requested.len() > 1 {
                return Err(Error::invalid_input(format!(
                    "'{}' cannot be combined with other configurations",
                    ALL
                )));
            }
            return Ok(self.configurations.clone());
        }
        let mut selected: Vec<Configuration> = Vec::with_capacity(requested.len());
        for name in requested {
            let expanded = settings.expand_alias(name);
            let conf = self
                .find(&expanded)
                .ok_or_else(|| Error::InvalidConfiguration {
                    name: expanded.clone(),
                    available: self.ids().join(", "),
                })?;
            if !selected.contains(conf) {
                selected.push(conf.clone());
            }
        }
        Ok(selected)
    }

    /// Size sweeps among the selected configurations.
    pub fn selected_sweeps<'a>(&'a self, selected: &[Configuration]) -> Vec<&'a SizeSweep> {
        selected
            .iter()
            .filter_map(|conf| self.sweep_for(conf))
            .collect()
    }
}

/// Benchmarks present in the selected configurations and their size
/// children, de-duplicated.
///
/// Names from `seed` that are present come first, in seed order; the
/// rest follow in first-seen order.
pub fn discover_benchmarks(
    store: &ResultStore,
    tree: &ResultTree,
    selected: &[Configuration],
    seed: &[String],
) -> Vec<Benchmark> {
    let mut found: Vec<Benchmark> = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();
    let mut visit = |conf: &Configuration| {
        for bench in store.benchmarks(conf) {
            if seen.insert(bench.name().to_string()) {
                found.push(bench);
            }
        }
    };
    for conf in selected {
        visit(conf);
        if let Some(sweep) = tree.sweep_for(conf) {
            sweep.children.iter().for_each(&mut visit);
        }
    }

    let mut ordered: Vec<Benchmark> = seed
        .iter()
        .filter(|name| seen.contains(name.as_str()))
        .map(Benchmark::new)
        .collect();
    let seeded: HashSet<&str> = seed.iter().map(String::as_str).collect();
    ordered.extend(found.into_iter().filter(|b| !seeded.contains(b.name())));
    ordered.dedup();
    ordered
}

/// Keep benchmarks whose name starts with any of `prefixes`; an empty
/// filter keeps everything.
pub fn filter_benchmarks(benchmarks: Vec<Benchmark>, prefixes: &[String]) -> Vec<Benchmark> {
    if prefixes.is_empty() {
        return benchmarks;
    }
    benchmarks
        .into_iter()
        .filter(|b| prefixes.iter().any(|p| b.name().starts_with(p.as_str())))
        .collect()
}

/// First run index in `preferred, preferred-1, …, 0` that has a timing
/// file for `bench` in any of `configurations`.
pub fn example_run_index(
    store: &ResultStore,
    configurations: &[Configuration],
    bench: &Benchmark,
    preferred: u32,
) -> Option<u32> {
    (0..=preferred)
        .rev()
        .find(|run| configurations.iter().any(|c| store.has_run(c, bench, *run)))
}
