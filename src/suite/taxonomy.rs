use super::BenchmarkEntity;
use std::collections::{BTreeMap, BTreeSet};

/// Task key used for entities that declare a domain but no task.
pub const UNCLASSIFIED_TASK: &str = "unclassified";

/// Display-name rewrites applied when entities are inserted into a taxonomy.
///
/// Measurement names embed a truncated form of overly long entity names, so
/// the taxonomy must carry the truncated spelling for matching to work.
/// Add new entries here rather than renaming inline.
const DISPLAY_NAME_OVERRIDES: &[(&str, &str)] = &[(
    "attention_is_all_you_need_pytorch",
    "attention_is_all_you_nee...",
)];

/// Domain -> task -> benchmark-name hierarchy of a benchmark suite.
///
/// A lookup structure, not a list: ordering carries no meaning, and every
/// name present was inserted for at least one entity with that domain/task
/// pair. Used to derive default weighting configurations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Taxonomy {
    domains: BTreeMap<String, BTreeMap<String, BTreeSet<String>>>,
}

impl Taxonomy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a benchmark name, creating intermediate levels on demand.
    /// Reinserting an existing name is a no-op (last write wins).
    pub fn insert(&mut self, domain: &str, task: &str, name: &str) {
        self.domains
            .entry(domain.to_string())
            .or_default()
            .entry(task.to_string())
            .or_default()
            .insert(name.to_string());
    }

    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }

    /// Number of benchmark names across all domains and tasks
    pub fn len(&self) -> usize {
        self.domains
            .values()
            .flat_map(|tasks| tasks.values())
            .map(|names| names.len())
            .sum()
    }

    pub fn domains(&self) -> impl Iterator<Item = (&str, &BTreeMap<String, BTreeSet<String>>)> {
        self.domains.iter().map(|(d, tasks)| (d.as_str(), tasks))
    }

    pub fn contains(&self, domain: &str, task: &str, name: &str) -> bool {
        self.domains
            .get(domain)
            .and_then(|tasks| tasks.get(task))
            .map(|names| names.contains(name))
            .unwrap_or(false)
    }
}

/// Build the domain/task/name hierarchy for a set of benchmark entities.
///
/// Entities without a `domain` are skipped. Entities without a `task` land
/// under [`UNCLASSIFIED_TASK`]. Names listed in the display-name override
/// table are inserted under their rewritten spelling; the input entities are
/// never modified.
pub fn build_taxonomy<'a, I>(entities: I) -> Taxonomy
where
    I: IntoIterator<Item = &'a BenchmarkEntity>,
{
    let mut taxonomy = Taxonomy::new();

    for entity in entities {
        let Some(domain) = entity.domain.as_deref() else {
            continue;
        };
        let task = entity.task.as_deref().unwrap_or(UNCLASSIFIED_TASK);
        taxonomy.insert(domain, task, display_name(&entity.name));
    }

    taxonomy
}

/// Resolve the spelling a benchmark entity is tracked under
pub fn display_name(name: &str) -> &str {
    DISPLAY_NAME_OVERRIDES
        .iter()
        .find(|(from, _)| *from == name)
        .map(|(_, to)| *to)
        .unwrap_or(name)
}
