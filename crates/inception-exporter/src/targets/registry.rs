use std::collections::BTreeMap;

/// Exported per-target state code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetState {
    Down,
    Up,
    /// Known from an earlier poll, absent from the latest one.
    Disappeared,
}

impl TargetState {
    /// Gauge value: `down=0`, `up=1`, `disappeared=2`.
    pub fn value(self) -> f64 {
        match self {
            TargetState::Down => 0.0,
            TargetState::Up => 1.0,
            TargetState::Disappeared => 2.0,
        }
    }
}

/// Label set of one `target_state` series. Fixed at creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetLabels {
    pub job_name: String,
    pub scrape_url: String,
}

#[derive(Debug)]
pub struct TargetEntry {
    labels: TargetLabels,
    state: TargetState,
}

impl TargetEntry {
    pub fn labels(&self) -> &TargetLabels {
        &self.labels
    }

    pub fn state(&self) -> TargetState {
        self.state
    }
}

/// Owned copy of one entry, detached from the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetSnapshot {
    pub labels: TargetLabels,
    pub state: TargetState,
}

/// Target registry: `scrape_url -> entry`.
///
/// Grows monotonically; entries are never removed, only marked
/// `Disappeared`. Not synchronized on its own: the exporter keeps it behind
/// the same lock as the aggregate count.
#[derive(Debug, Default)]
pub struct TargetRegistry {
    entries: BTreeMap<String, TargetEntry>,
}

impl TargetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the entry for `scrape_url`, creating it as `Down` if absent.
    /// Labels passed for an existing entry are ignored.
    pub fn get_or_create(&mut self, scrape_url: &str, job_name: &str) -> &mut TargetEntry {
        self.entries
            .entry(scrape_url.to_string())
            .or_insert_with(|| TargetEntry {
                labels: TargetLabels {
                    job_name: job_name.to_string(),
                    scrape_url: scrape_url.to_string(),
                },
                state: TargetState::Down,
            })
    }

    pub fn mark_all_disappeared(&mut self) {
        for entry in self.entries.values_mut() {
            entry.state = TargetState::Disappeared;
        }
    }

    /// Update an existing entry. Returns false (and changes nothing) if absent.
    pub fn set_state(&mut self, scrape_url: &str, state: TargetState) -> bool {
        match self.entries.get_mut(scrape_url) {
            Some(entry) => {
                entry.state = state;
                true
            }
            None => false,
        }
    }

    pub fn get(&self, scrape_url: &str) -> Option<&TargetEntry> {
        self.entries.get(scrape_url)
    }

    /// Snapshot of every entry, ordered by scrape URL.
    pub fn snapshot(&self) -> Vec<TargetSnapshot> {
        self.entries
            .values()
            .map(|e| TargetSnapshot {
                labels: e.labels.clone(),
                state: e.state,
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
