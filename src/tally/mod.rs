//! Device classification and per-site counting.
//!
//! Each connected cable is checked independently against every category's
//! device-name list; a single cable can therefore land in several categories.
//! Counts are distinct host names per category, and the floor count is the
//! number of distinct floors touched by any matched cable end.

use std::collections::{BTreeMap, BTreeSet};

use tracing::{debug, trace};

use crate::config::CategoryMatchConfig;
use crate::model::{CablePortRecord, Category, SiteSummary};

/// A category a cable matched, with the device it identifies.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct DeviceMatch {
    pub category: Category,
    pub host_name: String,
    pub floor_name: String,
}

/// Returns one match per category the record belongs to, in category order.
///
/// Records whose connect state is not the connected token never match.
pub fn classify(record: &CablePortRecord, config: &CategoryMatchConfig) -> Vec<DeviceMatch> {
    if record.connect_state != config.connected_token {
        return Vec::new();
    }

    let matches: Vec<DeviceMatch> = Category::ALL
        .into_iter()
        .filter_map(|category| {
            let end = record.end(category.side());
            config
                .matches(category, &end.device_name)
                .then(|| DeviceMatch {
                    category,
                    host_name: end.host_name.clone(),
                    floor_name: end.floor_name.clone(),
                })
        })
        .collect();

    if matches.is_empty() {
        trace!(
            cable_id = record.cable_id,
            from_device = %record.from.device_name,
            to_device = %record.to.device_name,
            "connected cable matched no device category"
        );
    }

    matches
}

/// Running state while folding one site's records.
#[derive(Debug, Default)]
pub struct SiteTally {
    hosts: BTreeMap<Category, BTreeSet<String>>,
    floors: BTreeSet<String>,
}

impl SiteTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds one record into the tally.
    pub fn add(&mut self, record: &CablePortRecord, config: &CategoryMatchConfig) {
        for found in classify(record, config) {
            // First occurrence of a host wins; repeats are no-ops.
            let hosts = self.hosts.entry(found.category).or_default();
            if hosts.insert(found.host_name.clone()) {
                debug!(category = %found.category, host = %found.host_name, "new device");
            }
            // Floors are tracked even when the host was already known.
            self.floors.insert(found.floor_name);
        }
    }

    /// Distinct hosts seen so far for the category.
    pub fn host_count(&self, category: Category) -> usize {
        self.hosts.get(&category).map_or(0, BTreeSet::len)
    }

    pub fn floor_count(&self) -> usize {
        self.floors.len()
    }

    /// Freezes the tally into a summary for the given site.
    pub fn finish(self, site_key: impl Into<String>, file_name: impl Into<String>) -> SiteSummary {
        let counts = Category::ALL
            .into_iter()
            .map(|category| (category, self.host_count(category)))
            .collect();
        SiteSummary {
            site_key: site_key.into(),
            file_name: file_name.into(),
            counts,
            floor_count: self.floors.len(),
        }
    }
}

/// Reduces one site's records to a summary.
pub fn aggregate<'a, I>(
    records: I,
    config: &CategoryMatchConfig,
    site_key: &str,
    file_name: &str,
) -> SiteSummary
where
    I: IntoIterator<Item = &'a CablePortRecord>,
{
    let mut tally = SiteTally::new();
    for record in records {
        tally.add(record, config);
    }
    tally.finish(site_key, file_name)
}
