//! Sorted per-site report assembled at the end of a run.

use std::collections::HashMap;

use tracing::debug;

use crate::model::{Category, SiteSummary};

/// Site summaries collected during a run, keyed by site key.
#[derive(Debug, Clone, Default)]
pub struct SiteReport {
    sites: HashMap<String, SiteSummary>,
}

impl SiteReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a summary. A later summary for the same site key replaces the
    /// earlier one.
    pub fn insert(&mut self, summary: SiteSummary) {
        if let Some(previous) = self.sites.insert(summary.site_key.clone(), summary) {
            debug!(
                site = %previous.site_key,
                replaced_file = %previous.file_name,
                "site key seen again, keeping the later file"
            );
        }
    }

    pub fn len(&self) -> usize {
        self.sites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }

    pub fn get(&self, site_key: &str) -> Option<&SiteSummary> {
        self.sites.get(site_key)
    }

    /// Summaries in ascending ordinal order of site key.
    ///
    /// Keys compare by UTF-8 bytes. This matches UTF-16 code-unit order except
    /// between supplementary-plane characters and U+E000..=U+FFFF, where the
    /// two orders disagree.
    pub fn sorted(&self) -> Vec<&SiteSummary> {
        let mut keys: Vec<&String> = self.sites.keys().collect();
        keys.sort();
        keys.into_iter().map(|key| &self.sites[key]).collect()
    }

    /// Header followed by one comma-joined line per site.
    pub fn render_lines(&self, header: &str) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.sites.len() + 1);
        lines.push(header.to_string());
        lines.extend(self.sorted().into_iter().map(render_line));
        lines
    }
}

/// Renders a single report row. Fields are not quoted.
pub fn render_line(summary: &SiteSummary) -> String {
    let mut fields = Vec::with_capacity(Category::ALL.len() + 3);
    fields.push(summary.site_key.clone());
    fields.push(summary.file_name.clone());
    fields.extend(
        Category::ALL
            .into_iter()
            .map(|category| summary.count(category).to_string()),
    );
    fields.push(summary.floor_count.to_string());
    fields.join(",")
}
