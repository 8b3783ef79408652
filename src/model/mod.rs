use std::collections::BTreeMap;
use std::fmt;

/// Cable identifier as written in the spreadsheet.
pub type CableId = i64;

/// Which end of a cable a category is read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    From,
    To,
}

/// Device roles tracked per site. The declaration order is the column order
/// of the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Router,
    FloorSwitch,
    PoeSwitch,
    AccessPoint,
    Rosette,
    MediaConverter,
}

impl Category {
    /// All categories in report order.
    pub const ALL: [Category; 6] = [
        Category::Router,
        Category::FloorSwitch,
        Category::PoeSwitch,
        Category::AccessPoint,
        Category::Rosette,
        Category::MediaConverter,
    ];

    /// The cable end whose device name decides membership. Switches, routers
    /// and media converters sit upstream; access points and outlets are the
    /// far end of the cable.
    pub fn side(self) -> Side {
        match self {
            Category::Router
            | Category::FloorSwitch
            | Category::PoeSwitch
            | Category::MediaConverter => Side::From,
            Category::AccessPoint | Category::Rosette => Side::To,
        }
    }

    /// Short label used in log lines.
    pub fn label(self) -> &'static str {
        match self {
            Category::Router => "router",
            Category::FloorSwitch => "floorSw",
            Category::PoeSwitch => "poeSw",
            Category::AccessPoint => "ap",
            Category::Rosette => "lan",
            Category::MediaConverter => "mc",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Attributes shared by both ends of a cable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PortEnd {
    pub floor_name: String,
    pub device_name: String,
    pub device_number: String,
    pub host_name: String,
    pub model_name: String,
    pub port_name: String,
}

/// One spreadsheet row describing a single cable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CablePortRecord {
    pub connect_state: String,
    pub cable_id: CableId,
    pub from: PortEnd,
    /// Only recorded on the from-side.
    pub from_connector_name: String,
    /// Only recorded on the from-side.
    pub from_key_port_name: String,
    pub to: PortEnd,
}

impl CablePortRecord {
    /// Returns the cable end for the given side.
    pub fn end(&self, side: Side) -> &PortEnd {
        match side {
            Side::From => &self.from,
            Side::To => &self.to,
        }
    }
}

/// Per-site result of counting distinct devices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteSummary {
    pub site_key: String,
    pub file_name: String,
    pub counts: BTreeMap<Category, usize>,
    pub floor_count: usize,
}

impl SiteSummary {
    /// Number of distinct hosts seen for the category.
    pub fn count(&self, category: Category) -> usize {
        self.counts.get(&category).copied().unwrap_or_default()
    }
}
