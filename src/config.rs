//! Settings loaded once per run from a JSON file.
//!
//! Keys use PascalCase (`DeviceFromCableIdColumn`, `WordConnect`, ...). Column
//! positions are 1-based spreadsheet columns. Device-name lists are plain
//! comma-separated strings.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Result, ToolError};
use crate::model::Category;

/// Settings file contents.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CountConfig {
    #[serde(flatten)]
    pub columns: ColumnLayout,
    pub word_connect: String,
    pub word_disconnect: String,
    #[serde(default)]
    pub device_name_header: String,
    #[serde(default)]
    pub device_name_to_router: String,
    #[serde(default)]
    pub device_name_to_floor_sw: String,
    #[serde(default)]
    pub device_name_to_poe_sw: String,
    #[serde(default)]
    pub device_name_to_ap: String,
    #[serde(default)]
    pub device_name_to_rosette: String,
    #[serde(default)]
    pub device_name_to_mc: String,
    #[serde(default, alias = "FileNamePrifex")]
    pub file_name_prefix: String,
    #[serde(default)]
    pub file_name_word: String,
}

/// Spreadsheet column of every field the extractor reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ColumnLayout {
    pub device_from_connect_column: u32,
    pub device_from_cable_id_column: u32,
    pub device_from_key_port_name_column: u32,
    pub device_from_floor_name_column: u32,
    pub device_from_device_name_column: u32,
    pub device_from_device_number_column: u32,
    pub device_from_host_name_column: u32,
    pub device_from_model_name_column: u32,
    pub device_from_port_name_column: u32,
    pub device_from_connector_name_column: u32,
    pub device_to_floor_name_column: u32,
    pub device_to_device_name_column: u32,
    pub device_to_device_number_column: u32,
    pub device_to_host_name_column: u32,
    pub device_to_model_name_column: u32,
    pub device_to_port_name_column: u32,
}

impl ColumnLayout {
    fn entries(&self) -> [(&'static str, u32); 16] {
        [
            ("DeviceFromConnectColumn", self.device_from_connect_column),
            ("DeviceFromCableIdColumn", self.device_from_cable_id_column),
            ("DeviceFromKeyPortNameColumn", self.device_from_key_port_name_column),
            ("DeviceFromFloorNameColumn", self.device_from_floor_name_column),
            ("DeviceFromDeviceNameColumn", self.device_from_device_name_column),
            ("DeviceFromDeviceNumberColumn", self.device_from_device_number_column),
            ("DeviceFromHostNameColumn", self.device_from_host_name_column),
            ("DeviceFromModelNameColumn", self.device_from_model_name_column),
            ("DeviceFromPortNameColumn", self.device_from_port_name_column),
            ("DeviceFromConnectorNameColumn", self.device_from_connector_name_column),
            ("DeviceToFloorNameColumn", self.device_to_floor_name_column),
            ("DeviceToDeviceNameColumn", self.device_to_device_name_column),
            ("DeviceToDeviceNumberColumn", self.device_to_device_number_column),
            ("DeviceToHostNameColumn", self.device_to_host_name_column),
            ("DeviceToModelNameColumn", self.device_to_model_name_column),
            ("DeviceToPortNameColumn", self.device_to_port_name_column),
        ]
    }

    /// Rejects column positions below 1.
    pub fn validate(&self) -> Result<()> {
        for (key, column) in self.entries() {
            if column == 0 {
                return Err(ToolError::InvalidConfig {
                    key: key.to_string(),
                    reason: "columns are numbered from 1".to_string(),
                });
            }
        }
        Ok(())
    }
}

impl CountConfig {
    /// Reads and validates the settings file.
    pub fn load(path: &Path) -> Result<Self> {
        let source = fs::read_to_string(path)?;
        Self::from_json(&source)
    }

    /// Parses and validates settings from a JSON document.
    pub fn from_json(source: &str) -> Result<Self> {
        let config: CountConfig = serde_json::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        self.columns.validate()?;
        if self.word_connect.is_empty() {
            return Err(ToolError::InvalidConfig {
                key: "WordConnect".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Raw comma-separated token list configured for a category.
    pub fn token_list(&self, category: Category) -> &str {
        match category {
            Category::Router => &self.device_name_to_router,
            Category::FloorSwitch => &self.device_name_to_floor_sw,
            Category::PoeSwitch => &self.device_name_to_poe_sw,
            Category::AccessPoint => &self.device_name_to_ap,
            Category::Rosette => &self.device_name_to_rosette,
            Category::MediaConverter => &self.device_name_to_mc,
        }
    }

    /// Builds the matcher shared by every classification in the run.
    pub fn category_match(&self) -> CategoryMatchConfig {
        let tokens = Category::ALL
            .into_iter()
            .map(|category| (category, split_tokens(self.token_list(category))))
            .collect();
        CategoryMatchConfig {
            connected_token: self.word_connect.clone(),
            tokens,
        }
    }
}

/// Device-name tokens per category plus the connected marker.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryMatchConfig {
    pub connected_token: String,
    pub tokens: BTreeMap<Category, BTreeSet<String>>,
}

impl CategoryMatchConfig {
    /// Creates a matcher from explicit token lists.
    pub fn new<I, S>(connected_token: impl Into<String>, lists: I) -> Self
    where
        I: IntoIterator<Item = (Category, Vec<S>)>,
        S: Into<String>,
    {
        let tokens = lists
            .into_iter()
            .map(|(category, names)| {
                (
                    category,
                    names.into_iter().map(Into::into).collect::<BTreeSet<_>>(),
                )
            })
            .collect();
        Self {
            connected_token: connected_token.into(),
            tokens,
        }
    }

    /// Returns true when the device name is listed for the category.
    pub fn matches(&self, category: Category, device_name: &str) -> bool {
        self.tokens
            .get(&category)
            .is_some_and(|names| names.contains(device_name))
    }
}

fn split_tokens(raw: &str) -> BTreeSet<String> {
    raw.split(',')
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_json() -> serde_json::Value {
        serde_json::json!({
            "DeviceFromConnectColumn": 1,
            "DeviceFromCableIdColumn": 2,
            "DeviceFromKeyPortNameColumn": 3,
            "DeviceFromFloorNameColumn": 4,
            "DeviceFromDeviceNameColumn": 5,
            "DeviceFromDeviceNumberColumn": 6,
            "DeviceFromHostNameColumn": 7,
            "DeviceFromModelNameColumn": 8,
            "DeviceFromPortNameColumn": 9,
            "DeviceFromConnectorNameColumn": 10,
            "DeviceToFloorNameColumn": 11,
            "DeviceToDeviceNameColumn": 12,
            "DeviceToDeviceNumberColumn": 13,
            "DeviceToHostNameColumn": 14,
            "DeviceToModelNameColumn": 15,
            "DeviceToPortNameColumn": 16,
            "WordConnect": "connected",
            "WordDisconnect": "disconnected",
            "DeviceNameHeader": "site,file,router,floorSw,poeSw,ap,lan,mc,floor",
            "DeviceNameToRouter": "RT,CORE",
            "DeviceNameToFloorSw": "FSW",
            "DeviceNameToPoeSw": "PSW",
            "DeviceNameToAp": "AP",
            "DeviceNameToRosette": "LAN",
            "DeviceNameToMc": "MC",
            "FileNamePrifex": "Cabling_",
            "FileNameWord": "_",
            "IgnoreModelName": "unused"
        })
    }

    #[test]
    fn parses_pascal_case_settings_with_legacy_prefix_key() {
        let config =
            CountConfig::from_json(&sample_json().to_string()).expect("config parsed");
        assert_eq!(config.columns.device_from_cable_id_column, 2);
        assert_eq!(config.columns.device_to_port_name_column, 16);
        assert_eq!(config.file_name_prefix, "Cabling_");
        assert_eq!(config.word_connect, "connected");
    }

    #[test]
    fn zero_column_is_rejected() {
        let mut json = sample_json();
        json["DeviceToHostNameColumn"] = serde_json::json!(0);
        let err = CountConfig::from_json(&json.to_string()).expect_err("zero column rejected");
        assert!(
            matches!(err, ToolError::InvalidConfig { ref key, .. } if key == "DeviceToHostNameColumn")
        );
    }

    #[test]
    fn category_lists_split_on_commas_and_skip_blanks() {
        let mut json = sample_json();
        json["DeviceNameToRouter"] = serde_json::json!("RT,,CORE");
        json["DeviceNameToMc"] = serde_json::json!("");
        let matcher = CountConfig::from_json(&json.to_string())
            .expect("config parsed")
            .category_match();

        assert!(matcher.matches(Category::Router, "RT"));
        assert!(matcher.matches(Category::Router, "CORE"));
        assert!(!matcher.matches(Category::Router, ""));
        assert!(!matcher.matches(Category::MediaConverter, ""));
        assert!(matcher.matches(Category::AccessPoint, "AP"));
        assert!(!matcher.matches(Category::AccessPoint, "ap"));
        assert_eq!(matcher.connected_token, "connected");
    }
}
