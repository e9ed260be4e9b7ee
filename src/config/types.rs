// Configuration type definitions

use std::path::PathBuf;

use serde::Deserialize;

use crate::histogram::{HistogramStyle, NameAlign};

pub const DEFAULT_INPUT_FILE: &str = "CS210_Project_Three_Input_File.txt";
pub const DEFAULT_OUTPUT_FILE: &str = "frequency.dat";

/// Normalization applied to a user-supplied name before lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum LookupCase {
    /// Match the name exactly as typed
    Exact,
    /// Upper-case the first character, so `apple` finds `Apple`
    #[default]
    CapitalizeFirst,
}

impl LookupCase {
    pub fn apply(&self, name: &str) -> String {
        match self {
            LookupCase::Exact => name.to_string(),
            LookupCase::CapitalizeFirst => {
                let mut chars = name.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect(),
                    None => String::new(),
                }
            }
        }
    }
}

/// Input and snapshot file locations
#[derive(Debug, Clone, Deserialize)]
pub struct FilesConfig {
    #[serde(default = "default_input")]
    pub input: PathBuf,
    #[serde(default = "default_output")]
    pub output: PathBuf,
}

fn default_input() -> PathBuf {
    PathBuf::from(DEFAULT_INPUT_FILE)
}

fn default_output() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_FILE)
}

impl Default for FilesConfig {
    fn default() -> Self {
        FilesConfig {
            input: default_input(),
            output: default_output(),
        }
    }
}

/// Lookup configuration section
#[derive(Debug, Clone, Deserialize, Default)]
pub struct LookupConfig {
    #[serde(default)]
    pub case: LookupCase,
}

/// Histogram configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct HistogramConfig {
    #[serde(default = "default_border")]
    pub border: char,
    #[serde(default = "default_marker")]
    pub marker: char,
    #[serde(default)]
    pub align: NameAlign,
    #[serde(default)]
    pub max_bar_width: Option<usize>,
}

fn default_border() -> char {
    HistogramStyle::default().border
}

fn default_marker() -> char {
    HistogramStyle::default().marker
}

impl Default for HistogramConfig {
    fn default() -> Self {
        HistogramConfig {
            border: default_border(),
            marker: default_marker(),
            align: NameAlign::default(),
            max_bar_width: None,
        }
    }
}

impl HistogramConfig {
    pub fn style(&self) -> HistogramStyle {
        HistogramStyle {
            border: self.border,
            marker: self.marker,
            align: self.align,
            // A zero-width cap would erase every bar
            max_bar_width: self.max_bar_width.filter(|&w| w > 0),
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub files: FilesConfig,
    #[serde(default)]
    pub lookup: LookupConfig,
    #[serde(default)]
    pub histogram: HistogramConfig,
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.files.input, PathBuf::from(DEFAULT_INPUT_FILE));
        assert_eq!(config.files.output, PathBuf::from(DEFAULT_OUTPUT_FILE));
        assert_eq!(config.lookup.case, LookupCase::CapitalizeFirst);
        assert_eq!(config.histogram.style(), HistogramStyle::default());
    }

    #[test]
    fn test_full_config() {
        let config: Config = toml::from_str(
            r##"
[files]
input = "sales/today.txt"
output = "out/frequency.dat"

[lookup]
case = "exact"

[histogram]
border = "-"
marker = "#"
align = "left"
max_bar_width = 40
"##,
        )
        .unwrap();

        assert_eq!(config.files.input, PathBuf::from("sales/today.txt"));
        assert_eq!(config.files.output, PathBuf::from("out/frequency.dat"));
        assert_eq!(config.lookup.case, LookupCase::Exact);
        assert_eq!(
            config.histogram.style(),
            HistogramStyle {
                border: '-',
                marker: '#',
                align: NameAlign::Left,
                max_bar_width: Some(40),
            }
        );
    }

    #[test]
    fn test_multi_character_marker_is_rejected() {
        let result: Result<Config, _> = toml::from_str("[histogram]\nmarker = \"**\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_lookup_case_is_rejected() {
        let result: Result<Config, _> = toml::from_str("[lookup]\ncase = \"fuzzy\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_zero_max_bar_width_disables_scaling() {
        let config: Config = toml::from_str("[histogram]\nmax_bar_width = 0\n").unwrap();
        assert_eq!(config.histogram.style().max_bar_width, None);
    }

    #[test]
    fn test_capitalize_first() {
        assert_eq!(LookupCase::CapitalizeFirst.apply("apple"), "Apple");
        assert_eq!(LookupCase::CapitalizeFirst.apply("Apple"), "Apple");
        assert_eq!(LookupCase::CapitalizeFirst.apply("aPPLE"), "APPLE");
        assert_eq!(LookupCase::CapitalizeFirst.apply(""), "");
        assert_eq!(LookupCase::CapitalizeFirst.apply("éclair"), "Éclair");
    }

    #[test]
    fn test_exact_leaves_name_untouched() {
        assert_eq!(LookupCase::Exact.apply("apple"), "apple");
    }

    // For any valid lookup case value in a TOML config file, parsing should
    // store that policy without errors.
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_valid_lookup_case_parsing(case in prop::sample::select(vec!["exact", "capitalize-first"])) {
            let toml_content = format!("[lookup]\ncase = \"{}\"\n", case);

            let config: Result<Config, _> = toml::from_str(&toml_content);
            prop_assert!(config.is_ok(), "Failed to parse valid case: {}", case);

            let expected = match case {
                "exact" => LookupCase::Exact,
                "capitalize-first" => LookupCase::CapitalizeFirst,
                _ => unreachable!(),
            };
            prop_assert_eq!(config.unwrap().lookup.case, expected);
        }
    }

    // Missing sections or fields fall back to defaults
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_missing_fields_use_defaults(
            include_histogram_section in prop::bool::ANY,
            include_marker_field in prop::bool::ANY
        ) {
            let toml_content = if !include_histogram_section {
                String::new()
            } else if !include_marker_field {
                "[histogram]\n".to_string()
            } else {
                "[histogram]\nmarker = \"#\"\n".to_string()
            };

            let config: Result<Config, _> = toml::from_str(&toml_content);
            prop_assert!(config.is_ok(), "Failed to parse config with missing fields");

            let config = config.unwrap();
            prop_assert_eq!(config.histogram.border, '=');
            if !include_histogram_section || !include_marker_field {
                prop_assert_eq!(config.histogram.marker, '*');
            } else {
                prop_assert_eq!(config.histogram.marker, '#');
            }
        }
    }

    // Capitalizing is idempotent
    proptest! {
        #[test]
        fn prop_capitalize_first_idempotent(name in "[a-zA-Z]{0,12}") {
            let once = LookupCase::CapitalizeFirst.apply(&name);
            prop_assert_eq!(LookupCase::CapitalizeFirst.apply(&once), once.clone());
            prop_assert_eq!(once.to_lowercase(), name.to_lowercase());
        }
    }
}
