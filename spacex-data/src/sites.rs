//! Launch site dropdown options.
//!
//! The dropdown carries short option codes rather than site names. Each code
//! except `ALL` maps to exactly one literal site-name string in the data.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One entry of the launch site dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum SiteOption {
    /// Aggregate over every site.
    #[default]
    All,
    VafbSlc4e,
    KscLc39a,
    CcafsSlc40,
    CcafsLc40,
}

impl SiteOption {
    /// Options in dropdown order.
    pub const OPTIONS: [SiteOption; 5] = [
        SiteOption::All,
        SiteOption::VafbSlc4e,
        SiteOption::KscLc39a,
        SiteOption::CcafsSlc40,
        SiteOption::CcafsLc40,
    ];

    /// The option code carried by the dropdown.
    pub fn value(self) -> &'static str {
        match self {
            SiteOption::All => "ALL",
            SiteOption::VafbSlc4e => "OPT1",
            SiteOption::KscLc39a => "OPT2",
            SiteOption::CcafsSlc40 => "OPT3",
            SiteOption::CcafsLc40 => "OPT4",
        }
    }

    /// Text shown in the dropdown.
    pub fn label(self) -> &'static str {
        match self {
            SiteOption::All => "All Sites",
            other => other.site_name().unwrap_or_default(),
        }
    }

    /// Site name to filter on, `None` for the aggregate option.
    pub fn site_name(self) -> Option<&'static str> {
        match self {
            SiteOption::All => None,
            SiteOption::VafbSlc4e => Some("VAFB SLC-4E"),
            SiteOption::KscLc39a => Some("KSC LC-39A"),
            SiteOption::CcafsSlc40 => Some("CCAFS SLC-40"),
            SiteOption::CcafsLc40 => Some("CCAFS LC-40"),
        }
    }
}

impl fmt::Display for SiteOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

impl FromStr for SiteOption {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SiteOption::OPTIONS
            .into_iter()
            .find(|option| option.value() == s.trim())
            .ok_or_else(|| anyhow::anyhow!("unknown launch site option '{}'", s))
    }
}

impl TryFrom<String> for SiteOption {
    type Error = anyhow::Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SiteOption> for String {
    fn from(option: SiteOption) -> Self {
        option.value().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_codes_map_to_site_names() {
        let mapped: Vec<(&str, Option<&str>)> = SiteOption::OPTIONS
            .iter()
            .map(|o| (o.value(), o.site_name()))
            .collect();
        assert_eq!(
            mapped,
            vec![
                ("ALL", None),
                ("OPT1", Some("VAFB SLC-4E")),
                ("OPT2", Some("KSC LC-39A")),
                ("OPT3", Some("CCAFS SLC-40")),
                ("OPT4", Some("CCAFS LC-40")),
            ]
        );
    }

    #[test]
    fn test_labels() {
        assert_eq!(SiteOption::All.label(), "All Sites");
        assert_eq!(SiteOption::CcafsLc40.label(), "CCAFS LC-40");
    }

    #[test]
    fn test_parse_round_trips_every_option() {
        for option in SiteOption::OPTIONS {
            assert_eq!(option.value().parse::<SiteOption>().unwrap(), option);
        }
    }

    #[test]
    fn test_parse_unknown_option_fails() {
        assert!("OPT5".parse::<SiteOption>().is_err());
        // Site names are not option codes.
        assert!("KSC LC-39A".parse::<SiteOption>().is_err());
    }

    #[test]
    fn test_default_is_all() {
        assert_eq!(SiteOption::default(), SiteOption::All);
    }

    #[test]
    fn test_serializes_as_option_code() {
        let json = serde_json::to_string(&SiteOption::KscLc39a).unwrap();
        assert_eq!(json, "\"OPT2\"");
        let back: SiteOption = serde_json::from_str("\"OPT3\"").unwrap();
        assert_eq!(back, SiteOption::CcafsSlc40);
    }
}
