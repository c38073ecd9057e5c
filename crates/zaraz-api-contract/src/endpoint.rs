//! Versioned endpoint segments for the Zaraz settings resource

use std::fmt;
use std::str::FromStr;

/// Version of the Zaraz settings resource group
///
/// Unrecognised tags resolve to [`EndpointVersion::V1`]; there is no failure path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EndpointVersion {
    #[default]
    V1,
    V2,
}

impl EndpointVersion {
    /// Path segment for this version, relative to the zone resource
    pub fn path_segment(self) -> &'static str {
        match self {
            EndpointVersion::V1 => "settings/zaraz",
            EndpointVersion::V2 => "settings/zaraz/v2",
        }
    }

    /// Resolve a version tag, falling back to `V1` for anything unknown
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "v2" => EndpointVersion::V2,
            _ => EndpointVersion::V1,
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            EndpointVersion::V1 => "v1",
            EndpointVersion::V2 => "v2",
        }
    }
}

impl FromStr for EndpointVersion {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_tag(s))
    }
}

impl fmt::Display for EndpointVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_tags_resolve() {
        assert_eq!(EndpointVersion::from_tag("v1").path_segment(), "settings/zaraz");
        assert_eq!(EndpointVersion::from_tag("v2").path_segment(), "settings/zaraz/v2");
    }

    #[test]
    fn test_unknown_tag_falls_back_to_v1() {
        for tag in ["", "V2", "v3", "latest"] {
            assert_eq!(EndpointVersion::from_tag(tag), EndpointVersion::V1, "tag {tag:?}");
        }
        let parsed: EndpointVersion = "beta".parse().unwrap();
        assert_eq!(parsed, EndpointVersion::default());
    }

    #[test]
    fn test_display_matches_tag() {
        assert_eq!(EndpointVersion::V2.to_string(), "v2");
        assert_eq!(EndpointVersion::V1.to_string(), "v1");
    }
}
