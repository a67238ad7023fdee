use serde::{Deserialize, Serialize};

/// Action set a resolved view exposes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    /// Full edit/delete/view action set
    #[default]
    Default,
    /// Approval-only action set for management screens
    Management,
}

impl RenderMode {
    /// Mode code passed through to views
    pub fn code(&self) -> &'static str {
        match self {
            RenderMode::Default => "default",
            RenderMode::Management => "management",
        }
    }

    /// Parse from a mode code
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "default" => Some(RenderMode::Default),
            "management" => Some(RenderMode::Management),
            _ => None,
        }
    }
}

impl ToString for RenderMode {
    fn to_string(&self) -> String {
        self.code().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_round_trip() {
        for mode in [RenderMode::Default, RenderMode::Management] {
            assert_eq!(RenderMode::from_code(mode.code()), Some(mode));
        }
        assert_eq!(RenderMode::from_code("readonly"), None);
    }

    #[test]
    fn test_default_mode() {
        assert_eq!(RenderMode::default(), RenderMode::Default);
    }

    #[test]
    fn test_serde_uses_code() {
        assert_eq!(
            serde_json::to_string(&RenderMode::Management).unwrap(),
            "\"management\""
        );
        let back: RenderMode = serde_json::from_str("\"default\"").unwrap();
        assert_eq!(back, RenderMode::Default);
    }
}
