use serde::{Deserialize, Serialize};

/// Dashboard roles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Hrd,
    Pengadaan,
    Finance,
    Gudang,
    Management,
    Qhse,
    Accounting,
    Tax,
    Procon,
    Marketing,
    Operational,
}

impl Role {
    /// Role code as carried by the session layer
    pub fn code(&self) -> &'static str {
        match self {
            Role::Hrd => "hrd",
            Role::Pengadaan => "pengadaan",
            Role::Finance => "finance",
            Role::Gudang => "gudang",
            Role::Management => "management",
            Role::Qhse => "qhse",
            Role::Accounting => "accounting",
            Role::Tax => "tax",
            Role::Procon => "procon",
            Role::Marketing => "marketing",
            Role::Operational => "operational",
        }
    }

    /// Human readable role name
    pub fn display_name(&self) -> &'static str {
        match self {
            Role::Hrd => "HRD",
            Role::Pengadaan => "Pengadaan",
            Role::Finance => "Finance",
            Role::Gudang => "Gudang",
            Role::Management => "Management",
            Role::Qhse => "QHSE",
            Role::Accounting => "Accounting",
            Role::Tax => "Tax",
            Role::Procon => "Project Control",
            Role::Marketing => "Marketing",
            Role::Operational => "Operasional",
        }
    }

    /// All known roles
    pub fn all() -> Vec<Role> {
        vec![
            Role::Hrd,
            Role::Pengadaan,
            Role::Finance,
            Role::Gudang,
            Role::Management,
            Role::Qhse,
            Role::Accounting,
            Role::Tax,
            Role::Procon,
            Role::Marketing,
            Role::Operational,
        ]
    }

    /// Parse from a session role code
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "hrd" => Some(Role::Hrd),
            "pengadaan" => Some(Role::Pengadaan),
            "finance" => Some(Role::Finance),
            "gudang" => Some(Role::Gudang),
            "management" => Some(Role::Management),
            "qhse" => Some(Role::Qhse),
            "accounting" => Some(Role::Accounting),
            "tax" => Some(Role::Tax),
            "procon" => Some(Role::Procon),
            "marketing" => Some(Role::Marketing),
            "operational" => Some(Role::Operational),
            _ => None,
        }
    }

    /// Parse from a session role code, treating unknown codes as the
    /// operational role.
    pub fn from_code_or_default(code: &str) -> Self {
        Self::from_code(code).unwrap_or(Role::Operational)
    }
}

impl ToString for Role {
    fn to_string(&self) -> String {
        self.code().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_round_trip() {
        for role in Role::all() {
            assert_eq!(Role::from_code(role.code()), Some(role));
        }
    }

    #[test]
    fn test_unknown_code_defaults_to_operational() {
        assert_eq!(Role::from_code("supervisor"), None);
        assert_eq!(Role::from_code(""), None);
        assert_eq!(Role::from_code_or_default("supervisor"), Role::Operational);
        assert_eq!(Role::from_code_or_default(""), Role::Operational);
    }

    #[test]
    fn test_serde_uses_code() {
        for role in Role::all() {
            let json = serde_json::to_string(&role).unwrap();
            assert_eq!(json, format!("\"{}\"", role.code()));
            let back: Role = serde_json::from_str(&json).unwrap();
            assert_eq!(back, role);
        }
    }
}
