use std::{
    fmt::{self, Display},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

use crate::InitErr;

/// The initialization schemes the weight initializer can dispatch to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InitMethod {
    /// Xavier/Glorot uniform, scaled by the gain.
    Xavier,
    /// Kaiming/He normal for `relu` in `fan_in` mode, the gain is not used.
    Kaiming,
    /// (Semi-)orthogonal matrix scaled by the gain.
    Orthogonal,
    /// Normal with mean zero and the gain as standard deviation.
    Normal,
    /// Uniform over `[-gain, gain]`.
    Uniform,
}

impl InitMethod {
    /// Every available method.
    pub const ALL: [InitMethod; 5] = [
        Self::Xavier,
        Self::Kaiming,
        Self::Orthogonal,
        Self::Normal,
        Self::Uniform,
    ];

    /// Returns the name this method is written as in specs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Xavier => "xavier",
            Self::Kaiming => "kaiming",
            Self::Orthogonal => "orthogonal",
            Self::Normal => "normal",
            Self::Uniform => "uniform",
        }
    }
}

impl Display for InitMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for InitMethod {
    type Err = InitErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();

        Self::ALL
            .into_iter()
            .find(|method| method.name() == name)
            .ok_or_else(|| InitErr::UnknownMethod(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_name() {
        for method in InitMethod::ALL {
            assert_eq!(method.name().parse::<InitMethod>().unwrap(), method);
        }
    }

    #[test]
    fn parsing_ignores_case_and_whitespace() {
        let method: InitMethod = "  Orthogonal ".parse().unwrap();
        assert_eq!(method, InitMethod::Orthogonal);
    }

    #[test]
    fn unknown_name_is_an_error() {
        let err = "he_uniform".parse::<InitMethod>().unwrap_err();
        assert!(matches!(err, InitErr::UnknownMethod(name) if name == "he_uniform"));
    }

    #[test]
    fn serde_uses_lowercase_names() {
        let json = serde_json::to_string(&InitMethod::Kaiming).unwrap();
        assert_eq!(json, "\"kaiming\"");

        let method: InitMethod = serde_json::from_str("\"uniform\"").unwrap();
        assert_eq!(method, InitMethod::Uniform);
    }
}
