//! Target stacks.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Supported target application stacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Stack {
    /// Go + Gin + GORM
    Go,
    /// Laravel + PHP
    Laravel,
    /// React + TypeScript + TanStack Query
    React,
    /// Flutter + Dart + Riverpod
    Flutter,
}

impl Stack {
    /// Every stack, in registration order.
    pub const ALL: [Stack; 4] = [Stack::Go, Stack::Laravel, Stack::React, Stack::Flutter];

    /// Returns the stack identifier as a static string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Stack::Go => "go",
            Stack::Laravel => "laravel",
            Stack::React => "react",
            Stack::Flutter => "flutter",
        }
    }

    /// Short human-readable description of the technology combination.
    pub fn description(&self) -> &'static str {
        match self {
            Stack::Go => "Go + Gin + GORM (clean architecture)",
            Stack::Laravel => "Laravel + PHP (domain + use case)",
            Stack::React => "React + TypeScript + Vite (MVVM)",
            Stack::Flutter => "Flutter + Dart + Riverpod (feature-based)",
        }
    }
}

impl fmt::Display for Stack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Stack {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "go" | "golang" => Ok(Stack::Go),
            "laravel" | "php" => Ok(Stack::Laravel),
            "react" => Ok(Stack::React),
            "flutter" | "dart" => Ok(Stack::Flutter),
            _ => Err(format!(
                "unknown stack '{}', expected one of: go, laravel, react, flutter",
                s
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!(Stack::from_str("go").unwrap(), Stack::Go);
        assert_eq!(Stack::from_str("golang").unwrap(), Stack::Go);
        assert_eq!(Stack::from_str("Laravel").unwrap(), Stack::Laravel);
        assert_eq!(Stack::from_str("REACT").unwrap(), Stack::React);
        assert_eq!(Stack::from_str("dart").unwrap(), Stack::Flutter);
        assert!(Stack::from_str("remix").is_err());
    }

    #[test]
    fn test_display_round_trips() {
        for stack in Stack::ALL {
            assert_eq!(Stack::from_str(&stack.to_string()).unwrap(), stack);
        }
    }

    #[test]
    fn test_deserialize() {
        let stack: Stack = serde_json::from_str(r#""flutter""#).unwrap();
        assert_eq!(stack, Stack::Flutter);
    }
}
