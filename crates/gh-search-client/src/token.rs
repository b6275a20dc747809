//! GitHub token resolution
//!
//! Tries, in order:
//! 1. The token passed on the command line
//! 2. `GITHUB_TOKEN` or `GH_TOKEN` from the environment
//! 3. The same variables after loading a `.env` file

use log::debug;
use thiserror::Error;

const TOKEN_VARS: [&str; 2] = ["GITHUB_TOKEN", "GH_TOKEN"];

/// No usable token was found
#[derive(Debug, Error)]
#[error("no GitHub token provided; pass --token or set GITHUB_TOKEN/GH_TOKEN")]
pub struct TokenError;

/// Resolves the token used for every search request
#[derive(Debug, Clone, Default)]
pub struct TokenResolver {
    explicit: Option<String>,
}

impl TokenResolver {
    /// Create a resolver that prefers `explicit` when it is non-empty
    pub fn new(explicit: Option<String>) -> Self {
        Self { explicit }
    }

    /// Resolve against the process environment, loading `.env` if needed
    pub fn resolve(&self) -> Result<String, TokenError> {
        if let Ok(token) = self.resolve_with(|key| std::env::var(key).ok()) {
            return Ok(token);
        }

        match dotenvy::dotenv() {
            Ok(path) => debug!("Loaded .env file from: {:?}", path),
            Err(_) => debug!(".env file not found, no further token sources"),
        }

        self.resolve_with(|key| std::env::var(key).ok())
    }

    /// Resolve using `lookup` in place of the process environment
    pub fn resolve_with<F>(&self, lookup: F) -> Result<String, TokenError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(token) = non_empty(self.explicit.as_deref()) {
            debug!("Using token from command line");
            return Ok(token);
        }

        for key in TOKEN_VARS {
            if let Some(token) = non_empty(lookup(key).as_deref()) {
                debug!("Using token from env var {}", key);
                return Ok(token);
            }
        }

        Err(TokenError)
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_explicit_token_wins() {
        let vars = env(&[("GITHUB_TOKEN", "from-env")]);
        let resolver = TokenResolver::new(Some("from-flag".to_string()));

        let token = resolver.resolve_with(|k| vars.get(k).cloned()).unwrap();
        assert_eq!(token, "from-flag");
    }

    #[test]
    fn test_env_fallback_order() {
        let vars = env(&[("GH_TOKEN", "gh"), ("GITHUB_TOKEN", "github")]);
        let resolver = TokenResolver::new(None);

        let token = resolver.resolve_with(|k| vars.get(k).cloned()).unwrap();
        assert_eq!(token, "github");
    }

    #[test]
    fn test_blank_values_are_ignored() {
        let vars = env(&[("GITHUB_TOKEN", "  "), ("GH_TOKEN", "gh")]);
        let resolver = TokenResolver::new(Some(String::new()));

        let token = resolver.resolve_with(|k| vars.get(k).cloned()).unwrap();
        assert_eq!(token, "gh");
    }

    #[test]
    fn test_missing_token() {
        let resolver = TokenResolver::new(None);
        assert!(resolver.resolve_with(|_| None).is_err());
    }
}
