use serde::Deserialize;

use crate::domain::a001_person::PersonRules;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub person: PersonRules,
}

/// Default rules configuration embedded in the binary
pub const DEFAULT_CONFIG: &str = r#"
[person]
min_first_name_len = 2
reserved_first_name = "Q"
forbidden_last_name = "Doe"
min_age = 18
"#;

/// Load the rules configuration
///
/// Search order:
/// 1. The override document, if the host supplied one
/// 2. Falls back to embedded default config
pub fn load_config(overrides: Option<&str>) -> anyhow::Result<Config> {
    let contents = match overrides {
        Some(text) if !text.trim().is_empty() => text,
        _ => DEFAULT_CONFIG,
    };
    let config: Config = toml::from_str(contents)?;
    Ok(config)
}

/// Person rules from the configuration
pub fn load_rules(overrides: Option<&str>) -> anyhow::Result<PersonRules> {
    Ok(load_config(overrides)?.person)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config: Result<Config, _> = toml::from_str(DEFAULT_CONFIG);
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config.person, PersonRules::DEFAULT);
    }

    #[test]
    fn test_blank_override_uses_default() {
        let rules = load_rules(Some("   \n")).unwrap();
        assert_eq!(rules, PersonRules::DEFAULT);
        assert_eq!(load_rules(None).unwrap(), PersonRules::DEFAULT);
    }

    #[test]
    fn test_override() {
        let rules = load_rules(Some(
            r#"
[person]
min_first_name_len = 3
reserved_first_name = "X"
forbidden_last_name = "Roe"
min_age = 21
"#,
        ))
        .unwrap();
        assert_eq!(rules.min_first_name_len, 3);
        assert_eq!(rules.reserved_first_name, "X");
        assert_eq!(rules.min_age, 21);
    }

    #[test]
    fn test_invalid_override_is_error() {
        assert!(load_rules(Some("[person]\nmin_age = \"old\"")).is_err());
    }
}
