use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct GatehouseConfig {
    #[serde(default = "default_db_path")]
    pub db_path: String,
    #[serde(default = "default_dashboard_template")]
    pub dashboard_template: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_db_path() -> String {
    "./data/gatehouse".to_string()
}

fn default_dashboard_template() -> String {
    "dashboard.txt".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for GatehouseConfig {
    fn default() -> Self {
        Self {
            db_path: default_db_path(),
            dashboard_template: default_dashboard_template(),
            log_level: default_log_level(),
        }
    }
}

impl GatehouseConfig {
    pub fn load_or_default(path: &str) -> Self {
        if std::path::Path::new(path).exists() {
            match std::fs::read_to_string(path) {
                Ok(s) => match toml::from_str(&s) {
                    Ok(c) => c,
                    Err(e) => {
                        eprintln!("Error parsing config: {}. Using defaults.", e);
                        Self::default()
                    }
                },
                Err(e) => {
                    eprintln!("Error reading config: {}. Using defaults.", e);
                    Self::default()
                }
            }
        } else {
            Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_file_gives_defaults() {
        let config = GatehouseConfig::load_or_default("no_such_config.toml");
        assert_eq!(config.db_path, "./data/gatehouse");
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gatehouse.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(f, "db_path = \"/tmp/custom\"").unwrap();

        let config = GatehouseConfig::load_or_default(path.to_str().unwrap());
        assert_eq!(config.db_path, "/tmp/custom");
        assert_eq!(config.dashboard_template, "dashboard.txt");
    }

    #[test]
    fn test_invalid_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gatehouse.toml");
        std::fs::write(&path, "db_path = [not toml").unwrap();

        let config = GatehouseConfig::load_or_default(path.to_str().unwrap());
        assert_eq!(config.db_path, "./data/gatehouse");
    }
}
