use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub session: SessionConfig,
    #[serde(default)]
    pub users: Vec<UserConfig>,
    #[serde(default)]
    pub mock: MockConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
    /// Directory with the built frontend, served as fallback.
    pub static_dir: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SessionConfig {
    pub ttl_hours: i64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct UserConfig {
    pub username: String,
    pub password: String,
    pub display_name: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct MockConfig {
    /// Simulated latency of the mock directories.
    pub latency_ms: u64,
}

impl Default for MockConfig {
    fn default() -> Self {
        Self { latency_ms: 150 }
    }
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
port = 3000
static_dir = "dist"

[session]
ttl_hours = 12

[[users]]
username = "admin"
password = "admin"
display_name = "Administrator"

[mock]
latency_ms = 150
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                return parse_config(&contents);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG)
}

pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents)?;
    if config.users.is_empty() {
        tracing::warn!("No users configured, nobody will be able to log in");
    }
    Ok(config)
}

#[cfg(test)]
pub fn default_config() -> Config {
    parse_config(DEFAULT_CONFIG).expect("default config must parse")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = default_config();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.session.ttl_hours, 12);
        assert_eq!(config.users.len(), 1);
        assert_eq!(config.users[0].username, "admin");
        assert_eq!(config.mock.latency_ms, 150);
    }

    #[test]
    fn test_mock_section_is_optional() {
        let config = parse_config(
            r#"
            [server]
            port = 8080
            static_dir = "public"

            [session]
            ttl_hours = 1
            "#,
        )
        .unwrap();
        assert!(config.users.is_empty());
        assert_eq!(config.mock.latency_ms, 150);
    }
}
