use std::io;

use anyhow::Result;
use serde::Deserialize;
use anyhow::anyhow;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub admin: AdminConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub worker_threads: Option<usize>,
    #[serde(default = "default_frontend_dir")]
    pub frontend_dir: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            worker_threads: Some(4),
            frontend_dir: default_frontend_dir(),
        }
    }
}

/// Side listener exposing `/healthz` and `/metrics`; disabled when `addr` is unset.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AdminConfig {
    #[serde(default)]
    pub addr: Option<String>,
}

fn default_host() -> String { "127.0.0.1".to_string() }
fn default_port() -> u16 { 8080 }
fn default_frontend_dir() -> String { "frontend".to_string() }

pub fn config_path() -> String {
    std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string())
}

pub fn load_default() -> Result<AppConfig> {
    load_from_file(&config_path())
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    parse(&content)
}

pub fn parse(content: &str) -> Result<AppConfig> {
    let cfg: AppConfig = toml::from_str(content)?;
    Ok(cfg)
}

impl AppConfig {
    pub fn load_and_validate() -> Result<Self> {
        let mut cfg = load_default()?;
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    /// Config file at `$CONFIG_PATH` first; see [`AppConfig::load_or_env_from`].
    pub fn load_or_env() -> Result<Self> {
        Self::load_or_env_from(&config_path())
    }

    /// Read `path`; only when it does not exist, build from `SERVER_HOST`,
    /// `SERVER_PORT`, `TOKIO_WORKER_THREADS`, `FRONTEND_DIR` and `ADMIN_ADDR`.
    /// An unreadable or malformed file is an error.
    pub fn load_or_env_from(path: &str) -> Result<Self> {
        let mut cfg = match std::fs::read_to_string(path) {
            Ok(content) => parse(&content).map_err(|e| anyhow!("invalid config file {path}: {e}"))?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => Self::from_env(),
            Err(e) => return Err(anyhow!("cannot read config file {path}: {e}")),
        };
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    pub fn from_env() -> Self {
        let host = std::env::var("SERVER_HOST").unwrap_or_else(|_| default_host());
        let port = std::env::var("SERVER_PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(8081);
        let worker_threads = std::env::var("TOKIO_WORKER_THREADS").ok().and_then(|v| v.parse::<usize>().ok());
        let frontend_dir = std::env::var("FRONTEND_DIR").unwrap_or_else(|_| default_frontend_dir());
        let admin_addr = std::env::var("ADMIN_ADDR").ok().filter(|a| !a.trim().is_empty());
        Self {
            server: ServerConfig { host, port, worker_threads, frontend_dir },
            admin: AdminConfig { addr: admin_addr },
        }
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.server.normalize()?;
        self.admin.normalize();
        Ok(())
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl ServerConfig {
    fn normalize(&mut self) -> Result<()> {
        if self.host.trim().is_empty() {
            self.host = default_host();
        }
        if self.port == 0 {
            return Err(anyhow!("server.port must be in 1..=65535"));
        }
        match self.worker_threads {
            Some(w) if w > 0 => {}
            _ => self.worker_threads = Some(4),
        }
        if self.frontend_dir.trim().is_empty() {
            self.frontend_dir = default_frontend_dir();
        }
        Ok(())
    }
}

impl AdminConfig {
    fn normalize(&mut self) {
        if self.addr.as_deref().is_some_and(|a| a.trim().is_empty()) {
            self.addr = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_config() -> Result<()> {
        let mut cfg = parse(
            r#"
            [server]
            host = "0.0.0.0"
            port = 9000
            worker_threads = 2
            frontend_dir = "web"

            [admin]
            addr = "127.0.0.1:9100"
            "#,
        )?;
        cfg.normalize_and_validate()?;
        assert_eq!(cfg.bind_addr(), "0.0.0.0:9000");
        assert_eq!(cfg.server.worker_threads, Some(2));
        assert_eq!(cfg.server.frontend_dir, "web");
        assert_eq!(cfg.admin.addr.as_deref(), Some("127.0.0.1:9100"));
        Ok(())
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() -> Result<()> {
        let mut cfg = parse("")?;
        cfg.normalize_and_validate()?;
        assert_eq!(cfg.bind_addr(), "127.0.0.1:8080");
        assert_eq!(cfg.server.frontend_dir, "frontend");
        assert!(cfg.admin.addr.is_none());
        Ok(())
    }

    #[test]
    fn normalizes_blank_host_and_zero_workers() -> Result<()> {
        let mut cfg = parse(
            r#"
            [server]
            host = "  "
            port = 8000
            worker_threads = 0

            [admin]
            addr = ""
            "#,
        )?;
        cfg.normalize_and_validate()?;
        assert_eq!(cfg.server.host, "127.0.0.1");
        assert_eq!(cfg.server.worker_threads, Some(4));
        assert!(cfg.admin.addr.is_none());
        Ok(())
    }

    fn temp_config(name: &str, content: &str) -> String {
        let path = std::env::temp_dir().join(format!("configs_{}_{}.toml", name, std::process::id()));
        std::fs::write(&path, content).expect("write temp config");
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn partial_server_section_keeps_file_values() -> Result<()> {
        let path = temp_config("partial", "[server]\nport = 9000\n");
        let cfg = AppConfig::load_or_env_from(&path)?;
        assert_eq!(cfg.bind_addr(), "127.0.0.1:9000");
        assert_eq!(cfg.server.worker_threads, Some(4));
        let _ = std::fs::remove_file(&path);
        Ok(())
    }

    #[test]
    fn malformed_file_is_an_error_not_env_fallback() {
        let path = temp_config("malformed", "[server\nport = \"nine\"\n");
        let res = AppConfig::load_or_env_from(&path);
        assert!(res.is_err());
        let _ = std::fs::remove_file(&path);

        let path = temp_config("bad_type", "[server]\nport = \"nine\"\n");
        assert!(AppConfig::load_or_env_from(&path).is_err());
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn missing_file_falls_back_to_env() {
        let path = std::env::temp_dir().join(format!("configs_missing_{}.toml", std::process::id()));
        let cfg = AppConfig::load_or_env_from(path.to_str().unwrap());
        assert!(cfg.is_ok());
    }

    #[test]
    fn rejects_port_zero() {
        let mut cfg = parse("[server]\nhost = \"127.0.0.1\"\nport = 0\n").unwrap();
        assert!(cfg.normalize_and_validate().is_err());
    }
}
