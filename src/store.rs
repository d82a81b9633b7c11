use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};

use crate::model::{ClientConfig, DEFAULT_API_BASE_URL, SessionState, normalize_base_url};

mod credential;

const HOME_ENV: &str = "LINKGEN_HOME";
const STORE_DIR: &str = ".linkgen";

/// Client-side persisted state: `config.json` and `state.json` under one
/// directory.
#[derive(Clone, Debug)]
pub struct LocalStore {
    root: PathBuf,
}

impl LocalStore {
    /// `$LINKGEN_HOME`, else `$HOME/.linkgen`.
    pub fn default_root() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
            return Ok(PathBuf::from(dir));
        }
        let home = std::env::var_os("HOME")
            .filter(|v| !v.is_empty())
            .ok_or_else(|| anyhow!("cannot locate state dir (set {} or HOME)", HOME_ENV))?;
        Ok(PathBuf::from(home).join(STORE_DIR))
    }

    pub fn open(root: &Path) -> Result<Self> {
        fs::create_dir_all(root)
            .with_context(|| format!("create state dir {}", root.display()))?;
        Ok(Self {
            root: root.to_path_buf(),
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn read_config(&self) -> Result<ClientConfig> {
        let path = self.root.join("config.json");
        if !path.exists() {
            return Ok(ClientConfig::default());
        }
        let bytes = fs::read(&path).context("read config.json")?;
        let cfg: ClientConfig = serde_json::from_slice(&bytes).context("parse config.json")?;
        if cfg.version != 1 {
            anyhow::bail!("unsupported config version {}", cfg.version);
        }
        Ok(cfg)
    }

    pub fn write_config(&self, cfg: &ClientConfig) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(cfg).context("serialize config")?;
        write_atomic(&self.root.join("config.json"), &bytes).context("write config.json")?;
        Ok(())
    }

    pub fn read_state(&self) -> Result<SessionState> {
        let path = self.root.join("state.json");
        if !path.exists() {
            return Ok(SessionState::default());
        }
        let bytes = fs::read(&path).context("read state.json")?;
        let st: SessionState = serde_json::from_slice(&bytes).context("parse state.json")?;
        if st.version != 1 {
            anyhow::bail!("unsupported session state version {}", st.version);
        }
        Ok(st)
    }

    pub fn write_state(&self, st: &SessionState) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(st).context("serialize state")?;
        write_atomic(&self.root.join("state.json"), &bytes).context("write state.json")?;
        Ok(())
    }

    /// Flag, then environment, then config.json, then the built-in default.
    pub fn resolve_base_url(&self, flag: Option<&str>, env: Option<&str>) -> Result<String> {
        if let Some(url) = flag.filter(|s| !s.trim().is_empty()) {
            return Ok(normalize_base_url(url));
        }
        if let Some(url) = env.filter(|s| !s.trim().is_empty()) {
            return Ok(normalize_base_url(url));
        }
        let cfg = self.read_config()?;
        Ok(normalize_base_url(
            cfg.api_base_url.as_deref().unwrap_or(DEFAULT_API_BASE_URL),
        ))
    }
}

fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context("create parent directories")?;
    }
    let tmp = path.with_extension(format!("tmp.{}", std::process::id()));
    fs::write(&tmp, bytes).with_context(|| format!("write temp file {}", tmp.display()))?;
    fs::rename(&tmp, path)
        .with_context(|| format!("rename {} -> {}", tmp.display(), path.display()))?;
    Ok(())
}

#[cfg(test)]
#[path = "tests/store/store_tests.rs"]
mod tests;
