//! `.env` 파일 기반 설정 저장소
//!
//! `dotenv` 파서로 파일을 읽되 프로세스 환경을 오염시키지 않고 메모리 맵에만 보관합니다.
//! 파일이 없으면 빈 설정으로 시작하고, 잘못된 줄은 경고 후 건너뜁니다.

use std::collections::HashMap;
use std::env;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use parking_lot::RwLock;

use super::Config;
use crate::errors::{AppError, AppResult};

/// 기본 설정 파일 경로
pub const DEFAULT_ENV_PATH: &str = ".env";

/// 설정 파일 경로를 덮어쓰는 환경 변수
pub const CONFIG_PATH_VAR: &str = "CONFIG_PATH";

#[derive(Debug, Default)]
pub struct EnvConfig {
    values: RwLock<HashMap<String, String>>,
    source: Option<PathBuf>,
}

impl EnvConfig {
    /// `CONFIG_PATH` 환경 변수(없으면 `.env`)가 가리키는 파일을 로드합니다.
    pub fn from_env() -> AppResult<Self> {
        let path = env::var(CONFIG_PATH_VAR)
            .ok()
            .filter(|path| !path.is_empty())
            .unwrap_or_else(|| DEFAULT_ENV_PATH.to_string());

        Self::load(path)
    }

    /// 지정한 `.env` 파일을 로드합니다.
    ///
    /// # Errors
    ///
    /// * `ConfigError` - 파일은 있지만 열 수 없는 경우
    pub fn load(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let mut values = HashMap::new();

        if !path.exists() {
            debug!("Config file {} not found, starting empty", path.display());
            return Ok(Self {
                values: RwLock::new(values),
                source: Some(path.to_path_buf()),
            });
        }

        let entries = dotenv::from_path_iter(path)
            .map_err(|e| AppError::ConfigError(format!("{}: {}", path.display(), e)))?;

        for entry in entries {
            match entry {
                Ok((key, value)) => {
                    values.insert(key, value);
                }
                Err(e) => warn!("Skipping malformed line in {}: {}", path.display(), e),
            }
        }

        debug!("Loaded {} config values from {}", values.len(), path.display());

        Ok(Self {
            values: RwLock::new(values),
            source: Some(path.to_path_buf()),
        })
    }

    /// 파일 없이 주어진 값들로 설정을 생성합니다.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let values = pairs
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect();

        Self {
            values: RwLock::new(values),
            source: None,
        }
    }

    /// 로드한 파일 경로
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }
}

impl Config for EnvConfig {
    fn lookup(&self, key: &str) -> Option<String> {
        if let Ok(value) = env::var(key) {
            if !value.is_empty() {
                return Some(value);
            }
        }

        self.values
            .read()
            .get(key)
            .filter(|value| !value.is_empty())
            .cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.values.write().insert(key.to_string(), value.to_string());
    }

    fn all(&self) -> HashMap<String, String> {
        self.values.read().clone()
    }
}
