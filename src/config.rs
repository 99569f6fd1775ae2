use crate::{
    AccountId,
    Amount,
    TOKEN_UNIT,
};
use chrono::Utc;
use color_eyre::eyre::{Result, WrapErr};
use serde::{Deserialize, Serialize};
use std::{
    fmt, fs,
    io::Write,
    path::{Path, PathBuf},
};

pub const CONFIG_ROOT: &str = ".rps";
const CONFIG_FILE: &str = "engine.json";

pub const DEFAULT_BET_FEE: Amount = TOKEN_UNIT;
pub const DEFAULT_DEADLINE_SECS: i64 = 90;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ConfigEnv {
    Dev,
    Test,
    Local,
}

impl ConfigEnv {
    pub fn dir_name(self) -> &'static str {
        match self {
            ConfigEnv::Dev => "dev",
            ConfigEnv::Test => "test",
            ConfigEnv::Local => "local",
        }
    }
}

impl fmt::Display for ConfigEnv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ConfigEnv::Dev => "Devnet",
            ConfigEnv::Test => "Testnet",
            ConfigEnv::Local => "Local",
        };
        write!(f, "{name}")
    }
}

/// Construction-time wiring for an engine instance: who governs it,
/// which token account custodies the escrow, and the two governance
/// parameters' starting values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    pub owner: AccountId,
    pub engine_account: AccountId,
    pub bet_fee: Amount,
    pub deadline_secs: i64,
}

impl EngineConfig {
    pub fn new(owner: AccountId, engine_account: AccountId) -> Self {
        Self {
            owner,
            engine_account,
            bet_fee: DEFAULT_BET_FEE,
            deadline_secs: DEFAULT_DEADLINE_SECS,
        }
    }

    pub fn with_bet_fee(mut self, bet_fee: Amount) -> Self {
        self.bet_fee = bet_fee;
        self
    }

    pub fn with_deadline_secs(mut self, deadline_secs: i64) -> Self {
        self.deadline_secs = deadline_secs;
        self
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ConfigRecord {
    pub recorded_at: String,
    pub config: EngineConfig,
}

/// On-disk history of engine configurations, one JSON file per
/// environment under `.rps/`.
#[derive(Debug)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    pub fn new(env: ConfigEnv) -> Result<Self> {
        let path = ensure_store(Path::new(CONFIG_ROOT), env)?;
        Ok(Self { path })
    }

    /// Store rooted somewhere other than the working directory.
    pub fn new_at(root: impl AsRef<Path>, env: ConfigEnv) -> Result<Self> {
        let path = ensure_store(root.as_ref(), env)?;
        Ok(Self { path })
    }

    pub fn load(&self) -> Result<Vec<ConfigRecord>> {
        read_records(&self.path)
    }

    pub fn append(&self, config: &EngineConfig) -> Result<()> {
        let mut records = self.load()?;
        records.push(ConfigRecord {
            recorded_at: Utc::now().to_rfc3339(),
            config: *config,
        });
        write_records(&self.path, &records)
    }

    pub fn latest(&self) -> Result<Option<EngineConfig>> {
        let records = self.load()?;
        Ok(records.last().map(|record| record.config))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn ensure_store(root: &Path, env: ConfigEnv) -> Result<PathBuf> {
    if !root.exists() {
        fs::create_dir_all(root)
            .wrap_err_with(|| format!("Failed to create {} directory", root.display()))?;
    }

    let env_dir = root.join(env.dir_name());
    if !env_dir.exists() {
        fs::create_dir_all(&env_dir).wrap_err_with(|| {
            format!("Failed to create config directory for {}", env)
        })?;
    }

    let file_path = env_dir.join(CONFIG_FILE);
    if !file_path.exists() {
        let mut file = fs::File::create(&file_path).wrap_err_with(|| {
            format!("Failed to create config file for {} at {:?}", env, file_path)
        })?;
        file.write_all(b"[]")
            .wrap_err_with(|| format!("Failed to initialize config file for {}", env))?;
    }

    Ok(file_path)
}

fn read_records(path: impl AsRef<Path>) -> Result<Vec<ConfigRecord>> {
    let data = fs::read(path.as_ref()).wrap_err("Failed to read config records")?;
    if data.is_empty() {
        return Ok(Vec::new());
    }
    let records = serde_json::from_slice::<Vec<ConfigRecord>>(&data)
        .wrap_err("Failed to parse config records JSON")?;
    Ok(records)
}

fn write_records(path: impl AsRef<Path>, records: &[ConfigRecord]) -> Result<()> {
    let json =
        serde_json::to_vec_pretty(records).wrap_err("Failed to serialize config records")?;
    fs::write(path.as_ref(), json).wrap_err("Failed to write config records")?;
    Ok(())
}
