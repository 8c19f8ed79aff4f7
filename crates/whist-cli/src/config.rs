use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{Level, event};
use whist_core::model::options::{
    GameOptions, LeadingPlayer, OptionsError, PlayerType, TurnDirection,
};
use whist_core::model::seat::{SEAT_COUNT, Seat};

const PROPERTIES_EXTENSION: &str = "properties";

/// Root configuration loaded from YAML or a legacy properties file.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct WhistConfig {
    #[serde(default)]
    pub game: GameConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl WhistConfig {
    /// Load configuration from disk. Files ending in `.properties` use the
    /// legacy `key=value` format; anything else is parsed as YAML.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let path_buf = path.to_path_buf();
        let is_properties = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case(PROPERTIES_EXTENSION));

        let cfg = if is_properties {
            let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
                source,
                path: path_buf.clone(),
            })?;
            let game = GameConfig::from_properties(&text).map_err(|source| {
                ConfigError::Properties {
                    path: path_buf.clone(),
                    source,
                }
            })?;
            WhistConfig {
                game,
                logging: LoggingConfig::default(),
            }
        } else {
            let file = File::open(path).map_err(|source| ConfigError::Read {
                source,
                path: path_buf.clone(),
            })?;
            serde_yaml::from_reader(BufReader::new(file)).map_err(|source| ConfigError::Parse {
                source,
                path: path_buf.clone(),
            })?
        };

        cfg.validate().map_err(|source| ConfigError::Invalid {
            path: path_buf,
            source,
        })?;
        Ok(cfg)
    }

    /// Validate the configuration without performing I/O.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.game.options().map(|_| ())
    }
}

/// Leader setting as written in YAML: `random` or a seat index.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum LeaderSetting {
    Index(i64),
    Named(String),
}

impl Default for LeaderSetting {
    fn default() -> Self {
        LeaderSetting::Named("random".to_string())
    }
}

/// The `game` block.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct GameConfig {
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default = "default_hand_size")]
    pub hand_size: usize,
    #[serde(default)]
    pub leading_player: LeaderSetting,
    #[serde(default = "default_win_score")]
    pub win_score: u32,
    #[serde(default)]
    pub direction: TurnDirection,
    #[serde(default = "default_players")]
    pub players: Vec<PlayerType>,
    #[serde(default = "default_enforce_rules")]
    pub enforce_rules: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            hand_size: default_hand_size(),
            leading_player: LeaderSetting::default(),
            win_score: default_win_score(),
            direction: TurnDirection::default(),
            players: default_players(),
            enforce_rules: default_enforce_rules(),
        }
    }
}

impl GameConfig {
    /// Resolve into engine options, checking every field.
    pub fn options(&self) -> Result<GameOptions, ValidationError> {
        let leading_player = match &self.leading_player {
            LeaderSetting::Index(index) => LeadingPlayer::from_index(*index)
                .map_err(|err| invalid("game.leading_player", err.to_string()))?,
            LeaderSetting::Named(name) if name.trim().eq_ignore_ascii_case("random") => {
                LeadingPlayer::Random
            }
            LeaderSetting::Named(name) => {
                return Err(invalid(
                    "game.leading_player",
                    format!("expected \"random\" or a seat index, got {name:?}"),
                ));
            }
        };

        let player_types: [PlayerType; SEAT_COUNT] =
            self.players.as_slice().try_into().map_err(|_| {
                invalid(
                    "game.players",
                    format!(
                        "exactly {SEAT_COUNT} player types are required, got {}",
                        self.players.len()
                    ),
                )
            })?;

        let options = GameOptions {
            seed: self.seed,
            hand_size: self.hand_size,
            leading_player,
            win_score: self.win_score,
            direction: self.direction,
            player_types,
            enforce_rules: self.enforce_rules,
        };
        options
            .validate()
            .map_err(|err| invalid(options_field(&err), err.to_string()))?;
        Ok(options)
    }

    /// Parse the legacy properties format.
    ///
    /// Keys: `seed` (signed), `handSize`, `leadingPlayer` (negative for random),
    /// `winScore`, `clockwise`, `playerType0`..`playerType3`, `checkedRules`.
    /// Missing keys keep their defaults; unknown keys are ignored.
    pub fn from_properties(text: &str) -> Result<Self, PropertiesError> {
        let entries = parse_properties(text)?;
        let mut cfg = GameConfig::default();

        for (key, (line, value)) in &entries {
            let line = *line;
            match key.as_str() {
                "seed" => {
                    // Signed in the legacy format; reinterpret the bits.
                    let seed: i64 = parse_value(key, line, value)?;
                    cfg.seed = Some(seed as u64);
                }
                "handSize" => cfg.hand_size = parse_value(key, line, value)?,
                "leadingPlayer" => {
                    cfg.leading_player = LeaderSetting::Index(parse_value(key, line, value)?)
                }
                "winScore" => cfg.win_score = parse_value(key, line, value)?,
                "clockwise" => {
                    cfg.direction = TurnDirection::from_clockwise(parse_value(key, line, value)?)
                }
                "checkedRules" => cfg.enforce_rules = parse_value(key, line, value)?,
                _ => {
                    if let Some(seat) = key
                        .strip_prefix("playerType")
                        .and_then(|index| index.parse::<usize>().ok())
                        .and_then(Seat::from_index)
                    {
                        cfg.players[seat.index()] = parse_value(key, line, value)?;
                    } else {
                        event!(
                            target: "whist_cli::config",
                            Level::WARN,
                            key = key.as_str(),
                            line,
                            "ignoring unknown property"
                        );
                    }
                }
            }
        }

        Ok(cfg)
    }
}

/// Logging configuration block.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct LoggingConfig {
    #[serde(default = "default_tracing_level")]
    pub tracing_level: String,
    /// When set, structured JSON logs are written here instead of stderr.
    #[serde(default)]
    pub json_file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            tracing_level: default_tracing_level(),
            json_file: None,
        }
    }
}

impl LoggingConfig {
    pub fn level(&self) -> Option<Level> {
        match self.tracing_level.trim().to_ascii_lowercase().as_str() {
            "trace" => Some(Level::TRACE),
            "debug" => Some(Level::DEBUG),
            "info" => Some(Level::INFO),
            "warn" | "warning" => Some(Level::WARN),
            "error" => Some(Level::ERROR),
            _ => None,
        }
    }
}

fn default_hand_size() -> usize {
    GameOptions::MAX_HAND_SIZE
}

fn default_win_score() -> u32 {
    GameOptions::default().win_score
}

fn default_players() -> Vec<PlayerType> {
    GameOptions::default().player_types.to_vec()
}

fn default_enforce_rules() -> bool {
    true
}

fn default_tracing_level() -> String {
    "warn".to_string()
}

fn invalid(field: &str, message: String) -> ValidationError {
    ValidationError::InvalidField {
        field: field.to_string(),
        message,
    }
}

fn options_field(err: &OptionsError) -> &'static str {
    match err {
        OptionsError::HandSize(_) => "game.hand_size",
        OptionsError::WinScore => "game.win_score",
        OptionsError::LeadingSeatOutOfRange(_) => "game.leading_player",
        OptionsError::UnknownPlayerType(_) => "game.players",
    }
}

/// Later duplicates win, matching how the format has always been read.
fn parse_properties(text: &str) -> Result<BTreeMap<String, (usize, String)>, PropertiesError> {
    let mut entries = BTreeMap::new();
    for (index, raw) in text.lines().enumerate() {
        let line = index + 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with('!') {
            continue;
        }
        let Some((key, value)) = trimmed.split_once(['=', ':']) else {
            return Err(PropertiesError::Syntax {
                line,
                text: trimmed.to_string(),
            });
        };
        entries.insert(key.trim().to_string(), (line, value.trim().to_string()));
    }
    Ok(entries)
}

fn parse_value<T>(key: &str, line: usize, value: &str) -> Result<T, PropertiesError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value.parse().map_err(|err: T::Err| PropertiesError::Value {
        key: key.to_string(),
        line,
        message: err.to_string(),
    })
}

/// Errors surfaced when loading configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path:?}: {source}")]
    Read {
        #[source]
        source: std::io::Error,
        path: PathBuf,
    },
    #[error("failed to parse config {path:?}: {source}")]
    Parse {
        #[source]
        source: serde_yaml::Error,
        path: PathBuf,
    },
    #[error("failed to parse properties {path:?}: {source}")]
    Properties {
        path: PathBuf,
        #[source]
        source: PropertiesError,
    },
    #[error("invalid configuration in {path:?}: {source}")]
    Invalid {
        path: PathBuf,
        #[source]
        source: ValidationError,
    },
}

impl ConfigError {
    pub fn path(&self) -> &Path {
        match self {
            ConfigError::Read { path, .. }
            | ConfigError::Parse { path, .. }
            | ConfigError::Properties { path, .. }
            | ConfigError::Invalid { path, .. } => path.as_path(),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PropertiesError {
    #[error("line {line}: expected key=value, got {text:?}")]
    Syntax { line: usize, text: String },
    #[error("line {line}: bad value for {key}: {message}")]
    Value {
        key: String,
        line: usize,
        message: String,
    },
}

/// Validation failures captured with contextual metadata.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field}: {message}")]
    InvalidField { field: String, message: String },
}
