#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    ZeroFrames,
    InvalidFrameCount(String),
    UnknownPolicy(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::ZeroFrames => write!(f, "frame count must be at least 1"),
            ConfigError::InvalidFrameCount(s) => write!(f, "invalid frame count: {}", s),
            ConfigError::UnknownPolicy(name) => write!(f, "unknown policy: {}", name),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimStatus {
    InvalidConfiguration(ConfigError),
    InvalidReference(String),
    EmptyTrace,
}

impl From<ConfigError> for SimStatus {
    fn from(e: ConfigError) -> Self {
        SimStatus::InvalidConfiguration(e)
    }
}

impl std::fmt::Display for SimStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SimStatus::InvalidConfiguration(e) => write!(f, "[SIM] Invalid configuration: {}", e),
            SimStatus::InvalidReference(token) => {
                write!(f, "[SIM] Invalid page reference: {:?}", token)
            }
            SimStatus::EmptyTrace => write!(f, "[SIM] No simulation steps to show"),
        }
    }
}

impl std::error::Error for SimStatus {}
