use crate::error::{Result, SecurityError};
use crate::security::ArmingStatus;
use crate::sensors::{Sensor, SensorType};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Largest accepted camera frame width or height, in pixels.
pub const MAX_FRAME_DIMENSION: u32 = 8192;

/// Load environment variables from .env file with robust parsing.
/// Handles values with spaces without requiring quotes.
pub fn load_dotenv() {
    let env_path = Path::new(".env");
    if !env_path.exists() {
        return;
    }

    let content = match fs::read_to_string(env_path) {
        Ok(c) => c,
        Err(_) => return,
    };

    for (key, value) in parse_dotenv(&content) {
        // Only set if not already set (env vars take precedence)
        if std::env::var(key).is_err() {
            // SAFETY: called from main before the tokio runtime is built
            unsafe { std::env::set_var(key, value) };
        }
    }
}

/// Split .env content into key/value pairs, skipping blanks and comments.
fn parse_dotenv(content: &str) -> Vec<(&str, &str)> {
    let mut pairs = Vec::new();
    for line in content.lines() {
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if let Some(eq_pos) = line.find('=') {
            let key = line[..eq_pos].trim();
            let mut value = line[eq_pos + 1..].trim();

            if value.len() >= 2
                && ((value.starts_with('"') && value.ends_with('"'))
                    || (value.starts_with('\'') && value.ends_with('\'')))
            {
                value = &value[1..value.len() - 1];
            }
            pairs.push((key, value));
        }
    }
    pairs
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub camera: CameraConfig,
    pub simulation: SimulationConfig,
    pub sensors: Vec<SensorConfig>,
    pub initial_arming_status: ArmingStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub capture_interval_secs: u64,
    pub frame_width: u32,
    pub frame_height: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub enabled: bool,
    pub sensor_interval_secs: u64,
    /// Seed for the fake image service and sensor simulation.
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SensorConfig {
    pub name: String,
    pub sensor_type: SensorType,
}

impl SensorConfig {
    pub fn to_sensor(&self) -> Sensor {
        Sensor::new(self.name.clone(), self.sensor_type)
    }
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            capture_interval_secs: 10,
            frame_width: 640,
            frame_height: 480,
        }
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            sensor_interval_secs: 15,
            seed: None,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            camera: CameraConfig::default(),
            simulation: SimulationConfig::default(),
            sensors: vec![
                SensorConfig {
                    name: "Front Door".to_string(),
                    sensor_type: SensorType::Door,
                },
                SensorConfig {
                    name: "Kitchen Window".to_string(),
                    sensor_type: SensorType::Window,
                },
                SensorConfig {
                    name: "Hallway".to_string(),
                    sensor_type: SensorType::Motion,
                },
            ],
            initial_arming_status: ArmingStatus::Disarmed,
        }
    }
}

impl Config {
    /// Default config file location: `<config dir>/home-security-monitor/config.json`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("home-security-monitor").join("config.json"))
    }

    /// Load configuration from a JSON file, falling back to defaults when
    /// the file does not exist, then apply environment overrides.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = path.map(Path::to_path_buf).or_else(Self::default_path);

        let mut config = match path {
            Some(path) if path.exists() => {
                log::debug!("Reading configuration from {}", path.display());
                Self::from_file(&path)?
            }
            _ => Self::default(),
        };

        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Apply `SECURITY_*` overrides looked up through `lookup`.
    /// Values that fail to parse are ignored.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(secs) = lookup("SECURITY_CAMERA_INTERVAL_SECS")
            && let Ok(s) = secs.parse()
        {
            self.camera.capture_interval_secs = s;
        }
        if let Some(enabled) = lookup("SECURITY_SIMULATION_ENABLED")
            && let Ok(e) = enabled.parse()
        {
            self.simulation.enabled = e;
        }
        if let Some(secs) = lookup("SECURITY_SENSOR_INTERVAL_SECS")
            && let Ok(s) = secs.parse()
        {
            self.simulation.sensor_interval_secs = s;
        }
        if let Some(seed) = lookup("SECURITY_SIMULATION_SEED")
            && let Ok(s) = seed.parse()
        {
            self.simulation.seed = Some(s);
        }
        if let Some(status) = lookup("SECURITY_ARMING_STATUS")
            && let Ok(s) = status.parse()
        {
            self.initial_arming_status = s;
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.camera.capture_interval_secs == 0 {
            return Err(SecurityError::InvalidConfig(
                "camera.capture_interval_secs must be positive".to_string(),
            ));
        }
        let (width, height) = (self.camera.frame_width, self.camera.frame_height);
        if !(1..=MAX_FRAME_DIMENSION).contains(&width)
            || !(1..=MAX_FRAME_DIMENSION).contains(&height)
        {
            return Err(SecurityError::InvalidConfig(format!(
                "camera frame size {width}x{height} must be within 1..={MAX_FRAME_DIMENSION}"
            )));
        }
        if self.simulation.sensor_interval_secs == 0 {
            return Err(SecurityError::InvalidConfig(
                "simulation.sensor_interval_secs must be positive".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for sensor in &self.sensors {
            if !seen.insert((sensor.name.as_str(), sensor.sensor_type)) {
                return Err(SecurityError::InvalidConfig(format!(
                    "duplicate sensor {} ({})",
                    sensor.name, sensor.sensor_type
                )));
            }
        }
        Ok(())
    }

    /// Initial sensors, all inactive.
    pub fn initial_sensors(&self) -> Vec<Sensor> {
        self.sensors.iter().map(SensorConfig::to_sensor).collect()
    }
}
