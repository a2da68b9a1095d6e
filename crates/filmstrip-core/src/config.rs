use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilmstripConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub carousel: CarouselConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Data directory path (log file lives here)
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            log_level: default_log_level(),
        }
    }
}

/// Behavior of the looping carousel itself
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarouselConfig {
    /// Autoplay period in milliseconds
    #[serde(default = "default_autoplay_interval")]
    pub autoplay_interval_ms: u64,
    /// Quiescence window after the last scroll event before the strip is "settled"
    #[serde(default = "default_settle")]
    pub settle_ms: u64,
    /// Containers with fewer children stay inert
    #[serde(default = "default_min_items")]
    pub min_items: usize,
    /// Disables autoplay and keyboard stepping; loop correction stays active
    #[serde(default)]
    pub reduced_motion: bool,
    #[serde(default)]
    pub focus: FocusConfig,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            autoplay_interval_ms: default_autoplay_interval(),
            settle_ms: default_settle(),
            min_items: default_min_items(),
            reduced_motion: false,
            focus: FocusConfig::default(),
        }
    }
}

impl CarouselConfig {
    pub fn autoplay_interval(&self) -> Duration {
        Duration::from_millis(self.autoplay_interval_ms)
    }

    pub fn settle_window(&self) -> Duration {
        Duration::from_millis(self.settle_ms)
    }
}

/// Shape of the attention falloff around the viewport center
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FocusConfig {
    /// Falloff radius as a fraction of the viewport width
    #[serde(default = "default_radius_fraction")]
    pub radius_fraction: f64,
    /// Lower bound for the falloff radius, in pixels
    #[serde(default = "default_min_radius")]
    pub min_radius: f64,
    /// Scale of the centered item
    #[serde(default = "default_peak_scale")]
    pub peak_scale: f64,
    /// Scale lost at the edge of the falloff radius
    #[serde(default = "default_scale_falloff")]
    pub scale_falloff: f64,
    /// Opacity lost at the edge of the falloff radius
    #[serde(default = "default_opacity_falloff")]
    pub opacity_falloff: f64,
}

impl Default for FocusConfig {
    fn default() -> Self {
        Self {
            radius_fraction: default_radius_fraction(),
            min_radius: default_min_radius(),
            peak_scale: default_peak_scale(),
            scale_falloff: default_scale_falloff(),
            opacity_falloff: default_opacity_falloff(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Tick rate in milliseconds
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Virtual pixels per terminal column
    #[serde(default = "default_cell_width")]
    pub cell_width_px: u16,
    /// Item width in virtual pixels
    #[serde(default = "default_item_width")]
    pub item_width_px: u32,
    /// Gap between items in virtual pixels
    #[serde(default = "default_item_gap")]
    pub item_gap_px: u32,
    /// Item height in terminal rows at peak scale
    #[serde(default = "default_item_height")]
    pub item_height: u16,
    #[serde(default)]
    pub scroll: ScrollConfig,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            cell_width_px: default_cell_width(),
            item_width_px: default_item_width(),
            item_gap_px: default_item_gap(),
            item_height: default_item_height(),
            scroll: ScrollConfig::default(),
        }
    }
}

/// Easing curve for animated scrolling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EasingType {
    None,
    Linear,
    #[default]
    Cubic,
    Quintic,
    EaseOut,
    EaseInOut,
}

/// Smooth scrolling configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrollConfig {
    #[serde(default = "default_true")]
    pub smooth_enabled: bool,
    #[serde(default = "default_animation_duration")]
    pub animation_duration_ms: u64,
    #[serde(default)]
    pub easing: EasingType,
    #[serde(default = "default_animation_fps")]
    pub animation_fps: u32,
    /// Distance moved by one wheel notch or h/l press, in virtual pixels
    #[serde(default = "default_wheel_step")]
    pub wheel_step_px: u32,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            smooth_enabled: default_true(),
            animation_duration_ms: default_animation_duration(),
            easing: EasingType::default(),
            animation_fps: default_animation_fps(),
            wheel_step_px: default_wheel_step(),
        }
    }
}

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("filmstrip")
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_autoplay_interval() -> u64 {
    3200
}

fn default_settle() -> u64 {
    140
}

fn default_min_items() -> usize {
    3
}

fn default_radius_fraction() -> f64 {
    0.35
}

fn default_min_radius() -> f64 {
    220.0
}

fn default_peak_scale() -> f64 {
    1.04
}

fn default_scale_falloff() -> f64 {
    0.16
}

fn default_opacity_falloff() -> f64 {
    0.35
}

fn default_tick_rate() -> u64 {
    16
}

fn default_cell_width() -> u16 {
    8
}

fn default_item_width() -> u32 {
    192
}

fn default_item_gap() -> u32 {
    16
}

fn default_item_height() -> u16 {
    9
}

fn default_animation_duration() -> u64 {
    450
}

fn default_animation_fps() -> u32 {
    60
}

fn default_wheel_step() -> u32 {
    48
}

/// Expand tilde (~) in path to user's home directory
fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(path_str) = path.to_str() {
        if let Some(stripped) = path_str.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(stripped);
            }
        } else if path_str == "~" {
            if let Some(home) = dirs::home_dir() {
                return home;
            }
        }
    }
    path.to_path_buf()
}

impl FilmstripConfig {
    /// Load configuration from the default location or return defaults
    pub fn load() -> crate::Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from an explicit path or return defaults if it is missing
    pub fn load_from(path: &Path) -> crate::Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Self = toml::from_str(&content)?;
            config.validate()?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to the default location
    pub fn save(&self) -> crate::Result<PathBuf> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;

        Ok(config_path)
    }

    /// Get the configuration file path
    /// Always uses ~/.config/filmstrip/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("filmstrip")
            .join("config.toml")
    }

    /// Get the data directory (with tilde expansion)
    pub fn data_dir(&self) -> PathBuf {
        expand_tilde(&self.general.data_dir)
    }

    /// Get the log file path
    pub fn log_path(&self) -> PathBuf {
        self.data_dir().join("filmstrip.log")
    }

    fn validate(&self) -> crate::Result<()> {
        if self.carousel.min_items < 3 {
            return Err(crate::Error::Config(format!(
                "carousel.min_items must be at least 3, got {}",
                self.carousel.min_items
            )));
        }
        if self.carousel.autoplay_interval_ms == 0 {
            return Err(crate::Error::Config(
                "carousel.autoplay_interval_ms must be positive".to_string(),
            ));
        }
        if self.carousel.settle_ms == 0 {
            return Err(crate::Error::Config(
                "carousel.settle_ms must be positive".to_string(),
            ));
        }
        if self.ui.cell_width_px == 0 {
            return Err(crate::Error::Config(
                "ui.cell_width_px must be positive".to_string(),
            ));
        }
        let focus = &self.carousel.focus;
        if !(focus.radius_fraction > 0.0 && focus.min_radius > 0.0) {
            return Err(crate::Error::Config(
                "carousel.focus radius values must be positive".to_string(),
            ));
        }
        Ok(())
    }
}
