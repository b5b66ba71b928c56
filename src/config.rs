use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use densglobe_grid::{BaseSpec, CompareOp, DerivedSpec, HueRange};
use densglobe_mesh_cpu::BoxStyle;
use densglobe_runtime::Ease;
use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Datasets read from grid files, in blend-slot order.
    pub datasets: Vec<BaseSpec>,
    /// Datasets computed from earlier ones, appended after `datasets`.
    pub derived: Vec<DerivedSpec>,
    pub boxes: BoxStyle,
    pub crossfade: CrossfadeConfig,
    pub window: WindowConfig,
    pub camera: CameraConfig,
    pub globe: GlobeConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            datasets: vec![
                BaseSpec {
                    name: "men".into(),
                    hue_range: HueRange::new(0.7, 0.3),
                    path: PathBuf::from("data/male.asc"),
                },
                BaseSpec {
                    name: "women".into(),
                    hue_range: HueRange::new(0.9, 1.1),
                    path: PathBuf::from("data/female.asc"),
                },
            ],
            derived: vec![
                DerivedSpec {
                    name: ">50% men".into(),
                    hue_range: HueRange::new(0.6, 1.1),
                    base: "men".into(),
                    other: "women".into(),
                    op: CompareOp::Excess,
                },
                DerivedSpec {
                    name: ">50% women".into(),
                    hue_range: HueRange::new(0.0, 0.4),
                    base: "women".into(),
                    other: "men".into(),
                    op: CompareOp::Excess,
                },
            ],
            boxes: BoxStyle::default(),
            crossfade: CrossfadeConfig::default(),
            window: WindowConfig::default(),
            camera: CameraConfig::default(),
            globe: GlobeConfig::default(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct CrossfadeConfig {
    /// Seconds.
    pub duration: f32,
    pub ease: Ease,
}

impl Default for CrossfadeConfig {
    fn default() -> Self {
        Self {
            duration: 0.1,
            ease: Ease::QuadOut,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: i32,
    pub height: i32,
    pub title: String,
    /// RGB.
    pub background: [u8; 3],
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 450,
            title: "Density Globe".into(),
            background: [0, 0, 0],
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub fov_deg: f32,
    pub near: f32,
    pub far: f32,
    pub distance: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    pub damping: bool,
    /// Fraction of the pending rotation applied per 60 Hz frame.
    pub damping_factor: f32,
    /// Radians per pixel of drag.
    pub rotate_speed: f32,
    /// Distance scale per wheel notch.
    pub zoom_step: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_deg: 60.0,
            near: 0.1,
            far: 10.0,
            distance: 2.5,
            min_distance: 1.2,
            max_distance: 4.0,
            damping: true,
            damping_factor: 0.05,
            rotate_speed: 0.005,
            zoom_step: 0.95,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct GlobeConfig {
    pub texture: Option<PathBuf>,
    pub radius: f32,
    pub rings: i32,
    pub slices: i32,
    /// Yaw (degrees) aligning the texture seam with the box placement.
    pub texture_yaw_deg: f32,
}

impl Default for GlobeConfig {
    fn default() -> Self {
        Self {
            texture: Some(PathBuf::from("resources/world.jpg")),
            radius: 1.0,
            rings: 32,
            slices: 64,
            texture_yaw_deg: -90.0,
        }
    }
}

impl AppConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, Box<dyn Error>> {
        let cfg: AppConfig = toml::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), Box<dyn Error>> {
        if self.datasets.is_empty() {
            return Err("config lists no datasets".into());
        }
        let total = self.datasets.len() + self.derived.len();
        if total > densglobe_mesh_cpu::MAX_MORPH_TARGETS {
            return Err(format!(
                "{} datasets configured, at most {} can be blended",
                total,
                densglobe_mesh_cpu::MAX_MORPH_TARGETS
            )
            .into());
        }
        let mut known: Vec<&str> = self.datasets.iter().map(|d| d.name.as_str()).collect();
        for d in &self.derived {
            for referenced in [&d.base, &d.other] {
                if !known.contains(&referenced.as_str()) {
                    return Err(format!(
                        "derived dataset {:?} refers to {:?}, which is not declared before it",
                        d.name, referenced
                    )
                    .into());
                }
            }
            known.push(d.name.as_str());
        }
        let cam = &self.camera;
        if !(cam.min_distance > 0.0 && cam.min_distance <= cam.max_distance) {
            return Err(format!(
                "camera distance bounds [{}, {}] are invalid",
                cam.min_distance, cam.max_distance
            )
            .into());
        }
        if !(self.crossfade.duration >= 0.0) {
            return Err("crossfade duration must be non-negative".into());
        }
        Ok(())
    }

    /// Names of every displayable dataset in blend-slot order.
    pub fn dataset_names(&self) -> Vec<String> {
        self.datasets
            .iter()
            .map(|d| d.name.clone())
            .chain(self.derived.iter().map(|d| d.name.clone()))
            .collect()
    }
}

pub fn load_config_from_path(path: &Path) -> Result<AppConfig, Box<dyn Error>> {
    let s = fs::read_to_string(path)?;
    AppConfig::from_toml_str(&s)
}

/// Directory relative data and texture paths resolve against: the explicit
/// assets root, else the config file's directory, else the working directory.
pub fn resolve_root(assets: Option<&Path>, config: Option<&Path>) -> PathBuf {
    if let Some(a) = assets {
        return a.to_path_buf();
    }
    config
        .and_then(Path::parent)
        .filter(|p| !p.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."))
}
