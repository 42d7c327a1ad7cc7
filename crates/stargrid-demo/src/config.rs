use stargrid_engine::device::GpuInit;
use stargrid_engine::paint::{Color, Stroke};
use stargrid_engine::window::RuntimeConfig;
use winit::dpi::LogicalSize;

use crate::layout::GridShape;
use crate::star::StarStyle;

/// Selects the notifier: `dialog` or `log`.
pub const NOTIFIER_ENV: &str = "STARGRID_NOTIFIER";
/// Overrides the grid shape, as `ROWSxCOLS`.
pub const GRID_ENV: &str = "STARGRID_GRID";

/// Where pointer event reports go.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum NotifierKind {
    /// Modal message box per event.
    Dialog,
    /// Log line per event.
    Log,
}

impl NotifierKind {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dialog" => Some(NotifierKind::Dialog),
            "log" => Some(NotifierKind::Log),
            _ => None,
        }
    }
}

/// Everything the demo window needs, with the classic defaults.
#[derive(Debug, Clone)]
pub struct DemoConfig {
    pub title: String,
    /// Initial client size in logical pixels.
    pub initial_size: (f64, f64),
    pub grid: GridShape,
    pub stroke: Stroke,
    pub clear_color: Color,
    pub star: StarStyle,
    pub notifier: NotifierKind,
    pub gpu: GpuInit,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            title: "Learn to Program Windows".to_string(),
            initial_size: (1000.0, 500.0),
            grid: GridShape::DEFAULT,
            stroke: Stroke::new(1.0, Color::yellow()),
            clear_color: Color::sky_blue(),
            star: StarStyle::default(),
            notifier: NotifierKind::Dialog,
            gpu: GpuInit::default(),
        }
    }
}

impl DemoConfig {
    /// Defaults, with `STARGRID_NOTIFIER` and `STARGRID_GRID` applied when set.
    pub fn from_env() -> Self {
        let notifier = std::env::var(NOTIFIER_ENV).ok();
        let grid = std::env::var(GRID_ENV).ok();
        Self::default().with_overrides(notifier.as_deref(), grid.as_deref())
    }

    /// Unknown values are logged and leave the default in place.
    fn with_overrides(mut self, notifier: Option<&str>, grid: Option<&str>) -> Self {
        if let Some(value) = notifier {
            match NotifierKind::parse(value) {
                Some(kind) => self.notifier = kind,
                None => log::warn!("ignoring {NOTIFIER_ENV}={value:?}: expected dialog or log"),
            }
        }
        if let Some(value) = grid {
            match value.parse::<GridShape>() {
                Ok(shape) => self.grid = shape,
                Err(e) => log::warn!("ignoring {GRID_ENV}: {e}"),
            }
        }
        self
    }

    pub fn runtime_config(&self) -> RuntimeConfig {
        let (w, h) = self.initial_size;
        RuntimeConfig {
            title: self.title.clone(),
            initial_size: LogicalSize::new(w, h),
        }
    }
}
