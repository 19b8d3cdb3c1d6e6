use serde::{Deserialize, Serialize};
use wibar_core::models::{BBox, BarOptions, Screen, ScreenId};

/// Everything `wibar` reads from its config file.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub font: Option<String>,
    /// Line height of `font`, in pixels.
    pub font_height: u32,
    /// Theme height for top and bottom bars.
    pub bar_height: Option<u32>,
    /// Theme width for left and right bars.
    pub bar_width: Option<u32>,
    pub screens: Vec<Screen>,
    pub bars: Vec<BarOptions>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            font: Some("sans 10".to_string()),
            font_height: 16,
            bar_height: None,
            bar_width: None,
            screens: vec![Screen::new(
                ScreenId(0),
                BBox::new(0, 0, 1920, 1080),
                "eDP-1".to_string(),
            )],
            bars: vec![BarOptions::at("top")],
        }
    }
}

impl wibar_core::Config for Config {
    fn font(&self) -> Option<&str> {
        self.font.as_deref()
    }

    fn font_height(&self) -> u32 {
        self.font_height
    }

    fn bar_height(&self) -> Option<u32> {
        self.bar_height
    }

    fn bar_width(&self) -> Option<u32> {
        self.bar_width
    }

    fn screens(&self) -> Vec<Screen> {
        self.screens.clone()
    }
}
