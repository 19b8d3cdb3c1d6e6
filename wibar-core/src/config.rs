use crate::models::Screen;

/// Host-provided theme values and screen layout.
pub trait Config {
    /// Font used to size bars that don't specify one.
    fn font(&self) -> Option<&str>;

    /// Line height of the default font, for hosts without real font metrics.
    fn font_height(&self) -> u32;

    /// Theme override for the height of top and bottom bars.
    fn bar_height(&self) -> Option<u32>;

    /// Theme override for the width of left and right bars.
    fn bar_width(&self) -> Option<u32>;

    fn screens(&self) -> Vec<Screen>;
}

#[cfg(test)]
#[allow(clippy::module_name_repetitions)]
pub struct TestConfig {
    pub screens: Vec<Screen>,
    pub font_height: u32,
    pub bar_height: Option<u32>,
    pub bar_width: Option<u32>,
}

#[cfg(test)]
impl Config for TestConfig {
    fn font(&self) -> Option<&str> {
        None
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
