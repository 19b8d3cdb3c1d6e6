use super::{ScreenId, Size};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Everything a host may say about a bar when creating it. Anything left
/// out is derived from the screen and font metrics.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct BarOptions {
    /// One of `top`, `bottom`, `left` or `right`. Defaults to `top`.
    pub position: Option<String>,
    pub stretch: Option<bool>,
    pub width: Option<Size>,
    pub height: Option<Size>,
    pub screen: Option<ScreenId>,
    pub visible: Option<bool>,
    pub font: Option<String>,
    /// Passed through untouched for the host's own use.
    pub properties: HashMap<String, String>,
}

impl BarOptions {
    #[must_use]
    pub fn at(position: &str) -> Self {
        Self {
            position: Some(position.to_owned()),
            ..Self::default()
        }
    }
}
