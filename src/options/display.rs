use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::theme::ColorMode;
use crate::viewer::ViewerDisplay;

/// Initial display and theme mode selections.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default, JsonSchema,
)]
#[schemars(title = "Display", inline)]
#[serde(default)]
pub struct DisplayOptions {
    /// Display applied when a structure is loaded.
    #[schemars(title = "Display")]
    pub display: ViewerDisplay,
    /// Coloring mode score themes start in.
    #[schemars(title = "Color Mode")]
    pub color_mode: ColorMode,
}
