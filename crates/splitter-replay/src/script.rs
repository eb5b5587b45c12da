// Replay scripts: a layout configuration plus the recorded host input.

use std::error::Error;
use std::path::Path;

use serde::{Deserialize, Serialize};
use splitter_core::{Position, Rect, SplitterProps};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Script {
    #[serde(default)]
    pub props: SplitterProps,
    /// Number of children the host passes to the layout.
    #[serde(default = "default_children")]
    pub children: usize,
    pub container: Rect,
    #[serde(default)]
    pub steps: Vec<Step>,
}

fn default_children() -> usize {
    2
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Step {
    MouseDown { left: f64, top: f64 },
    MouseMove { left: f64, top: f64 },
    MouseUp,
    TouchStart { left: f64, top: f64 },
    TouchMove { touches: Vec<Position> },
    TouchEnd,
    /// The container takes a new size; the window fires `resize`.
    Resize { width: f64, height: f64 },
    /// The host re-renders with a different number of children.
    Children { count: usize },
    Mount,
    Unmount,
}

pub fn parse_script(data: &str) -> Result<Script, Box<dyn Error>> {
    let script: Script = serde_json::from_str(data)?;
    if script.container.width < 0.0 || script.container.height < 0.0 {
        return Err(format!(
            "container has negative extent {}x{}",
            script.container.width, script.container.height
        )
        .into());
    }
    Ok(script)
}

pub fn load_script(path: &Path) -> Result<Script, Box<dyn Error>> {
    let data = std::fs::read_to_string(path)?;
    parse_script(&data).map_err(|e| format!("{}: {}", path.display(), e).into())
}
