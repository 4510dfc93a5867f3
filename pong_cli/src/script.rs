//! Scripted input: key edges and menu confirms pinned to frame numbers

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScriptEvent {
    KeyDown { key: String },
    KeyUp { key: String },
    Confirm,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptedInput {
    pub frame: u32,
    #[serde(flatten)]
    pub event: ScriptEvent,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputScript {
    pub inputs: Vec<ScriptedInput>,
}

impl InputScript {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read script {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("invalid script {}", path.display()))
    }

    pub fn parse(text: &str) -> Result<Self> {
        let mut script: Self = serde_json::from_str(text)?;
        // Stable: inputs on the same frame keep their file order
        script.inputs.sort_by_key(|input| input.frame);
        Ok(script)
    }

    /// Press confirm, then serve every few seconds; enough to watch random rallies
    pub fn autoserve(frames: u32) -> Self {
        let mut inputs = vec![ScriptedInput {
            frame: 0,
            event: ScriptEvent::Confirm,
        }];
        for frame in (30..frames).step_by(240) {
            inputs.push(ScriptedInput {
                frame,
                event: ScriptEvent::KeyDown {
                    key: "Space".into(),
                },
            });
            inputs.push(ScriptedInput {
                frame: frame + 1,
                event: ScriptEvent::KeyUp {
                    key: "Space".into(),
                },
            });
        }
        Self { inputs }
    }

    pub fn last_frame(&self) -> u32 {
        self.inputs.last().map(|input| input.frame).unwrap_or(0)
    }

    /// Inputs scheduled for `frame`, assuming frames are visited in order
    pub fn at_frame(&self, frame: u32) -> impl Iterator<Item = &ScriptEvent> {
        let start = self.inputs.partition_point(|input| input.frame < frame);
        self.inputs[start..]
            .iter()
            .take_while(move |input| input.frame == frame)
            .map(|input| &input.event)
    }
}
