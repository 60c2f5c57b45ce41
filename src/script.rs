//! Scripted input playback for headless runs.
//!
//! A script is a JSON list of timed steps. Each step's inputs are
//! applied once when the step begins; the step then holds for its
//! duration before the next one fires.

use gazecast_gaze::OrientationSample;
use serde::Deserialize;
use std::{fs, path::Path};

#[derive(Debug, Deserialize)]
struct ScriptFile {
    steps: Vec<ScriptStep>,
}

/// One scripted input step.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ScriptStep {
    /// How long to hold after applying this step's inputs.
    pub duration_ms: f64,
    /// Pointer-drag delta to apply, pixels.
    #[serde(default)]
    pub drag_dx: f64,
    /// Pointer-drag delta to apply, pixels.
    #[serde(default)]
    pub drag_dy: f64,
    /// Device-orientation sample to feed, if any.
    #[serde(default)]
    pub orientation: Option<OrientationSample>,
}

/// Replays script steps against simulated frame time.
pub struct ScriptedInputPlayer {
    steps: Vec<ScriptStep>,
    index: usize,
    time_in_step: f64,
    started: bool,
}

impl ScriptedInputPlayer {
    pub fn from_path(path: &Path) -> anyhow::Result<Self> {
        let contents = fs::read_to_string(path)?;
        let file: ScriptFile = serde_json::from_str(&contents)?;
        if file.steps.is_empty() {
            anyhow::bail!("input script contains no steps");
        }
        Ok(Self::from_steps(file.steps))
    }

    fn from_steps(steps: Vec<ScriptStep>) -> Self {
        Self {
            steps,
            index: 0,
            time_in_step: 0.0,
            started: false,
        }
    }

    /// Advance simulated time and return the steps that began during
    /// this window, in order.
    pub fn advance(&mut self, dt_ms: f64) -> Vec<ScriptStep> {
        let mut fired = Vec::new();
        if !self.started {
            self.started = true;
            if let Some(step) = self.steps.first() {
                fired.push(step.clone());
            }
        }
        self.time_in_step += dt_ms;
        while self.index < self.steps.len() && self.time_in_step >= self.steps[self.index].duration_ms
        {
            self.time_in_step -= self.steps[self.index].duration_ms;
            self.index += 1;
            if let Some(step) = self.steps.get(self.index) {
                fired.push(step.clone());
            }
        }
        fired
    }

    /// Whether every step has been applied and held for its duration.
    pub fn is_finished(&self) -> bool {
        self.index >= self.steps.len()
    }
}
