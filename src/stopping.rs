use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StopError {
    #[error("unknown early stopping mode: {0}")]
    InvalidMode(String),
}

/// Direction in which the monitored metric improves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Min,
    Max,
}

impl Mode {
    fn is_better(self, metric: f32, best: f32, min_delta: f32) -> bool {
        match self {
            Mode::Min => metric < best - min_delta,
            Mode::Max => metric > best + min_delta,
        }
    }
}

impl FromStr for Mode {
    type Err = StopError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "min" => Ok(Mode::Min),
            "max" => Ok(Mode::Max),
            other => Err(StopError::InvalidMode(other.to_string())),
        }
    }
}

/// Patience-based early stopping monitor.
///
/// Fed one validation metric per epoch via [`step`](Self::step), which
/// reports whether training should stop. A NaN metric means the run has
/// diverged and stops immediately.
pub struct EarlyStopping {
    mode: Mode,
    min_delta: f32,
    patience: u64,
    best: Option<f32>,
    bad_epochs: u64,
}

impl EarlyStopping {
    pub fn new(mode: Mode, min_delta: f32, patience: u64) -> Self {
        Self {
            mode,
            min_delta,
            patience,
            best: None,
            bad_epochs: 0,
        }
    }

    /// Record one observation. Returns true when training should stop.
    pub fn step(&mut self, metric: f32) -> bool {
        if metric.is_nan() {
            return true;
        }

        let best = match self.best {
            Some(best) => best,
            None => {
                self.best = Some(metric);
                return false;
            }
        };

        // Zero patience tolerates nothing: every observation past the
        // first stops, improved or not.
        let improved = self.patience != 0 && self.mode.is_better(metric, best, self.min_delta);

        if improved {
            self.best = Some(metric);
            self.bad_epochs = 0;
            false
        } else {
            self.bad_epochs += 1;
            self.bad_epochs >= self.patience
        }
    }

    /// Best metric seen so far, if any observation has arrived.
    pub fn best(&self) -> Option<f32> {
        self.best
    }
}

impl Default for EarlyStopping {
    fn default() -> Self {
        Self::new(Mode::Min, 0.0, 10)
    }
}
