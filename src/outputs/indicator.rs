use serde::{Deserialize, Serialize};
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LightState {
    On,
    Off,
    Blink,
}

/// Indicator-light actuator.
#[allow(async_fn_in_trait)]
pub trait Indicator {
    async fn set_state(&mut self, state: LightState) -> anyhow::Result<()>;
}

/// Reports light changes on the log instead of driving hardware.
#[derive(Debug, Default)]
pub struct ConsoleIndicator {
    state: Option<LightState>,
}

impl ConsoleIndicator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> Option<LightState> {
        self.state
    }
}

impl Indicator for ConsoleIndicator {
    async fn set_state(&mut self, state: LightState) -> anyhow::Result<()> {
        info!("[LIGHT] {:?} -> {:?}", self.state, state);
        self.state = Some(state);
        Ok(())
    }
}
