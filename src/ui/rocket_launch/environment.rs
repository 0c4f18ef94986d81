//! Runs the launch screen's effects.

use futures::stream::BoxStream;
use futures::StreamExt;

use crate::motion::MotionHandle;
use crate::ui::mvi::Executor;

use super::action::{pitch_action, RocketLaunchAction, RocketLaunchTask};

/// Dependencies of the launch screen, passed in explicitly.
#[derive(Clone)]
pub struct RocketLaunchEnvironment {
    motion: MotionHandle,
}

impl RocketLaunchEnvironment {
    pub fn new(motion: MotionHandle) -> Self {
        Self { motion }
    }
}

impl Executor<RocketLaunchTask, RocketLaunchAction> for RocketLaunchEnvironment {
    fn execute(&self, task: RocketLaunchTask) -> BoxStream<'static, RocketLaunchAction> {
        match task {
            RocketLaunchTask::MotionUpdates => self.motion.subscribe().map(pitch_action).boxed(),
        }
    }
}
