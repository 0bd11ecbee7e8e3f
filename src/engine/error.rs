use std::fmt;
use tokio::task::JoinError;

#[derive(Debug)]
pub enum ComputeError {
    /// `task` names the unit of work, e.g. `suffix task for "abc"`.
    TaskPanicked { task: String },
    TaskCancelled { task: String },
}

impl ComputeError {
    pub fn from_join(err: JoinError, task: impl Into<String>) -> Self {
        if err.is_panic() {
            ComputeError::TaskPanicked { task: task.into() }
        } else {
            ComputeError::TaskCancelled { task: task.into() }
        }
    }
}

impl fmt::Display for ComputeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComputeError::TaskPanicked { task } =>
                write!(f, "{} panicked", task),
            ComputeError::TaskCancelled { task } =>
                write!(f, "{} was cancelled", task),
        }
    }
}

impl std::error::Error for ComputeError {}
