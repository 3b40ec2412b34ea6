use serde::{Deserialize, Serialize};

/// Lifecycle status of a task, derived by the agent engine
///
/// The transcript panel never computes this; it only reads it to decide
/// whether an entry is rendered. Entries in `Executing` are hidden until
/// the engine promotes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    /// Task has been queued by the engine (default for fresh entries)
    #[default]
    Started,
    /// Task is currently being executed; hidden from the transcript
    Executing,
    /// Task finished and produced output
    Completed,
    /// Terminal summary task closing out a run
    Final,
}

impl TaskStatus {
    pub const VALUES: &[TaskStatus] = &[
        TaskStatus::Started,
        TaskStatus::Executing,
        TaskStatus::Completed,
        TaskStatus::Final,
    ];

    /// Parse a status from a string.
    pub fn parse_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "started" => Some(TaskStatus::Started),
            "executing" => Some(TaskStatus::Executing),
            "completed" => Some(TaskStatus::Completed),
            "final" => Some(TaskStatus::Final),
            _ => None,
        }
    }

    /// Get the string representation of this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Started => "started",
            TaskStatus::Executing => "executing",
            TaskStatus::Completed => "completed",
            TaskStatus::Final => "final",
        }
    }
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for TaskStatus {
    type Err = crate::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        TaskStatus::parse_str(s).ok_or_else(|| crate::Error::Parse(format!("invalid task status: {}", s)))
    }
}

/// One agent-produced task record displayed as a transcript row
///
/// Entries are created and mutated entirely by the agent engine; the panel
/// reads a snapshot sequence and never writes back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskEntry {
    /// Identifier assigned by the engine
    pub id: String,
    /// Input text (the goal the task works toward)
    pub input: String,
    /// Output text produced so far (may be empty)
    #[serde(default)]
    pub output: String,
    /// Derived lifecycle status
    #[serde(default)]
    pub status: TaskStatus,
}

impl TaskEntry {
    /// Create a new entry in the default (started) status
    pub fn new(id: impl Into<String>, input: impl Into<String>) -> Self {
        Self { id: id.into(), input: input.into(), output: String::new(), status: TaskStatus::default() }
    }

    /// Set the output text
    pub fn with_output(mut self, output: impl Into<String>) -> Self {
        self.output = output.into();
        self
    }

    /// Set the derived status
    pub fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }

    /// Whether this entry appears in the rendered transcript
    pub fn is_visible(&self) -> bool {
        self.status != TaskStatus::Executing
    }
}
