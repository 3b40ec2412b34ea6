/// One example "starter agent" shown in the empty state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExamplePrompt {
    /// Agent name, shown as the card title
    pub name: &'static str,
    /// Goal text passed to the run callback
    pub goal: &'static str,
}

/// System message shown above the example prompts when there are no tasks
pub const EMPTY_STATE_MESSAGE: &str = "👉 Create an agent by adding a name and a goal, and hitting deploy!";

/// The fixed set of example prompts offered in the empty state
pub const EXAMPLE_PROMPTS: &[ExamplePrompt] = &[
    ExamplePrompt { name: "PlatformerGPT 🎮", goal: "Write some code to make a platformer game." },
    ExamplePrompt { name: "TravelGPT 🌴", goal: "Plan a detailed trip to Hawaii." },
    ExamplePrompt { name: "ResearchGPT 📜", goal: "Create a comprehensive report of the Nike company" },
];

/// Selection cursor over the example prompts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PromptSelection {
    selected: usize,
}

impl PromptSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of the selected prompt
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Move the selection forward, wrapping
    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1) % EXAMPLE_PROMPTS.len();
    }

    /// Move the selection backward, wrapping
    pub fn select_prev(&mut self) {
        let len = EXAMPLE_PROMPTS.len();
        self.selected = (self.selected + len - 1) % len;
    }

    /// The selected prompt
    pub fn current(&self) -> &'static ExamplePrompt {
        &EXAMPLE_PROMPTS[self.selected]
    }
}
