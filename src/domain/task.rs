use serde::{Deserialize, Serialize};

use super::schema::{Draft, ListItem};

/// Entry in the personal task list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub title: String,
    /// Pending while `true`.
    pub state: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskDraft {
    pub title: String,
}

impl TaskDraft {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

impl Draft for TaskDraft {
    fn fields(&self) -> Vec<(&'static str, &str)> {
        vec![("title", self.title.as_str())]
    }
}

impl ListItem for Task {
    type Draft = TaskDraft;

    const STORE_KEY: &'static str = "tasks";
    const LABEL: &'static str = "task";

    fn id(&self) -> &str {
        &self.id
    }

    fn state(&self) -> bool {
        self.state
    }

    fn set_state(&mut self, state: bool) {
        self.state = state;
    }

    fn from_draft(id: String, draft: &TaskDraft) -> Self {
        Self {
            id,
            title: draft.title.trim().to_string(),
            state: true,
        }
    }

    fn to_draft(&self) -> TaskDraft {
        TaskDraft::new(self.title.clone())
    }
}
