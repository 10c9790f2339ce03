/// Which item, if any, the draft buffer is currently editing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditSession {
    #[default]
    Idle,
    Editing {
        target_id: String,
    },
}

impl EditSession {
    pub fn is_active(&self) -> bool {
        matches!(self, EditSession::Editing { .. })
    }

    pub fn target_id(&self) -> Option<&str> {
        match self {
            EditSession::Editing { target_id } => Some(target_id),
            EditSession::Idle => None,
        }
    }

    pub fn is_editing(&self, id: &str) -> bool {
        self.target_id() == Some(id)
    }
}
