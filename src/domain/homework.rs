use serde::{Deserialize, Serialize};

use super::schema::{Draft, ListItem};

/// Entry in the school-homework list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Homework {
    pub id: String,
    pub subject: String,
    pub title: String,
    /// Free-form text; no date parsing is applied.
    pub deadline: String,
    pub state: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HomeworkDraft {
    pub subject: String,
    pub title: String,
    pub deadline: String,
}

impl HomeworkDraft {
    pub fn new(
        subject: impl Into<String>,
        title: impl Into<String>,
        deadline: impl Into<String>,
    ) -> Self {
        Self {
            subject: subject.into(),
            title: title.into(),
            deadline: deadline.into(),
        }
    }
}

impl Draft for HomeworkDraft {
    fn fields(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("subject", self.subject.as_str()),
            ("title", self.title.as_str()),
            ("deadline", self.deadline.as_str()),
        ]
    }
}

impl ListItem for Homework {
    type Draft = HomeworkDraft;

    const STORE_KEY: &'static str = "homeworks";
    const LABEL: &'static str = "homework";

    fn id(&self) -> &str {
        &self.id
    }

    fn state(&self) -> bool {
        self.state
    }

    fn set_state(&mut self, state: bool) {
        self.state = state;
    }

    fn from_draft(id: String, draft: &HomeworkDraft) -> Self {
        Self {
            id,
            subject: draft.subject.trim().to_string(),
            title: draft.title.trim().to_string(),
            deadline: draft.deadline.trim().to_string(),
            state: true,
        }
    }

    fn to_draft(&self) -> HomeworkDraft {
        HomeworkDraft::new(
            self.subject.clone(),
            self.title.clone(),
            self.deadline.clone(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_draft_trims_every_field() {
        let draft = HomeworkDraft::new(" Math ", "\tMath HW", "2024-01-01  ");
        let hw = Homework::from_draft("7".into(), &draft);
        assert_eq!(hw.subject, "Math");
        assert_eq!(hw.title, "Math HW");
        assert_eq!(hw.deadline, "2024-01-01");
        assert!(hw.state);
    }

    #[test]
    fn test_to_draft_prepopulates_all_fields() {
        let hw = Homework {
            id: "7".into(),
            subject: "Physics".into(),
            title: "Lab report".into(),
            deadline: "Friday".into(),
            state: false,
        };
        assert_eq!(
            hw.to_draft(),
            HomeworkDraft::new("Physics", "Lab report", "Friday")
        );
    }

    #[test]
    fn test_record_shape() {
        let json = r#"{"id":"1","subject":"Math","title":"Algebra","deadline":"Monday","state":false}"#;
        let hw: Homework = serde_json::from_str(json).unwrap();
        assert_eq!(hw.subject, "Math");
        assert!(hw.is_completed());
        assert_eq!(serde_json::to_string(&hw).unwrap(), json);
    }
}
