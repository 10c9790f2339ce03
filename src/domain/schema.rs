use std::fmt::Debug;

use serde::de::DeserializeOwned;
use serde::Serialize;

/// Scratch fields bound to the add/edit form of one list.
pub trait Draft: Clone + Debug + Default + PartialEq + Send + Sync {
    /// Required fields as `(name, raw value)` pairs, in form order.
    fn fields(&self) -> Vec<(&'static str, &str)>;

    fn clear(&mut self) {
        *self = Self::default();
    }

    fn is_blank(&self) -> bool {
        self.fields().iter().all(|(_, value)| value.trim().is_empty())
    }
}

/// Item schema for one list variant.
///
/// The serialized form of an implementor is the persisted record shape, so
/// field names must not change.
pub trait ListItem: Clone + Debug + PartialEq + Serialize + DeserializeOwned + Send + Sync {
    type Draft: Draft;

    /// Key the collection is stored under.
    const STORE_KEY: &'static str;

    /// Singular noun used in log lines and CLI output.
    const LABEL: &'static str;

    fn id(&self) -> &str;

    /// `true` while the item is pending, `false` once completed.
    fn state(&self) -> bool;

    fn set_state(&mut self, state: bool);

    /// Build a fresh pending item from a validated draft, trimming every field.
    fn from_draft(id: String, draft: &Self::Draft) -> Self;

    fn to_draft(&self) -> Self::Draft;

    /// Replace the editable fields, keeping `id` and `state`.
    fn apply_draft(&self, draft: &Self::Draft) -> Self {
        let mut updated = Self::from_draft(self.id().to_string(), draft);
        updated.set_state(self.state());
        updated
    }

    fn is_completed(&self) -> bool {
        !self.state()
    }
}
