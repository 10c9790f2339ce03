use std::collections::HashSet;
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::{next_id, validate, Draft, ListItem, DEFAULT_MIN_LENGTH, MIN_LENGTH_FLOOR};
use crate::list::{EditSession, ListError};
use crate::store::{Store, StoreError};

/// Owns one ordered list of items and mirrors it to a [`Store`].
///
/// Every mutation applies to memory first and then awaits its own write, so
/// writes reach the store in the order the mutations happened. Store failures
/// never fail a mutation; the latest one is kept in
/// [`last_store_error`](Self::last_store_error) for the caller to surface.
pub struct ItemListManager<T: ListItem> {
    store: Arc<dyn Store>,
    key: String,
    min_length: usize,
    items: Vec<T>,
    loaded: bool,
    session: EditSession,
    draft: T::Draft,
    last_store_error: Option<StoreError>,
}

impl<T: ListItem> ItemListManager<T> {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self::with_key(store, T::STORE_KEY)
    }

    pub fn with_key(store: Arc<dyn Store>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
            min_length: DEFAULT_MIN_LENGTH,
            items: Vec::new(),
            loaded: false,
            session: EditSession::Idle,
            draft: T::Draft::default(),
            last_store_error: None,
        }
    }

    /// Values below [`MIN_LENGTH_FLOOR`] are raised to it.
    pub fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_length = min_length.max(MIN_LENGTH_FLOOR);
        self
    }

    /// Load the stored collection. Runs once per manager.
    ///
    /// A missing value, a failed read and unparseable data all start the list
    /// empty. Returns the number of items loaded.
    pub async fn initialize(&mut self) -> Result<usize, ListError> {
        if self.loaded {
            return Err(ListError::AlreadyLoaded);
        }

        self.items = match self.store.get(&self.key).await {
            Ok(Some(raw)) if !raw.trim().is_empty() => match serde_json::from_str::<Vec<T>>(&raw) {
                Ok(items) => dedup_by_id(items),
                Err(e) => {
                    warn!("Discarding unreadable {} list under {:?}: {}", T::LABEL, self.key, e);
                    Vec::new()
                }
            },
            Ok(_) => {
                debug!("No stored {} list under {:?}", T::LABEL, self.key);
                Vec::new()
            }
            Err(e) => {
                warn!("Failed to load {} list under {:?}: {}", T::LABEL, self.key, e);
                Vec::new()
            }
        };
        self.loaded = true;

        debug!("Loaded {} {} item(s)", self.items.len(), T::LABEL);
        Ok(self.items.len())
    }

    /// Validate the draft and append it as a new pending item.
    pub async fn add(&mut self) -> Result<T, ListError> {
        self.ensure_loaded()?;
        if self.session.is_active() {
            return Err(ListError::EditInProgress);
        }
        validate(&self.draft, self.min_length)?;

        let item = T::from_draft(self.fresh_id(), &self.draft);
        self.items.push(item.clone());
        self.draft.clear();
        info!("Added {} {}", T::LABEL, item.id());

        self.persist().await;
        Ok(item)
    }

    /// Load the item into the draft and start editing it.
    ///
    /// Returns `false` and changes nothing if `id` is unknown.
    pub fn start_edit(&mut self, id: &str) -> bool {
        let Some(item) = self.get(id) else {
            debug!("Ignoring edit of unknown {} {}", T::LABEL, id);
            return false;
        };

        self.draft = item.to_draft();
        self.session = EditSession::Editing {
            target_id: id.to_string(),
        };
        true
    }

    /// Validate the draft and write it over the item being edited.
    ///
    /// The item keeps its id, state and position. On a validation error the
    /// session stays open so the draft can be corrected.
    pub async fn commit_edit(&mut self) -> Result<T, ListError> {
        self.ensure_loaded()?;
        let target_id = match &self.session {
            EditSession::Editing { target_id } => target_id.clone(),
            EditSession::Idle => return Err(ListError::NotEditing),
        };
        validate(&self.draft, self.min_length)?;

        let Some(pos) = self.position(&target_id) else {
            self.cancel_edit();
            return Err(ListError::NotFound(target_id));
        };

        let updated = self.items[pos].apply_draft(&self.draft);
        self.items[pos] = updated.clone();
        self.draft.clear();
        self.session = EditSession::Idle;
        info!("Updated {} {}", T::LABEL, target_id);

        self.persist().await;
        Ok(updated)
    }

    /// Drop the draft and leave editing mode.
    pub fn cancel_edit(&mut self) {
        self.draft.clear();
        self.session = EditSession::Idle;
    }

    /// Route a form submission to [`commit_edit`](Self::commit_edit) or
    /// [`add`](Self::add) depending on the session.
    pub async fn submit(&mut self) -> Result<T, ListError> {
        if self.session.is_active() {
            self.commit_edit().await
        } else {
            self.add().await
        }
    }

    /// Flip the item's state. Returns the new state, `None` if `id` is unknown.
    pub async fn toggle(&mut self, id: &str) -> Result<Option<bool>, ListError> {
        self.ensure_loaded()?;
        let Some(pos) = self.position(id) else {
            return Ok(None);
        };

        let item = &mut self.items[pos];
        let state = !item.state();
        item.set_state(state);
        info!("Toggled {} {} (pending: {})", T::LABEL, id, state);

        self.persist().await;
        Ok(Some(state))
    }

    /// Delete the item, cancelling the edit session if it targeted it.
    pub async fn remove(&mut self, id: &str) -> Result<Option<T>, ListError> {
        self.ensure_loaded()?;
        let Some(pos) = self.position(id) else {
            return Ok(None);
        };

        let removed = self.items.remove(pos);
        if self.session.is_editing(id) {
            self.cancel_edit();
        }
        info!("Removed {} {}", T::LABEL, id);

        self.persist().await;
        Ok(Some(removed))
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn pending_count(&self) -> usize {
        self.items.iter().filter(|item| item.state()).count()
    }

    pub fn completed_count(&self) -> usize {
        self.items.len() - self.pending_count()
    }

    pub fn session(&self) -> &EditSession {
        &self.session
    }

    pub fn draft(&self) -> &T::Draft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut T::Draft {
        &mut self.draft
    }

    pub fn set_draft(&mut self, draft: T::Draft) {
        self.draft = draft;
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn min_length(&self) -> usize {
        self.min_length
    }

    /// Most recent failed write, cleared by the next successful one.
    pub fn last_store_error(&self) -> Option<&StoreError> {
        self.last_store_error.as_ref()
    }

    pub fn take_store_error(&mut self) -> Option<StoreError> {
        self.last_store_error.take()
    }

    fn ensure_loaded(&self) -> Result<(), ListError> {
        if self.loaded {
            Ok(())
        } else {
            Err(ListError::NotLoaded)
        }
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|item| item.id() == id)
    }

    fn fresh_id(&self) -> String {
        loop {
            let id = next_id();
            if self.position(&id).is_none() {
                return id;
            }
        }
    }

    async fn persist(&mut self) {
        let json = match serde_json::to_string(&self.items) {
            Ok(json) => json,
            Err(e) => {
                warn!("Failed to serialize {} list: {}", T::LABEL, e);
                return;
            }
        };

        match self.store.set(&self.key, &json).await {
            Ok(()) => {
                debug!("Saved {} {} item(s) under {:?}", self.items.len(), T::LABEL, self.key);
                self.last_store_error = None;
            }
            Err(e) => {
                warn!("Failed to save {} list under {:?}: {}", T::LABEL, self.key, e);
                self.last_store_error = Some(e);
            }
        }
    }
}

fn dedup_by_id<T: ListItem>(items: Vec<T>) -> Vec<T> {
    let mut seen = HashSet::new();
    let total = items.len();
    let unique: Vec<T> = items
        .into_iter()
        .filter(|item| seen.insert(item.id().to_string()))
        .collect();
    if unique.len() != total {
        warn!(
            "Dropped {} {} item(s) with duplicate ids",
            total - unique.len(),
            T::LABEL
        );
    }
    unique
}
