use quiz_core::model::{Entity, Patchable};

use super::state::{ViewError, ViewState};

/// What the user is doing with the loaded collection.
#[derive(Clone, Debug, PartialEq)]
pub enum CollectionMode<T> {
    Browsing,
    Editing(T),
    ConfirmingDelete(T),
}

/// Identifies one fetch. Results carrying an older ticket are dropped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadTicket(u64);

/// Per-page state for a list of entities fetched from the backend.
///
/// Loads move `Idle -> Loading -> Ready | Failed`. While `Ready`, one item at
/// a time can be opened for editing or staged for deletion. Mutations only
/// touch the held collection after the backend accepted them.
#[derive(Clone, Debug, PartialEq)]
pub struct CollectionVm<T: Entity> {
    state: ViewState<Vec<T>>,
    mode: CollectionMode<T>,
    notice: Option<ViewError>,
    generation: u64,
    submitting: bool,
}

impl<T: Entity> Default for CollectionVm<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Entity> CollectionVm<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: ViewState::Idle,
            mode: CollectionMode::Browsing,
            notice: None,
            generation: 0,
            submitting: false,
        }
    }

    #[must_use]
    pub fn state(&self) -> &ViewState<Vec<T>> {
        &self.state
    }

    /// Held items; empty unless the last load succeeded.
    #[must_use]
    pub fn items(&self) -> &[T] {
        match &self.state {
            ViewState::Ready(items) => items,
            _ => &[],
        }
    }

    #[must_use]
    pub fn mode(&self) -> &CollectionMode<T> {
        &self.mode
    }

    #[must_use]
    pub fn editing(&self) -> Option<&T> {
        match &self.mode {
            CollectionMode::Editing(item) => Some(item),
            _ => None,
        }
    }

    #[must_use]
    pub fn pending_delete(&self) -> Option<&T> {
        match &self.mode {
            CollectionMode::ConfirmingDelete(item) => Some(item),
            _ => None,
        }
    }

    /// Last mutation failure, shown alongside the list.
    #[must_use]
    pub fn notice(&self) -> Option<&ViewError> {
        self.notice.as_ref()
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Start a fresh fetch, discarding held data and any open edit.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.state = ViewState::Loading;
        self.mode = CollectionMode::Browsing;
        self.notice = None;
        self.submitting = false;
        self.next_ticket()
    }

    /// Re-fetch while keeping the current items on screen.
    pub fn begin_refresh(&mut self) -> LoadTicket {
        if !matches!(self.state, ViewState::Ready(_)) {
            self.state = ViewState::Loading;
        }
        self.next_ticket()
    }

    /// Apply a fetch result. Returns `false` when a newer load superseded it.
    ///
    /// A failed refresh keeps the items already on screen and reports the
    /// error as a notice instead.
    pub fn finish_load(&mut self, ticket: LoadTicket, result: Result<Vec<T>, ViewError>) -> bool {
        if ticket.0 != self.generation {
            return false;
        }
        match (result, &self.state) {
            (Ok(items), _) => self.state = ViewState::Ready(items),
            (Err(err), ViewState::Ready(_)) => self.notice = Some(err),
            (Err(err), _) => self.state = ViewState::Failed(err),
        }
        true
    }

    pub fn begin_edit(&mut self, id: &T::Id) -> bool {
        match self.find(id) {
            Some(item) if !self.submitting => {
                self.mode = CollectionMode::Editing(item.clone());
                self.notice = None;
                true
            }
            _ => false,
        }
    }

    pub fn begin_delete(&mut self, id: &T::Id) -> bool {
        match self.find(id) {
            Some(item) if !self.submitting => {
                self.mode = CollectionMode::ConfirmingDelete(item.clone());
                self.notice = None;
                true
            }
            _ => false,
        }
    }

    /// Leave an edit or delete confirmation without touching the items.
    pub fn cancel(&mut self) {
        if self.submitting {
            return;
        }
        self.mode = CollectionMode::Browsing;
        self.notice = None;
    }

    /// Mark the open edit or delete as in flight. Returns `false` if there is
    /// nothing to submit or a submission is already running.
    pub fn begin_submit(&mut self) -> bool {
        if self.submitting || matches!(self.mode, CollectionMode::Browsing) {
            return false;
        }
        self.submitting = true;
        true
    }

    /// Surface an error for the open form without leaving it.
    pub fn reject_input(&mut self, err: ViewError) {
        self.submitting = false;
        self.notice = Some(err);
    }

    pub fn delete_succeeded(&mut self, id: &T::Id) {
        if let ViewState::Ready(items) = &mut self.state {
            items.retain(|item| item.id() != id);
        }
        if self.mode_targets(id) {
            self.mode = CollectionMode::Browsing;
        }
        self.submitting = false;
        self.notice = None;
    }

    /// The item stays; the user is told why.
    pub fn delete_failed(&mut self, err: ViewError) {
        self.mode = CollectionMode::Browsing;
        self.submitting = false;
        self.notice = Some(err);
    }

    /// Edit stays open with the user's input intact.
    pub fn edit_failed(&mut self, err: ViewError) {
        self.submitting = false;
        self.notice = Some(err);
    }

    fn find(&self, id: &T::Id) -> Option<&T> {
        self.items().iter().find(|item| item.id() == id)
    }

    fn mode_targets(&self, id: &T::Id) -> bool {
        match &self.mode {
            CollectionMode::Editing(item) | CollectionMode::ConfirmingDelete(item) => {
                item.id() == id
            }
            CollectionMode::Browsing => false,
        }
    }

    fn next_ticket(&mut self) -> LoadTicket {
        self.generation += 1;
        LoadTicket(self.generation)
    }
}

impl<T: Patchable> CollectionVm<T> {
    /// Merge what was sent into the held copy; the backend's reply is not trusted.
    pub fn edit_succeeded(&mut self, id: &T::Id, patch: &T::Patch) {
        if let ViewState::Ready(items) = &mut self.state {
            if let Some(item) = items.iter_mut().find(|item| item.id() == id) {
                item.apply_patch(patch);
            }
        }
        if self.mode_targets(id) {
            self.mode = CollectionMode::Browsing;
        }
        self.submitting = false;
        self.notice = None;
    }
}
