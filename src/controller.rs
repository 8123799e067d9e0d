//! Per-entity root controller: list state and mutation orchestration.
//!
//! The controller owns the canonical in-memory list and the "currently
//! editing" record. Backend calls run on detached worker threads; each
//! finished call sends one [`Outcome`] over an mpsc channel that the UI
//! tick drains with [`Controller::drain`]. The UI thread never blocks on a
//! request, nothing is disabled while one is in flight, and overlapping
//! requests are allowed and unordered: the last response to arrive wins the
//! subsequent refresh.
//!
//! The list is a cache: replaced wholesale after every successful refresh,
//! never patched locally. Mutations do not touch it directly; they trigger a
//! refresh on success. Failures are logged with a message naming the failed
//! operation and otherwise swallowed (best-effort, log-and-continue).

use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::Arc;
use std::thread;

use tracing::error;

use crate::api::{ApiError, Backend};
use crate::model::Entity;

// =============================================================================
// Outcomes
// =============================================================================

/// The result of one finished backend call.
///
/// Every spawned worker sends exactly one of these, success or failure.
enum Outcome<E: Entity> {
    Refresh(Result<Vec<E>, ApiError>),
    Create(Result<(), ApiError>),
    Update(Result<(), ApiError>),
    Delete(Result<(), ApiError>),
}

// =============================================================================
// Controller
// =============================================================================

/// Root controller for one record kind.
///
/// State machine for the editing slot: `idle` and `editing(record)`.
/// `start_edit` moves idle → editing; `cancel_edit` and a successful update
/// move editing → idle; create and delete leave the slot untouched.
pub struct Controller<E: Entity> {
    backend: Arc<dyn Backend<E>>,
    items: Vec<E>,
    editing: Option<E>,
    tx: Sender<Outcome<E>>,
    rx: Receiver<Outcome<E>>,
    in_flight: usize,
}

impl<E: Entity> Controller<E> {
    pub fn new(backend: Arc<dyn Backend<E>>) -> Self {
        let (tx, rx) = channel();
        Self {
            backend,
            items: Vec::new(),
            editing: None,
            tx,
            rx,
            in_flight: 0,
        }
    }

    /// The current list, in server order.
    pub fn items(&self) -> &[E] {
        &self.items
    }

    /// The record currently being edited, if any.
    pub fn editing(&self) -> Option<&E> {
        self.editing.as_ref()
    }

    // =========================================================================
    // Operations
    // =========================================================================

    /// Fetch the full list. On success the list is replaced wholesale; on
    /// failure the stale list stays available.
    pub fn refresh(&mut self) {
        let backend = Arc::clone(&self.backend);
        let tx = self.tx.clone();
        self.in_flight += 1;
        thread::spawn(move || {
            let _ = tx.send(Outcome::Refresh(backend.list()));
        });
    }

    /// Submit a new record. A successful create triggers a refresh; the
    /// editing slot is untouched either way.
    pub fn create(&mut self, draft: E::Draft) {
        let backend = Arc::clone(&self.backend);
        let tx = self.tx.clone();
        self.in_flight += 1;
        thread::spawn(move || {
            let _ = tx.send(Outcome::Create(backend.create(&draft)));
        });
    }

    /// Replace the record being edited. A no-op when nothing is being
    /// edited: no backend call is made. The replace is keyed by the id of
    /// the editing record as of this call.
    pub fn update(&mut self, draft: E::Draft) {
        let Some(editing) = &self.editing else {
            return;
        };
        let id = editing.id();
        let backend = Arc::clone(&self.backend);
        let tx = self.tx.clone();
        self.in_flight += 1;
        thread::spawn(move || {
            let _ = tx.send(Outcome::Update(backend.update(id, &draft)));
        });
    }

    /// Delete a record by id. A successful delete triggers a refresh.
    pub fn delete(&mut self, id: u64) {
        let backend = Arc::clone(&self.backend);
        let tx = self.tx.clone();
        self.in_flight += 1;
        thread::spawn(move || {
            let _ = tx.send(Outcome::Delete(backend.delete(id)));
        });
    }

    /// Begin editing a record. The form re-seeds from it.
    pub fn start_edit(&mut self, entity: E) {
        self.editing = Some(entity);
    }

    /// Leave edit mode without submitting.
    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    // =========================================================================
    // Outcome application
    // =========================================================================

    /// Drain every pending outcome without blocking.
    ///
    /// Returns true if the visible state changed (list replaced or editing
    /// slot cleared).
    pub fn drain(&mut self) -> bool {
        let mut changed = false;
        while let Ok(outcome) = self.rx.try_recv() {
            changed |= self.apply(outcome);
        }
        changed
    }

    /// Block until every in-flight request (and any refresh it chains) has
    /// been applied. Test seam; the UI only ever calls [`drain`].
    ///
    /// [`drain`]: Controller::drain
    pub fn wait_idle(&mut self) -> bool {
        let mut changed = false;
        while self.in_flight > 0 {
            match self.rx.recv() {
                Ok(outcome) => changed |= self.apply(outcome),
                Err(_) => break,
            }
        }
        changed
    }

    fn apply(&mut self, outcome: Outcome<E>) -> bool {
        self.in_flight -= 1;
        match outcome {
            Outcome::Refresh(Ok(items)) => {
                self.items = items;
                true
            }
            Outcome::Refresh(Err(err)) => {
                error!(resource = E::RESOURCE, %err, "list fetch failed");
                false
            }
            Outcome::Create(Ok(())) => {
                self.refresh();
                false
            }
            Outcome::Create(Err(err)) => {
                error!(resource = E::RESOURCE, %err, "create failed");
                false
            }
            Outcome::Update(Ok(())) => {
                // Leaving edit mode does not wait for the refresh.
                self.editing = None;
                self.refresh();
                true
            }
            Outcome::Update(Err(err)) => {
                // Editing stays set so the form remains in edit mode.
                error!(resource = E::RESOURCE, %err, "update failed");
                false
            }
            Outcome::Delete(Ok(())) => {
                self.refresh();
                false
            }
            Outcome::Delete(Err(err)) => {
                error!(resource = E::RESOURCE, %err, "delete failed");
                false
            }
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::model::{Escuela, EscuelaDraft};

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        List,
        Create(EscuelaDraft),
        Update(u64, EscuelaDraft),
        Delete(u64),
    }

    /// In-memory backend that records every call it receives.
    struct MockBackend {
        state: Mutex<MockState>,
    }

    struct MockState {
        items: Vec<Escuela>,
        next_id: u64,
        calls: Vec<Call>,
        fail: bool,
    }

    impl MockBackend {
        fn with_items(items: Vec<Escuela>) -> Arc<Self> {
            let next_id = items.iter().map(|e| e.id).max().unwrap_or(0) + 1;
            Arc::new(Self {
                state: Mutex::new(MockState {
                    items,
                    next_id,
                    calls: Vec::new(),
                    fail: false,
                }),
            })
        }

        fn set_fail(&self, fail: bool) {
            self.state.lock().unwrap().fail = fail;
        }

        fn calls(&self) -> Vec<Call> {
            self.state.lock().unwrap().calls.clone()
        }
    }

    impl Backend<Escuela> for MockBackend {
        fn list(&self) -> Result<Vec<Escuela>, ApiError> {
            let mut state = self.state.lock().unwrap();
            state.calls.push(Call::List);
            if state.fail {
                return Err(ApiError::Status(500));
            }
            Ok(state.items.clone())
        }

        fn create(&self, draft: &EscuelaDraft) -> Result<(), ApiError> {
            let mut state = self.state.lock().unwrap();
            state.calls.push(Call::Create(draft.clone()));
            if state.fail {
                return Err(ApiError::Status(500));
            }
            let id = state.next_id;
            state.next_id += 1;
            state.items.push(Escuela {
                id,
                nombre: draft.nombre.clone(),
                creditos: draft.creditos,
                num_estudiantes: draft.num_estudiantes,
            });
            Ok(())
        }

        fn update(&self, id: u64, draft: &EscuelaDraft) -> Result<(), ApiError> {
            let mut state = self.state.lock().unwrap();
            state.calls.push(Call::Update(id, draft.clone()));
            if state.fail {
                return Err(ApiError::Status(500));
            }
            for item in &mut state.items {
                if item.id == id {
                    item.nombre = draft.nombre.clone();
                    item.creditos = draft.creditos;
                    item.num_estudiantes = draft.num_estudiantes;
                }
            }
            Ok(())
        }

        fn delete(&self, id: u64) -> Result<(), ApiError> {
            let mut state = self.state.lock().unwrap();
            state.calls.push(Call::Delete(id));
            if state.fail {
                return Err(ApiError::Status(500));
            }
            state.items.retain(|item| item.id != id);
            Ok(())
        }
    }

    fn escuela(id: u64, nombre: &str) -> Escuela {
        Escuela {
            id,
            nombre: nombre.to_string(),
            creditos: 10,
            num_estudiantes: 100,
        }
    }

    fn draft(nombre: &str, creditos: u32, num_estudiantes: u32) -> EscuelaDraft {
        EscuelaDraft {
            nombre: nombre.to_string(),
            creditos,
            num_estudiantes,
        }
    }

    #[test]
    fn test_refresh_replaces_items_in_server_order() {
        let backend = MockBackend::with_items(vec![escuela(2, "B"), escuela(1, "A")]);
        let mut controller = Controller::new(backend as Arc<dyn Backend<Escuela>>);

        controller.refresh();
        assert!(controller.wait_idle());

        let names: Vec<_> = controller.items().iter().map(|e| e.nombre.as_str()).collect();
        assert_eq!(names, ["B", "A"]);
    }

    #[test]
    fn test_failed_refresh_keeps_stale_items() {
        let backend = MockBackend::with_items(vec![escuela(1, "A")]);
        let mut controller = Controller::new(Arc::clone(&backend) as Arc<dyn Backend<Escuela>>);

        controller.refresh();
        controller.wait_idle();
        assert_eq!(controller.items().len(), 1);

        backend.set_fail(true);
        controller.refresh();
        assert!(!controller.wait_idle());
        // Stale but available
        assert_eq!(controller.items().len(), 1);
        assert_eq!(controller.items()[0].nombre, "A");
    }

    #[test]
    fn test_create_submits_single_draft_then_refreshes() {
        let backend = MockBackend::with_items(vec![escuela(1, "A")]);
        let mut controller = Controller::new(Arc::clone(&backend) as Arc<dyn Backend<Escuela>>);

        let d = draft("Nueva", 8, 40);
        controller.create(d.clone());
        controller.wait_idle();

        // Exactly one POST carrying the draft alone, then the refresh GET
        assert_eq!(backend.calls(), vec![Call::Create(d.clone()), Call::List]);
        let created = controller
            .items()
            .iter()
            .find(|e| e.nombre == "Nueva")
            .expect("created record should appear after refresh");
        assert_eq!(created.creditos, d.creditos);
        assert_eq!(created.num_estudiantes, d.num_estudiantes);
    }

    #[test]
    fn test_failed_create_leaves_everything_alone() {
        let backend = MockBackend::with_items(vec![escuela(1, "A")]);
        let mut controller = Controller::new(Arc::clone(&backend) as Arc<dyn Backend<Escuela>>);
        controller.refresh();
        controller.wait_idle();
        controller.start_edit(escuela(1, "A"));

        backend.set_fail(true);
        controller.create(draft("Nueva", 8, 40));
        controller.wait_idle();

        assert_eq!(controller.items().len(), 1);
        assert!(controller.editing().is_some());
        // No refresh chained after the failed POST
        assert_eq!(
            backend.calls(),
            vec![Call::List, Call::Create(draft("Nueva", 8, 40))]
        );
    }

    #[test]
    fn test_update_keys_replace_by_editing_id_and_clears_editing() {
        // The worked example: editing {id:3, ETS, 12, 150}, créditos → 15
        let backend = MockBackend::with_items(vec![Escuela {
            id: 3,
            nombre: "ETS".to_string(),
            creditos: 12,
            num_estudiantes: 150,
        }]);
        let mut controller = Controller::new(Arc::clone(&backend) as Arc<dyn Backend<Escuela>>);
        controller.refresh();
        controller.wait_idle();

        controller.start_edit(controller.items()[0].clone());
        controller.update(draft("ETS", 15, 150));
        controller.wait_idle();

        assert!(controller.editing().is_none());
        assert!(backend
            .calls()
            .contains(&Call::Update(3, draft("ETS", 15, 150))));
        assert_eq!(controller.items()[0].creditos, 15);
    }

    #[test]
    fn test_update_without_editing_is_a_no_op() {
        let backend = MockBackend::with_items(vec![escuela(1, "A")]);
        let mut controller = Controller::new(Arc::clone(&backend) as Arc<dyn Backend<Escuela>>);

        controller.update(draft("ETS", 15, 150));
        controller.wait_idle();

        assert!(backend.calls().is_empty());
    }

    #[test]
    fn test_failed_update_leaves_editing_set() {
        let backend = MockBackend::with_items(vec![escuela(1, "A")]);
        let mut controller = Controller::new(Arc::clone(&backend) as Arc<dyn Backend<Escuela>>);
        controller.start_edit(escuela(1, "A"));

        backend.set_fail(true);
        controller.update(draft("A2", 9, 90));
        controller.wait_idle();

        // Form stays in edit mode for a retry
        assert_eq!(controller.editing().map(|e| e.id), Some(1));
    }

    #[test]
    fn test_delete_removes_exactly_that_record() {
        let backend = MockBackend::with_items(vec![escuela(1, "A"), escuela(2, "B")]);
        let mut controller = Controller::new(backend as Arc<dyn Backend<Escuela>>);
        controller.refresh();
        controller.wait_idle();

        controller.delete(1);
        controller.wait_idle();

        let ids: Vec<_> = controller.items().iter().map(|e| e.id).collect();
        assert_eq!(ids, [2]);
    }

    #[test]
    fn test_create_and_delete_do_not_touch_editing() {
        let backend = MockBackend::with_items(vec![escuela(1, "A"), escuela(2, "B")]);
        let mut controller = Controller::new(backend as Arc<dyn Backend<Escuela>>);
        controller.start_edit(escuela(2, "B"));

        controller.create(draft("C", 1, 1));
        controller.wait_idle();
        assert_eq!(controller.editing().map(|e| e.id), Some(2));

        controller.delete(1);
        controller.wait_idle();
        assert_eq!(controller.editing().map(|e| e.id), Some(2));
    }

    #[test]
    fn test_cancel_edit_clears_editing() {
        let backend = MockBackend::with_items(vec![]);
        let mut controller = Controller::new(backend as Arc<dyn Backend<Escuela>>);
        controller.start_edit(escuela(1, "A"));
        controller.cancel_edit();
        assert!(controller.editing().is_none());
    }
}
