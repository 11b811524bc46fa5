//! Notes view state and its event handler
//!
//! `NotesState::update` is the only mutation path. It performs no I/O: anything that
//! needs the network comes back out as a `Command`, and the response is fed in later as
//! a completion event.

use crate::api;
use crate::types::{FormMode, Note, NotePayload};
use tracing::{debug, info, warn};

pub const INITIAL_STATUS: &str = "Click Refresh to load notes";
const LIST_FAILED: &str = "Failed to load notes";
const REQUEST_FAILED: &str = "Request failed";
const DELETE_FAILED: &str = "Delete failed";
const FIELDS_REQUIRED: &str = "Title and content are required";

/// Inputs to the notes state: user actions and request completions
#[derive(Debug)]
pub enum Event {
    TitleChanged(String),
    ContentChanged(String),
    Refresh,
    Submit,
    BeginEdit(Note),
    CancelEdit,
    Delete(i64),
    Listed { seq: u64, result: api::Result<Vec<Note>> },
    Created(api::Result<Option<Note>>),
    Updated { id: i64, result: api::Result<Option<Note>> },
    Deleted { id: i64, result: api::Result<()> },
}

/// Network work requested by the state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List { seq: u64 },
    Create(NotePayload),
    Update { id: i64, payload: NotePayload },
    Delete { id: i64 },
}

#[derive(Debug)]
pub struct NotesState {
    notes: Vec<Note>,
    title: String,
    content: String,
    mode: FormMode,
    status: String,
    /// Sequence of the most recently dispatched list
    latest_list: u64,
    mutation_pending: bool,
}

impl Default for NotesState {
    fn default() -> Self {
        Self {
            notes: Vec::new(),
            title: String::new(),
            content: String::new(),
            mode: FormMode::Create,
            status: INITIAL_STATUS.to_string(),
            latest_list: 0,
            mutation_pending: false,
        }
    }
}

impl NotesState {
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    /// A create, update or delete is in flight
    pub fn mutation_pending(&self) -> bool {
        self.mutation_pending
    }

    pub fn update(&mut self, event: Event) -> Option<Command> {
        match event {
            Event::TitleChanged(title) => {
                self.title = title;
                None
            }
            Event::ContentChanged(content) => {
                self.content = content;
                None
            }
            Event::Refresh => Some(self.list()),
            Event::Submit => self.submit(),
            Event::BeginEdit(note) => {
                self.status = format!("Editing note #{}", note.id);
                self.mode = FormMode::Edit(note.id);
                self.title = note.title;
                self.content = note.content;
                None
            }
            Event::CancelEdit => {
                self.reset_form();
                None
            }
            Event::Delete(id) => {
                if self.mutation_pending {
                    debug!(id, "Delete ignored, request in flight");
                    return None;
                }
                self.mutation_pending = true;
                self.status = format!("Deleting note #{}...", id);
                Some(Command::Delete { id })
            }
            Event::Listed { seq, result } => {
                self.listed(seq, result);
                None
            }
            Event::Created(result) => {
                self.mutation_pending = false;
                match result {
                    Ok(note) => {
                        info!(id = ?note.map(|n| n.id), "Note created");
                        self.status = "Note created".to_string();
                        self.reset_form();
                        Some(self.list())
                    }
                    Err(e) => {
                        warn!(error = %e, "Create failed");
                        self.status = e.status_message(REQUEST_FAILED);
                        None
                    }
                }
            }
            Event::Updated { id, result } => {
                self.mutation_pending = false;
                match result {
                    Ok(_) => {
                        info!(id, "Note updated");
                        self.status = "Note updated".to_string();
                        self.reset_form();
                        Some(self.list())
                    }
                    Err(e) => {
                        warn!(id, error = %e, "Update failed");
                        self.status = e.status_message(REQUEST_FAILED);
                        None
                    }
                }
            }
            Event::Deleted { id, result } => {
                self.mutation_pending = false;
                match result {
                    Ok(()) => {
                        info!(id, "Note deleted");
                        if self.mode == FormMode::Edit(id) {
                            self.reset_form();
                        }
                        self.status = format!("Deleted note #{}", id);
                        Some(self.list())
                    }
                    Err(e) => {
                        warn!(id, error = %e, "Delete failed");
                        self.status = e.status_message(DELETE_FAILED);
                        None
                    }
                }
            }
        }
    }

    fn list(&mut self) -> Command {
        self.latest_list += 1;
        Command::List { seq: self.latest_list }
    }

    fn submit(&mut self) -> Option<Command> {
        if self.mutation_pending {
            debug!("Submit ignored, request in flight");
            return None;
        }
        if self.title.is_empty() || self.content.is_empty() {
            self.status = FIELDS_REQUIRED.to_string();
            return None;
        }

        let payload = NotePayload { title: self.title.clone(), content: self.content.clone() };
        self.mutation_pending = true;
        match self.mode {
            FormMode::Create => {
                self.status = "Creating note...".to_string();
                Some(Command::Create(payload))
            }
            FormMode::Edit(id) => {
                self.status = "Updating note...".to_string();
                Some(Command::Update { id, payload })
            }
        }
    }

    fn listed(&mut self, seq: u64, result: api::Result<Vec<Note>>) {
        if seq < self.latest_list {
            debug!(seq, latest = self.latest_list, "Discarding stale list response");
            return;
        }

        match result {
            Ok(notes) => {
                debug!(count = notes.len(), "Notes loaded");
                self.status = format!("Loaded {} note(s)", notes.len());
                self.notes = notes;
            }
            Err(e) => {
                warn!(error = %e, "List failed");
                self.status = e.status_message(LIST_FAILED);
            }
        }
    }

    fn reset_form(&mut self) {
        self.mode = FormMode::Create;
        self.title.clear();
        self.content.clear();
    }
}
