//! Single-slot draft editor state machine.
//!
//! At most one draft is ever being edited; the slot is a tagged union so
//! that invariant is a type-level fact rather than a convention. The
//! working buffer is locked (`refining`) while a refinement call is in
//! flight so an in-flight rewrite cannot race manual edits.

use crate::draft::Draft;
use crate::error::CoreError;

/// Which draft, if any, is currently being edited.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditSlot {
    #[default]
    Idle,
    Editing {
        /// Index into the candidate draft list.
        index: usize,
        /// Working copy of the draft body. The draft itself is only
        /// touched on commit.
        buffer: String,
        /// Set while a refinement call is outstanding; the buffer is
        /// read-only until it clears.
        refining: bool,
    },
}

impl EditSlot {
    /// Start editing the draft at `index`, copying its body into the
    /// working buffer.
    ///
    /// Rejected while another draft is being edited (commit or cancel
    /// first) and for out-of-range indices.
    pub fn begin(&mut self, index: usize, drafts: &[Draft]) -> Result<(), CoreError> {
        if let EditSlot::Editing { index: current, .. } = self {
            return Err(CoreError::Conflict(format!(
                "Draft {current} is already being edited"
            )));
        }
        let draft = drafts
            .get(index)
            .ok_or_else(|| CoreError::Validation(format!("No draft at index {index}")))?;
        *self = EditSlot::Editing {
            index,
            buffer: draft.content.clone(),
            refining: false,
        };
        Ok(())
    }

    /// Overwrite the working buffer with free-form operator input.
    pub fn set_buffer(&mut self, text: impl Into<String>) -> Result<(), CoreError> {
        match self {
            EditSlot::Idle => Err(CoreError::Conflict("No draft is being edited".to_string())),
            EditSlot::Editing { refining: true, .. } => Err(CoreError::Conflict(
                "Buffer is locked while a refinement is in flight".to_string(),
            )),
            EditSlot::Editing { buffer, .. } => {
                *buffer = text.into();
                Ok(())
            }
        }
    }

    /// Lock the buffer for a refinement call and return the text to send.
    pub fn begin_refine(&mut self) -> Result<String, CoreError> {
        match self {
            EditSlot::Idle => Err(CoreError::Conflict("No draft is being edited".to_string())),
            EditSlot::Editing { refining: true, .. } => Err(CoreError::Conflict(
                "A refinement is already in flight".to_string(),
            )),
            EditSlot::Editing {
                buffer, refining, ..
            } => {
                *refining = true;
                Ok(buffer.clone())
            }
        }
    }

    /// Unlock the buffer after a refinement call.
    ///
    /// `Some(body)` replaces the buffer with the service's rewrite;
    /// `None` (the failure path) leaves it byte-for-byte unchanged.
    pub fn finish_refine(&mut self, outcome: Option<String>) {
        if let EditSlot::Editing {
            buffer, refining, ..
        } = self
        {
            *refining = false;
            if let Some(body) = outcome {
                *buffer = body;
            }
        }
    }

    /// Copy the working buffer back into the draft it was taken from and
    /// return to idle. Returns the committed index.
    pub fn commit(&mut self, drafts: &mut [Draft]) -> Result<usize, CoreError> {
        match std::mem::take(self) {
            EditSlot::Idle => Err(CoreError::Conflict("No draft is being edited".to_string())),
            EditSlot::Editing {
                refining: true,
                index,
                buffer,
            } => {
                // Keep the slot as it was; the in-flight rewrite owns it.
                *self = EditSlot::Editing {
                    index,
                    buffer,
                    refining: true,
                };
                Err(CoreError::Conflict(
                    "Cannot commit while a refinement is in flight".to_string(),
                ))
            }
            EditSlot::Editing { index, buffer, .. } => {
                let draft = drafts
                    .get_mut(index)
                    .ok_or_else(|| CoreError::Validation(format!("No draft at index {index}")))?;
                draft.content = buffer;
                Ok(index)
            }
        }
    }

    /// Discard the working buffer and return to idle without touching
    /// any draft.
    pub fn cancel(&mut self) -> Result<(), CoreError> {
        match self {
            EditSlot::Idle => Err(CoreError::Conflict("No draft is being edited".to_string())),
            EditSlot::Editing { refining: true, .. } => Err(CoreError::Conflict(
                "Cannot cancel while a refinement is in flight".to_string(),
            )),
            EditSlot::Editing { .. } => {
                *self = EditSlot::Idle;
                Ok(())
            }
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, EditSlot::Editing { .. })
    }

    pub fn is_refining(&self) -> bool {
        matches!(self, EditSlot::Editing { refining: true, .. })
    }

    /// Index of the draft being edited, if any.
    pub fn editing_index(&self) -> Option<usize> {
        match self {
            EditSlot::Editing { index, .. } => Some(*index),
            EditSlot::Idle => None,
        }
    }

    /// Current working buffer, if a draft is being edited.
    pub fn buffer(&self) -> Option<&str> {
        match self {
            EditSlot::Editing { buffer, .. } => Some(buffer.as_str()),
            EditSlot::Idle => None,
        }
    }
}
