use crate::errors::{Result, SyncError};
use crate::kind::DataKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageDirection {
    Next,
    Prev,
}

/// Per-kind cursor stack. `cursors[i]` holds the cursor used to request page
/// i+1, so `cursors[0]` is always `None` (page 1 has no cursor). The stack
/// grows as pages are visited and is kept when stepping back, so a revisited
/// page reuses the cursor recorded for it.
#[derive(Debug, Clone)]
pub struct PaginationState {
    pub page: usize,
    pub cursors: Vec<Option<String>>,
    pub has_more: bool,
}

impl PaginationState {
    pub fn new() -> Self {
        PaginationState {
            page: 1,
            cursors: vec![None],
            has_more: false,
        }
    }
}

impl Default for PaginationState {
    fn default() -> Self {
        Self::new()
    }
}

/// Tracks pagination state for every paginated kind. Non-paginated kinds are
/// rejected with `NotPaginated`.
pub struct Paginator {
    states: std::collections::HashMap<DataKind, PaginationState>,
}

impl Paginator {
    pub fn new() -> Self {
        let mut states = std::collections::HashMap::new();
        for kind in DataKind::ALL {
            if kind.paginates() {
                states.insert(kind, PaginationState::new());
            }
        }
        Paginator { states }
    }

    pub fn state(&self, kind: DataKind) -> Result<&PaginationState> {
        self.states
            .get(&kind)
            .ok_or(SyncError::NotPaginated { kind })
    }

    fn state_mut(&mut self, kind: DataKind) -> Result<&mut PaginationState> {
        self.states
            .get_mut(&kind)
            .ok_or(SyncError::NotPaginated { kind })
    }

    pub fn page(&self, kind: DataKind) -> usize {
        self.states.get(&kind).map(|s| s.page).unwrap_or(1)
    }

    /// Cursor to request the given page with. Page 1 is always `None`.
    pub fn cursor_for(&self, kind: DataKind, page: usize) -> Result<Option<String>> {
        let state = self.state(kind)?;
        if page == 0 || page > state.cursors.len() {
            return Err(SyncError::PageOutOfRange {
                message: format!("no cursor recorded for page {} of {}", page, kind),
            });
        }
        Ok(state.cursors[page - 1].clone())
    }

    /// Record the cursor that leads past the current page and step forward.
    pub fn advance(&mut self, kind: DataKind, next_cursor: Option<String>) -> Result<usize> {
        let state = self.state_mut(kind)?;
        if state.cursors.len() > state.page {
            state.cursors[state.page] = next_cursor;
        } else {
            state.cursors.push(next_cursor);
        }
        state.page += 1;
        Ok(state.page)
    }

    /// Step back one page. The cursor stack is untouched.
    pub fn retreat(&mut self, kind: DataKind) -> Result<usize> {
        let state = self.state_mut(kind)?;
        if state.page <= 1 {
            return Err(SyncError::PageOutOfRange {
                message: format!("already at page 1 of {}", kind),
            });
        }
        state.page -= 1;
        Ok(state.page)
    }

    pub fn set_has_more(&mut self, kind: DataKind, has_more: bool) -> Result<()> {
        self.state_mut(kind)?.has_more = has_more;
        Ok(())
    }

    pub fn reset(&mut self, kind: DataKind) {
        if let Some(state) = self.states.get_mut(&kind) {
            *state = PaginationState::new();
        }
    }

    pub fn reset_all(&mut self) {
        for state in self.states.values_mut() {
            *state = PaginationState::new();
        }
    }
}

impl Default for Paginator {
    fn default() -> Self {
        Self::new()
    }
}
