//! Mutation engine: every change to the board is a load-validate-mutate-save
//! cycle against the store, executed under the store's exclusive lock so
//! concurrent callers cannot overwrite one another's writes.
//!
//! Validation happens against the freshly loaded state and failures never
//! reach `save`, so an error leaves the on-disk board exactly as it was.

use chrono::Utc;
use tracing::debug;

use crate::board::{Board, Column, Comment, Task};
use crate::error::{Error, Result};
use crate::ident;
use crate::store::BoardStore;

/// The set of operations that are the sole means of changing board state.
#[derive(Debug, Clone)]
pub struct Engine {
    store: BoardStore,
}

impl Engine {
    pub fn new(store: BoardStore) -> Self {
        Self { store }
    }

    /// The underlying store.
    pub fn store(&self) -> &BoardStore {
        &self.store
    }

    /// Load the current board without mutating it.
    pub fn board(&self) -> Result<Board> {
        self.store.load()
    }

    /// Set the board title. Empty titles are permitted.
    pub fn rename_board(&self, title: &str) -> Result<()> {
        let _guard = self.store.lock()?;
        let mut board = self.store.load()?;

        board.title = title.to_string();
        self.store.save(&board)
    }

    /// Replace the column sequence with the one named by `ids`.
    ///
    /// `ids` must be a permutation of the current column id set: a length
    /// disagreement is a `CountMismatch`, any unresolvable (or duplicated)
    /// id is a `ColumnNotFound`. Tasks travel with their column.
    pub fn reorder_columns(&self, ids: &[String]) -> Result<()> {
        let _guard = self.store.lock()?;
        let mut board = self.store.load()?;

        if ids.len() != board.columns.len() {
            return Err(Error::CountMismatch {
                expected: board.columns.len(),
                actual: ids.len(),
            });
        }

        let mut pool = std::mem::take(&mut board.columns);
        let mut reordered = Vec::with_capacity(ids.len());
        for id in ids {
            let index = pool
                .iter()
                .position(|column| column.id == *id)
                .ok_or_else(|| Error::ColumnNotFound(id.clone()))?;
            reordered.push(pool.remove(index));
        }

        board.columns = reordered;
        self.store.save(&board)
    }

    /// Append a new empty column, returning it.
    pub fn create_column(&self, title: &str) -> Result<Column> {
        let _guard = self.store.lock()?;
        let mut board = self.store.load()?;

        let id = ident::column_id_for(title, |candidate| {
            board.columns.iter().any(|column| column.id == candidate)
        });
        let column = Column {
            id,
            title: title.to_string(),
            tasks: vec![],
        };
        debug!(column = %column.id, "creating column");

        board.columns.push(column.clone());
        self.store.save(&board)?;
        Ok(column)
    }

    /// Replace the title of the column with the given id.
    pub fn update_column_title(&self, id: &str, title: &str) -> Result<()> {
        let _guard = self.store.lock()?;
        let mut board = self.store.load()?;

        let column = column_mut(&mut board, id)?;
        column.title = title.to_string();
        self.store.save(&board)
    }

    /// Remove the column with the given id, discarding its tasks.
    pub fn delete_column(&self, id: &str) -> Result<()> {
        let _guard = self.store.lock()?;
        let mut board = self.store.load()?;

        let index = board
            .columns
            .iter()
            .position(|column| column.id == id)
            .ok_or_else(|| Error::ColumnNotFound(id.to_string()))?;
        board.columns.remove(index);
        self.store.save(&board)
    }

    /// Append a new card to the named column, returning it.
    ///
    /// Card ids are board-globally unique, so deletions and moves cannot
    /// cause a later creation to collide.
    pub fn create_card(&self, column_id: &str, title: &str, description: &str) -> Result<Task> {
        let _guard = self.store.lock()?;
        let mut board = self.store.load()?;

        let column = column_mut(&mut board, column_id)?;
        let task = Task {
            id: ident::new_task_id(),
            title: title.to_string(),
            description: description.to_string(),
            comments: vec![],
        };
        debug!(column = column_id, card = %task.id, "creating card");

        column.tasks.push(task.clone());
        self.store.save(&board)?;
        Ok(task)
    }

    /// Update the title and description of a card in the named column.
    pub fn update_card(
        &self,
        column_id: &str,
        card_id: &str,
        title: &str,
        description: &str,
    ) -> Result<()> {
        let _guard = self.store.lock()?;
        let mut board = self.store.load()?;

        let column = column_mut(&mut board, column_id)?;
        let task = card_mut(column, card_id)?;
        task.title = title.to_string();
        task.description = description.to_string();
        self.store.save(&board)
    }

    /// Remove a card from the named column.
    pub fn delete_card(&self, column_id: &str, card_id: &str) -> Result<()> {
        let _guard = self.store.lock()?;
        let mut board = self.store.load()?;

        let column = column_mut(&mut board, column_id)?;
        let index = column
            .tasks
            .iter()
            .position(|task| task.id == card_id)
            .ok_or_else(|| Error::CardNotFound(card_id.to_string()))?;
        column.tasks.remove(index);
        self.store.save(&board)
    }

    /// Set the named column's card list to exactly `card_ids`, in order.
    ///
    /// Ids resolve against every column on the board; a card currently held
    /// elsewhere is moved, not duplicated, so this doubles as the move-card
    /// primitive. Replace-not-merge: cards of the target column omitted from
    /// `card_ids` are dropped, so callers must supply the full desired
    /// membership.
    pub fn reorder_cards(&self, column_id: &str, card_ids: &[String]) -> Result<()> {
        let _guard = self.store.lock()?;
        let mut board = self.store.load()?;

        if !board.columns.iter().any(|column| column.id == column_id) {
            return Err(Error::ColumnNotFound(column_id.to_string()));
        }

        let mut resolved = Vec::with_capacity(card_ids.len());
        for id in card_ids {
            let task =
                take_card(&mut board, id).ok_or_else(|| Error::CardNotFound(id.clone()))?;
            resolved.push(task);
        }
        debug!(column = column_id, cards = resolved.len(), "reordering cards");

        let column = column_mut(&mut board, column_id)?;
        column.tasks = resolved;
        self.store.save(&board)
    }

    /// Append a comment to a card, returning it with its generated id and
    /// creation timestamp.
    pub fn create_comment(&self, column_id: &str, card_id: &str, text: &str) -> Result<Comment> {
        let _guard = self.store.lock()?;
        let mut board = self.store.load()?;

        let column = column_mut(&mut board, column_id)?;
        let task = card_mut(column, card_id)?;
        let comment = Comment {
            id: ident::new_comment_id(),
            text: text.to_string(),
            created_at: Utc::now(),
        };

        task.comments.push(comment.clone());
        self.store.save(&board)?;
        Ok(comment)
    }

    /// Remove a comment from a card.
    pub fn delete_comment(&self, column_id: &str, card_id: &str, comment_id: &str) -> Result<()> {
        let _guard = self.store.lock()?;
        let mut board = self.store.load()?;

        let column = column_mut(&mut board, column_id)?;
        let task = card_mut(column, card_id)?;
        let index = task
            .comments
            .iter()
            .position(|comment| comment.id == comment_id)
            .ok_or_else(|| Error::CommentNotFound(comment_id.to_string()))?;
        task.comments.remove(index);
        self.store.save(&board)
    }
}

/// First column matching `id`, in sequence order.
fn column_mut<'a>(board: &'a mut Board, id: &str) -> Result<&'a mut Column> {
    board
        .columns
        .iter_mut()
        .find(|column| column.id == id)
        .ok_or_else(|| Error::ColumnNotFound(id.to_string()))
}

/// First card matching `id` within the column, in sequence order.
fn card_mut<'a>(column: &'a mut Column, id: &str) -> Result<&'a mut Task> {
    column
        .tasks
        .iter_mut()
        .find(|task| task.id == id)
        .ok_or_else(|| Error::CardNotFound(id.to_string()))
}

/// Remove and return the card with `id` from whichever column holds it.
fn take_card(board: &mut Board, id: &str) -> Option<Task> {
    for column in &mut board.columns {
        if let Some(index) = column.tasks.iter().position(|task| task.id == id) {
            return Some(column.tasks.remove(index));
        }
    }
    None
}
