use bangbang::board::Board;
use bangbang::engine::Engine;
use bangbang::error::Error;
use bangbang::store::BoardStore;
use tempfile::TempDir;

fn engine_in(dir: &TempDir) -> Engine {
    Engine::new(BoardStore::open(dir.path()))
}

fn column_ids(board: &Board) -> Vec<&str> {
    board.columns.iter().map(|c| c.id.as_str()).collect()
}

fn task_ids<'a>(board: &'a Board, column_id: &str) -> Vec<&'a str> {
    board
        .columns
        .iter()
        .find(|c| c.id == column_id)
        .map(|c| c.tasks.iter().map(|t| t.id.as_str()).collect())
        .unwrap_or_default()
}

#[test]
fn rename_board_sets_title() {
    let dir = TempDir::new().unwrap();
    let engine = engine_in(&dir);

    engine.rename_board("Roadmap").unwrap();
    assert_eq!(engine.board().unwrap().title, "Roadmap");

    // Empty titles are values, not errors.
    engine.rename_board("").unwrap();
    assert_eq!(engine.board().unwrap().title, "");
}

#[test]
fn reorder_columns_applies_permutation() {
    let dir = TempDir::new().unwrap();
    let engine = engine_in(&dir);

    let order = ["done", "review", "in-progress", "todo"].map(String::from);
    engine.reorder_columns(&order).unwrap();

    let board = engine.board().unwrap();
    assert_eq!(column_ids(&board), ["done", "review", "in-progress", "todo"]);
}

#[test]
fn reorder_columns_rejects_non_permutations() {
    let dir = TempDir::new().unwrap();
    let engine = engine_in(&dir);
    let before = engine.board().unwrap();

    // Too few ids.
    let err = engine
        .reorder_columns(&["todo".into(), "done".into()])
        .unwrap_err();
    assert!(matches!(
        err,
        Error::CountMismatch {
            expected: 4,
            actual: 2
        }
    ));

    // Unknown id.
    let order = ["todo", "in-progress", "review", "ghost"].map(String::from);
    let err = engine.reorder_columns(&order).unwrap_err();
    assert!(matches!(err, Error::ColumnNotFound(id) if id == "ghost"));

    // Duplicated id (correct length, so it surfaces as an unresolvable id).
    let order = ["todo", "todo", "review", "done"].map(String::from);
    let err = engine.reorder_columns(&order).unwrap_err();
    assert!(matches!(err, Error::ColumnNotFound(_)));

    // Failed reorders leave the stored board unchanged.
    assert_eq!(engine.board().unwrap(), before);
}

#[test]
fn create_column_appends_with_fresh_slug() {
    let dir = TempDir::new().unwrap();
    let engine = engine_in(&dir);

    let column = engine.create_column("Blocked").unwrap();
    assert_eq!(column.id, "blocked");
    assert!(column.tasks.is_empty());

    // Same title gets a de-duplicated id.
    let second = engine.create_column("Blocked").unwrap();
    assert_eq!(second.id, "blocked-2");

    let board = engine.board().unwrap();
    assert_eq!(board.columns.len(), 6);
    assert_eq!(board.columns.last().unwrap().id, "blocked-2");
}

#[test]
fn update_and_delete_column() {
    let dir = TempDir::new().unwrap();
    let engine = engine_in(&dir);

    engine.update_column_title("review", "In Review").unwrap();
    let board = engine.board().unwrap();
    let review = board.columns.iter().find(|c| c.id == "review").unwrap();
    assert_eq!(review.title, "In Review");

    engine.delete_column("review").unwrap();
    let board = engine.board().unwrap();
    assert_eq!(column_ids(&board), ["todo", "in-progress", "done"]);

    let err = engine.update_column_title("review", "x").unwrap_err();
    assert!(matches!(err, Error::ColumnNotFound(_)));
    let err = engine.delete_column("review").unwrap_err();
    assert!(matches!(err, Error::ColumnNotFound(_)));
}

#[test]
fn create_card_generates_fresh_ids() {
    let dir = TempDir::new().unwrap();
    let engine = engine_in(&dir);

    let task = engine.create_card("todo", "T", "D").unwrap();
    assert!(task.id.starts_with("task-"));
    assert_eq!(task.title, "T");
    assert_eq!(task.description, "D");

    let board = engine.board().unwrap();
    assert_eq!(task_ids(&board, "todo"), [task.id.as_str()]);

    // Ids stay unique after deletions, unlike a count-based scheme.
    engine.delete_card("todo", &task.id).unwrap();
    let replacement = engine.create_card("todo", "T2", "").unwrap();
    assert_ne!(replacement.id, task.id);
}

#[test]
fn create_card_requires_existing_column() {
    let dir = TempDir::new().unwrap();
    let engine = engine_in(&dir);

    let err = engine.create_card("ghost-column", "T", "D").unwrap_err();
    assert!(matches!(err, Error::ColumnNotFound(id) if id == "ghost-column"));
}

#[test]
fn update_card_checks_column_before_card() {
    let dir = TempDir::new().unwrap();
    let engine = engine_in(&dir);
    let task = engine.create_card("todo", "T", "D").unwrap();

    let err = engine
        .update_card("ghost-column", &task.id, "x", "y")
        .unwrap_err();
    assert!(matches!(err, Error::ColumnNotFound(_)));

    let err = engine.update_card("todo", "ghost-card", "x", "y").unwrap_err();
    assert!(matches!(err, Error::CardNotFound(id) if id == "ghost-card"));

    engine.update_card("todo", &task.id, "T!", "D!").unwrap();
    let board = engine.board().unwrap();
    let updated = &board.columns[0].tasks[0];
    assert_eq!(updated.title, "T!");
    assert_eq!(updated.description, "D!");
}

#[test]
fn reorder_cards_moves_across_columns() {
    let dir = TempDir::new().unwrap();
    let engine = engine_in(&dir);

    let c1 = engine.create_card("todo", "c1", "").unwrap();
    let c2 = engine.create_card("todo", "c2", "").unwrap();
    let c3 = engine.create_card("review", "c3", "").unwrap();

    // Move c1 into review ahead of c3; c2 stays behind in todo.
    engine
        .reorder_cards("review", &[c1.id.clone(), c3.id.clone()])
        .unwrap();

    let board = engine.board().unwrap();
    assert_eq!(task_ids(&board, "review"), [c1.id.as_str(), c3.id.as_str()]);
    assert_eq!(task_ids(&board, "todo"), [c2.id.as_str()]);

    // Comments travel with the moved card.
    let review = board.columns.iter().find(|c| c.id == "review").unwrap();
    assert_eq!(review.tasks[0].title, "c1");
}

#[test]
fn reorder_cards_replaces_membership() {
    let dir = TempDir::new().unwrap();
    let engine = engine_in(&dir);

    let keep = engine.create_card("todo", "keep", "").unwrap();
    let dropped = engine.create_card("todo", "dropped", "").unwrap();

    // Supplying a subset drops the omitted card from the column entirely.
    engine.reorder_cards("todo", &[keep.id.clone()]).unwrap();

    let board = engine.board().unwrap();
    assert_eq!(task_ids(&board, "todo"), [keep.id.as_str()]);
    let anywhere = board
        .columns
        .iter()
        .flat_map(|c| &c.tasks)
        .any(|t| t.id == dropped.id);
    assert!(!anywhere);
}

#[test]
fn reorder_cards_validates_before_writing() {
    let dir = TempDir::new().unwrap();
    let engine = engine_in(&dir);
    let card = engine.create_card("todo", "T", "").unwrap();
    let before = engine.board().unwrap();

    let err = engine
        .reorder_cards("ghost-column", &[card.id.clone()])
        .unwrap_err();
    assert!(matches!(err, Error::ColumnNotFound(_)));

    let err = engine
        .reorder_cards("todo", &[card.id.clone(), "ghost-card".into()])
        .unwrap_err();
    assert!(matches!(err, Error::CardNotFound(id) if id == "ghost-card"));

    assert_eq!(engine.board().unwrap(), before);
}

#[test]
fn comments_append_and_delete_by_id() {
    let dir = TempDir::new().unwrap();
    let engine = engine_in(&dir);
    let card = engine.create_card("todo", "T", "").unwrap();

    let first = engine
        .create_comment("todo", &card.id, "first note")
        .unwrap();
    let second = engine
        .create_comment("todo", &card.id, "second note")
        .unwrap();
    assert!(first.id.starts_with("comment-"));
    assert_ne!(first.id, second.id);

    let board = engine.board().unwrap();
    let comments = &board.columns[0].tasks[0].comments;
    assert_eq!(comments.len(), 2);
    assert_eq!(comments[0].text, "first note");
    assert_eq!(comments[0].created_at, first.created_at);

    engine.delete_comment("todo", &card.id, &first.id).unwrap();
    let board = engine.board().unwrap();
    let comments = &board.columns[0].tasks[0].comments;
    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0].id, second.id);
}

#[test]
fn comment_errors_name_the_missing_link() {
    let dir = TempDir::new().unwrap();
    let engine = engine_in(&dir);
    let card = engine.create_card("todo", "T", "").unwrap();

    let err = engine
        .create_comment("ghost-column", &card.id, "x")
        .unwrap_err();
    assert!(matches!(err, Error::ColumnNotFound(_)));

    let err = engine.create_comment("todo", "ghost-card", "x").unwrap_err();
    assert!(matches!(err, Error::CardNotFound(_)));

    let err = engine
        .delete_comment("todo", &card.id, "ghost-comment")
        .unwrap_err();
    assert!(matches!(err, Error::CommentNotFound(id) if id == "ghost-comment"));
}

#[test]
fn mutations_round_trip_through_the_file() {
    let dir = TempDir::new().unwrap();
    let engine = engine_in(&dir);

    engine.rename_board("Persistence check").unwrap();
    let card = engine.create_card("todo", "T", "D").unwrap();
    engine.create_comment("todo", &card.id, "note").unwrap();

    // A second engine over the same directory sees everything.
    let fresh = engine_in(&dir);
    let board = fresh.board().unwrap();
    assert_eq!(board.title, "Persistence check");
    assert_eq!(task_ids(&board, "todo"), [card.id.as_str()]);
    assert_eq!(board.columns[0].tasks[0].comments.len(), 1);
}
