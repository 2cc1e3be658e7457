use super::*;
use crate::error::GameError;

const CELLS: usize = BOARD_SIZE * BOARD_SIZE;

fn all_positions() -> impl Iterator<Item = Pos> {
    (0..BOARD_SIZE as u8).flat_map(|r| (0..BOARD_SIZE as u8).map(move |c| Pos::new(r, c)))
}

#[test]
fn test_player_opponent() {
    assert_eq!(Player::Black.opponent(), Player::White);
    assert_eq!(Player::White.opponent(), Player::Black);
}

#[test]
fn test_cell_owner() {
    assert_eq!(Cell::Empty.owner(), None);
    assert_eq!(Cell::from(Player::White).owner(), Some(Player::White));
    assert!(Cell::default().is_empty());
}

#[test]
fn test_pos_new() {
    let pos = Pos::new(7, 7);
    assert_eq!(pos.row, 7);
    assert_eq!(pos.col, 7);
}

#[test]
fn test_pos_validity() {
    assert!(Pos::is_valid(0, 0));
    assert!(Pos::is_valid(14, 14));
    assert!(!Pos::is_valid(-1, 0));
    assert!(!Pos::is_valid(0, -1));
    assert!(!Pos::is_valid(15, 0));
    assert!(!Pos::is_valid(0, 15));
}

#[test]
fn test_pos_try_new() {
    assert_eq!(Pos::try_new(3, 4), Ok(Pos::new(3, 4)));
    assert_eq!(
        Pos::try_new(-1, -2),
        Err(GameError::OutOfRange { row: -1, col: -2 })
    );
}

#[test]
fn test_board_constants() {
    assert_eq!(BOARD_SIZE, 15);
    assert_eq!(Board::new().empty_cells().count(), 225);
}

#[test]
fn test_pos_ordering_is_row_major() {
    let pos1 = Pos::new(0, 0);
    let pos2 = Pos::new(0, 1);
    let pos3 = Pos::new(1, 0);

    assert!(pos1 < pos2);
    assert!(pos2 < pos3);
    assert!(pos1 < pos3);
}

#[test]
fn test_place_then_get() {
    let mut board = Board::new();
    for (i, pos) in [Pos::new(3, 4), Pos::new(0, 0), Pos::new(14, 14)].into_iter().enumerate() {
        let player = if i % 2 == 0 { Player::Black } else { Player::White };
        board.place(pos, player).unwrap();
        assert_eq!(board.get(pos), Ok(Cell::Stone(player)));
        assert_eq!(board.last_move(), Some(pos));
    }
}

#[test]
fn test_out_of_range_access() {
    let mut board = Board::new();
    let off = Pos::new(23, 4);
    assert_eq!(
        board.place(off, Player::Black),
        Err(GameError::OutOfRange { row: 23, col: 4 })
    );
    assert!(matches!(board.get(Pos::new(0, 15)), Err(GameError::OutOfRange { .. })));
    assert!(board.is_board_empty());
    assert_eq!(board.last_move(), None);
}

#[test]
fn test_place_on_occupied_cell_is_rejected() {
    let mut board = Board::new();
    board.place(Pos::new(5, 5), Player::Black).unwrap();
    board.place(Pos::new(6, 6), Player::White).unwrap();

    let err = board.place(Pos::new(5, 5), Player::White);
    assert_eq!(err, Err(GameError::OccupiedCell { row: 5, col: 5 }));
    // Failed call leaves everything untouched
    assert_eq!(board.get(Pos::new(5, 5)), Ok(Cell::Stone(Player::Black)));
    assert_eq!(board.last_move(), Some(Pos::new(6, 6)));
}

#[test]
fn test_clone_is_independent() {
    let mut board = Board::new();
    board.place(Pos::new(0, 0), Player::Black).unwrap();
    board.place(Pos::new(0, 1), Player::White).unwrap();

    let mut copy = board.clone();
    assert_eq!(copy, board);
    assert_eq!(copy.last_move(), Some(Pos::new(0, 1)));

    copy.place(Pos::new(9, 9), Player::Black).unwrap();
    assert_eq!(board.get(Pos::new(9, 9)), Ok(Cell::Empty));
    assert_eq!(board.last_move(), Some(Pos::new(0, 1)));
    assert_ne!(copy, board);
}

#[test]
fn test_clear() {
    let mut board = Board::new();
    board.place(Pos::new(0, 0), Player::Black).unwrap();
    board.place(Pos::new(0, 1), Player::White).unwrap();
    board.clear();
    assert_eq!(board.get(Pos::new(0, 0)), Ok(Cell::Empty));
    assert_eq!(board.get(Pos::new(0, 1)), Ok(Cell::Empty));
    assert_eq!(board.last_move(), None);
    assert_eq!(board, Board::new());
}

#[test]
fn test_has_empty_cell() {
    let mut board = Board::new();
    assert!(board.has_empty_cell());
    for pos in all_positions() {
        board.place(pos, Player::White).unwrap();
    }
    assert!(!board.has_empty_cell());
    assert_eq!(board.stone_count(), CELLS);
    assert_eq!(board.empty_cells().count(), 0);
}

#[test]
fn test_empty_cells_row_major() {
    let mut board = Board::new();
    board.place(Pos::new(0, 0), Player::Black).unwrap();
    let first: Vec<Pos> = board.empty_cells().take(3).collect();
    assert_eq!(first, vec![Pos::new(0, 1), Pos::new(0, 2), Pos::new(0, 3)]);
    assert_eq!(board.empty_cells().count(), CELLS - 1);
}

#[test]
fn test_display() {
    let mut board = Board::new();
    board.place(Pos::new(0, 0), Player::Black).unwrap();
    board.place(Pos::new(0, 1), Player::White).unwrap();
    let text = board.to_string();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), BOARD_SIZE + 1);
    assert!(lines[1].starts_with("  0  X  O  ."));
}
