use super::square::*;
use super::*;
use crate::othello_position;

#[test]
fn test_starting_position_layout() {
    let board = Board::starting_position();
    assert_eq!(Some(Side::Black), board.get(C3));
    assert_eq!(Some(Side::White), board.get(D3));
    assert_eq!(Some(Side::White), board.get(C4));
    assert_eq!(Some(Side::Black), board.get(D4));
    assert_eq!(4, board.stone_count());
    assert_eq!(2, board.count(Side::Black));
    assert_eq!(2, board.count(Side::White));
    assert_eq!(32, board.empty_count());
}

#[test]
fn test_initial_board_is_a_fresh_value() {
    let first = create_initial_board();
    let second = first.with_stone(A1, Side::White);
    assert_eq!(create_initial_board(), first);
    assert_ne!(first, second);
    assert_eq!(None, first.get(A1));
}

#[test]
fn test_cell_rejects_out_of_range_coordinates() {
    let board = Board::starting_position();
    assert_eq!(Ok(Some(Side::Black)), board.cell(2, 2));
    assert!(matches!(
        board.cell(6, 2),
        Err(BoardError::OutOfBoundsError { .. })
    ));
    assert!(board.cell(0, 100).is_err());
}

#[test]
fn test_from_rows_rejects_wrong_dimensions() {
    let short = vec![vec![None; BOARD_SIZE]; BOARD_SIZE - 1];
    assert!(matches!(
        Board::from_rows(&short),
        Err(BoardError::InvalidDimensionsError { rows: 5, .. })
    ));

    let mut ragged = vec![vec![None; BOARD_SIZE]; BOARD_SIZE];
    ragged[3].push(None);
    assert!(matches!(
        Board::from_rows(&ragged),
        Err(BoardError::InvalidDimensionsError { columns: 7, .. })
    ));

    let square = vec![vec![Some(Side::White); BOARD_SIZE]; BOARD_SIZE];
    let board = Board::from_rows(&square).unwrap();
    assert!(board.is_full());
    assert_eq!(36, board.count(Side::White));
}

#[test]
fn test_parse_layout() {
    let board: Board = STARTING_POSITION_LAYOUT.parse().unwrap();
    assert_eq!(Board::starting_position(), board);
    assert_eq!(STARTING_POSITION_LAYOUT, board.to_layout());

    let multiline = "
        x.....
        ......
        ..xo..
        ..ox..
        ......
        .....o
    ";
    let board: Board = multiline.parse().unwrap();
    assert_eq!(Some(Side::Black), board.get(A1));
    assert_eq!(Some(Side::White), board.get(F6));
}

#[test]
fn test_parse_rejects_bad_input() {
    assert!(matches!(
        "....../....../..BQ../..WB../....../......".parse::<Board>(),
        Err(BoardError::InvalidCellCharacterError { character: 'Q' })
    ));
    assert!(matches!(
        "....../....../..BW../..WB../......".parse::<Board>(),
        Err(BoardError::InvalidDimensionsError { .. })
    ));
    assert!(matches!(
        "......./....../..BW../..WB../....../......".parse::<Board>(),
        Err(BoardError::InvalidDimensionsError { .. })
    ));
}

#[test]
fn test_macro_matches_parser() {
    let board = othello_position! {
        W.....
        .B....
        ..BW..
        ..WB..
        ......
        .....B
    };
    assert_eq!(Some(Side::White), board.get(A1));
    assert_eq!(Some(Side::Black), board.get(B2));
    assert_eq!(Some(Side::Black), board.get(F6));
    assert_eq!(7, board.stone_count());
}

#[test]
fn test_display() {
    let rendered = Board::starting_position().to_string();
    let lines: Vec<&str> = rendered.lines().collect();
    assert_eq!("  a b c d e f", lines[0]);
    assert_eq!("3 . . B W . .", lines[3]);
    assert_eq!("4 . . W B . .", lines[4]);
    assert_eq!(7, lines.len());
}
