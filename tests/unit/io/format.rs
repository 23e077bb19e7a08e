//! Tests for the board loader, solution writer and solution reader

#[cfg(test)]
mod tests {
    use pipeflow::io::format::{
        apply_solution, load_board, load_solution, parse_board, save_solution, write_solution,
    };
    use pipeflow::{Direction, Position, PuzzleError, TileKind};
    use tempfile::TempDir;

    const CHAIN: &str = "_______\n_______\n_______\n_______\n___H___\n___I___\n___1___\n_______\n_______\n_______";

    // Tests every symbol is placed at its column and row
    // Verified by swapping x and y while placing tiles
    #[test]
    fn test_parse_board_places_symbols() {
        let board = parse_board(CHAIN).unwrap();

        assert_eq!(board.width(), 7);
        assert_eq!(board.height(), 10);
        assert_eq!(board.get_tile(3, 4).unwrap().kind(), TileKind::House);
        assert_eq!(board.get_tile(3, 5).unwrap().kind(), TileKind::PipeStraight);
        assert_eq!(board.get_tile(3, 6).unwrap().kind(), TileKind::TankStraight);
        assert_eq!(board.get_tile(0, 0).unwrap().kind(), TileKind::Empty);
    }

    // Tests parsed tiles start facing North and unlocked
    // Verified by leaving tiles locked after parsing
    #[test]
    fn test_parse_board_initial_state() {
        let board = parse_board(CHAIN).unwrap();

        assert!(board.tiles().all(|tile| tile.orientation() == Direction::North
            && !tile.is_locked()
            && !tile.is_visited()));
    }

    // Tests a missing row is reported with the found size
    // Verified by reporting the expected size twice
    #[test]
    fn test_parse_board_too_few_rows() {
        let text = "_______\n".repeat(9);

        let error = parse_board(&text).unwrap_err();

        assert!(matches!(
            error,
            PuzzleError::InvalidDimensions {
                expected: (7, 10),
                found: (7, 9),
            }
        ));
    }

    // Tests a short row is reported with its width
    // Verified by only checking the first row
    #[test]
    fn test_parse_board_short_row() {
        let mut rows = vec!["_______"; 10];
        rows[4] = "______";

        let error = parse_board(&rows.join("\n")).unwrap_err();

        assert!(matches!(
            error,
            PuzzleError::InvalidDimensions {
                found: (6, 10),
                ..
            }
        ));
    }

    // Tests a character outside the alphabet names its position
    // Verified by swapping the reported column and row
    #[test]
    fn test_parse_board_unknown_symbol() {
        let mut rows = vec!["_______"; 10];
        rows[2] = "__X____";

        let error = parse_board(&rows.join("\n")).unwrap_err();

        assert!(matches!(
            error,
            PuzzleError::UnknownSymbol {
                symbol: 'X',
                x: 2,
                y: 2,
            }
        ));
    }

    // Tests Windows line endings and a trailing newline are accepted
    // Verified by counting the trailing blank line as a row
    #[test]
    fn test_parse_board_line_endings() {
        let text = format!("{}\r\n", CHAIN.replace('\n', "\r\n"));

        let board = parse_board(&text).unwrap();

        assert_eq!(board.get_tile(3, 6).unwrap().kind(), TileKind::TankStraight);
    }

    // Tests orientations are written one letter per cell with blanks as '_'
    // Verified by writing blank tiles as 'N'
    #[test]
    fn test_write_solution_format() {
        let mut board = parse_board(CHAIN).unwrap();
        board
            .set_orientation(Position::new(3, 5), Direction::South)
            .unwrap();

        let text = write_solution(&board);
        let rows: Vec<&str> = text.split('\n').collect();

        assert_eq!(rows.len(), 10);
        assert_eq!(rows[0], "_______");
        assert_eq!(rows[4], "___N___");
        assert_eq!(rows[5], "___S___");
        assert!(!text.ends_with('\n'));
    }

    // Tests applying a state turns non-blank tiles
    // Verified by skipping every cell of the state
    #[test]
    fn test_apply_solution_sets_orientations() {
        let mut board = parse_board(CHAIN).unwrap();
        let state = "_______\n_______\n_______\n_______\n___W___\n___E___\n___S___";

        apply_solution(&mut board, state).unwrap();

        assert_eq!(board.get_tile(3, 4).unwrap().orientation(), Direction::West);
        assert_eq!(board.get_tile(3, 5).unwrap().orientation(), Direction::East);
        assert_eq!(board.get_tile(3, 6).unwrap().orientation(), Direction::South);
    }

    // Tests letters over blank board tiles are ignored
    // Verified by applying letters to empty tiles
    #[test]
    fn test_apply_solution_ignores_empty_tiles() {
        let mut board = parse_board(CHAIN).unwrap();

        apply_solution(&mut board, "EEEEEEE").unwrap();

        assert_eq!(board.get_tile(0, 0).unwrap().orientation(), Direction::North);
    }

    // Tests unknown state letters are rejected
    // Verified by treating unknown letters as blank
    #[test]
    fn test_apply_solution_unknown_letter() {
        let mut board = parse_board(CHAIN).unwrap();

        let error = apply_solution(&mut board, "___Q___").unwrap_err();

        assert!(matches!(
            error,
            PuzzleError::UnknownSymbol {
                symbol: 'Q',
                x: 3,
                y: 0,
            }
        ));
    }

    // Tests a state larger than the board is rejected
    // Verified by ignoring extra columns
    #[test]
    fn test_apply_solution_too_wide() {
        let mut board = parse_board(CHAIN).unwrap();

        let error = apply_solution(&mut board, "NNNNNNNN").unwrap_err();

        assert!(matches!(
            error,
            PuzzleError::InvalidDimensions {
                found: (8, 1),
                ..
            }
        ));
    }

    // Tests a locked house cannot be turned by a state
    // Verified by unlocking houses when applying states
    #[test]
    fn test_apply_solution_locked_tile() {
        let mut board = parse_board(CHAIN).unwrap();
        board.solve();
        let house = board.get_tile(3, 4).unwrap().orientation();
        let other = house.clockwise();
        let mut rows = vec!["_______".to_string(); 5];
        rows[4] = format!("___{}___", other.letter());

        let error = apply_solution(&mut board, &rows.join("\n")).unwrap_err();

        assert!(matches!(error, PuzzleError::TileLocked { x: 3, y: 4 }));
    }

    // Tests saved solutions load back onto a fresh board
    // Verified by writing rows in reverse order
    #[test]
    fn test_save_and_load_solution() {
        let temp_dir = TempDir::new().unwrap();
        let board_path = temp_dir.path().join("chain.txt");
        let solution_path = temp_dir.path().join("nested").join("chain_solution.txt");
        std::fs::write(&board_path, CHAIN).unwrap();

        let mut solved = load_board(&board_path).unwrap();
        solved.solve();
        save_solution(&solved, &solution_path).unwrap();

        let mut restored = load_board(&board_path).unwrap();
        load_solution(&mut restored, &solution_path).unwrap();

        for (expected, actual) in solved.tiles().zip(restored.tiles()) {
            assert_eq!(expected.orientation(), actual.orientation());
        }
    }

    // Tests a missing board file reports the path
    // Verified by dropping the path from the error
    #[test]
    fn test_load_board_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("missing.txt");

        let error = load_board(&missing).unwrap_err();

        assert!(matches!(error, PuzzleError::FileSystem { ref path, .. } if path == &missing));
    }
}
