//! Tests for starting point discovery and layered frontier expansion

#[cfg(test)]
mod tests {
    use pipeflow::SolveSummary;
    use pipeflow::board::{Board, Direction, Position, TileKind};

    fn chain_board() -> Board {
        let mut board = Board::new();
        board
            .set_kind(Position::new(3, 6), TileKind::TankStraight)
            .unwrap();
        board
            .set_kind(Position::new(3, 5), TileKind::PipeStraight)
            .unwrap();
        board.set_kind(Position::new(3, 4), TileKind::House).unwrap();
        board
    }

    fn visited(board: &Board) -> Vec<Position> {
        board
            .tiles()
            .filter(|tile| tile.is_visited())
            .map(|tile| tile.position())
            .collect()
    }

    // Tests tanks are reported in row-major scan order
    // Verified by scanning columns before rows
    #[test]
    fn test_find_starting_points_order() {
        let mut board = Board::new();
        board.set_kind(Position::new(1, 2), TileKind::TankTee).unwrap();
        board.set_kind(Position::new(5, 0), TileKind::TankElbow).unwrap();
        board
            .set_kind(Position::new(0, 2), TileKind::TankStraight)
            .unwrap();
        board.set_kind(Position::new(4, 1), TileKind::PipeTee).unwrap();
        board.set_kind(Position::new(6, 9), TileKind::House).unwrap();

        assert_eq!(
            board.find_starting_points(),
            vec![Position::new(5, 0), Position::new(0, 2), Position::new(1, 2)]
        );
    }

    // Tests an empty frontier processes no layers
    // Verified by counting a layer before checking the frontier
    #[test]
    fn test_find_path_empty_frontier() {
        let mut board = chain_board();
        let before = board.clone();

        assert_eq!(board.find_path(Vec::new()), 0);
        assert_eq!(board, before);
    }

    // Tests each connected tile becomes one layer of the expansion
    // Verified by appending visited tiles to the next frontier
    #[test]
    fn test_find_path_layers_along_chain() {
        let mut board = chain_board();

        let layers = board.find_path(vec![Position::new(3, 6)]);

        assert_eq!(layers, 3);
        assert_eq!(
            visited(&board),
            vec![Position::new(3, 4), Position::new(3, 5), Position::new(3, 6)]
        );
    }

    // Tests already aligned neighbors join the frontier whatever their kind
    // Verified by checking can_feed before the alignment shortcut
    #[test]
    fn test_find_path_from_pipe() {
        let mut board = chain_board();

        let layers = board.find_path(vec![Position::new(3, 5)]);

        // The tank is never fed by the pipe but already lines up with it
        assert_eq!(layers, 2);
        assert_eq!(
            visited(&board),
            vec![Position::new(3, 4), Position::new(3, 5), Position::new(3, 6)]
        );
        assert!(board.tile(Position::new(3, 4)).unwrap().is_locked());
    }

    // Tests solve reports tanks, layers, visits and connected houses
    // Verified by counting unlocked houses as connected
    #[test]
    fn test_solve_summary() {
        let mut board = chain_board();

        let summary = board.solve();

        assert_eq!(
            summary,
            SolveSummary {
                tanks: 1,
                layers: 3,
                visited: 3,
                houses: 1,
                houses_connected: 1,
            }
        );
        assert!(summary.all_houses_connected());
        assert_eq!(
            board.tile(Position::new(3, 4)).unwrap().orientation(),
            Direction::South
        );
    }

    // Tests visited flags survive a second solve
    // Verified by clearing visited flags at the start of solve
    #[test]
    fn test_visited_is_monotonic() {
        let mut board = chain_board();
        board.solve();
        let first = visited(&board);

        let summary = board.solve();

        assert_eq!(visited(&board), first);
        assert_eq!(summary.visited, first.len());
        assert_eq!(summary.layers, 1);
    }

    // Tests a board with no tanks is left untouched
    // Verified by seeding the frontier with the first non-empty tile
    #[test]
    fn test_solve_without_tanks() {
        let mut board = Board::new();
        board.set_kind(Position::new(2, 2), TileKind::PipeTee).unwrap();
        board.set_kind(Position::new(2, 3), TileKind::House).unwrap();
        let before = board.clone();

        let summary = board.solve();

        assert_eq!(summary.tanks, 0);
        assert_eq!(summary.layers, 0);
        assert_eq!(summary.visited, 0);
        assert!(!summary.all_houses_connected());
        assert_eq!(board, before);
    }
}
