use std::fmt;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Width and height of the board.
pub const SIZE: usize = 3;

/// The mark a player places on the board, stored as `1` (X) or `-1` (O).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "i8", try_from = "i64")]
pub enum Mark {
    X,
    O,
}

impl Mark {
    pub fn value(self) -> i8 {
        match self {
            Mark::X => 1,
            Mark::O => -1,
        }
    }

    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

impl From<Mark> for i8 {
    fn from(mark: Mark) -> Self {
        mark.value()
    }
}

impl TryFrom<i64> for Mark {
    type Error = Error;

    fn try_from(value: i64) -> Result<Self> {
        match value {
            1 => Ok(Mark::X),
            -1 => Ok(Mark::O),
            other => Err(Error::InvalidPlayerMark(other)),
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Mark::X => write!(f, "X"),
            Mark::O => write!(f, "O"),
        }
    }
}

/// Content of a single cell: `0` when empty, otherwise the mark's value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "i8", try_from = "i64")]
pub enum Cell {
    #[default]
    Empty,
    Filled(Mark),
}

impl Cell {
    pub fn value(self) -> i8 {
        match self {
            Cell::Empty => 0,
            Cell::Filled(mark) => mark.value(),
        }
    }

    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Filled(mark) => Some(mark),
        }
    }
}

impl From<Mark> for Cell {
    fn from(mark: Mark) -> Self {
        Cell::Filled(mark)
    }
}

impl From<Cell> for i8 {
    fn from(cell: Cell) -> Self {
        cell.value()
    }
}

impl TryFrom<i64> for Cell {
    type Error = Error;

    fn try_from(value: i64) -> Result<Self> {
        if value == 0 {
            Ok(Cell::Empty)
        } else {
            Mark::try_from(value).map(Cell::Filled)
        }
    }
}

/// Row (`x`) and column (`y`) of a cell, both in `0..3`.
///
/// Ordering is row-major, which is also the enumeration order used by every
/// search in this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "(usize, usize)", try_from = "(usize, usize)")]
pub struct Coordinates {
    x: usize,
    y: usize,
}

impl Coordinates {
    /// All nine cells in row-major order.
    pub const ALL: [Coordinates; 9] = [
        Coordinates { x: 0, y: 0 },
        Coordinates { x: 0, y: 1 },
        Coordinates { x: 0, y: 2 },
        Coordinates { x: 1, y: 0 },
        Coordinates { x: 1, y: 1 },
        Coordinates { x: 1, y: 2 },
        Coordinates { x: 2, y: 0 },
        Coordinates { x: 2, y: 1 },
        Coordinates { x: 2, y: 2 },
    ];

    pub fn new(x: usize, y: usize) -> Result<Self> {
        if x >= SIZE || y >= SIZE {
            return Err(Error::OutOfBounds { x, y });
        }
        Ok(Self { x, y })
    }

    pub fn x(self) -> usize {
        self.x
    }

    pub fn y(self) -> usize {
        self.y
    }

    /// Row-major index in `0..9`.
    pub fn index(self) -> usize {
        self.x * SIZE + self.y
    }
}

impl From<Coordinates> for (usize, usize) {
    fn from(coord: Coordinates) -> Self {
        (coord.x, coord.y)
    }
}

impl TryFrom<(usize, usize)> for Coordinates {
    type Error = Error;

    fn try_from((x, y): (usize, usize)) -> Result<Self> {
        Coordinates::new(x, y)
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// The bare 3x3 cell grid. This is what move strategies look at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "Vec<Vec<i8>>", try_from = "Vec<Vec<i64>>")]
pub struct Grid {
    cells: [[Cell; SIZE]; SIZE],
}

impl Grid {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a grid from integer rows (`1`, `-1` or `0`), rejecting anything
    /// that is not exactly 3x3.
    pub fn from_rows(rows: &[Vec<i64>]) -> Result<Self> {
        if rows.len() != SIZE {
            return Err(Error::InvalidGrid(format!(
                "expected {} rows, found {}",
                SIZE,
                rows.len()
            )));
        }
        let mut grid = Grid::new();
        for (x, row) in rows.iter().enumerate() {
            if row.len() != SIZE {
                return Err(Error::InvalidGrid(format!(
                    "row {} has {} cells, expected {}",
                    x,
                    row.len(),
                    SIZE
                )));
            }
            for (y, &value) in row.iter().enumerate() {
                grid.cells[x][y] = Cell::try_from(value)?;
            }
        }
        Ok(grid)
    }

    /// Dumps the grid as integer rows.
    pub fn to_rows(&self) -> Vec<Vec<i8>> {
        self.cells
            .iter()
            .map(|row| row.iter().map(|cell| cell.value()).collect())
            .collect()
    }

    pub fn get(&self, coord: Coordinates) -> Cell {
        self.cells[coord.x][coord.y]
    }

    pub fn is_empty(&self, coord: Coordinates) -> bool {
        self.get(coord) == Cell::Empty
    }

    /// Places `mark` at `coord`. Occupied cells are never overwritten.
    pub fn set(&mut self, coord: Coordinates, mark: Mark) -> Result<()> {
        if !self.is_empty(coord) {
            return Err(Error::Overwrite(coord));
        }
        self.cells[coord.x][coord.y] = Cell::Filled(mark);
        Ok(())
    }

    /// Empties a cell again. Only search code undoing its own moves uses this.
    pub(crate) fn clear(&mut self, coord: Coordinates) {
        self.cells[coord.x][coord.y] = Cell::Empty;
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|cell| *cell != Cell::Empty)
    }

    pub fn empty_cells(&self) -> Vec<Coordinates> {
        Coordinates::ALL
            .iter()
            .copied()
            .filter(|&coord| self.is_empty(coord))
            .collect()
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| **cell == Cell::Filled(mark))
            .count()
    }

    fn value_at(&self, x: usize, y: usize) -> i32 {
        i32::from(self.cells[x][y].value())
    }

    /// Checks if `mark` sitting at `coord` completes a line.
    ///
    /// Only the row, the column and, when `coord` lies on them, the two
    /// diagonals through `coord` are summed.
    pub fn is_winning_move(&self, coord: Coordinates, mark: Mark) -> bool {
        let target = SIZE as i32 * i32::from(mark.value());
        let (x, y) = (coord.x, coord.y);

        let row: i32 = (0..SIZE).map(|col| self.value_at(x, col)).sum();
        let col: i32 = (0..SIZE).map(|row| self.value_at(row, y)).sum();
        if row == target || col == target {
            return true;
        }
        if x == y {
            let diag: i32 = (0..SIZE).map(|i| self.value_at(i, i)).sum();
            if diag == target {
                return true;
            }
        }
        if x + y == SIZE - 1 {
            let anti: i32 = (0..SIZE).map(|i| self.value_at(SIZE - 1 - i, i)).sum();
            if anti == target {
                return true;
            }
        }
        false
    }

    /// Full scan for a three-in-a-row.
    pub fn winner(&self) -> Option<Mark> {
        Coordinates::ALL.iter().find_map(|&coord| {
            self.get(coord)
                .mark()
                .filter(|&mark| self.is_winning_move(coord, mark))
        })
    }
}

impl From<Grid> for Vec<Vec<i8>> {
    fn from(grid: Grid) -> Self {
        grid.to_rows()
    }
}

impl TryFrom<Vec<Vec<i64>>> for Grid {
    type Error = Error;

    fn try_from(rows: Vec<Vec<i64>>) -> Result<Self> {
        Grid::from_rows(&rows)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in &self.cells {
            for cell in row {
                let symbol = match cell {
                    Cell::Empty => ".",
                    Cell::Filled(Mark::X) => "X",
                    Cell::Filled(Mark::O) => "O",
                };
                write!(f, "{} ", symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// A single placement: the only way a [`Board`] changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawMove")]
pub struct Move {
    x: usize,
    y: usize,
    player: Mark,
}

#[derive(Deserialize)]
struct RawMove {
    x: usize,
    y: usize,
    player: Mark,
}

impl TryFrom<RawMove> for Move {
    type Error = Error;

    fn try_from(raw: RawMove) -> Result<Self> {
        let coord = Coordinates::new(raw.x, raw.y)?;
        Ok(Move::new(coord, raw.player))
    }
}

impl Move {
    pub fn new(coord: Coordinates, player: Mark) -> Self {
        Self {
            x: coord.x,
            y: coord.y,
            player,
        }
    }

    /// Builds a move from untyped values, as received from a form or a socket.
    pub fn from_values(x: usize, y: usize, player: i64) -> Result<Self> {
        let player = Mark::try_from(player)?;
        Ok(Move::new(Coordinates::new(x, y)?, player))
    }

    pub fn coordinates(&self) -> Coordinates {
        Coordinates {
            x: self.x,
            y: self.y,
        }
    }

    pub fn player(&self) -> Mark {
        self.player
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} -> {}", self.player, self.coordinates())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    InProgress,
    Win(Mark),
    Tie,
}

impl Outcome {
    pub fn is_over(self) -> bool {
        self != Outcome::InProgress
    }
}

/// The grid plus the ordered history of moves that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "BoardRecord")]
pub struct Board {
    grid: Grid,
    history: Vec<Move>,
}

#[derive(Deserialize)]
struct BoardRecord {
    grid: Grid,
    #[serde(default)]
    history: Vec<Move>,
}

impl TryFrom<BoardRecord> for Board {
    type Error = Error;

    fn try_from(record: BoardRecord) -> Result<Self> {
        let board = Board::replay(&record.history)?;
        if board.grid != record.grid {
            return Err(Error::InconsistentHistory(format!(
                "replaying {} moves gives\n{}but the stored grid is\n{}",
                record.history.len(),
                board.grid,
                record.grid
            )));
        }
        Ok(board)
    }
}

impl Board {
    const VERTICAL_SEPARATOR: &'static str = "│";
    const HORIZONTAL_SEPARATOR: &'static str = "─";
    const INTERSECTION: &'static str = "┼";

    pub fn new() -> Self {
        Self::default()
    }

    /// Applies `moves` in order to an empty board.
    pub fn replay(moves: &[Move]) -> Result<Self> {
        let mut board = Board::new();
        for mv in moves {
            board
                .apply(*mv)
                .map_err(|err| Error::InconsistentHistory(err.to_string()))?;
        }
        Ok(board)
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn history(&self) -> &[Move] {
        &self.history
    }

    pub fn last_play(&self) -> Option<Move> {
        self.history.last().copied()
    }

    pub fn get(&self, coord: Coordinates) -> Cell {
        self.grid.get(coord)
    }

    pub fn is_empty(&self, coord: Coordinates) -> bool {
        self.grid.is_empty(coord)
    }

    /// Places the move's mark. On error the board is left untouched.
    pub fn apply(&mut self, mv: Move) -> Result<()> {
        self.grid.set(mv.coordinates(), mv.player())?;
        self.history.push(mv);
        debug!("applied {}", mv);
        Ok(())
    }

    pub fn is_full(&self) -> bool {
        self.grid.is_full()
    }

    /// Returns the mover if `mv` completed a line.
    pub fn winner_after(&self, mv: Move) -> Option<Mark> {
        if self.grid.is_winning_move(mv.coordinates(), mv.player()) {
            Some(mv.player())
        } else {
            None
        }
    }

    pub fn outcome(&self) -> Outcome {
        // The grid only ever changes through `apply`, so a line can only
        // have been completed by the last move.
        let winner = self.last_play().and_then(|mv| self.winner_after(mv));
        match winner {
            Some(mark) => Outcome::Win(mark),
            None if self.is_full() => Outcome::Tie,
            None => Outcome::InProgress,
        }
    }

    /// Every move `mark` could make, in row-major order.
    pub fn legal_moves(&self, mark: Mark) -> Vec<Move> {
        self.grid
            .empty_cells()
            .into_iter()
            .map(|coord| Move::new(coord, mark))
            .collect()
    }

    /// The grid with separators between cells, `_` marking empty ones.
    pub fn framed(&self) -> String {
        let separator = [Self::HORIZONTAL_SEPARATOR; SIZE].join(Self::INTERSECTION);
        let rows: Vec<String> = (0..SIZE)
            .map(|x| {
                (0..SIZE)
                    .map(|y| match self.grid.cells[x][y] {
                        Cell::Empty => "_".to_string(),
                        Cell::Filled(mark) => mark.to_string(),
                    })
                    .collect::<Vec<_>>()
                    .join(Self::VERTICAL_SEPARATOR)
            })
            .collect();
        rows.join(format!("\n{}\n", separator).as_str())
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.framed())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    // Filled in reading order, X wins on (2, 0) and again on (2, 2).
    const WIN_X_GRID: &str = "XOXOXOXOX";
    const WIN_X_MOVES: [(usize, usize); 2] = [(2, 0), (2, 2)];

    // Filled in reading order, O wins on (2, 2).
    const WIN_O_GRID: &str = "OXXXOXOXO";
    const WIN_O_MOVES: [(usize, usize); 1] = [(2, 2)];

    const FULL_GRID_LOOSE: &str = "XOXOOXXXO";

    pub(crate) fn coord(x: usize, y: usize) -> Coordinates {
        Coordinates::new(x, y).unwrap()
    }

    /// Parses nine `X`, `O` or `_` characters in reading order.
    pub(crate) fn load_grid(cells: &str) -> Grid {
        let values: Vec<i64> = cells
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '/')
            .map(|c| match c {
                'X' => 1,
                'O' => -1,
                _ => 0,
            })
            .collect();
        let rows: Vec<Vec<i64>> = values.chunks(SIZE).map(|row| row.to_vec()).collect();
        Grid::from_rows(&rows).unwrap()
    }

    #[test]
    fn test_new() {
        let board = Board::new();
        for coord in Coordinates::ALL {
            assert_eq!(board.get(coord), Cell::Empty);
            assert!(board.is_empty(coord));
        }
        assert!(board.history().is_empty());
        assert_eq!(board.outcome(), Outcome::InProgress);
        assert_eq!(board.last_play(), None);
    }

    #[test]
    fn test_mark_values() {
        assert_eq!(Mark::X.value(), 1);
        assert_eq!(Mark::O.value(), -1);
        assert_eq!(Cell::Empty.value(), 0);
        assert_eq!(Mark::X.opponent(), Mark::O);
        assert_eq!(Mark::try_from(2), Err(Error::InvalidPlayerMark(2)));
        assert_eq!(Cell::try_from(-1), Ok(Cell::Filled(Mark::O)));
    }

    #[test]
    fn test_coordinates_bounds() {
        assert!(Coordinates::new(2, 2).is_ok());
        assert_eq!(
            Coordinates::new(3, 0),
            Err(Error::OutOfBounds { x: 3, y: 0 })
        );
        assert_eq!(coord(1, 2).index(), 5);
    }

    #[test]
    fn test_apply() {
        let mut board = Board::new();
        let first = Move::new(coord(0, 0), Mark::X);
        assert!(board.apply(first).is_ok());
        assert_eq!(board.get(coord(0, 0)), Cell::Filled(Mark::X));
        assert_eq!(board.last_play(), Some(first));

        let overwrite = Move::new(coord(0, 0), Mark::O);
        assert_eq!(board.apply(overwrite), Err(Error::Overwrite(coord(0, 0))));
        assert_eq!(board.get(coord(0, 0)), Cell::Filled(Mark::X));
        assert_eq!(board.history(), &[first]);

        assert!(board.apply(Move::new(coord(0, 1), Mark::O)).is_ok());
        assert_eq!(board.get(coord(0, 1)), Cell::Filled(Mark::O));
        assert_eq!(board.history().len(), 2);
    }

    #[test]
    fn test_move_from_values() {
        let mv = Move::from_values(1, 2, -1).unwrap();
        assert_eq!(mv.coordinates(), coord(1, 2));
        assert_eq!(mv.player(), Mark::O);
        assert_eq!(
            Move::from_values(1, 2, 0),
            Err(Error::InvalidPlayerMark(0))
        );
        assert_eq!(
            Move::from_values(0, 5, 1),
            Err(Error::OutOfBounds { x: 0, y: 5 })
        );
    }

    #[test]
    fn test_is_full() {
        let mut board = Board::new();
        for (i, coord) in Coordinates::ALL.iter().enumerate() {
            assert!(!board.is_full());
            let mark = if i % 2 == 0 { Mark::X } else { Mark::O };
            board.apply(Move::new(*coord, mark)).unwrap();
        }
        assert!(board.is_full());
        assert!(load_grid(FULL_GRID_LOOSE).is_full());
    }

    #[test]
    fn test_eight_marks_is_not_full() {
        let grid = load_grid("XOXOOXXX_");
        assert!(!grid.is_full());
        assert_eq!(grid.empty_cells(), vec![coord(2, 2)]);
    }

    #[test]
    fn test_not_is_winning_move() {
        let model = load_grid(FULL_GRID_LOOSE);
        let mut board = Board::new();
        for coord in Coordinates::ALL {
            let mark = model.get(coord).mark().unwrap();
            let mv = Move::new(coord, mark);
            board.apply(mv).unwrap();
            assert_eq!(board.winner_after(mv), None);
        }
        assert_eq!(board.outcome(), Outcome::Tie);
    }

    #[test]
    fn test_is_winning_move() {
        let fixtures: [(&str, &[(usize, usize)]); 2] =
            [(WIN_X_GRID, &WIN_X_MOVES), (WIN_O_GRID, &WIN_O_MOVES)];
        for (cells, winning) in fixtures {
            let model = load_grid(cells);
            let mut grid = Grid::new();
            for coord in Coordinates::ALL {
                let mark = model.get(coord).mark().unwrap();
                grid.set(coord, mark).unwrap();
                let expected = winning.contains(&(coord.x(), coord.y()));
                assert_eq!(grid.is_winning_move(coord, mark), expected, "{}", coord);
            }
        }
    }

    #[test]
    fn test_outcome_win() {
        let mut board = Board::new();
        for (x, y, mark) in [
            (0, 0, Mark::X),
            (1, 0, Mark::O),
            (0, 1, Mark::X),
            (1, 1, Mark::O),
        ] {
            board.apply(Move::new(coord(x, y), mark)).unwrap();
            assert_eq!(board.outcome(), Outcome::InProgress);
        }
        board.apply(Move::new(coord(0, 2), Mark::X)).unwrap();
        assert_eq!(board.outcome(), Outcome::Win(Mark::X));
    }

    fn board_from(moves: &[(usize, usize, Mark)]) -> Board {
        let moves: Vec<Move> = moves
            .iter()
            .map(|&(x, y, mark)| Move::new(coord(x, y), mark))
            .collect();
        Board::replay(&moves).unwrap()
    }

    #[test]
    fn test_outcome_survives_round_trip() {
        // O O O / X X _ / X _ _
        let board = board_from(&[
            (1, 0, Mark::X),
            (0, 0, Mark::O),
            (1, 1, Mark::X),
            (0, 1, Mark::O),
            (2, 0, Mark::X),
            (0, 2, Mark::O),
        ]);
        assert_eq!(board.grid(), &load_grid("OOO XX_ X__"));
        assert_eq!(board.outcome(), Outcome::Win(Mark::O));

        let restored: Board =
            serde_json::from_value(serde_json::to_value(&board).unwrap()).unwrap();
        assert_eq!(restored.outcome(), Outcome::Win(Mark::O));
    }

    #[test]
    fn test_legal_moves_row_major() {
        let board = board_from(&[(0, 0, Mark::X), (0, 2, Mark::O), (1, 1, Mark::X)]);
        let moves = board.legal_moves(Mark::O);
        let coords: Vec<_> = moves.iter().map(|mv| mv.coordinates()).collect();
        assert_eq!(
            coords,
            vec![
                coord(0, 1),
                coord(1, 0),
                coord(1, 2),
                coord(2, 0),
                coord(2, 1),
                coord(2, 2)
            ]
        );
        assert!(moves.iter().all(|mv| mv.player() == Mark::O));
    }

    #[test]
    fn test_from_rows_rejects_bad_shapes() {
        assert!(matches!(
            Grid::from_rows(&[vec![0, 0, 0], vec![0, 0, 0]]),
            Err(Error::InvalidGrid(_))
        ));
        assert!(matches!(
            Grid::from_rows(&[vec![0, 0, 0], vec![0, 0], vec![0, 0, 0]]),
            Err(Error::InvalidGrid(_))
        ));
        assert_eq!(
            Grid::from_rows(&[vec![0, 0, 0], vec![0, 3, 0], vec![0, 0, 0]]),
            Err(Error::InvalidPlayerMark(3))
        );
    }

    #[test]
    fn test_board_serde() {
        let mut board = Board::new();
        board.apply(Move::new(coord(1, 1), Mark::X)).unwrap();
        board.apply(Move::new(coord(0, 2), Mark::O)).unwrap();

        let value = serde_json::to_value(&board).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "grid": [[0, 0, -1], [0, 1, 0], [0, 0, 0]],
                "history": [
                    {"x": 1, "y": 1, "player": 1},
                    {"x": 0, "y": 2, "player": -1}
                ]
            })
        );
        let restored: Board = serde_json::from_value(value).unwrap();
        assert_eq!(restored, board);
    }

    #[test]
    fn test_board_serde_rejects_inconsistent_history() {
        let value = serde_json::json!({
            "grid": [[1, 0, 0], [0, 0, 0], [0, 0, 0]],
            "history": [{"x": 2, "y": 2, "player": 1}]
        });
        assert!(serde_json::from_value::<Board>(value).is_err());

        let twice = serde_json::json!({
            "grid": [[1, 0, 0], [0, 0, 0], [0, 0, 0]],
            "history": [
                {"x": 0, "y": 0, "player": 1},
                {"x": 0, "y": 0, "player": -1}
            ]
        });
        assert!(serde_json::from_value::<Board>(twice).is_err());
    }

    #[test]
    fn test_board_serde_rejects_grid_without_history() {
        let value = serde_json::json!({
            "grid": [[1, -1, 0], [0, 1, 0], [0, 0, 0]],
            "history": []
        });
        assert!(matches!(
            serde_json::from_value::<Board>(value),
            Err(err) if err.to_string().contains("does not match the grid")
        ));

        let missing = serde_json::json!({"grid": [[1, -1, 0], [0, 1, 0], [0, 0, 0]]});
        assert!(serde_json::from_value::<Board>(missing).is_err());

        let empty = serde_json::json!({"grid": [[0, 0, 0], [0, 0, 0], [0, 0, 0]]});
        assert_eq!(serde_json::from_value::<Board>(empty).unwrap(), Board::new());
    }

    #[test]
    fn test_framed() {
        let board = board_from(&[(0, 0, Mark::X), (1, 1, Mark::O)]);
        assert_eq!(board.framed(), "X│_│_\n─┼─┼─\n_│O│_\n─┼─┼─\n_│_│_");
    }
}
