//! Cell grid owning every piece in play.
//!
//! Cells are stored row-major starting at rank 0, so cell index
//! `rank * width + file` is also the position of that cell in the encoded
//! state. Pieces are `Copy` values living in their cell; the cell index doubles
//! as the piece handle, so nothing outside the board holds a reference into it.

use crate::game_state::chess_rules::{
    home_rank, pawn_start_rank, BACK_RANK_LAYOUT, STANDARD_HEIGHT, STANDARD_WIDTH,
};
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::is_square_attacked;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: i8,
    height: i8,
    cells: Vec<Option<Piece>>,
}

impl Default for Board {
    fn default() -> Self {
        Self::empty(STANDARD_WIDTH, STANDARD_HEIGHT)
    }
}

impl Board {
    pub fn empty(width: i8, height: i8) -> Self {
        assert!(width > 0 && height > 0, "board extents must be positive");
        Self {
            width,
            height,
            cells: vec![None; width as usize * height as usize],
        }
    }

    /// Standard opening layout: pawns on the second ranks, back rank pieces in
    /// rook-knight-bishop-queen-king-bishop-knight-rook order.
    pub fn starting_position() -> Self {
        let mut board = Self::empty(STANDARD_WIDTH, STANDARD_HEIGHT);
        for color in [Color::White, Color::Black] {
            let back = home_rank(color, board.height);
            let pawns = pawn_start_rank(color, board.height);
            for (file, kind) in BACK_RANK_LAYOUT.iter().enumerate() {
                let file = file as i8;
                board.place(Coordinate::new(file, back), *kind, color);
                board.place(Coordinate::new(file, pawns), PieceKind::Pawn, color);
            }
        }
        board
    }

    /// Builds a board from `(color, kind)` cells in row-major order.
    pub fn from_cells(width: i8, height: i8, cells: &[Option<(Color, PieceKind)>]) -> Self {
        let mut board = Self::empty(width, height);
        assert_eq!(
            cells.len(),
            board.cells.len(),
            "cell list does not cover a {width}x{height} board"
        );
        for (index, cell) in cells.iter().enumerate() {
            if let Some((color, kind)) = cell {
                let location = board.coordinate_of(index);
                board.place(location, *kind, *color);
            }
        }
        board
    }

    /// `(width, height)` of the board.
    #[inline]
    pub fn size(&self) -> (i8, i8) {
        (self.width, self.height)
    }

    #[inline]
    pub fn in_bounds(&self, location: Coordinate) -> bool {
        (0..self.width).contains(&location.file) && (0..self.height).contains(&location.rank)
    }

    #[inline]
    fn index_of(&self, location: Coordinate) -> usize {
        assert!(
            self.in_bounds(location),
            "coordinate {location} is outside the {}x{} board",
            self.width,
            self.height
        );
        location.rank as usize * self.width as usize + location.file as usize
    }

    #[inline]
    pub fn coordinate_of(&self, index: usize) -> Coordinate {
        let width = self.width as usize;
        Coordinate::new((index % width) as i8, (index / width) as i8)
    }

    /// Piece on `location`. Panics if `location` is off the board; callers
    /// bounds-check first.
    #[inline]
    pub fn get(&self, location: Coordinate) -> Option<Piece> {
        self.cells[self.index_of(location)]
    }

    #[inline]
    pub fn is_empty(&self, location: Coordinate) -> bool {
        self.get(location).is_none()
    }

    /// Puts a new piece on `location`, replacing any occupant.
    pub fn place(&mut self, location: Coordinate, kind: PieceKind, color: Color) -> Option<Piece> {
        let index = self.index_of(location);
        self.cells[index].replace(Piece::new(kind, color, location))
    }

    pub fn remove(&mut self, location: Coordinate) -> Option<Piece> {
        let index = self.index_of(location);
        self.cells[index].take()
    }

    /// Transplants the occupant of `from` onto `to`, returning whatever stood
    /// on `to` before. The moved piece's stored location is updated.
    pub fn move_piece(&mut self, from: Coordinate, to: Coordinate) -> Option<Piece> {
        let mut piece = self.remove(from)?;
        piece.location = to;
        let index = self.index_of(to);
        self.cells[index].replace(piece)
    }

    /// Swaps the kind of the piece on `location`, keeping color and location.
    pub fn set_kind(&mut self, location: Coordinate, kind: PieceKind) {
        let index = self.index_of(location);
        if let Some(piece) = self.cells[index].as_mut() {
            piece.kind = kind;
        }
    }

    /// Occupied cells in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = Piece> + '_ {
        self.cells.iter().flatten().copied()
    }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = Piece> + '_ {
        self.pieces().filter(move |piece| piece.color == color)
    }

    /// First king of `color` in row-major order.
    pub fn king_of(&self, color: Color) -> Option<Piece> {
        self.pieces_of(color)
            .find(|piece| piece.kind == PieceKind::King)
    }

    /// True when no piece of the opposing color can reach `location` in one
    /// move on the current board.
    pub fn is_square_safe(&self, location: Coordinate, friendly: Color) -> bool {
        !is_square_attacked(self, location, friendly.opposite())
    }

    /// Row-major `(color, kind)` view of every cell.
    pub fn cells(&self) -> Vec<Option<(Color, PieceKind)>> {
        self.cells
            .iter()
            .map(|cell| cell.map(|piece| (piece.color, piece.kind)))
            .collect()
    }

    /// Coordinates of every cell in row-major order.
    pub fn coordinates(&self) -> impl Iterator<Item = Coordinate> + '_ {
        (0..self.cells.len()).map(|index| self.coordinate_of(index))
    }
}
