use crate::error::EngineError;
use crate::piece::Piece;
use crate::types::*;

// Declare submodules
pub mod moves;
pub mod state;
pub mod validation;

pub use state::AppliedMove;
pub use validation::{LegalMove, MoveKind};

/// The pieces on the board, in placement order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    pieces: Vec<Piece>,
    next_id: u32,
}

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

impl Board {
    /// Standard starting position.
    pub fn new() -> Self {
        let mut board = Self::empty();
        board.setup_starting_position();
        board
    }

    pub fn empty() -> Self {
        Self {
            pieces: Vec::with_capacity(32),
            next_id: 0,
        }
    }

    fn setup_starting_position(&mut self) {
        for color in [Color::White, Color::Black] {
            for square in Square::all() {
                if square.row() == color.pawn_row() {
                    self.spawn(PieceKind::Pawn, color, square);
                } else if square.row() == color.home_row() {
                    self.spawn(BACK_RANK[square.column() as usize], color, square);
                }
            }
        }
    }

    /// Put a new piece on an empty square.
    pub fn place(&mut self, kind: PieceKind, color: Color, square: Square) -> Result<PieceId, EngineError> {
        if self.piece_at(square).is_some() {
            return Err(EngineError::SquareOccupied(square));
        }
        Ok(self.spawn(kind, color, square))
    }

    fn spawn(&mut self, kind: PieceKind, color: Color, square: Square) -> PieceId {
        let id = PieceId(self.next_id);
        self.next_id += 1;
        self.pieces.push(Piece::new(id, kind, color, square));
        id
    }

    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        self.pieces.iter().find(|p| p.id() == id)
    }

    pub(crate) fn piece_mut(&mut self, id: PieceId) -> Option<&mut Piece> {
        self.pieces.iter_mut().find(|p| p.id() == id)
    }

    /// The piece shown on `square`, if any.
    pub fn piece_at(&self, square: Square) -> Option<&Piece> {
        self.pieces.iter().find(|p| p.square() == square)
    }

    pub fn is_occupied(&self, column: i32, row: i32) -> bool {
        self.pieces
            .iter()
            .any(|p| p.square().column() == column && p.square().row() == row)
    }

    pub(crate) fn remove(&mut self, id: PieceId) -> Option<Piece> {
        let index = self.pieces.iter().position(|p| p.id() == id)?;
        Some(self.pieces.remove(index))
    }

    pub fn pieces(&self) -> impl Iterator<Item = &Piece> {
        self.pieces.iter()
    }

    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// Every piece as (kind, color, square), for rendering.
    pub fn snapshot(&self) -> Vec<PieceRef> {
        self.pieces.iter().map(Piece::to_ref).collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(name: &str) -> Square {
        Square::from_algebraic(name).unwrap()
    }

    #[test]
    fn starting_position_has_32_pieces_on_distinct_squares() {
        let board = Board::new();
        assert_eq!(board.len(), 32);

        let mut squares: Vec<Square> = board.pieces().map(|p| p.square()).collect();
        squares.sort_by_key(|s| (s.row(), s.column()));
        squares.dedup();
        assert_eq!(squares.len(), 32);
    }

    #[test]
    fn starting_position_layout() {
        let board = Board::new();

        let king = board.piece_at(sq("e1")).unwrap();
        assert_eq!((king.kind(), king.color()), (PieceKind::King, Color::White));
        assert_eq!((king.square().column(), king.square().row()), (4, 7));

        let queen = board.piece_at(sq("d8")).unwrap();
        assert_eq!((queen.kind(), queen.color()), (PieceKind::Queen, Color::Black));

        for column in 0..8 {
            let white = board.piece_at(Square::new(column, 6).unwrap()).unwrap();
            assert_eq!((white.kind(), white.color()), (PieceKind::Pawn, Color::White));
            let black = board.piece_at(Square::new(column, 1).unwrap()).unwrap();
            assert_eq!((black.kind(), black.color()), (PieceKind::Pawn, Color::Black));
        }

        for row in 2..6 {
            for column in 0..8 {
                assert!(!board.is_occupied(column, row));
            }
        }
    }

    #[test]
    fn place_refuses_occupied_squares() {
        let mut board = Board::empty();
        let id = board.place(PieceKind::Rook, Color::White, sq("a1")).unwrap();
        assert_eq!(board.piece(id).unwrap().kind(), PieceKind::Rook);

        let err = board.place(PieceKind::Knight, Color::Black, sq("a1")).unwrap_err();
        assert!(matches!(err, EngineError::SquareOccupied(s) if s == sq("a1")));
        assert_eq!(board.len(), 1);
    }

    #[test]
    fn ids_are_never_reused_after_removal() {
        let mut board = Board::empty();
        let first = board.place(PieceKind::Pawn, Color::White, sq("a2")).unwrap();
        assert!(board.remove(first).is_some());
        assert!(board.remove(first).is_none());

        let second = board.place(PieceKind::Pawn, Color::White, sq("a2")).unwrap();
        assert_ne!(first, second);
        assert!(board.piece(first).is_none());
    }
}
