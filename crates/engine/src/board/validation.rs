use super::Board;
use crate::piece::{Piece, Role};
use crate::types::*;

/// What a legal move does besides relocating the piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveKind {
    Quiet,
    Capture(PieceId),
    /// Pawn advancing two squares from its starting square.
    DoubleStep,
    /// Pawn capturing a just-double-stepped pawn that stands beside it.
    EnPassant(PieceId),
}

impl MoveKind {
    pub fn captured(self) -> Option<PieceId> {
        match self {
            MoveKind::Capture(id) | MoveKind::EnPassant(id) => Some(id),
            MoveKind::Quiet | MoveKind::DoubleStep => None,
        }
    }
}

/// A move that passed the legality check, ready to be committed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LegalMove {
    pub piece: PieceId,
    pub from: Square,
    pub to: Square,
    pub kind: MoveKind,
}

impl LegalMove {
    pub fn captured(&self) -> Option<PieceId> {
        self.kind.captured()
    }
}

impl Board {
    /// Check whether `id` may move to (column, row) from its previous square.
    ///
    /// Pure: the board is not touched. Off-board targets and the piece's own
    /// square are never legal.
    pub fn check_move(&self, id: PieceId, column: i32, row: i32) -> Option<LegalMove> {
        let piece = self.piece(id)?;
        let from = piece.previous_square();
        let to = Square::new(column, row).ok()?;
        if to == from {
            return None;
        }

        let dc = column - from.column();
        let dr = row - from.row();
        let kind = match piece.role() {
            Role::Pawn { .. } => self.check_pawn_move(piece, to, dc, dr)?,
            Role::Rook => {
                if !self.is_straight_path_clear(from, column, row) {
                    return None;
                }
                self.destination_kind(piece, column, row)?
            }
            Role::Bishop => {
                if !self.is_diagonal_path_clear(from, column, row) {
                    return None;
                }
                self.destination_kind(piece, column, row)?
            }
            Role::Queen => {
                if !self.is_straight_path_clear(from, column, row)
                    && !self.is_diagonal_path_clear(from, column, row)
                {
                    return None;
                }
                self.destination_kind(piece, column, row)?
            }
            Role::Knight => {
                if !matches!((dc.abs(), dr.abs()), (2, 1) | (1, 2)) {
                    return None;
                }
                self.destination_kind(piece, column, row)?
            }
            Role::King => {
                let (dc, dr) = (dc.abs(), dr.abs());
                if dc + dr != 1 && dc * dr != 1 {
                    return None;
                }
                self.destination_kind(piece, column, row)?
            }
        };

        Some(LegalMove {
            piece: id,
            from,
            to,
            kind,
        })
    }

    pub fn is_legal_move(&self, id: PieceId, column: i32, row: i32) -> bool {
        self.check_move(id, column, row).is_some()
    }

    fn check_pawn_move(&self, pawn: &Piece, to: Square, dc: i32, dr: i32) -> Option<MoveKind> {
        let dir = pawn.color().forward();
        let from = pawn.previous_square();
        let (column, row) = (to.column(), to.row());

        // Single forward
        if dc == 0 && dr == dir {
            return self
                .destination_occupant(pawn.id(), column, row)
                .is_none()
                .then_some(MoveKind::Quiet);
        }

        // Double forward
        if dc == 0 && dr == 2 * dir && !pawn.has_moved() {
            let intermediate_row = from.row() + dir;
            let clear = self.destination_occupant(pawn.id(), column, intermediate_row).is_none()
                && self.destination_occupant(pawn.id(), column, row).is_none();
            return clear.then_some(MoveKind::DoubleStep);
        }

        if dc.abs() == 1 && dr == dir {
            // Diagonal capture
            if let Some(occupant) = self.destination_occupant(pawn.id(), column, row) {
                return (occupant.color() != pawn.color()).then_some(MoveKind::Capture(occupant.id()));
            }

            // En passant: the passed pawn stands beside us, on our starting row
            let passed = self.destination_occupant(pawn.id(), column, from.row())?;
            if passed.color() != pawn.color() && passed.is_en_passant_eligible() {
                return Some(MoveKind::EnPassant(passed.id()));
            }
        }

        None
    }

    /// The piece on (column, row), ignoring `mover` itself.
    pub fn destination_occupant(&self, mover: PieceId, column: i32, row: i32) -> Option<&Piece> {
        self.pieces().find(|p| {
            p.id() != mover && p.square().column() == column && p.square().row() == row
        })
    }

    /// Quiet if the square is empty, a capture if an opponent holds it,
    /// `None` if one of our own pieces does.
    fn destination_kind(&self, mover: &Piece, column: i32, row: i32) -> Option<MoveKind> {
        match self.destination_occupant(mover.id(), column, row) {
            None => Some(MoveKind::Quiet),
            Some(occupant) if occupant.color() != mover.color() => Some(MoveKind::Capture(occupant.id())),
            Some(_) => None,
        }
    }

    pub fn is_destination_valid(&self, mover: &Piece, column: i32, row: i32) -> bool {
        is_within_board(column, row) && self.destination_kind(mover, column, row).is_some()
    }

    /// Horizontal or vertical, non-zero, on the board, nothing in between.
    pub fn is_straight_path_clear(&self, from: Square, column: i32, row: i32) -> bool {
        if !is_within_board(column, row) {
            return false;
        }
        let dc = column - from.column();
        let dr = row - from.row();
        if (dc == 0) == (dr == 0) {
            return false;
        }
        self.is_path_clear(from, column, row)
    }

    /// Equal non-zero column and row distance, on the board, nothing in between.
    pub fn is_diagonal_path_clear(&self, from: Square, column: i32, row: i32) -> bool {
        if !is_within_board(column, row) {
            return false;
        }
        let dc = column - from.column();
        let dr = row - from.row();
        if dc == 0 || dc.abs() != dr.abs() {
            return false;
        }
        self.is_path_clear(from, column, row)
    }

    // Walks the squares strictly between `from` and the target.
    fn is_path_clear(&self, from: Square, column: i32, row: i32) -> bool {
        let step_column = (column - from.column()).signum();
        let step_row = (row - from.row()).signum();

        let (mut c, mut r) = (from.column() + step_column, from.row() + step_row);
        while (c, r) != (column, row) {
            if self.is_occupied(c, r) {
                return false;
            }
            c += step_column;
            r += step_row;
        }
        true
    }
}
