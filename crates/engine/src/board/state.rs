use super::{Board, LegalMove, MoveKind};
use crate::piece::Piece;
use crate::types::*;

/// What committing a move changed on the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppliedMove {
    pub mv: LegalMove,
    pub captured: Option<Piece>,
    /// The queen that replaced the pawn, if the move promoted.
    pub promoted: Option<PieceId>,
}

impl AppliedMove {
    pub fn is_en_passant(&self) -> bool {
        matches!(self.mv.kind, MoveKind::EnPassant(_))
    }
}

impl Board {
    /// Commit a move produced by `check_move` on this same board.
    ///
    /// Removes the captured piece (for en passant the pawn beside the target),
    /// moves the piece, refreshes en passant eligibility and promotes a pawn
    /// that reached the last row.
    pub(crate) fn apply_move(&mut self, mv: &LegalMove) -> AppliedMove {
        let captured = mv.captured().and_then(|id| self.remove(id));

        let moved = self.piece_mut(mv.piece).map(|piece| {
            piece.commit_position(mv.to);
            (piece.kind(), piece.color())
        });

        let double_stepped = (mv.kind == MoveKind::DoubleStep).then_some(mv.piece);
        self.update_en_passant_eligibility(double_stepped);

        let promoted = match moved {
            Some((PieceKind::Pawn, color)) if mv.to.row() == color.promotion_row() => self.promote(mv.piece),
            _ => None,
        };

        AppliedMove {
            mv: *mv,
            captured,
            promoted,
        }
    }

    /// Clear every pawn's en passant flag, except on the pawn that just
    /// advanced two squares.
    fn update_en_passant_eligibility(&mut self, double_stepped: Option<PieceId>) {
        for piece in self.pieces.iter_mut() {
            piece.set_en_passant_eligible(Some(piece.id()) == double_stepped);
        }
    }

    fn promote(&mut self, pawn: PieceId) -> Option<PieceId> {
        let pawn = self.remove(pawn)?;
        let queen = self.spawn(PieceKind::Queen, pawn.color(), pawn.square());
        if let Some(piece) = self.piece_mut(queen) {
            piece.mark_moved();
        }
        Some(queen)
    }
}
