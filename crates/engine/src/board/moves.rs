use super::{Board, LegalMove};
use crate::types::*;

impl Board {
    /// Every legal move for the piece `id`, in square order from a8 to h1.
    pub fn legal_moves(&self, id: PieceId) -> Vec<LegalMove> {
        Square::all()
            .filter_map(|target| self.check_move(id, target.column(), target.row()))
            .collect()
    }

    /// Target squares only, for highlighting.
    pub fn legal_targets(&self, id: PieceId) -> Vec<Square> {
        self.legal_moves(id).into_iter().map(|mv| mv.to).collect()
    }

    /// Every legal move of every piece of `color`.
    pub fn all_legal_moves(&self, color: Color) -> Vec<LegalMove> {
        self.pieces()
            .filter(|p| p.color() == color)
            .flat_map(|p| self.legal_moves(p.id()))
            .collect()
    }
}
