use crate::types::{Color, PieceId, PieceKind, PieceRef, Square};

/// Kind-specific state of a piece. Only the pawn carries extra data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// `en_passant_eligible` is set only during the opponent's turn right
    /// after this pawn advanced two squares.
    Pawn { en_passant_eligible: bool },
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl Role {
    pub fn fresh(kind: PieceKind) -> Self {
        match kind {
            PieceKind::Pawn => Role::Pawn {
                en_passant_eligible: false,
            },
            PieceKind::Knight => Role::Knight,
            PieceKind::Bishop => Role::Bishop,
            PieceKind::Rook => Role::Rook,
            PieceKind::Queen => Role::Queen,
            PieceKind::King => Role::King,
        }
    }

    pub fn kind(self) -> PieceKind {
        match self {
            Role::Pawn { .. } => PieceKind::Pawn,
            Role::Knight => PieceKind::Knight,
            Role::Bishop => PieceKind::Bishop,
            Role::Rook => PieceKind::Rook,
            Role::Queen => PieceKind::Queen,
            Role::King => PieceKind::King,
        }
    }
}

/// One piece on the board.
///
/// `square` is where the piece is currently shown; while a move is being
/// previewed it follows the drag. `previous_square` is where it stood after
/// the last committed move and is the origin for every legality check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    id: PieceId,
    color: Color,
    role: Role,
    square: Square,
    previous_square: Square,
    has_moved: bool,
}

impl Piece {
    pub(crate) fn new(id: PieceId, kind: PieceKind, color: Color, square: Square) -> Self {
        Self {
            id,
            color,
            role: Role::fresh(kind),
            square,
            previous_square: square,
            has_moved: false,
        }
    }

    pub fn id(&self) -> PieceId {
        self.id
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn kind(&self) -> PieceKind {
        self.role.kind()
    }

    pub fn square(&self) -> Square {
        self.square
    }

    pub fn previous_square(&self) -> Square {
        self.previous_square
    }

    pub fn has_moved(&self) -> bool {
        self.has_moved
    }

    pub fn is_en_passant_eligible(&self) -> bool {
        matches!(
            self.role,
            Role::Pawn {
                en_passant_eligible: true
            }
        )
    }

    /// No-op for anything but a pawn.
    pub(crate) fn set_en_passant_eligible(&mut self, eligible: bool) {
        if let Role::Pawn {
            en_passant_eligible,
        } = &mut self.role
        {
            *en_passant_eligible = eligible;
        }
    }

    pub(crate) fn mark_moved(&mut self) {
        self.has_moved = true;
    }

    pub(crate) fn drag_to(&mut self, square: Square) {
        self.square = square;
    }

    pub(crate) fn commit_position(&mut self, square: Square) {
        self.square = square;
        self.previous_square = square;
        self.has_moved = true;
    }

    pub fn to_ref(&self) -> PieceRef {
        PieceRef {
            id: self.id,
            kind: self.kind(),
            color: self.color,
            square: self.square,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pawn() -> Piece {
        let e2 = Square::new(4, 6).unwrap();
        Piece::new(PieceId(1), PieceKind::Pawn, Color::White, e2)
    }

    #[test]
    fn drag_moves_only_the_shown_square() {
        let mut piece = pawn();
        let e4 = Square::new(4, 4).unwrap();
        piece.drag_to(e4);
        assert_eq!(piece.square(), e4);
        assert_eq!(piece.previous_square(), Square::new(4, 6).unwrap());
        assert!(!piece.has_moved());
    }

    #[test]
    fn commit_moves_both_positions_and_marks_moved() {
        let mut piece = pawn();
        let e3 = Square::new(4, 5).unwrap();
        piece.commit_position(e3);
        assert_eq!(piece.square(), e3);
        assert_eq!(piece.previous_square(), e3);
        assert!(piece.has_moved());
    }

    #[test]
    fn en_passant_flag_only_sticks_to_pawns() {
        let mut piece = pawn();
        piece.set_en_passant_eligible(true);
        assert!(piece.is_en_passant_eligible());
        piece.set_en_passant_eligible(false);
        assert!(!piece.is_en_passant_eligible());

        let mut rook = Piece::new(PieceId(2), PieceKind::Rook, Color::Black, Square::new(0, 0).unwrap());
        rook.set_en_passant_eligible(true);
        assert!(!rook.is_en_passant_eligible());
        assert_eq!(rook.role(), Role::Rook);
    }
}
