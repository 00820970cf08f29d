use std::fmt;
use std::str::FromStr;

use crate::error::EngineError;

pub const BOARD_SIZE: i32 = 8;

/// True if (column, row) lies on the 8x8 grid.
pub fn is_within_board(column: i32, row: i32) -> bool {
    (0..BOARD_SIZE).contains(&column) && (0..BOARD_SIZE).contains(&row)
}

/// A square on the board. Column 0 is the a-file, row 0 is the eighth rank
/// (black's back rank), so white pawns start on row 6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    column: u8,
    row: u8,
}

impl Square {
    pub fn new(column: i32, row: i32) -> Result<Self, EngineError> {
        if !is_within_board(column, row) {
            return Err(EngineError::OutOfBounds { column, row });
        }
        Ok(Self {
            column: column as u8,
            row: row as u8,
        })
    }

    pub fn column(&self) -> i32 {
        self.column as i32
    }

    pub fn row(&self) -> i32 {
        self.row as i32
    }

    /// The square `(dc, dr)` away, if it is still on the board.
    pub fn offset(&self, dc: i32, dr: i32) -> Option<Square> {
        Square::new(self.column() + dc, self.row() + dr).ok()
    }

    /// All 64 squares, row by row starting from a8.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE as u8).flat_map(|row| (0..BOARD_SIZE as u8).map(move |column| Square { column, row }))
    }

    pub fn from_algebraic(name: &str) -> Result<Self, EngineError> {
        let bytes = name.trim().as_bytes();
        if bytes.len() != 2 {
            return Err(EngineError::InvalidSquareName(name.to_string()));
        }
        let file = bytes[0].to_ascii_lowercase();
        let rank = bytes[1];
        if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
            return Err(EngineError::InvalidSquareName(name.to_string()));
        }
        Square::new((file - b'a') as i32, (b'8' - rank) as i32)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.column) as char, 8 - self.row)
    }
}

impl FromStr for Square {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Square::from_algebraic(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row step of a pawn of this color.
    pub fn forward(self) -> i32 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    pub fn promotion_row(self) -> i32 {
        match self {
            Color::White => 0,
            Color::Black => BOARD_SIZE - 1,
        }
    }

    pub(crate) fn home_row(self) -> i32 {
        BOARD_SIZE - 1 - self.promotion_row()
    }

    pub(crate) fn pawn_row(self) -> i32 {
        self.home_row() + self.forward()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "white"),
            Color::Black => write!(f, "black"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub fn name(self) -> &'static str {
        match self {
            PieceKind::Pawn => "pawn",
            PieceKind::Knight => "knight",
            PieceKind::Bishop => "bishop",
            PieceKind::Rook => "rook",
            PieceKind::Queen => "queen",
            PieceKind::King => "king",
        }
    }

    pub fn symbol(self, color: Color) -> char {
        match (self, color) {
            (PieceKind::King, Color::White) => '♔',
            (PieceKind::Queen, Color::White) => '♕',
            (PieceKind::Rook, Color::White) => '♖',
            (PieceKind::Bishop, Color::White) => '♗',
            (PieceKind::Knight, Color::White) => '♘',
            (PieceKind::Pawn, Color::White) => '♙',
            (PieceKind::King, Color::Black) => '♚',
            (PieceKind::Queen, Color::Black) => '♛',
            (PieceKind::Rook, Color::Black) => '♜',
            (PieceKind::Bishop, Color::Black) => '♝',
            (PieceKind::Knight, Color::Black) => '♞',
            (PieceKind::Pawn, Color::Black) => '♟',
        }
    }

    /// FEN-style letter: uppercase for white.
    pub fn letter(self, color: Color) -> char {
        let letter = match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        };
        match color {
            Color::White => letter.to_ascii_uppercase(),
            Color::Black => letter,
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Stable identity of a piece, assigned when it is placed and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PieceId(pub(crate) u32);

impl fmt::Display for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Read-only description of a piece, as handed to renderers and callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceRef {
    pub id: PieceId,
    pub kind: PieceKind,
    pub color: Color,
    pub square: Square,
}

impl PieceRef {
    pub fn column(&self) -> i32 {
        self.square.column()
    }

    pub fn row(&self) -> i32 {
        self.square.row()
    }
}
