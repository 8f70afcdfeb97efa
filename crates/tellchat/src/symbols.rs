use std::fmt;

/// A decorative Unicode character the client's chat font renders reliably.
///
/// Useful for badges and list bullets in message text, where arbitrary
/// Unicode tends to fall back to missing-glyph boxes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    WhiteChessKing,
    WhiteChessQueen,
    WhiteChessRook,
    WhiteChessBishop,
    WhiteChessKnight,
    WhiteChessPawn,
    BlackChessKing,
    BlackChessQueen,
    BlackChessRook,
    BlackChessBishop,
    BlackChessKnight,
    BlackChessPawn,
    PointLeft,
    PointRight,
    DigramLesserYang,
    CheckMark,
    HeavyCheckMark,
    BallotX,
    HeavyBallotX,
    HeavyBlackHeart,
    CircledDigitOne,
    CircledDigitTwo,
    CircledDigitThree,
    CircledDigitFour,
    CircledDigitFive,
    CircledDigitSix,
    CircledDigitSeven,
    CircledDigitEight,
    CircledDigitNine,
    LightVerticalBar,
    MediumVerticalBar,
    HeavyVerticalBar,
    Airplane,
    Envelope,
    OutlinedWhiteStar,
    CircledWhiteStar,
}

impl Symbol {
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::WhiteChessKing => '\u{2654}',
            Self::WhiteChessQueen => '\u{2655}',
            Self::WhiteChessRook => '\u{2656}',
            Self::WhiteChessBishop => '\u{2657}',
            Self::WhiteChessKnight => '\u{2658}',
            Self::WhiteChessPawn => '\u{2659}',
            Self::BlackChessKing => '\u{265A}',
            Self::BlackChessQueen => '\u{265B}',
            Self::BlackChessRook => '\u{265C}',
            Self::BlackChessBishop => '\u{265D}',
            Self::BlackChessKnight => '\u{265E}',
            Self::BlackChessPawn => '\u{265F}',
            Self::PointLeft => '\u{261A}',
            Self::PointRight => '\u{261B}',
            Self::DigramLesserYang => '\u{268E}',
            Self::CheckMark => '\u{2713}',
            Self::HeavyCheckMark => '\u{2714}',
            Self::BallotX => '\u{2717}',
            Self::HeavyBallotX => '\u{2718}',
            Self::HeavyBlackHeart => '\u{2764}',
            Self::CircledDigitOne => '\u{2776}',
            Self::CircledDigitTwo => '\u{2777}',
            Self::CircledDigitThree => '\u{2778}',
            Self::CircledDigitFour => '\u{2779}',
            Self::CircledDigitFive => '\u{277A}',
            Self::CircledDigitSix => '\u{277B}',
            Self::CircledDigitSeven => '\u{277C}',
            Self::CircledDigitEight => '\u{277D}',
            Self::CircledDigitNine => '\u{277E}',
            Self::LightVerticalBar => '\u{2758}',
            Self::MediumVerticalBar => '\u{2759}',
            Self::HeavyVerticalBar => '\u{275A}',
            Self::Airplane => '\u{2708}',
            Self::Envelope => '\u{2709}',
            Self::OutlinedWhiteStar => '\u{2729}',
            Self::CircledWhiteStar => '\u{272A}',
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
