use super::kind::Kind;
use serde::Deserialize;
use serde::Serialize;

/// Every printable card face. Digits keep their wire spelling ("0".."9");
/// the rest travel lowercase.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum Face {
    #[serde(rename = "0")]
    Zero,
    #[serde(rename = "1")]
    One,
    #[serde(rename = "2")]
    Two,
    #[serde(rename = "3")]
    Three,
    #[serde(rename = "4")]
    Four,
    #[serde(rename = "5")]
    Five,
    #[serde(rename = "6")]
    Six,
    #[serde(rename = "7")]
    Seven,
    #[serde(rename = "8")]
    Eight,
    #[serde(rename = "9")]
    Nine,
    #[serde(rename = "skip")]
    Skip,
    #[serde(rename = "reverse")]
    Reverse,
    #[serde(rename = "draw2")]
    Draw2,
    #[serde(rename = "wild")]
    Wild,
    #[serde(rename = "draw4")]
    Draw4,
}

impl Face {
    pub const NUMBERS: [Self; 10] = [
        Self::Zero,
        Self::One,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
    ];
    pub const ACTIONS: [Self; 3] = [Self::Skip, Self::Reverse, Self::Draw2];

    pub fn kind(&self) -> Kind {
        match self {
            Self::Skip | Self::Reverse | Self::Draw2 => Kind::Action,
            Self::Wild | Self::Draw4 => Kind::Wild,
            _ => Kind::Number,
        }
    }
}

impl std::fmt::Display for Face {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Zero => "0",
                Self::One => "1",
                Self::Two => "2",
                Self::Three => "3",
                Self::Four => "4",
                Self::Five => "5",
                Self::Six => "6",
                Self::Seven => "7",
                Self::Eight => "8",
                Self::Nine => "9",
                Self::Skip => "skip",
                Self::Reverse => "reverse",
                Self::Draw2 => "draw2",
                Self::Wild => "wild",
                Self::Draw4 => "draw4",
            }
        )
    }
}
