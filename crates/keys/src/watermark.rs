/// Leading byte that says what a signed payload is for, so a signature over
/// one kind of payload can't be replayed as another.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum Watermark {
    /// Block headers.
    BlockHeader = 1,
    /// Endorsements.
    Endorsement = 2,
    /// Generic operations.
    Operation = 3,
    /// Application defined payloads.
    Custom = 4,
    /// Human readable text messages.
    Text = 5,
}

impl Watermark {
    /// The byte prepended to the message.
    pub const fn byte(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for Watermark {
    type Error = u8;

    fn try_from(b: u8) -> Result<Self, Self::Error> {
        Ok(match b {
            1 => Self::BlockHeader,
            2 => Self::Endorsement,
            3 => Self::Operation,
            4 => Self::Custom,
            5 => Self::Text,
            _ => return Err(b),
        })
    }
}
