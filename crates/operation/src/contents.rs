//! The kinds of contents an operation can carry.
//!
//! Each kind starts with its [`ContentsTag`].  The manager kinds (everything
//! but endorsements) then share a common header, see [`ManagerFields`].

use tracing::*;
use tzproto_codec::{Codec, CodecError, Decoder, Encoder, Nat, expect_tag};
use tzproto_keys::PublicKey;

use crate::{ContractId, ContractScript, PublicKeyHash, TransactionParameters};

/// Tag byte that starts each kind of contents.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum ContentsTag {
    /// [`Endorsement`].
    Endorsement = 0,
    /// [`Revelation`].
    Revelation = 107,
    /// [`Transaction`].
    Transaction = 108,
    /// [`Origination`].
    Origination = 109,
    /// [`Delegation`].
    Delegation = 110,
}

impl ContentsTag {
    /// Gets the tag byte.
    pub const fn byte(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for ContentsTag {
    type Error = CodecError;

    fn try_from(b: u8) -> Result<Self, Self::Error> {
        Ok(match b {
            0 => Self::Endorsement,
            107 => Self::Revelation,
            108 => Self::Transaction,
            109 => Self::Origination,
            110 => Self::Delegation,
            _ => return Err(CodecError::InvalidVariant("operation contents", b)),
        })
    }
}

/// Header shared by every manager operation.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct ManagerFields {
    /// Account paying for and signing the operation.
    pub source: PublicKeyHash,
    /// Fee in mutez.
    pub fee: Nat,
    /// The source's next counter value.
    pub counter: Nat,
    /// Gas limit.
    pub gas_limit: Nat,
    /// Storage limit.
    pub storage_limit: Nat,
}

impl ManagerFields {
    /// Constructs a new instance.
    pub fn new(
        source: PublicKeyHash,
        fee: impl Into<Nat>,
        counter: impl Into<Nat>,
        gas_limit: impl Into<Nat>,
        storage_limit: impl Into<Nat>,
    ) -> Self {
        Self {
            source,
            fee: fee.into(),
            counter: counter.into(),
            gas_limit: gas_limit.into(),
            storage_limit: storage_limit.into(),
        }
    }
}

impl Codec for ManagerFields {
    fn decode(dec: &mut impl Decoder) -> Result<Self, CodecError> {
        Ok(Self {
            source: PublicKeyHash::decode(dec)?,
            fee: Nat::decode(dec)?,
            counter: Nat::decode(dec)?,
            gas_limit: Nat::decode(dec)?,
            storage_limit: Nat::decode(dec)?,
        })
    }

    fn encode(&self, enc: &mut impl Encoder) -> Result<(), CodecError> {
        self.source.encode(enc)?;
        self.fee.encode(enc)?;
        self.counter.encode(enc)?;
        self.gas_limit.encode(enc)?;
        self.storage_limit.encode(enc)
    }
}

/// Contents that are paid for and signed by a source account.
pub trait Sourced {
    /// Gets the manager header.
    fn manager(&self) -> &ManagerFields;

    /// Gets the source account.
    fn source(&self) -> &PublicKeyHash {
        &self.manager().source
    }
}

/// Publishes the source's public key.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Revelation {
    /// Manager header.
    pub manager: ManagerFields,
    /// The key being revealed.
    pub public_key: PublicKey,
}

impl Revelation {
    /// Wire tag.
    pub const TAG: ContentsTag = ContentsTag::Revelation;
}

impl Codec for Revelation {
    fn decode(dec: &mut impl Decoder) -> Result<Self, CodecError> {
        expect_tag(dec, Self::TAG.byte())?;
        Ok(Self {
            manager: ManagerFields::decode(dec)?,
            public_key: PublicKey::decode(dec)?,
        })
    }

    fn encode(&self, enc: &mut impl Encoder) -> Result<(), CodecError> {
        enc.write_buf(&[Self::TAG.byte()])?;
        self.manager.encode(enc)?;
        self.public_key.encode(enc)
    }
}

/// Moves funds, possibly calling a contract.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Transaction {
    /// Manager header.
    pub manager: ManagerFields,
    /// Amount in mutez.
    pub amount: Nat,
    /// Receiving account.
    pub destination: ContractId,
    /// Contract call, if any.
    pub parameters: Option<TransactionParameters>,
}

impl Transaction {
    /// Wire tag.
    pub const TAG: ContentsTag = ContentsTag::Transaction;
}

impl Codec for Transaction {
    fn decode(dec: &mut impl Decoder) -> Result<Self, CodecError> {
        expect_tag(dec, Self::TAG.byte())?;
        Ok(Self {
            manager: ManagerFields::decode(dec)?,
            amount: Nat::decode(dec)?,
            destination: ContractId::decode(dec)?,
            parameters: Option::decode(dec)?,
        })
    }

    fn encode(&self, enc: &mut impl Encoder) -> Result<(), CodecError> {
        enc.write_buf(&[Self::TAG.byte()])?;
        self.manager.encode(enc)?;
        self.amount.encode(enc)?;
        self.destination.encode(enc)?;
        self.parameters.encode(enc)
    }
}

/// Creates a new contract account.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Origination {
    /// Manager header.
    pub manager: ManagerFields,
    /// Starting balance in mutez.
    pub balance: Nat,
    /// Baker to delegate to, if any.
    pub delegate: Option<PublicKeyHash>,
    /// The new contract's code and storage.
    pub script: ContractScript,
}

impl Origination {
    /// Wire tag.
    pub const TAG: ContentsTag = ContentsTag::Origination;
}

impl Codec for Origination {
    fn decode(dec: &mut impl Decoder) -> Result<Self, CodecError> {
        expect_tag(dec, Self::TAG.byte())?;
        Ok(Self {
            manager: ManagerFields::decode(dec)?,
            balance: Nat::decode(dec)?,
            delegate: Option::decode(dec)?,
            script: ContractScript::decode(dec)?,
        })
    }

    fn encode(&self, enc: &mut impl Encoder) -> Result<(), CodecError> {
        enc.write_buf(&[Self::TAG.byte()])?;
        self.manager.encode(enc)?;
        self.balance.encode(enc)?;
        self.delegate.encode(enc)?;
        self.script.encode(enc)
    }
}

/// Sets or clears the source's delegate.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Delegation {
    /// Manager header.
    pub manager: ManagerFields,
    /// New delegate, `None` to withdraw.
    pub delegate: Option<PublicKeyHash>,
}

impl Delegation {
    /// Wire tag.
    pub const TAG: ContentsTag = ContentsTag::Delegation;
}

impl Codec for Delegation {
    fn decode(dec: &mut impl Decoder) -> Result<Self, CodecError> {
        expect_tag(dec, Self::TAG.byte())?;
        Ok(Self {
            manager: ManagerFields::decode(dec)?,
            delegate: Option::decode(dec)?,
        })
    }

    fn encode(&self, enc: &mut impl Encoder) -> Result<(), CodecError> {
        enc.write_buf(&[Self::TAG.byte()])?;
        self.manager.encode(enc)?;
        self.delegate.encode(enc)
    }
}

/// A baker's endorsement of a block level.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Endorsement {
    /// Endorsed level.
    pub level: i32,
}

impl Endorsement {
    /// Wire tag.
    pub const TAG: ContentsTag = ContentsTag::Endorsement;
}

impl Codec for Endorsement {
    fn decode(dec: &mut impl Decoder) -> Result<Self, CodecError> {
        expect_tag(dec, Self::TAG.byte())?;
        Ok(Self {
            level: i32::decode(dec)?,
        })
    }

    fn encode(&self, enc: &mut impl Encoder) -> Result<(), CodecError> {
        enc.write_buf(&[Self::TAG.byte()])?;
        self.level.encode(enc)
    }
}

macro_rules! impl_sourced {
    ($($ty:ident),*) => {
        $(
            impl Sourced for $ty {
                fn manager(&self) -> &ManagerFields {
                    &self.manager
                }
            }

            impl From<$ty> for OperationContents {
                fn from(v: $ty) -> Self {
                    Self::$ty(v)
                }
            }
        )*
    };
}

impl_sourced!(Revelation, Transaction, Origination, Delegation);

impl From<Endorsement> for OperationContents {
    fn from(v: Endorsement) -> Self {
        Self::Endorsement(v)
    }
}

/// One entry in an operation's contents list.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum OperationContents {
    /// Key reveal.
    Revelation(Revelation),
    /// Transfer or contract call.
    Transaction(Transaction),
    /// Contract creation.
    Origination(Origination),
    /// Delegate change.
    Delegation(Delegation),
    /// Endorsement.
    Endorsement(Endorsement),
}

impl OperationContents {
    /// Gets the wire tag.
    pub fn tag(&self) -> ContentsTag {
        match self {
            Self::Revelation(_) => Revelation::TAG,
            Self::Transaction(_) => Transaction::TAG,
            Self::Origination(_) => Origination::TAG,
            Self::Delegation(_) => Delegation::TAG,
            Self::Endorsement(_) => Endorsement::TAG,
        }
    }

    /// Gets the manager view, for contents that have a source.
    pub fn as_sourced(&self) -> Option<&dyn Sourced> {
        match self {
            Self::Revelation(c) => Some(c as &dyn Sourced),
            Self::Transaction(c) => Some(c as &dyn Sourced),
            Self::Origination(c) => Some(c as &dyn Sourced),
            Self::Delegation(c) => Some(c as &dyn Sourced),
            Self::Endorsement(_) => None,
        }
    }

    /// Gets the source account, for contents that have one.
    pub fn source(&self) -> Option<ContractId> {
        self.as_sourced().map(|c| ContractId::Implicit(*c.source()))
    }
}

/// Dispatches on the leading tag without consuming it.
impl Codec for OperationContents {
    fn decode(dec: &mut impl Decoder) -> Result<Self, CodecError> {
        let tag = ContentsTag::try_from(dec.peek_u8().ok_or(CodecError::OutOfBounds)?)?;
        trace!(?tag, remaining = dec.remaining(), "decoding contents");
        Ok(match tag {
            ContentsTag::Revelation => Self::Revelation(Revelation::decode(dec)?),
            ContentsTag::Transaction => Self::Transaction(Transaction::decode(dec)?),
            ContentsTag::Origination => Self::Origination(Origination::decode(dec)?),
            ContentsTag::Delegation => Self::Delegation(Delegation::decode(dec)?),
            ContentsTag::Endorsement => Self::Endorsement(Endorsement::decode(dec)?),
        })
    }

    fn encode(&self, enc: &mut impl Encoder) -> Result<(), CodecError> {
        match self {
            Self::Revelation(c) => c.encode(enc),
            Self::Transaction(c) => c.encode(enc),
            Self::Origination(c) => c.encode(enc),
            Self::Delegation(c) => c.encode(enc),
            Self::Endorsement(c) => c.encode(enc),
        }
    }
}
