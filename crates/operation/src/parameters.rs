//! Smart contract call parameters attached to transactions.

use std::fmt;

use tzproto_codec::{Codec, CodecError, Decoder, Encoder, LenBytes};

use crate::{OpError, OpResult};

const TAG_DEFAULT: u8 = 0;
const TAG_ROOT: u8 = 1;
const TAG_DO: u8 = 2;
const TAG_SET_DELEGATE: u8 = 3;
const TAG_REMOVE_DELEGATE: u8 = 4;
const TAG_NAMED: u8 = 255;

const MAX_NAME_LEN: usize = u8::MAX as usize;

/// Which contract entrypoint a transaction calls.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum Entrypoint {
    /// `%default`.
    #[default]
    Default,
    /// `%root`.
    Root,
    /// `%do`.
    Do,
    /// `%set_delegate`.
    SetDelegate,
    /// `%remove_delegate`.
    RemoveDelegate,
    /// Any other entrypoint, by name.
    Named(String),
}

impl Entrypoint {
    /// Makes a named entrypoint, the name must fit in 255 bytes.
    pub fn named(name: impl Into<String>) -> OpResult<Self> {
        let name = name.into();
        if name.len() > MAX_NAME_LEN {
            return Err(CodecError::OverflowContainer(name.len()).into());
        }
        Ok(Self::Named(name))
    }

    /// Gets the wire tag.
    pub fn tag(&self) -> u8 {
        match self {
            Self::Default => TAG_DEFAULT,
            Self::Root => TAG_ROOT,
            Self::Do => TAG_DO,
            Self::SetDelegate => TAG_SET_DELEGATE,
            Self::RemoveDelegate => TAG_REMOVE_DELEGATE,
            Self::Named(_) => TAG_NAMED,
        }
    }

    /// Gets the entrypoint's name, without the `%`.
    pub fn name(&self) -> OpResult<&str> {
        Ok(match self {
            Self::Default => "default",
            Self::Root => "root",
            Self::Do => "do",
            Self::SetDelegate => "set_delegate",
            Self::RemoveDelegate => "remove_delegate",
            Self::Named(name) if name.is_empty() => return Err(OpError::EntrypointNotNamed),
            Self::Named(name) => name.as_str(),
        })
    }
}

impl fmt::Display for Entrypoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Ok(name) => write!(f, "%{name}"),
            Err(_) => f.write_str("<unnamed entrypoint>"),
        }
    }
}

impl Codec for Entrypoint {
    fn decode(dec: &mut impl Decoder) -> Result<Self, CodecError> {
        Ok(match dec.read_u8()? {
            TAG_DEFAULT => Self::Default,
            TAG_ROOT => Self::Root,
            TAG_DO => Self::Do,
            TAG_SET_DELEGATE => Self::SetDelegate,
            TAG_REMOVE_DELEGATE => Self::RemoveDelegate,
            TAG_NAMED => {
                let len = dec.read_u8()? as usize;
                let raw = dec.read_vec(len)?;
                let name = String::from_utf8(raw).map_err(|e| CodecError::InvalidUtf8(e.utf8_error()))?;
                Self::Named(name)
            }
            tag => return Err(CodecError::InvalidVariant("entrypoint", tag)),
        })
    }

    fn encode(&self, enc: &mut impl Encoder) -> Result<(), CodecError> {
        enc.write_buf(&[self.tag()])?;
        if let Self::Named(name) = self {
            let len = u8::try_from(name.len()).map_err(|_| CodecError::OverflowContainer(name.len()))?;
            enc.write_buf(&[len])?;
            enc.write_buf(name.as_bytes())?;
        }
        Ok(())
    }
}

/// The entrypoint to call and the Micheline encoded argument.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct TransactionParameters {
    entrypoint: Entrypoint,
    value: LenBytes,
}

impl TransactionParameters {
    /// Constructs a new instance, checking the value's size bound.
    pub fn new(entrypoint: Entrypoint, value: Vec<u8>) -> OpResult<Self> {
        Ok(Self {
            entrypoint,
            value: LenBytes::new(value)?,
        })
    }

    /// Gets the entrypoint.
    pub fn entrypoint(&self) -> &Entrypoint {
        &self.entrypoint
    }

    /// Gets the raw argument value.
    pub fn value(&self) -> &[u8] {
        self.value.as_slice()
    }
}

impl Codec for TransactionParameters {
    fn decode(dec: &mut impl Decoder) -> Result<Self, CodecError> {
        let entrypoint = Entrypoint::decode(dec)?;
        let value = LenBytes::decode(dec)?;
        Ok(Self { entrypoint, value })
    }

    fn encode(&self, enc: &mut impl Encoder) -> Result<(), CodecError> {
        self.entrypoint.encode(enc)?;
        self.value.encode(enc)
    }
}
