//! Operations: what they contain, how they go over the wire, and how they get
//! signed and hashed.
//!
//! An [`Operation`] is a branch plus a non-empty list of
//! [`OperationContents`].  Signing one with [`SignedOperation::sign`] gives
//! something that can be broadcast, and whose [`OperationHash`] is the
//! blake2b-256 digest of the signed bytes.

mod contents;
mod contract_id;
mod error;
mod hashes;
mod operation;
mod parameters;
mod script;
#[cfg(feature = "serde")]
mod serde;
mod signed;

pub use contents::{
    ContentsTag, Delegation, Endorsement, ManagerFields, OperationContents, Origination,
    Revelation, Sourced, Transaction,
};
pub use contract_id::{
    AccountType, CONTRACT_ID_LEN, ContractId, PUBLIC_KEY_HASH_LEN, PublicKeyHash,
};
pub use error::{OpError, OpResult};
pub use hashes::{BranchId, OperationHash};
pub use operation::Operation;
pub use parameters::{Entrypoint, TransactionParameters};
pub use script::ContractScript;
pub use signed::{DecodeConfig, SignatureInference, SignedOperation};

#[cfg(test)]
use num_bigint as _;
#[cfg(test)]
use proptest as _;
#[cfg(test)]
use serde_json as _;
