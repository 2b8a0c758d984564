//! Binary encoding framework for the operation wire format.
//!
//! Everything that goes over the wire implements [`Codec`], reading from a
//! [`Decoder`] and writing to an [`Encoder`].  Fixed-width integers are
//! big-endian, variable-width integers use the zarith encoding from the
//! [`zarith`] module.

mod buf_decoder;
pub use buf_decoder::BufDecoder;

mod errors;
pub use errors::{CodecError, CodecResult};

mod len_bytes;
pub use len_bytes::{LenBytes, MAX_DYNAMIC_LEN};

mod macros;

mod types;
pub use types::{Codec, Decoder, Encoder};

mod util;
pub use util::{decode_buf_exact, encode_to_vec, expect_tag};

pub mod zarith;
pub use zarith::{Int, Nat};

#[cfg(test)]
mod tests;
