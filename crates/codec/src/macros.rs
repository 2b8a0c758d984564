//! Simple macros for basic codec impls.

/// Generates a `Codec` impl for a wrapper type.
#[macro_export]
macro_rules! impl_wrapper_codec {
    ($this:ty => $target:ty) => {
        impl $crate::Codec for $this {
            fn decode(dec: &mut impl $crate::Decoder) -> Result<Self, $crate::CodecError> {
                <$target as $crate::Codec>::decode(dec).map(Self)
            }

            fn encode(&self, enc: &mut impl $crate::Encoder) -> Result<(), $crate::CodecError> {
                $crate::Codec::encode(&self.0, enc)
            }
        }
    };
}
