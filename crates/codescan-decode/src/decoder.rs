use codescan_core::GrayImageView;

/// Result of one decode attempt that did not fail.
///
/// `NotFound` is the normal outcome for most frames and is not an error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DecodeOutcome<T> {
    Found(T),
    NotFound,
}

impl<T> DecodeOutcome<T> {
    #[inline]
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    pub fn found(self) -> Option<T> {
        match self {
            Self::Found(v) => Some(v),
            Self::NotFound => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> DecodeOutcome<U> {
        match self {
            Self::Found(v) => DecodeOutcome::Found(f(v)),
            Self::NotFound => DecodeOutcome::NotFound,
        }
    }
}

impl<T> From<Option<T>> for DecodeOutcome<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Self::Found(v),
            None => Self::NotFound,
        }
    }
}

/// A stateful barcode decoding engine.
///
/// Implementations distinguish "no symbol located" (`Ok(NotFound)`) from
/// genuine failures such as checksum or format errors (`Err`).
pub trait Decoder {
    type Output;
    type Error;

    /// Try to locate and decode one symbol in `luminance`.
    fn decode(
        &mut self,
        luminance: &GrayImageView<'_>,
    ) -> Result<DecodeOutcome<Self::Output>, Self::Error>;

    /// Drop any state carried over from the previous attempt.
    fn reset(&mut self);
}

impl<D: Decoder + ?Sized> Decoder for &mut D {
    type Output = D::Output;
    type Error = D::Error;

    fn decode(
        &mut self,
        luminance: &GrayImageView<'_>,
    ) -> Result<DecodeOutcome<Self::Output>, Self::Error> {
        (**self).decode(luminance)
    }

    fn reset(&mut self) {
        (**self).reset()
    }
}

impl<D: Decoder + ?Sized> Decoder for Box<D> {
    type Output = D::Output;
    type Error = D::Error;

    fn decode(
        &mut self,
        luminance: &GrayImageView<'_>,
    ) -> Result<DecodeOutcome<Self::Output>, Self::Error> {
        (**self).decode(luminance)
    }

    fn reset(&mut self) {
        (**self).reset()
    }
}
