/// Errors of the triplex runtime
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TriplexError {
    /// All slots of the active triplex pool are occupied
    ResourceExhausted,
    /// The shared key position list doesn't fit in a triplex config
    TooManySharedKeyPositions,
    /// The shared layer list doesn't fit in a triplex config
    TooManySharedLayers,
}

impl core::fmt::Display for TriplexError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            TriplexError::ResourceExhausted => write!(f, "no free slot for a new active triplex"),
            TriplexError::TooManySharedKeyPositions => write!(f, "too many shared key positions"),
            TriplexError::TooManySharedLayers => write!(f, "too many shared layers"),
        }
    }
}

impl core::error::Error for TriplexError {}
