use std::fmt;

/// An input a popup needs before it can be placed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Measurement {
    /// The rect of the element the popup is attached to
    Anchor,
    /// The bounds the popup must stay inside
    Container,
    /// The measured size of the popup content
    Content,
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Measurement::Anchor => "anchor",
            Measurement::Container => "container",
            Measurement::Content => "content",
        })
    }
}

/// Why a popup cannot be positioned this frame
///
/// Never fatal: callers render an invisible placeholder and retry on the
/// next layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PlacementError {
    #[error("{0} measurement is not available yet")]
    MeasurementUnavailable(Measurement),
}
