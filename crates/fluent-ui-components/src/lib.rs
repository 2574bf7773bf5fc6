//! # fluent-ui-components
//!
//! Fluent Design overlay components for fluent-ui.
//!
//! The centrepiece is [`Flyout`]: a light-dismiss surface anchored to another
//! element, positioned by the [`placement`] resolver, animated through the
//! [`visibility`] state machine and hosted on the overlay layer by a
//! [`Popup`]. [`Layer`], [`MaterialOverlayLayout`] and [`Mica`] provide the
//! surfaces and backgrounds it is drawn with.

pub mod animation;
mod flyout;
mod layer;
mod material_layout;
mod mica;
pub mod placement;
mod popup;
pub mod visibility;

pub use animation::*;
pub use flyout::*;
pub use layer::*;
pub use material_layout::*;
pub use mica::*;
pub use placement::*;
pub use popup::*;
pub use visibility::*;
