//! Service layer: layout builders, builder routing, the behavior policy and
//! context transitions.

pub mod behavior;
pub mod builders;
pub mod router;
pub mod session;

// Re-export commonly used types and functions
pub use behavior::{DeleteBackwardRange, KeyboardBehavior};
pub use builders::{BuilderKind, Language, NineGridSideColumn, NINE_GRID_INSETS};
pub use router::LayoutRouter;
pub use session::{reduce, requires_layout_rebuild, ContextEvent, HostTextContext, LayoutSession};
