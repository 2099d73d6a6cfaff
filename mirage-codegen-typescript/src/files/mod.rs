//! TypeScript output files.

mod declarations;
mod stubs;

pub use declarations::DeclarationsTs;
pub use stubs::StubsTs;
