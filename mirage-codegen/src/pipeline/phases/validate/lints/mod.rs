//! Built-in lints for metadata validation.

mod duplicate_member;
mod identifier_naming;
mod marker_placement;
mod missing_route;
mod unresolved_reference;

pub use duplicate_member::DuplicateMemberLint;
pub use identifier_naming::IdentifierNamingLint;
pub use marker_placement::MarkerPlacementLint;
pub use missing_route::MissingRouteLint;
pub use unresolved_reference::UnresolvedReferenceLint;
