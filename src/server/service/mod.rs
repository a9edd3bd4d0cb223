//! Service layer for business logic orchestration.
//!
//! Services sit between the binary and the collaborator traits (`data/` for
//! Discord lookups, `voice/` for connections and audio sources). They receive
//! their collaborators by reference, run a request through its stages, and log
//! failures before returning them.

pub mod voice;
