//! Domain layer - pure analysis services over immutable inputs.
//!
//! Every engine in this tree is a stateless, synchronous function of its
//! arguments: no I/O, no shared mutable state, no suspension points. The
//! only process-wide state is the static rule tables, which are read-only
//! after initialization and safe to share across concurrent evaluations.

pub mod compliance;
pub mod foundation;
pub mod recommendations;
pub mod scoring;
pub mod zones;
