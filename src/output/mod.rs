//! Output module for psn-harvest
//!
//! Persistence of the result document lives here, kept separate from the
//! pipeline so the driver only ever sees the `persist` contract.

mod writer;

pub use writer::ResultWriter;
