//! Thin coordinator over the four simulations.
//!
//! A [`Request`] selects a simulation kind and carries its payload; [`dispatch`]
//! validates and runs it, returning the matching [`Response`] arm. The engine
//! stays a pure function end to end: callers own all I/O and presentation.
//!
//! The JSON shape is internally tagged on `"simulation"`:
//!
//! ```
//! use oslab_core::{Request, Response, dispatch};
//!
//! let request: Request = serde_json::from_str(
//!     r#"{
//!         "simulation": "disk",
//!         "algorithm": "SSTF",
//!         "requests": [98, 183, 37, 122, 14, 124, 65, 67],
//!         "head": 53,
//!         "maxCylinder": 199
//!     }"#,
//! )
//! .unwrap();
//! let Response::Disk(result) = dispatch(&request).unwrap() else {
//!     unreachable!()
//! };
//! assert_eq!(result.total_seek, 236);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::{bankers, cpu, disk, memory};

/// A complete simulation request of any kind.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "simulation", rename_all = "camelCase")]
pub enum Request {
    /// CPU scheduling.
    Cpu(cpu::CpuRequest),
    /// Page replacement.
    Memory(memory::MemoryRequest),
    /// Disk head scheduling.
    Disk(disk::DiskRequest),
    /// Banker's safety check.
    Deadlock(bankers::BankersRequest),
}

/// A complete simulation result, tagged like its request.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "simulation", rename_all = "camelCase")]
pub enum Response {
    /// CPU scheduling result.
    Cpu(cpu::CpuResponse),
    /// Page replacement result.
    Memory(memory::PolicyRun),
    /// Disk head scheduling result.
    Disk(disk::DiskResponse),
    /// Banker's safety verdict.
    Deadlock(bankers::BankersResponse),
}

/// Runs the simulation a request selects.
///
/// # Errors
///
/// Forwards the selected simulation's [`ValidationError`]; nothing is computed
/// for an invalid request.
pub fn dispatch(request: &Request) -> Result<Response, ValidationError> {
    Ok(match request {
        Request::Cpu(r) => Response::Cpu(cpu::simulate(r)?),
        Request::Memory(r) => Response::Memory(memory::simulate(r)?),
        Request::Disk(r) => Response::Disk(disk::simulate(r)?),
        Request::Deadlock(r) => Response::Deadlock(bankers::check(r)?),
    })
}
