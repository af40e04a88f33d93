//! # Payload types for slicing lifecycle events.
//!
//! Three payloads travel through the sink contract:
//! - [`SlicingStatus`] — repeated progress updates during a run;
//! - [`CompletedInfo`] — the terminal summary of one run, immutable once built;
//! - [`ExportInfo`] — the export phase marker (began/finished with path).
//!
//! Consumers must treat the latest [`SlicingStatus`] as authoritative: there
//! is no ordering key beyond arrival order, which the single-producer model
//! already guarantees.
//!
//! ## Example
//! ```rust
//! use slicecast::{CompletedInfo, CompletionStatus, SlicingStatus};
//!
//! let status = SlicingStatus::new(42, "slicing layer 10").with_warning_step(3);
//! assert_eq!(status.percent, 42);
//!
//! let info = CompletedInfo::error("mesh not manifold").with_error_object_ids(vec![7]);
//! assert!(info.status.is_error());
//! assert!(!info.status.is_finished());
//! ```

use serde::Serialize;

/// Progress snapshot produced repeatedly during a slicing run.
///
/// Ephemeral: the dispatcher never stores it, adapters may cache the latest.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SlicingStatus {
    /// Completion percentage, `0..=100`.
    pub percent: u8,
    /// Human-readable progress message (e.g. "slicing layer 10").
    pub message: String,
    /// Producer-defined flag bits, forwarded untouched.
    pub flags: u32,
    /// Step index the current warning refers to, `-1` when none.
    pub warning_step: i32,
    /// Opaque producer flag, forwarded untouched.
    pub aux: bool,
}

impl SlicingStatus {
    /// Creates a status with the given percentage and message; other fields
    /// start empty (`flags = 0`, `warning_step = -1`, `aux = false`).
    pub fn new(percent: u8, message: impl Into<String>) -> Self {
        Self {
            percent,
            message: message.into(),
            flags: 0,
            warning_step: -1,
            aux: false,
        }
    }

    /// Attaches producer flag bits.
    #[inline]
    pub fn with_flags(mut self, flags: u32) -> Self {
        self.flags = flags;
        self
    }

    /// Attaches a warning step index.
    #[inline]
    pub fn with_warning_step(mut self, step: i32) -> Self {
        self.warning_step = step;
        self
    }

    /// Sets the opaque producer flag.
    #[inline]
    pub fn with_aux(mut self, aux: bool) -> Self {
        self.aux = aux;
        self
    }
}

/// How a slicing run ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CompletionStatus {
    /// Completed successfully.
    Finished,
    /// User cancelled.
    Cancelled,
    /// An error occurred.
    Error,
}

impl CompletionStatus {
    #[inline]
    pub fn is_finished(self) -> bool {
        self == CompletionStatus::Finished
    }

    #[inline]
    pub fn is_cancelled(self) -> bool {
        self == CompletionStatus::Cancelled
    }

    #[inline]
    pub fn is_error(self) -> bool {
        self == CompletionStatus::Error
    }
}

/// Terminal summary of one slicing run.
///
/// Immutable once constructed; a new run produces a new instance. A sink must
/// treat [`CompletionStatus::Cancelled`] and [`CompletionStatus::Error`] as
/// resetting any "in progress" state, no matter how many updates preceded it.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CompletedInfo {
    /// How the run ended.
    pub status: CompletionStatus,
    /// Error description, empty unless `status` is `Error`.
    pub error_message: String,
    /// Ids of the model objects involved in the error, if any.
    pub error_object_ids: Vec<u64>,
    /// The error is not recoverable by re-slicing.
    pub critical_error: bool,
    /// Downstream views (scene, preview) must be invalidated.
    pub invalidate_downstream: bool,
}

impl CompletedInfo {
    /// Successful completion.
    pub fn finished() -> Self {
        Self::with_status(CompletionStatus::Finished)
    }

    /// Run cancelled by the user.
    pub fn cancelled() -> Self {
        Self::with_status(CompletionStatus::Cancelled)
    }

    /// Run aborted with an error.
    pub fn error(message: impl Into<String>) -> Self {
        let mut info = Self::with_status(CompletionStatus::Error);
        info.error_message = message.into();
        info
    }

    fn with_status(status: CompletionStatus) -> Self {
        Self {
            status,
            error_message: String::new(),
            error_object_ids: Vec::new(),
            critical_error: false,
            invalidate_downstream: false,
        }
    }

    /// Attaches the ids of the objects the error refers to.
    #[inline]
    pub fn with_error_object_ids(mut self, ids: Vec<u64>) -> Self {
        self.error_object_ids = ids;
        self
    }

    /// Marks the error as critical (not recoverable by re-slicing).
    #[inline]
    pub fn with_critical_error(mut self, critical: bool) -> Self {
        self.critical_error = critical;
        self
    }

    /// Requests invalidation of downstream views.
    #[inline]
    pub fn with_invalidate_downstream(mut self, invalidate: bool) -> Self {
        self.invalidate_downstream = invalidate;
        self
    }
}

/// Phase marker for the export stage of a run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportPhase {
    Began,
    Finished,
}

/// Export stage information.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ExportInfo {
    /// Which end of the export stage this marks.
    pub phase: ExportPhase,
    /// Output path; `None` while the export is only beginning.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl ExportInfo {
    /// Export started; no path yet.
    pub fn began() -> Self {
        Self {
            phase: ExportPhase::Began,
            path: None,
        }
    }

    /// Export finished, writing to `path`.
    pub fn finished(path: impl Into<String>) -> Self {
        Self {
            phase: ExportPhase::Finished,
            path: Some(path.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_builder_defaults() {
        let status = SlicingStatus::new(10, "preparing");
        assert_eq!(status.percent, 10);
        assert_eq!(status.message, "preparing");
        assert_eq!(status.flags, 0);
        assert_eq!(status.warning_step, -1);
        assert!(!status.aux);
    }

    #[test]
    fn test_completion_status_predicates() {
        assert!(CompletionStatus::Finished.is_finished());
        assert!(CompletionStatus::Cancelled.is_cancelled());
        assert!(CompletionStatus::Error.is_error());
        assert!(!CompletionStatus::Error.is_finished());
    }

    #[test]
    fn test_completed_info_constructors() {
        let ok = CompletedInfo::finished();
        assert!(ok.status.is_finished());
        assert!(ok.error_message.is_empty());

        let err = CompletedInfo::error("mesh not manifold")
            .with_error_object_ids(vec![1, 2])
            .with_critical_error(true);
        assert!(err.status.is_error());
        assert_eq!(err.error_message, "mesh not manifold");
        assert_eq!(err.error_object_ids, vec![1, 2]);
        assert!(err.critical_error);
    }

    #[test]
    fn test_export_info_path_presence() {
        assert_eq!(ExportInfo::began().path, None);
        assert_eq!(
            ExportInfo::finished("/tmp/out.gcode").path.as_deref(),
            Some("/tmp/out.gcode")
        );
    }

    #[test]
    fn test_serialized_shapes() {
        let status = SlicingStatus::new(42, "slicing layer 10");
        let json = serde_json::to_value(&status).unwrap();
        assert_eq!(json["percent"], 42);
        assert_eq!(json["message"], "slicing layer 10");

        let info = CompletedInfo::cancelled();
        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(json["status"], "cancelled");

        // Began export serializes without a path field at all.
        let json = serde_json::to_value(ExportInfo::began()).unwrap();
        assert_eq!(json["phase"], "began");
        assert!(json.get("path").is_none());
    }
}
