//! Clustercheck: lint checks for Kubernetes cluster snapshots.
//!
//! Clustercheck runs best-practice and validity checks against an in-memory
//! snapshot of cluster objects. The snapshot is constructed by an external
//! collaborator (live cluster listing, fixture data, ...); this crate never
//! talks to a cluster itself and never mutates the snapshot it is handed.
//!
//! Each check implements the [`Check`] trait and turns a snapshot into
//! warning and error [`Diagnostic`]s. Checks are resolved by name or group
//! through a [`CheckRegistry`], which an orchestrator consults before
//! aggregating and rendering results (rendering is out of scope here).
//!
//! # Example
//!
//! ```rust
//! use clustercheck::{CheckRegistry, ClusterSnapshot, Container, Pod};
//!
//! let snapshot = ClusterSnapshot::with_pods(vec![Pod::new("default", "web")
//!     .with_container(Container::new("app", "busybox:latest"))]);
//!
//! let registry = CheckRegistry::with_builtin_checks();
//! let check = registry.get("fully-qualified-image").unwrap();
//! let report = check.run(&snapshot).unwrap();
//!
//! for warning in &report.warnings {
//!     println!("{}: {}", warning.check, warning.message);
//! }
//! ```

pub mod check;
pub mod checks;
pub mod image;
pub mod kube;
pub mod registry;
pub mod types;

pub use check::{Check, CheckError, CheckReport};
pub use checks::FullyQualifiedImageCheck;
pub use image::{ImageReference, ImageStatus};
pub use kube::{ClusterSnapshot, Container, Pod, PodList};
pub use registry::{CheckRegistry, RegistryError};
pub use types::{Diagnostic, Severity};
