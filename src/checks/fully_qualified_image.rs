//! Fully qualified image check.
//!
//! Flags containers whose image reference lacks an explicit registry host,
//! and containers whose image carries a structurally invalid digest.

use crate::check::{Check, CheckError, CheckReport};
use crate::image::{ImageReference, ImageStatus};
use crate::kube::{ClusterSnapshot, Container, Pod};
use crate::types::Diagnostic;

/// Checks if containers have fully qualified image names.
pub struct FullyQualifiedImageCheck;

impl Check for FullyQualifiedImageCheck {
    fn name(&self) -> &str {
        "fully-qualified-image"
    }

    fn description(&self) -> &str {
        "Checks if containers have fully qualified image names"
    }

    fn groups(&self) -> Vec<&str> {
        vec!["basic"]
    }

    /// Scans every container of every pod. Diagnostics are additive and
    /// independent per container; a malformed image never halts the scan.
    fn run(&self, snapshot: &ClusterSnapshot) -> Result<CheckReport, CheckError> {
        let pods = snapshot.pods.as_ref().ok_or(CheckError::MissingPods)?;
        let mut report = CheckReport::new();

        for pod in &pods.items {
            log::debug!(
                "checking images for pod '{}' in namespace '{}'",
                pod.name,
                pod.namespace
            );
            for container in pod.containers.iter().chain(pod.init_containers.iter()) {
                self.check_container(pod, container, &mut report);
            }
        }

        Ok(report)
    }
}

impl FullyQualifiedImageCheck {
    fn check_container(&self, pod: &Pod, container: &Container, report: &mut CheckReport) {
        match ImageReference::parse(&container.image).status() {
            ImageStatus::Qualified => {}
            ImageStatus::Unqualified => report.warnings.push(Diagnostic::warning(
                self.name(),
                format!(
                    "[Best Practice] Use fully qualified image for container '{}' in pod '{}' in namespace '{}'",
                    container.name, pod.name, pod.namespace
                ),
            )),
            ImageStatus::Malformed => report.errors.push(Diagnostic::error(
                self.name(),
                format!(
                    "[Error] Malformed image name for container '{}' in pod '{}' in namespace '{}'",
                    container.name, pod.name, pod.namespace
                ),
            )),
        }
    }
}
