//! Cluster-object snapshot consumed by checks.
//!
//! A [`ClusterSnapshot`] is an immutable in-memory view of cluster resources,
//! built once per invocation by an external collaborator (a live listing or
//! fixture data) and handed to checks read-only. The types deserialize from
//! the Kubernetes camelCase wire shape so fixtures can be loaded straight
//! from YAML or JSON manifests.

use serde::{Deserialize, Serialize};

/// A single container within a pod.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Container {
    /// The container name, unique within its pod.
    pub name: String,
    /// The raw image reference string, as written in the pod spec.
    #[serde(default)]
    pub image: String,
}

impl Container {
    /// Create a new container.
    pub fn new(name: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            image: image.into(),
        }
    }
}

/// A pod with its ordered container sequences.
///
/// Namespace and name identify a pod within a snapshot; uniqueness across
/// namespaces is not required.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pod {
    #[serde(default)]
    pub namespace: String,
    pub name: String,
    #[serde(default)]
    pub containers: Vec<Container>,
    #[serde(default)]
    pub init_containers: Vec<Container>,
}

impl Pod {
    /// Create a pod with no containers.
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
            containers: Vec::new(),
            init_containers: Vec::new(),
        }
    }

    /// Append a regular container.
    pub fn with_container(mut self, container: Container) -> Self {
        self.containers.push(container);
        self
    }

    /// Append an init container.
    pub fn with_init_container(mut self, container: Container) -> Self {
        self.init_containers.push(container);
        self
    }
}

/// The pod listing, mirroring the Kubernetes list shape.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PodList {
    #[serde(default)]
    pub items: Vec<Pod>,
}

impl PodList {
    /// Create a pod list from its items.
    pub fn new(items: Vec<Pod>) -> Self {
        Self { items }
    }
}

/// An immutable snapshot of cluster objects.
///
/// `pods` is `None` when the collaborator supplied no pod listing at all,
/// which checks report as an internal fault rather than a diagnostic. Other
/// resource kinds a cluster holds are irrelevant to the current checks and
/// not carried here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterSnapshot {
    #[serde(default)]
    pub pods: Option<PodList>,
}

impl ClusterSnapshot {
    /// Create a snapshot with an empty pod listing.
    pub fn new() -> Self {
        Self {
            pods: Some(PodList::default()),
        }
    }

    /// Create a snapshot from a sequence of pods.
    pub fn with_pods(pods: Vec<Pod>) -> Self {
        Self {
            pods: Some(PodList::new(pods)),
        }
    }

    /// Create a snapshot with no pod listing at all.
    pub fn without_pod_listing() -> Self {
        Self { pods: None }
    }
}
