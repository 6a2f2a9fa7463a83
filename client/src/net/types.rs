//! Catalog API DTOs and the view models derived from them.
//!
//! DESIGN
//! ======
//! The remote catalog speaks JSON:API (`data[].attributes`). Pages never see
//! that envelope: records are flattened into `SystemView`, which also carries
//! the derived image URL.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Response envelope of `GET /v3/systems`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SystemsDocument {
    #[serde(default)]
    pub data: Vec<System>,
}

/// A financial instrument or currency as returned by the catalog.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct System {
    /// JSON:API resource type, kept verbatim.
    #[serde(rename = "type", default)]
    pub kind: String,
    pub id: String,
    pub attributes: SystemAttributes,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemAttributes {
    pub name: String,
    pub currency: String,
}

/// A system enriched for rendering.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SystemView {
    pub id: String,
    pub kind: String,
    pub name: String,
    pub currency: String,
    pub image_url: String,
}

impl SystemView {
    pub fn new(system: System, image_url: String) -> Self {
        let System { kind, id, attributes } = system;
        Self { id, kind, name: attributes.name, currency: attributes.currency, image_url }
    }

    /// Client route of the detail page for this system.
    pub fn href(&self) -> String {
        format!("/systems/{}", self.id)
    }
}
