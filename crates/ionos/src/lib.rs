//! IONOS provider nodes.
//!
//! One module per node: each declares its form schema (resource, operation,
//! fields) and maps the selected operation to a single authenticated HTTP
//! call against the matching IONOS API origin, shaping the JSON response
//! into host output records. Nodes are self-contained instances of the
//! `flowgrid_core` declarative REST pattern and never depend on each other.

pub mod credentials;
pub mod registry;
pub(crate) mod serde;

pub mod activity_log {
    pub mod config;
    pub mod filter;
    pub mod node;
}

pub mod billing {
    pub mod config;
    pub mod node;
}

pub mod cdn {
    pub mod config;
    pub mod node;
    pub mod rules;
}

pub mod certificate {
    pub mod config;
    pub mod node;
}

pub mod compute {
    pub mod config;
    pub mod node;
}

pub mod dns {
    pub mod config;
    pub mod node;
}

pub mod iam {
    pub mod config;
    pub mod node;
}

pub mod inference {
    pub mod client;
    pub mod config;
    pub mod models;
    pub mod node;
}

pub mod monitoring {
    pub mod config;
    pub mod node;
}

pub mod nfs {
    pub mod config;
    pub mod node;
}

pub mod object_storage {
    pub mod config;
    pub mod node;
}
