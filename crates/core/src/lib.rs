//! Generic building blocks for declarative REST nodes.
//!
//! A node declares an immutable [`descriptor::NodeDescriptor`] (its form
//! schema) and implements [`node::Node`]: for each execution item it reads
//! the host-resolved parameters, builds one [`request::RequestDescriptor`],
//! issues it through the authenticated [`transport::Transport`], and shapes
//! the JSON response into output records. [`execution::run_batch`] drives
//! the strictly sequential per-item loop and the continue-on-fail policy.

pub mod credential;
pub mod descriptor;
pub mod execution;
pub mod item;
pub mod node;
pub mod parameter;
pub mod request;
pub mod response;
pub mod transport;
