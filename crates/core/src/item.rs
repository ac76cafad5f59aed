//! Execution items flowing through a node invocation.
//!
//! The host owns the input items; a node only reads the payload and the
//! already-resolved parameters, and appends output records tagged with the
//! index of the item they came from.

use crate::parameter::ParameterMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One unit of input data passed to a node invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    /// Positional index within the input batch.
    pub index: usize,
    /// Arbitrary JSON payload carried by the item.
    pub payload: Value,
    /// Node parameters, resolved per item by the host.
    pub parameters: ParameterMap,
}

impl Item {
    /// Creates an item at the given batch position.
    pub fn new(index: usize, payload: Value, parameters: ParameterMap) -> Self {
        Item {
            index,
            payload,
            parameters,
        }
    }
}

/// One output record produced by a node, tagged with its source item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputItem {
    /// The output record.
    pub json: Value,
    /// Index of the input item this record belongs to.
    pub source_index: usize,
}

impl OutputItem {
    pub fn new(json: Value, source_index: usize) -> Self {
        OutputItem { json, source_index }
    }
}
