// Copyright @yucwang 2021

use std::sync::atomic::{AtomicU64, Ordering};

static NODE_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Default identifier for an unnamed material node, e.g. `diffuse#3`.
pub fn next_node_id(kind: &str) -> String {
    let seq = NODE_COUNTER.fetch_add(1, Ordering::Relaxed) + 1;
    format!("{}#{}", kind, seq)
}

/// A material node handed to the evaluator.
pub trait ComputationNode {
    fn id(&self) -> &str;

    /// One-line summary used in evaluator logs.
    fn describe(&self) -> String;
}
