//! Benchmark support crate for graphgen.
//!
//! Provides the parameter types shared by the Criterion benchmarks for graph
//! generation and all-pairs BFS.

pub mod params;
