//! Kani proof harnesses
//!
//! - `queue_proofs.rs`: Operation-level proofs over small symbolic inputs
//! - `edge_case_proofs.rs`: Empty and single-element edge cases
