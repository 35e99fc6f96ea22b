//! Suplementor - supplement safety analysis and neuroscience knowledge graphs
//!
//! Two read-only engines over a static supplement catalog:
//! - [`safety::SafetyAnalyzer`] flags contraindications, interactions and
//!   allergy risks for a user profile
//! - [`graph::GraphAssembler`] links supplements to neurotransmitters, brain
//!   regions, cognitive functions, pathways and mechanisms

pub mod catalog;
pub mod cli;
pub mod config;
pub mod graph;
pub mod models;
pub mod reporters;
pub mod safety;
