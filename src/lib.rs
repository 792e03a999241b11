//! # machfile
//!
//! Execute a tiny subset of Dockerfile directives (`RUN`, `COPY`, `USER`)
//! directly on the local machine: no container, no image, no layering.
//! Intended as a didactic or ad-hoc local-execution shim, not a build engine.

pub mod ast;
pub mod cli;
pub mod error;
pub mod interpreter;
pub mod parser;
