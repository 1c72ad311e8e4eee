//! Use-Cases der Application-Layer-Orchestrierung.

pub mod drawing;
pub mod eraser;
pub mod export;
pub mod import;
pub mod recorder;
pub mod view;

#[cfg(test)]
pub(crate) mod testing;
