//! Domain Layer
//!
//! The reconciliation core of sasswatch, free of direct I/O.
//!
//! ## Structure
//!
//! - `entities/` - SourceSet and the generated Manifest
//! - `value_objects/` - SourceFileName, SuffixPattern, PendingWork
//! - `services/` - EventClassifier, Reconciler, Scheduler
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - Disk access only goes through the `FileSystem` port
//! 2. **Pure Functions** - Reconciliation and scheduling are deterministic
//! 3. **Ports & Adapters** - Compiler, prompt and work queue are trait-defined

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
