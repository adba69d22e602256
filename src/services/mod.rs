//! Service Layer
//!
//! Handles everything that leaves the process: archive submissions and
//! endpoint health probes.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │                 ServiceHub                   │
//! │  ┌────────────────┐   ┌──────────────────┐   │
//! │  │ ArchiveClient  │   │  health monitor  │   │
//! │  │ (POST archive) │   │  (GET /health)   │   │
//! │  └────────────────┘   └──────────────────┘   │
//! └──────────────────────────────────────────────┘
//!                       │
//!                       ▼ AppEvent
//! ┌──────────────────────────────────────────────┐
//! │          State Layer (AppEntities)           │
//! └──────────────────────────────────────────────┘
//! ```

pub mod archive_client;
pub mod runtime;
pub mod service_hub;
