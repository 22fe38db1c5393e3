//! Typed host-domain contracts shared by the desktop runtime and the browser adapters.
//!
//! This crate is the API-first boundary for platform services. It exposes the preference-store
//! contract, the injected host bundle, and local clock helpers while concrete browser adapters
//! live in `platform_host_web`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod host;
pub mod storage;
pub mod time;

pub use host::{HostServices, HostStrategy};
pub use storage::prefs::{
    load_pref_parsed_with, save_pref_display_with, MemoryPrefsStore, NoopPrefsStore, PrefsStore,
};
pub use time::{local_clock_now, unix_time_ms_now, ClockReading};
