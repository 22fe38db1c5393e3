//! Time helpers shared across host contracts and adapters.

#[cfg(not(target_arch = "wasm32"))]
use std::time::{SystemTime, UNIX_EPOCH};

/// Local wall-clock reading used by the menu-bar clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockReading {
    /// Hour of day, `0..=23`.
    pub hour: u32,
    /// Minute of hour, `0..=59`.
    pub minute: u32,
}

/// Returns the current unix timestamp in milliseconds.
pub fn unix_time_ms_now() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now().max(0.0) as u64
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as u64
    }
}

/// Returns the local hour and minute.
///
/// Native builds have no timezone database wired in and report UTC.
pub fn local_clock_now() -> ClockReading {
    #[cfg(target_arch = "wasm32")]
    {
        let date = js_sys::Date::new_0();
        ClockReading {
            hour: date.get_hours(),
            minute: date.get_minutes(),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let minutes_of_day = (unix_time_ms_now() / 60_000) % (24 * 60);
        ClockReading {
            hour: (minutes_of_day / 60) as u32,
            minute: (minutes_of_day % 60) as u32,
        }
    }
}
