//! Offer countdown banner.
//!
//! Counts down from a fixed duration once per second and starts over when
//! it runs out. The display format is `HH : MM : SS`.

use std::time::Duration;

use tokio::task::JoinHandle;

use crate::page::Page;

/// Mount point showing the countdown.
pub const COUNTDOWN_MOUNT: &str = "countdown-timer";

/// Default offer length: five hours.
pub const DEFAULT_COUNTDOWN_SECS: u64 = 5 * 60 * 60;

const TICK: Duration = Duration::from_secs(1);

/// A repeating countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    duration: u64,
    remaining: u64,
}

impl Countdown {
    /// Start a countdown of `duration_secs` seconds.
    #[must_use]
    pub const fn new(duration_secs: u64) -> Self {
        Self {
            duration: duration_secs,
            remaining: duration_secs,
        }
    }

    /// Seconds left before the next restart.
    #[must_use]
    pub const fn remaining(&self) -> u64 {
        self.remaining
    }

    /// Return the current display value and advance by one second.
    ///
    /// After `00 : 00 : 00` is shown the countdown restarts at its full
    /// duration.
    pub fn tick(&mut self) -> String {
        let display = format_hms(self.remaining);
        self.remaining = self.remaining.checked_sub(1).unwrap_or(self.duration);
        display
    }
}

impl Default for Countdown {
    fn default() -> Self {
        Self::new(DEFAULT_COUNTDOWN_SECS)
    }
}

/// Format seconds as zero-padded `HH : MM : SS`.
#[must_use]
pub fn format_hms(total_secs: u64) -> String {
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60;
    format!("{hours:02} : {minutes:02} : {seconds:02}")
}

/// Drive `countdown` on `page`, writing a new value every second.
///
/// The first value appears one second after the call. The task runs until
/// the returned handle is aborted.
pub fn spawn(page: Page, mount_id: impl Into<String>, mut countdown: Countdown) -> JoinHandle<()> {
    let mount_id = mount_id.into();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(TICK);
        // The first tick completes immediately
        interval.tick().await;
        loop {
            interval.tick().await;
            if !page.set_html(&mount_id, countdown.tick()) {
                tracing::warn!(mount = %mount_id, "countdown mount missing, stopping");
                break;
            }
        }
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_format_hms() {
        assert_eq!(format_hms(DEFAULT_COUNTDOWN_SECS), "05 : 00 : 00");
        assert_eq!(format_hms(3661), "01 : 01 : 01");
        assert_eq!(format_hms(59), "00 : 00 : 59");
        assert_eq!(format_hms(0), "00 : 00 : 00");
        assert_eq!(format_hms(100 * 3600), "100 : 00 : 00");
    }

    #[test]
    fn test_tick_counts_down() {
        let mut countdown = Countdown::default();
        assert_eq!(countdown.tick(), "05 : 00 : 00");
        assert_eq!(countdown.tick(), "04 : 59 : 59");
        assert_eq!(countdown.remaining(), DEFAULT_COUNTDOWN_SECS - 2);
    }

    #[test]
    fn test_tick_restarts_after_zero() {
        let mut countdown = Countdown::new(2);
        let shown: Vec<String> = (0..5).map(|_| countdown.tick()).collect();
        assert_eq!(
            shown,
            [
                "00 : 00 : 02",
                "00 : 00 : 01",
                "00 : 00 : 00",
                "00 : 00 : 02",
                "00 : 00 : 01",
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_spawn_writes_every_second() {
        let page = Page::new("/ofertas.html", [COUNTDOWN_MOUNT]);
        let handle = spawn(page.clone(), COUNTDOWN_MOUNT, Countdown::new(90));

        tokio::time::sleep(Duration::from_millis(1500)).await;
        assert_eq!(page.html(COUNTDOWN_MOUNT).unwrap(), "00 : 01 : 30");

        tokio::time::sleep(Duration::from_secs(1)).await;
        assert_eq!(page.html(COUNTDOWN_MOUNT).unwrap(), "00 : 01 : 29");

        handle.abort();
    }

    #[tokio::test(start_paused = true)]
    async fn test_spawn_stops_without_mount() {
        let page = Page::new("/", Vec::<String>::new());
        let handle = spawn(page, COUNTDOWN_MOUNT, Countdown::new(10));
        tokio::time::sleep(Duration::from_secs(2)).await;
        assert!(handle.is_finished());
    }
}
