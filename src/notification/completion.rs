//! One-shot "loaded" signal to the embedding host.
//!
//! A settle timer is armed when the app starts. When it elapses, exactly
//! once per widget lifetime, the completion payload goes out best-effort on
//! both channels a native widget has: an in-process [`BlockCompletion`]
//! event, and one JSON line on stdout for whatever launched the process.
//! Delivery failure is logged and forgotten; there is no retry and no ack.

use std::io::{self, Write};
use std::time::Duration;

use bevy::prelude::*;
use serde::Serialize;

pub const BLOCK_ID: &str = "solar-system-3d";

/// Wire payload, field names matching the host's message schema.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct CompletionPayload {
    #[serde(rename = "type")]
    pub event_type: &'static str,
    #[serde(rename = "blockId")]
    pub block_id: &'static str,
    pub completed: bool,
    pub data: CompletionData,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct CompletionData {
    #[serde(rename = "interactionType")]
    pub interaction_type: &'static str,
}

impl CompletionPayload {
    pub fn loaded() -> Self {
        Self {
            event_type: "BLOCK_COMPLETION",
            block_id: BLOCK_ID,
            completed: true,
            data: CompletionData {
                interaction_type: "loaded",
            },
        }
    }
}

/// In-process completion event, mirroring what goes to the host.
#[derive(Event, Debug, Clone)]
pub struct BlockCompletion(pub CompletionPayload);

/// One-shot settle timer. Fires at most once, then stays spent; `disarm`
/// spends it early (component teardown cancels the pending signal).
#[derive(Resource, Debug)]
pub struct SettleNotifier {
    timer: Timer,
    fired: bool,
}

impl SettleNotifier {
    pub fn new(delay_seconds: f64) -> Self {
        Self {
            timer: Timer::from_seconds(delay_seconds as f32, TimerMode::Once),
            fired: false,
        }
    }

    /// Advance the timer. Returns true exactly once, when the delay elapses.
    pub fn tick(&mut self, delta: Duration) -> bool {
        if self.fired {
            return false;
        }
        self.timer.tick(delta);
        if self.timer.finished() {
            self.fired = true;
            return true;
        }
        false
    }

    /// Cancel a pending signal without emitting it.
    pub fn disarm(&mut self) {
        self.fired = true;
    }

    pub fn has_fired(&self) -> bool {
        self.fired
    }
}

/// Per-frame system: tick the settle timer and emit the signal when it
/// elapses. The stdout write is the only fallible path in the widget and is
/// deliberately swallowed after a log line.
pub fn settle_notification(
    time: Res<Time>,
    mut notifier: ResMut<SettleNotifier>,
    mut events: EventWriter<BlockCompletion>,
) {
    if !notifier.tick(time.delta()) {
        return;
    }

    let payload = CompletionPayload::loaded();
    events.send(BlockCompletion(payload.clone()));

    if let Err(err) = post_to_host(&payload) {
        warn!("completion notification not delivered: {err}");
    } else {
        info!("completion notification sent");
    }
}

fn post_to_host(payload: &CompletionPayload) -> anyhow::Result<()> {
    let line = serde_json::to_string(payload)?;
    let mut out = io::stdout().lock();
    writeln!(out, "{line}")?;
    out.flush()?;
    Ok(())
}
