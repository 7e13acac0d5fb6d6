
//! Landmark acquisition boundary.
//!
//! A [`LandmarkSource`] runs on its own thread and delivers one
//! [`LandmarkFrame`] per detector result over an mpsc channel, at whatever
//! cadence the camera and model produce. The engine's tick loop drains the
//! channel and keeps the newest frame; the source winds down as soon as the
//! receiving end is dropped, releasing camera and detector handles.

use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::Duration;

use log::error;
use thiserror::Error;

use super::landmarks::{Landmark, LandmarkFrame, FULL_HAND, INDEX_TIP, PALM_CENTER, THUMB_TIP};

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("landmark detector initialization failed: {0}")]
    DetectorInit(String),

    #[error("camera stream unavailable: {0}")]
    CameraUnavailable(String),
}

/// Anything that can deliver landmark frames over a channel.
///
/// `run` owns the acquisition loop. A send failure means the consumer is
/// gone: the implementation must stop and release its resources, not retry.
/// Initialization failures are returned so the caller can surface them; the
/// consumer keeps running on idle behavior either way.
pub trait LandmarkSource: Send + 'static {
    fn run(self: Box<Self>, tx: Sender<LandmarkFrame>) -> Result<(), SourceError>;
}

/// Spawns a source on its own thread and returns the receiving end.
/// Source failures are logged; the closed channel tells the consumer the
/// feed is gone.
pub fn spawn_landmark_source<S: LandmarkSource>(source: S) -> Receiver<LandmarkFrame> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        if let Err(err) = Box::new(source).run(tx) {
            error!("landmark source stopped: {err}");
        }
    });
    rx
}

/// Builds a full 21-point frame from the three landmarks the classifier
/// reads; the remaining points sit at the palm.
pub fn hand_frame(thumb: (f32, f32), index: (f32, f32), palm: (f32, f32)) -> LandmarkFrame {
    let mut points = vec![Landmark::new(palm.0, palm.1); FULL_HAND];
    points[THUMB_TIP] = Landmark::new(thumb.0, thumb.1);
    points[INDEX_TIP] = Landmark::new(index.0, index.1);
    points[PALM_CENTER] = Landmark::new(palm.0, palm.1);
    LandmarkFrame { points }
}

/// An open hand centered at `palm`.
pub fn open_hand(palm: (f32, f32)) -> LandmarkFrame {
    hand_frame(
        (palm.0 - 0.12, palm.1),
        (palm.0 + 0.12, palm.1),
        palm,
    )
}

/// A closed fist centered at `palm`.
pub fn closed_hand(palm: (f32, f32)) -> LandmarkFrame {
    hand_frame(
        (palm.0 - 0.02, palm.1),
        (palm.0 + 0.02, palm.1),
        palm,
    )
}

/// Plays back a fixed frame timeline at a detector-like cadence. Used by
/// the demo binary and end-to-end tests; no camera or model required.
pub struct ScriptedSource {
    frames: Vec<LandmarkFrame>,
    frame_interval: Duration,
}

impl ScriptedSource {
    pub fn new(frames: Vec<LandmarkFrame>, frames_per_second: u32) -> Self {
        Self {
            frames,
            frame_interval: Duration::from_secs_f64(1.0 / frames_per_second.max(1) as f64),
        }
    }

    /// The demo timeline: an open hand sweeping across the view, a held
    /// fist, then the hand leaving the frame.
    pub fn demo(frames_per_second: u32) -> Self {
        let fps = frames_per_second.max(1);
        let mut frames = Vec::new();

        // ~3 s of open hand drifting right to left
        for i in 0..(3 * fps) {
            let t = i as f32 / (3 * fps) as f32;
            frames.push(open_hand((0.3 + 0.4 * t, 0.5)));
        }
        // ~4 s of fist held near center
        for _ in 0..(4 * fps) {
            frames.push(closed_hand((0.5, 0.45)));
        }
        // ~2 s without a hand
        for _ in 0..(2 * fps) {
            frames.push(LandmarkFrame::empty());
        }

        Self::new(frames, fps)
    }
}

impl LandmarkSource for ScriptedSource {
    fn run(self: Box<Self>, tx: Sender<LandmarkFrame>) -> Result<(), SourceError> {
        for frame in self.frames {
            if tx.send(frame).is_err() {
                // receiver gone, wind down
                break;
            }
            thread::sleep(self.frame_interval);
        }
        Ok(())
    }
}
