//! Sequence generation
//!
//! Drives the motion stepper `frame_rate` sub-steps per frame and rasterizes
//! the square after each group, recording the physics position alongside.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_FRAME_RATE, SIM_DT};
use crate::error::{SimError, ensure_finite};
use crate::launch_velocity;
use crate::renderer::{Frame, draw_frame, to_image_coords};
use crate::sim::{BodyState, Scene, simulate_motion};

fn default_frame_rate() -> u32 {
    DEFAULT_FRAME_RATE
}

/// Inputs for one generated sequence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SequenceParams {
    /// Number of frames to produce
    pub sequence_length: usize,
    pub initial_speed: f64,
    /// Launch direction in radians, screen convention
    pub initial_direction: f64,
    /// Physics coordinates (origin bottom-left, y up)
    pub initial_position: DVec2,
    /// Downward acceleration
    pub gravity: f64,
    /// Elasticity of both the square and the walls
    pub restitution: f64,
    /// Simulation sub-steps per frame
    #[serde(default = "default_frame_rate")]
    pub frame_rate: u32,
}

impl SequenceParams {
    pub fn new(
        sequence_length: usize,
        initial_speed: f64,
        initial_direction: f64,
        initial_position: (f64, f64),
        gravity: f64,
        restitution: f64,
    ) -> Self {
        Self {
            sequence_length,
            initial_speed,
            initial_direction,
            initial_position: DVec2::new(initial_position.0, initial_position.1),
            gravity,
            restitution,
            frame_rate: DEFAULT_FRAME_RATE,
        }
    }

    pub fn with_frame_rate(mut self, frame_rate: u32) -> Self {
        self.frame_rate = frame_rate;
        self
    }

    /// Reject non-finite numbers. Out-of-domain gravity and restitution are
    /// passed through with a warning.
    pub fn validate(&self) -> Result<(), SimError> {
        ensure_finite("initial speed", self.initial_speed)?;
        ensure_finite("initial direction", self.initial_direction)?;
        ensure_finite("initial x", self.initial_position.x)?;
        ensure_finite("initial y", self.initial_position.y)?;
        ensure_finite("gravity", self.gravity)?;
        ensure_finite("restitution", self.restitution)?;

        if !(0.0..=1.0).contains(&self.restitution) {
            log::warn!(
                "restitution {} is outside [0, 1], passing through",
                self.restitution
            );
        }
        if self.gravity < 0.0 {
            log::warn!("negative gravity {} pulls upward, passing through", self.gravity);
        }
        Ok(())
    }
}

/// Generated frames with the physics position each was drawn from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sequence {
    params: SequenceParams,
    frames: Vec<Frame>,
    positions: Vec<DVec2>,
}

impl Sequence {
    /// The inputs that produced this sequence
    pub fn params(&self) -> &SequenceParams {
        &self.params
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Physics-coordinate positions, one per frame
    pub fn positions(&self) -> &[DVec2] {
        &self.positions
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// `(frame, position)` pairs in order
    pub fn iter(&self) -> impl Iterator<Item = (&Frame, DVec2)> {
        self.frames.iter().zip(self.positions.iter().copied())
    }

    pub fn into_parts(self) -> (Vec<Frame>, Vec<DVec2>) {
        (self.frames, self.positions)
    }
}

/// Generate a sequence in the default 16x16 scene
pub fn generate_sequence(params: &SequenceParams) -> Result<Sequence, SimError> {
    generate_sequence_in(&Scene::default(), params)
}

/// Generate a sequence in the given scene
pub fn generate_sequence_in(scene: &Scene, params: &SequenceParams) -> Result<Sequence, SimError> {
    scene.validate()?;
    params.validate()?;

    let mut state = BodyState::new(
        params.initial_position,
        launch_velocity(params.initial_speed, params.initial_direction),
    );
    let mut frames = Vec::with_capacity(params.sequence_length);
    let mut positions = Vec::with_capacity(params.sequence_length);

    for index in 0..params.sequence_length {
        for _ in 0..params.frame_rate {
            state = simulate_motion(scene, state, params.gravity, params.restitution, SIM_DT);
        }

        let origin = to_image_coords(scene, state.position);
        frames.push(draw_frame(scene, origin));
        positions.push(state.position);

        log::debug!(
            "frame {}: position ({:.3}, {:.3}) velocity ({:.3}, {:.3})",
            index,
            state.position.x,
            state.position.y,
            state.velocity.x,
            state.velocity.y
        );
    }

    Ok(Sequence {
        params: params.clone(),
        frames,
        positions,
    })
}
