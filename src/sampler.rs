//! Random scenario sampling
//!
//! Seeded RNG only: a seed fully determines the sampled parameters and
//! therefore the generated sequence.

use glam::DVec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::error::SimError;
use crate::sequence::{Sequence, SequenceParams, generate_sequence};
use crate::settings::{SamplerSettings, UniformRange};

fn sample(range: &UniformRange, rng: &mut impl Rng) -> f64 {
    range.lerp(rng.random::<f64>())
}

/// Draw sequence inputs from the configured ranges.
///
/// Parameters are drawn independently in a fixed order: speed, direction,
/// x, y, gravity, restitution.
pub fn sample_params(
    settings: &SamplerSettings,
    rng: &mut impl Rng,
) -> Result<SequenceParams, SimError> {
    settings.validate()?;

    let initial_speed = sample(&settings.speed, rng);
    let initial_direction = sample(&settings.direction, rng);
    let x = sample(&settings.position_x, rng);
    let y = sample(&settings.position_y, rng);
    let gravity = sample(&settings.gravity, rng);
    let restitution = sample(&settings.restitution, rng);

    Ok(SequenceParams {
        sequence_length: settings.sequence_length,
        initial_speed,
        initial_direction,
        initial_position: DVec2::new(x, y),
        gravity,
        restitution,
        frame_rate: settings.frame_rate,
    })
}

/// Sample parameters with a `Pcg32` seeded from `seed` and generate one sequence
pub fn generate_random_sequence(
    settings: &SamplerSettings,
    seed: u64,
) -> Result<Sequence, SimError> {
    let mut rng = Pcg32::seed_from_u64(seed);
    let params = sample_params(settings, &mut rng)?;
    log::info!(
        "seed {}: speed {:.3}, direction {:.3}, position ({:.3}, {:.3}), gravity {:.3}, restitution {:.3}",
        seed,
        params.initial_speed,
        params.initial_direction,
        params.initial_position.x,
        params.initial_position.y,
        params.gravity,
        params.restitution
    );
    generate_sequence(&params)
}

/// Generate `count` independent sequences.
///
/// Sequence `i` uses seed `seed + i` (wrapping), so any entry can be
/// regenerated on its own with `generate_random_sequence`.
pub fn generate_dataset(
    settings: &SamplerSettings,
    seed: u64,
    count: usize,
) -> Result<Vec<Sequence>, SimError> {
    let sequences = (0..count as u64)
        .map(|i| generate_random_sequence(settings, seed.wrapping_add(i)))
        .collect::<Result<Vec<_>, _>>()?;
    log::info!(
        "generated {} sequences of {} frames from seed {}",
        sequences.len(),
        settings.sequence_length,
        seed
    );
    Ok(sequences)
}
