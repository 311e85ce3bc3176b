//! Random lamination layouts (replay tokens, uniform parameter draws).
//!
//! Purpose
//! - Deterministic samples of `LamHole` for experiments, property tests, and
//!   benchmarks. Every sample is reproducible from `(seed, index)`.
//!
//! Model
//! - Draw `rint` and a yoke thickness, then a hole count and one variant per
//!   hole. Holes are placed around the yoke band, allowed to overhang it by
//!   `overhang` (relative to the thickness) on both sides, so some samples
//!   widen the yoke bounds and some do not.
//! - All drawn parameters satisfy `LamHole::check`.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::hole::{Hole, HoleUD, PlainHole, VentilationCirc, VentilationPolar, VentilationTrap};
use crate::lam::LamHole;

/// Hole count distribution.
#[derive(Clone, Copy, Debug)]
pub enum HoleCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}

impl HoleCount {
    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            HoleCount::Fixed(n) => n,
            HoleCount::Uniform { min, max } => rng.gen_range(min..=max.max(min)),
        }
    }
}

/// Sampler configuration. Lengths in meters.
#[derive(Clone, Copy, Debug)]
pub struct RandomLayoutCfg {
    /// Range of the bore radius `Rint`.
    pub rint: (f64, f64),
    /// Range of the yoke thickness `Rext - Rint`.
    pub thickness: (f64, f64),
    pub hole_count: HoleCount,
    /// How far holes may reach past the yoke band, as a fraction of its thickness.
    pub overhang: f64,
    /// Probability that a drawn hole is the plain variant.
    pub plain_prob: f64,
    /// Swap `Rint`/`Rext` with this probability (exercises normalization).
    pub swap_prob: f64,
}

impl Default for RandomLayoutCfg {
    fn default() -> Self {
        Self {
            rint: (0.01, 0.1),
            thickness: (0.01, 0.1),
            hole_count: HoleCount::Uniform { min: 0, max: 6 },
            overhang: 0.25,
            plain_prob: 0.15,
            swap_prob: 0.1,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    pub fn new(seed: u64, index: u64) -> Self {
        Self { seed, index }
    }

    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

#[inline]
fn uniform<R: Rng>(rng: &mut R, (lo, hi): (f64, f64)) -> f64 {
    if hi > lo {
        rng.gen_range(lo..hi)
    } else {
        lo
    }
}

/// Draw one lamination.
pub fn draw_lamination(cfg: RandomLayoutCfg, tok: ReplayToken) -> LamHole {
    let mut rng = tok.to_std_rng();
    let rint = uniform(&mut rng, cfg.rint).max(0.0);
    let thickness = uniform(&mut rng, cfg.thickness).max(1e-6);
    let rext = rint + thickness;

    // Radial band available to hole footprints.
    let reach = cfg.overhang.max(0.0) * thickness;
    let band = ((rint - reach).max(0.0), rext + reach);

    let n = cfg.hole_count.sample(&mut rng);
    let mut holes = Vec::with_capacity(n);
    for _ in 0..n {
        if rng.gen::<f64>() < cfg.plain_prob {
            holes.push(Hole::from(PlainHole {
                zh: rng.gen_range(1..=48),
            }));
            continue;
        }
        holes.push(draw_shaped(&mut rng, band));
    }

    let (rint, rext) = if rng.gen::<f64>() < cfg.swap_prob {
        (rext, rint)
    } else {
        (rint, rext)
    };
    LamHole {
        name: Some(format!("sample-{}-{}", tok.seed, tok.index)),
        rint,
        rext,
        holes,
    }
}

/// Draw `count` laminations with consecutive indices.
pub fn draw_laminations(cfg: RandomLayoutCfg, seed: u64, count: u64) -> Vec<LamHole> {
    (0..count)
        .map(|index| draw_lamination(cfg, ReplayToken::new(seed, index)))
        .collect()
}

fn draw_shaped<R: Rng>(rng: &mut R, (lo, hi): (f64, f64)) -> Hole {
    let width = hi - lo;
    let zh = rng.gen_range(1..=48);
    let alpha0 = rng.gen_range(0.0..std::f64::consts::TAU);
    // Radial depth of the footprint, then its bottom radius inside the band.
    let depth = width * rng.gen_range(0.05..0.5);
    let h0 = lo + (width - depth) * rng.gen::<f64>();
    match rng.gen_range(0..4u8) {
        0 => Hole::from(VentilationCirc {
            zh,
            alpha0,
            d0: depth,
            h0: h0 + depth / 2.0,
        }),
        1 => Hole::from(VentilationPolar {
            zh,
            alpha0,
            d0: depth,
            h0,
            w1: rng.gen_range(0.05..1.0),
        }),
        2 => Hole::from(VentilationTrap {
            zh,
            alpha0,
            d0: depth,
            h0,
            w1: depth * rng.gen_range(0.1..1.5),
            w2: depth * rng.gen_range(0.1..1.5),
        }),
        _ => {
            // Triangle around a centre at mid-depth.
            let centre = Vector2::new(alpha0.cos(), alpha0.sin()) * (h0 + depth / 2.0);
            let r = depth / 2.0;
            let phase = rng.gen_range(0.0..std::f64::consts::TAU);
            let vertices = (0..3)
                .map(|k| {
                    let th = phase + k as f64 * std::f64::consts::TAU / 3.0;
                    let p = centre + Vector2::new(th.cos(), th.sin()) * r;
                    [p.x, p.y]
                })
                .collect();
            Hole::from(HoleUD::new(zh, vertices))
        }
    }
}
