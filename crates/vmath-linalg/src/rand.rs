//! Seeded pseudo-random number generators.
//!
//! [`Rand32`] and [`Rand48`] produce reproducible sequences: two generators created from the same
//! seed (or a generator and its clone) yield the same values, and [`Rand32::init`] restarts a
//! sequence. The sphere helpers draw random points for any vector dimension.

use crate::{traits::Float, Vector};

/// Source of uniformly distributed values, shared by [`Rand32`] and [`Rand48`].
pub trait Random {
    /// Returns a value in `[0, 1)`.
    fn next_unit(&mut self) -> f64;

    /// Returns a value uniformly distributed between `min` and `max`.
    fn next_range<T: Float>(&mut self, min: T, max: T) -> T {
        let t = T::from_f64(self.next_unit());
        min * (T::ONE - t) + max * t
    }

    /// Returns a normally distributed value with mean 0 and variance 1.
    fn next_gauss(&mut self) -> f64 {
        // Polar form of the Box-Muller transform.
        loop {
            let x = self.next_range(-1.0f64, 1.0);
            let y = self.next_range(-1.0f64, 1.0);
            let length2 = x * x + y * y;
            if length2 < 1.0 && length2 != 0.0 {
                return x * (-2.0 * length2.ln() / length2).sqrt();
            }
        }
    }
}

fn scramble(seed: u64) -> u64 {
    seed.wrapping_mul(0xa5a5_73a5) ^ 0x5a5a_5a5a
}

/// Fast linear congruential generator with 32 bits of state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rand32 {
    state: u32,
}

impl Rand32 {
    pub fn new(seed: u64) -> Self {
        let mut rand = Self { state: 0 };
        rand.init(seed);
        rand
    }

    /// Restarts the sequence from `seed`.
    pub fn init(&mut self, seed: u64) {
        self.state = scramble(seed) as u32;
    }

    pub fn nexti(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
        self.state
    }

    pub fn nextb(&mut self) -> bool {
        self.nexti() & 0x8000_0000 != 0
    }

    /// Returns a value in `[0, 1)`, built from the upper 23 bits of the next state.
    pub fn nextf(&mut self) -> f32 {
        f32::from_bits(0x3f80_0000 | (self.nexti() >> 9)) - 1.0
    }
}

impl Default for Rand32 {
    fn default() -> Self {
        Self::new(0)
    }
}

impl Random for Rand32 {
    fn next_unit(&mut self) -> f64 {
        f64::from(self.nextf())
    }
}

/// Linear congruential generator with 48 bits of state, following the `drand48` family.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rand48 {
    state: u64,
}

impl Rand48 {
    const A: u64 = 0x5_deec_e66d;
    const C: u64 = 0xb;
    const MASK: u64 = (1 << 48) - 1;

    pub fn new(seed: u64) -> Self {
        let mut rand = Self { state: 0 };
        rand.init(seed);
        rand
    }

    /// Restarts the sequence from `seed`.
    pub fn init(&mut self, seed: u64) {
        let seed = scramble(seed) & 0xffff_ffff;
        self.state = (seed << 16) | 0x330e;
    }

    fn step(&mut self) -> u64 {
        self.state = Self::A.wrapping_mul(self.state).wrapping_add(Self::C) & Self::MASK;
        self.state
    }

    /// Returns a value in `[0, 2^31)`.
    pub fn nexti(&mut self) -> u32 {
        (self.step() >> 17) as u32
    }

    pub fn nextb(&mut self) -> bool {
        self.nexti() & 1 != 0
    }

    /// Returns a value in `[0, 1)` with 48 bits of precision.
    pub fn nextf(&mut self) -> f64 {
        self.step() as f64 / (1u64 << 48) as f64
    }
}

impl Default for Rand48 {
    fn default() -> Self {
        Self::new(0)
    }
}

impl Random for Rand48 {
    fn next_unit(&mut self) -> f64 {
        self.nextf()
    }
}

/// Returns a random point inside the unit sphere (or disc, etc.), uniformly distributed.
pub fn solid_sphere_rand<T: Float, const N: usize>(rand: &mut impl Random) -> Vector<T, N> {
    loop {
        let p: Vector<T, N> = Vector::from_fn(|_| rand.next_range(-T::ONE, T::ONE));
        if p.length2() <= T::ONE {
            return p;
        }
    }
}

/// Returns a random point on the surface of the unit sphere, uniformly distributed.
pub fn hollow_sphere_rand<T: Float, const N: usize>(rand: &mut impl Random) -> Vector<T, N> {
    loop {
        let p: Vector<T, N> = Vector::from_fn(|_| rand.next_range(-T::ONE, T::ONE));
        let length = p.length();
        if length <= T::ONE && length != T::ZERO {
            return p / length;
        }
    }
}

/// Returns a random point in a normally distributed cloud around the origin.
pub fn gauss_sphere_rand<T: Float, const N: usize>(rand: &mut impl Random) -> Vector<T, N> {
    let direction = hollow_sphere_rand::<T, N>(rand);
    direction * T::from_f64(rand.next_gauss())
}

#[cfg(test)]
mod tests {
    use crate::{Vec2d, Vec2f, Vec3f};

    use super::*;

    /// Runs `next` on three generators seeded with 1 (one of them a clone) and one seeded with 2.
    fn compare<R, V>(new: impl Fn(u64) -> R, mut next: impl FnMut(&mut R) -> V)
    where
        R: Clone,
        V: PartialEq,
    {
        let mut r1a = new(1);
        let mut r1b = new(1);
        let mut r1c = r1a.clone();
        let mut r2 = new(2);
        let n = 100;
        let mut differ = 0;
        for _ in 0..n {
            let a = next(&mut r1a);
            assert!(next(&mut r1b) == a);
            assert!(next(&mut r1c) == a);
            if next(&mut r2) != a {
                differ += 1;
            }
        }
        assert!(differ > 0);
    }

    #[test]
    fn seeds_determine_sequences() {
        compare(Rand32::new, Rand32::nexti);
        compare(Rand32::new, Rand32::nextf);
        compare(Rand32::new, |r| r.next_range(-3.0f32, 5.0));
        compare(Rand32::new, |r| r.next_gauss());
        compare(Rand48::new, Rand48::nexti);
        compare(Rand48::new, Rand48::nextf);
        compare(Rand48::new, |r| r.next_gauss());

        compare(Rand32::new, |r| solid_sphere_rand::<f32, 2>(r));
        compare(Rand32::new, |r| hollow_sphere_rand::<f64, 3>(r));
        compare(Rand48::new, |r| gauss_sphere_rand::<f32, 3>(r));
        compare(Rand48::new, |r| solid_sphere_rand::<f64, 2>(r));
    }

    #[test]
    fn init_restarts_sequence() {
        let mut r = Rand32::new(10);
        let seq: Vec<bool> = (0..10).map(|_| r.nextb()).collect();
        r.init(10);
        assert!(seq.iter().all(|&b| r.nextb() == b));

        let mut r = Rand48::new(10);
        let seq: Vec<bool> = (0..10).map(|_| r.nextb()).collect();
        r.init(10);
        assert!(seq.iter().all(|&b| r.nextb() == b));
        assert_eq!(Rand48::default(), Rand48::new(0));
    }

    #[test]
    fn ranges() {
        let mut r32 = Rand32::new(7);
        let mut r48 = Rand48::new(7);
        let (mut heads, mut tails) = (0, 0);
        for _ in 0..1000 {
            let f = r32.nextf();
            assert!((0.0..1.0).contains(&f));
            let d = r48.nextf();
            assert!((0.0..1.0).contains(&d));
            assert!(r48.nexti() < 1 << 31);
            let v = r32.next_range(2.0f64, 4.0);
            assert!((2.0..=4.0).contains(&v));
            if r32.nextb() {
                heads += 1;
            } else {
                tails += 1;
            }
        }
        assert!(heads > 400 && tails > 400);
    }

    #[test]
    fn sphere_points() {
        let mut r = Rand48::new(3);
        for _ in 0..200 {
            let p: Vec3f = solid_sphere_rand(&mut r);
            assert!(p.length2() <= 1.0);
            let p: Vec2d = hollow_sphere_rand(&mut r);
            assert!((p.length() - 1.0).abs() < 1e-12);
            let p: Vec2f = hollow_sphere_rand(&mut r);
            assert!((p.length() - 1.0).abs() < 1e-6);
        }
    }
}
