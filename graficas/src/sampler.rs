use crate::expression::Expression;

#[cfg(all(feature = "parallel", not(target_arch = "wasm32")))]
use rayon::prelude::*;

/// Evenly spaced sampling of `[from, to]` in `steps` intervals.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Sampler {
    pub from: f64,
    pub to: f64,
    pub steps: usize,
}

impl Sampler {
    pub fn new(from: f64, to: f64, steps: usize) -> Self {
        Sampler{from, to, steps}
    }

    /// Abscissa of the `i`-th sample, hitting `to` exactly at the end.
    pub fn x(&self, i: usize) -> f64 {
        if self.steps == 0 || i == 0 {
            self.from
        } else if i >= self.steps {
            self.to
        } else {
            self.from + (self.to - self.from) * (i as f64) / (self.steps as f64)
        }
    }

    pub fn abscissae(&self) -> impl Iterator<Item = f64> + '_ {
        (0..=self.steps).map(move |i| self.x(i))
    }

    /// Every sample, non-finite ones included.
    pub fn sample(&self, expr: &Expression) -> Vec<(f64, f64)> {
        let point = |i: usize| {
            let x = self.x(i);
            (x, expr.evaluate(x))
        };
        #[cfg(all(feature = "parallel", not(target_arch = "wasm32")))]
        let points: Vec<(f64, f64)> = (0..=self.steps).into_par_iter().map(point).collect();
        #[cfg(not(all(feature = "parallel", not(target_arch = "wasm32"))))]
        let points: Vec<(f64, f64)> = (0..=self.steps).map(point).collect();
        points
    }

    /// Runs of consecutive finite samples. Non-finite samples break the
    /// curve and are dropped.
    pub fn segments(&self, expr: &Expression) -> Vec<Vec<(f64, f64)>> {
        let mut segments = Vec::new();
        let mut current = Vec::new();
        let mut skipped = 0;
        for (x, y) in self.sample(expr) {
            if y.is_finite() {
                current.push((x, y));
            } else {
                skipped += 1;
                if !current.is_empty() {
                    segments.push(std::mem::take(&mut current));
                }
            }
        }
        if !current.is_empty() {
            segments.push(current);
        }
        log::trace!("{}: {} segments, {} non-finite samples",
                    expr.to_canonical(), segments.len(), skipped);
        segments
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_are_exact() {
        let s = Sampler::new(-1.0, 0.3, 7);
        let xs: Vec<f64> = s.abscissae().collect();
        assert_eq!(xs.len(), 8);
        assert_eq!(xs[0], -1.0);
        assert_eq!(xs[7], 0.3);
        assert!(xs.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn zero_steps_is_one_point() {
        let s = Sampler::new(2.0, 5.0, 0);
        assert_eq!(s.abscissae().collect::<Vec<_>>(), vec![2.0]);
    }

    #[test]
    fn samples_in_order() {
        let expr = Expression::parse("x * x + 1").unwrap();
        let points = Sampler::new(0.0, 4.0, 4).sample(&expr);
        assert_eq!(points, vec![(0.0, 1.0), (1.0, 2.0), (2.0, 5.0), (3.0, 10.0), (4.0, 17.0)]);
    }

    #[test]
    fn non_finite_splits_segments() {
        let expr = Expression::parse("1 / x").unwrap();
        let segments = Sampler::new(-2.0, 2.0, 4).segments(&expr);
        assert_eq!(segments, vec![
            vec![(-2.0, -0.5), (-1.0, -1.0)],
            vec![(1.0, 1.0), (2.0, 0.5)],
        ]);

        let expr = Expression::parse("sqrt(x)").unwrap();
        let segments = Sampler::new(-2.0, 1.0, 3).segments(&expr);
        assert_eq!(segments, vec![vec![(0.0, 0.0), (1.0, 1.0)]]);

        let expr = Expression::parse("ln(-1 - x^2)").unwrap();
        assert!(Sampler::new(-1.0, 1.0, 10).segments(&expr).is_empty());
    }

    #[test]
    fn sample_matches_sequential_evaluation() {
        let sampler = Sampler::new(-2.0, 2.0, 1_000);
        for source in ["x * x + 1", "1 / x", "sqrt(x)", "ln(-1 - x^2)"] {
            let expr = Expression::parse(source).unwrap();
            let sequential: Vec<(f64, f64)> = sampler.abscissae()
                .map(|x| (x, expr.evaluate(x)))
                .collect();
            let sampled = sampler.sample(&expr);
            assert_eq!(sampled.len(), sequential.len());
            for (a, b) in sampled.iter().zip(&sequential) {
                assert_eq!(a.0.to_bits(), b.0.to_bits());
                assert_eq!(a.1.to_bits(), b.1.to_bits());
            }
        }
    }
}
