//! Utility functions for randomly generating student records
use ndarray_rand::{
    rand::Rng,
    rand_distr::{Distribution, Normal},
};

use crate::encode::StudentDataset;
use crate::schema::{StudentRecord, StudyFactors};

/// Intercept and per feature effects of the synthetic performance index
pub const SYNTHETIC_INTERCEPT: f64 = -34.08;
pub const SYNTHETIC_COEFFICIENTS: [f64; 5] = [2.85, 1.02, 0.61, 0.48, 0.19];

/// Generates `nsamples` students whose performance index is a known linear function of their
/// study factors plus gaussian noise with standard deviation `noise`.
///
/// Factors are drawn uniformly from the ranges observed in real surveys: 1 to 9 study hours,
/// previous scores between 40 and 99, 4 to 9 hours of sleep and 0 to 9 practice papers. The
/// index is rounded to whole points like in the original survey data.
///
/// # Example
/// ```
/// use perfindex_datasets::generate::synthetic_students;
/// use rand::SeedableRng;
/// use rand_isaac::Isaac64Rng;
///
/// let mut rng = Isaac64Rng::seed_from_u64(42);
/// let students = synthetic_students(100, 2.0, &mut rng);
/// assert_eq!(students.len(), 100);
/// ```
pub fn synthetic_students(nsamples: usize, noise: f64, rng: &mut impl Rng) -> StudentDataset {
    let noise = Normal::new(0.0, noise.abs()).ok();

    let records = (0..nsamples)
        .map(|_| {
            let factors = StudyFactors {
                hours_studied: rng.gen_range(1..=9),
                previous_scores: f64::from(rng.gen_range(40u32..=99)),
                extracurricular_activities: rng.gen_bool(0.5),
                sleep_hours: rng.gen_range(4..=9),
                sample_question_papers_practiced: rng.gen_range(0..=9),
            };

            let index = SYNTHETIC_INTERCEPT
                + factors
                    .to_array()
                    .iter()
                    .zip(SYNTHETIC_COEFFICIENTS.iter())
                    .map(|(x, c)| x * c)
                    .sum::<f64>()
                + noise.map_or(0.0, |n| n.sample(rng));

            StudentRecord {
                factors,
                performance_index: index.round().max(10.).min(100.),
            }
        })
        .collect();

    StudentDataset::new(records)
}
