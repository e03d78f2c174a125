use ndarray::Array1;
use perfindex::prelude::*;
use perfindex_linear::{LinearRegression, Result};
use rand::SeedableRng;
use rand_isaac::Isaac64Rng;

fn main() -> Result<()> {
    // load the bundled student performance sample
    let dataset = perfindex_datasets::student_performance();

    // hold back a fifth of the students for validation
    let mut rng = Isaac64Rng::seed_from_u64(42);
    let (train, valid) = dataset.train_test_split(0.2, &mut rng)?;

    let model = LinearRegression::default().fit(&train)?;

    println!("intercept:  {}", model.intercept());
    for (name, param) in train.feature_names().iter().zip(model.params()) {
        println!("{:>34}: {:.3}", name, param);
    }

    // validate
    let y_est: Array1<f64> = model.predict(valid.records());
    println!("mean squared error: {}", y_est.mean_squared_error(valid.targets())?);
    println!("r2 score:           {}", y_est.r2(valid.targets())?);

    Ok(())
}
