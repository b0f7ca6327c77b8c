//! Single-feature regression over generated data, with a custom training
//! observer instead of the default console logger.

use std::io::Cursor;

use ember_ml::data::ColumnStore;
use ember_ml::linear::{LinearRegression, TrainConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // y = 10x - 5, sampled on [-1, 1].
    let mut csv = String::from("x,y\n");
    for i in -50..=50 {
        let x = i as f64 / 50.0;
        csv.push_str(&format!("{},{}\n", x, 10.0 * x - 5.0));
    }

    let mut data = ColumnStore::from_reader(Cursor::new(csv))?;
    data.select_features(vec!["x"]).select_target("y");

    let mut model = LinearRegression::new(&data)?;

    let cfg = TrainConfig {
        epochs: 1500,
        learning_rate: 0.05,
        ..TrainConfig::default()
    };
    model.train_with(&cfg, |s| {
        println!("iter {:>5}  J = {:.8}", s.iteration, s.cost);
    })?;

    let x = 0.3;
    println!("f({}) = {}", x, model.predict(&[x])?);

    Ok(())
}
