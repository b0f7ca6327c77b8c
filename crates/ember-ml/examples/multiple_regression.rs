//! Multiple linear regression walk-through: load a small CSV, pick
//! features and a target by name or index, train, predict and export.

use std::io::Cursor;

use ember_ml::data::{ColumnId, ColumnStore};
use ember_ml::io::export_model;
use ember_ml::linear::{LinearRegression, TrainConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // y = 1.5*a - 2*c + 0.5, with a stray missing cell in b.
    let csv = "\
a,b,c,goal
-1,7,0.5,-2
-0.5,,1,-2.25
0,3,-1,2.5
0.5,1,0,1.25
1,4,-0.5,3
";
    let mut data = ColumnStore::from_reader(Cursor::new(csv.to_string()))?;

    // Mixed name/index identifiers; unknown names are silently skipped.
    data.select_features(vec![
        ColumnId::from(0usize),
        ColumnId::from("c"),
        ColumnId::from("not a column"),
    ])
    .select_target("goal");

    println!("{}", data);

    let mut model = LinearRegression::new(&data)?;
    println!("initial cost: {}", model.cost());

    model.train(&TrainConfig {
        epochs: 2000,
        learning_rate: 0.1,
        ..TrainConfig::default()
    })?;

    println!("final cost: {}", model.cost());

    // feature_row order is the reverse of selection order: [c, a].
    let prediction = model.predict(&[0.25, 1.0])?;
    println!("prediction for a=1, c=0.25: {}", prediction);

    let path = export_model("demo-model", model.bias(), model.weights())?;
    println!("exported to {}", path.display());

    Ok(())
}
