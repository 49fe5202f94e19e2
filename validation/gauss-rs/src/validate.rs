//! Cross-checks gauss-rs against nalgebra on JSON-described cases.
//!
//! Each `*.json` file in `../cases` holds a square matrix `a` and a constant
//! vector `b`. For every case the validator computes the determinant, the
//! inverse and the solution of `A x = b` with each method, compares them
//! against nalgebra's LU results and writes a report to `../output/gauss_rs`.

use gauss_rs::prelude::*;
use nalgebra::{DMatrix, DVector};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize, Serialize)]
struct ValidationData {
    name: String,
    #[serde(default)]
    notes: String,
    input: InputData,
    #[serde(skip_deserializing)]
    result: ResultData,
}

#[derive(Debug, Deserialize, Serialize)]
struct InputData {
    a: Vec<Vec<f64>>,
    b: Vec<f64>,
}

#[derive(Debug, Deserialize, Serialize, Default)]
struct ResultData {
    determinant: f64,
    determinant_error: f64,
    inverse_error: Option<f64>,
    solution: Option<Vec<f64>>,
    solution_errors: Vec<MethodError>,
}

#[derive(Debug, Deserialize, Serialize)]
struct MethodError {
    method: String,
    max_abs_error: f64,
}

fn main() -> Result<(), Box<dyn Error>> {
    let input_dir = Path::new("../cases");
    let output_dir = Path::new("../output/gauss_rs");

    if !input_dir.exists() {
        eprintln!("Input directory {:?} does not exist.", input_dir);
        return Ok(());
    }

    fs::create_dir_all(output_dir)?;

    for entry in fs::read_dir(input_dir)? {
        let path = entry?.path();
        if path.extension().and_then(|s| s.to_str()) == Some("json") {
            println!("Processing {:?}", path.file_name().unwrap_or_default());
            process_file(&path, output_dir)?;
        }
    }

    Ok(())
}

fn process_file(input_path: &Path, output_dir: &Path) -> Result<(), Box<dyn Error>> {
    let file = fs::File::open(input_path)?;
    let mut data: ValidationData = serde_json::from_reader(file)?;

    let engine = Engine::new().trace_threshold(0).build()?;
    let a = Matrix::from_rows(data.input.a.clone())?;
    let b = Matrix::column_vector(&data.input.b);
    let n = a.rows();

    let reference = DMatrix::from_row_slice(n, a.cols(), a.as_slice());
    let lu = reference.clone().lu();

    let det = engine.determinant(&a, RowReduction)?.value;
    data.result.determinant = det;
    data.result.determinant_error = (det - lu.determinant()).abs();

    if let (Ok(inv), Some(expected)) = (engine.inverse(&a, Augment), lu.try_inverse()) {
        let err = (0..n)
            .flat_map(|i| (0..n).map(move |j| (i, j)))
            .map(|(i, j)| (inv.matrix[(i, j)] - expected[(i, j)]).abs())
            .fold(0.0, f64::max);
        data.result.inverse_error = Some(err);
    }

    if let Some(expected) = reference.lu().solve(&DVector::from_column_slice(&data.input.b)) {
        for (name, method) in [
            ("gauss", Gauss),
            ("gauss_jordan", GaussJordan),
            ("cramer", Cramer),
            ("inverse", Inverse),
        ] {
            let x = match engine.solve(&a, &b, method).map(|r| r.solution) {
                Ok(Solution::Unique(x)) => x.col(0)?,
                Ok(other) => {
                    eprintln!("  {}: {} returned {:?}", data.name, name, other);
                    continue;
                }
                Err(err) => {
                    eprintln!("  {}: {} failed: {}", data.name, name, err);
                    continue;
                }
            };
            let max_abs_error = x
                .iter()
                .zip(expected.iter())
                .map(|(got, want)| (got - want).abs())
                .fold(0.0, f64::max);
            data.result.solution_errors.push(MethodError {
                method: name.to_string(),
                max_abs_error,
            });
            if data.result.solution.is_none() {
                data.result.solution = Some(x);
            }
        }
    }

    let output_path = output_dir.join(input_path.file_name().unwrap_or_default());
    fs::write(output_path, serde_json::to_string_pretty(&data)?)?;

    Ok(())
}
