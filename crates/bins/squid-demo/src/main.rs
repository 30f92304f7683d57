#![warn(clippy::all, rust_2021_compatibility)]

mod cli;

use squid::{matrix, vector, Matrix, Vector};

pub fn main() -> Result<(), Box<dyn std::error::Error>> {
    let (args, launch_time) = cli::parse_args::<cli::CliArgs>();
    cli::setup_logging(args.log_timestamp.then_some(launch_time), args.log_level);
    cli::log_launch("squid-demo", launch_time);

    let dot = dot_product();
    log::info!("Dot product of the sample vectors: {}", dot);

    let quotients = scaled_quotients();
    log::info!("Scaled and divided vector: {}", quotients);

    let grown = grown_product();
    log::info!("Grown product has shape {:?}", grown.shape());
    log::debug!("First row: {}, last row: {}", grown.row(0)?, grown.row(4)?);

    if !args.quiet {
        println!("{}", dot);

        quotients.for_each(|x| print!("{}, ", x));
        println!();
        println!();

        for row in grown.rows() {
            row.for_each(|x| print!("{}, ", x));
            println!();
        }
    }

    Ok(())
}

/// Dot product of `[1, 3, 5, 6]` and `[2, 1, 3, 9]`.
fn dot_product() -> i32 {
    let v1: Vector<i32, 4> = vector![1, 3, 5, 6];
    let v2: Vector<i32, 4> = vector![2, 1, 3, 9];
    log::debug!("{} . {}", v1, v2);
    v1.dot(&v2)
}

/// `6 * [1, 3, 5, 6]`, each element divided by 1.21.
fn scaled_quotients() -> Vector<f64, 4> {
    let v: Vector<i32, 4> = vector![1, 3, 5, 6];
    (6i32 * v).cast::<f64>().map(|x| x / 1.21)
}

/// `(2.2 * m1) * m2` with every element shifted by -100.2 row by row, grown by
/// one row at the bottom and one at the top.
#[allow(clippy::approx_constant)]
fn grown_product() -> Matrix<f64, 5, 3> {
    let m1: Matrix<i32, 3, 2> = matrix![
        5, 2;
        1, 2;
        3, 4
    ];
    let m2: Matrix<i32, 2, 3> = matrix![
        1, -2, 6;
        3, 4, -1
    ];
    let product = (2.2f64 * m1.cast::<f64>()) * m2.cast::<f64>();
    log::trace!("Product before shifting:\n{}", product);

    product
        .rows()
        .map(|row| row.map(|x| x - 100.2))
        .append_row::<4>(vector![4.13, 1.2, 9.9])
        .push_row::<5>(vector![3.14, 2.1, 1.1])
}
