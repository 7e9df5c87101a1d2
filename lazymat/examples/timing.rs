//! Times each deferred operation on two generated 20x20 matrices

use lazymat::{Matrix, Result};
use std::time::Instant;

fn main() -> Result<()> {
    const SIZE: usize = 20;
    let scalar: i32 = 123;

    // a counts down by 3 from SIZE, b continues up by 11 from where a stopped
    let mut n = SIZE as i32;
    let va: Vec<i32> = (0..SIZE * SIZE)
        .map(|_| {
            n -= 3;
            n
        })
        .collect();
    let vb: Vec<i32> = (0..SIZE * SIZE)
        .map(|_| {
            n += 11;
            n
        })
        .collect();

    let a = Matrix::from_vec(SIZE, SIZE, va)?;
    let b = Matrix::from_vec(SIZE, SIZE, vb)?;
    let mut c = Matrix::new();

    print!("A\n{a}B\n{b}");

    println!("adding A and B");
    let start = Instant::now();
    c.assign(&a + &b);
    println!("time taken: {} seconds", start.elapsed().as_secs_f64());

    println!("\nsubtracting B from A");
    let start = Instant::now();
    c.assign(&a - &b);
    println!("time taken: {} seconds", start.elapsed().as_secs_f64());

    println!("\nmultiplying A by scalar");
    let start = Instant::now();
    c.assign(&a * scalar);
    println!("time taken: {} seconds", start.elapsed().as_secs_f64());

    println!("\nmultiplying A and B");
    let start = Instant::now();
    c.assign(&a * &b);
    println!("time taken: {} seconds", start.elapsed().as_secs_f64());

    println!("\nlargest element of A * B: {}", c.max()?);
    Ok(())
}
