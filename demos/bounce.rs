//! Plays an eased bounce back and forth and prints the sampled frames,
//! standing in for the uniform upload a renderer would do with each value.

use segue::{Driver, Transition};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let mut driver = Driver::new(Transition::ease(0.0f64, 1.0, 2.0)?);
    driver.forward();

    let dt = 1.0 / 30.0;
    for frame in 0..90 {
        if driver.advance(dt) {
            println!("frame {frame:3}: t = {:.4}", driver.value());
        }
        if driver.transition().fraction() >= 1.0 {
            driver.backward();
        } else if driver.transition().fraction() <= 0.0 && driver.direction() < 0.0 {
            driver.forward();
        }
    }

    Ok(())
}
