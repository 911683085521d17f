//! End-to-end smoke test for Correlation.
//!
//! Looks constants up through the generated repositories and reports the
//! result, exiting with an error on the first mismatch.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

use anyhow::{ensure, Context, Result};
use correlation_e2e::{AnnotatedClass, AnnotatedClassRepository, Planet, PlanetRepository};

fn check_annotated_class() -> Result<()> {
    let first = AnnotatedClassRepository::find_by_f(1).context("find_by_f(1) found nothing")?;
    ensure!(*first == AnnotatedClass::First, "find_by_f(1) returned {:?}", first);
    ensure!(first.get_s() == "10", "First.get_s() returned {}", first.get_s());
    ensure!(AnnotatedClassRepository::find_by_f(10).is_none(), "find_by_f(10) found a constant");

    let second =
        AnnotatedClassRepository::find_by_s("20").context("find_by_s(\"20\") found nothing")?;
    ensure!(*second == AnnotatedClass::Second, "find_by_s(\"20\") returned {:?}", second);
    ensure!(second.get_f() == 2, "Second.get_f() returned {}", second.get_f());
    ensure!(
        AnnotatedClassRepository::find_by_s("300").is_none(),
        "find_by_s(\"300\") found a constant"
    );
    Ok(())
}

fn check_planet() -> Result<()> {
    let earth = PlanetRepository::find_by_name("Earth")
        .context("find_by_name(\"Earth\") found nothing")?;
    ensure!(*earth == Planet::Earth, "find_by_name(\"Earth\") returned {:?}", earth);

    // Mercury and Venus both have no moons; Venus is declared last
    let moonless = PlanetRepository::find_by_moons(0).context("find_by_moons(0) found nothing")?;
    ensure!(*moonless == Planet::Venus, "find_by_moons(0) returned {:?}", moonless);
    Ok(())
}

fn main() -> Result<()> {
    println!("Running AnnotatedClass lookups...");
    check_annotated_class()?;

    println!("Running Planet lookups...");
    check_planet()?;

    println!("All lookups returned the expected constants.");
    Ok(())
}
