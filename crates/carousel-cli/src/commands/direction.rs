use anyhow::Result;

use carousel_core::geometry::resolve_direction;

pub fn run(start: usize, end: usize, wrapping: bool) -> Result<()> {
    let direction = resolve_direction(start, end, wrapping);
    tracing::debug!(start, end, wrapping, ?direction, "Resolved direction");
    println!("{}", direction.signum());
    Ok(())
}
