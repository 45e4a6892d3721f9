//! Basic levelgate usage example
//!
//! Demonstrates defining logging systems, the three call-site tiers, and
//! dynamic threshold changes.
//!
//! Run with: cargo run --example basic_usage

use levelgate::prelude::*;
use levelgate::{debug, error, fatal, info, msg, trace, verbose, warn};

fn main() -> Result<()> {
    println!("=== Levelgate - Basic Usage Example ===\n");

    // One registry for the whole process; systems are defined once and
    // declared anywhere else a handle is needed.
    let registry = Registry::new();
    let server = registry.define("server", Level::Info)?;

    println!(
        "1. Dynamic range is [{}, {}], threshold starts at {}:",
        DYNAMIC_LEVEL_MIN,
        DYNAMIC_LEVEL_MAX,
        server.level()
    );
    fatal!(server, "fatal message (hardwired)");
    error!(server, "error message (hardwired)");
    warn!(server, "warning message (dynamic, visible)");
    msg!(server, "terse message (dynamic, visible)");
    info!(server, "info message (dynamic, visible)");
    verbose!(server, "verbose message (dynamic, hidden at {})", Level::Info);
    debug!(server, "debug message (compiled out, never shown)");
    trace!(server, "trace message (compiled out, never shown)");

    println!("\n2. Raising the threshold to VERBOSE:");
    let handle = registry.declare("server")?;
    handle.set_level(Level::Verbose);
    verbose!(server, "verbose message (now visible)");

    println!("\n3. Lowering the threshold below the range clamps to the floor:");
    handle.set_level(LevelFilter::NONE);
    println!("   threshold is now {}", server.level());
    error!(server, "error message (still emitted: hardwired)");
    info!(server, "info message (now hidden)");

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
