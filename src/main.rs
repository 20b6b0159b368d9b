use std::process;

use log::debug;
use rover_sim::parse_arguments;

fn main() {
    // Quiet by default; RUST_LOG=debug shows per-rover progress on stderr.
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp_secs()
        .try_init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let mission = match parse_arguments(&args) {
        Ok(mission) => mission,
        Err(e) => {
            eprintln!("error: {e}");
            eprintln!("usage: rover-sim WIDTH HEIGHT (X,Y,O) COMMANDS [(X,Y,O) COMMANDS ...]");
            process::exit(1);
        }
    };
    debug!(
        "parsed mission: {}x{} grid, {} rovers",
        mission.grid.width,
        mission.grid.height,
        mission.rovers.len()
    );

    let report = mission.run();
    println!("{report}");
}
