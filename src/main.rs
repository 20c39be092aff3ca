use lab_simulation::trajectory_system::impact::ImpactBurst;
use lab_simulation::*;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

const FRAME_SECONDS: f64 = 1.0 / 60.0;

fn load_config() -> Result<SimulationConfig, Box<dyn std::error::Error>> {
    match std::env::var("LAB_SIM_CONFIG") {
        Ok(path) => {
            info!("Loading config from {}", path);
            let json = std::fs::read_to_string(&path)?;
            Ok(SimulationConfig::from_json(&json)?)
        }
        Err(_) => Ok(SimulationConfig::default()),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let log_level = match std::env::var("LAB_SIM_LOG")
        .unwrap_or_default()
        .to_lowercase()
        .as_str()
    {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = load_config()?;

    // Projectile run, frame by frame
    let params = ProjectileParameters::try_new(
        DEFAULT_LAUNCH_SPEED,
        DEFAULT_LAUNCH_ANGLE,
        DEFAULT_LAUNCH_HEIGHT,
        STANDARD_GRAVITY,
    )?;
    let mut experiment = ProjectileExperiment::new(params, config)?;
    let metrics = experiment.trajectory().metrics();
    info!(
        "Time of flight: {:.2} s | Range: {:.2} m | Max height: {:.2} m",
        metrics.time_of_flight, metrics.range, metrics.max_height
    );

    let mut telemetry = Telemetry::new();
    let mut now = 0.0;
    let mut ticket = Some(experiment.launch(now));
    let mut burst_shown = false;

    while let Some(current) = ticket {
        now += FRAME_SECONDS;
        ticket = experiment.on_frame(current, now);
        let snapshot = experiment.snapshot();

        if snapshot.impact && !burst_shown {
            let burst = ImpactBurst::generate(&mut rand::thread_rng(), config.impact_particle_count);
            info!("Impact! {} particles", burst.particles.len());
            burst_shown = true;
        }
        telemetry.collect_data(&snapshot, now);
    }
    telemetry.display_data();

    // Ohm's law circuit
    let mut circuit = OhmExperiment::default();
    circuit.toggle();
    for _ in 0..60 {
        circuit.advance(FRAME_SECONDS);
    }
    let reading = circuit.reading();
    info!(
        "Circuit: {:.1} V across {:.0} Ω draws {:.4} A ({:.2} mA)",
        circuit.parameters().voltage,
        circuit.parameters().resistance,
        reading.current_amps,
        reading.current_milliamps
    );

    // Orbit with a pause in the middle
    let mut orbit = OrbitExperiment::new(OrbitParameters::default(), &config);
    for frame in 0..600 {
        if frame == 200 || frame == 400 {
            orbit.toggle_pause();
        }
        orbit.advance(FRAME_SECONDS);
    }
    let orbit_snapshot = orbit.snapshot();
    if orbit_snapshot.is_paused {
        warn!("Orbit left paused");
    }
    info!("{}", serde_json::to_string_pretty(&orbit_snapshot)?);

    Ok(())
}
