use clap::{Parser, Subcommand};
use home_security_monitor::config::{self, Config};
use home_security_monitor::error::Result;
use home_security_monitor::image::FakeImageService;
use home_security_monitor::input::{CameraInput, run_camera_feed, run_sensor_simulation};
use home_security_monitor::listeners::LoggingStatusListener;
use home_security_monitor::repository::InMemorySecurityRepository;
use home_security_monitor::security::{ArmingStatus, SecurityService};
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::signal;
use tokio::time::Duration;

#[derive(Parser)]
#[command(name = "home-security-monitor", version, about = "Home security alarm monitor")]
struct Cli {
    /// Path to a JSON configuration file
    #[arg(long, env = "SECURITY_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run the monitor until Ctrl+C
    Run {
        /// Arming status to apply at startup
        #[arg(long)]
        arm: Option<ArmingStatus>,
    },
    /// Print the configured initial state as JSON and exit
    Status,
}

fn init_logger() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();
}

fn build_service(config: &Config) -> SecurityService {
    let repository = Arc::new(InMemorySecurityRepository::with_sensors(
        config.initial_sensors(),
    ));
    let image_service = Arc::new(match config.simulation.seed {
        Some(seed) => FakeImageService::with_seed(seed),
        None => FakeImageService::new(),
    });
    SecurityService::new(repository, image_service)
}

fn main() {
    // Load .env file before anything else, while the process is single-threaded
    config::load_dotenv();
    init_logger();

    let cli = Cli::parse();
    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            log::error!("Failed to start tokio runtime: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = runtime.block_on(run(cli)) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let mut config = Config::load(cli.config.as_deref())?;

    match cli.command.unwrap_or(Command::Run { arm: None }) {
        Command::Status => {
            let service = build_service(&config);
            service.set_arming_status(config.initial_arming_status)?;
            println!("{}", serde_json::to_string_pretty(&service.snapshot()?)?);
            Ok(())
        }
        Command::Run { arm } => {
            if let Some(arm) = arm {
                config.initial_arming_status = arm;
            }
            run_monitor(config).await
        }
    }
}

async fn run_monitor(config: Config) -> Result<()> {
    info!("Starting Home Security Monitor");
    info!("Configuration loaded:");
    info!("  Sensors: {}", config.sensors.len());
    info!("  Camera interval: {}s", config.camera.capture_interval_secs);
    info!(
        "  Sensor simulation: {}",
        if config.simulation.enabled {
            "enabled"
        } else {
            "disabled"
        }
    );

    let service = Arc::new(build_service(&config));
    service.add_status_listener(Arc::new(LoggingStatusListener));
    service.set_arming_status(config.initial_arming_status)?;

    let camera = Arc::new(CameraInput::new(config.camera.clone()));
    camera.initialize();
    let camera_task = run_camera_feed(camera.clone(), service.clone());

    let simulation_task = config.simulation.enabled.then(|| {
        let rng = match config.simulation.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        run_sensor_simulation(
            service.clone(),
            Duration::from_secs(config.simulation.sensor_interval_secs),
            rng,
        )
    });

    info!("Home Security Monitor is running");
    info!("  - Arming status: {}", service.arming_status()?);
    info!("  - Press Ctrl+C to exit");

    // Wait for shutdown signal
    match signal::ctrl_c().await {
        Ok(()) => {
            info!("Received shutdown signal");
        }
        Err(e) => {
            log::error!("Failed to listen for shutdown signal: {}", e);
        }
    }

    camera.shutdown();
    camera_task.abort();
    if let Some(task) = simulation_task {
        task.abort();
    }

    let snapshot = service.snapshot()?;
    info!(
        "Final state: {} / {} ({} frames analyzed)",
        snapshot.arming_status,
        snapshot.alarm_status,
        camera.frames_captured()
    );
    info!("Home Security Monitor stopped");
    Ok(())
}
