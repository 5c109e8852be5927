use galics::{ScenarioConfig, Scenario, ClusterInfo, StateLayout};
use galics::{write_galaxy_state, write_cluster_table};
use galics::{bench_enclosed_mass, bench_disk_curve};

use clap::Parser;
use anyhow::{Context, Result};

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "Generate t = 0 states for idealized galaxies")]
struct Args {
    /// Scenario YAML; looked up under `scenarios/` when not found as given
    #[arg(short, default_value = "disk_2d.yaml")]
    file_name: String,

    /// Where to write the state block
    #[arg(short, default_value = "initial_state.txt")]
    output: PathBuf,

    /// Also write the tab-separated cluster table here
    #[arg(long)]
    table: Option<PathBuf>,

    /// Leave out the mass line, as the legacy viewers expect
    #[arg(long)]
    no_masses: bool,

    /// Run the enclosed-mass benchmarks instead of generating
    #[arg(long)]
    bench: bool,
}

fn scenario_path(file_name: &str) -> PathBuf {
    let given = PathBuf::from(file_name);
    if given.exists() {
        return given;
    }
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name)
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = scenario_path(file_name);
    let file = File::open(&config_path)
        .with_context(|| format!("opening scenario {}", config_path.display()))?;
    let reader = BufReader::new(file);
    let scenario_cfg = ScenarioConfig::from_reader(reader)
        .with_context(|| format!("parsing scenario {}", config_path.display()))?;

    log::debug!("{:?}", scenario_cfg);

    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if args.bench {
        bench_enclosed_mass();
        bench_disk_curve();
        return Ok(());
    }

    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    let scenario = Scenario::build_scenario(scenario_cfg)?;

    let mut out = BufWriter::new(File::create(&args.output)
        .with_context(|| format!("creating {}", args.output.display()))?);
    let layout = if args.no_masses { StateLayout::PhaseSpace } else { StateLayout::WithMasses };
    write_galaxy_state(&mut out, 0.0, &scenario.galaxy, layout)?;
    out.flush()?;
    log::info!("wrote {} particles to {}", scenario.galaxy.len(), args.output.display());

    if let Some(table_path) = &args.table {
        let info = ClusterInfo::for_galaxy(&scenario.galaxy, 1);
        let mut table = BufWriter::new(File::create(table_path)
            .with_context(|| format!("creating {}", table_path.display()))?);
        write_cluster_table(&mut table, &[info])?;
        table.flush()?;
    }

    Ok(())
}
