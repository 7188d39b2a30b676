use hicpart_cli::pipeline::PipelineConfig;
use partitioner::error::PartitionError;
use std::path::PathBuf;
#[macro_use]
extern crate log;

fn main() -> Result<(), PartitionError> {
    let matches = hicpart_cli::hicpart_commands::hicpart_parser().get_matches();
    if let Some(("pipeline", sub_m)) = matches.subcommand() {
        let path: &String = sub_m.get_one("profile").unwrap();
        let file = std::fs::read_to_string(path)?;
        let config: PipelineConfig = toml::from_str(&file).unwrap();
        let outfiles = hicpart_cli::pipeline::run_pipeline(&config)?;
        for outfile in outfiles {
            println!("{}", outfile.display());
        }
        return Ok(());
    }
    if let Some((_, sub_m)) = matches.subcommand() {
        let level = match sub_m.get_count("verbose") {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
    }
    if let Some(("partition", sub_m)) = matches.subcommand() {
        debug!("START\tPartition");
        let config = partition_config(sub_m);
        let outfiles = hicpart_cli::pipeline::run_partition(&config)?;
        for outfile in outfiles {
            println!("{}", outfile.display());
        }
    }
    Ok(())
}

fn partition_config(matches: &clap::ArgMatches) -> PipelineConfig {
    let contigs_file: PathBuf = matches.get_one::<String>("contigs").unwrap().into();
    let edges_file: PathBuf = matches.get_one::<String>("edges").unwrap().into();
    let k: usize = matches
        .get_one("groups")
        .and_then(|e: &String| e.parse().ok())
        .expect("groups");
    let min_res: usize = matches
        .get_one("min_res")
        .and_then(|e: &String| e.parse().ok())
        .expect("min_res");
    let max_link_density: f64 = matches
        .get_one("max_link_density")
        .and_then(|e: &String| e.parse().ok())
        .expect("max_link_density");
    let assignments_out = matches.get_one::<String>("assignments").map(PathBuf::from);
    PipelineConfig::new(
        contigs_file,
        edges_file,
        k,
        min_res,
        max_link_density,
        assignments_out,
    )
}
