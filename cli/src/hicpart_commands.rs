use clap::{Arg, ArgAction, Command};

fn subcommand_partition() -> Command {
    Command::new("partition")
        .version("0.1")
        .about("Group contigs into K linkage groups from Hi-C contact counts.")
        .arg(
            Arg::new("verbose")
                .short('v')
                .action(ArgAction::Count)
                .help("Debug mode"),
        )
        .arg(
            Arg::new("contigs")
                .long("contigs")
                .short('c')
                .value_name("TSV")
                .required(true)
                .help("Per-contig RE-site counts and lengths (3 columns)."),
        )
        .arg(
            Arg::new("edges")
                .long("edges")
                .short('e')
                .value_name("TSV")
                .required(true)
                .help("Per-pair observed/expected link counts (8 columns)."),
        )
        .arg(
            Arg::new("groups")
                .long("groups")
                .short('k')
                .value_name("K")
                .required(true)
                .help("Number of linkage groups."),
        )
        .arg(
            Arg::new("min_res")
                .long("min_res")
                .value_name("MIN")
                .default_value("10")
                .help("Contigs with fewer RE sites are excluded."),
        )
        .arg(
            Arg::new("max_link_density")
                .long("max_link_density")
                .value_name("FACTOR")
                .default_value("2.0")
                .help("Link-density factor at or above which a contig is excluded as repetitive."),
        )
        .arg(
            Arg::new("assignments")
                .long("assignments")
                .value_name("PATH")
                .help("Dump the final dataset with its assignments as JSON."),
        )
}

fn subcommand_pipeline() -> Command {
    Command::new("pipeline")
        .version("0.1")
        .about("Run the whole partitioning pipeline from a TOML profile.")
        .arg(
            Arg::new("profile")
                .long("profile")
                .short('p')
                .value_name("TOML")
                .required(true)
                .help("Profile describing the run."),
        )
}

pub fn hicpart_parser() -> Command {
    Command::new("hicpart")
        .version("0.1")
        .about("Partition assembled contigs into linkage groups with Hi-C links.")
        .arg_required_else_help(true)
        .subcommand_required(true)
        .subcommand(subcommand_partition())
        .subcommand(subcommand_pipeline())
}
