use ark_core::{
    DefaultAttributeNames, EncodeOpts, ItemCatalog, ItemCatalogData, JsonSink, LatLonCalculator,
    LatLonProjector, Lookups, NoCatalog, TextSink, ValueSink, write_creature_info,
    write_inventory_long, write_inventory_summary,
};
use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod load;

use load::CliError;

#[derive(Parser, Debug)]
#[command(
    name = "ark-cli",
    about = "Export decoded ARK creature and inventory records as JSON",
    version
)]
struct Cli {
    /// More log output on stderr (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// Write every creature in a record file as creature info objects
    Creatures(CreatureArgs),
    /// Write the items in a record file as an inventory listing
    Inventory(InventoryArgs),
    /// Export a record file, or every record file below a directory
    Dump(DumpArgs),
}

#[derive(ClapArgs, Debug)]
struct OutputArgs {
    /// Emit compact single-line JSON instead of pretty JSON
    #[arg(long, default_value_t = false)]
    compact: bool,
}

#[derive(ClapArgs, Debug)]
struct CreatureArgs {
    /// Record file (.json) produced by the save decoder
    path: PathBuf,
    /// Write every field, including ones still at their default
    #[arg(long, default_value_t = false)]
    all: bool,
    /// Add lat/lon using this map's projection (e.g. TheIsland)
    #[arg(long)]
    map: Option<String>,
    /// Current game time, overriding the one in the record file
    #[arg(long)]
    game_time: Option<f64>,
    #[command(flatten)]
    output: OutputArgs,
}

#[derive(ClapArgs, Debug)]
struct InventoryArgs {
    /// Record file (.json) produced by the save decoder
    path: PathBuf,
    /// Group by item class and write counts only
    #[arg(long, default_value_t = false)]
    summary: bool,
    /// Include isBlueprint on every item
    #[arg(long, default_value_t = false)]
    blueprints: bool,
    /// Item catalog (ark-tools data file) for display names
    #[arg(long)]
    catalog: Option<PathBuf>,
    #[command(flatten)]
    output: OutputArgs,
}

#[derive(ClapArgs, Debug)]
struct DumpArgs {
    /// Record file or directory of record files
    path: PathBuf,
    /// Write every creature field, including defaults
    #[arg(long, default_value_t = false)]
    all: bool,
    /// Inventory as grouped counts
    #[arg(long, default_value_t = false)]
    summary: bool,
    /// Include isBlueprint on every item
    #[arg(long, default_value_t = false)]
    blueprints: bool,
    #[arg(long)]
    map: Option<String>,
    #[arg(long)]
    catalog: Option<PathBuf>,
    #[arg(long)]
    game_time: Option<f64>,
    #[command(flatten)]
    output: OutputArgs,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let res = match cli.cmd {
        Cmd::Creatures(a) => cmd_creatures(a),
        Cmd::Inventory(a) => cmd_inventory(a),
        Cmd::Dump(a) => cmd_dump(a),
    };
    if let Err(e) = res {
        eprintln!("error: {}", e);
        std::process::exit(e.exit_code());
    }
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn projector_for(map: Option<&str>) -> Result<Option<LatLonCalculator>, CliError> {
    let Some(name) = map else {
        return Ok(None);
    };
    LatLonCalculator::for_map(name)
        .map(Some)
        .ok_or_else(|| CliError::UnknownMap {
            name: name.to_string(),
            known: LatLonCalculator::known_maps().collect::<Vec<_>>().join(", "),
        })
}

fn catalog_from(path: Option<&PathBuf>) -> Result<Option<ItemCatalogData>, CliError> {
    path.map(|p| load::load_catalog(p)).transpose()
}

// Runs `write` against a text sink or a value sink and prints the result.
fn emit(output: &OutputArgs, write: impl FnOnce(&mut dyn JsonSink)) {
    if output.compact {
        let mut sink = TextSink::new();
        write(&mut sink);
        println!("{}", sink.into_string());
    } else {
        let mut sink = ValueSink::new();
        write(&mut sink);
        match serde_json::to_string_pretty(&sink.into_value()) {
            Ok(s) => println!("{}", s),
            Err(e) => eprintln!("error: {}", e),
        }
    }
}

fn cmd_creatures(args: CreatureArgs) -> Result<(), CliError> {
    let projector = projector_for(args.map.as_deref())?;
    let mut records = load::load_records(&args.path)?;
    if args.game_time.is_some() {
        records.game_time = args.game_time;
    }
    emit(&args.output, |sink| {
        sink.begin_array(None);
        for creature in &records.creatures {
            write_creature_info(
                sink,
                creature,
                &records,
                &DefaultAttributeNames,
                projector.as_ref().map(|p| p as &dyn LatLonProjector),
                args.all,
                None,
            );
        }
        sink.end();
    });
    Ok(())
}

fn cmd_inventory(args: InventoryArgs) -> Result<(), CliError> {
    let catalog = catalog_from(args.catalog.as_ref())?;
    let catalog: &dyn ItemCatalog = match &catalog {
        Some(c) => c,
        None => &NoCatalog,
    };
    let records = load::load_records(&args.path)?;
    emit(&args.output, |sink| {
        if args.summary {
            write_inventory_summary(sink, &records.items, catalog, None);
        } else {
            write_inventory_long(
                sink,
                &records.items,
                catalog,
                &DefaultAttributeNames,
                args.blueprints,
                None,
            );
        }
    });
    Ok(())
}

fn cmd_dump(args: DumpArgs) -> Result<(), CliError> {
    let projector = projector_for(args.map.as_deref())?;
    let catalog = catalog_from(args.catalog.as_ref())?;
    let lookups = Lookups {
        attributes: &DefaultAttributeNames,
        catalog: match &catalog {
            Some(c) => c,
            None => &NoCatalog,
        },
        projector: projector.as_ref().map(|p| p as &dyn LatLonProjector),
    };
    let opts = EncodeOpts {
        write_all_fields: args.all,
        include_blueprint_status: args.blueprints,
        summary: args.summary,
    };
    let value = load::dump_path(&args.path, lookups, opts, args.game_time)?;
    let text = if args.output.compact {
        serde_json::to_string(&value)
    } else {
        serde_json::to_string_pretty(&value)
    };
    match text {
        Ok(s) => println!("{}", s),
        Err(e) => eprintln!("error: {}", e),
    }
    Ok(())
}
