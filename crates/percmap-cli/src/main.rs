use percmap::{
    Attribute, Brand, Engine, Lang, MapStrategy, Project, ReferencePopulation, Response,
};
use std::io::Read;
use std::str::FromStr;

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io(std::io::Error),
    Map(percmap::Error),
    Json(serde_json::Error),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Map(err) => write!(f, "{err}"),
            CliError::Json(err) => write!(f, "JSON error: {err}"),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<percmap::Error> for CliError {
    fn from(value: percmap::Error) -> Self {
        Self::Map(value)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

#[derive(Debug, Clone, Copy, Default)]
enum Command {
    #[default]
    Compute,
    Summary,
    Validate,
    Seed,
}

#[derive(Debug, Clone, Copy, Default)]
enum StrategyArg {
    #[default]
    Mds,
    Pca,
}

impl FromStr for StrategyArg {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mds" => Ok(Self::Mds),
            "pca" => Ok(Self::Pca),
            _ => Err(()),
        }
    }
}

impl From<StrategyArg> for MapStrategy {
    fn from(value: StrategyArg) -> Self {
        match value {
            StrategyArg::Mds => MapStrategy::ClassicalMds,
            StrategyArg::Pca => MapStrategy::PcaBiplot,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
enum ReferenceArg {
    #[default]
    All,
    NoIdeal,
}

impl FromStr for ReferenceArg {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "no-ideal" => Ok(Self::NoIdeal),
            _ => Err(()),
        }
    }
}

impl From<ReferenceArg> for ReferencePopulation {
    fn from(value: ReferenceArg) -> Self {
        match value {
            ReferenceArg::All => ReferencePopulation::AllBrands,
            ReferenceArg::NoIdeal => ReferencePopulation::ExcludeIdeal,
        }
    }
}

#[derive(Debug, Default)]
struct Args {
    command: Command,
    input: Option<String>,
    pretty: bool,
    strategy: StrategyArg,
    reference: ReferenceArg,
}

fn usage() -> &'static str {
    "percmap-cli\n\
\n\
USAGE:\n\
  percmap-cli [compute] [--pretty] [--strategy mds|pca] [--reference all|no-ideal] [<path>|-]\n\
  percmap-cli summary [--pretty] [--strategy mds|pca] [--reference all|no-ideal] [<path>|-]\n\
  percmap-cli validate [<path>|-]\n\
  percmap-cli seed [--pretty]\n\
\n\
NOTES:\n\
  - If <path> is omitted or '-', the project JSON is read from stdin.\n\
  - compute prints the map geometry; summary wraps it with the display tables.\n\
  - seed prints a ready-to-edit demo project with sample responses.\n\
"
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut args = Args::default();
    let mut rest = argv.iter().peekable();

    if let Some(first) = rest.peek() {
        match first.as_str() {
            "compute" => {
                rest.next();
            }
            "summary" => {
                args.command = Command::Summary;
                rest.next();
            }
            "validate" => {
                args.command = Command::Validate;
                rest.next();
            }
            "seed" => {
                args.command = Command::Seed;
                rest.next();
            }
            "help" | "--help" | "-h" => return Err(CliError::Usage(usage())),
            _ => {}
        }
    }

    while let Some(arg) = rest.next() {
        match arg.as_str() {
            "--pretty" => args.pretty = true,
            "--strategy" => {
                let value = rest
                    .next()
                    .ok_or(CliError::Usage("--strategy requires a value (mds|pca)"))?;
                args.strategy = value
                    .parse()
                    .map_err(|_| CliError::Usage("--strategy must be 'mds' or 'pca'"))?;
            }
            "--reference" => {
                let value = rest.next().ok_or(CliError::Usage(
                    "--reference requires a value (all|no-ideal)",
                ))?;
                args.reference = value
                    .parse()
                    .map_err(|_| CliError::Usage("--reference must be 'all' or 'no-ideal'"))?;
            }
            "--help" | "-h" => return Err(CliError::Usage(usage())),
            _ if arg.starts_with("--") => return Err(CliError::Usage(usage())),
            _ => {
                if args.input.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.input = Some(arg.clone());
            }
        }
    }

    Ok(args)
}

fn read_input(input: Option<&str>) -> Result<String, CliError> {
    match input {
        None | Some("-") => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
        Some(path) => Ok(std::fs::read_to_string(path)?),
    }
}

fn print_json<T: serde::Serialize>(value: &T, pretty: bool) -> Result<(), CliError> {
    let text = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{text}");
    Ok(())
}

fn attribute(id: &str, label_es: &str, label_en: &str, reversed: bool) -> Attribute {
    Attribute {
        id: id.to_string(),
        label_es: label_es.to_string(),
        label_en: label_en.to_string(),
        reversed,
    }
}

fn sample_response(ts: i64, scores: &[(&str, [u8; 7])]) -> Response {
    let attr_ids = ["taste", "pack", "nat", "nopulp", "color", "price", "aroma"];
    let mut response = Response {
        ts,
        ..Default::default()
    };
    for (brand, values) in scores {
        let rated = attr_ids
            .iter()
            .zip(values)
            .map(|(id, v)| (id.to_string(), *v))
            .collect();
        response.performance.insert(brand.to_string(), rated);
    }
    response
}

/// The demo juice-brand project, with a handful of plausible responses so the
/// map is non-degenerate out of the box.
fn seed_project() -> Project {
    let ts = chrono::Utc::now().timestamp_millis();

    Project {
        id: uuid::Uuid::new_v4().to_string(),
        lang: Lang::Es,
        brands: vec![
            Brand {
                name: "Don Simon".to_string(),
                color: Some("#0D1B2A".to_string()),
            },
            Brand::new("Hacendado"),
            Brand::new("Alpiendo"),
            Brand::new("Granini"),
            Brand {
                name: "IDEAL".to_string(),
                color: Some("#2CAFBF".to_string()),
            },
        ],
        attributes: vec![
            attribute("taste", "Sabor", "Taste", false),
            attribute("pack", "Envase útil", "Convenient packaging", false),
            attribute("nat", "Naturalidad (%)", "Naturalness (%)", false),
            attribute("nopulp", "Sin poso", "No pulp/residue", false),
            attribute("color", "Color", "Color", false),
            attribute("price", "Precio", "Price", true),
            attribute("aroma", "Aroma", "Smell", false),
        ],
        benchmark: Some("IDEAL".to_string()),
        responses: vec![
            sample_response(
                ts,
                &[
                    ("Don Simon", [4, 3, 3, 4, 4, 3, 4]),
                    ("Hacendado", [3, 3, 3, 3, 3, 2, 3]),
                    ("Alpiendo", [2, 3, 2, 3, 3, 1, 2]),
                    ("Granini", [5, 4, 4, 4, 4, 4, 4]),
                    ("IDEAL", [5, 5, 5, 5, 5, 2, 5]),
                ],
            ),
            sample_response(
                ts,
                &[
                    ("Don Simon", [4, 4, 3, 3, 4, 3, 3]),
                    ("Hacendado", [3, 2, 3, 4, 3, 1, 3]),
                    ("Alpiendo", [3, 3, 2, 2, 2, 2, 2]),
                    ("Granini", [4, 4, 5, 4, 5, 5, 5]),
                    ("IDEAL", [5, 4, 5, 5, 5, 1, 5]),
                ],
            ),
            sample_response(
                ts,
                &[
                    ("Don Simon", [3, 3, 4, 4, 3, 2, 4]),
                    ("Hacendado", [4, 3, 2, 3, 3, 2, 3]),
                    ("Alpiendo", [2, 2, 3, 3, 2, 1, 3]),
                    ("Granini", [5, 5, 4, 5, 4, 4, 4]),
                    ("IDEAL", [5, 5, 5, 4, 5, 2, 5]),
                ],
            ),
        ],
    }
}

fn run(argv: &[String]) -> Result<(), CliError> {
    let args = parse_args(argv)?;

    let engine = Engine::new()
        .with_strategy(args.strategy.into())
        .with_reference(args.reference.into());

    match args.command {
        Command::Compute => {
            let text = read_input(args.input.as_deref())?;
            let project: Project = serde_json::from_str(&text)?;
            let map = engine.compute_map(&project)?;
            print_json(&map, args.pretty)
        }
        Command::Summary => {
            let text = read_input(args.input.as_deref())?;
            let project: Project = serde_json::from_str(&text)?;
            let summary = engine.compute_summary(&project)?;
            print_json(&summary, args.pretty)
        }
        Command::Validate => {
            let text = read_input(args.input.as_deref())?;
            let project: Project = serde_json::from_str(&text)?;
            project.validate()?;
            println!(
                "ok: {} brands, {} attributes, {} responses",
                project.brands.len(),
                project.attributes.len(),
                project.responses.len()
            );
            Ok(())
        }
        Command::Seed => print_json(&seed_project(), args.pretty),
    }
}

fn main() {
    let argv: Vec<String> = std::env::args().skip(1).collect();
    if let Err(err) = run(&argv) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
