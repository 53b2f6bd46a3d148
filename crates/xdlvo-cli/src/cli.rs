use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "XDLVO CLI - Extended DLVO interaction energies between a membrane and a spherical foulant, for predicting membrane fouling.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for the results
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run a full XDLVO assessment for a membrane/foulant pair.
    Run(RunArgs),
    /// Fit the surface-energy components of one surface from three contact angles.
    Surface(SurfaceArgs),
    /// Print the dielectric constant and Debye screening of an aqueous electrolyte.
    Electrolyte(ElectrolyteArgs),
    /// List the built-in membrane and foulant presets.
    Presets,
}

/// Arguments for the `run` subcommand.
#[derive(Args, Debug, Default)]
pub struct RunArgs {
    /// Path to a run configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Path to a model parameter file (reference liquids, contact separation, distance grid).
    #[arg(short, long, value_name = "PATH")]
    pub params: Option<PathBuf>,

    // --- Membrane ---
    /// Membrane preset name (e.g., 'pvdf', 'mxene-pvdf').
    #[arg(long, value_name = "NAME")]
    pub membrane_preset: Option<String>,

    /// Membrane contact angles in degrees: diiodomethane,formamide,water.
    #[arg(long, value_name = "D,F,W", value_delimiter = ',')]
    pub membrane_angles: Option<Vec<f64>>,

    /// Membrane surface-energy components in mJ/m²: lw,plus,minus.
    #[arg(
        long,
        value_name = "LW,PLUS,MINUS",
        value_delimiter = ',',
        conflicts_with = "membrane_angles"
    )]
    pub membrane_energy: Option<Vec<f64>>,

    /// Membrane zeta potential in mV.
    #[arg(long, value_name = "MV", allow_negative_numbers = true)]
    pub membrane_zeta: Option<f64>,

    // --- Foulant ---
    /// Foulant preset name (e.g., 'bsa', 'ecoli', 'staph', 'humic').
    #[arg(long, value_name = "NAME")]
    pub foulant_preset: Option<String>,

    /// Foulant contact angles in degrees: diiodomethane,formamide,water.
    #[arg(long, value_name = "D,F,W", value_delimiter = ',')]
    pub foulant_angles: Option<Vec<f64>>,

    /// Foulant surface-energy components in mJ/m²: lw,plus,minus.
    #[arg(
        long,
        value_name = "LW,PLUS,MINUS",
        value_delimiter = ',',
        conflicts_with = "foulant_angles"
    )]
    pub foulant_energy: Option<Vec<f64>>,

    /// Foulant zeta potential in mV.
    #[arg(long, value_name = "MV", allow_negative_numbers = true)]
    pub foulant_zeta: Option<f64>,

    /// Foulant particle radius in nm.
    #[arg(short = 'a', long, value_name = "NM")]
    pub foulant_radius: Option<f64>,

    // --- Solution ---
    /// Ionic strength in mol/L.
    #[arg(short = 'I', long, value_name = "MOL/L")]
    pub ionic_strength: Option<f64>,

    /// Temperature in K.
    #[arg(short = 'T', long, value_name = "K")]
    pub temperature: Option<f64>,

    // --- Output ---
    /// Write the interaction-energy profile and force field to a CSV file.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Write the surface energies, free energies and profile analysis to a CSV file.
    #[arg(long, value_name = "PATH")]
    pub summary: Option<PathBuf>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S solution.ionic-strength=0.1
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,
}

/// Arguments for the `surface` subcommand.
#[derive(Args, Debug)]
pub struct SurfaceArgs {
    /// Contact angles in degrees measured with the non-polar, first polar and second polar
    /// liquid (diiodomethane,formamide,water by default).
    #[arg(
        long,
        value_name = "NP,P1,P2",
        value_delimiter = ',',
        required_unless_present = "preset"
    )]
    pub angles: Option<Vec<f64>>,

    /// Use the contact angles of a membrane or foulant preset.
    #[arg(long, value_name = "NAME", conflicts_with = "angles")]
    pub preset: Option<String>,

    /// Path to a model parameter file providing the reference liquids.
    #[arg(short, long, value_name = "PATH")]
    pub params: Option<PathBuf>,

    /// Custom non-polar probe liquid, surface tension in mJ/m².
    #[arg(long, value_name = "LW")]
    pub non_polar: Option<f64>,

    /// Custom first polar probe liquid in mJ/m²: lw,plus,minus.
    #[arg(long, value_name = "LW,PLUS,MINUS", value_delimiter = ',')]
    pub polar1: Option<Vec<f64>>,

    /// Custom second polar probe liquid in mJ/m²: lw,plus,minus.
    #[arg(long, value_name = "LW,PLUS,MINUS", value_delimiter = ',')]
    pub polar2: Option<Vec<f64>>,
}

/// Arguments for the `electrolyte` subcommand.
#[derive(Args, Debug)]
pub struct ElectrolyteArgs {
    /// Ionic strength in mol/L.
    #[arg(short = 'I', long, value_name = "MOL/L")]
    pub ionic_strength: f64,

    /// Temperature in K.
    #[arg(short = 'T', long, value_name = "K", default_value_t = 298.0)]
    pub temperature: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn run_accepts_comma_separated_triples_and_negative_zeta() {
        let cli = Cli::parse_from([
            "xdlvo",
            "run",
            "--membrane-angles",
            "64.572,60.966,87.5268",
            "--membrane-zeta",
            "-32.4",
            "--foulant-energy",
            "35,1,25",
            "-I",
            "0.01",
        ]);
        let Commands::Run(args) = cli.command else {
            panic!("Expected 'run' subcommand");
        };
        assert_eq!(args.membrane_angles, Some(vec![64.572, 60.966, 87.5268]));
        assert_eq!(args.membrane_zeta, Some(-32.4));
        assert_eq!(args.foulant_energy, Some(vec![35.0, 1.0, 25.0]));
        assert_eq!(args.ionic_strength, Some(0.01));
        assert_eq!(args.temperature, None);
    }

    #[test]
    fn angles_and_energy_for_one_surface_conflict() {
        let result = Cli::try_parse_from([
            "xdlvo",
            "run",
            "--foulant-angles",
            "40,50,60",
            "--foulant-energy",
            "35,1,25",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn surface_requires_angles_or_preset() {
        assert!(Cli::try_parse_from(["xdlvo", "surface"]).is_err());
        assert!(Cli::try_parse_from(["xdlvo", "surface", "--preset", "pvdf"]).is_ok());
    }

    #[test]
    fn electrolyte_temperature_defaults_to_room_temperature() {
        let cli = Cli::parse_from(["xdlvo", "electrolyte", "-I", "0.1"]);
        let Commands::Electrolyte(args) = cli.command else {
            panic!("Expected 'electrolyte' subcommand");
        };
        assert_eq!(args.temperature, 298.0);
    }

    #[test]
    fn global_flags_are_accepted_after_the_subcommand() {
        let cli = Cli::parse_from(["xdlvo", "presets", "-vv", "--log-file", "run.log"]);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.log_file, Some(PathBuf::from("run.log")));
    }
}
