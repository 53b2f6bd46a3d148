use crate::cli::RunArgs;
use crate::config::PartialRunConfig;
use crate::error::Result;
use crate::export;
use crate::utils::progress::CliProgressHandler;
use crate::validation::validate_assessment;
use std::fmt;
use tracing::{info, warn};
use xdlvo::core::surface::SurfaceEnergy;
use xdlvo::engine::analysis::Minimum;
use xdlvo::engine::progress::ProgressReporter;
use xdlvo::workflows::{self, assess::Assessment};

pub fn run(args: RunArgs, quiet: bool) -> Result<()> {
    let partial_config = match &args.config {
        Some(path) => PartialRunConfig::from_file(path)?,
        None => PartialRunConfig::default(),
    };
    info!("Merging configuration from file and CLI arguments...");
    let config = partial_config.merge_with_cli(&args)?;
    validate_assessment(&config)?;

    let progress_handler = if quiet {
        CliProgressHandler::hidden()
    } else {
        CliProgressHandler::new()
    };
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    info!("Invoking the assessment workflow...");
    let assessment = workflows::assess::run(&config, &reporter)?;

    print!("{}", format_report(&assessment));

    if let Some(path) = &args.output {
        export::write_profile_file(path, &assessment)?;
        info!("Energy profile written to {:?}", path);
        println!("✓ Energy profile written to: {}", path.display());
    }
    if let Some(path) = &args.summary {
        export::write_summary_file(path, &assessment)?;
        info!("Summary written to {:?}", path);
        println!("✓ Summary written to: {}", path.display());
    }

    for (surface, report) in [("membrane", &assessment.membrane), ("foulant", &assessment.foulant)] {
        if !report.is_physically_consistent() {
            warn!("The {} surface energy comes from an inconsistent contact-angle fit.", surface);
        }
    }
    Ok(())
}

struct Report<'a>(&'a Assessment);

impl Report<'_> {
    fn surface(
        f: &mut fmt::Formatter<'_>,
        name: &str,
        energy: &SurfaceEnergy,
        consistent: bool,
    ) -> fmt::Result {
        writeln!(
            f,
            "  {:<9} γLW = {:>8.3}  γ+ = {:>8.3}  γ- = {:>8.3}  γAB = {:>8.3}  γTOT = {:>8.3}",
            name, energy.lw, energy.plus, energy.minus, energy.ab, energy.total
        )?;
        if !consistent {
            writeln!(
                f,
                "  {:<9} ⚠ contact angles are inconsistent with the probe liquids",
                ""
            )?;
        }
        Ok(())
    }

    fn minimum(f: &mut fmt::Formatter<'_>, label: &str, minimum: Option<Minimum>) -> fmt::Result {
        match minimum {
            Some(m) => writeln!(f, "  {:<18} {:.3} kT at {:.2} nm", label, m.energy, m.position),
            None => writeln!(f, "  {:<18} none", label),
        }
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let a = self.0;
        writeln!(f, "\nSurface energies (mJ/m²)")?;
        Self::surface(
            f,
            "Membrane",
            &a.membrane.energy,
            a.membrane.is_physically_consistent(),
        )?;
        Self::surface(
            f,
            "Foulant",
            &a.foulant.energy,
            a.foulant.is_physically_consistent(),
        )?;

        let dg = &a.delta_g;
        writeln!(f, "\nFree energy of interaction at contact (mJ/m²)")?;
        writeln!(
            f,
            "  ΔG_LW = {:.3}  ΔG_AB = {:.3}  ΔG_EL = {:.3}",
            dg.lw, dg.ab, dg.el
        )?;
        writeln!(
            f,
            "  ΔG_adh = {:.3} ({})  ΔG_total = {:.3}",
            dg.adh,
            if dg.is_attractive() { "attractive" } else { "repulsive" },
            dg.tot
        )?;

        writeln!(f, "\nSolution")?;
        writeln!(
            f,
            "  ε_r = {:.2}  κ = {:.4} nm⁻¹  1/κ = {:.3} nm",
            a.relative_permittivity, a.kappa, a.screening_length
        )?;

        let analysis = &a.analysis;
        writeln!(f, "\nInteraction-energy profile ({} points)", a.profile.len())?;
        match analysis.barrier {
            Some(b) => writeln!(
                f,
                "  Energy barrier:    {:.3} kT at {:.2} nm",
                b.energy, b.position
            )?,
            None => writeln!(f, "  Energy barrier:    none")?,
        }
        Self::minimum(f, "Primary minimum:", analysis.primary_minimum)?;
        Self::minimum(f, "Secondary minimum:", analysis.secondary_minimum)?;

        if analysis.zero_crossings.is_empty() {
            writeln!(f, "  Zero crossings:    none")
        } else {
            let positions: Vec<String> = analysis
                .zero_crossings
                .iter()
                .map(|h| format!("{:.2}", h))
                .collect();
            writeln!(f, "  Zero crossings:    {} nm", positions.join(", "))
        }
    }
}

/// Renders the human-readable result block printed by `xdlvo run`.
pub fn format_report(assessment: &Assessment) -> String {
    Report(assessment).to_string()
}
