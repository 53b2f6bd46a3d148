use crate::cli::SurfaceArgs;
use crate::config::triple;
use crate::error::{CliError, Result};
use crate::validation::{check_angles, into_result};
use tracing::{info, warn};
use xdlvo::core::params::{Liquid, ModelParameters};
use xdlvo::core::presets::{
    foulant_preset, foulant_preset_names, membrane_preset, membrane_preset_names,
};
use xdlvo::core::surface::{ContactAngleFit, ContactAngles, ProbeLiquids, fit_contact_angles};
use xdlvo::engine::error::EngineError;

pub fn run(args: SurfaceArgs) -> Result<()> {
    let angles = resolve_angles(&args)?;
    let liquids = resolve_liquids(&args)?;

    let mut errors = Vec::new();
    check_angles(&mut errors, "Surface", &angles);
    into_result(errors)?;

    info!("Fitting surface-energy components from {:?}", angles);
    let fit = fit_contact_angles(&angles, &liquids).map_err(|source| EngineError::SurfaceFit {
        surface: "surface",
        source,
    })?;

    print!("{}", format_fit(&fit));
    if !fit.is_physically_consistent() {
        warn!(
            sqrt_plus = fit.sqrt_plus,
            sqrt_minus = fit.sqrt_minus,
            "Contact-angle fit produced a negative root."
        );
    }
    Ok(())
}

fn resolve_angles(args: &SurfaceArgs) -> Result<ContactAngles> {
    if let Some(values) = &args.angles {
        let [np, p1, p2] = triple(values, "--angles")?;
        return Ok(ContactAngles::new(np, p1, p2));
    }
    let name = args
        .preset
        .as_deref()
        .ok_or_else(|| CliError::Argument("Either --angles or --preset is required".into()))?;

    membrane_preset(name)
        .map(|p| p.angles)
        .or_else(|| foulant_preset(name).map(|p| p.angles))
        .ok_or_else(|| {
            let mut available = membrane_preset_names();
            available.extend(foulant_preset_names());
            CliError::Argument(format!(
                "Unknown preset '{}'. Available: {}",
                name,
                available.join(", ")
            ))
        })
}

fn resolve_liquids(args: &SurfaceArgs) -> Result<ProbeLiquids> {
    let params = match &args.params {
        Some(path) => ModelParameters::load(path)?,
        None => ModelParameters::default(),
    };
    let mut liquids = ProbeLiquids::from(&params.liquids);
    if let Some(lw) = args.non_polar {
        liquids.non_polar = Liquid::non_polar(lw);
    }
    if let Some(values) = &args.polar1 {
        let [lw, plus, minus] = triple(values, "--polar1")?;
        liquids.polar1 = Liquid::new(lw, plus, minus);
    }
    if let Some(values) = &args.polar2 {
        let [lw, plus, minus] = triple(values, "--polar2")?;
        liquids.polar2 = Liquid::new(lw, plus, minus);
    }
    Ok(liquids)
}

fn format_fit(fit: &ContactAngleFit) -> String {
    let e = &fit.energy;
    let mut out = format!(
        "Surface-energy components (mJ/m²)\n  γLW  = {:.4}\n  γ+   = {:.4}\n  γ-   = {:.4}\n  γAB  = {:.4}\n  γTOT = {:.4}\n",
        e.lw, e.plus, e.minus, e.ab, e.total
    );
    if !fit.is_physically_consistent() {
        out.push_str(&format!(
            "⚠ The contact angles are inconsistent with the probe liquids (√γ+ = {:.4}, √γ- = {:.4}).\n",
            fit.sqrt_plus, fit.sqrt_minus
        ));
    }
    out
}
