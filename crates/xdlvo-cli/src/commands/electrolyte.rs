use crate::cli::ElectrolyteArgs;
use crate::error::Result;
use crate::validation::{check_solution, into_result};
use xdlvo::core::electrostatics::{debye_length, screening_length, water_dielectric};

pub fn run(args: ElectrolyteArgs) -> Result<()> {
    let mut errors = Vec::new();
    check_solution(&mut errors, args.ionic_strength, args.temperature);
    into_result(errors)?;

    println!(
        "Electrolyte at I = {} mol/L, T = {} K",
        args.ionic_strength, args.temperature
    );
    println!("  ε_r = {:.3}", water_dielectric(args.temperature));
    println!(
        "  κ   = {:.5} nm⁻¹",
        debye_length(args.ionic_strength, args.temperature)
    );
    println!(
        "  1/κ = {:.4} nm",
        screening_length(args.ionic_strength, args.temperature)
    );
    Ok(())
}
