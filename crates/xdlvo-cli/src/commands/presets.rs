use crate::error::Result;
use xdlvo::core::presets::{
    foulant_preset, foulant_preset_names, membrane_preset, membrane_preset_names,
};

pub fn run() -> Result<()> {
    print!("{}", format_presets());
    Ok(())
}

fn format_presets() -> String {
    let mut out = String::from("Membranes (contact angles in degrees: diiodomethane, formamide, water)\n");
    for name in membrane_preset_names() {
        if let Some(p) = membrane_preset(name) {
            out.push_str(&format!(
                "  {:<12} {:<22} θ = {:>7.3}, {:>7.3}, {:>7.3}  ζ = {:>6.1} mV\n",
                name, p.label, p.angles.non_polar, p.angles.polar1, p.angles.polar2, p.zeta_potential
            ));
        }
    }
    out.push_str("\nFoulants\n");
    for name in foulant_preset_names() {
        if let Some(p) = foulant_preset(name) {
            out.push_str(&format!(
                "  {:<12} {:<22} θ = {:>7.3}, {:>7.3}, {:>7.3}  ζ = {:>6.1} mV  a = {:.1} nm\n",
                name,
                p.label,
                p.angles.non_polar,
                p.angles.polar1,
                p.angles.polar2,
                p.zeta_potential,
                p.radius
            ));
        }
    }
    out
}
