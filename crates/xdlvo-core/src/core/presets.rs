use super::surface::ContactAngles;
use phf::phf_map;

/// A membrane characterised by contact angles against diiodomethane, formamide and water.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MembranePreset {
    pub label: &'static str,
    pub angles: ContactAngles,
    pub zeta_potential: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FoulantPreset {
    pub label: &'static str,
    pub angles: ContactAngles,
    pub zeta_potential: f64,
    /// Particle radius, nm.
    pub radius: f64,
}

pub static MEMBRANE_PRESETS: phf::Map<&'static str, MembranePreset> = phf_map! {
    "pvdf" => MembranePreset {
        label: "PVDF",
        angles: ContactAngles::new(64.572, 60.966, 87.5268),
        zeta_potential: -32.4,
    },
    "mxene-pvdf" => MembranePreset {
        label: "MXene/PVDF",
        angles: ContactAngles::new(40.272, 47.228, 58.613),
        zeta_potential: -49.3,
    },
};

pub static FOULANT_PRESETS: phf::Map<&'static str, FoulantPreset> = phf_map! {
    "bsa" => FoulantPreset {
        label: "Bovine serum albumin",
        angles: ContactAngles::new(40.31, 51.43, 58.50),
        zeta_potential: -7.5,
        radius: 322.9,
    },
    "ecoli" => FoulantPreset {
        label: "Escherichia coli",
        angles: ContactAngles::new(42.75, 52.27, 57.63),
        zeta_potential: -3.5,
        radius: 231.0,
    },
    "staph" => FoulantPreset {
        label: "Staphylococcus aureus",
        angles: ContactAngles::new(43.51, 53.19, 59.03),
        zeta_potential: -4.6,
        radius: 245.0,
    },
    "humic" => FoulantPreset {
        label: "Humic acid",
        angles: ContactAngles::new(36.76, 49.94, 58.96),
        zeta_potential: -9.3,
        radius: 432.0,
    },
};

pub fn membrane_preset(name: &str) -> Option<&'static MembranePreset> {
    MEMBRANE_PRESETS.get(normalize(name).as_str())
}

pub fn foulant_preset(name: &str) -> Option<&'static FoulantPreset> {
    FOULANT_PRESETS.get(normalize(name).as_str())
}

fn normalize(name: &str) -> String {
    name.trim().to_ascii_lowercase().replace(['/', '_', ' '], "-")
}

/// Preset keys in alphabetical order.
pub fn membrane_preset_names() -> Vec<&'static str> {
    let mut names: Vec<_> = MEMBRANE_PRESETS.keys().copied().collect();
    names.sort_unstable();
    names
}

pub fn foulant_preset_names() -> Vec<&'static str> {
    let mut names: Vec<_> = FOULANT_PRESETS.keys().copied().collect();
    names.sort_unstable();
    names
}
