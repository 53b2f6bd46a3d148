use crate::error::Result;
use serde::Serialize;
use std::io::Write;
use std::path::Path;
use xdlvo::core::surface::SurfaceEnergy;
use xdlvo::engine::analysis::Minimum;
use xdlvo::workflows::assess::Assessment;

#[derive(Debug, Serialize)]
struct ProfileRow {
    distance_nm: f64,
    u_lw_kt: f64,
    u_ab_kt: f64,
    u_el_kt: f64,
    u_total_kt: f64,
    force: f64,
}

#[derive(Debug, Serialize)]
struct SummaryRow<'a> {
    section: &'a str,
    quantity: &'a str,
    value: Option<f64>,
    unit: &'a str,
}

pub fn write_profile<W: Write>(writer: W, assessment: &Assessment) -> Result<()> {
    let profile = &assessment.profile;
    let force = &assessment.analysis.force;
    let mut wtr = csv::Writer::from_writer(writer);
    for i in 0..profile.len() {
        wtr.serialize(ProfileRow {
            distance_nm: profile.h[i],
            u_lw_kt: profile.lw[i],
            u_ab_kt: profile.ab[i],
            u_el_kt: profile.el[i],
            u_total_kt: profile.total[i],
            force: force.get(i).copied().unwrap_or(0.0),
        })?;
    }
    wtr.flush()?;
    Ok(())
}

fn surface_rows<'a>(section: &'a str, energy: &SurfaceEnergy) -> [SummaryRow<'a>; 5] {
    let row = |quantity, value| SummaryRow {
        section,
        quantity,
        value: Some(value),
        unit: "mJ/m2",
    };
    [
        row("gamma_lw", energy.lw),
        row("gamma_plus", energy.plus),
        row("gamma_minus", energy.minus),
        row("gamma_ab", energy.ab),
        row("gamma_total", energy.total),
    ]
}

fn minimum_rows<'a>(quantity: [&'a str; 2], minimum: Option<&Minimum>) -> [SummaryRow<'a>; 2] {
    [
        SummaryRow {
            section: "analysis",
            quantity: quantity[0],
            value: minimum.map(|m| m.position),
            unit: "nm",
        },
        SummaryRow {
            section: "analysis",
            quantity: quantity[1],
            value: minimum.map(|m| m.energy),
            unit: "kT",
        },
    ]
}

pub fn write_summary<W: Write>(writer: W, assessment: &Assessment) -> Result<()> {
    let dg = &assessment.delta_g;
    let analysis = &assessment.analysis;
    let inputs = &assessment.inputs;

    let mut rows: Vec<SummaryRow> = Vec::new();
    rows.extend(surface_rows("membrane", &assessment.membrane.energy));
    rows.extend(surface_rows("foulant", &assessment.foulant.energy));

    let solution = [
        ("ionic_strength", inputs.ionic_strength, "mol/L"),
        ("temperature", inputs.temperature, "K"),
        ("relative_permittivity", assessment.relative_permittivity, ""),
        ("kappa", assessment.kappa, "1/nm"),
        ("screening_length", assessment.screening_length, "nm"),
    ];
    rows.extend(
        solution
            .into_iter()
            .map(|(quantity, value, unit)| SummaryRow {
                section: "solution",
                quantity,
                value: Some(value),
                unit,
            }),
    );

    let free_energy = [
        ("delta_g_lw", dg.lw),
        ("delta_g_ab", dg.ab),
        ("delta_g_el", dg.el),
        ("delta_g_adh", dg.adh),
        ("delta_g_tot", dg.tot),
    ];
    rows.extend(free_energy.into_iter().map(|(quantity, value)| SummaryRow {
        section: "free_energy",
        quantity,
        value: Some(value),
        unit: "mJ/m2",
    }));

    rows.push(SummaryRow {
        section: "analysis",
        quantity: "barrier_energy",
        value: analysis.barrier.map(|b| b.energy),
        unit: "kT",
    });
    rows.push(SummaryRow {
        section: "analysis",
        quantity: "barrier_position",
        value: analysis.barrier.map(|b| b.position),
        unit: "nm",
    });
    rows.extend(minimum_rows(
        ["primary_minimum_position", "primary_minimum_energy"],
        analysis.primary_minimum.as_ref(),
    ));
    rows.extend(minimum_rows(
        ["secondary_minimum_position", "secondary_minimum_energy"],
        analysis.secondary_minimum.as_ref(),
    ));

    let mut wtr = csv::Writer::from_writer(writer);
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn write_profile_file(path: &Path, assessment: &Assessment) -> Result<()> {
    write_profile(std::fs::File::create(path)?, assessment)
}

pub fn write_summary_file(path: &Path, assessment: &Assessment) -> Result<()> {
    write_summary(std::fs::File::create(path)?, assessment)
}
