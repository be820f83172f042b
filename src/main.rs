// Copyright 2020 TwoCookingMice

use dispersion::core::angle_grid::SweepAxis;
use dispersion::core::evaluator::{ EvaluationAdapter, EvaluatorConfig, Variant };
use dispersion::diagrams::diffuse::{ DiffuseDispersion, DiffuseDispersionSettings };
use dispersion::diagrams::grating::GratingDispersion;
use dispersion::diagrams::{ DiagramError, DispersionDiagram };
use dispersion::materials::MaterialDescription;
use dispersion::math::constants::Float;
use dispersion::math::spectrum::RGBSpectrum;
use dispersion::plot::polar::PlotError;

use clap::Parser;
use std::path::PathBuf;

/// Analyze the dispersion diagram of a diffraction grating BSDF.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Options {
    /// Inverse period of the grating.
    #[clap(long = "inv-period", value_name = "FLOAT")]
    inv_period: Option<Float>,

    /// Where to write the diffuse dispersion diagram.
    #[clap(long, short = 'o', value_name = "FILE", default_value = "diffuse_dispersion.png")]
    output: PathBuf,

    /// Evaluator backend variant.
    #[clap(long, value_enum, default_value_t = Variant::ScalarRgb)]
    variant: Variant,

    /// Spherical coordinate swept by the outgoing directions.
    #[clap(long, value_enum, default_value_t = SweepAxis::Azimuth)]
    sweep: SweepAxis,

    /// Half the number of outgoing directions.
    #[clap(long, value_name = "NUM", default_value_t = 400)]
    resolution: usize,
}

fn generate_diffuse_dispersion(options: &Options) -> Result<(), DiagramError> {
    let material = MaterialDescription::diffuse(RGBSpectrum::new(0.3, 0.5, 0.7))?;
    let settings = DiffuseDispersionSettings {
        resolution: options.resolution,
        material,
        ..Default::default()
    }.with_sweep(options.sweep);

    let evaluator = EvaluationAdapter::from_config(EvaluatorConfig { variant: options.variant });
    let diagram = DiffuseDispersion::new(settings, evaluator);
    if let Some(figure) = diagram.generate()? {
        figure.write_png(&options.output).map_err(PlotError::from)?;
        log::info!("{} diagram written to: {}.", diagram.name(), options.output.display());
    }

    Ok(())
}

fn generate_grating_dispersion(options: &Options) -> Result<(), DiagramError> {
    let diagram = GratingDispersion::new(options.inv_period);
    if diagram.generate()?.is_none() {
        log::info!("No {} diagram produced.", diagram.name());
    }

    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let options = Options::parse();
    log::info!("Evaluator variant: {}.", options.variant);

    let result = generate_diffuse_dispersion(&options)
        .and_then(|_| generate_grating_dispersion(&options));
    if let Err(e) = result {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
