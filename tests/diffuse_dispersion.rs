use dispersion::core::angle_grid::AngleGrid;
use dispersion::core::evaluator::{ split_channels, EvaluationAdapter, EvaluatorConfig, Variant };
use dispersion::diagrams::diffuse::{ DiffuseDispersion, DiffuseDispersionSettings };
use dispersion::diagrams::grating::GratingDispersion;
use dispersion::diagrams::DispersionDiagram;
use dispersion::materials::MaterialDescription;
use dispersion::math::constants::{ deg_to_rad, HALF_PI, INV_PI, TWO_PI };
use dispersion::math::spectrum::RGBSpectrum;
use dispersion::math::warp::spherical_direction;

fn reflectance() -> RGBSpectrum {
    RGBSpectrum::new(0.3, 0.5, 0.7)
}

fn expected(wi_z: f32, wo_z: f32) -> RGBSpectrum {
    if wi_z > 0.0 && wo_z > 0.0 {
        reflectance() * (INV_PI * wo_z)
    } else {
        RGBSpectrum::default()
    }
}

fn assert_spectrum_close(a: RGBSpectrum, b: RGBSpectrum) {
    for c in 0..3 {
        assert!((a[c] - b[c]).abs() < 1e-5, "expected {} ≈ {}", a, b);
    }
}

#[test]
fn reference_scene_matches_lambertian_law() {
    let material = MaterialDescription::diffuse(reflectance()).unwrap();
    let wi = spherical_direction(deg_to_rad(45.0), 0.0);
    let grid = AngleGrid::azimuthal(400, HALF_PI).unwrap();
    let wo = grid.directions();
    assert_eq!(wo.len(), 800);
    assert_eq!(grid.angles()[0], 0.0);
    assert_eq!(grid.angles()[799], TWO_PI);

    for variant in [Variant::ScalarRgb, Variant::LlvmAdRgb] {
        let adapter = EvaluationAdapter::from_config(EvaluatorConfig { variant });
        let values = adapter.evaluate(&material, wi, &wo).unwrap();
        assert_eq!(values.len(), 800);
        for (value, w) in values.iter().zip(wo.iter()) {
            assert_spectrum_close(*value, expected(wi.z, w.z));
        }
    }
}

#[test]
fn elevation_sweep_matches_lambertian_law() {
    let material = MaterialDescription::diffuse(reflectance()).unwrap();
    let wi = spherical_direction(deg_to_rad(45.0), 0.0);
    let wo = AngleGrid::elevation_sweep(400, 0.0).unwrap().directions();

    let adapter = EvaluationAdapter::from_config(EvaluatorConfig::default());
    let values = adapter.evaluate(&material, wi, &wo).unwrap();
    let (red, green, blue) = split_channels(&values);
    assert_eq!(red.len(), 800);
    assert!((red[0] - 0.3 * INV_PI).abs() < 1e-5);
    assert!((green[0] - 0.5 * INV_PI).abs() < 1e-5);
    assert!((blue[0] - 0.7 * INV_PI).abs() < 1e-5);
    for (value, w) in values.iter().zip(wo.iter()) {
        assert_spectrum_close(*value, expected(wi.z, w.z));
    }
}

#[test]
fn diagram_writes_png() {
    let settings = DiffuseDispersionSettings {
        resolution: 50,
        material: MaterialDescription::diffuse(reflectance()).unwrap(),
        ..Default::default()
    };
    let diagram = DiffuseDispersion::new(settings, EvaluationAdapter::from_config(EvaluatorConfig::default()));
    let figure = diagram.generate().unwrap().unwrap();

    let path = std::env::temp_dir().join(format!("diffuse_dispersion_{}.png", std::process::id()));
    figure.write_png(&path).unwrap();
    let written = image::open(&path).unwrap();
    assert_eq!(written.width() as usize, figure.width());
    assert_eq!(written.height() as usize, figure.height());
    std::fs::remove_file(&path).unwrap();
}

#[test]
fn grating_branch_does_not_crash() {
    let diagram = GratingDispersion::new(Some(1200.0));
    assert!(diagram.generate().unwrap().is_none());
}
