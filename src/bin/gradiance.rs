// Copyright @yucwang 2026

use dispersion::math::spectrum::RGBSpectrum;
use dispersion::radiometry::coherence::Coherence;
use dispersion::radiometry::generalized_radiance::GeneralizedRadiance;

use clap::Parser;

/// Print a batch of zero coherence records and generalized radiances.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Options {
    /// Number of records in the batch.
    #[clap(value_name = "COUNT", default_value_t = 5)]
    count: usize,
}

fn main() {
    let options = Options::parse();
    let count = options.count;

    let coherence = Coherence::zeros(count);
    for coh in &coherence {
        println!("{}", coh);
    }

    let mut radiance = GeneralizedRadiance::zeros(count);
    for (i, gr) in radiance.iter_mut().enumerate() {
        gr.l += RGBSpectrum::splat(i as f32);
    }
    for gr in &radiance {
        println!("{}", gr);
    }
    println!("L ramp: {:?}", (0..count).collect::<Vec<_>>());
}

#[cfg(test)]
mod tests {
    use super::Options;
    use clap::Parser;

    #[test]
    fn test_count_defaults_to_five() {
        assert_eq!(Options::try_parse_from(["gradiance"]).unwrap().count, 5);
        assert_eq!(Options::try_parse_from(["gradiance", "12"]).unwrap().count, 12);
    }

    #[test]
    fn test_malformed_count_is_rejected() {
        assert!(Options::try_parse_from(["gradiance", "five"]).is_err());
    }
}
