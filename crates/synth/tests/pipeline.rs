//! Integration test: read a ModEM file, assign synthetic errors, write it back.

use approx::assert_relative_eq;
use mtsynth_modem::{ModemData, TensorComponent, read_modem, write_modem};
use mtsynth_synth::{SynthConfig, SynthError, make_rng, synthesize_errors};

/// Builds a ModEM file with every station measured at every period.
fn modem_text(periods: &[f64], stations: &[&str]) -> String {
    let mut text = String::from(
        "# Observed data\n\
         # Period(s) Code GG_Lat GG_Lon X(m) Y(m) Z(m) Component Real Imag Error\n\
         > Full_Impedance\n\
         > exp(-i\\omega t)\n\
         > [mV/km]/[nT]\n\
         > 0.00\n\
         > -19.000 133.000\n",
    );
    text.push_str(&format!("> {} {}\n", periods.len(), stations.len()));
    for (pi, period) in periods.iter().enumerate() {
        for (si, code) in stations.iter().enumerate() {
            let scale = (pi + 1) as f64 * (si + 2) as f64;
            for (name, re, im) in [
                ("ZXX", 0.1 * scale, 0.05),
                ("ZXY", 2.0 * scale, 1.5),
                ("ZYX", -3.0 * scale, -1.0),
                ("ZYY", -0.2 * scale, 0.01),
            ] {
                text.push_str(&format!(
                    "{period:.6E} {code} -19.100 133.200 {:.3} 0.000 0.000 {name} {re:.6E} {im:.6E} 1.000000E+00\n",
                    si as f64 * 500.0
                ));
            }
        }
    }
    text
}

fn load(text: &str) -> ModemData {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("obs.dat");
    std::fs::write(&path, text).expect("write input");
    read_modem(&path).expect("input parses")
}

#[test]
fn synthesized_file_has_uniform_errors_per_pair() {
    let periods = [0.01, 0.1, 1.0, 10.0];
    let stations = ["MT01", "MT02", "MT03"];
    let original = load(&modem_text(&periods, &stations));
    let mut data = original.clone();

    let config = SynthConfig::new().with_seed(17);
    let mut rng = make_rng(config.seed());
    let summary = synthesize_errors(&mut data, &config, &mut rng).expect("synthesis succeeds");
    assert_eq!(summary.n_pairs(), periods.len() * stations.len());

    let dir = tempfile::tempdir().expect("create temp dir");
    let out = dir.path().join("synth_error.dat");
    write_modem(&out, &data, "# Data with a synthetic error").expect("write succeeds");
    let text = std::fs::read_to_string(&out).expect("read output");
    assert!(text.starts_with("# Data with a synthetic error\n"));

    let back = read_modem(&out).expect("output parses");
    for &period in back.periods() {
        for (code, station) in back.stations() {
            let zxx = station.get_component(period, "ZXX").expect("ZXX");
            for kind in TensorComponent::ALL {
                let c = station.get_component(period, kind.name()).expect("component");
                assert_eq!(c.error(), zxx.error(), "{code} {kind} at {period}");

                let before = original
                    .get_component(period, code, kind.name())
                    .expect("original component");
                assert_relative_eq!(c.real(), before.real(), max_relative = 1e-6);
                assert_relative_eq!(c.imag(), before.imag(), max_relative = 1e-6);
            }
        }
    }
}

#[test]
fn seeded_runs_are_reproducible_through_files() {
    let text = modem_text(&[0.5, 5.0], &["A", "B"]);
    let config = SynthConfig::new();

    let mut first = load(&text);
    synthesize_errors(&mut first, &config, &mut make_rng(Some(99))).unwrap();
    let mut second = load(&text);
    synthesize_errors(&mut second, &config, &mut make_rng(Some(99))).unwrap();

    assert_eq!(
        mtsynth_modem::format_modem(&first, "c"),
        mtsynth_modem::format_modem(&second, "c")
    );
}

#[test]
fn missing_yy_component_surfaces_lookup_error() {
    let text = modem_text(&[1.0], &["A"]);
    let text: String = text
        .lines()
        .filter(|l| !l.contains(" ZYY "))
        .map(|l| format!("{l}\n"))
        .collect();
    let mut data = load(&text);

    let err = synthesize_errors(&mut data, &SynthConfig::new(), &mut make_rng(Some(1)))
        .expect_err("ZYY is missing");
    assert!(matches!(err, SynthError::Lookup { .. }));
    assert!(err.to_string().contains("ZYY"));
}
