//! Benchmarks for the per-step radiation-damping evaluation.
//!
//! Run with: cargo bench -p hydro-radiation
//!
//! The interesting number is one full `get_force`: 36 DOF-pair convolutions,
//! each querying its lazily-transformed kernel at every convolution node.

#![allow(missing_docs, clippy::wildcard_imports)]

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use hydro_force::{Commands, ForceModel};
use hydro_quadrature::Quadrature;
use hydro_radiation::{
    RadiationConfig, RadiationDampingForceModel, RetardationBuilder, TabulatedSource,
};
use hydro_types::{BodyStates, Environment, Point3};

fn damping_curve(omega: f64) -> f64 {
    // A single-peak damping curve with a realistic shape.
    1e5 * omega * omega * (-omega).exp()
}

fn build_model(forward_speed_correction: bool) -> RadiationDampingForceModel {
    let omegas = RetardationBuilder::exponential_intervals(0.01, 40.0, 200);
    let br: Vec<f64> = omegas.iter().map(|&w| damping_curve(w)).collect();
    let mut source = TabulatedSource::new(omegas).unwrap();
    for d in 0..6 {
        source = source.with_damping(d, d, br.clone()).unwrap();
    }

    let config = RadiationConfig {
        cos_transform_quadrature: Quadrature::Filon,
        convolution_quadrature: Quadrature::Simpson,
        discretization_points: 50,
        omega_min: 0.0,
        omega_max: 30.0,
        tau_min: 0.2094395,
        tau_max: 10.0,
        output_br_and_k: false,
        calculation_point: Point3::origin(),
        forward_speed_correction,
    };
    RadiationDampingForceModel::new(&source, &config, "hull").unwrap()
}

fn sinusoidal_states() -> BodyStates {
    let mut states = BodyStates::new("hull", 100.0);
    for i in 0..=1000 {
        let t = 0.1 * f64::from(i);
        let v = (2.0 * std::f64::consts::PI * t / 10.0).sin();
        states.record(t, [v; 6]).unwrap();
    }
    states
}

fn bench_get_force(c: &mut Criterion) {
    let env = Environment::default();
    let commands = Commands::empty();
    let states = sinusoidal_states();

    let model = build_model(false);
    c.bench_function("get_force/diagonal", |b| {
        b.iter(|| {
            model
                .get_force(black_box(&states), 100.0, &env, &commands)
                .unwrap()
        });
    });

    let corrected = build_model(true);
    c.bench_function("get_force/forward_speed_corrected", |b| {
        b.iter(|| {
            corrected
                .get_force(black_box(&states), 100.0, &env, &commands)
                .unwrap()
        });
    });
}

criterion_group!(benches, bench_get_force);
criterion_main!(benches);
