use chaos_trajectories::{
    henon, logistic, lorenz, EulerIntegrator, HenonParams, LorenzParameters, LorenzPoint,
    LorenzView, TrajectoryBounds,
};
use nalgebra::Vector2;
use std::time::Instant;

fn main() {
    println!("# Performance Benchmark Results\n");

    benchmark_logistic();
    benchmark_henon();
    benchmark_lorenz();
    report_lorenz_separation();

    println!("\nBenchmark complete.");
}

fn benchmark_logistic() {
    println!("### Logistic Map Iteration\n");
    println!("| Iterations | Time (ms) | Final Population |");
    println!("|------------|-----------|------------------|");

    let r = 3.9;
    let p0 = 0.2;

    for &n in &[1_000, 10_000, 100_000, 1_000_000] {
        let start = Instant::now();
        let population = logistic::generate(r, p0, n);
        let duration = start.elapsed();

        println!(
            "| {} | {:.2} | {:.6} |",
            n,
            duration.as_secs_f64() * 1000.0,
            population.last().copied().unwrap_or(p0)
        );
    }
    println!();
}

fn benchmark_henon() {
    println!("### Henon Map Iteration\n");
    println!("| Points | Iterations | Time (ms) |");
    println!("|--------|------------|-----------|");

    let params = HenonParams::default();

    for &points in &[1, 2, 16] {
        let starts: Vec<Vector2<f64>> = (0..points)
            .map(|i| Vector2::new(0.1 + 0.01 * i as f64, 0.2 + 0.01 * i as f64))
            .collect();

        for &n in &[1_000, 50_000] {
            let start = Instant::now();
            let orbits = henon::generate_many(&params, &starts, n);
            let duration = start.elapsed();

            assert_eq!(orbits.len(), points);
            println!("| {} | {} | {:.2} |", points, n, duration.as_secs_f64() * 1000.0);
        }
    }
    println!();
}

fn benchmark_lorenz() {
    println!("### Lorenz Euler Integration\n");
    println!("| Points | Steps | Time (ms) | x range | z range |");
    println!("|--------|-------|-----------|---------|---------|");

    let params = LorenzParameters::new(10.0, 28.0, 2.667);
    let integrator = EulerIntegrator::with_default_step(params);

    for &points in &[1, 2, 3, 16] {
        let starts: Vec<LorenzPoint> = (0..points)
            .map(|i| LorenzPoint::new(i as f64, 1.0 + i as f64, 1.05))
            .collect();

        for &steps in &[2_000, 3_000, 100_000] {
            let start = Instant::now();
            let trajectories = integrator.integrate_many(&starts, steps);
            let duration = start.elapsed();

            match TrajectoryBounds::of_lorenz(&trajectories) {
                Some(bounds) => {
                    let z = bounds.z.unwrap_or(bounds.y);
                    println!(
                        "| {} | {} | {:.2} | [{:.2}, {:.2}] | [{:.2}, {:.2}] |",
                        points,
                        steps,
                        duration.as_secs_f64() * 1000.0,
                        bounds.x.min,
                        bounds.x.max,
                        z.min,
                        z.max
                    );
                }
                None => println!(
                    "| {} | {} | {:.2} | - | - |",
                    points,
                    steps,
                    duration.as_secs_f64() * 1000.0
                ),
            }
        }
    }
    println!();
}

fn report_lorenz_separation() {
    println!("### Lorenz Two-Point Separation\n");
    println!("| Step | Distance |");
    println!("|------|----------|");

    let view = LorenzView::two_points();
    let (first, second) = lorenz::generate_pair(
        view.initial_points[0],
        view.initial_points[1],
        view.default_params(),
        view.steps,
        view.dt,
    );
    let distances = lorenz::separation(&first, &second);

    for step in (0..=view.steps).step_by(250) {
        println!("| {} | {:.6} |", step, distances[step]);
    }
}
