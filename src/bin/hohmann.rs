use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use hohmann_calculator::config::{self, BodyConfig, load_bodies, load_problems};
use hohmann_calculator::constants::MU_EARTH_KM3_S2;
use hohmann_calculator::export::{self, report, table};
use hohmann_calculator::impulsive::{
    BiEllipticResult, DeparturePoint, HPointResult, HohmannResult, PointResult, TransferPlan,
    bi_elliptic, h_point_departure, hohmann, point_departure,
};
use hohmann_calculator::time::{seconds_to_hours, split_duration};
use hohmann_calculator::transfer::{
    ComparisonRequest, ComparisonTable, DepartureRecommendation, ProblemOutcome,
    compare_over_ratios, evaluate_problems, recommend_departure,
};
use serde::Serialize;

/// Closed-form orbital transfer calculator (Hohmann, bi-elliptic, apse-to-apse).
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Central body name from the body catalog (defaults to Earth)
    #[arg(long, global = true)]
    body: Option<String>,

    /// Explicit gravitational parameter in km^3/s^2 (overrides --body)
    #[arg(long, global = true)]
    mu: Option<f64>,

    /// Body catalog: directory of TOML files or a YAML list
    #[arg(long, global = true, default_value = "configs/bodies")]
    bodies: PathBuf,

    /// Print results as JSON instead of text
    #[arg(long, global = true, default_value_t = false)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Two-burn transfer between circular orbits
    Hohmann {
        /// Initial circular orbit radius (km)
        #[arg(long)]
        r1: f64,
        /// Final circular orbit radius (km)
        #[arg(long)]
        r2: f64,
    },
    /// Three-burn transfer through an intermediate apoapsis
    BiElliptic {
        #[arg(long)]
        r1: f64,
        #[arg(long)]
        r2: f64,
        /// Intermediate apoapsis radius (km), above both r1 and r2
        #[arg(long)]
        r_intermediate: f64,
    },
    /// Apse-to-apse transfer between elliptical orbits (vis-viva formulation)
    Point {
        /// Initial orbit perigee radius (km)
        #[arg(long)]
        rp1: f64,
        /// Initial orbit apogee radius (km)
        #[arg(long)]
        ra1: f64,
        /// Final orbit perigee radius (km)
        #[arg(long)]
        rp2: f64,
        /// Final orbit apogee radius (km)
        #[arg(long)]
        ra2: f64,
        /// Depart from apogee instead of perigee
        #[arg(long, default_value_t = false)]
        from_apogee: bool,
    },
    /// Apse-to-apse transfer solved through angular momenta
    HPoint {
        #[command(flatten)]
        orbits: ApseArgs,
        /// Depart from apogee instead of perigee
        #[arg(long, default_value_t = false)]
        from_apogee: bool,
    },
    /// Compare apogee and perigee departure and recommend the cheaper one
    Recommend {
        #[command(flatten)]
        orbits: ApseArgs,
    },
    /// Sweep Hohmann vs bi-elliptic total delta-v over radius ratios
    Compare {
        /// Initial circular orbit radius (km)
        #[arg(long, default_value_t = 7_000.0)]
        r1: f64,
        #[arg(long, default_value_t = 2)]
        ratio_start: u32,
        #[arg(long, default_value_t = 21)]
        ratio_end: u32,
        /// Intermediate apoapsis as a multiple of the final radius
        #[arg(long, default_value_t = 2.0)]
        factor: f64,
        /// Write the sweep as CSV to this path ('-' for stdout)
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Evaluate a catalog of reference problems
    Reference {
        #[arg(long, default_value = "configs/problems.yaml")]
        problems: PathBuf,
    },
}

/// Perigee/apogee radii of the initial (A, A') and final (B, B') orbits, in km.
#[derive(Args, Debug)]
struct ApseArgs {
    #[arg(long)]
    a: f64,
    #[arg(long)]
    ap: f64,
    #[arg(long)]
    b: f64,
    #[arg(long)]
    bp: f64,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    match &cli.command {
        Command::Hohmann { r1, r2 } => {
            let result = hohmann(*r1, *r2, gravitational_parameter(&cli)?)?;
            emit(&cli, &result, print_hohmann)
        }
        Command::BiElliptic {
            r1,
            r2,
            r_intermediate,
        } => {
            let result = bi_elliptic(*r1, *r2, *r_intermediate, gravitational_parameter(&cli)?)?;
            emit(&cli, &result, print_bi_elliptic)
        }
        Command::Point {
            rp1,
            ra1,
            rp2,
            ra2,
            from_apogee,
        } => {
            let departure = DeparturePoint::from_apogee(*from_apogee);
            let mu = gravitational_parameter(&cli)?;
            let result = point_departure(*rp1, *ra1, *rp2, *ra2, departure, mu)?;
            emit(&cli, &result, print_point)
        }
        Command::HPoint {
            orbits,
            from_apogee,
        } => {
            let departure = DeparturePoint::from_apogee(*from_apogee);
            let mu = gravitational_parameter(&cli)?;
            let result = h_point_departure(orbits.a, orbits.ap, orbits.b, orbits.bp, departure, mu)?;
            emit(&cli, &result, print_h_point)
        }
        Command::Recommend { orbits } => {
            let mu = gravitational_parameter(&cli)?;
            let result = recommend_departure(orbits.a, orbits.ap, orbits.b, orbits.bp, mu)?;
            emit(&cli, &result, print_recommendation)
        }
        Command::Compare {
            r1,
            ratio_start,
            ratio_end,
            factor,
            output,
        } => {
            let request = ComparisonRequest {
                r1_km: *r1,
                intermediate_factor: *factor,
                mu_km3_s2: gravitational_parameter(&cli)?,
                ..ComparisonRequest::default()
            }
            .with_ratio_range(*ratio_start, *ratio_end);
            let sweep = compare_over_ratios(&request)?;
            match output {
                Some(path) => write_sweep_csv(path, &sweep),
                None => emit(&cli, &sweep, print_comparison),
            }
        }
        Command::Reference { problems } => {
            let catalog = load_problems(problems)
                .with_context(|| format!("loading problems from {}", problems.display()))?;
            let bodies = body_catalog_or_empty(&cli.bodies);
            let outcomes = evaluate_problems(&catalog, &bodies)?;
            emit(&cli, &outcomes, |o: &Vec<ProblemOutcome>| print_outcomes(o))
        }
    }
}

fn gravitational_parameter(cli: &Cli) -> anyhow::Result<f64> {
    if let Some(mu) = cli.mu {
        return Ok(mu);
    }
    let Some(body) = cli.body.as_deref() else {
        return Ok(MU_EARTH_KM3_S2);
    };
    let bodies = load_bodies(&cli.bodies)
        .with_context(|| format!("loading body catalog from {}", cli.bodies.display()))?;
    Ok(config::resolve_mu(&bodies, Some(body), None)?)
}

fn body_catalog_or_empty(path: &Path) -> Vec<BodyConfig> {
    match load_bodies(path) {
        Ok(bodies) => bodies,
        Err(err) => {
            log::warn!(
                "body catalog {} unavailable ({err}); problems naming a body will fail",
                path.display()
            );
            Vec::new()
        }
    }
}

fn emit<T: Serialize>(cli: &Cli, value: &T, print: impl Fn(&T)) -> anyhow::Result<()> {
    if cli.json {
        report::write_json(std::io::stdout().lock(), value)?;
    } else {
        print(value);
    }
    Ok(())
}

fn write_sweep_csv(path: &Path, sweep: &ComparisonTable) -> anyhow::Result<()> {
    let writer = export::writer_for_path(path)
        .with_context(|| format!("opening {}", path.display()))?;
    table::write_records(writer, &sweep.rows)?;
    if path != Path::new("-") {
        println!("Wrote {} rows to {}", sweep.rows.len(), path.display());
    }
    Ok(())
}

fn format_time(seconds: f64) -> String {
    let (d, h, m) = split_duration(seconds);
    if d > 0 {
        format!("{:.2} h ({d}d {h}h {m}m)", seconds_to_hours(seconds))
    } else {
        format!("{:.2} h ({h}h {m}m)", seconds_to_hours(seconds))
    }
}

fn print_plan(plan: &TransferPlan) {
    for (i, leg) in plan.legs.iter().enumerate() {
        println!(
            "Burn {}         : Δv = {:.4} km/s at r = {:.1} km ({:.4} -> {:.4} km/s)",
            i + 1,
            leg.delta_v_km_s(),
            leg.departure_radius_km,
            leg.velocity_before_km_s,
            leg.velocity_after_km_s
        );
    }
}

fn print_hohmann(r: &HohmannResult) {
    println!("=== Hohmann Transfer ===");
    println!(
        "Initial orbit  : r = {:.1} km, v = {:.4} km/s, T = {}, E = {:.4} km²/s²",
        r.r1,
        r.v1,
        format_time(r.initial_period),
        r.initial_energy
    );
    println!(
        "Final orbit    : r = {:.1} km, v = {:.4} km/s, T = {}, E = {:.4} km²/s²",
        r.r2,
        r.v2,
        format_time(r.final_period),
        r.final_energy
    );
    println!(
        "Transfer orbit : a = {:.1} km, e = {:.6}, h = {:.2} km²/s, E = {:.4} km²/s²",
        r.sma, r.ecc, r.angular_momentum, r.transfer_energy
    );
    print_plan(&r.plan());
    println!("Total          : Δv = {:.4} km/s, TOF = {}", r.total_delta_v, format_time(r.transfer_time));
}

fn print_bi_elliptic(r: &BiEllipticResult) {
    println!("=== Bi-Elliptic Transfer ===");
    println!(
        "Orbits         : r1 = {:.1} km ({:.4} km/s), r2 = {:.1} km ({:.4} km/s), r_b = {:.1} km",
        r.r1, r.v1, r.r2, r.v2, r.r_intermediate
    );
    println!(
        "Ellipse 1      : a = {:.1} km, e = {:.6}, h = {:.2} km²/s, TOF = {}",
        r.sma1,
        r.ecc1,
        r.h1,
        format_time(r.transfer_time1)
    );
    println!(
        "Ellipse 2      : a = {:.1} km, e = {:.6}, h = {:.2} km²/s, TOF = {}",
        r.sma2,
        r.ecc2,
        r.h2,
        format_time(r.transfer_time2)
    );
    print_plan(&r.plan());
    println!("Total          : Δv = {:.4} km/s, TOF = {}", r.total_delta_v, format_time(r.total_time));
}

fn print_point(r: &PointResult) {
    println!("=== Apse Transfer from {} ===", r.departure.label());
    println!(
        "Transfer orbit : a = {:.1} km, e = {:+.6}, {:.1} km -> {:.1} km",
        r.at, r.et, r.start_r, r.end_r
    );
    print_plan(&r.plan());
    println!("Total          : Δv = {:.4} km/s, TOF = {}", r.total_dv, format_time(r.transfer_time));
}

fn print_h_point(r: &HPointResult) {
    println!("=== Apse Transfer from {} (angular momentum) ===", r.departure.label());
    println!(
        "Momenta        : h1 = {:.2}, h2 = {:.2}, h3 = {:.2}, h3' = {:.2} km²/s",
        r.h1, r.h2, r.h3, r.h3p
    );
    println!(
        "Speeds at A/B  : vA1 = {:.4}, vA3 = {:.4}, vB2 = {:.4}, vB3 = {:.4} km/s",
        r.v_a1, r.v_a3, r.v_b2, r.v_b3
    );
    println!(
        "Speeds at A'/B': vA'1 = {:.4}, vA'3' = {:.4}, vB'2 = {:.4}, vB'3' = {:.4} km/s",
        r.v_ap1, r.v_ap3p, r.v_bp2, r.v_bp3p
    );
    println!("Transfer orbit : a = {:.1} km, e = {:.6}", r.at, r.et);
    print_plan(&r.plan());
    println!("Total          : Δv = {:.4} km/s, TOF = {}", r.total_dv, format_time(r.transfer_time));
}

fn print_recommendation(r: &DepartureRecommendation) {
    print_h_point(&r.from_apogee);
    println!();
    print_h_point(&r.from_perigee);
    println!();
    println!(
        "Recommendation : depart from {} (saves {:.4} km/s)",
        r.recommended.label(),
        r.savings_km_s()
    );
}

fn print_comparison(sweep: &ComparisonTable) {
    println!("=== Hohmann vs Bi-Elliptic (r1 = {:.1} km, r_b = {}·r2) ===", sweep.r1_km, sweep.intermediate_factor);
    println!("{:>6} {:>14} {:>14} {:>12}", "ratio", "hohmann km/s", "bi-ell. km/s", "diff km/s");
    for row in &sweep.rows {
        println!(
            "{:>6.1} {:>14.4} {:>14.4} {:>+12.4}",
            row.ratio, row.hohmann_total_dv_km_s, row.bielliptic_total_dv_km_s, row.difference_km_s
        );
    }
    match sweep.crossover_ratio() {
        Some(ratio) => println!("Crossover      : bi-elliptic cheaper from ratio {ratio:.1}"),
        None => println!("Crossover      : none in range"),
    }
}

fn print_outcomes(outcomes: &[ProblemOutcome]) {
    for outcome in outcomes {
        let burns: Vec<String> = outcome.burns_km_s.iter().map(|dv| format!("{dv:.4}")).collect();
        println!("=== {} ({}) ===", outcome.name, outcome.kind);
        println!("Burns          : {} km/s", burns.join(", "));
        println!(
            "Total          : Δv = {:.4} km/s, TOF = {}",
            outcome.total_delta_v_km_s,
            format_time(outcome.transfer_time_s)
        );
    }
}
