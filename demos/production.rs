use allocation::{evaluate, Config, Error, ProblemSpec, Report, SoloRule};

fn setup_logger() -> Result<(), fern::InitError> {
    let level = std::env::var("ALLOCATION_LOG")
        .ok()
        .and_then(|level| level.parse().ok())
        .unwrap_or(log::LevelFilter::Off);

    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!("{:5} | {}", record.level(), message))
        })
        .level(level)
        .chain(std::io::stdout())
        .apply()?;
    Ok(())
}

fn run(spec: &ProblemSpec, config: &Config) -> Result<(), Error> {
    let evaluation = evaluate(spec, config)?;
    println!("{}", Report::new(spec, &evaluation));
    Ok(())
}

fn main() {
    if let Err(err) = setup_logger() {
        eprintln!("failed to set up logging: {}", err);
    }

    // pants and jackets
    let pants_and_jackets = ProblemSpec::new(
        2,
        vec![-150.0, -100.0],
        vec![vec![4.0, 5.0], vec![3.0, 1.0]],
        vec![80.0, 80.0],
    );

    let two_products = ProblemSpec::new(
        2,
        vec![50.0, 40.0],
        vec![vec![2.0, 3.0], vec![2.0, 1.0]],
        vec![1500.0, 1000.0],
    );
    let tightest = Config {
        solo_rule: SoloRule::TightestConstraint,
        ..Config::default()
    };

    let runs = vec![
        (pants_and_jackets, Config::default()),
        (two_products, tightest),
    ];
    for (spec, config) in runs {
        if let Err(err) = spec.and_then(|spec| run(&spec, &config)) {
            eprintln!("error: {}", err);
            std::process::exit(1);
        }
    }
}
