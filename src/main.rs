use clap::Parser;
use std::process;

use traffic_counter::utils::{setup_logging, validate_args};
use traffic_counter::{analyze_traffic_file, render_json, render_report, Args, OutputFormat};

fn run(args: &Args) -> anyhow::Result<String> {
    validate_args(args)?;

    let result = analyze_traffic_file(&args.input_file, args.top, args.window)?;

    match args.format {
        OutputFormat::Text => Ok(render_report(&result, args.top, args.window)),
        OutputFormat::Json => render_json(&result),
    }
}

fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if e.use_stderr() => {
            let _ = e.print();
            process::exit(1);
        }
        Err(e) => e.exit(),
    };
    setup_logging(args.verbose);

    match run(&args) {
        Ok(report) => println!("{}", report),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            process::exit(1);
        }
    }
}
