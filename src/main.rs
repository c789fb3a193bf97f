// Command-line front end for the engine: decode, transform, encode.
//
// Usage mirrors the catalog one operation per invocation:
//   picture_engine invert <in> <out>
//   picture_engine grayscale <in> <out>
//   picture_engine rotate 90|180|270 <in> <out>
//   picture_engine flip H|V <in> <out>
//   picture_engine blend <in1> .. <inN> <out>
//   picture_engine blur <in> <out>
//   picture_engine mosaic <tileSize> <in1> .. <inN> <out>

use picture_engine::{codec, Operation, TransformPool};
use std::env;
use std::error::Error;
use std::process::ExitCode;

const USAGE: &str = "Usage: picture_engine <operation> [modifier] <inputs...> <output>";

/// Operations whose first argument is a modifier rather than a file path.
fn takes_modifier(name: &str) -> bool {
    matches!(name, "rotate" | "flip" | "mosaic")
}

async fn run(args: &[String]) -> Result<(), Box<dyn Error>> {
    let name = args.first().map(String::as_str).unwrap_or_default();
    let modifier = if takes_modifier(name) {
        Some(args.get(1).map(String::as_str).unwrap_or_default())
    } else {
        None
    };
    let operation = Operation::from_name(name, modifier)?;

    let paths = &args[if modifier.is_some() { 2 } else { 1 }..];
    let (output_path, input_paths) = match paths.split_last() {
        Some((output, inputs)) if !inputs.is_empty() => (output, inputs),
        _ => return Err(USAGE.into()),
    };
    if !operation.multi_input() && input_paths.len() != 1 {
        return Err(USAGE.into());
    }

    // Decode every input concurrently; image parsing is blocking work.
    let decode_tasks = input_paths.iter().cloned().map(|path| {
        tokio::task::spawn_blocking(move || {
            codec::load(&path).map_err(|e| format!("{path}: {e}"))
        })
    });
    let inputs = futures::future::try_join_all(decode_tasks)
        .await?
        .into_iter()
        .collect::<Result<Vec<_>, _>>()?;

    let pool = TransformPool::new();
    let result = pool.apply(operation, inputs).await?;
    codec::save(&result, output_path)?;
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();
    if args.is_empty() {
        eprintln!("{USAGE}");
        return ExitCode::FAILURE;
    }
    match run(&args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("picture_engine: {error}");
            ExitCode::FAILURE
        }
    }
}
