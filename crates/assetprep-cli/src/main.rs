use assetprep_lib::cli::{ResolvedCommand, parse_args, resolve_command, run_fetch, run_plan};
use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> color_eyre::Result<ExitCode> {
    color_eyre::install()?;

    let args = parse_args();
    let command = resolve_command(args.command)?;

    let exit_code = match command {
        ResolvedCommand::Fetch(params) => ExitCode::from(run_fetch(params).await?.outcome()),
        ResolvedCommand::Plan(params) => {
            run_plan(params).await?;
            ExitCode::SUCCESS
        }
    };

    Ok(exit_code)
}
