/// The fetch pipeline: username → script → child process → decode → stdout.
use crate::cli::{Cli, OutputCtx, write_profile};
use crate::fetch::{
    FetchError, Invocation, decode_profile, resolve_interpreter, resolve_root, script_path,
};

/// Run `profilecli <USERNAME>`.
///
/// Writes the re-encoded profile to stdout on success and nothing on failure;
/// the caller reports the error.
///
/// # Errors
///
/// Returns `FetchError` on a wrong argument count, an unreadable working
/// directory, a failed or missing script, or undecodable script output.
pub fn run(cli: &Cli, ctx: &OutputCtx) -> Result<(), FetchError> {
    let username = cli.username()?;

    let root = resolve_root(cli.root.as_deref())?;
    let script = script_path(&root, cli.script.as_deref());
    let interpreter = resolve_interpreter(cli.interpreter.as_deref());
    log::debug!("root: {}", root.display());
    log::debug!("script: {}", script.display());
    log::debug!("interpreter: {interpreter}");

    let _t_run = ctx.timer("run_script");
    let stdout = Invocation {
        interpreter: &interpreter,
        script: &script,
        username,
    }
    .run()?;
    drop(_t_run);

    let _t_decode = ctx.timer("decode");
    let record = decode_profile(&stdout)?;
    drop(_t_decode);

    write_profile(&record, ctx)
}
