use super::InvocationRequest;

/// Argument vector handed to the inspector program, after its own leading
/// arguments:
/// `--cli <command> [server args...] --method <method> [--arguments <blob>]`.
pub fn build_argv(program_args: &[String], request: &InvocationRequest) -> Vec<String> {
    let server_args = request.target.server_args();
    let mut argv = Vec::with_capacity(program_args.len() + server_args.len() + 6);
    argv.extend(program_args.iter().cloned());
    argv.push("--cli".to_string());
    argv.push(request.target.command().to_string());
    argv.extend(server_args);
    argv.push("--method".to_string());
    argv.push(request.method.as_path());
    if let Some(arguments) = &request.arguments {
        argv.push("--arguments".to_string());
        argv.push(arguments.clone());
    }
    argv
}
